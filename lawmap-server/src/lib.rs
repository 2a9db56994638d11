//! # lawmap-server
//!
//! Service de recherche des lois sur la vie privée et vue carte sans interface.
//!
//! ## Features
//!
//! - Service HTTP (`axum`): `/`, `/privacylaws`, `/api/privacylaws`, `/api/map-settings`
//! - Client de la table des lois (`reqwest`)
//! - Export GeoJSON des points d'ancrage
//!
//! ## Usage CLI
//!
//! ```bash
//! # Démarrer le service (défaut)
//! lawmap-server --port 5001 --laws-file data/privacyLaws.json
//!
//! # Simuler des clics sur la carte
//! lawmap-server popup France Germany --url http://localhost:5001
//!
//! # Exporter les points d'ancrage
//! lawmap-server anchors --output anchors.geojson
//! ```

pub mod client;
pub mod config;
pub mod export;
pub mod server;

pub use client::LawClient;
pub use config::ServerConfig;
