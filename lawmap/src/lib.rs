//! # lawmap
//!
//! Carte du monde interactive des lois sur la vie privée: un clic sur un pays
//! ouvre une popup avec la loi, l'autorité de contrôle et une description.
//!
//! ## Features
//!
//! - Chargement des pays depuis une FeatureCollection GeoJSON
//! - Point d'ancrage par moyenne des sommets ou centroïde pondéré (`geo`)
//! - Table des lois par nom de pays, recherche exacte
//! - État de la vue (chargement, sélection, style, popup) sans dépendance UI
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lawmap::{CentroidStrategy, CountryCollection, LawTable, MapView};
//!
//! let countries = CountryCollection::from_geojson(&geojson_text)?;
//! let mut view = MapView::new(CentroidStrategy::VertexAverage);
//! view.on_laws_loaded(LawTable::from_json(&laws_text));
//!
//! if let Some(france) = countries.find("France") {
//!     view.click(france);
//! }
//! if let Some(popup) = view.popup() {
//!     println!("{}", popup);
//! }
//! ```

pub mod error;
pub mod feature;
pub mod geometry;
pub mod law;
pub mod popup;
pub mod settings;
pub mod style;
pub mod view;

pub use error::LawmapError;
pub use feature::{CountryCollection, CountryFeature};
pub use geometry::{representative_point, CentroidStrategy, LatLng};
pub use law::{LawRecord, LawTable};
pub use popup::{Popup, PopupBody};
pub use settings::MapSettings;
pub use style::{Style, StyleRule};
pub use view::{FetchState, MapView};
