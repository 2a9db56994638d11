//! Configuration du service

use std::path::PathBuf;

/// Configuration du service de recherche des lois
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Fichier JSON servi tel quel par `/privacylaws`
    pub laws_file: PathBuf,

    /// Autoriser toutes les origines (front navigateur)
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5001,
            laws_file: PathBuf::from("data/privacyLaws.json"),
            cors: true,
        }
    }
}

impl ServerConfig {
    /// Charge la configuration depuis les variables d'environnement
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Charge la configuration depuis une source de variables quelconque
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("LAWMAP_HOST").unwrap_or(defaults.host),
            port: lookup("LAWMAP_PORT")
                .or_else(|| lookup("PORT"))
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            laws_file: lookup("LAWMAP_LAWS_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.laws_file),
            cors: lookup("LAWMAP_CORS")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.cors),
        }
    }

    /// Applique les options de la ligne de commande (prioritaires sur l'env)
    pub fn apply_overrides(
        &mut self,
        host: Option<String>,
        port: Option<u16>,
        laws_file: Option<PathBuf>,
        no_cors: bool,
    ) {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(laws_file) = laws_file {
            self.laws_file = laws_file;
        }
        if no_cors {
            self.cors = false;
        }
    }

    /// Adresse d'écoute `host:port`, résolue au bind
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
