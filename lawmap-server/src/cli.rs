//! Définition et implémentation des commandes CLI
//!
//! - `serve` (défaut): service HTTP des lois
//! - `popup`: vue carte sans interface, clics simulés
//! - `anchors`: export GeoJSON des points d'ancrage

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use tracing::{info, warn};

use lawmap::{CentroidStrategy, CountryCollection, MapView};
use lawmap_server::{export, server, LawClient, ServerConfig};

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Host address to bind to (défaut : env LAWMAP_HOST / 0.0.0.0)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (défaut : env LAWMAP_PORT, PORT / 5001)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// JSON law file served as-is (défaut : env LAWMAP_LAWS_FILE / data/privacyLaws.json)
    #[arg(long)]
    pub laws_file: Option<PathBuf>,

    /// Disable permissive CORS headers
    #[arg(long)]
    pub no_cors: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the privacy-law table over HTTP (default)
    Serve(ServeArgs),

    /// Click countries on a headless map view and print their popups
    Popup {
        /// Country display names, clicked in order (exact, case-sensitive)
        #[arg(required = true)]
        countries: Vec<String>,

        /// Country boundaries (GeoJSON FeatureCollection)
        #[arg(long, default_value = "data/countries.geo.json")]
        geojson: PathBuf,

        /// Base URL of the law service
        #[arg(long, default_value = "http://localhost:5001")]
        url: String,

        /// Representative point: vertex-average or area-weighted
        #[arg(long, default_value_t = CentroidStrategy::VertexAverage)]
        strategy: CentroidStrategy,

        /// Render popups without waiting for the law table
        #[arg(long)]
        no_wait: bool,

        /// Print popups as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Export one representative point per country as GeoJSON (no server required)
    Anchors {
        /// Country boundaries (GeoJSON FeatureCollection)
        #[arg(long, default_value = "data/countries.geo.json")]
        geojson: PathBuf,

        /// Output GeoJSON file
        #[arg(short, long)]
        output: PathBuf,

        /// Representative point: vertex-average or area-weighted
        #[arg(long, default_value_t = CentroidStrategy::VertexAverage)]
        strategy: CentroidStrategy,
    },
}

/// Exécute la commande serve
pub async fn cmd_serve(args: ServeArgs) -> Result<()> {
    let mut config = ServerConfig::from_env();
    config.apply_overrides(args.host, args.port, args.laws_file, args.no_cors);

    server::serve(&config).await
}

/// Exécute la commande popup
pub async fn cmd_popup(
    names: &[String],
    geojson: &Path,
    url: &str,
    strategy: CentroidStrategy,
    no_wait: bool,
    json: bool,
) -> Result<()> {
    let countries = load_countries(geojson).await?;
    let client = LawClient::new(url)?;
    let mut view = load_view(client, strategy, no_wait).await?;

    for block in render_popups(&mut view, &countries, names, json)? {
        if json {
            println!("{}", block);
        } else {
            println!("{}\n", block);
        }
    }

    Ok(())
}

/// Crée la vue et lance le chargement unique de la table des lois.
///
/// Avec `no_wait`, la tâche de chargement est détachée et la vue reste en
/// attente: les popups affichent "Loading...".
async fn load_view(client: LawClient, strategy: CentroidStrategy, no_wait: bool) -> Result<MapView> {
    let mut view = MapView::new(strategy);

    let fetch = tokio::spawn(async move { client.fetch().await });
    if no_wait {
        info!("Rendering without waiting for the law table");
        return Ok(view);
    }

    let result = fetch.await.context("Law table fetch task failed")?;
    if let Err(e) = &result {
        warn!(error = %e, "Law table unavailable");
    }
    view.on_laws_loaded(result);

    Ok(view)
}

/// Clique les pays dans l'ordre et rend une popup par clic
///
/// Un nom inconnu est ignoré; une géométrie sans point d'ancrage donne une
/// ligne "no popup".
fn render_popups(
    view: &mut MapView,
    countries: &CountryCollection,
    names: &[String],
    json: bool,
) -> Result<Vec<String>> {
    let mut blocks = Vec::with_capacity(names.len());

    for name in names {
        let Some(country) = countries.find(name) else {
            warn!(country = %name, "Unknown country, not clicked");
            continue;
        };

        view.click(country);

        let block = match view.popup() {
            Some(popup) if json => serde_json::to_string(&popup)?,
            Some(popup) => popup.to_string(),
            None => format!("{}: no popup ({} geometry)", name, country.kind()),
        };
        blocks.push(block);
    }

    Ok(blocks)
}

/// Exécute la commande anchors
pub async fn cmd_anchors(geojson: &Path, output: &Path, strategy: CentroidStrategy) -> Result<()> {
    let countries = load_countries(geojson).await?;

    let skipped = export::export_anchors(&countries, strategy, output)?;

    println!("=== Anchors ===");
    println!("Source: {}", geojson.display());
    println!("Strategy: {}", strategy);
    println!("Exported: {}", countries.len() - skipped);
    println!("Skipped: {}", skipped);
    println!("Output: {}", output.display());

    Ok(())
}

async fn load_countries(path: &Path) -> Result<CountryCollection> {
    let text = tokio::fs::read_to_string(path)
        .await
        .context(format!("Failed to read GeoJSON file: {}", path.display()))?;

    let countries =
        CountryCollection::from_geojson(&text).context("Failed to parse country GeoJSON")?;

    info!(
        path = %path.display(),
        countries = countries.len(),
        skipped = countries.errors.len(),
        "Countries loaded"
    );

    Ok(countries)
}
