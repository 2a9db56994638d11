//! Point d'entrée CLI pour lawmap-server

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

// Charger .env au démarrage
fn load_env() {
    // Chercher .env dans le répertoire courant
    if dotenvy::dotenv().is_err() {
        // Essayer depuis le répertoire du binaire
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                let _ = dotenvy::from_path(dir.join(".env"));
            }
        }
    }
}

mod cli;

use cli::{Commands, ServeArgs};

/// Carte des lois sur la vie privée: service HTTP et outils
#[derive(Parser)]
#[command(name = "lawmap-server")]
#[command(author, version)]
#[command(about = "Serve the privacy-law table (default) and inspect the world map headlessly")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Augmenter la verbosité (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Mode silencieux
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Sous-commande (défaut: serve)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Arguments du service (commande par défaut)
    #[command(flatten)]
    serve: ServeArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    load_env();

    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Some(Commands::Serve(args)) => cli::cmd_serve(args).await?,
        Some(Commands::Popup {
            countries,
            geojson,
            url,
            strategy,
            no_wait,
            json,
        }) => cli::cmd_popup(&countries, &geojson, &url, strategy, no_wait, json).await?,
        Some(Commands::Anchors {
            geojson,
            output,
            strategy,
        }) => cli::cmd_anchors(&geojson, &output, strategy).await?,
        None => cli::cmd_serve(cli.serve).await?,
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
