//! Command-line host: loads every localization asset under a directory.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use mod_localization_merger::LocalizationManager;
use mod_localization_merger::assets::{
    AssetSource,
    DirectoryAssetSource,
};
use mod_localization_merger::config::ConfigManager;
use mod_localization_merger::localization::LoadOutcome;
use tracing_subscriber::EnvFilter;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "mod-localization-merger")]
#[command(version)]
#[command(about = "Merge mod localization payloads into the shared translation table")]
struct Cli {
    /// Directory holding `Localization.json` and `.localization.json`
    #[arg(long, value_name = "DIR")]
    mods_dir: PathBuf,

    /// Directory scanned for localization assets (defaults to the mods directory)
    #[arg(value_name = "ASSET_DIR")]
    asset_dir: Option<PathBuf>,
}

/// Installs logging, runs, and maps the outcome to an exit code.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Loads every asset under the asset directory into the shared table.
fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config_manager = ConfigManager::new(cli.mods_dir);
    config_manager.load_settings()?;

    let table_path = config_manager.table_path();
    let asset_dir = cli.asset_dir.unwrap_or_else(|| config_manager.mods_directory().to_path_buf());
    let source = DirectoryAssetSource::new(asset_dir, config_manager.get_settings())?
        .skipping(&table_path)
        .skipping(config_manager.config_path());

    let mut manager = LocalizationManager::new(table_path);
    let (mut loaded, mut skipped) = (0_usize, 0_usize);

    for asset in source.assets()? {
        match manager.load_localization(&asset.name, &asset.bytes) {
            Ok(LoadOutcome::Loaded(_)) => loaded += 1,
            Ok(LoadOutcome::NothingToDo | LoadOutcome::Unsupported) => skipped += 1,
            Err(e) if e.is_content_error() => {
                tracing::warn!(asset = %asset.name, "Skipping localization: {e}");
                skipped += 1;
            }
            Err(e) => return Err(format!("Failed to load localization '{}': {e}", asset.name).into()),
        }
    }

    let registry = manager.registry();
    tracing::info!(
        loaded,
        skipped,
        sets = registry.len(),
        table = %manager.table_path().display(),
        "Finished loading localizations"
    );
    Ok(())
}
