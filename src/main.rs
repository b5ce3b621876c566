//! Mapscout - headless map scoring over inventory snapshots
//!
//! Loads `Mapscout Settings.yaml`, applies the active (or requested) profile to
//! the maps in a YAML snapshot, and prints one line per map with its verdict,
//! score and overlay label. The same library drives a live overlay; this
//! binary only swaps the live item source for a file.
//!
//! # Execution Flow
//!
//! 1. Initialize logging → logs/mapscout.<date>
//! 2. Load settings from the data directory into a StateManager
//! 3. Optionally switch profile
//! 4. Analyze the snapshot and print the overlay plans

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use mapscout::metrics::Metrics;
use mapscout::services::{MapAnalyzer, SnapshotSource, plan_overlay};
use mapscout::{APP_NAME, ConfigManager, ProfileStore, StateManager, VERSION};
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "mapscout", version, about = "Score map items against filter profiles")]
struct Cli {
    /// Directory holding Mapscout Settings.yaml
    #[arg(long, default_value = "Mapscout Data")]
    data_dir: Utf8PathBuf,

    /// YAML snapshot of the inventory and stash panels
    #[arg(long, required_unless_present = "list_profiles")]
    snapshot: Option<Utf8PathBuf>,

    /// Profile to use instead of the one stored in settings
    #[arg(long)]
    profile: Option<String>,

    /// Print the available profiles and exit
    #[arg(long)]
    list_profiles: bool,

    /// Save the resulting active filter as the Custom profile
    #[arg(long)]
    save_custom: bool,

    #[arg(long, default_value = "logs")]
    log_dir: String,

    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_profiles {
        for name in ProfileStore::list_profiles() {
            println!("{name}");
        }
        return Ok(());
    }

    let _guard = mapscout::logging::setup_logging_with_console(
        &cli.log_dir,
        "mapscout",
        cli.debug,
        cli.debug,
    )?;
    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let config_manager = ConfigManager::new(&cli.data_dir)?;
    let settings = config_manager.load_settings()?;

    let state_manager = StateManager::new();
    state_manager
        .load_from_settings(&settings)
        .context("Invalid filter criteria in settings")?;

    if let Some(profile) = &cli.profile {
        state_manager.select_profile(profile);
    }

    let config = state_manager.read(|s| s.active_config.clone());
    tracing::info!("Active profile: {}", config.name());

    let snapshot_path = cli.snapshot.as_ref().context("--snapshot is required")?;
    let source = SnapshotSource::load(snapshot_path)?;

    let metrics = Arc::new(Metrics::new());
    let mut analyzer = MapAnalyzer::new(
        Duration::from_millis(settings.general.refresh_interval_ms),
        metrics.clone(),
    );

    let (highlighting, overlay) =
        state_manager.read(|s| (s.highlighting_enabled, s.overlay_enabled));
    let maps = analyzer.analyze(&source, &config);

    println!("Profile: {}", config.name());
    for map in maps {
        let plan = plan_overlay(map, &config, &settings, highlighting, overlay);
        let verdict = if map.result.meets_criteria { "PASS" } else { "skip" };
        let flags = match (map.result.has_good_mods, map.result.has_bad_mods) {
            (true, true) => " [good+bad]",
            (true, false) => " [good]",
            (false, true) => " [bad]",
            (false, false) => "",
        };
        let label = plan.label.map(|l| l.text).unwrap_or_default();

        println!(
            "{:?}#{:<3} {:<4} {:>5}  {:<28} {}{}",
            map.location.container,
            map.location.slot,
            verdict,
            map.result.score,
            map.record.name,
            label,
            flags
        );
    }

    let passing = maps.iter().filter(|m| m.result.meets_criteria).count();
    state_manager.record_analysis(maps.len(), passing);
    println!("{} maps, {} passing", maps.len(), passing);

    if cli.save_custom {
        state_manager.save_current_as_custom();
        let custom = state_manager.read(|s| s.profiles.custom().clone());
        config_manager.save_custom_profile(&custom)?;
        println!("Saved '{}' as Custom profile", config.name());
    }

    metrics.log_summary();
    tracing::info!("Done");

    Ok(())
}
