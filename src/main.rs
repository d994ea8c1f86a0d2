mod app;
mod ui;

use std::path::PathBuf;

use app::KaraokeSearchApp;
use clap::Parser;
use eframe::egui;
use karaoke_search::{AppState, CatalogCache, Scope};

/// Karaoke song search for patrons.
#[derive(Parser, Debug)]
#[command(name = "karaoke-search")]
#[command(version)]
struct Args {
    /// Song list to search (.csv, .json or .parquet)
    #[arg(short, long, default_value = "SongList.csv", env = "KARAOKE_CATALOG")]
    catalog: PathBuf,

    /// Initially selected search scope
    #[arg(short, long, value_enum, default_value_t = Scope::All)]
    scope: Scope,
}

fn main() -> eframe::Result {
    env_logger::init();
    let args = Args::parse();

    let cache = CatalogCache::new(args.catalog);
    let state = AppState::from_cache(&cache, args.scope);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Karaoke Song Search",
        options,
        Box::new(|_cc| Ok(Box::new(KaraokeSearchApp::new(state)))),
    )
}
