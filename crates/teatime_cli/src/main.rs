//! teatime: a terminal journal with daily notes and periodic summaries.

mod tui;

use anyhow::{Context, Result};
use log::info;
use teatime_core::{init_logging, AppConfig, FsNoteStore};

fn main() -> Result<()> {
    let config = AppConfig::resolve()?;
    config.ensure_dirs()?;
    init_logging(&config.log_level, &config.log_dir)?;
    info!("event=app_start module=cli status=ok");

    let store = FsNoteStore::open(&config.root)
        .with_context(|| format!("failed to open journal at {}", config.root.display()))?;
    tui::run(store)
}
