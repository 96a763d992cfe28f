//! mdpad - A terminal markdown scratchpad with a live preview.
//!
//! # Usage
//!
//! ```bash
//! mdpad
//! mdpad --preview inline --no-stats
//! mdpad --log-file mdpad.log --save
//! notes=$(mdpad)   # press `v` in a full preview to hand the markdown back
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use mdpad::app::App;
use mdpad::config::{
    ConfigFlags, PreviewStyle, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, parse_flag_tokens, save_config_flags,
};
use mdpad::host::{PasteTarget, StdoutPaste, SystemClipboard};
use mdpad::logging;

/// A terminal markdown scratchpad with a live preview
#[derive(Parser, Debug)]
#[command(name = "mdpad", version, about, long_about = None)]
struct Cli {
    /// What Ctrl+S opens: an inline preview or a pushed snapshot
    #[arg(long, value_enum, value_name = "STYLE")]
    preview: Option<PreviewStyle>,

    /// Hide the statistics panel in previews
    #[arg(long)]
    no_stats: bool,

    /// Always copy through the terminal (OSC 52) instead of pbcopy
    #[arg(long)]
    osc52: bool,

    /// Write debug logs to a file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    logging::init(effective.log_file.as_deref())?;
    tracing::debug!(?effective, "effective flags");

    let clipboard = SystemClipboard::default().with_osc52(effective.osc52);
    let mut app = App::new()
        .with_preview_style(effective.preview.unwrap_or_default())
        .with_stats_visible(!effective.no_stats)
        .with_clipboard(Box::new(clipboard));

    if let Some(markdown) = app.run().context("Application error")? {
        StdoutPaste
            .paste(&markdown)
            .context("Failed to write markdown to stdout")?;
    }
    Ok(())
}
