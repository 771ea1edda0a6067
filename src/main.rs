//! Parley - A terminal editor for dialogue transcripts.
//!
//! # Usage
//!
//! ```bash
//! parley interview.tsv
//! parley --join-speakers interview.tsv
//! parley --undo-limit 500 --save
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use parley::app::App;
use parley::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};

/// A terminal editor for two-column dialogue transcripts
#[derive(Parser, Debug)]
#[command(name = "parley", version, about, long_about = None)]
struct Cli {
    /// Transcript file to edit (created on first save if missing)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Join consecutive lines from the same speaker when loading
    #[arg(long)]
    join_speakers: bool,

    /// Key events between swap-file autosaves (0 disables)
    #[arg(long, value_name = "N")]
    autosave_interval: Option<u32>,

    /// Maximum number of undo steps kept
    #[arg(long, value_name = "N")]
    undo_limit: Option<usize>,

    /// Write debug logs to a file (also: PARLEY_LOG)
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
        eprintln!("Saved defaults to {}", global_path.display());
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    parley::logging::init(effective.log_file.as_deref())?;
    tracing::debug!(?effective, "effective flags");

    if cli.file.is_none() && (cli.save || cli.clear) {
        return Ok(());
    }

    // Run the application
    let mut app = App::new(cli.file)
        .with_join_speakers(effective.join_speakers)
        .with_autosave_interval(effective.autosave_interval())
        .with_undo_limit(effective.undo_limit());

    app.run().context("Application error")
}
