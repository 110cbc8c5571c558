//! YouStream - terminal client for the YouStream video-discovery service
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use youstream_app::config::{default_config_path, init_config_file, resolve_settings};
use youstream_core::prelude::*;

type AppResult<T> = color_eyre::Result<T>;

/// YouStream - discover videos that match your interests
#[derive(Parser, Debug)]
#[command(name = "youstream", version)]
#[command(about = "Discover videos that match your interests", long_about = None)]
struct Args {
    /// Backend base URL (overrides the config file and YOUSTREAM_API_URL)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Config file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> AppResult<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.init_config {
        let path = args
            .config
            .clone()
            .or_else(default_config_path)
            .ok_or_else(|| Error::config("No config directory available, pass --config PATH"))?;
        init_config_file(&path)?;
        println!("Config file: {}", path.display());
        return Ok(());
    }

    // Logs go to a file, the TUI owns stdout
    youstream_core::logging::init()?;

    let settings = resolve_settings(args.config.as_deref(), args.api_url.as_deref());
    let result = youstream_tui::run(settings).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    info!("YouStream exiting");
    Ok(result?)
}
