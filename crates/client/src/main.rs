//! `feud` binary: the producer's show controller.
//!
//! This binary is the composition root. It reads configuration (command
//! line over environment over `show.toml`), builds the controller through
//! `client-bootstrap` and hands it to a front-end:
//!
//! ```bash
//! # Interactive control panel
//! cargo run -p feud-client
//!
//! # Replay a script headlessly, mirroring display commands to a feed file
//! FEUD_PRESENTATION_FEED=feed.jsonl cargo run -p feud-client -- --script show.txt
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use client_bootstrap::{BootstrapConfig, RuntimeBuilder};
use client_frontend_cli::{CliConfig, CliFrontend, ScriptFrontend, logging};
use feud_client::Client;

#[derive(Debug, Parser)]
#[command(name = "feud", version, about = "Producer controller for the feud show")]
struct Args {
    /// Content directory holding show.toml, audio.ron and prompts/
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Replay producer commands from a file (`-` for stdin) instead of
    /// opening the control panel
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Keep replaying after a rejected script line
    #[arg(long, requires = "script")]
    keep_going: bool,

    /// Fixed seed for prompt draws and chaos cues
    #[arg(long)]
    seed: Option<u64>,

    /// Chance in [0, 1] that answer cues are swapped for a random variant
    #[arg(long, value_name = "CHANCE")]
    chaos: Option<f32>,
}

impl Args {
    fn apply(&self, config: &mut BootstrapConfig) {
        if let Some(dir) = &self.data_dir {
            config.data_dir = Some(dir.clone());
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(chance) = self.chaos {
            config.chaos_chance = Some(chance);
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut bootstrap_config = BootstrapConfig::from_env();
    args.apply(&mut bootstrap_config);
    let cli_config = CliConfig::from_env();

    // The file guard must outlive the client so buffered lines are flushed.
    let _log_guard = match &args.script {
        Some(_) => {
            logging::setup_stderr_logging()?;
            None
        }
        None => Some(logging::setup_logging(cli_config.log_dir.as_deref())?),
    };

    tracing::info!("Starting feud client");
    let setup = match RuntimeBuilder::new(bootstrap_config).build() {
        Ok(setup) => setup,
        Err(err) => {
            tracing::error!(error = ?err, "startup failed");
            return Err(err);
        }
    };
    tracing::info!(
        data_dir = %setup.content.data_dir.display(),
        prompts = setup.content.store.len(),
        "controller built"
    );

    let builder = Client::builder().controller(setup.controller);
    let client = match &args.script {
        Some(path) => builder
            .frontend(ScriptFrontend::open(path)?.keep_going(args.keep_going))
            .build()?,
        None => builder.frontend(CliFrontend::new(cli_config)).build()?,
    };

    client.run()?;
    tracing::info!("Client shutdown complete");
    Ok(())
}
