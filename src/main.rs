mod cli;
mod menu;
mod report;

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use log::{error, info};

use crate::cli::Cli;
use crate::report::{write_session, Session};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.text {
        Some(text) => {
            info!("One-shot run over {} characters", text.chars().count());
            let session = Session::run(text).map_err(|e| {
                error!("Could not encode input: {}", e);
                e
            })?;
            write_session(&mut out, &session, cli.bits_per_symbol)
                .context("failed to write report")?;
        }
        None => {
            let stdin = io::stdin();
            menu::run(&mut stdin.lock(), &mut out, cli.bits_per_symbol)?;
        }
    }

    out.flush().context("failed to flush stdout")?;
    Ok(())
}
