mod cli;
mod remote;
mod render;

use std::time::Duration;

use clap::Parser;
use pet_core::{Session, Verb};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};
use crate::remote::Remote;

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

/// Runs off the input loop so a slow server never stalls redraws.
async fn report(remote: Remote, verb: Verb) {
    match remote.send(verb).await {
        Ok(envelope) => println!("  server: {} ({:?})", envelope.message, envelope.status),
        Err(e) => println!("  server error: {e}"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let session = Session::with_restore_delay(Duration::from_millis(args.restore_delay_ms));
    let timeout = Duration::from_millis(args.timeout_ms);
    let remote = args.server.as_deref().map(|url| Remote::new(url, timeout));
    let mut changes = session.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print!("{}", render::help());
    print!("{}", render::screen(&session.snapshot().await));

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Command::parse(&line) {
                    Ok(Command::Send(verb)) => {
                        session.send(verb).await;
                        if let Some(remote) = &remote {
                            tokio::spawn(report(remote.clone(), verb));
                        }
                    }
                    Ok(Command::Help) => print!("{}", render::help()),
                    Ok(Command::Quit) => break,
                    Ok(Command::Nothing) => {}
                    Err(e) => println!("{e}"),
                }
            }
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
                print!("{}", render::screen(&session.snapshot().await));
            }
        }
    }
    Ok(())
}
