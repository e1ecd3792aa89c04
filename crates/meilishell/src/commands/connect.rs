//! Connect command - switch to another Meilisearch instance.

use std::io::Write;

use clap::Args;
use tracing::debug;

use super::required;
use crate::console::Console;
use crate::error::Result;
use crate::session::{ConnectOptions, Session};

#[derive(Args, Debug)]
pub struct ConnectArgs {
    /// Meilisearch URL, e.g. http://localhost:7700
    pub host: Option<String>,

    /// API key or master key for the new host
    #[arg(long)]
    pub api_key: Option<String>,
}

/// Replace the session on success; on failure report and keep the old one.
pub async fn run<W: Write>(
    args: ConnectArgs,
    session: &mut Session,
    console: &mut Console<W>,
) -> Result<()> {
    let host = required(args.host, "host is required 'connect {host} --api-key {key}'")?;
    let options = ConnectOptions {
        host,
        api_key: args.api_key,
        timeout: session.timeout(),
    };

    match Session::connect(&options).await {
        Ok(next) => {
            *session = next;
            console.clear()?;
            console.block(&session.banner())?;
        }
        Err(e) => {
            debug!(host = %options.host, error = %e, "connect failed");
            console.error(&e)?;
        }
    }
    Ok(())
}
