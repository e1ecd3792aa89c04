//! Instance-wide commands: health, version, stats, dump.

use std::io::Write;

use crate::console::Console;
use crate::error::Result;
use crate::output::{format_stats, format_task_info, format_version};
use crate::session::Session;

pub async fn health<W: Write>(session: &Session, console: &mut Console<W>) -> Result<()> {
    if session.client().health().is_healthy().await {
        console.success("✅ Meilisearch is healthy")?;
    } else {
        console.error("❌ Failed connect to Meilisearch, Host or API-Key is invalid")?;
    }
    Ok(())
}

pub async fn version<W: Write>(session: &Session, console: &mut Console<W>) -> Result<()> {
    let version = session.client().version().await?;
    console.block(&format_version(&version))?;
    Ok(())
}

pub async fn stats<W: Write>(session: &Session, console: &mut Console<W>) -> Result<()> {
    let stats = session.client().stats().await?;
    console.block(&format_stats(&stats))?;
    Ok(())
}

pub async fn dump<W: Write>(session: &Session, console: &mut Console<W>) -> Result<()> {
    let info = session.client().create_dump().await?;
    console.block(&format_task_info(&info))?;
    Ok(())
}
