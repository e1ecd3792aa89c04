//! Search command - basic keyword search against one index.

use std::io::Write;

use clap::Args;
use meilishell_client::SearchRequest;

use super::required;
use crate::console::Console;
use crate::error::Result;
use crate::session::Session;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Index UID
    pub index: Option<String>,

    /// Query words; all remaining words are joined with spaces
    pub query: Vec<String>,

    /// Maximum number of hits
    #[arg(long)]
    pub limit: Option<u32>,

    /// Number of hits to skip
    #[arg(long)]
    pub offset: Option<u32>,

    /// Filter expression, e.g. "genre = horror"
    #[arg(long)]
    pub filter: Option<String>,
}

pub async fn run<W: Write>(
    args: SearchArgs,
    session: &Session,
    console: &mut Console<W>,
) -> Result<()> {
    let index = required(args.index, "index uid is required 'search {uid} [query]'")?;
    let request = SearchRequest {
        q: (!args.query.is_empty()).then(|| args.query.join(" ")),
        limit: args.limit,
        offset: args.offset,
        filter: args.filter,
    };

    let response = session.client().search(index).query(&request).await?;

    let total = response
        .estimated_total_hits
        .map(|n| format!(" of ~{}", n))
        .unwrap_or_default();
    console.notice(format!(
        "{} hits{} in {}ms",
        response.hits.len(),
        total,
        response.processing_time_ms
    ))?;
    for hit in &response.hits {
        console.line(serde_json::to_string_pretty(hit).unwrap_or_else(|_| hit.to_string()))?;
        console.divider()?;
    }
    Ok(())
}
