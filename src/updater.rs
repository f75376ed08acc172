//! The whole-run update pipeline.
//!
//! One linear pass: read the appid from the config, fetch its DLC ids, fetch
//! the catalog, match names, rewrite the `[dlc]` section. Every error is
//! fatal to the run; the empty-DLC case is the one benign early exit.

use crate::config::ConfigStore;
use crate::services::{SteamClient, match_dlc};
use anyhow::Result;
use camino::Utf8Path;
use std::collections::HashSet;

/// How a run ended, short of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The `[dlc]` section was rebuilt with this many entries.
    Updated(usize),
    /// The app has no DLC; the config was left untouched.
    NoDlc,
}

/// Run one update pass against the config file at `config_path`.
pub async fn run_update(config_path: &Utf8Path) -> Result<UpdateOutcome> {
    let mut store = ConfigStore::load(config_path)?;

    // Fails before any network call when the appid is missing
    let appid = store.appid()?;
    tracing::info!("Read appid: {}", appid);

    let client = SteamClient::new()?;

    let dlc_ids = client.fetch_dlc_ids(&appid).await?;
    if dlc_ids.is_empty() {
        tracing::warn!("No DLCs found for this appid");
        return Ok(UpdateOutcome::NoDlc);
    }
    tracing::info!("Found {} DLC appids", dlc_ids.len());

    let catalog = client.fetch_app_list().await?;

    let records = match_dlc(&dlc_ids, &catalog);
    let requested: HashSet<u32> = dlc_ids.iter().copied().collect();
    let dropped = requested.len() - records.len();
    if dropped > 0 {
        tracing::debug!("{} DLC appids are not in the catalog and were dropped", dropped);
    }

    tracing::info!("Writing DLC section to config");
    store.replace_dlc_section(&records);
    store.save()?;

    Ok(UpdateOutcome::Updated(records.len()))
}
