//! creamapi-dlc-updater - Steam DLC metadata fetcher for CreamAPI configs
//!
//! Main entry point. One run is a single linear pass:
//!
//! 1. Resolve `cream_api.ini` and the log file beside the executable
//! 2. Initialize logging (truncated file + console)
//! 3. Read the appid from `[steam]` in the config
//! 4. Fetch the app's DLC ids from the store, then the full catalog
//! 5. Match ids to names and rewrite the `[dlc]` section
//!
//! Any config, fetch, decode or persist error is fatal and exits non-zero.
//! An app without DLC logs a warning and exits cleanly.

use anyhow::Result;
use creamapi_dlc_updater::updater::UpdateOutcome;
use creamapi_dlc_updater::{APP_NAME, VERSION, config, logging, updater};

fn main() -> Result<()> {
    let config_path = config::default_config_path()?;
    let log_path = config::default_log_path()?;

    // Setup logging with both file and console output
    let _guard = logging::setup_logging(&log_path)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);
    tracing::info!("Config path: {}", config_path);

    // The run is strictly sequential, so a single-threaded runtime is enough
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(updater::run_update(&config_path));

    match result {
        Ok(UpdateOutcome::Updated(count)) => {
            tracing::info!("Wrote {} DLC entries", count);
            tracing::info!("Process finished successfully");
            Ok(())
        }
        Ok(UpdateOutcome::NoDlc) => {
            tracing::info!("Process finished");
            Ok(())
        }
        Err(err) => {
            tracing::error!("Update failed: {:#}", err);
            Err(err)
        }
    }
}
