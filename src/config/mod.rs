use crate::models::DlcRecord;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use ini::Ini;
use thiserror::Error;

/// Name of the CreamAPI config file, expected beside the executable.
pub const CONFIG_FILE_NAME: &str = "cream_api.ini";

/// Name of the log file, written beside the executable and truncated each run.
pub const LOG_FILE_NAME: &str = "creamapi-dlc-updater.log";

const STEAM_SECTION: &str = "steam";
const APPID_KEY: &str = "appid";
const DLC_SECTION: &str = "dlc";

/// Errors that can occur while reading or writing the config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Load {
        path: Utf8PathBuf,
        #[source]
        source: ini::Error,
    },

    #[error("config file {path} has no appid under [steam]")]
    MissingAppId { path: Utf8PathBuf },

    #[error("failed to write config file {path}: {source}")]
    Persist {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Store for the CreamAPI INI document.
///
/// Loads the whole document once, mutates it in memory and persists it back
/// to its original path in one write. A failure anywhere before [`save`]
/// leaves the file on disk untouched.
///
/// [`save`]: ConfigStore::save
pub struct ConfigStore {
    path: Utf8PathBuf,
    doc: Ini,
}

impl ConfigStore {
    /// Load the config file at `path`.
    pub fn load<P: AsRef<Utf8Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref().to_path_buf();

        let doc = Ini::load_from_file(&path).map_err(|source| ConfigError::Load {
            path: path.clone(),
            source,
        })?;

        tracing::info!("Loaded config from {}", path);
        Ok(Self { path, doc })
    }

    /// Read the appid from the `[steam]` section.
    ///
    /// An absent section, absent key or blank value all fail the same way;
    /// the caller has no appid to work with in any of those cases.
    pub fn appid(&self) -> Result<String, ConfigError> {
        self.doc
            .section(Some(STEAM_SECTION))
            .and_then(|section| section.get(APPID_KEY))
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(ToOwned::to_owned)
            .ok_or_else(|| ConfigError::MissingAppId {
                path: self.path.clone(),
            })
    }

    /// Replace the `[dlc]` section with one `{id}={name}` pair per record.
    ///
    /// The old section is dropped wholesale first so entries from a previous
    /// appid or removed DLC never survive a rewrite. Only touches the
    /// in-memory document; call [`save`](ConfigStore::save) to persist.
    pub fn replace_dlc_section(&mut self, records: &[DlcRecord]) {
        self.doc.delete(Some(DLC_SECTION));

        for record in records {
            self.doc
                .set_to(Some(DLC_SECTION), record.id.to_string(), record.name.clone());
            tracing::info!("DLC {} = {}", record.id, record.name);
        }
    }

    /// The `[dlc]` section as (key, value) pairs in file order.
    pub fn dlc_entries(&self) -> Vec<(String, String)> {
        self.doc
            .section(Some(DLC_SECTION))
            .map(|section| {
                section
                    .iter()
                    .map(|(key, value)| (key.to_owned(), value.to_owned()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Persist the whole document back to its original path.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.doc
            .write_to_file(&self.path)
            .map_err(|source| ConfigError::Persist {
                path: self.path.clone(),
                source,
            })?;

        tracing::info!("Saved config to {}", self.path);
        Ok(())
    }

    /// Path this store was loaded from.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

/// Directory of the running executable.
pub fn exe_dir() -> Result<Utf8PathBuf> {
    let exe = std::env::current_exe().context("Failed to resolve executable path")?;
    let exe = Utf8PathBuf::try_from(exe).context("Executable path is not valid UTF-8")?;
    let dir = exe
        .parent()
        .context("Executable path has no parent directory")?;
    Ok(dir.to_path_buf())
}

/// Default location of `cream_api.ini`, beside the executable.
pub fn default_config_path() -> Result<Utf8PathBuf> {
    Ok(exe_dir()?.join(CONFIG_FILE_NAME))
}

/// Default location of the log file, beside the executable.
pub fn default_log_path() -> Result<Utf8PathBuf> {
    Ok(exe_dir()?.join(LOG_FILE_NAME))
}
