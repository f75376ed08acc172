use crate::models::{AppDetailsResponse, AppEntry, AppListResponse};
use anyhow::{Context, Result};
use std::time::Duration;
use thiserror::Error;

const APP_DETAILS_URL: &str = "https://store.steampowered.com/api/appdetails";
const APP_LIST_URL: &str = "https://api.steampowered.com/ISteamApps/GetAppList/v2/";

/// Fixed timeout applied to both Steam Web API calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Errors that can occur while talking to the Steam Web API
#[derive(Error, Debug)]
pub enum SteamError {
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to parse response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("appdetails response has no entry for appid {0}")]
    MissingApp(String),

    #[error("appdetails request for appid {0} was not successful")]
    Unsuccessful(String),
}

/// Client for the two Steam Web API endpoints this tool needs.
///
/// One underlying HTTP client, constructed once per run, with the same fixed
/// timeout on both calls. No auth, no retries.
pub struct SteamClient {
    http: reqwest::Client,
}

impl SteamClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http })
    }

    /// Fetch the DLC appids of a single application.
    ///
    /// The ids come back in whatever order the store sent them; an empty list
    /// is a valid outcome, not an error.
    pub async fn fetch_dlc_ids(&self, appid: &str) -> Result<Vec<u32>, SteamError> {
        let url = format!("{APP_DETAILS_URL}?appids={appid}");
        tracing::info!("Requesting appdetails: {}", url);

        let body = self.get_text(&url).await?;
        tracing::info!("Received appdetails JSON, size: {}", body.len());

        parse_dlc_ids(appid, &url, &body)
    }

    /// Fetch the entire Steam catalog (appid and name for every app).
    ///
    /// Single response body; the endpoint has no pagination.
    pub async fn fetch_app_list(&self) -> Result<Vec<AppEntry>, SteamError> {
        tracing::info!("Requesting app list");

        let body = self.get_text(APP_LIST_URL).await?;
        tracing::info!("Received app list JSON, size: {}", body.len());

        parse_app_list(APP_LIST_URL, &body)
    }

    /// Issue a GET and read the whole body as text.
    ///
    /// Transport failures and timeouts surface here; what the body contains
    /// is the parser's problem.
    async fn get_text(&self, url: &str) -> Result<String, SteamError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| SteamError::Fetch {
                url: url.to_owned(),
                source,
            })?;

        response.text().await.map_err(|source| SteamError::Fetch {
            url: url.to_owned(),
            source,
        })
    }
}

fn parse_dlc_ids(appid: &str, url: &str, body: &str) -> Result<Vec<u32>, SteamError> {
    let decoded: AppDetailsResponse =
        serde_json::from_str(body).map_err(|source| SteamError::Decode {
            url: url.to_owned(),
            source,
        })?;

    let entry = decoded
        .get(appid)
        .ok_or_else(|| SteamError::MissingApp(appid.to_owned()))?;

    if !entry.success {
        return Err(SteamError::Unsuccessful(appid.to_owned()));
    }

    Ok(entry.data.dlc.clone())
}

fn parse_app_list(url: &str, body: &str) -> Result<Vec<AppEntry>, SteamError> {
    let decoded: AppListResponse =
        serde_json::from_str(body).map_err(|source| SteamError::Decode {
            url: url.to_owned(),
            source,
        })?;

    Ok(decoded.applist.apps)
}
