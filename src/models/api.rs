use serde::Deserialize;
use std::collections::HashMap;

/// Response from `store.steampowered.com/api/appdetails?appids={id}`.
///
/// The store keys the payload by the requested appid as a string, so the top
/// level is a map even though only one entry is ever requested.
pub type AppDetailsResponse = HashMap<String, AppDetailsEntry>;

#[derive(Debug, Clone, Deserialize)]
pub struct AppDetailsEntry {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub data: AppDetailsData,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppDetailsData {
    /// DLC appids of the requested application. Absent for apps without DLC.
    #[serde(default)]
    pub dlc: Vec<u32>,
}

/// Response from `api.steampowered.com/ISteamApps/GetAppList/v2/`.
///
/// The full Steam catalog in a single body; no pagination.
#[derive(Debug, Clone, Deserialize)]
pub struct AppListResponse {
    pub applist: AppList,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppList {
    #[serde(default)]
    pub apps: Vec<AppEntry>,
}

/// One catalog entry: appid paired with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppEntry {
    pub appid: u32,
    pub name: String,
}

/// A DLC the store response and the catalog agree on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DlcRecord {
    pub id: u32,
    pub name: String,
}
