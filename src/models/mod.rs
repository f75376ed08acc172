//! Data models for the two Steam Web API responses and the derived output.
//!
//! - [`AppDetailsResponse`]: appdetails payload, keyed by the requested appid
//!   as a string
//! - [`AppListResponse`]: the full appid→name catalog
//! - [`DlcRecord`]: one matched DLC, the unit the config writer consumes

pub mod api;

pub use api::{AppDetailsData, AppDetailsEntry, AppDetailsResponse, AppEntry, AppList, AppListResponse, DlcRecord};
