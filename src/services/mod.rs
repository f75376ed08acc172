//! Services module - Steam Web API access and DLC matching.
//!
//! The services are framework-agnostic and have no dependencies on the entry
//! point, making them testable and reusable.
//!
//! # Components
//!
//! - [`SteamClient`]: fetchers for the two endpoints this tool needs:
//!   - `appdetails` for the DLC appids of one application
//!   - `GetAppList` for the full appid→name catalog
//! - [`match_dlc`]: pure intersection of the DLC id list with the catalog,
//!   sorted ascending by id

pub mod matching;
pub mod steam;

pub use matching::match_dlc;
pub use steam::{SteamClient, SteamError};
