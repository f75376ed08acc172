use crate::models::{AppEntry, DlcRecord};
use std::collections::{HashMap, HashSet};

/// Build the (id, name) records for every DLC id the catalog knows.
///
/// Ids absent from the catalog are dropped; there is no name to write for
/// them. When the catalog lists an appid more than once the last entry wins.
/// The output is sorted ascending by id so repeated runs produce identical
/// config diffs.
pub fn match_dlc(dlc_ids: &[u32], catalog: &[AppEntry]) -> Vec<DlcRecord> {
    let wanted: HashSet<u32> = dlc_ids.iter().copied().collect();

    let mut names: HashMap<u32, &str> = HashMap::new();
    for app in catalog {
        if wanted.contains(&app.appid) {
            names.insert(app.appid, app.name.as_str());
        }
    }

    let mut records: Vec<DlcRecord> = names
        .into_iter()
        .map(|(id, name)| DlcRecord {
            id,
            name: name.to_owned(),
        })
        .collect();
    records.sort_unstable_by_key(|record| record.id);
    records
}
