// src/org/defaults.rs

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::errors::Result;
use crate::exec::{run_command, SfdxBackend};

pub const CONFIG_LIST_SUBCOMMAND: &str = "force:config:list";

/// Default usernames configured in sfdx.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrgDefaults {
    pub username: Option<String>,
    pub devhub_username: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ConfigItem {
    #[serde(alias = "name", default)]
    key: String,
    #[serde(default)]
    value: Value,
}

/// Read `defaultusername` and `defaultdevhubusername` (or their newer
/// `target-org` / `target-dev-hub` names) from `force:config:list`.
///
/// Entries are keyed by `key` (sfdx) or `name` (sf); entries that match
/// neither are skipped. A non-zero status or an empty list yields empty
/// defaults.
pub async fn get_config<B>(backend: &B) -> Result<OrgDefaults>
where
    B: SfdxBackend + ?Sized,
{
    debug!("getting config settings");
    let response = run_command(backend, CONFIG_LIST_SUBCOMMAND, "").await?;

    let mut defaults = OrgDefaults::default();
    if response.status != 0 {
        debug!(status = response.status, "config list failed; no defaults");
        return Ok(defaults);
    }

    let entries = match &response.result {
        Value::Array(entries) => entries.as_slice(),
        _ => &[],
    };

    for entry in entries {
        let item = match ConfigItem::deserialize(entry) {
            Ok(item) => item,
            Err(err) => {
                debug!(%err, "skipping unreadable config entry");
                continue;
            }
        };
        let Some(value) = item.value.as_str().map(str::to_string) else {
            continue;
        };
        match item.key.as_str() {
            "defaultusername" | "target-org" => defaults.username = Some(value),
            "defaultdevhubusername" | "target-dev-hub" => defaults.devhub_username = Some(value),
            _ => {}
        }
    }

    info!(
        username = ?defaults.username,
        devhub = ?defaults.devhub_username,
        "org defaults"
    );
    Ok(defaults)
}
