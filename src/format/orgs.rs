// src/format/orgs.rs

use serde::Deserialize;
use serde_json::Value;

use crate::errors::Result;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrgList {
    #[serde(default)]
    non_scratch_orgs: Vec<OrgRecord>,
    #[serde(default)]
    scratch_orgs: Vec<OrgRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrgRecord {
    #[serde(default)]
    alias: Option<String>,
    #[serde(default)]
    username: String,
    #[serde(default)]
    connected_status: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    is_default_username: bool,
    #[serde(default)]
    is_default_dev_hub_username: bool,
    #[serde(default)]
    expiration_date: Option<String>,
}

impl OrgRecord {
    fn line(&self) -> String {
        let mut markers = String::new();
        if self.is_default_username {
            markers.push_str("(D)");
        }
        if self.is_default_dev_hub_username {
            markers.push_str("(H)");
        }
        if !markers.is_empty() {
            markers.push(' ');
        }

        let label = match self.alias.as_deref().filter(|a| !a.is_empty()) {
            Some(alias) => format!("{alias} - {}", self.username),
            None => self.username.clone(),
        };

        // Non-scratch orgs report `connectedStatus`, scratch orgs `status`.
        let state = self
            .connected_status
            .as_deref()
            .or(self.status.as_deref())
            .unwrap_or("Unknown");

        match self.expiration_date.as_deref() {
            Some(expires) => format!("  {markers}{label} [{state}], expires {expires}"),
            None => format!("  {markers}{label} [{state}]"),
        }
    }
}

/// One line per org, grouped into non-scratch and scratch orgs.
///
/// `(D)` marks the default username and `(H)` the default dev hub.
pub fn format_org_list(result: &Value) -> Result<Vec<String>> {
    let orgs = OrgList::deserialize(result)?;

    if orgs.non_scratch_orgs.is_empty() && orgs.scratch_orgs.is_empty() {
        return Ok(vec!["No orgs found".to_string()]);
    }

    let mut lines = Vec::new();
    if !orgs.non_scratch_orgs.is_empty() {
        lines.push("Non-scratch orgs:".to_string());
        lines.extend(orgs.non_scratch_orgs.iter().map(OrgRecord::line));
    }
    if !orgs.scratch_orgs.is_empty() {
        lines.push("Scratch orgs:".to_string());
        lines.extend(orgs.scratch_orgs.iter().map(OrgRecord::line));
    }
    Ok(lines)
}
