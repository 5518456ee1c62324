// src/org/cache.rs

//! The org list, cached as the raw `force:org:list` response.

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::{Result, SfdxError};
use crate::exec::{run_command, SfdxBackend, SfdxResponse};
use crate::fs::FileSystem;

/// Name of the cache file inside the data dir.
pub const ORGS_FILE: &str = "orgs.json";

pub const ORG_LIST_SUBCOMMAND: &str = "force:org:list";

pub fn orgs_file_path(data_dir: &Path) -> PathBuf {
    data_dir.join(ORGS_FILE)
}

/// Return the org list, from `<data_dir>/orgs.json` when present.
///
/// With `force`, or when the cache is missing or unreadable, the list is
/// fetched from sfdx and the whole response is written back to the cache.
/// A non-zero status is [`SfdxError::OrgsUnavailable`] and leaves the
/// cache untouched.
pub async fn load_orgs<B>(
    fs: &dyn FileSystem,
    backend: &B,
    data_dir: &Path,
    force: bool,
) -> Result<Value>
where
    B: SfdxBackend + ?Sized,
{
    let path = orgs_file_path(data_dir);
    debug!(path = %path.display(), force, "loading orgs");

    if !force && fs.is_file(&path) {
        match read_cached(fs, &path) {
            Ok(cached) => {
                info!(path = %path.display(), "using cached org list");
                return Ok(cached.result);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "org cache unreadable; refetching");
            }
        }
    }

    info!("retrieving org list from sfdx");
    let response = run_command(backend, ORG_LIST_SUBCOMMAND, "").await?;
    if response.status != 0 {
        return Err(SfdxError::OrgsUnavailable(
            response.message_or_empty().to_string(),
        ));
    }

    let bytes = serde_json::to_vec(&response)?;
    fs.write(&path, &bytes)?;
    debug!(path = %path.display(), bytes = bytes.len(), "org cache written");

    Ok(response.result)
}

fn read_cached(fs: &dyn FileSystem, path: &Path) -> Result<SfdxResponse> {
    let contents = fs.read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
