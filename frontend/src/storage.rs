use anyhow::{anyhow, Context, Result};
use common::reading::{self, LoadResult, STORAGE_KEY};

/// Reads the persisted reading list, awaited once per screen activation.
/// Store failures are logged and reported as `Malformed`; this surface
/// never raises.
pub async fn load_readings() -> LoadResult {
    match raw_entry() {
        Ok(raw) => reading::decode_readings(raw.as_deref()),
        Err(e) => {
            log::error!("storage read failed: {e:#}");
            LoadResult::Malformed
        }
    }
}

fn raw_entry() -> Result<Option<String>> {
    let window = web_sys::window().context("no window object")?;
    let storage = window
        .local_storage()
        .map_err(|e| anyhow!("local storage unavailable: {e:?}"))?
        .context("local storage disabled")?;
    storage
        .get_item(STORAGE_KEY)
        .map_err(|e| anyhow!("failed to read {STORAGE_KEY}: {e:?}"))
}
