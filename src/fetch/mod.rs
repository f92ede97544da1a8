//! Feed fetch orchestrator.
//!
//! One asynchronous operation per application load: retrieve the exhibitor
//! feed, decode it, and hand it to the merge pipeline. This boundary never
//! errors to its caller; any failure degrades to the untouched skeleton so
//! the map always has something valid to render.

use crate::error::FetchResult;
use crate::logs::{log_info, log_warning};
use crate::merge::{merge_or_fallback, MergeOutcome};
use crate::models::Hall;
use crate::parser::decode_bytes;

/// Fetch the exhibitor feed and merge it into the skeleton.
///
/// The full response body is read before any parsing begins. Network
/// failures, non-OK statuses, and unusable documents all resolve to
/// [`MergeOutcome::FellBack`] carrying a clone of the skeleton. There is no
/// timeout: a hung fetch hangs the loading state, matching the product's
/// current behavior.
pub async fn load_catalog(url: &str, skeleton: &[Hall]) -> MergeOutcome {
    log_info(format!("fetching exhibitor feed: {url}"));

    match fetch_text(url).await {
        Ok(text) => merge_or_fallback(&text, skeleton),
        Err(err) => {
            log_warning(format!("feed fetch failed, showing bare floor plan: {err}"));
            MergeOutcome::FellBack {
                halls: skeleton.to_vec(),
                reason: err.to_string(),
            }
        }
    }
}

/// GET the feed and decode the body, tolerating legacy Chinese encodings.
async fn fetch_text(url: &str) -> FetchResult<String> {
    let response = reqwest::get(url).await?.error_for_status()?;
    let bytes = response.bytes().await?;
    Ok(decode_bytes(&bytes))
}
