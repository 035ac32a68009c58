//! Extraction of global first-party data from the shared request.
//!
//! Global FPD comes in two shapes. Raw blobs live under
//! `{site,app,user}.ext.data` and are cut out of the request bytes before
//! parsing. Structured arrays (`user.data`, `site.content.data`,
//! `app.content.data`) are moved out of the parsed request. Either way the
//! shared request no longer carries the data afterwards, so only bidders that
//! are explicitly allowed to see it receive it during resolution.

use crate::jsonutil::find_and_drop_element;
use crate::{EntityKey, FpdResult, StructuredKey};
use fpd_types::{BidRequest, Data};
use std::collections::BTreeMap;
use tracing::debug;

/// Raw `ext.data` bytes per entity. Entities without `ext.data` have no entry.
pub type GlobalRawFpd = BTreeMap<EntityKey, Vec<u8>>;

/// Structured data arrays moved out of the request. Empty arrays have no entry.
pub type GlobalStructuredFpd = BTreeMap<StructuredKey, Vec<Data>>;

/// Removes `{site,app,user}.ext.data` from a raw request.
///
/// Returns the stripped request bytes and the removed blobs. All other `ext`
/// keys and sibling fields are left as they were.
///
/// # Errors
///
/// [`FpdError::MalformedDocument`](crate::FpdError::MalformedDocument) if the
/// request is not valid JSON or one of `site`, `app`, `user` or their `ext`
/// is not an object.
pub fn extract_global_fpd(request: &[u8]) -> FpdResult<(Vec<u8>, GlobalRawFpd)> {
    let mut global = GlobalRawFpd::new();
    let mut request = request.to_vec();

    for key in EntityKey::ALL {
        let (stripped, extracted) = find_and_drop_element(&request, &key.ext_data_path())?;
        request = stripped;
        if let Some(data) = extracted {
            debug!("Extracted {} bytes of global FPD from {}.ext.data", data.len(), key);
            global.insert(key, data);
        }
    }

    Ok((request, global))
}

/// Moves the structured FPD arrays out of `request`.
///
/// The arrays are taken, not copied: after this call the returned map owns
/// their storage and the request's fields are empty.
#[must_use]
pub fn extract_structured_fpd(mut request: BidRequest) -> (BidRequest, GlobalStructuredFpd) {
    let mut structured = GlobalStructuredFpd::new();

    if let Some(user) = request.user.as_mut() {
        take_into(&mut structured, StructuredKey::UserData, &mut user.data);
    }
    if let Some(content) = request.site.as_mut().and_then(|site| site.content.as_mut()) {
        take_into(&mut structured, StructuredKey::SiteContentData, &mut content.data);
    }
    if let Some(content) = request.app.as_mut().and_then(|app| app.content.as_mut()) {
        take_into(&mut structured, StructuredKey::AppContentData, &mut content.data);
    }

    (request, structured)
}

fn take_into(structured: &mut GlobalStructuredFpd, key: StructuredKey, data: &mut Vec<Data>) {
    if data.is_empty() {
        return;
    }
    let data = std::mem::take(data);
    debug!("Extracted {} structured FPD records for {}", data.len(), key);
    structured.insert(key, data);
}
