//! Per-bidder resolution of User, App and Site.
//!
//! For each bidder and entity the resolved value is built in three layers:
//!
//! 1. a copy of the shared request's entity (or an empty one),
//! 2. global FPD, if the bidder is allowed to receive it: the raw blob is
//!    merge-patched into `ext` as `{"data": <blob>}` and the structured array
//!    replaces the entity's `data` (`content.data` for site and app),
//! 3. the bidder's override: its named fields replace the current ones
//!    (even with empty values) and its `ext` is merge-patched on top.
//!
//! Each resolved entity owns all of its storage, so bidders can be built
//! concurrently afterwards without seeing each other's changes.

use crate::merge::merge_patch_bytes;
use crate::preprocess::{BidderFpdMap, ParticipationSet};
use crate::{EntityKey, FpdError, FpdResult, GlobalRawFpd, GlobalStructuredFpd, StructuredKey};
use fpd_types::{App, BidRequest, BidderName, Content, Data, FpdData, RawExt, Site, User};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Resolved entities per bidder.
pub type ResolvedFpdMap = BTreeMap<BidderName, FpdData>;

/// An entity that can receive first-party data.
trait FpdEntity: Clone + Default {
    const KEY: EntityKey;

    fn ext_mut(&mut self) -> &mut Option<RawExt>;

    fn ext(&self) -> Option<&RawExt>;

    /// Replaces the structured FPD array.
    fn set_structured_data(&mut self, data: Vec<Data>);

    /// Copies the override field set from `from`.
    fn replace_fields(&mut self, from: &Self);
}

impl FpdEntity for User {
    const KEY: EntityKey = EntityKey::User;

    fn ext_mut(&mut self) -> &mut Option<RawExt> {
        &mut self.ext
    }

    fn ext(&self) -> Option<&RawExt> {
        self.ext.as_ref()
    }

    fn set_structured_data(&mut self, data: Vec<Data>) {
        self.data = data;
    }

    fn replace_fields(&mut self, from: &Self) {
        self.keywords.clone_from(&from.keywords);
        self.gender.clone_from(&from.gender);
        self.yob = from.yob;
    }
}

impl FpdEntity for Site {
    const KEY: EntityKey = EntityKey::Site;

    fn ext_mut(&mut self) -> &mut Option<RawExt> {
        &mut self.ext
    }

    fn ext(&self) -> Option<&RawExt> {
        self.ext.as_ref()
    }

    fn set_structured_data(&mut self, data: Vec<Data>) {
        self.content.get_or_insert_with(Content::default).data = data;
    }

    fn replace_fields(&mut self, from: &Self) {
        self.name.clone_from(&from.name);
        self.domain.clone_from(&from.domain);
        self.cat.clone_from(&from.cat);
        self.sectioncat.clone_from(&from.sectioncat);
        self.pagecat.clone_from(&from.pagecat);
        self.page.clone_from(&from.page);
        self.search.clone_from(&from.search);
        self.keywords.clone_from(&from.keywords);
    }
}

impl FpdEntity for App {
    const KEY: EntityKey = EntityKey::App;

    fn ext_mut(&mut self) -> &mut Option<RawExt> {
        &mut self.ext
    }

    fn ext(&self) -> Option<&RawExt> {
        self.ext.as_ref()
    }

    fn set_structured_data(&mut self, data: Vec<Data>) {
        self.content.get_or_insert_with(Content::default).data = data;
    }

    fn replace_fields(&mut self, from: &Self) {
        self.name.clone_from(&from.name);
        self.bundle.clone_from(&from.bundle);
        self.domain.clone_from(&from.domain);
        self.storeurl.clone_from(&from.storeurl);
        self.cat.clone_from(&from.cat);
        self.sectioncat.clone_from(&from.sectioncat);
        self.pagecat.clone_from(&from.pagecat);
        self.ver.clone_from(&from.ver);
        self.keywords.clone_from(&from.keywords);
    }
}

/// Resolves the user for one bidder.
///
/// Returns `None` only when there is no base user, no override and no
/// applicable global data.
///
/// # Errors
///
/// [`FpdError::FpdMerge`] if the base `ext`, the global blob or the
/// override `ext` is not valid JSON.
pub fn resolve_user(
    override_user: Option<&User>,
    base: Option<&User>,
    global_raw: Option<&[u8]>,
    global_data: Option<&[Data]>,
    has_global_fpd: bool,
) -> FpdResult<Option<User>> {
    resolve_entity(override_user, base, global_raw, global_data, has_global_fpd)
}

/// Resolves the site for one bidder. See [`resolve_user`].
///
/// # Errors
///
/// [`FpdError::FpdMerge`] on malformed `ext` JSON.
pub fn resolve_site(
    override_site: Option<&Site>,
    base: Option<&Site>,
    global_raw: Option<&[u8]>,
    global_content_data: Option<&[Data]>,
    has_global_fpd: bool,
) -> FpdResult<Option<Site>> {
    resolve_entity(override_site, base, global_raw, global_content_data, has_global_fpd)
}

/// Resolves the app for one bidder. See [`resolve_user`].
///
/// # Errors
///
/// [`FpdError::FpdMerge`] on malformed `ext` JSON.
pub fn resolve_app(
    override_app: Option<&App>,
    base: Option<&App>,
    global_raw: Option<&[u8]>,
    global_content_data: Option<&[Data]>,
    has_global_fpd: bool,
) -> FpdResult<Option<App>> {
    resolve_entity(override_app, base, global_raw, global_content_data, has_global_fpd)
}

fn resolve_entity<E: FpdEntity>(
    override_entity: Option<&E>,
    base: Option<&E>,
    global_raw: Option<&[u8]>,
    global_data: Option<&[Data]>,
    has_global_fpd: bool,
) -> FpdResult<Option<E>> {
    let global_raw = global_raw.filter(|raw| has_global_fpd && !raw.is_empty());
    let global_data = global_data.filter(|data| has_global_fpd && !data.is_empty());

    if base.is_none() && override_entity.is_none() && global_raw.is_none() && global_data.is_none() {
        return Ok(None);
    }

    let mut entity = base.cloned().unwrap_or_default();

    if let Some(raw) = global_raw {
        merge_ext(entity.ext_mut(), &wrap_ext_data(raw), E::KEY)?;
    }
    if let Some(data) = global_data {
        entity.set_structured_data(data.to_vec());
    }

    if let Some(override_entity) = override_entity {
        entity.replace_fields(override_entity);
        if let Some(ext) = override_entity.ext().filter(|ext| !ext.is_empty()) {
            merge_ext(entity.ext_mut(), ext.as_bytes(), E::KEY)?;
        }
    }

    Ok(Some(entity))
}

/// Merge-patches `patch` into `ext`, treating a missing `ext` as `{}`.
fn merge_ext(ext: &mut Option<RawExt>, patch: &[u8], key: EntityKey) -> FpdResult<()> {
    let target = match ext.as_ref().filter(|ext| !ext.is_empty()) {
        Some(existing) => existing.as_bytes(),
        None => b"{}".as_slice(),
    };
    let merged = merge_patch_bytes(target, patch).map_err(|source| FpdError::FpdMerge { entity: key, source })?;
    *ext = Some(RawExt::from(merged));
    Ok(())
}

/// Wraps a raw global FPD blob as `{"data": <blob>}`.
fn wrap_ext_data(raw: &[u8]) -> Vec<u8> {
    let mut wrapped = Vec::with_capacity(raw.len() + 9);
    wrapped.extend_from_slice(b"{\"data\":");
    wrapped.extend_from_slice(raw);
    wrapped.push(b'}');
    wrapped
}

/// Resolves User, App and Site for every bidder in `bidder_fpd`.
///
/// Bidders in `participants` also receive the global FPD. The result is all
/// or nothing: the first merge failure aborts the whole pass.
///
/// # Errors
///
/// [`FpdError::FpdMerge`] from any bidder's resolution.
pub fn build_resolved_fpd_for_bidders(
    request: &BidRequest,
    bidder_fpd: &BidderFpdMap,
    global_raw: &GlobalRawFpd,
    global_structured: &GlobalStructuredFpd,
    participants: &ParticipationSet,
) -> FpdResult<ResolvedFpdMap> {
    let raw = |key: EntityKey| global_raw.get(&key).map(Vec::as_slice);
    let structured = |key: StructuredKey| global_structured.get(&key).map(Vec::as_slice);

    let mut resolved = ResolvedFpdMap::new();
    for (bidder, overrides) in bidder_fpd {
        let has_global_fpd = participants.contains(bidder);

        let resolve = || -> FpdResult<FpdData> {
            Ok(FpdData {
                user: resolve_user(
                    overrides.user.as_ref(),
                    request.user.as_ref(),
                    raw(EntityKey::User),
                    structured(StructuredKey::UserData),
                    has_global_fpd,
                )?,
                app: resolve_app(
                    overrides.app.as_ref(),
                    request.app.as_ref(),
                    raw(EntityKey::App),
                    structured(StructuredKey::AppContentData),
                    has_global_fpd,
                )?,
                site: resolve_site(
                    overrides.site.as_ref(),
                    request.site.as_ref(),
                    raw(EntityKey::Site),
                    structured(StructuredKey::SiteContentData),
                    has_global_fpd,
                )?,
            })
        };

        match resolve() {
            Ok(fpd) => {
                debug!("Resolved FPD for bidder {} (global={})", bidder, has_global_fpd);
                resolved.insert(bidder.clone(), fpd);
            }
            Err(e) => {
                warn!("Rejecting FPD for request: bidder {} failed to resolve: {}", bidder, e);
                return Err(e);
            }
        }
    }

    Ok(resolved)
}
