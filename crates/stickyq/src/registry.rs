//! # Content-Type Registry
//!
//! The pinned flag is offered to a configured set of content types. Every one
//! of them behaves the same, so the registry maps all of them to a single
//! stateless [`QueryAugmenter`] and one [`AttributeAccessor`].
//!
//! Content types outside the configured list are passed through untouched:
//! their queries are returned as-is and their edits never write the flag.
//!
//! ## Edit-time write path
//!
//! [`ContentTypeRegistry::apply_edit`] turns a submitted edit form into a call
//! to [`AttributeAccessor::set`]. The caller has already verified the request
//! token and that the user may edit the item; this layer does neither.

use crate::attributes::{AttributeAccessor, TRUE_ENCODING};
use crate::config::StickyConfig;
use crate::error::Result;
use crate::model::ItemId;
use crate::query::{QueryAugmenter, QuerySpecification, RequestParams};
use crate::store::MetaStore;
use tracing::debug;

/// A saved edit form, reduced to what the pinned flag needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSubmission<'a> {
    pub item_id: ItemId,
    pub content_type: &'a str,
    /// Value of the pinned checkbox; `None` when unchecked (not submitted).
    pub checkbox: Option<&'a str>,
    /// Autosaves never touch the flag.
    pub autosave: bool,
}

impl<'a> EditSubmission<'a> {
    pub fn new(item_id: ItemId, content_type: &'a str, checkbox: Option<&'a str>) -> Self {
        Self {
            item_id,
            content_type,
            checkbox,
            autosave: false,
        }
    }

    pub fn autosave(mut self) -> Self {
        self.autosave = true;
        self
    }

    /// Only an exact `"1"` checks the box.
    pub fn pinned(&self) -> bool {
        self.checkbox == Some(TRUE_ENCODING)
    }
}

/// What [`ContentTypeRegistry::apply_edit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The flag was written with this value.
    Saved(bool),
    SkippedAutosave,
    SkippedContentType,
}

pub struct ContentTypeRegistry<S: MetaStore> {
    content_types: Vec<String>,
    augmenter: QueryAugmenter,
    accessor: AttributeAccessor<S>,
}

impl<S: MetaStore> ContentTypeRegistry<S> {
    pub fn new(config: &StickyConfig, store: S) -> Self {
        Self {
            content_types: config.content_types().to_vec(),
            augmenter: QueryAugmenter::from_config(config),
            accessor: AttributeAccessor::new(store),
        }
    }

    pub fn content_types(&self) -> &[String] {
        &self.content_types
    }

    pub fn is_target(&self, content_type: &str) -> bool {
        self.content_types.iter().any(|t| t == content_type)
    }

    pub fn augmenter(&self) -> &QueryAugmenter {
        &self.augmenter
    }

    pub fn accessor(&self) -> &AttributeAccessor<S> {
        &self.accessor
    }

    /// Augment a listing query for `content_type`.
    ///
    /// Untargeted content types get `base` back unchanged.
    pub fn augment(
        &self,
        content_type: &str,
        base: &QuerySpecification,
        params: &RequestParams,
    ) -> QuerySpecification {
        if !self.is_target(content_type) {
            debug!(content_type, "content type not targeted, query unchanged");
            return base.clone();
        }
        self.augmenter.augment(base, params)
    }

    /// The pinned field for an item, or `None` when the type is not targeted.
    pub fn pinned(&self, content_type: &str, id: &ItemId) -> Result<Option<bool>> {
        if !self.is_target(content_type) {
            return Ok(None);
        }
        self.accessor.get(id).map(Some)
    }

    /// Persist the pinned checkbox from a saved edit form.
    pub fn apply_edit(&self, submission: &EditSubmission<'_>) -> Result<EditOutcome> {
        if submission.autosave {
            return Ok(EditOutcome::SkippedAutosave);
        }
        if !self.is_target(submission.content_type) {
            return Ok(EditOutcome::SkippedContentType);
        }

        let pinned = submission.pinned();
        self.accessor.set(&submission.item_id, pinned)?;
        Ok(EditOutcome::Saved(pinned))
    }
}
