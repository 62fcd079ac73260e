// SPDX-License-Identifier: MPL-2.0
//! One-shot lazy loading of deferred recipe thumbnails.
//!
//! Cards register their deferred image URL; when a card first scrolls into
//! view its URL is promoted exactly once and the card stops being observed.
//! Visibility is computed from the scroll offset against a fixed row height.

use crate::recipe::RecipeId;
use std::collections::{HashMap, HashSet};
use std::ops::Range;

#[derive(Debug, Default)]
pub struct LazyLoader {
    deferred: HashMap<RecipeId, String>,
    promoted: HashSet<RecipeId>,
}

impl LazyLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a deferred source. Already-promoted ids are not re-observed.
    pub fn register(&mut self, id: RecipeId, url: impl Into<String>) {
        if !self.promoted.contains(&id) {
            self.deferred.insert(id, url.into());
        }
    }

    /// Marks an element visible. Returns the deferred URL on the first call
    /// for that id and `None` afterwards (one-shot per element).
    pub fn mark_visible(&mut self, id: &RecipeId) -> Option<String> {
        let url = self.deferred.remove(id)?;
        self.promoted.insert(id.clone());
        Some(url)
    }

    #[must_use]
    pub fn is_promoted(&self, id: &RecipeId) -> bool {
        self.promoted.contains(id)
    }

    #[must_use]
    pub fn observed_count(&self) -> usize {
        self.deferred.len()
    }

    /// Forgets everything, e.g. when a fresh recipe list replaces the old.
    pub fn clear(&mut self) {
        self.deferred.clear();
        self.promoted.clear();
    }
}

/// Index range of rows intersecting the viewport, given the scroll offset.
/// One extra row of lookahead on each side so images start loading just
/// before their card scrolls in.
#[must_use]
pub fn visible_range(offset_y: f32, viewport_height: f32, row_height: f32, count: usize) -> Range<usize> {
    if row_height <= 0.0 || count == 0 {
        return 0..0;
    }
    let first = (offset_y / row_height).floor() as usize;
    let last = ((offset_y + viewport_height) / row_height).ceil() as usize;
    let start = first.saturating_sub(1).min(count);
    let end = (last + 1).min(count);
    start..end
}
