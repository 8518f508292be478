//! Feature Showcase State

use crate::content::FEATURES;

/// Tracks the feature card under the pointer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FeatureShowcase {
    active: Option<usize>,
}

impl FeatureShowcase {
    pub const fn new() -> Self {
        Self { active: None }
    }

    pub const fn active(&self) -> Option<usize> {
        self.active
    }

    /// Replace the active card; `None` on pointer-leave.
    ///
    /// Indices past the end of the grid clear the highlight.
    pub fn set_active(&mut self, index: Option<usize>) {
        self.active = match index {
            Some(i) if i >= FEATURES.len() => {
                tracing::warn!(index = i, count = FEATURES.len(), "feature index out of range");
                None
            }
            other => other,
        };
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}
