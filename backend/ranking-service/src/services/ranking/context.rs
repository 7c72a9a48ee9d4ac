use std::collections::HashSet;
use video_core::{UserPreferences, VideoRecord};

/// Per-request view of the viewer, built once per ranking call
#[derive(Debug, Clone, Default)]
pub struct UserContext<'p> {
    /// Distinct categories the viewer has watched
    history_categories: HashSet<i64>,
    preferences: Option<&'p UserPreferences>,
}

impl<'p> UserContext<'p> {
    pub fn new(history: &[VideoRecord], preferences: Option<&'p UserPreferences>) -> Self {
        let history_categories = history.iter().filter_map(|v| v.category_id).collect();

        Self {
            history_categories,
            preferences,
        }
    }

    /// History entries without a category never match anything
    pub fn has_watched_category(&self, category_id: Option<i64>) -> bool {
        category_id.is_some_and(|id| self.history_categories.contains(&id))
    }

    pub fn prefers_mobile(&self) -> bool {
        self.preferences.is_some_and(UserPreferences::prefers_mobile)
    }

    pub fn watched_category_count(&self) -> usize {
        self.history_categories.len()
    }
}
