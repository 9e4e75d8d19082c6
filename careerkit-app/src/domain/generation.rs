use super::{Category, Profile};
use serde::{Deserialize, Serialize};

/// Snapshot handed to the generation pipeline. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub category: Category,
    pub profile: Profile,
}

/// Output of one generation: the raw model text plus the processed forms
/// used for preview and export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub raw: String,
    pub html: String,
    pub plain_text: String,
}

/// Tracks the "alternative version" allowance for the currently selected
/// category. The counter resets whenever the category changes.
#[derive(Debug, Clone, PartialEq)]
pub struct RegenerationBudget {
    category: Category,
    used: u32,
}

impl RegenerationBudget {
    pub const MAX_REGENERATIONS: u32 = 2;

    pub fn new(category: Category) -> Self {
        Self { category, used: 0 }
    }

    /// Switches the tracked category, resetting the counter if it changed.
    pub fn select(&mut self, category: Category) {
        if self.category != category {
            *self = Self::new(category);
        }
    }

    pub fn remaining(&self) -> u32 {
        Self::MAX_REGENERATIONS.saturating_sub(self.used)
    }

    /// Consumes one regeneration. Returns false (a no-op) once the cap
    /// for this category selection is exhausted.
    pub fn try_consume(&mut self) -> bool {
        if self.used >= Self::MAX_REGENERATIONS {
            return false;
        }
        self.used += 1;
        true
    }
}

/// Client state after a confirmed profile reset: demo defaults, locked
/// form, no output, and a full regeneration allowance for the current
/// category. The page applies this snapshot and removes the storage entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ResetState {
    pub profile: Profile,
    pub unlocked: bool,
    pub result: Option<GenerationResult>,
    pub error: Option<String>,
    pub budget: RegenerationBudget,
}

impl ResetState {
    pub fn for_category(category: Category) -> Self {
        Self {
            profile: Profile::demo(),
            unlocked: false,
            result: None,
            error: None,
            budget: RegenerationBudget::new(category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn third_regeneration_is_a_no_op() {
        let mut budget = RegenerationBudget::new(Category::CoverLetter);
        assert!(budget.try_consume());
        assert!(budget.try_consume());
        assert!(!budget.try_consume());
        assert_eq!(budget.remaining(), 0);
    }

    #[test]
    fn category_change_resets_the_counter() {
        let mut budget = RegenerationBudget::new(Category::CoverLetter);
        budget.try_consume();
        budget.try_consume();
        budget.select(Category::FollowUpEmail);
        assert_eq!(budget.remaining(), RegenerationBudget::MAX_REGENERATIONS);
        assert!(budget.try_consume());
    }

    #[test]
    fn reselecting_the_same_category_keeps_the_counter() {
        let mut budget = RegenerationBudget::new(Category::CoverLetter);
        budget.try_consume();
        budget.select(Category::CoverLetter);
        assert_eq!(budget.remaining(), 1);
    }

    #[test]
    fn reset_restores_documented_defaults() {
        let state = ResetState::for_category(Category::FollowUpEmail);
        assert_eq!(state.profile, Profile::demo());
        assert!(!state.unlocked);
        assert!(state.result.is_none());
        assert!(state.error.is_none());
        assert_eq!(
            state.budget.remaining(),
            RegenerationBudget::MAX_REGENERATIONS
        );
    }
}
