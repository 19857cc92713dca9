use florarec_types::{Criteria, DisplayPlantRecord};

/// Current screen plus the payload that screen requires.
///
/// Modeled as a sum type so invalid combinations — `Details` without a
/// selection, `Results` without submitted criteria — are unrepresentable.
/// Transitioning away from a screen drops its payload with the variant,
/// which is what prevents stale display on re-entry.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationState {
    Landing,
    Input,
    Results {
        criteria: Criteria,
        plants: Vec<DisplayPlantRecord>,
    },
    Details {
        criteria: Criteria,
        plants: Vec<DisplayPlantRecord>,
        /// Always a member of `plants`; enforced at the select transition.
        selected: DisplayPlantRecord,
    },
}

impl NavigationState {
    /// Screen name for diagnostics and transition errors.
    pub fn screen_name(&self) -> &'static str {
        match self {
            NavigationState::Landing => "landing",
            NavigationState::Input => "input",
            NavigationState::Results { .. } => "results",
            NavigationState::Details { .. } => "details",
        }
    }

    pub fn is_landing(&self) -> bool {
        matches!(self, NavigationState::Landing)
    }

    pub fn is_input(&self) -> bool {
        matches!(self, NavigationState::Input)
    }
}
