//! Factory functions for creating use cases with AppDeps

use crate::deps::AppDeps;
use crate::usecases::{LoadProjectList, ThemePreference, VisibilityAnimator};

pub fn load_project_list(deps: &AppDeps) -> LoadProjectList {
    LoadProjectList::new(deps.repository_source.clone())
}

pub fn visibility_animator(deps: &AppDeps) -> VisibilityAnimator {
    VisibilityAnimator::new(deps.visibility_observer.clone())
}

pub fn theme_preference(deps: &AppDeps) -> ThemePreference {
    ThemePreference::new(deps.preference_store.clone())
}
