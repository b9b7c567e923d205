use contracts::domain::company::{FilterCriteria, SortSpec};
use leptos::prelude::*;

/// Rendering hint only: never affects the derived sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    Table,
}

/// Current UI selections for the directory page. Plain value state, replaced
/// wholesale on every edit; deliberately not persisted across reloads.
#[derive(Clone, Debug, Default)]
pub struct DirectoryListState {
    pub criteria: FilterCriteria,
    pub sort: SortSpec,
    pub view: ViewMode,
}

pub fn create_state() -> RwSignal<DirectoryListState> {
    RwSignal::new(DirectoryListState::default())
}
