use contracts::domain::a001_skip::{CatalogQuery, Skip, SkipSelection};
use contracts::shared::catalog::CatalogError;
use leptos::prelude::*;

/// Lifecycle of the one-shot catalog fetch
#[derive(Clone, Debug, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Vec<Skip>),
    Failed(CatalogError),
}

impl LoadState {
    pub fn skips(&self) -> &[Skip] {
        match self {
            LoadState::Loaded(skips) => skips,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&CatalogError> {
        match self {
            LoadState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

/// What the skip size page renders for a given load state. A failed load
/// replaces the whole page, so there is no grid alongside the error.
#[derive(Clone, Debug, PartialEq)]
pub enum PageView {
    Error(String),
    Loading,
    Grid,
}

impl PageView {
    pub fn for_load(load: &LoadState) -> Self {
        match load {
            LoadState::Loading => PageView::Loading,
            LoadState::Loaded(_) => PageView::Grid,
            LoadState::Failed(e) => PageView::Error(e.display_message()),
        }
    }

    pub fn shows_grid(&self) -> bool {
        *self == PageView::Grid
    }
}

#[derive(Clone, Copy)]
pub struct SkipSizeState {
    pub load: RwSignal<LoadState>,
    pub query: RwSignal<CatalogQuery>,
    pub selection: RwSignal<SkipSelection>,
}

pub fn create_state() -> SkipSizeState {
    SkipSizeState {
        load: RwSignal::new(LoadState::default()),
        query: RwSignal::new(CatalogQuery::default()),
        selection: RwSignal::new(SkipSelection::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_skip::SkipId;

    fn skip(id: i64) -> Skip {
        Skip {
            id: SkipId::new(id),
            size: 4,
            price_before_vat: 200.0,
            vat: 20.0,
            hire_period_days: 14,
            allowed_on_road: true,
            allows_heavy_waste: false,
        }
    }

    #[test]
    fn test_loading_has_no_skips_and_no_error() {
        let state = LoadState::default();
        assert_eq!(state, LoadState::Loading);
        assert!(state.skips().is_empty());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_failed_state_exposes_error_message() {
        let state = LoadState::Failed(CatalogError::Network("Failed to fetch".into()));
        assert!(state.skips().is_empty());
        assert_eq!(
            state.error().map(|e| e.display_message()),
            Some("Error: Failed to fetch".to_string())
        );
    }

    #[test]
    fn test_failed_load_renders_error_text_and_no_grid() {
        let load = LoadState::Failed(CatalogError::network("TypeError", "Failed to fetch"));
        let view = PageView::for_load(&load);
        assert_eq!(view, PageView::Error("Error: Failed to fetch".to_string()));
        assert!(!view.shows_grid());
    }

    #[test]
    fn test_page_view_follows_load_state() {
        assert_eq!(PageView::for_load(&LoadState::Loading), PageView::Loading);
        assert!(!PageView::for_load(&LoadState::Loading).shows_grid());
        assert!(PageView::for_load(&LoadState::Loaded(vec![skip(1)])).shows_grid());
        assert!(PageView::for_load(&LoadState::Loaded(Vec::new())).shows_grid());
    }

    #[test]
    fn test_loaded_state_exposes_skips() {
        let state = LoadState::Loaded(vec![skip(1), skip(2)]);
        assert_eq!(state.skips().len(), 2);
        assert!(state.error().is_none());
    }
}
