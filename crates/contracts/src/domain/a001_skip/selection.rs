use super::aggregate::SkipId;

/// Which skip, if any, is open in the details modal.
///
/// `None` is the no-selection state; `Some(id)` means that skip is selected
/// and its modal is open. At most one skip is selected at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SkipSelection {
    selected: Option<SkipId>,
}

impl SkipSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selecting the currently selected skip again clears the selection;
    /// any other id replaces it.
    pub fn select(&mut self, id: SkipId) {
        self.selected = if self.selected == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Outside click, close button or Escape.
    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<SkipId> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_selected(&self, id: SkipId) -> bool {
        self.selected == Some(id)
    }
}
