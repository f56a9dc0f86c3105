#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Layout state shared by the sidebar and the page body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub sidebar_collapsed: bool,
}

impl UiState {
    /// Flip the sidebar and return the new collapsed flag.
    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_collapsed = !self.sidebar_collapsed;
        self.sidebar_collapsed
    }
}
