/// Labels of the tab switcher, in display order.
pub const TAB_LABELS: [&str; 4] = ["retetar", "regimuri", "cza", "la"];

/// A single selectable label in the switcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub label: String,
    /// Position in declaration order, also the index of the matching pane.
    pub index: usize,
}

impl Tab {
    pub fn new(label: &str, index: usize) -> Self {
        Self {
            label: label.to_string(),
            index,
        }
    }

    /// Builds the fixed tab list from `TAB_LABELS`.
    pub fn all() -> Vec<Tab> {
        TAB_LABELS
            .iter()
            .enumerate()
            .map(|(index, label)| Tab::new(label, index))
            .collect()
    }
}
