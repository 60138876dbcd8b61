use super::config::TabsConfig;
use super::pane::Pane;
use super::tab::Tab;
use serde::Serialize;

/// Selection state of the switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SelectionState {
    /// Nothing selected, every pane hidden.
    #[default]
    Unselected,
    Selected(usize),
}

/// Owns the tabs and panes and keeps exactly the selected pane visible.
///
/// Tabs and panes are created once in [`TabController::initialize`] and never added or
/// removed afterwards; only pane visibility changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabController {
    tabs: Vec<Tab>,
    panes: Vec<Pane>,
    state: SelectionState,
}

impl TabController {
    pub fn initialize(config: &TabsConfig) -> Self {
        let tabs = Tab::all();
        let panes = tabs
            .iter()
            .map(|tab| Pane::for_tab(tab, config.secondary_menus))
            .collect();

        let mut controller = Self {
            tabs,
            panes,
            state: SelectionState::Unselected,
        };
        controller.on_selection_change(config.default_tab.initial_index());
        controller
    }

    /// Hides every pane, then reveals the one at `selected_index`.
    ///
    /// Takes the raw `selectedIndex` of the control: `-1` (no selection) or any value
    /// outside `[0, N)` leaves all panes hidden.
    pub fn on_selection_change(&mut self, selected_index: i32) {
        for pane in &mut self.panes {
            pane.visible = false;
        }

        let selected = usize::try_from(selected_index)
            .ok()
            .filter(|&i| i < self.panes.len());

        self.state = match selected {
            Some(i) => {
                self.panes[i].visible = true;
                SelectionState::Selected(i)
            }
            None => SelectionState::Unselected,
        };
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Index in the form the `select` element expects, `-1` when unselected.
    pub fn selected_index(&self) -> i32 {
        match self.state {
            SelectionState::Selected(i) => i as i32,
            SelectionState::Unselected => -1,
        }
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.panes.get(index).is_some_and(|p| p.visible)
    }

    pub fn visible_pane(&self) -> Option<&Pane> {
        self.panes.iter().find(|p| p.visible)
    }
}
