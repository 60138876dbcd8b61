use contracts::tabs::{TabController, TabsConfig};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct TabsContext {
    pub controller: RwSignal<TabController>,
}

impl TabsContext {
    pub fn new(config: &TabsConfig) -> Self {
        let controller = TabController::initialize(config);
        log::info!(
            "Tabs initialized: {} tabs, selected index {}",
            controller.tabs().len(),
            controller.selected_index()
        );
        Self {
            controller: RwSignal::new(controller),
        }
    }

    /// Applies a raw `selectedIndex` from the switcher.
    pub fn select(&self, index: i32) {
        self.controller.update(|c| {
            c.on_selection_change(index);
            log::debug!(
                "Tab selection: index={}, state={}, visible={:?}",
                index,
                serde_json::to_string(&c.state()).unwrap_or_default(),
                c.visible_pane().map(|p| p.id.as_str())
            );
        });
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.controller.with(|c| c.is_visible(index))
    }

    pub fn selected_index_untracked(&self) -> i32 {
        self.controller.with_untracked(|c| c.selected_index())
    }
}

pub fn use_tabs() -> TabsContext {
    use_context::<TabsContext>().expect("TabsContext context not found")
}
