use crate::layout::tabs::{TabPanes, TabSwitcher};
use crate::layout::tabs_context::TabsContext;
use contracts::tabs::TabsConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: TabsConfig) -> impl IntoView {
    // The controller is built once here and shared with the switcher and panes via context.
    provide_context(TabsContext::new(&config));

    view! {
        <div id="app">
            <TabSwitcher />
            <TabPanes />
        </div>
    }
}
