use crate::layout::use_tabs;
use contracts::tabs::Tab;
use leptos::html;
use leptos::prelude::*;
use web_sys::HtmlSelectElement;

/// Options of the switcher as (value, label) pairs, in tab order.
fn tab_options(tabs: &[Tab]) -> Vec<(String, String)> {
    tabs.iter()
        .map(|tab| (tab.label.clone(), tab.label.clone()))
        .collect()
}

/// Single-choice `<select>` used as the tab strip.
#[component]
pub fn TabSwitcher() -> impl IntoView {
    let ctx = use_tabs();
    let options = ctx.controller.with_untracked(|c| tab_options(c.tabs()));
    let initial_index = ctx.selected_index_untracked();
    let select_ref = NodeRef::<html::Select>::new();

    // A single-select defaults to its first option; force the configured start index,
    // which may be -1 (nothing selected).
    Effect::new(move |_| {
        if let Some(select) = select_ref.get() {
            select.set_selected_index(initial_index);
        }
    });

    view! {
        <select
            id="tabs"
            node_ref=select_ref
            on:change=move |ev| {
                let index = event_target::<HtmlSelectElement>(&ev).selected_index();
                ctx.select(index);
            }
        >
            {options
                .into_iter()
                .map(|(value, label)| {
                    view! {
                        <option class="tab" value=value>
                            {label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
