use super::menu::PaneMenu;
use crate::layout::use_tabs;
use contracts::tabs::Pane;
use leptos::prelude::*;

#[component]
pub fn TabPane(index: usize, pane: Pane) -> impl IntoView {
    let ctx = use_tabs();
    let is_hidden = Memo::new(move |_| !ctx.is_visible(index));

    view! {
        <div id=pane.id class="pane" class:hidden=is_hidden>
            {pane.content}
            {pane.menu.map(|menu| view! { <PaneMenu menu=menu /> })}
        </div>
    }
}

/// All panes, in tab order.
#[component]
pub fn TabPanes() -> impl IntoView {
    let ctx = use_tabs();
    let panes = ctx.controller.with_untracked(|c| c.panes().to_vec());

    panes
        .into_iter()
        .enumerate()
        .map(|(index, pane)| view! { <TabPane index=index pane=pane /> })
        .collect_view()
}
