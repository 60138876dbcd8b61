use contracts::tabs::SecondaryMenu;
use leptos::html;
use leptos::prelude::*;
use web_sys::HtmlSelectElement;

/// Secondary menu inside a pane. Picking an entry only shows and logs it.
#[component]
pub fn PaneMenu(menu: SecondaryMenu) -> impl IntoView {
    let picked = RwSignal::new(None::<String>);
    let select_ref = NodeRef::<html::Select>::new();
    let title = menu.title.clone();
    let entries = menu.entries.clone();

    Effect::new(move |_| {
        if let Some(select) = select_ref.get() {
            select.set_selected_index(-1);
        }
    });

    let on_change = move |ev: web_sys::Event| {
        let index = event_target::<HtmlSelectElement>(&ev).selected_index();
        let entry = menu.entry(index).map(str::to_string);
        log::debug!("{} menu: index={}, entry={:?}", menu.title, index, entry);
        picked.set(entry);
    };

    view! {
        <div class="pane__menu">
            <select class="menu" node_ref=select_ref on:change=on_change>
                {entries
                    .into_iter()
                    .map(|entry| view! { <option>{entry}</option> })
                    .collect_view()}
            </select>
            {move || {
                picked
                    .get()
                    .map(|entry| {
                        view! { <p class="pane__menu-picked">{format!("{}: {}", title, entry)}</p> }
                    })
            }}
        </div>
    }
}
