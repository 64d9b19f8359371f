use contracts::catalog::Item;
use leptos::prelude::*;
use thaw::*;

use crate::shared::dom_metrics::DomMetrics;
use crate::shared::item_selector::{GridLayout, ItemSelectorDialog};

/// Enough items that the default 4x3 grid has to scroll.
fn sample_items() -> Vec<Item> {
    let mut items = vec![Item::default()];
    items.extend((2..=14).map(|n| {
        Item::new(
            format!("https://picsum.photos/seed/item-{n}/64"),
            format!("Item {n}"),
            format!("First attribute of item {n}"),
            format!("Second attribute of item {n}"),
        )
    }));
    items
}

/// Demo shell: one page with a button that opens the selector and shows
/// the outcome of the last episode.
#[component]
pub fn App() -> impl IntoView {
    let (selector_open, set_selector_open) = signal(false);
    let (last_outcome, set_last_outcome) = signal::<Option<String>>(None);

    view! {
        <div class="demo-page">
            <h1>"Item selector"</h1>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| set_selector_open.set(true)
            >
                "Pick items"
            </Button>

            {move || {
                last_outcome
                    .get()
                    .map(|text| view! { <p class="demo-page__outcome">{text}</p> })
            }}

            {move || {
                if selector_open.get() {
                    view! {
                        <ItemSelectorDialog
                            items=sample_items()
                            layout=GridLayout::new(4, 3)
                            metrics=DomMetrics
                            title="Pick some items".to_string()
                            on_item_selected=Callback::new(|item: Item| {
                                log::debug!("tile toggled: {}", item.name);
                            })
                            on_confirm=Callback::new(move |picked: Vec<Item>| {
                                let names: Vec<String> =
                                    picked.iter().map(|i| i.name.clone()).collect();
                                set_last_outcome.set(Some(format!("Picked: {}", names.join(", "))));
                                set_selector_open.set(false);
                            })
                            on_cancel=Callback::new(move |_| {
                                set_last_outcome.set(Some("Cancelled.".to_string()));
                                set_selector_open.set(false);
                            })
                        />
                    }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}
