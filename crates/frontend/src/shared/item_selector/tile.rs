use contracts::catalog::Item;
use leptos::prelude::*;

/// One clickable tile: icon plus name and two attribute lines.
///
/// The pressed state is owned by the dialog (keyed by item index), not by
/// the tile; the tile only reflects it and reports clicks upward. Labels
/// carry `title` attributes so the host shows the full text when a line is
/// truncated.
#[component]
pub fn ItemTile(
    item: Item,
    /// Position of this tile in the collection.
    index: usize,
    /// Shared pressed-state lookup for this tile.
    #[prop(into)]
    selected: Signal<bool>,
    /// Click notification to the owning grid/dialog.
    on_toggle: Callback<usize>,
) -> impl IntoView {
    let Item {
        icon,
        name,
        attribute1,
        attribute2,
    } = item;
    let alt_text = name.clone();
    let name_title = name.clone();
    let attribute1_title = attribute1.clone();
    let attribute2_title = attribute2.clone();

    view! {
        <div
            class="item-tile item-tile--clickable"
            class=("item-tile--pressed", move || selected.get())
            on:click=move |_| on_toggle.run(index)
        >
            <img class="item-tile__icon" src=icon alt=alt_text />
            <div class="item-tile__attributes">
                <div class="item-tile__name item-tile__truncate" title=name_title>
                    {name}
                </div>
                <div class="item-tile__attribute item-tile__truncate" title=attribute1_title>
                    {attribute1}
                </div>
                <div class="item-tile__attribute item-tile__truncate" title=attribute2_title>
                    {attribute2}
                </div>
            </div>
        </div>
    }
}
