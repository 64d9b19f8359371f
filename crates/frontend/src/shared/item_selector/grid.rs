use contracts::catalog::Item;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::layout::GridLayout;
use super::state::SelectorState;
use super::tile::ItemTile;
use crate::shared::dom_metrics::EnvMetrics;

/// Tile grid with a fixed column count.
///
/// A row-break marker is emitted after every full row. When the rows
/// needed exceed the layout's visible cap, the container scrolls
/// vertically and is widened by the host's scrollbar thickness so the
/// content width stays intact.
#[component]
pub fn ItemGrid<M>(
    /// Items to lay out, in display order.
    items: Vec<Item>,
    #[prop(optional)] layout: Option<GridLayout>,
    /// Selection state owned by the dialog, keyed by item index.
    state: RwSignal<SelectorState>,
    /// Tile toggles forwarded upward unchanged: the toggled tile's index.
    on_toggle: Callback<usize>,
    /// Host metrics for the scrollbar widening pass.
    metrics: M,
) -> impl IntoView
where
    M: EnvMetrics + Send + Sync + 'static,
{
    let layout = layout.unwrap_or_default().normalized();
    let item_count = items.len();
    let grid_ref = NodeRef::<Div>::new();

    // Runs after the tiles are in the document. The scrollbar thickness is
    // environment-dependent, so it is measured on every pass instead of
    // being cached.
    Effect::new(move |_| {
        if !layout.overflows(item_count) {
            return;
        }
        let Some(el) = grid_ref.get() else { return };

        let content_width = f64::from(el.offset_width());
        let thickness = metrics.scrollbar_thickness();
        let tile_height = el
            .query_selector(".item-tile")
            .ok()
            .flatten()
            .and_then(|tile| tile.dyn_into::<HtmlElement>().ok())
            .map(|tile| tile.offset_height());

        let style = web_sys::HtmlElement::style(&el);
        let _ = style.set_property("overflow-y", "auto");
        let _ = style.set_property("width", &format!("{}px", content_width + thickness));
        if let Some(tile_height) = tile_height {
            let max_height = tile_height * layout.max_visible_rows as i32;
            let _ = style.set_property("max-height", &format!("{max_height}px"));
        }
    });

    view! {
        <div class="item-grid" node_ref=grid_ref>
            {items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    let is_selected = Signal::derive(move || state.with(|s| s.is_selected(index)));
                    let row_break = layout
                        .break_after(index, item_count)
                        .then(|| view! { <div class="item-grid__row-break"></div> });
                    view! {
                        <ItemTile item=item index=index selected=is_selected on_toggle=on_toggle />
                        {row_break}
                    }
                })
                .collect_view()}
        </div>
    }
}
