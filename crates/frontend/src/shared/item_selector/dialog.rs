use contracts::catalog::Item;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

use super::grid::ItemGrid;
use super::layout::GridLayout;
use super::state::{create_state, default_validate};
use crate::shared::dom_metrics::EnvMetrics;

/// Modal item selector: tile grid, status bar and an OK/Cancel action bar.
///
/// One instance covers one selection episode. It resolves through
/// `on_confirm` or `on_cancel`; the host is expected to unmount it
/// afterwards. A press-and-release on the overlay itself counts as Cancel.
#[component]
pub fn ItemSelectorDialog<M>(
    /// Items offered for selection, in display order.
    items: Vec<Item>,
    /// Grid geometry; defaults to 4 columns x 3 visible rows.
    #[prop(optional)]
    layout: Option<GridLayout>,
    /// Gate run on OK over the selection (in collection order). A
    /// non-empty message rejects the selection and is shown in the status
    /// bar. Default: require at least one item.
    #[prop(optional)]
    validate: Option<Callback<Vec<Item>, Option<String>>>,
    /// Receives the confirmed selection. Default: dump it as JSON through
    /// the logger.
    #[prop(optional)]
    on_confirm: Option<Callback<Vec<Item>>>,
    /// Invoked on Cancel and overlay dismissal; the validator never runs.
    #[prop(optional)]
    on_cancel: Option<Callback<()>>,
    /// Observer for individual tile toggles.
    #[prop(optional)]
    on_item_selected: Option<Callback<Item>>,
    /// Marks the dialog surface for the host's drag capability; the
    /// widget itself does not implement dragging.
    #[prop(optional)]
    draggable: bool,
    /// Dialog title.
    #[prop(optional)]
    title: Option<String>,
    /// Host metrics, passed through to the grid.
    metrics: M,
) -> impl IntoView
where
    M: EnvMetrics + Send + Sync + 'static,
{
    let layout = layout.unwrap_or_default().normalized();
    let state = create_state();
    let title = title.unwrap_or_else(|| "Select items".to_string());

    let items_for_grid = items.clone();
    let items_for_confirm = items.clone();
    let items_for_events = items;

    let handle_toggle = Callback::new(move |index: usize| {
        state.update(|s| {
            s.toggle(index);
        });
        if let Some(listener) = on_item_selected {
            if let Some(item) = items_for_events.get(index) {
                listener.run(item.clone());
            }
        }
    });

    let handle_ok = move |_| {
        let confirmed = state
            .try_update(|s| {
                s.confirm(&items_for_confirm, |picked| match validate {
                    Some(gate) => gate.run(picked.to_vec()),
                    None => default_validate(picked),
                })
            })
            .flatten();
        if let Some(picked) = confirmed {
            match on_confirm {
                Some(listener) => listener.run(picked),
                None => log::info!(
                    "item selector confirmed:\n{}",
                    serde_json::to_string_pretty(&picked).unwrap_or_default()
                ),
            }
        }
    };

    let dismiss = Callback::new(move |()| {
        if state.try_update(|s| s.cancel()).unwrap_or(false) {
            if let Some(listener) = on_cancel {
                listener.run(());
            }
        }
    });

    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Dismiss only when both press and release happened on the overlay
    // itself, so selecting text inside the dialog and releasing outside
    // does not close it.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_dismiss = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_dismiss {
            // Defer to the next tick: the overlay is removed while its own
            // click is still dispatching, which trips event delegation
            // when done synchronously.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                dismiss.run(());
            });
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let surface_class = if draggable {
        "modal item-selector item-selector--draggable"
    } else {
        "modal item-selector"
    };

    let has_error = move || state.with(|s| s.error_message().is_some());
    let error_message = move || state.with(|s| s.error_message().map(str::to_string));
    let selected_count = move || state.with(|s| s.selected_count().to_string());

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                class=surface_class
                data-draggable=draggable.then_some("true")
                on:click=stop_propagation
            >
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                </div>

                <div class="modal-body item-selector__body">
                    <ItemGrid
                        items=items_for_grid
                        layout=layout
                        state=state
                        on_toggle=handle_toggle
                        metrics=metrics
                    />
                </div>

                <div
                    class="item-selector__status"
                    class=("item-selector__status--warning", has_error)
                >
                    <Badge>{selected_count}</Badge>
                    {move || {
                        error_message()
                            .map(|message| {
                                view! { <span class="item-selector__message">{message}</span> }
                            })
                    }}
                </div>

                <div class="modal-footer">
                    <Button appearance=ButtonAppearance::Primary on_click=handle_ok>
                        "OK"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| dismiss.run(())
                    >
                        "Cancel"
                    </Button>
                </div>
            </div>
        </div>
    }
}
