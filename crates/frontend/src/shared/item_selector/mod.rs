//! Reusable item-selector widget.
//!
//! A collection of [`Item`](contracts::catalog::Item)s is rendered as a
//! grid of clickable tiles (fixed column count, row-capped scrolling);
//! the user toggles tiles and confirms through an OK/Cancel bar with
//! pluggable validation.
//!
//! ```rust,ignore
//! view! {
//!     <ItemSelectorDialog
//!         items=items
//!         layout=GridLayout::new(4, 3)
//!         metrics=DomMetrics
//!         on_confirm=Callback::new(|picked: Vec<Item>| { /* ... */ })
//!         on_cancel=Callback::new(|_| { /* ... */ })
//!     />
//! }
//! ```

pub mod dialog;
pub mod grid;
pub mod layout;
pub mod state;
pub mod tile;

pub use dialog::ItemSelectorDialog;
pub use grid::ItemGrid;
pub use layout::GridLayout;
pub use state::{create_state, default_validate, DialogPhase, SelectorState};
pub use tile::ItemTile;
