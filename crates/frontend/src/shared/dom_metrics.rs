//! Host environment metrics used for layout.
//!
//! The grid needs to know how many horizontal pixels a vertical scrollbar
//! occupies in the current browser. That number is environment-dependent,
//! so it is measured per layout pass rather than hard-coded or cached.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Layout metrics the grid cannot compute from its own data.
///
/// Injected into the grid so tests and headless embedders can supply a
/// deterministic value instead of touching the document.
pub trait EnvMetrics {
    /// Horizontal pixels a vertical scrollbar occupies in this host.
    fn scrollbar_thickness(&self) -> f64;
}

/// Measures the live document.
///
/// The probe node is created, measured and removed within one synchronous
/// call; it never stays in the visible document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomMetrics;

impl EnvMetrics for DomMetrics {
    fn scrollbar_thickness(&self) -> f64 {
        let thickness = probe_scrollbar_thickness().unwrap_or(0.0);
        log::debug!("scrollbar thickness probe: {thickness}px");
        thickness
    }
}

/// Fixed metrics for tests and hosts without a DOM.
#[derive(Debug, Clone, Copy)]
pub struct FixedMetrics(pub f64);

impl EnvMetrics for FixedMetrics {
    fn scrollbar_thickness(&self) -> f64 {
        self.0
    }
}

/// Nested-div measurement: the inner node's width before vs. after forcing
/// `overflow-y: scroll` on the outer node is exactly the scrollbar width.
fn probe_scrollbar_thickness() -> Option<f64> {
    let document = web_sys::window()?.document()?;
    let body = document.body()?;

    let outer = document
        .create_element("div")
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    let outer_style = outer.style();
    let _ = outer_style.set_property("width", "100px");
    let _ = outer_style.set_property("position", "absolute");
    let _ = outer_style.set_property("top", "-1000px");

    let inner = document
        .create_element("div")
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    let _ = inner.style().set_property("height", "100px");
    let _ = outer.append_child(&inner);

    body.append_child(&outer).ok()?;

    // No early returns between here and remove(): the probe must not leak
    // into the document.
    let without_scroll = inner.client_width();
    let _ = outer_style.set_property("overflow-y", "scroll");
    let with_scroll = inner.client_width();
    outer.remove();

    Some(f64::from(without_scroll - with_scroll))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_metrics_reports_its_value() {
        assert_eq!(FixedMetrics(17.0).scrollbar_thickness(), 17.0);
        assert_eq!(FixedMetrics(0.0).scrollbar_thickness(), 0.0);
    }
}
