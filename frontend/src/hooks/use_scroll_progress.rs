use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};
use yew::prelude::*;

use crate::hooks::window_listener::WindowListener;
use crate::motion::scroll::{self, ElementBox, ScrollMetrics};

#[derive(Clone, PartialEq)]
pub enum ScrollTarget {
    Page,
    /// From the element's top reaching the viewport top until its bottom
    /// leaves through it.
    Element(NodeRef),
}

/// Layout offset of an element within the document. Walks `offsetParent`
/// so CSS transforms on the element don't feed back into the measurement.
fn document_box(element: &HtmlElement) -> ElementBox {
    let mut top = 0.0;
    let mut current = Some(element.clone());
    while let Some(node) = current {
        top += f64::from(node.offset_top());
        current = node.offset_parent().and_then(|parent| parent.dyn_into::<HtmlElement>().ok());
    }
    ElementBox {
        top,
        height: f64::from(element.offset_height()),
    }
}

fn measure(target: &ScrollTarget) -> Option<f64> {
    let window = window()?;
    let scroll_y = window.scroll_y().ok()?;
    match target {
        ScrollTarget::Page => {
            let root = window.document()?.document_element()?;
            let metrics = ScrollMetrics {
                scroll_y,
                viewport_height: window.inner_height().ok()?.as_f64()?,
                document_height: f64::from(root.scroll_height()),
            };
            Some(scroll::page_progress(metrics))
        }
        ScrollTarget::Element(node) => {
            let element = node.cast::<HtmlElement>()?;
            Some(scroll::element_progress(scroll_y, document_box(&element)))
        }
    }
}

#[hook]
pub fn use_scroll_progress(target: ScrollTarget) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let listener = WindowListener::attach("scroll progress", &["scroll", "resize"], move || {
                    progress.set(measure(&target).unwrap_or(0.0));
                });
                // Measure once so a page restored mid-scroll starts in place.
                if let Some(listener) = &listener {
                    listener.fire();
                }
                move || drop(listener)
            },
            (),
        );
    }

    *progress
}
