//! Scroll progress as a fraction of a scrollable range.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

/// Layout box of an element in document coordinates, ignoring transforms.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementBox {
    pub top: f64,
    pub height: f64,
}

/// Progress through the whole document: 0 at the top, 1 when the last
/// screenful is visible. Pages that do not scroll stay at 0.
pub fn page_progress(metrics: ScrollMetrics) -> f64 {
    let range = metrics.document_height - metrics.viewport_height;
    if range <= 0.0 || !range.is_finite() {
        return 0.0;
    }
    normalise(metrics.scroll_y / range)
}

/// Progress through an element: 0 while its top edge is at or below the
/// viewport top, 1 once its bottom edge has scrolled past the viewport top.
pub fn element_progress(scroll_y: f64, element: ElementBox) -> f64 {
    if element.height <= 0.0 {
        return if scroll_y >= element.top { 1.0 } else { 0.0 };
    }
    normalise((scroll_y - element.top) / element.height)
}

fn normalise(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    }
}
