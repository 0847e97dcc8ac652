use std::str::FromStr;

use crate::motion::error::MotionError;

/// One end of a scroll range: the point where `element` (fraction of the
/// element's height, 0 = top) lines up with `viewport` (fraction of the
/// viewport's height, 0 = top).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub element: f64,
    pub viewport: f64,
}

impl Edge {
    pub const fn new(element: f64, viewport: f64) -> Self {
        Self { element, viewport }
    }

    /// Parses `"<element anchor> <viewport anchor>"`, e.g. `"start end"`.
    pub fn parse(raw: &str) -> Result<Self, MotionError> {
        let mut parts = raw.split_whitespace();
        let (Some(element), Some(viewport), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(MotionError::InvalidEdge(raw.to_string()));
        };
        let anchor = |token: &str| parse_anchor(token).ok_or_else(|| MotionError::InvalidEdge(raw.to_string()));
        Ok(Self::new(anchor(element)?, anchor(viewport)?))
    }

    /// Distance the page still has to scroll before this edge is reached.
    fn remaining(&self, layout: &ElementLayout, viewport_height: f64) -> f64 {
        layout.top + self.element * layout.height - self.viewport * viewport_height
    }
}

impl FromStr for Edge {
    type Err = MotionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Edge::parse(raw)
    }
}

fn parse_anchor(token: &str) -> Option<f64> {
    match token {
        "start" => Some(0.0),
        "center" => Some(0.5),
        "end" => Some(1.0),
        other => {
            let value = match other.strip_suffix('%') {
                Some(percent) => percent.parse::<f64>().ok()? / 100.0,
                None => other.parse::<f64>().ok()?,
            };
            value.is_finite().then_some(value)
        }
    }
}

/// The element's untransformed layout box relative to the viewport.
///
/// Must not include CSS transforms: sections transform themselves from the
/// progress computed here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementLayout {
    pub top: f64,
    pub height: f64,
    pub attached: bool,
}

impl ElementLayout {
    pub const fn attached(top: f64, height: f64) -> Self {
        Self {
            top,
            height,
            attached: true,
        }
    }

    /// From the element's offset in the document and the page scroll.
    pub fn in_document(document_top: f64, height: f64, scroll_y: f64) -> Self {
        Self::attached(document_top - scroll_y, height)
    }

    pub const fn detached() -> Self {
        Self {
            top: 0.0,
            height: 0.0,
            attached: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    pub start: Edge,
    pub end: Edge,
}

impl ScrollRange {
    pub const fn new(start: Edge, end: Edge) -> Self {
        Self { start, end }
    }

    /// Element top meets viewport top, through element bottom meets viewport top.
    pub const fn leaving() -> Self {
        Self::new(Edge::new(0.0, 0.0), Edge::new(1.0, 0.0))
    }

    /// Element top meets viewport bottom, through element bottom meets viewport top.
    pub const fn passing() -> Self {
        Self::new(Edge::new(0.0, 1.0), Edge::new(1.0, 0.0))
    }

    /// Progress in [0, 1]. Detached or zero-height elements, and ranges whose
    /// end does not come after their start, report 0.
    pub fn progress(&self, layout: ElementLayout, viewport_height: f64) -> f64 {
        if !layout.attached || layout.height <= 0.0 || !layout.top.is_finite() {
            return 0.0;
        }
        let start = self.start.remaining(&layout, viewport_height);
        let end = self.end.remaining(&layout, viewport_height);
        let span = end - start;
        if !span.is_finite() || span <= 0.0 {
            return 0.0;
        }
        (-start / span).clamp(0.0, 1.0)
    }
}

/// Per-element state kept between host events.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ObservationState {
    pub progress: f64,
    pub is_visible: bool,
    pub has_fired_once: bool,
}

#[derive(Debug, Clone)]
pub struct ScrollProgressTracker {
    range: ScrollRange,
    state: ObservationState,
    attached: bool,
}

impl ScrollProgressTracker {
    pub fn new(range: ScrollRange) -> Self {
        Self {
            range,
            state: ObservationState::default(),
            attached: true,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> ObservationState {
        self.state
    }

    #[cfg(test)]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Recomputes progress from a fresh layout. No-op once detached.
    pub fn update(&mut self, layout: ElementLayout, viewport_height: f64) -> f64 {
        if self.attached {
            self.state.progress = self.range.progress(layout, viewport_height);
        }
        self.state.progress
    }

    pub fn detach(&mut self) {
        self.attached = false;
        self.state = ObservationState::default();
    }
}
