//! Transient view state of the page and the actions that move it.
//!
//! Each field has exactly one action that writes it, so listener callbacks
//! never race each other for the same slot.

use serde::Serialize;

use crate::theme::Theme;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// Raw scroll geometry read from the window, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

/// Percentage of the scrollable range already scrolled. Always finite and
/// within `[0, 100]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    pub const MIN: Self = Self(0.0);
    pub const MAX: Self = Self(100.0);

    pub fn from_metrics(metrics: ScrollMetrics) -> Self {
        let range = metrics.document_height - metrics.viewport_height;
        if !range.is_finite() || range <= 0.0 || !metrics.scroll_y.is_finite() {
            return Self::MIN;
        }

        Self((metrics.scroll_y / range * 100.0).clamp(0.0, 100.0))
    }

    pub fn percent(self) -> f64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewAction {
    ToggleMenu,
    ToggleTheme,
    PointerMoved { x: i32, y: i32 },
    Scrolled(ScrollMetrics),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ViewState {
    pub menu_open: bool,
    pub theme: Theme,
    pub pointer: PointerPosition,
    pub scroll_progress: ScrollProgress,
}

impl ViewState {
    pub fn apply(self, action: ViewAction) -> Self {
        match action {
            ViewAction::ToggleMenu => Self {
                menu_open: !self.menu_open,
                ..self
            },
            ViewAction::ToggleTheme => Self {
                theme: self.theme.toggled(),
                ..self
            },
            ViewAction::PointerMoved { x, y } => Self {
                pointer: PointerPosition { x, y },
                ..self
            },
            ViewAction::Scrolled(metrics) => Self {
                scroll_progress: ScrollProgress::from_metrics(metrics),
                ..self
            },
        }
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }
}
