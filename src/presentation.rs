use crate::content::{NavLink, NAV_LINKS};
use crate::view_state::{PointerPosition, ScrollProgress};

const CURSOR_DIAMETER_PX: i32 = 32;
const CURSOR_OFFSET_PX: i32 = CURSOR_DIAMETER_PX / 2;
const CURSOR_COLOR: &str = "#f97316";
/// Progress at which the glow has doubled in size.
const CURSOR_SCALE_DIVISOR: f64 = 50.0;

pub fn cursor_scale(progress: ScrollProgress) -> f64 {
    progress.percent() / CURSOR_SCALE_DIVISOR + 1.0
}

pub fn cursor_style(pointer: PointerPosition, progress: ScrollProgress) -> String {
    format!(
        "position: fixed; width: {CURSOR_DIAMETER_PX}px; height: {CURSOR_DIAMETER_PX}px; \
         background-color: {CURSOR_COLOR}; border-radius: 50%; filter: blur(10px); \
         pointer-events: none; opacity: 0.7; z-index: 50; \
         left: {}px; top: {}px; transform: scale({}); transition: all 100ms ease;",
        pointer.x - CURSOR_OFFSET_PX,
        pointer.y - CURSOR_OFFSET_PX,
        cursor_scale(progress),
    )
}

pub fn progress_bar_style(progress: ScrollProgress) -> String {
    format!("width: {}%;", progress.percent())
}

/// The mobile menu exists in the tree only while it is open.
pub fn mobile_menu_links(menu_open: bool) -> Option<&'static [NavLink]> {
    menu_open.then_some(&NAV_LINKS[..])
}

pub fn menu_button_label(menu_open: bool) -> &'static str {
    if menu_open {
        "Close navigation menu"
    } else {
        "Open navigation menu"
    }
}

pub fn menu_icon(menu_open: bool) -> &'static str {
    if menu_open {
        "✕"
    } else {
        "☰"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::{ScrollMetrics, ViewAction, ViewState};

    fn progress_at(scroll_y: f64, document_height: f64, viewport_height: f64) -> ScrollProgress {
        ScrollProgress::from_metrics(ScrollMetrics {
            scroll_y,
            document_height,
            viewport_height,
        })
    }

    #[test]
    fn cursor_is_centred_on_pointer() {
        let style = cursor_style(PointerPosition { x: 200, y: 10 }, ScrollProgress::MIN);
        assert!(style.contains("left: 184px;"), "{style}");
        assert!(style.contains("top: -6px;"), "{style}");
        assert!(style.contains("transform: scale(1);"), "{style}");
        assert!(style.contains("pointer-events: none;"));
    }

    #[test]
    fn cursor_grows_with_scroll() {
        assert_eq!(cursor_scale(ScrollProgress::MIN), 1.0);
        assert_eq!(cursor_scale(progress_at(1100.0, 3000.0, 800.0)), 2.0);
        assert_eq!(cursor_scale(ScrollProgress::MAX), 3.0);
    }

    #[test]
    fn progress_bar_width_tracks_progress() {
        assert_eq!(progress_bar_style(ScrollProgress::MIN), "width: 0%;");
        assert_eq!(progress_bar_style(ScrollProgress::MAX), "width: 100%;");
        assert_eq!(progress_bar_style(progress_at(550.0, 3000.0, 800.0)), "width: 25%;");
    }

    #[test]
    fn short_page_styles_never_carry_nan() {
        let progress = progress_at(0.0, 720.0, 720.0);
        let bar = progress_bar_style(progress);
        let cursor = cursor_style(PointerPosition::default(), progress);
        for style in [bar, cursor] {
            assert!(!style.contains("NaN"), "{style}");
            assert!(!style.contains("inf"), "{style}");
        }
    }

    #[test]
    fn mobile_menu_present_iff_open() {
        let mut state = ViewState::default();
        for _ in 0..4 {
            let menu = mobile_menu_links(state.menu_open);
            assert_eq!(menu.is_some(), state.menu_open);
            if let Some(links) = menu {
                assert_eq!(links, &NAV_LINKS[..]);
            }
            state = state.apply(ViewAction::ToggleMenu);
        }
    }

    #[test]
    fn menu_button_reflects_state() {
        assert_eq!(menu_icon(false), "☰");
        assert_eq!(menu_icon(true), "✕");
        assert_eq!(menu_button_label(true), "Close navigation menu");
    }
}
