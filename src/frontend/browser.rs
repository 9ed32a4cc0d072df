use web_sys::{window, HtmlElement};
use yew::NodeRef;

use crate::controllers::ScrollSurface;

const FALLBACK_VIEWPORT_HEIGHT: f64 = 720.0;

pub fn scroll_offset() -> f64 {
    window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|win| win.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT_HEIGHT)
}

pub fn element_height(node: &NodeRef) -> Option<f64> {
    node.cast::<HtmlElement>()
        .map(|element| f64::from(element.offset_height()))
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn scroll_to_top() {
    if let Some(win) = window() {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// The document body, whose `overflow` is what actually stops page scrolling.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentBody;

impl ScrollSurface for DocumentBody {
    fn set_scroll_locked(&self, locked: bool) {
        let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            gloo_console::warn!("scroll lock: document body unavailable");
            return;
        };

        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };

        if result.is_err() {
            gloo_console::warn!("scroll lock: failed to update body overflow");
        }
    }
}
