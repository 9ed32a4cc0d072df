//! Hooks that bind the controllers to browser events. Each one subscribes on
//! mount and unsubscribes when its effect is destroyed; the listener and timer
//! handles unregister themselves on drop.

use chrono::Utc;
use gloo_events::EventListener;
use gloo_timers::callback::Interval;
use web_sys::window;
use yew::prelude::*;

use super::browser::{element_height, scroll_offset, viewport_height, DocumentBody};
use crate::config::SiteConfig;
use crate::controllers::{ClockTicker, HeightSync, MenuGate, ProgressBand, ScrollDirectionTracker};

#[hook]
pub fn use_scroll_reveal() -> bool {
    let visible = use_state_eq(|| true);

    {
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let mut tracker = ScrollDirectionTracker::new();
            let listener = window().map(|win| {
                EventListener::new(&win, "scroll", move |_| {
                    visible.set(tracker.observe(scroll_offset()));
                })
            });

            move || drop(listener)
        });
    }

    *visible
}

#[derive(Clone, Copy, PartialEq)]
pub struct ScrollProgress {
    pub band: ProgressBand,
    pub offset: f64,
}

impl ScrollProgress {
    pub fn progress(&self) -> f64 {
        self.band.progress(self.offset)
    }

    pub fn scale(&self, min_scale: f64) -> f64 {
        self.band.scale(self.offset, min_scale)
    }

    pub fn sticky_logo_opacity(&self) -> f64 {
        self.band.sticky_logo_opacity(self.offset)
    }
}

#[hook]
pub fn use_viewport_progress(config: &SiteConfig) -> ScrollProgress {
    // The band is fixed by the viewport height seen at mount.
    let band = *use_memo(config.clone(), |config| {
        ProgressBand::from_viewport(viewport_height(), config)
    });
    let offset = use_state_eq(scroll_offset);

    {
        let offset = offset.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|win| {
                EventListener::new(&win, "scroll", move |_| offset.set(scroll_offset()))
            });

            move || drop(listener)
        });
    }

    ScrollProgress {
        band,
        offset: *offset,
    }
}

#[hook]
pub fn use_element_height(node: NodeRef) -> f64 {
    let height = use_state_eq(|| 0.0);

    {
        let height = height.clone();
        use_effect_with(node, move |node| {
            let node = node.clone();
            let mut sync = HeightSync::new();
            height.set(sync.record(element_height(&node)));

            let listener = window().map(|win| {
                EventListener::new(&win, "resize", move |_| {
                    height.set(sync.record(element_height(&node)));
                })
            });

            move || drop(listener)
        });
    }

    *height
}

#[hook]
pub fn use_clock(config: &SiteConfig) -> String {
    let ticker = use_mut_ref(|| ClockTicker::mount(config, Utc::now()));
    let formatted = use_state_eq(|| ticker.borrow().formatted().to_string());

    {
        let formatted = formatted.clone();
        use_effect_with(config.clock_period_ms, move |period| {
            if !ticker.borrow().is_resolved() {
                gloo_console::warn!("clock: timezone or format unresolved, showing placeholder");
            }

            let interval = Interval::new(*period, move || {
                let mut ticker = ticker.borrow_mut();
                if ticker.poll(Utc::now()) {
                    formatted.set(ticker.formatted().to_string());
                }
            });

            move || drop(interval)
        });
    }

    (*formatted).clone()
}

#[derive(Clone, PartialEq)]
pub struct MenuHandle {
    pub open: bool,
    pub toggle: Callback<()>,
    pub select: Callback<usize>,
}

#[hook]
pub fn use_menu_gate() -> MenuHandle {
    let gate = use_mut_ref(|| MenuGate::new(DocumentBody));
    let open = use_state_eq(|| false);

    {
        let gate = gate.clone();
        // Unmount must leave the page scrollable whatever state the menu was in.
        use_effect_with((), move |_| move || gate.borrow_mut().close());
    }

    let toggle = {
        let gate = gate.clone();
        let open = open.clone();
        Callback::from(move |_| {
            let now_open = gate.borrow_mut().toggle();
            open.set(now_open);
        })
    };

    let select = {
        let open = open.clone();
        Callback::from(move |index: usize| {
            gate.borrow_mut().select(index);
            open.set(false);
        })
    };

    MenuHandle {
        open: *open,
        toggle,
        select,
    }
}
