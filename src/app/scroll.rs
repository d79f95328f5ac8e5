use leptos::{ev, prelude::*};

use crate::scroll::{ScrollHost, ScrollStart, ScrollState, SmoothScroller, Spring, SpringConfig};

pub const HISTORY_ANCHOR: &str = "#history";
pub const HISTORY_SCROLL_DURATION: f64 = 2000.0;

/// The browser window as a [`ScrollHost`].
pub struct WindowHost {
    window: web_sys::Window,
    document: web_sys::Document,
}

impl WindowHost {
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    /// High resolution frame time in ms, same clock as `requestAnimationFrame`.
    pub fn now(&self) -> f64 {
        self.window
            .performance()
            .map(|p| p.now())
            .unwrap_or_default()
    }
}

impl ScrollHost for WindowHost {
    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.window.scroll_to_with_x_and_y(0.0, offset);
    }

    fn target_top(&self, selector: &str) -> Option<f64> {
        let el = self.document.query_selector(selector).ok().flatten()?;
        Some(el.get_bounding_client_rect().top() + self.scroll_offset())
    }

    fn content_height(&self) -> f64 {
        self.document
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or_default()
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy)]
pub struct ScrollTracker {
    pub compacted: Signal<bool>,
    pub progress: Signal<f64>,
}

/// Tracks the window scroll position for as long as the calling component lives.
pub fn use_scroll_tracker() -> ScrollTracker {
    let (state, set_state) = signal(ScrollState::default());
    let sample = move || {
        if let Some(host) = WindowHost::current() {
            set_state.set(ScrollState::sample(&host));
        }
    };

    // effects only run in the browser, after mount
    Effect::new(move |_| {
        sample();
        let on_scroll = window_event_listener(ev::scroll, move |_| sample());
        let on_resize = window_event_listener(ev::resize, move |_| sample());
        on_cleanup(move || {
            on_scroll.remove();
            on_resize.remove();
        });
    });

    // memos keep repeated events with the same outcome from re-rendering
    let compacted = Memo::new(move |_| state.with(|s| s.is_compacted));
    let progress = Memo::new(move |_| state.with(|s| s.progress));
    ScrollTracker {
        compacted: compacted.into(),
        progress: progress.into(),
    }
}

/// Handle to the page's smooth scroller.
#[derive(Clone, Copy)]
pub struct SmoothScroll {
    scroller: StoredValue<SmoothScroller>,
}

pub fn use_smooth_scroll() -> SmoothScroll {
    SmoothScroll {
        scroller: StoredValue::new(SmoothScroller::new()),
    }
}

impl SmoothScroll {
    pub fn scroll_to(self, selector: &str, duration: f64) {
        let Some(host) = WindowHost::current() else {
            return;
        };
        let start = self
            .scroller
            .try_update_value(|s| s.scroll_to(&host, selector, duration));
        match start {
            Some(ScrollStart::Started) => schedule_scroll_frame(self.scroller),
            Some(ScrollStart::Restarted) => log::debug!("restarting smooth scroll to {selector}"),
            Some(ScrollStart::NoTarget) => log::debug!("no scroll target for {selector}"),
            None => {}
        }
    }
}

fn schedule_scroll_frame(scroller: StoredValue<SmoothScroller>) {
    request_animation_frame(move || {
        let Some(mut host) = WindowHost::current() else {
            return;
        };
        let now = host.now();
        // a disposed scroller (page unmounted) ends the loop
        if scroller.try_update_value(|s| s.on_frame(&mut host, now)) == Some(true) {
            schedule_scroll_frame(scroller);
        }
    });
}

struct SpringLoop {
    spring: Spring,
    last_frame: Option<f64>,
    running: bool,
}

impl SpringLoop {
    fn advance(&mut self, now: f64) -> (f64, bool) {
        let dt = self.last_frame.map(|last| now - last).unwrap_or_default();
        let value = self.spring.step(dt);
        let resting = self.spring.is_resting();
        if resting {
            self.running = false;
            self.last_frame = None;
        } else {
            self.last_frame = Some(now);
        }
        (value, resting)
    }
}

/// Spring-smoothed copy of `progress`, animated only while it is moving.
pub fn use_progress_spring(progress: Signal<f64>) -> Signal<f64> {
    let (value, set_value) = signal(0.0);
    let spring = StoredValue::new(SpringLoop {
        spring: Spring::new(SpringConfig::default(), 0.0),
        last_frame: None,
        running: false,
    });

    Effect::new(move |_| {
        let target = progress.get();
        let start = spring.try_update_value(|s| {
            s.spring.set_target(target);
            !std::mem::replace(&mut s.running, true)
        });
        if start == Some(true) {
            schedule_spring_frame(spring, set_value);
        }
    });

    value.into()
}

fn schedule_spring_frame(spring: StoredValue<SpringLoop>, set_value: WriteSignal<f64>) {
    request_animation_frame(move || {
        let Some(host) = WindowHost::current() else {
            return;
        };
        let now = host.now();
        let Some((value, resting)) = spring.try_update_value(|s| s.advance(now)) else {
            return;
        };
        set_value.set(value);
        if !resting {
            schedule_spring_frame(spring, set_value);
        }
    });
}
