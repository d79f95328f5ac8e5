//! Scroll-driven page state and the smooth-scroll animation.
//!
//! Everything in here is plain arithmetic over offsets and timestamps. The
//! browser side lives in `app::scroll`, which implements [`ScrollHost`] for
//! the window and feeds display-frame timestamps into [`SmoothScroller`].

/// Offset (px) past which the header switches to its compacted look.
pub const COMPACT_THRESHOLD: f64 = 250.0;
/// Default smooth-scroll duration in milliseconds.
pub const DEFAULT_SCROLL_DURATION: f64 = 1500.0;

/// Anything that owns a vertical scroll position and can locate anchors.
pub trait ScrollHost {
    fn scroll_offset(&self) -> f64;
    fn set_scroll_offset(&mut self, offset: f64);
    /// Document-relative top of the first element matching `selector`.
    fn target_top(&self, selector: &str) -> Option<f64>;
    fn content_height(&self) -> f64;
    fn viewport_height(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub raw_offset: f64,
    pub is_compacted: bool,
    pub progress: f64,
}

impl ScrollState {
    pub fn new(raw_offset: f64, content_height: f64, viewport_height: f64) -> Self {
        let raw_offset = raw_offset.max(0.0);
        Self {
            raw_offset,
            is_compacted: is_compacted(raw_offset),
            progress: scroll_progress(raw_offset, content_height, viewport_height),
        }
    }

    pub fn sample(host: &impl ScrollHost) -> Self {
        Self::new(
            host.scroll_offset(),
            host.content_height(),
            host.viewport_height(),
        )
    }
}

pub fn is_compacted(offset: f64) -> bool {
    offset > COMPACT_THRESHOLD
}

/// Fraction of the scrollable distance already covered, in `[0, 1]`.
pub fn scroll_progress(offset: f64, content_height: f64, viewport_height: f64) -> f64 {
    let offset = offset.max(0.0);
    let scrollable = content_height - viewport_height;
    if scrollable <= 0.0 {
        return if offset > 0.0 { 1.0 } else { 0.0 };
    }
    (offset / scrollable).clamp(0.0, 1.0)
}

/// Quadratic ease-in-out.
///
/// `t` is the elapsed time, `b` the start value, `c` the total change and
/// `d` the duration. The first half accelerates, the second half mirrors it.
pub fn ease_in_out_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t + b;
    }
    let t = t - 1.0;
    -c / 2.0 * (t * (t - 2.0) - 1.0) + b
}

/// Frame state of a single smooth scroll.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimation {
    start_timestamp: Option<f64>,
    start_offset: f64,
    target_offset: f64,
    distance: f64,
    duration: f64,
    finished: bool,
}

impl ScrollAnimation {
    pub fn new(start_offset: f64, target_offset: f64, duration: f64) -> Self {
        Self {
            start_timestamp: None,
            start_offset,
            target_offset,
            distance: target_offset - start_offset,
            duration,
            finished: false,
        }
    }

    /// Advances to `timestamp` (ms) and returns the offset to apply.
    ///
    /// The first call pins the start time. Once the elapsed time reaches the
    /// duration the animation reports the exact target and finishes.
    pub fn step(&mut self, timestamp: f64) -> f64 {
        let start = *self.start_timestamp.get_or_insert(timestamp);
        let elapsed = (timestamp - start).max(0.0);
        if self.duration <= 0.0 || elapsed >= self.duration {
            self.finished = true;
            return self.target_offset;
        }
        ease_in_out_quad(elapsed, self.start_offset, self.distance, self.duration)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn target_offset(&self) -> f64 {
        self.target_offset
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStart {
    /// No animation was running; the caller must start a frame loop.
    Started,
    /// An animation was replaced; the running frame loop picks it up.
    Restarted,
    NoTarget,
}

/// Owns the page's single animation slot.
///
/// A new `scroll_to` cancels whatever is in flight and restarts from the
/// current position.
#[derive(Debug, Default)]
pub struct SmoothScroller {
    active: Option<ScrollAnimation>,
}

impl SmoothScroller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_to(
        &mut self,
        host: &impl ScrollHost,
        selector: &str,
        duration: f64,
    ) -> ScrollStart {
        let Some(target) = host.target_top(selector) else {
            return ScrollStart::NoTarget;
        };
        let animation = ScrollAnimation::new(host.scroll_offset(), target, duration);
        match self.active.replace(animation) {
            Some(_) => ScrollStart::Restarted,
            None => ScrollStart::Started,
        }
    }

    /// Steps the active animation. Returns `true` while more frames are needed.
    pub fn on_frame(&mut self, host: &mut impl ScrollHost, timestamp: f64) -> bool {
        let Some(animation) = self.active.as_mut() else {
            return false;
        };
        host.set_scroll_offset(animation.step(timestamp));
        if animation.is_finished() {
            self.active = None;
            return false;
        }
        true
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub rest_delta: f64,
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 30.0,
            mass: 1.0,
            rest_delta: 0.001,
            rest_speed: 0.01,
        }
    }
}

// integration step and the longest frame gap we are willing to simulate
const SPRING_SUBSTEP_MS: f64 = 4.0;
const SPRING_MAX_FRAME_MS: f64 = 64.0;

/// Damped spring that trails a target value, used for the progress bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, value: f64) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_resting(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Integrates `dt_ms` milliseconds and returns the new value.
    pub fn step(&mut self, dt_ms: f64) -> f64 {
        let mut remaining = dt_ms.clamp(0.0, SPRING_MAX_FRAME_MS);
        while remaining > 0.0 && !self.is_resting() {
            let dt = remaining.min(SPRING_SUBSTEP_MS) / 1000.0;
            remaining -= SPRING_SUBSTEP_MS;

            let SpringConfig {
                stiffness,
                damping,
                mass,
                rest_delta,
                rest_speed,
            } = self.config;
            let force = -stiffness * (self.value - self.target) - damping * self.velocity;
            self.velocity += force / mass * dt;
            self.value += self.velocity * dt;

            if (self.value - self.target).abs() < rest_delta && self.velocity.abs() < rest_speed {
                self.value = self.target;
                self.velocity = 0.0;
            }
        }
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakePage {
        offset: f64,
        anchors: Vec<(&'static str, f64)>,
        writes: usize,
    }

    impl FakePage {
        fn new(offset: f64, anchors: Vec<(&'static str, f64)>) -> Self {
            Self {
                offset,
                anchors,
                writes: 0,
            }
        }
    }

    impl ScrollHost for FakePage {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn set_scroll_offset(&mut self, offset: f64) {
            self.writes += 1;
            self.offset = offset;
        }

        fn target_top(&self, selector: &str) -> Option<f64> {
            self.anchors
                .iter()
                .find(|(s, _)| *s == selector)
                .map(|(_, top)| *top)
        }

        fn content_height(&self) -> f64 {
            4000.0
        }

        fn viewport_height(&self) -> f64 {
            1000.0
        }
    }

    // Drives the scroller like a display would, returning the frame count
    fn run_frames(scroller: &mut SmoothScroller, page: &mut FakePage, frames: &[f64]) -> usize {
        let mut count = 0;
        for ts in frames {
            count += 1;
            if !scroller.on_frame(page, *ts) {
                break;
            }
        }
        count
    }

    #[test]
    fn test_compact_threshold_boundary() {
        assert!(!is_compacted(0.0));
        assert!(!is_compacted(249.9));
        assert!(!is_compacted(250.0));
        assert!(is_compacted(250.5));
        assert!(is_compacted(251.0));
        assert!(is_compacted(10_000.0));
    }

    #[test]
    fn test_scroll_state_from_offset() {
        let state = ScrollState::new(1500.0, 4000.0, 1000.0);
        assert!(state.is_compacted);
        assert_eq!(state.progress, 0.5);

        // overscroll bounce can report negative offsets
        let state = ScrollState::new(-40.0, 4000.0, 1000.0);
        assert_eq!(state.raw_offset, 0.0);
        assert!(!state.is_compacted);
        assert_eq!(state.progress, 0.0);

        let page = FakePage::new(3500.0, vec![]);
        let state = ScrollState::sample(&page);
        assert_eq!(state.progress, 1.0);
        assert!(state.is_compacted);
    }

    #[test]
    fn test_progress_without_scrollable_content() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(250.0, 2000.0, 1000.0), 0.25);
    }

    #[test]
    fn test_easing_boundaries() {
        for (b, c, d) in [(0.0, 1000.0, 2000.0), (120.0, -80.0, 1500.0), (3.5, 0.25, 16.0)] {
            assert_eq!(ease_in_out_quad(0.0, b, c, d), b);
            assert_eq!(ease_in_out_quad(d, b, c, d), b + c);
        }
        // midpoint is half way
        assert_eq!(ease_in_out_quad(1000.0, 0.0, 1000.0, 2000.0), 500.0);
    }

    #[test]
    fn test_easing_monotonic() {
        let (b, c, d) = (200.0, 1000.0, 2000.0);
        let mut prev = ease_in_out_quad(0.0, b, c, d);
        for i in 1..=2000 {
            let next = ease_in_out_quad(i as f64, b, c, d);
            assert!(next >= prev, "easing went backwards at t={i}");
            prev = next;
        }
    }

    #[test]
    fn test_easing_smooth_at_midpoint() {
        let (b, c, d) = (0.0, 1000.0, 2000.0);
        let h = 1e-3;
        let mid = d / 2.0;
        let left = (ease_in_out_quad(mid, b, c, d) - ease_in_out_quad(mid - h, b, c, d)) / h;
        let right = (ease_in_out_quad(mid + h, b, c, d) - ease_in_out_quad(mid, b, c, d)) / h;
        assert!((left - right).abs() < 1e-3);
    }

    #[test]
    fn test_animation_lands_on_target() {
        let mut animation = ScrollAnimation::new(0.0, 1000.0, 2000.0);
        assert_eq!(animation.step(5000.0), 0.0);
        assert!(!animation.is_finished());
        let mid = animation.step(6000.0);
        assert!(mid > 0.0 && mid < 1000.0);
        // late frame overshoots the duration but still lands exactly
        assert_eq!(animation.step(7033.0), 1000.0);
        assert!(animation.is_finished());
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut animation = ScrollAnimation::new(40.0, 900.0, 0.0);
        assert_eq!(animation.step(12.0), 900.0);
        assert!(animation.is_finished());
    }

    #[test]
    fn test_scroll_to_missing_selector_is_noop() {
        let mut page = FakePage::new(320.0, vec![("#history", 1320.0)]);
        let mut scroller = SmoothScroller::new();

        let res = scroller.scroll_to(&page, "#nowhere", 2000.0);
        assert_eq!(res, ScrollStart::NoTarget);
        assert!(!scroller.is_active());
        assert!(!scroller.on_frame(&mut page, 16.0));
        assert_eq!(page.offset, 320.0);
        assert_eq!(page.writes, 0);
    }

    #[test]
    fn test_scroll_to_history_reaches_target() {
        let frame_sets: [Vec<f64>; 3] = [
            (0..200).map(|i| i as f64 * 16.7).collect(),
            vec![100.0, 900.0, 1700.0, 2099.0, 2100.0, 2500.0],
            vec![3.0, 2003.0],
        ];
        for frames in frame_sets {
            let mut page = FakePage::new(0.0, vec![("#history", 1000.0)]);
            let mut scroller = SmoothScroller::new();
            assert_eq!(
                scroller.scroll_to(&page, "#history", 2000.0),
                ScrollStart::Started
            );
            run_frames(&mut scroller, &mut page, &frames);
            assert_eq!(page.offset, 1000.0);
            assert!(!scroller.is_active());
        }
    }

    #[test]
    fn test_scroll_to_upwards() {
        let mut page = FakePage::new(2400.0, vec![("#top", 0.0)]);
        let mut scroller = SmoothScroller::new();
        scroller.scroll_to(&page, "#top", DEFAULT_SCROLL_DURATION);
        let frames: Vec<f64> = (0..120).map(|i| i as f64 * 16.0).collect();
        let mut prev = page.offset;
        for ts in frames {
            let more = scroller.on_frame(&mut page, ts);
            assert!(page.offset <= prev);
            prev = page.offset;
            if !more {
                break;
            }
        }
        assert_eq!(page.offset, 0.0);
    }

    #[test]
    fn test_scroll_to_restarts_in_flight_animation() {
        let mut page = FakePage::new(0.0, vec![("#history", 1000.0), ("#contact", 3000.0)]);
        let mut scroller = SmoothScroller::new();
        scroller.scroll_to(&page, "#history", 2000.0);
        assert!(scroller.on_frame(&mut page, 0.0));
        assert!(scroller.on_frame(&mut page, 500.0));
        let midway = page.offset;
        assert!(midway > 0.0);

        assert_eq!(
            scroller.scroll_to(&page, "#contact", 1000.0),
            ScrollStart::Restarted
        );
        // the restarted animation begins where the first one left off
        assert!(scroller.on_frame(&mut page, 520.0));
        assert_eq!(page.offset, midway);
        assert!(!scroller.on_frame(&mut page, 1520.0));
        assert_eq!(page.offset, 3000.0);
    }

    #[test]
    fn test_spring_settles_on_target() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        assert!(!spring.is_resting());
        let mut prev = spring.value();
        for _ in 0..400 {
            let v = spring.step(16.0);
            // overdamped, so it never passes the target
            assert!(v <= 1.0);
            assert!(v >= prev);
            prev = v;
        }
        assert!(spring.is_resting());
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn test_spring_ignores_huge_frame_gaps() {
        let mut spring = Spring::new(SpringConfig::default(), 0.0);
        spring.set_target(1.0);
        let v = spring.step(10_000.0);
        let mut fresh = Spring::new(SpringConfig::default(), 0.0);
        fresh.set_target(1.0);
        assert_eq!(v, fresh.step(SPRING_MAX_FRAME_MS));
        assert!(spring.step(-5.0) == v);
    }
}
