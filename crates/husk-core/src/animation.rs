use std::cell::RefCell;
use std::time::Duration;

use web_time::Instant;

thread_local! {
    static CLOCK: RefCell<Option<Box<dyn Clock>>> = RefCell::new(None);
}

/// Current time on this thread's animation clock.
pub fn now() -> Instant {
    CLOCK.with(|c| {
        c.borrow()
            .as_ref()
            .map(|c| c.now())
            .unwrap_or_else(Instant::now)
    })
}

pub trait Clock: 'static {
    fn now(&self) -> Instant;
}

/// Fixed instant, moved by installing a new one.
#[derive(Clone)]
pub struct TestClock {
    pub t: Instant,
}
impl Clock for TestClock {
    fn now(&self) -> Instant {
        self.t
    }
}

/// Install the animation clock for the current thread, replacing any previous one.
pub fn set_clock(clock: Box<dyn Clock>) {
    CLOCK.with(|c| *c.borrow_mut() = Some(clock));
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Scalar eased from a start value to a target over a fixed duration.
#[derive(Clone, Debug)]
pub struct AnimatedValue {
    current: f32,
    start: f32,
    target: f32,
    duration: Duration,
    start_time: Option<Instant>,
}

impl AnimatedValue {
    pub fn new(initial: f32, duration: Duration) -> Self {
        Self {
            current: initial,
            start: initial,
            target: initial,
            duration,
            start_time: None,
        }
    }

    pub fn set_target(&mut self, target: f32) {
        self.start = self.current;
        self.target = target;
        self.start_time = Some(now());
    }

    /// Advances to the clock's current time. Returns `true` while still running.
    pub fn update(&mut self) -> bool {
        let Some(start) = self.start_time else {
            return false;
        };
        let elapsed = now().saturating_duration_since(start);
        if elapsed >= self.duration {
            self.current = self.target;
            self.start_time = None;
            return false;
        }

        let t = ease_in_out(elapsed.as_secs_f32() / self.duration.as_secs_f32());
        self.current = self.start + (self.target - self.start) * t;
        true
    }

    pub fn get(&self) -> f32 {
        self.current
    }
}
