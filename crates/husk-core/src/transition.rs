use std::collections::VecDeque;
use std::time::Duration;

use web_time::Instant;

use crate::{Layer, ViewId, ViewNode};

/// How restored properties land on the live view.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum TransitionStyle {
    #[default]
    None,
    /// Writes immediately and fades the restored content in over the duration.
    CrossDissolve(Duration),
}

pub type Mutation = Box<dyn FnOnce(&mut ViewNode)>;

/// A batch of property writes aimed at one view.
///
/// Holds the target by id only; if the view is gone by the time the
/// transition runs, it does nothing.
pub struct Transition {
    pub target: ViewId,
    pub style: TransitionStyle,
    pub layer: Layer,
    mutation: Mutation,
}

impl Transition {
    pub fn new(
        target: ViewId,
        style: TransitionStyle,
        layer: Layer,
        mutation: impl FnOnce(&mut ViewNode) + 'static,
    ) -> Self {
        Self {
            target,
            style,
            layer,
            mutation: Box::new(mutation),
        }
    }

    /// Runs the writes on `view`, which must be the live node for `target`.
    pub(crate) fn apply(self, view: &mut ViewNode) {
        debug_assert_eq!(view.id(), self.target);
        (self.mutation)(view);
        if let TransitionStyle::CrossDissolve(duration) = self.style {
            view.start_dissolve(duration);
        }
    }
}

impl std::fmt::Debug for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transition")
            .field("target", &self.target)
            .field("style", &self.style)
            .field("layer", &self.layer)
            .field("mutation", &"<closure>")
            .finish()
    }
}

/// Decides when submitted transitions run. The tree owns one and pulls due
/// transitions out of it; the scheduler never touches views itself.
pub trait TransitionScheduler {
    fn submit(&mut self, transition: Transition);
    /// Transitions ready at `now`, in submission order.
    fn take_due(&mut self, now: Instant) -> Vec<Transition>;
    /// Everything still queued, in submission order.
    fn take_all(&mut self) -> Vec<Transition>;
    fn pending(&self) -> usize;
}

/// Runs every transition on the next pump, which `recover_view_state`
/// performs itself.
#[derive(Default)]
pub struct Immediate {
    queue: Vec<Transition>,
}

impl TransitionScheduler for Immediate {
    fn submit(&mut self, transition: Transition) {
        self.queue.push(transition);
    }

    fn take_due(&mut self, _now: Instant) -> Vec<Transition> {
        std::mem::take(&mut self.queue)
    }

    fn take_all(&mut self) -> Vec<Transition> {
        std::mem::take(&mut self.queue)
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}

/// Holds each transition for a fixed delay on the animation clock.
pub struct Delayed {
    delay: Duration,
    queue: VecDeque<(Instant, Transition)>,
}

impl Delayed {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            queue: VecDeque::new(),
        }
    }
}

impl TransitionScheduler for Delayed {
    fn submit(&mut self, transition: Transition) {
        let due = crate::animation::now() + self.delay;
        self.queue.push_back((due, transition));
    }

    fn take_due(&mut self, now: Instant) -> Vec<Transition> {
        // Constant delay keeps the queue sorted by due time.
        let mut out = Vec::new();
        while self.queue.front().is_some_and(|(due, _)| *due <= now) {
            if let Some((_, t)) = self.queue.pop_front() {
                out.push(t);
            }
        }
        out
    }

    fn take_all(&mut self) -> Vec<Transition> {
        self.queue.drain(..).map(|(_, t)| t).collect()
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}

/// Never due on its own; transitions run only on `ViewTree::flush_transitions`.
#[derive(Default)]
pub struct Manual {
    queue: Vec<Transition>,
}

impl TransitionScheduler for Manual {
    fn submit(&mut self, transition: Transition) {
        self.queue.push(transition);
    }

    fn take_due(&mut self, _now: Instant) -> Vec<Transition> {
        Vec::new()
    }

    fn take_all(&mut self) -> Vec<Transition> {
        std::mem::take(&mut self.queue)
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}
