use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::warn;

/// Lifecycle notifications emitted by the facade. Observers use these for
/// status display and logging; payloads carry only what a display needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    SearchStarted,
    SearchSucceeded { count: usize },
    DetailsStarted { id: String },
    DetailsSucceeded { id: String },
    RankCompleted { strategy: String },
}

type Subscriber = Box<dyn Fn(&AppEvent) + Send + Sync>;

/// One-to-many synchronous broadcast. Subscribers run in subscription order;
/// a panicking subscriber is caught and logged so later subscribers still
/// receive the event.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Subscriber>,
}

impl EventBus {
    pub fn new() -> Self {
        EventBus {
            subscribers: Vec::new(),
        }
    }

    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: Fn(&AppEvent) + Send + Sync + 'static,
    {
        self.subscribers.push(Box::new(handler));
    }

    pub fn emit(&self, event: &AppEvent) {
        for (index, handler) in self.subscribers.iter().enumerate() {
            if catch_unwind(AssertUnwindSafe(|| handler(event))).is_err() {
                warn!(subscriber = index, ?event, "Event subscriber panicked; continuing delivery");
            }
        }
    }
}
