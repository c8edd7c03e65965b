//! Subscription registry for store events.

use coursekit_core::{CourseEvent, EventTopic, SubscriptionId};
use tracing::trace;

/// Callback invoked for each published event.
pub type EventHandler = Box<dyn FnMut(&CourseEvent)>;

struct Subscription {
    id: SubscriptionId,
    topic: Option<EventTopic>,
    handler: EventHandler,
}

/// Ordered list of event handlers.
///
/// Handlers run synchronously, in registration order, on the caller's
/// thread.
#[derive(Default)]
pub struct EventBus {
    subscriptions: Vec<Subscription>,
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for every event.
    pub fn subscribe(&mut self, handler: impl FnMut(&CourseEvent) + 'static) -> SubscriptionId {
        self.add(None, Box::new(handler))
    }

    /// Register a handler for one topic only.
    pub fn subscribe_topic(
        &mut self,
        topic: EventTopic,
        handler: impl FnMut(&CourseEvent) + 'static,
    ) -> SubscriptionId {
        self.add(Some(topic), Box::new(handler))
    }

    fn add(&mut self, topic: Option<EventTopic>, handler: EventHandler) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.subscriptions.push(Subscription { id, topic, handler });
        id
    }

    /// Remove a handler. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    /// Deliver `event` to every matching handler.
    pub fn emit(&mut self, event: &CourseEvent) {
        let topic = event.topic();
        let mut delivered = 0usize;
        for sub in &mut self.subscriptions {
            if sub.topic.map_or(true, |t| t == topic) {
                (sub.handler)(event);
                delivered += 1;
            }
        }
        trace!(?topic, delivered, "event emitted");
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Whether no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}
