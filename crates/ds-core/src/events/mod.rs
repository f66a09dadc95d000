//! Typed publish/subscribe between the shell's state and its observers

use std::any::{Any, TypeId};
use std::fmt::Debug;

use ahash::AHashMap;
use parking_lot::Mutex;
use tracing::debug;

/// Marker for values that travel over the [`EventBus`]
pub trait Event: Any + Debug + Send + Sync {}

type Handler = Box<dyn FnMut(&dyn Any) + Send + Sync>;

/// Shell-wide event bus. Handlers run synchronously on the publishing thread
/// and must not publish from inside a handler.
#[derive(Default)]
pub struct EventBus {
    handlers: Mutex<AHashMap<TypeId, Vec<Handler>>>,
}

/// Events raised by the dashboard shell
pub mod events {
    use super::Event;
    use crate::dashboards::DashboardId;
    use crate::wizard::WidgetConfig;

    /// A dashboard tab was created
    #[derive(Debug, Clone)]
    pub struct DashboardAdded {
        pub id: DashboardId,
        pub name: String,
    }

    /// A dashboard tab was renamed
    #[derive(Debug, Clone)]
    pub struct DashboardRenamed {
        pub id: DashboardId,
        pub name: String,
    }

    /// A dashboard tab was deleted
    #[derive(Debug, Clone)]
    pub struct DashboardRemoved {
        pub id: DashboardId,
    }

    /// The active dashboard tab changed
    #[derive(Debug, Clone)]
    pub struct DashboardSelected {
        pub id: DashboardId,
    }

    /// A wizard session handed off a finished widget
    #[derive(Debug, Clone)]
    pub struct WidgetCreated {
        pub dashboard: DashboardId,
        pub config: WidgetConfig,
    }

    /// "Apply Filters" was pressed in the side panel
    #[derive(Debug, Clone)]
    pub struct FiltersApplied {
        pub summary: String,
    }

    impl Event for DashboardAdded {}
    impl Event for DashboardRenamed {}
    impl Event for DashboardRemoved {}
    impl Event for DashboardSelected {}
    impl Event for WidgetCreated {}
    impl Event for FiltersApplied {}
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for every future event of type `E`
    pub fn subscribe<E, F>(&self, mut handler: F)
    where
        E: Event,
        F: FnMut(&E) + Send + Sync + 'static,
    {
        let erased: Handler = Box::new(move |event: &dyn Any| {
            if let Some(event) = event.downcast_ref::<E>() {
                handler(event);
            }
        });
        self.handlers.lock().entry(TypeId::of::<E>()).or_default().push(erased);
    }

    /// Deliver `event` to its subscribers in subscription order. Returns how
    /// many handlers saw it.
    pub fn publish<E: Event>(&self, event: E) -> usize {
        let mut handlers = self.handlers.lock();
        let Some(subscribers) = handlers.get_mut(&TypeId::of::<E>()) else {
            debug!(?event, "event published without subscribers");
            return 0;
        };
        debug!(?event, subscribers = subscribers.len(), "event published");
        for handler in subscribers.iter_mut() {
            handler(&event as &dyn Any);
        }
        subscribers.len()
    }

    pub fn subscriber_count<E: Event>(&self) -> usize {
        self.handlers
            .lock()
            .get(&TypeId::of::<E>())
            .map_or(0, Vec::len)
    }
}
