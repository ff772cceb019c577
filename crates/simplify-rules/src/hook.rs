//! Observer hook the host compiler calls for each statically known call.
//!
//! The host keeps an `ObserverSet` and notifies it from every entry point that
//! compiles a call, whatever arity-specialized shape the call arrives in.
//! Unregistering on unload is the whole teardown.

use crate::engine::Engine;
use simplify_forms::{CallForm, HostCall};
use std::sync::Arc;

/// Receives normalized call forms during compilation.
pub trait CallObserver: Send + Sync {
    fn call_observed(&self, call: &CallForm);
}

impl CallObserver for Engine {
    fn call_observed(&self, call: &CallForm) {
        self.observe(call);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Host-side list of registered observers.
#[derive(Default)]
pub struct ObserverSet {
    next_id: u64,
    observers: Vec<(ObserverId, Arc<dyn CallObserver>)>,
}

impl ObserverSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, observer: Arc<dyn CallObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove an observer. Returns false if it was not registered.
    pub fn unregister(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != id);
        self.observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Normalize a call from any entry point and pass it to every observer.
    pub fn notify(&self, call: HostCall<'_>) {
        let Some(call) = call.normalize() else {
            return;
        };
        for (_, observer) in &self.observers {
            observer.call_observed(&call);
        }
    }
}
