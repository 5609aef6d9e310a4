//! Change notification for state-holding components.
//!
//! Loaders and the session manager keep plain state and expose it through
//! read-only snapshots. A caller that wants to re-render on change registers a
//! [`StateObserver`]; any `Fn(&S)` closure qualifies.

pub trait StateObserver<S> {
    fn on_change(&self, state: &S);
}

impl<S, F> StateObserver<S> for F
where
    F: Fn(&S),
{
    fn on_change(&self, state: &S) {
        self(state)
    }
}

/// Registered observers, notified in subscription order
pub struct Observers<S> {
    observers: Vec<Box<dyn StateObserver<S>>>,
}

impl<S> Default for Observers<S> {
    fn default() -> Self {
        Self {
            observers: Vec::new(),
        }
    }
}

impl<S> Observers<S> {
    pub fn subscribe(&mut self, observer: impl StateObserver<S> + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn notify(&self, state: &S) {
        for observer in &self.observers {
            observer.on_change(state);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}
