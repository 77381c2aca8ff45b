use serde_json::Value;
use std::rc::Rc;

/// What caused a [ChangeEvent].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeKind {
    /// A segment was pushed.
    Push,
    /// Segments were popped.
    Pop,
    /// A link was clicked and the path was cut back to it.
    Navigate,
    /// The path was cleared.
    Reset,
}

/// Payload delivered to change listeners.
#[derive(Clone, Debug, PartialEq)]
pub struct ChangeEvent {
    /// What caused the change.
    pub kind: ChangeKind,
    /// The label path after the change. Empty after a reset.
    pub path: Vec<String>,
    /// The context relevant to the change.
    ///
    /// For a push this is the pushed segment's context; for a pop or a
    /// navigation it is the context of the newly active segment.
    pub context: Option<Value>,
}

impl ChangeEvent {
    /// The event emitted by a reset: no path and no context.
    pub fn reset() -> Self {
        Self {
            kind: ChangeKind::Reset,
            path: Vec::new(),
            context: None,
        }
    }
}

/// A change listener.
pub type Listener = dyn Fn(&ChangeEvent);

/// Handle returned by [ChangeSignal::listen], used to remove the listener again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

/// Synchronous change notifier.
///
/// Listeners run in registration order on the calling thread.
#[derive(Default, Clone)]
pub struct ChangeSignal {
    listeners: Vec<(ListenerId, Rc<Listener>)>,
    next_id: usize,
}

impl ChangeSignal {
    /// Creates a signal without listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    pub fn listen(&mut self, listener: impl Fn(&ChangeEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        let listener: Rc<Listener> = Rc::new(listener);
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unlisten(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Notify all listeners.
    pub fn emit(&self, event: &ChangeEvent) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }
}

impl std::fmt::Debug for ChangeSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeSignal")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
