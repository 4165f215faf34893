//! Synchronous observer registry for battle events.

use im::Vector;

use super::event::{BattleEvent, BattleEventKind};

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u32);

type Listener = Box<dyn FnMut(&BattleEvent)>;

struct Subscription {
    id: ListenerId,
    /// `None` listens to every kind.
    kind: Option<BattleEventKind>,
    listener: Listener,
}

/// Routes each emitted event to the listeners registered for its kind, in
/// subscription order, and keeps every event in `history`.
#[derive(Default)]
pub struct EventBus {
    subscriptions: Vec<Subscription>,
    next_id: u32,
    history: Vector<BattleEvent>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Listen to one kind of event.
    pub fn subscribe(&mut self, kind: BattleEventKind, listener: impl FnMut(&BattleEvent) + 'static) -> ListenerId {
        self.add(Some(kind), Box::new(listener))
    }

    /// Listen to every event.
    pub fn subscribe_all(&mut self, listener: impl FnMut(&BattleEvent) + 'static) -> ListenerId {
        self.add(None, Box::new(listener))
    }

    fn add(&mut self, kind: Option<BattleEventKind>, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription { id, kind, listener });
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    pub fn emit(&mut self, event: BattleEvent) {
        let kind = event.kind();
        tracing::trace!(event = kind.name(), "emit");
        for sub in &mut self.subscriptions {
            if sub.kind.map_or(true, |k| k == kind) {
                (sub.listener)(&event);
            }
        }
        self.history.push_back(event);
    }

    /// Every event emitted so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<BattleEvent> {
        &self.history
    }

    /// Emitted events of one kind, oldest first.
    pub fn history_of(&self, kind: BattleEventKind) -> impl Iterator<Item = &BattleEvent> {
        self.history.iter().filter(move |e| e.kind() == kind)
    }

    #[must_use]
    pub fn last(&self) -> Option<&BattleEvent> {
        self.history.last()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.subscriptions.len()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.subscriptions.len())
            .field("history", &self.history.len())
            .finish()
    }
}
