//! Listener registries for input surfaces and the focus-loss channel.
//!
//! Listeners hand the hub the sending half of an `mpsc` channel. A
//! controller subscribes the same sender to its surface and to the focus
//! channel, so pointer and focus events reach it in delivery order.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    mpsc::Sender,
};

use super::event::InputEvent;

/// Handle returned by [`EventHub::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Listener {
    id: ListenerId,
    sender: Sender<InputEvent>,
    suppress_default: bool,
}

/// Broadcast registry of event listeners.
#[derive(Default)]
pub struct EventHub {
    listeners: Vec<Listener>,
    next_id: u64,
}

impl EventHub {
    /// Create a hub with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener.
    ///
    /// `suppress_default` marks the listener as wanting the host to skip its
    /// default handling for events it receives.
    pub fn subscribe(
        &mut self,
        sender: Sender<InputEvent>,
        suppress_default: bool,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(Listener {
            id,
            sender,
            suppress_default,
        });
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }

    /// Send `event` to every listener.
    ///
    /// Listeners whose receiver has been dropped are removed. Returns `true`
    /// when at least one live listener asked for default suppression.
    pub fn broadcast(&mut self, event: InputEvent) -> bool {
        let mut suppress = false;
        self.listeners.retain(|l| {
            if l.sender.send(event).is_err() {
                log::debug!("pruning disconnected listener {:?}", l.id);
                return false;
            }
            suppress |= l.suppress_default;
            true
        });
        suppress
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether nothing is listening.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

/// Stable identity of an input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u64);

impl SurfaceId {
    /// Allocate a process-unique id.
    #[must_use]
    pub fn allocate() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A source of pointer events (a window, a canvas, a test harness).
pub struct InputSurface {
    id: SurfaceId,
    hub: EventHub,
}

impl Default for InputSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSurface {
    /// Create a surface with a freshly allocated id.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id(SurfaceId::allocate())
    }

    /// Create a surface with a caller-chosen id.
    #[must_use]
    pub fn with_id(id: SurfaceId) -> Self {
        Self {
            id,
            hub: EventHub::new(),
        }
    }

    /// Identity used by attach/detach.
    #[must_use]
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    /// Deliver an event to every attached listener.
    ///
    /// Returns `true` when the host should suppress its default handling.
    pub fn dispatch(&mut self, event: InputEvent) -> bool {
        self.hub.broadcast(event)
    }

    /// Listener registry of this surface.
    pub fn hub_mut(&mut self) -> &mut EventHub {
        &mut self.hub
    }

    /// Number of attached listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.hub.len()
    }
}

/// Application-wide focus-loss notifications.
///
/// Owned by the host (one per event loop) and passed to controllers on
/// attach/detach, instead of living in global state.
#[derive(Default)]
pub struct FocusChannel {
    hub: EventHub,
}

impl FocusChannel {
    /// Create a channel with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tell every subscriber that input focus was lost.
    pub fn notify_focus_lost(&mut self) {
        let _ = self.hub.broadcast(InputEvent::FocusLost);
    }

    /// Listener registry of this channel.
    pub fn hub_mut(&mut self) -> &mut EventHub {
        &mut self.hub
    }

    /// Number of subscribers.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.hub.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::input::PointerId;

    fn down() -> InputEvent {
        InputEvent::PointerDown {
            pointer: PointerId(1),
            x: 1.0,
            y: 2.0,
        }
    }

    #[test]
    fn broadcast_reaches_all_listeners() {
        let mut hub = EventHub::new();
        let (tx_a, rx_a) = mpsc::channel();
        let (tx_b, rx_b) = mpsc::channel();
        let _ = hub.subscribe(tx_a, false);
        let _ = hub.subscribe(tx_b, false);

        assert!(!hub.broadcast(down()));
        assert_eq!(rx_a.try_recv(), Ok(down()));
        assert_eq!(rx_b.try_recv(), Ok(down()));
    }

    #[test]
    fn suppress_default_reported_when_any_listener_asks() {
        let mut hub = EventHub::new();
        let (tx_a, _rx_a) = mpsc::channel();
        let (tx_b, _rx_b) = mpsc::channel();
        let _ = hub.subscribe(tx_a, false);
        let _ = hub.subscribe(tx_b, true);
        assert!(hub.broadcast(down()));
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut hub = EventHub::new();
        let (tx, rx) = mpsc::channel();
        let id = hub.subscribe(tx, true);

        assert!(hub.unsubscribe(id));
        assert!(!hub.unsubscribe(id));
        assert!(!hub.broadcast(down()));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn dropped_receivers_are_pruned() {
        let mut hub = EventHub::new();
        let (tx, rx) = mpsc::channel();
        let _ = hub.subscribe(tx, true);
        drop(rx);

        assert!(!hub.broadcast(down()));
        assert!(hub.is_empty());
    }

    #[test]
    fn surface_ids_are_unique() {
        let a = InputSurface::new();
        let b = InputSurface::new();
        assert_ne!(a.id(), b.id());
        assert_eq!(InputSurface::with_id(SurfaceId(42)).id(), SurfaceId(42));
    }

    #[test]
    fn focus_channel_sends_focus_lost() {
        let mut focus = FocusChannel::new();
        let (tx, rx) = mpsc::channel();
        let _ = focus.hub_mut().subscribe(tx, false);
        focus.notify_focus_lost();
        assert_eq!(rx.try_recv(), Ok(InputEvent::FocusLost));
    }
}
