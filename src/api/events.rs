use crate::api::DrawerOptions;
use crate::core::{PlaybackState, SampleBuffer};

/// Change notifications the drawer reacts to.
///
/// Configuration and sample-data changes come from the host's option surface
/// and decoder; seeks come from the transport. Every event triggers a full
/// repaint, there is no partial invalidation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawerEvent {
    OptionsChanged(DrawerOptions),
    SamplesLoaded(SampleBuffer),
    Seeked(PlaybackState),
}

/// Listener registration for collaborators that emit `DrawerEvent`s.
///
/// A decoder or transport embeds a hub and emits into it; the host wires the
/// drawer (or anything else) in as a listener. Delivery is synchronous and in
/// registration order; serializing concurrent emitters is the host's concern.
#[derive(Default)]
pub struct EventHub {
    listeners: Vec<Box<dyn FnMut(&DrawerEvent)>>,
}

impl EventHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&DrawerEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn emit(&mut self, event: &DrawerEvent) {
        for listener in &mut self.listeners {
            listener(event);
        }
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for EventHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHub")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{DrawerEvent, EventHub};
    use crate::core::PlaybackState;

    #[test]
    fn emits_to_listeners_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut hub = EventHub::new();
        for tag in ["first", "second"] {
            let seen = Rc::clone(&seen);
            hub.subscribe(move |_event| seen.borrow_mut().push(tag));
        }

        hub.emit(&DrawerEvent::Seeked(PlaybackState::at(1.0)));
        assert_eq!(*seen.borrow(), vec!["first", "second"]);
    }
}
