//! Outbound effect events drained by external collaborators

use bloom_core::Vec2;

/// An effect the core requests but does not render itself. Collaborators
/// drain these once per frame; the core never waits on their completion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GardenEvent {
    /// A transient sparkle burst at a point: emitted when a flower is fully
    /// absorbed (intensity 5) or click-removed (intensity 20)
    Sparkle { position: Vec2, intensity: u32 },
}

/// A simple event queue that the simulation pushes to and consumers drain
#[derive(Default)]
pub struct EventBus {
    events: Vec<GardenEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event onto the bus
    pub fn push(&mut self, event: GardenEvent) {
        self.events.push(event);
    }

    /// Drain all events from the bus, returning them
    pub fn drain(&mut self) -> Vec<GardenEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events
    pub fn len(&self) -> usize {
        self.events.len()
    }
}
