//! Event queue for sounds raised during a tick
//!
//! The session runs headless: entities and combat never touch the audio
//! device. They push `SoundEvent`s instead, and the frame loop drains the
//! queue and plays whatever the sound bank has loaded. Tests can assert on
//! the queue without any audio backend.

/// A queue for events of a single type.
/// Events are collected during the tick and drained afterwards.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    /// Check if there are any events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of events in queue
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sounds the simulation can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEvent {
    PlayerAttack,
    PlayerHurt,
    PlayerDeath,
    EnemyAttack,
    EnemyHurt,
    EnemyDeath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_clears_queue() {
        let mut queue = EventQueue::new();
        queue.send(SoundEvent::PlayerAttack);
        queue.send(SoundEvent::EnemyHurt);
        assert_eq!(queue.len(), 2);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained, vec![SoundEvent::PlayerAttack, SoundEvent::EnemyHurt]);
        assert!(queue.is_empty());
    }
}
