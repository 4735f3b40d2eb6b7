use std::collections::VecDeque;

use crate::InputEvent;

/// FIFO buffer between the windowing layer and the game.
///
/// Window callbacks push events as they arrive; the game drains the
/// whole queue once per tick and applies the events in arrival order.
/// Draining at tick boundaries means a key press and its release in the
/// same frame still cancel correctly, because both are observed.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Appends an event to the back of the queue.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Removes and returns all buffered events, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MoveKey;
    use glam::Vec2;

    #[test]
    fn drain_preserves_arrival_order() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::KeyDown(MoveKey::Up));
        queue.push(InputEvent::MouseMove(Vec2::new(1.0, 2.0)));
        queue.push(InputEvent::KeyUp(MoveKey::Up));

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![
                InputEvent::KeyDown(MoveKey::Up),
                InputEvent::MouseMove(Vec2::new(1.0, 2.0)),
                InputEvent::KeyUp(MoveKey::Up),
            ]
        );
    }

    #[test]
    fn drain_empties_the_queue() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::KeyDown(MoveKey::Left));
        assert_eq!(queue.len(), 1);

        let _ = queue.drain().count();
        assert!(queue.is_empty());
    }

    #[test]
    fn empty_drain_yields_nothing() {
        let mut queue = InputQueue::new();
        assert_eq!(queue.drain().count(), 0);
    }
}
