// src/models/cursor.rs
//
// Walks the chain one motif at a time. When the current motif finishes
// a cycle the cursor moves to the neighbor in its direction; at either
// end of the chain it reverses instead.

use std::num::NonZeroUsize;
use tracing::debug;

use super::chain::{build_chain, ChainNode, TraversalDirection};
use crate::config::Palette;
use crate::render::{MotifGeometry, Surface};

#[derive(Debug, Clone)]
pub struct PathCursor {
    nodes: Vec<ChainNode>,
    current: usize,
    direction: TraversalDirection,
}

impl PathCursor {
    pub fn new(length: NonZeroUsize, step_size: f32) -> Self {
        Self {
            nodes: build_chain(length.get(), step_size),
            current: 0,
            direction: TraversalDirection::Forward,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &ChainNode {
        &self.nodes[self.current]
    }

    pub fn node(&self, index: usize) -> Option<&ChainNode> {
        self.nodes.get(index)
    }

    pub fn direction(&self) -> TraversalDirection {
        self.direction
    }

    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        palette: &Palette,
        geometry: &MotifGeometry,
    ) {
        self.current().draw(surface, palette, geometry);
    }

    pub fn update<F>(&mut self, on_complete: F)
    where
        F: FnOnce(f32),
    {
        let mut completed = None;
        self.nodes[self.current].update(|committed| completed = Some(committed));
        let Some(committed) = completed else {
            return;
        };

        let mut at_boundary = false;
        let next = self.nodes[self.current].neighbor(self.direction, || at_boundary = true);
        if at_boundary {
            self.direction = self.direction.flipped();
            debug!(
                "node {} is a chain boundary; direction now {:?}",
                self.current, self.direction
            );
        } else {
            debug!("node {} committed {}; handing off to node {}", self.current, committed, next);
        }
        self.current = next;

        on_complete(committed);
    }

    pub fn start_updating<F>(&mut self, on_start: F) -> bool
    where
        F: FnOnce(),
    {
        let started = self.nodes[self.current].start_updating(on_start);
        if !started {
            debug!("node {} is already animating", self.current);
        }
        started
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(length: usize) -> PathCursor {
        // a step of 0.5 completes a cycle in three updates
        PathCursor::new(NonZeroUsize::new(length).unwrap(), 0.5)
    }

    // Starts the current node and updates until it completes
    fn complete_cycle(cursor: &mut PathCursor) -> f32 {
        assert!(cursor.start_updating(|| ()));
        let mut completed = None;
        while completed.is_none() {
            cursor.update(|c| completed = Some(c));
        }
        completed.unwrap_or_default()
    }

    #[test]
    fn test_starts_at_first_node_going_forward() {
        let cursor = cursor(5);
        assert_eq!(cursor.current_index(), 0);
        assert_eq!(cursor.direction(), TraversalDirection::Forward);
        assert_eq!(cursor.node_count(), 5);
    }

    #[test]
    fn test_update_without_start_does_nothing() {
        let mut cursor = cursor(3);
        for _ in 0..10 {
            cursor.update(|_| panic!("nothing should complete"));
        }
        assert_eq!(cursor.current_index(), 0);
    }

    #[test]
    fn test_hand_off_to_next_node() {
        let mut cursor = cursor(3);
        assert_eq!(complete_cycle(&mut cursor), 1.0);
        assert_eq!(cursor.current_index(), 1);
        assert_eq!(cursor.direction(), TraversalDirection::Forward);
        assert_eq!(cursor.node(0).map(|n| n.progress().committed()), Some(1.0));
    }

    #[test]
    fn test_boundary_bounce() {
        let length = 4;
        let mut cursor = cursor(length);
        let mut flips = Vec::new();

        // two full sweeps there and back
        for _ in 0..(4 * length) {
            let before_index = cursor.current_index();
            let before_direction = cursor.direction();
            complete_cycle(&mut cursor);

            if cursor.direction() != before_direction {
                flips.push((before_index, before_direction));
                assert_eq!(cursor.current_index(), before_index);
            } else {
                let expected = match before_direction {
                    TraversalDirection::Forward => before_index + 1,
                    TraversalDirection::Backward => before_index - 1,
                };
                assert_eq!(cursor.current_index(), expected);
            }
        }

        for (index, direction) in &flips {
            match direction {
                TraversalDirection::Forward => assert_eq!(*index, length - 1),
                TraversalDirection::Backward => assert_eq!(*index, 0),
            }
        }
        assert_eq!(flips.len(), 4);
    }

    #[test]
    fn test_boundary_node_reverses_its_own_cycle() {
        let mut cursor = cursor(2);
        complete_cycle(&mut cursor); // node 0 -> 1
        assert_eq!(complete_cycle(&mut cursor), 1.0); // node 1 hits the end
        assert_eq!(cursor.current_index(), 1);
        assert_eq!(cursor.direction(), TraversalDirection::Backward);

        // the same node now plays back down to zero before handing off
        assert_eq!(complete_cycle(&mut cursor), 0.0);
        assert_eq!(cursor.current_index(), 0);
    }

    #[test]
    fn test_single_node_always_bounces() {
        let mut cursor = cursor(1);
        complete_cycle(&mut cursor);
        assert_eq!(cursor.current_index(), 0);
        assert_eq!(cursor.direction(), TraversalDirection::Backward);
        complete_cycle(&mut cursor);
        assert_eq!(cursor.direction(), TraversalDirection::Forward);
    }

    #[test]
    fn test_start_updating_twice_is_ignored() {
        let mut cursor = cursor(3);
        let mut starts = 0;
        assert!(cursor.start_updating(|| starts += 1));
        assert!(!cursor.start_updating(|| starts += 1));
        assert_eq!(starts, 1);
    }
}
