// src/models/chain.rs
//
// The fixed chain of motifs. Nodes live in a Vec and link to their
// neighbors by index; the first node has no prev and the last no next.

use tracing::debug;

use crate::animation::Progress;
use crate::config::Palette;
use crate::render::{draw_motif, MotifFrame, MotifGeometry, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalDirection {
    Forward,
    Backward,
}

impl TraversalDirection {
    pub fn flipped(self) -> Self {
        match self {
            TraversalDirection::Forward => TraversalDirection::Backward,
            TraversalDirection::Backward => TraversalDirection::Forward,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChainNode {
    index: usize,
    progress: Progress,
    next: Option<usize>,
    prev: Option<usize>,
}

/// Builds `count` linked nodes, each starting idle at zero
pub fn build_chain(count: usize, step_size: f32) -> Vec<ChainNode> {
    let nodes: Vec<ChainNode> = (0..count)
        .map(|index| ChainNode {
            index,
            progress: Progress::new(step_size),
            next: (index + 1 < count).then_some(index + 1),
            prev: index.checked_sub(1),
        })
        .collect();
    debug!("built chain of {} nodes", nodes.len());
    nodes
}

impl ChainNode {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn next(&self) -> Option<usize> {
        self.next
    }

    pub fn prev(&self) -> Option<usize> {
        self.prev
    }

    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        palette: &Palette,
        geometry: &MotifGeometry,
    ) {
        let frame = MotifFrame::compute(self.progress.value(), surface.size(), geometry);
        draw_motif(surface, &frame, palette.color_for(self.index));
    }

    pub fn update<F>(&mut self, on_complete: F)
    where
        F: FnOnce(f32),
    {
        self.progress.step(on_complete);
    }

    pub fn start_updating<F>(&mut self, on_start: F) -> bool
    where
        F: FnOnce(),
    {
        self.progress.trigger(on_start)
    }

    /// Index of the neighbor in `direction`. At either end of the chain
    /// `on_boundary` fires and the node's own index comes back.
    pub fn neighbor<F>(&self, direction: TraversalDirection, on_boundary: F) -> usize
    where
        F: FnOnce(),
    {
        let link = match direction {
            TraversalDirection::Backward => self.prev,
            TraversalDirection::Forward => self.next,
        };
        match link {
            Some(index) => index,
            None => {
                on_boundary();
                self.index
            }
        }
    }
}
