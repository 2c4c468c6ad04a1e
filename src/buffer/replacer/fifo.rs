//! FIFO (First-In-First-Out) replacement policy.

use std::collections::{HashSet, VecDeque};

use crate::common::FrameId;

/// Evicts frames in the order their pages were loaded.
///
/// Re-accessing a frame does not move it; only loading a page into a frame
/// that is not already tracked appends it to the queue.
pub struct FifoReplacer {
    /// Frame IDs in load order (front = oldest).
    queue: VecDeque<FrameId>,

    /// Set for O(1) membership check.
    in_queue: HashSet<FrameId>,
}

impl FifoReplacer {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            in_queue: HashSet::new(),
        }
    }

    /// Record that a frame was accessed.
    pub fn record_access(&mut self, frame_id: FrameId) {
        if self.in_queue.insert(frame_id) {
            self.queue.push_back(frame_id);
        }
    }

    /// Select a victim frame: the oldest tracked one.
    pub fn evict(&mut self) -> Option<FrameId> {
        let frame_id = self.queue.pop_front()?;
        self.in_queue.remove(&frame_id);
        Some(frame_id)
    }

    /// Stop tracking a frame. Called when its page is discarded.
    pub fn remove(&mut self, frame_id: FrameId) {
        if self.in_queue.remove(&frame_id) {
            self.queue.retain(|&f| f != frame_id);
        }
    }
}

impl Default for FifoReplacer {
    fn default() -> Self {
        Self::new()
    }
}
