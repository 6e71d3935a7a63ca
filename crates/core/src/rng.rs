//! RNG module - random piece generation and the upcoming-piece queue.
//!
//! Uses a simple seeded LCG so whole games replay deterministically from a
//! seed. Each draw picks a kind uniformly from the seven, a rotation index
//! uniformly from that kind's valid rotation set, and a uniformly random RGB
//! color. The queue is kept at a fixed minimum length: the front is consumed
//! at spawn and the back is replenished immediately.
//!
//! Note: drawing the spawn rotation at random (rather than always starting
//! upright) is intentional engine behavior, kept as-is.

use std::collections::VecDeque;

use gridfall_types::{PieceKind, PieceTemplate, Rgb};

use crate::pieces::rotation_count;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// The upcoming-piece queue.
///
/// Front is consumed on spawn; the queue refills itself so its length never
/// drops below `min_len` once a public call returns.
#[derive(Debug, Clone)]
pub struct PieceQueue {
    pending: VecDeque<PieceTemplate>,
    min_len: usize,
    rng: SimpleRng,
}

impl PieceQueue {
    /// Create a queue prefilled to `min_len` templates.
    pub fn new(seed: u32, min_len: usize) -> Self {
        let mut queue = Self {
            pending: VecDeque::with_capacity(min_len + 1),
            min_len,
            rng: SimpleRng::new(seed),
        };
        queue.refill();
        queue
    }

    fn refill(&mut self) {
        while self.pending.len() < self.min_len {
            let template = self.random_template();
            self.pending.push_back(template);
        }
    }

    fn random_template(&mut self) -> PieceTemplate {
        let kind = PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize];
        let rotation = self.rng.next_range(rotation_count(kind) as u32) as u8;
        let color = Rgb::new(
            self.rng.next_range(256) as u8,
            self.rng.next_range(256) as u8,
            self.rng.next_range(256) as u8,
        );
        PieceTemplate {
            kind,
            rotation,
            color,
        }
    }

    /// Take the front template and immediately restore the minimum length.
    pub fn pop(&mut self) -> PieceTemplate {
        let template = match self.pending.pop_front() {
            Some(template) => template,
            // Unreachable with min_len >= 1; draw fresh rather than panic.
            None => self.random_template(),
        };
        self.refill();
        template
    }

    /// Push a template in front of everything currently queued.
    pub fn push_front(&mut self, template: PieceTemplate) {
        self.pending.push_front(template);
    }

    /// Ordered view of the queued templates, front first.
    pub fn iter(&self) -> impl Iterator<Item = &PieceTemplate> {
        self.pending.iter()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_queue_holds_minimum_length() {
        let mut queue = PieceQueue::new(7, 3);
        assert_eq!(queue.len(), 3);

        for _ in 0..20 {
            queue.pop();
            assert!(queue.len() >= 3, "queue dropped below its minimum");
        }
    }

    #[test]
    fn test_queue_rotations_are_valid() {
        let mut queue = PieceQueue::new(99, 3);
        for _ in 0..200 {
            let template = queue.pop();
            assert!(template.rotation < rotation_count(template.kind));
        }
    }

    #[test]
    fn test_queue_pop_matches_preview() {
        let mut queue = PieceQueue::new(5, 3);
        let front = *queue.iter().next().unwrap();
        assert_eq!(queue.pop(), front);
    }

    #[test]
    fn test_queue_push_front_is_consumed_first() {
        let mut queue = PieceQueue::new(1, 3);
        let template = PieceTemplate {
            kind: PieceKind::O,
            rotation: 0,
            color: Rgb::new(1, 2, 3),
        };
        queue.push_front(template);
        assert_eq!(queue.len(), 4);
        assert_eq!(queue.pop(), template);
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_queue_deterministic_per_seed() {
        let mut a = PieceQueue::new(42, 3);
        let mut b = PieceQueue::new(42, 3);
        for _ in 0..50 {
            assert_eq!(a.pop(), b.pop());
        }
    }
}
