//! One-shot deferred actions gated by a generation counter
//!
//! Every problem or level replacement bumps the owning game's generation.
//! An action scheduled under an older generation is dropped when it comes
//! due, so it can never touch state that has already been replaced.

use tracing::debug;

#[derive(Clone, Debug)]
struct Pending<A> {
    due_ms: f64,
    generation: u64,
    action: A,
}

#[derive(Clone, Debug)]
pub struct Deferred<A> {
    pending: Vec<Pending<A>>,
}

impl<A> Default for Deferred<A> {
    fn default() -> Self {
        Self { pending: Vec::new() }
    }
}

impl<A: std::fmt::Debug> Deferred<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_ms: f64, generation: u64, action: A) {
        self.pending.push(Pending { due_ms, generation, action });
    }

    /// Remove everything due at `now_ms`; return, oldest first, the actions
    /// still belonging to `generation`
    pub fn drain_due(&mut self, now_ms: f64, generation: u64) -> Vec<A> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.pending).into_iter().partition(|p| p.due_ms <= now_ms);
        self.pending = rest;

        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms));
        due.into_iter()
            .filter_map(|p| {
                if p.generation == generation {
                    Some(p.action)
                } else {
                    debug!(action = ?p.action, stale = p.generation, current = generation, "dropping stale timer");
                    None
                }
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_when_due() {
        let mut q = Deferred::new();
        q.schedule(100.0, 1, "a");
        assert!(q.drain_due(99.0, 1).is_empty());
        assert_eq!(q.drain_due(100.0, 1), vec!["a"]);
        assert!(q.is_empty());
    }

    #[test]
    fn test_stale_generation_is_dropped() {
        let mut q = Deferred::new();
        q.schedule(100.0, 1, "old");
        q.schedule(150.0, 2, "new");
        assert_eq!(q.drain_due(200.0, 2), vec!["new"]);
        assert_eq!(q.len(), 0);
    }

    #[test]
    fn test_due_order() {
        let mut q = Deferred::new();
        q.schedule(300.0, 0, 3);
        q.schedule(100.0, 0, 1);
        q.schedule(200.0, 0, 2);
        q.schedule(900.0, 0, 9);
        assert_eq!(q.drain_due(500.0, 0), vec![1, 2, 3]);
        assert_eq!(q.len(), 1);
    }
}
