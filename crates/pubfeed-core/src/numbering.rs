//! Display numbering shared across categories

/// Running reverse counter shown beside each rendered entry.
///
/// Starts at the number of entries to render and counts down by one per
/// entry, ignoring category boundaries, so the last entry shown is `1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCounter {
    remaining: usize,
}

impl DisplayCounter {
    pub fn new(total: usize) -> Self {
        Self { remaining: total }
    }

    /// Index for the next entry; stays at 0 once exhausted
    pub fn next_index(&mut self) -> usize {
        let current = self.remaining;
        self.remaining = self.remaining.saturating_sub(1);
        current
    }

    /// Indices not handed out yet
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl Iterator for DisplayCounter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            None
        } else {
            Some(self.next_index())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for DisplayCounter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_to_one() {
        let indices: Vec<_> = DisplayCounter::new(4).collect();
        assert_eq!(indices, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_empty_counter() {
        let mut counter = DisplayCounter::new(0);
        assert_eq!(counter.next(), None);
        assert_eq!(counter.next_index(), 0);
    }

    #[test]
    fn test_next_index_tracks_remaining() {
        let mut counter = DisplayCounter::new(2);
        assert_eq!(counter.next_index(), 2);
        assert_eq!(counter.remaining(), 1);
        assert_eq!(counter.next_index(), 1);
        assert_eq!(counter.remaining(), 0);
    }
}
