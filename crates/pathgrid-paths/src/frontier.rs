use std::collections::BinaryHeap;

/// Sentinel value meaning "unreachable" / unbounded in cost maps and f-limits.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Frontier record
// ---------------------------------------------------------------------------

/// A frontier record: priority key, insertion sequence number, flat index.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Entry {
    pub(crate) key: i32,
    pub(crate) seq: u64,
    pub(crate) idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest key first, and the
        // earliest push among equal keys.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// Min-priority frontier with FIFO tie-breaking.
///
/// Every search builds its own `Frontier` and drops it on return; nothing is
/// shared between calls.
#[derive(Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Push `idx` with priority `key`.
    pub(crate) fn push(&mut self, key: i32, idx: usize) {
        self.heap.push(Entry {
            key,
            seq: self.seq,
            idx,
        });
        self.seq += 1;
    }

    /// Pop the record with the lowest key (earliest pushed on ties).
    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
