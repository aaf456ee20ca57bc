// Index of non-empty buckets for constant-time random sampling

use rand::Rng;

/// Tracks which buckets currently hold at least one entry.
///
/// `buckets` lists the occupied bucket indices in no particular order;
/// `positions[b]` is the slot of bucket `b` inside `buckets`, or `None` when
/// the bucket is empty. Both are updated whenever a chain goes from empty
/// to non-empty or back, which keeps insertion, removal and uniform
/// selection O(1).
#[derive(Debug, Clone, Default)]
pub(crate) struct OccupiedBuckets {
    buckets: Vec<usize>,
    positions: Vec<Option<usize>>,
}

impl OccupiedBuckets {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            buckets: Vec::new(),
            positions: vec![None; capacity],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.buckets.len()
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, bucket: usize) -> bool {
        matches!(self.positions.get(bucket), Some(Some(_)))
    }

    /// Record `bucket` as occupied. No-op if already recorded.
    pub(crate) fn insert(&mut self, bucket: usize) {
        let Some(slot) = self.positions.get_mut(bucket) else {
            return;
        };
        if slot.is_none() {
            *slot = Some(self.buckets.len());
            self.buckets.push(bucket);
        }
    }

    /// Forget `bucket`. The last recorded bucket moves into its slot.
    pub(crate) fn remove(&mut self, bucket: usize) {
        let Some(position) = self.positions.get_mut(bucket).and_then(Option::take) else {
            return;
        };
        self.buckets.swap_remove(position);
        if let Some(&moved) = self.buckets.get(position) {
            self.positions[moved] = Some(position);
        }
    }

    /// Pick one occupied bucket uniformly at random.
    pub(crate) fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        if self.buckets.is_empty() {
            return None;
        }
        Some(self.buckets[rng.gen_range(0..self.buckets.len())])
    }

    pub(crate) fn clear(&mut self) {
        self.buckets.clear();
        self.positions.fill(None);
    }

    #[cfg(test)]
    pub(crate) fn sorted(&self) -> Vec<usize> {
        let mut buckets = self.buckets.clone();
        buckets.sort_unstable();
        buckets
    }
}
