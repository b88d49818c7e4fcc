//! A binary min-heap used as the frontier of the shortest-path search.
//!
//! The heap has no decrease-key operation. Callers that improve the priority
//! of an element insert a fresh copy instead, and skip the outdated copies
//! when they come out of [`BinaryHeap::delete_min`].

use crate::common::{VertexId, Weight};

#[derive(Debug, Clone)]
pub struct BinaryHeap<T> {
    data: Vec<T>,
}

impl<T> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

impl<T: PartialOrd> BinaryHeap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn make_empty(&mut self) {
        self.data.clear();
    }

    pub fn peek_min(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the minimum element, or `None` if the heap is empty.
    pub fn delete_min(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let min = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(min)
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.data[idx] < self.data[parent] {
                self.data.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;
            if left < len && self.data[left] < self.data[smallest] {
                smallest = left;
            }
            if right < len && self.data[right] < self.data[smallest] {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.data.swap(idx, smallest);
            idx = smallest;
        }
    }
}

impl<T: PartialOrd> FromIterator<T> for BinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        iter.into_iter().for_each(|value| heap.insert(value));
        heap
    }
}

/// A snapshot of a vertex's tentative distance, taken when it was queued.
///
/// Entries compare by distance only.
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub vertex: VertexId,
    pub distance: Weight,
}

impl HeapEntry {
    pub fn new(vertex: VertexId, distance: Weight) -> Self {
        Self { vertex, distance }
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.distance.partial_cmp(&other.distance)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    #[test]
    fn test_delete_min_order() {
        let mut heap: BinaryHeap<_> = [5, 3, 8, 1, 9, 2, 2].into_iter().collect();
        assert_eq!(heap.len(), 7);
        assert_eq!(heap.peek_min(), Some(&1));
        let mut out = Vec::new();
        while let Some(v) = heap.delete_min() {
            out.push(v);
        }
        assert_eq!(out, vec![1, 2, 2, 3, 5, 8, 9]);
        assert!(heap.is_empty());
        assert_eq!(heap.delete_min(), None);
    }

    #[test]
    fn test_random_floats() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut values: Vec<f32> = (0..500).map(|_| rng.gen_range(0.0..100.0)).collect();
        let mut heap = BinaryHeap::with_capacity(values.len());
        for v in &values {
            heap.insert(*v);
        }
        values.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let drained: Vec<_> = std::iter::from_fn(|| heap.delete_min()).collect();
        assert_eq!(drained, values);
    }

    #[test]
    fn test_stale_entries_coexist() {
        let mut heap = BinaryHeap::new();
        heap.insert(HeapEntry::new(3, 5.0));
        heap.insert(HeapEntry::new(2, 2.0));
        heap.insert(HeapEntry::new(3, 3.0));
        assert_eq!(heap.len(), 3);

        let first = heap.delete_min().unwrap();
        assert_eq!((first.vertex, first.distance), (2, 2.0));
        let second = heap.delete_min().unwrap();
        assert_eq!((second.vertex, second.distance), (3, 3.0));
        let third = heap.delete_min().unwrap();
        assert_eq!((third.vertex, third.distance), (3, 5.0));
    }

    #[test]
    fn test_make_empty() {
        let mut heap: BinaryHeap<_> = [4, 1].into_iter().collect();
        heap.make_empty();
        assert!(heap.is_empty());
        assert_eq!(heap.peek_min(), None);
    }
}
