use alloc::vec::Vec;

/// One rendered instance of a source item.
///
/// Every source item appears twice in a loop, at `instance_index = i` and `i + N`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoopedItem<T> {
    pub item: T,
    pub instance_index: usize,
}

impl<T> LoopedItem<T> {
    /// Index of the source item this instance was emitted from.
    pub fn source_index(&self, source_len: usize) -> usize {
        if source_len == 0 {
            return 0;
        }
        self.instance_index % source_len
    }

    /// Stable render key: the item's identity plus the instance index.
    pub fn key<K>(&self, id: impl FnOnce(&T) -> K) -> (K, usize) {
        (id(&self.item), self.instance_index)
    }
}

/// Concatenates `items` with itself so that scrolling one half-width wraps seamlessly.
///
/// Returns an empty loop for an empty input; callers render nothing and start no engine.
pub fn build_loop<T: Clone>(items: &[T]) -> Vec<LoopedItem<T>> {
    if items.is_empty() {
        return Vec::new();
    }
    items
        .iter()
        .chain(items.iter())
        .enumerate()
        .map(|(instance_index, item)| LoopedItem {
            item: item.clone(),
            instance_index,
        })
        .collect()
}
