use crate::compare::{LessThan, Natural};
use crate::error::{Error, Result};
use crate::rng::{PriorityRng, DEFAULT_SEED};
use crate::treap::cursor::Cursor;
use crate::treap::node::{self, Node, Tree};
use crate::treap::tree;
use std::fmt;
use std::sync::Arc;

/// A persistent ordered multiset implemented by a treap.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property. Each
/// node has an entry and a priority. No entry in the left subtree of a node is ordered after the
/// node's entry and no entry in its right subtree is ordered before it. Insertion places an entry
/// to the right of its equivalents. The priority of a node is less than or equal to the
/// priorities of all nodes in its subtrees. By randomly generating priorities, the expected height
/// of the tree is proportional to the logarithm of the number of entries.
///
/// The multiset is persistent: `insert`, `erase` and `update` never modify the receiver and instead
/// return a new version that shares every untouched subtree with the old one. Only the nodes on the
/// path to the modified node are copied. Because no version is ever mutated, versions can be read
/// from several threads at once.
///
/// Each version carries the state of its priority generator, so a lineage of inserts is
/// reproducible. Two versions derived from the same parent draw the same next priority.
///
/// # Examples
///
/// ```
/// use persistent_treap::TreapMultiset;
///
/// let empty: TreapMultiset<u32> = TreapMultiset::new();
/// let t = empty.insert(3).insert(1).insert(3);
///
/// assert_eq!(empty.len(), 0);
/// assert_eq!(t.len(), 3);
/// assert_eq!(t.count(&3), 2);
/// assert!(t.contains(&1));
///
/// let u = t.erase(&3);
/// assert_eq!(u.iter().collect::<Vec<&u32>>(), vec![&1, &3]);
/// assert_eq!(t.iter().collect::<Vec<&u32>>(), vec![&1, &3, &3]);
/// ```
pub struct TreapMultiset<T, C = Natural> {
    root: Tree<T>,
    rng: PriorityRng,
    less: C,
}

impl<T: Ord> TreapMultiset<T> {
    /// Constructs a new, empty `TreapMultiset<T>` ordered by `Ord`.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::TreapMultiset;
    ///
    /// let t: TreapMultiset<u32> = TreapMultiset::new();
    /// ```
    pub fn new() -> Self {
        Self::with_seed_and_comparator(DEFAULT_SEED, Natural)
    }

    /// Constructs a new, empty `TreapMultiset<T>` whose priorities are drawn from a generator
    /// seeded with `seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::TreapMultiset;
    ///
    /// let t: TreapMultiset<u32> = TreapMultiset::with_seed(1);
    /// ```
    pub fn with_seed(seed: u32) -> Self {
        Self::with_seed_and_comparator(seed, Natural)
    }
}

impl<T, C> TreapMultiset<T, C>
where
    C: LessThan<T>,
{
    /// Constructs a new, empty `TreapMultiset<T, C>` ordered by `less`.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::TreapMultiset;
    ///
    /// let t = TreapMultiset::with_comparator(|a: &u32, b: &u32| a > b);
    /// let t = t.insert(1).insert(2);
    /// assert_eq!(t.iter().collect::<Vec<&u32>>(), vec![&2, &1]);
    /// ```
    pub fn with_comparator(less: C) -> Self {
        Self::with_seed_and_comparator(DEFAULT_SEED, less)
    }

    /// Constructs a new, empty `TreapMultiset<T, C>` ordered by `less` whose priorities are drawn
    /// from a generator seeded with `seed`.
    pub fn with_seed_and_comparator(seed: u32, less: C) -> Self {
        TreapMultiset {
            root: None,
            rng: PriorityRng::new(seed),
            less,
        }
    }

    pub(crate) fn from_parts(root: Tree<T>, rng: PriorityRng, less: C) -> Self {
        TreapMultiset { root, rng, less }
    }

    /// Checks if an entry equivalent to `key` exists in the multiset.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::TreapMultiset;
    ///
    /// let t = TreapMultiset::new().insert(1);
    /// assert!(!t.contains(&0));
    /// assert!(t.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        tree::contains(&self.root, key, &self.less)
    }

    /// Returns a cursor at an entry equivalent to `key`, or the end cursor if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::TreapMultiset;
    ///
    /// let t = TreapMultiset::new().insert(1);
    /// assert_eq!(t.find(&1).get(), Some(&1));
    /// assert!(t.find(&2).is_end());
    /// ```
    pub fn find(&self, key: &T) -> Cursor<T> {
        let cursor = self.lower_bound(key);
        match cursor.get() {
            Some(entry) if self.less.equivalent(entry, key) => cursor,
            _ => self.end(),
        }
    }

    /// Returns a cursor at the first entry that is not ordered before `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::TreapMultiset;
    ///
    /// let t = TreapMultiset::from_vec(vec![1, 3, 3, 5]);
    /// assert_eq!(t.lower_bound(&3).rank(), 1);
    /// assert_eq!(t.lower_bound(&4).get(), Some(&5));
    /// assert!(t.lower_bound(&6).is_end());
    /// ```
    pub fn lower_bound(&self, key: &T) -> Cursor<T> {
        Cursor::new(tree::lower_bound(&self.root, key, &self.less), &self.root)
    }

    /// Returns a cursor at the first entry that is ordered after `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::TreapMultiset;
    ///
    /// let t = TreapMultiset::from_vec(vec![1, 3, 3, 5]);
    /// assert_eq!(t.upper_bound(&3).rank(), 3);
    /// assert!(t.upper_bound(&5).is_end());
    /// ```
    pub fn upper_bound(&self, key: &T) -> Cursor<T> {
        Cursor::new(tree::upper_bound(&self.root, key, &self.less), &self.root)
    }

    /// Returns the number of entries equivalent to `key` in `O(log N)` time.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::TreapMultiset;
    ///
    /// let t = TreapMultiset::from_vec(vec![1, 3, 3, 5]);
    /// assert_eq!(t.count(&3), 2);
    /// assert_eq!(t.count(&4), 0);
    /// ```
    pub fn count(&self, key: &T) -> usize {
        let first = self.lower_bound(key);
        let last = self.upper_bound(key);
        first.distance_to(&last) as usize
    }

    /// Returns the number of entries ordered strictly before `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::TreapMultiset;
    ///
    /// let t = TreapMultiset::from_vec(vec![1, 3, 3, 5]);
    /// assert_eq!(t.rank_of(&3), 1);
    /// assert_eq!(t.rank_of(&9), 4);
    /// ```
    pub fn rank_of(&self, key: &T) -> usize {
        self.lower_bound(key).rank()
    }

    /// Returns an iterator over the entries that are not ordered before `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::TreapMultiset;
    ///
    /// let t = TreapMultiset::from_vec(vec![1, 3, 5, 7]);
    /// assert_eq!(t.range_from(&4).collect::<Vec<&u32>>(), vec![&5, &7]);
    /// ```
    pub fn range_from(&self, key: &T) -> TreapMultisetIter<'_, T> {
        TreapMultisetIter {
            inner: tree::InOrder::from_key(&self.root, key, &self.less),
        }
    }
}

impl<T, C> TreapMultiset<T, C>
where
    T: Clone,
    C: LessThan<T> + Clone,
{
    /// Returns a new version with `entry` inserted. Equivalent entries are kept side by side.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::TreapMultiset;
    ///
    /// let t = TreapMultiset::new();
    /// let u = t.insert(1);
    /// assert_eq!(t.len(), 0);
    /// assert_eq!(u.len(), 1);
    /// ```
    pub fn insert(&self, entry: T) -> Self {
        let (priority, rng) = self.rng.next_priority(self.len());
        let root = tree::insert(self.root.clone(), Node::new(entry, priority), &self.less);
        Self::from_parts(root, rng, self.less.clone())
    }

    /// Returns a new version with one entry equivalent to `key` removed. Among several equivalent
    /// entries, the first one in order is removed. If there is no such entry, the returned version
    /// is equal to the receiver.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::TreapMultiset;
    ///
    /// let t = TreapMultiset::new().insert(1).insert(1);
    /// assert_eq!(t.erase(&1).len(), 1);
    /// assert_eq!(t.erase(&2).len(), 2);
    /// ```
    pub fn erase(&self, key: &T) -> Self {
        let cursor = self.find(key);
        if cursor.is_end() {
            return self.clone();
        }
        self.erase_path(cursor.path())
    }

    /// Returns a new version with the entry under `cursor` removed.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` is at the end or was not taken from this version.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::TreapMultiset;
    ///
    /// let t = TreapMultiset::from_vec(vec![1, 2, 3]);
    /// let u = t.erase_at(&t.begin());
    /// assert_eq!(u.iter().collect::<Vec<&u32>>(), vec![&2, &3]);
    /// ```
    pub fn erase_at(&self, cursor: &Cursor<T>) -> Self {
        match self.try_erase_at(cursor) {
            Ok(version) => version,
            Err(error) => panic!("Error: {}.", error),
        }
    }

    /// Returns a new version with the entry under `cursor` removed, or an error if `cursor` is at
    /// the end or was not taken from this version.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::{Error, TreapMultiset};
    ///
    /// let t = TreapMultiset::from_vec(vec![1, 2, 3]);
    /// let u = t.insert(4);
    /// assert_eq!(t.try_erase_at(&t.end()).err(), Some(Error::ExhaustedCursor));
    /// assert_eq!(t.try_erase_at(&u.begin()).err(), Some(Error::ForeignCursor));
    /// assert_eq!(t.try_erase_at(&t.begin()).map(|v| v.len()), Ok(2));
    /// ```
    pub fn try_erase_at(&self, cursor: &Cursor<T>) -> Result<Self> {
        if !cursor.belongs_to(&self.root) {
            return Err(Error::ForeignCursor);
        }
        if cursor.is_end() {
            return Err(Error::ExhaustedCursor);
        }
        Ok(self.erase_path(cursor.path()))
    }

    fn erase_path(&self, path: &[Arc<Node<T>>]) -> Self {
        Self::from_parts(tree::remove(path), self.rng.clone(), self.less.clone())
    }

    /// Returns a new version where the first entry in order equivalent to `old` is replaced by
    /// `new`. If there is no such entry, the returned version is equal to the receiver.
    ///
    /// # Panics
    ///
    /// Panics if `old` and `new` are not equivalent, since `new` takes the exact position of the
    /// replaced entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::TreapMultiset;
    ///
    /// let by_key = |a: &(u32, char), b: &(u32, char)| a.0 < b.0;
    /// let t = TreapMultiset::with_comparator(by_key).insert((1, 'a')).insert((2, 'b'));
    /// let u = t.update(&(1, 'a'), (1, 'c'));
    /// assert_eq!(u.find(&(1, ' ')).get(), Some(&(1, 'c')));
    /// assert_eq!(t.find(&(1, ' ')).get(), Some(&(1, 'a')));
    /// ```
    pub fn update(&self, old: &T, new: T) -> Self {
        match self.try_update(old, new) {
            Ok(version) => version,
            Err(error) => panic!("Error: {}.", error),
        }
    }

    /// Returns a new version where an entry equivalent to `old` is replaced by `new`, or an error
    /// if `old` and `new` are not equivalent.
    pub fn try_update(&self, old: &T, new: T) -> Result<Self> {
        if !self.less.equivalent(old, &new) {
            return Err(Error::NotEquivalent);
        }
        let cursor = self.find(old);
        if cursor.is_end() {
            return Ok(self.clone());
        }
        let root = tree::replace(cursor.path(), new);
        Ok(Self::from_parts(root, self.rng.clone(), self.less.clone()))
    }
}

impl<T, C> TreapMultiset<T, C> {
    pub(crate) fn root(&self) -> &Tree<T> {
        &self.root
    }

    /// Returns the number of entries in the multiset.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::TreapMultiset;
    ///
    /// let t = TreapMultiset::new().insert(1).insert(1);
    /// assert_eq!(t.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        node::len(&self.root)
    }

    /// Returns `true` if the multiset is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::TreapMultiset;
    ///
    /// let t: TreapMultiset<u32> = TreapMultiset::new();
    /// assert!(t.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns a cursor at the first entry, or the end cursor if the multiset is empty.
    pub fn begin(&self) -> Cursor<T> {
        Cursor::new(tree::leftmost(&self.root), &self.root)
    }

    /// Returns the cursor positioned past the last entry.
    pub fn end(&self) -> Cursor<T> {
        Cursor::new(Vec::new(), &self.root)
    }

    /// Returns the entry of rank `rank`, that is the entry with exactly `rank` entries ordered
    /// before it. Returns `None` if `rank` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::TreapMultiset;
    ///
    /// let t = TreapMultiset::from_vec(vec![4, 8, 15, 16]);
    /// assert_eq!(t.select(2), Some(&15));
    /// assert_eq!(t.select(4), None);
    /// ```
    pub fn select(&self, rank: usize) -> Option<&T> {
        tree::select(&self.root, rank)
    }

    /// Returns the minimum entry of the multiset. Returns `None` if the multiset is empty.
    pub fn min(&self) -> Option<&T> {
        let mut current = self.root.as_ref()?;
        while let Some(ref left_node) = current.left {
            current = left_node;
        }
        Some(&current.entry)
    }

    /// Returns the maximum entry of the multiset. Returns `None` if the multiset is empty.
    pub fn max(&self) -> Option<&T> {
        let mut current = self.root.as_ref()?;
        while let Some(ref right_node) = current.right {
            current = right_node;
        }
        Some(&current.entry)
    }

    /// Calls `f` on every entry in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::TreapMultiset;
    ///
    /// let t = TreapMultiset::from_vec(vec![2, 1]);
    /// let mut sum = 0;
    /// t.for_each(|entry| sum += entry);
    /// assert_eq!(sum, 3);
    /// ```
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(f);
    }

    /// Returns an iterator over the multiset. The iterator will yield entries using in-order
    /// traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::TreapMultiset;
    ///
    /// let t = TreapMultiset::new().insert(3).insert(1);
    ///
    /// let mut iterator = t.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> TreapMultisetIter<'_, T> {
        TreapMultisetIter {
            inner: tree::InOrder::new(&self.root),
        }
    }
}

impl<T, C: Clone> Clone for TreapMultiset<T, C> {
    fn clone(&self) -> Self {
        TreapMultiset {
            root: self.root.clone(),
            rng: self.rng.clone(),
            less: self.less.clone(),
        }
    }
}

impl<T, C> Default for TreapMultiset<T, C>
where
    C: LessThan<T> + Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: PartialEq, C> PartialEq for TreapMultiset<T, C> {
    fn eq(&self, other: &TreapMultiset<T, C>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C> Eq for TreapMultiset<T, C> {}

impl<T: fmt::Debug, C> fmt::Debug for TreapMultiset<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, C> IntoIterator for &'a TreapMultiset<T, C>
where
    T: 'a,
{
    type IntoIter = TreapMultisetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `TreapMultiset<T, C>`.
///
/// This iterator traverses the entries of the multiset in-order and yields immutable references.
pub struct TreapMultisetIter<'a, T> {
    inner: tree::InOrder<'a, T>,
}

impl<'a, T> Iterator for TreapMultisetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|node| &node.entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for TreapMultisetIter<'a, T> where T: 'a {}

#[cfg(test)]
mod tests {
    use super::TreapMultiset;
    use crate::error::Error;
    use crate::treap::tree::tests::check;

    fn entries(t: &TreapMultiset<u32>) -> Vec<u32> {
        t.iter().cloned().collect()
    }

    #[test]
    fn test_len_empty() {
        let t: TreapMultiset<u32> = TreapMultiset::new();
        assert_eq!(t.len(), 0);
        assert!(t.is_empty());
        assert!(t.begin().is_end());
        assert_eq!(t.begin(), t.end());
    }

    #[test]
    fn test_insert() {
        let t = TreapMultiset::new().insert(1);
        assert!(t.contains(&1));
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_insert_keeps_invariants() {
        let mut t = TreapMultiset::new();
        for i in 0..200 {
            t = t.insert((i * 37) % 101);
            assert_eq!(check(t.root()), i as usize + 1);
        }
    }

    #[test]
    fn test_insert_is_persistent() {
        let t = TreapMultiset::new().insert(2).insert(1);
        let u = t.insert(3);
        assert_eq!(entries(&t), vec![1, 2]);
        assert_eq!(entries(&u), vec![1, 2, 3]);
    }

    #[test]
    fn test_branches_replay_priority() {
        let t = TreapMultiset::new().insert(5);
        let left = t.insert(1);
        let right = t.insert(9);
        let left_root = left.root().as_ref().unwrap();
        let right_root = right.root().as_ref().unwrap();
        let left_new = if left_root.entry == 1 { left_root } else { left_root.left.as_ref().unwrap() };
        let right_new = if right_root.entry == 9 { right_root } else { right_root.right.as_ref().unwrap() };
        assert_eq!(left_new.priority, right_new.priority);
    }

    #[test]
    fn test_erase() {
        let t = TreapMultiset::new().insert(1).insert(2).insert(2);
        let u = t.erase(&2);
        assert_eq!(entries(&u), vec![1, 2]);
        assert_eq!(entries(&u.erase(&2)), vec![1]);
        assert_eq!(entries(&t), vec![1, 2, 2]);
    }

    #[test]
    fn test_erase_removes_first_equivalent() {
        let by_key = |a: &(u32, char), b: &(u32, char)| a.0 < b.0;
        let t = TreapMultiset::with_comparator(by_key)
            .insert((1, 'a'))
            .insert((1, 'b'))
            .insert((1, 'c'))
            .insert((0, 'z'));
        let u = t.erase(&(1, ' '));
        assert_eq!(
            u.iter().collect::<Vec<&(u32, char)>>(),
            vec![&(0, 'z'), &(1, 'b'), &(1, 'c')],
        );
        let v = t.update(&(1, ' '), (1, 'd'));
        assert_eq!(v.select(1), Some(&(1, 'd')));
        assert_eq!(v.select(2), Some(&(1, 'b')));
    }

    #[test]
    fn test_erase_absent() {
        let t = TreapMultiset::new().insert(1);
        let u = t.erase(&5);
        assert_eq!(u, t);
        assert!(TreapMultiset::<u32>::new().erase(&1).is_empty());
    }

    #[test]
    fn test_erase_keeps_invariants() {
        let mut t = TreapMultiset::new();
        for i in 0..200 {
            t = t.insert((i * 37) % 101);
        }
        for i in 0..200 {
            t = t.erase(&((i * 53) % 101));
            check(t.root());
        }
        assert!(t.len() < 200);
    }

    #[test]
    fn test_erase_at() {
        let t = TreapMultiset::from_vec(vec![1, 2, 3, 4]);
        let mut cursor = t.begin();
        cursor += 2;
        let u = t.erase_at(&cursor);
        assert_eq!(entries(&u), vec![1, 2, 4]);
        assert_eq!(check(u.root()), 3);
    }

    #[test]
    fn test_try_erase_at_errors() {
        let t = TreapMultiset::from_vec(vec![1, 2, 3]);
        let u = t.insert(4);
        assert_eq!(t.try_erase_at(&t.end()).err(), Some(Error::ExhaustedCursor));
        assert_eq!(t.try_erase_at(&u.find(&1)).err(), Some(Error::ForeignCursor));
    }

    #[test]
    #[should_panic]
    fn test_erase_at_end() {
        let t = TreapMultiset::from_vec(vec![1, 2, 3]);
        t.erase_at(&t.end());
    }

    #[test]
    #[should_panic]
    fn test_erase_at_foreign() {
        let t = TreapMultiset::from_vec(vec![1, 2, 3]);
        let u = t.insert(0);
        u.erase_at(&t.begin());
    }

    #[test]
    fn test_update() {
        let by_tens = |a: &u32, b: &u32| a / 10 < b / 10;
        let t = TreapMultiset::with_comparator(by_tens).insert(11).insert(25).insert(37);
        let u = t.update(&20, 29);
        assert_eq!(u.iter().collect::<Vec<&u32>>(), vec![&11, &29, &37]);
        assert_eq!(t.iter().collect::<Vec<&u32>>(), vec![&11, &25, &37]);
        assert_eq!(u.len(), 3);
    }

    #[test]
    fn test_update_absent() {
        let t = TreapMultiset::new().insert(1);
        assert_eq!(t.update(&2, 2), t);
    }

    #[test]
    fn test_try_update_not_equivalent() {
        let t = TreapMultiset::new().insert(1);
        assert_eq!(t.try_update(&1, 2).err(), Some(Error::NotEquivalent));
    }

    #[test]
    #[should_panic]
    fn test_update_not_equivalent() {
        let t = TreapMultiset::new().insert(1);
        t.update(&1, 2);
    }

    #[test]
    fn test_find() {
        let t = TreapMultiset::new().insert(1).insert(3);
        assert_eq!(t.find(&3).get(), Some(&3));
        assert!(t.find(&2).is_end());
        assert!(t.find(&4).is_end());
    }

    #[test]
    fn test_count() {
        let t = TreapMultiset::from_vec(vec![5, 1, 5, 3, 5]);
        assert_eq!(t.count(&5), 3);
        assert_eq!(t.count(&1), 1);
        assert_eq!(t.count(&2), 0);
    }

    #[test]
    fn test_min_max_select() {
        let t = TreapMultiset::from_vec(vec![7, 3, 9, 1]);
        assert_eq!(t.min(), Some(&1));
        assert_eq!(t.max(), Some(&9));
        assert_eq!(t.select(1), Some(&3));
        assert_eq!(t.select(4), None);
        let empty: TreapMultiset<u32> = TreapMultiset::new();
        assert_eq!(empty.min(), None);
        assert_eq!(empty.max(), None);
    }

    #[test]
    fn test_iter() {
        let t = TreapMultiset::new().insert(3).insert(1).insert(2);
        let iter = t.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect::<Vec<&u32>>(), vec![&1, &2, &3]);
        assert_eq!((&t).into_iter().count(), 3);
    }

    #[test]
    fn test_range_from() {
        let t = TreapMultiset::from_vec(vec![1, 3, 3, 5]);
        assert_eq!(t.range_from(&3).collect::<Vec<&u32>>(), vec![&3, &3, &5]);
        assert_eq!(t.range_from(&6).count(), 0);
        assert_eq!(t.range_from(&0).len(), 4);
    }

    #[test]
    fn test_for_each() {
        let t = TreapMultiset::from_vec(vec![2, 1, 3]);
        let mut visited = Vec::new();
        t.for_each(|entry| visited.push(*entry));
        assert_eq!(visited, vec![1, 2, 3]);
    }

    #[test]
    fn test_debug() {
        let t = TreapMultiset::from_vec(vec![2, 1]);
        assert_eq!(format!("{:?}", t), "[1, 2]");
    }
}
