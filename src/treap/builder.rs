use crate::compare::{LessThan, Natural};
use crate::rng::{self, PriorityRng, BULK_LOAD_SEED, DEFAULT_SEED};
use crate::treap::multiset::TreapMultiset;
use crate::treap::node::{self, Node, Tree};
use crate::treap::tree;
use log::debug;
use std::collections::VecDeque;
use std::iter::FromIterator;
use std::sync::Arc;

impl<T> TreapMultiset<T>
where
    T: Ord + Clone,
{
    /// Constructs a `TreapMultiset<T>` holding every entry of `entries`.
    ///
    /// Sorted input is loaded in `O(N)` time. Any other input is loaded in `O(N log N)` time.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::TreapMultiset;
    ///
    /// let t = TreapMultiset::from_vec(vec![1, 2, 2, 3]);
    /// assert_eq!(t.len(), 4);
    /// assert_eq!(t.count(&2), 2);
    /// ```
    pub fn from_vec(entries: Vec<T>) -> Self {
        Self::from_vec_with(DEFAULT_SEED, Natural, entries)
    }
}

impl<T, C> TreapMultiset<T, C>
where
    T: Clone,
    C: LessThan<T> + Clone,
{
    /// Constructs a `TreapMultiset<T, C>` ordered by `less` holding every entry of `entries`. The
    /// returned version draws future priorities from a generator seeded with `seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::TreapMultiset;
    ///
    /// let t = TreapMultiset::from_vec_with(1, |a: &u32, b: &u32| a > b, vec![1, 3, 2]);
    /// assert_eq!(t.iter().collect::<Vec<&u32>>(), vec![&3, &2, &1]);
    /// ```
    pub fn from_vec_with(seed: u32, less: C, entries: Vec<T>) -> Self {
        let rng = PriorityRng::new(seed);
        if entries.len() < 2 {
            return match entries.into_iter().next() {
                Some(entry) => {
                    let (priority, rng) = rng.next_priority(0);
                    Self::from_parts(Some(Arc::new(Node::new(entry, priority))), rng, less)
                },
                None => Self::from_parts(None, rng, less),
            };
        }

        let is_sorted = !entries.windows(2).any(|pair| less.less(&pair[1], &pair[0]));
        debug!(
            "bulk loading {} entries from {} input",
            entries.len(),
            if is_sorted { "sorted" } else { "unsorted" }
        );
        if is_sorted {
            Self::from_parts(build_sorted(entries), rng, less)
        } else {
            let (root, rng) = build_unsorted(entries, rng, &less);
            Self::from_parts(root, rng, less)
        }
    }
}

impl<T, C> FromIterator<T> for TreapMultiset<T, C>
where
    T: Clone,
    C: LessThan<T> + Clone + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec_with(DEFAULT_SEED, C::default(), iter.into_iter().collect())
    }
}

// Inserts one entry at a time into a scratch tree that no version can see yet, so every node
// stays uniquely owned and is reused in place.
fn build_unsorted<T, C>(entries: Vec<T>, mut rng: PriorityRng, less: &C) -> (Tree<T>, PriorityRng)
where
    T: Clone,
    C: LessThan<T>,
{
    let mut root = None;
    for entry in entries {
        let (priority, next) = rng.next_priority(node::len(&root));
        root = tree::insert(root, Node::new(entry, priority), less);
        rng = next;
    }
    (root, rng)
}

/// The shape of a balanced tree over positions `0..n` of a sorted sequence.
struct Shape {
    left: Vec<Option<usize>>,
    right: Vec<Option<usize>>,
    root: usize,
}

impl Shape {
    /// Pairs positions bottom-up. On each level, every `2 * start`-th position starting at
    /// `start - 1` adopts the next two unpaired positions of the level below as children. Positions
    /// left unpaired carry over to the next level. Requires `n >= 1`.
    fn new(n: usize) -> Self {
        let mut left = vec![None; n];
        let mut right = vec![None; n];
        let mut level: Vec<usize> = Vec::new();
        let mut start = 1;
        while level.len() != 1 || start - 1 < n {
            let mut below = level.into_iter();
            let mut next = Vec::new();
            for parent in (start - 1..n).step_by(2 * start) {
                left[parent] = below.next();
                right[parent] = below.next();
                next.push(parent);
            }
            next.extend(below);
            level = next;
            start *= 2;
        }
        Shape {
            left,
            right,
            root: level[0],
        }
    }

    fn level_order(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.left.len());
        let mut queue = VecDeque::new();
        queue.push_back(self.root);
        while let Some(position) = queue.pop_front() {
            order.push(position);
            queue.extend(self.left[position]);
            queue.extend(self.right[position]);
        }
        order
    }
}

// Priorities are drawn from a dedicated generator, sorted and handed out in level order, so every
// node receives a priority no greater than those of its descendants.
fn build_sorted<T>(entries: Vec<T>) -> Tree<T> {
    let n = entries.len();
    let shape = Shape::new(n);
    let order = shape.level_order();

    let mut priorities: Vec<u32> = PriorityRng::new(BULK_LOAD_SEED)
        .fill(n)
        .into_iter()
        .map(|value| rng::reduce(value, n))
        .collect();
    priorities.sort_unstable();

    let mut pending: Vec<Option<Node<T>>> = entries
        .into_iter()
        .map(|entry| Some(Node::new(entry, 0)))
        .collect();
    let mut built: Vec<Tree<T>> = vec![None; n];
    for (&position, &priority) in order.iter().zip(priorities.iter()).rev() {
        if let Some(mut node) = pending[position].take() {
            node.priority = priority;
            node.left = shape.left[position].and_then(|child| built[child].take());
            node.right = shape.right[position].and_then(|child| built[child].take());
            node.update();
            built[position] = Some(Arc::new(node));
        }
    }
    built[shape.root].take()
}

#[cfg(test)]
mod tests {
    use super::Shape;
    use crate::treap::tree::tests::check;
    use crate::TreapMultiset;
    use rand::{Rng, SeedableRng, XorShiftRng};

    #[test]
    fn test_shape_covers_every_position() {
        for n in 1..300 {
            let shape = Shape::new(n);
            let mut order = shape.level_order();
            assert_eq!(order.len(), n);
            order.sort();
            assert_eq!(order, (0..n).collect::<Vec<usize>>());
        }
    }

    #[test]
    fn test_shape_small() {
        let shape = Shape::new(2);
        assert_eq!(shape.root, 1);
        assert_eq!(shape.left[1], Some(0));
        assert_eq!(shape.right[1], None);

        let shape = Shape::new(4);
        assert_eq!(shape.root, 3);
        assert_eq!(shape.left[3], Some(1));
        assert_eq!(shape.left[1], Some(0));
        assert_eq!(shape.right[1], Some(2));
    }

    #[test]
    fn test_from_vec_empty() {
        let t: TreapMultiset<u32> = TreapMultiset::from_vec(Vec::new());
        assert!(t.is_empty());
    }

    #[test]
    fn test_from_vec_single() {
        let t = TreapMultiset::from_vec(vec![7]);
        assert_eq!(t.len(), 1);
        assert_eq!(t.root().as_ref().unwrap().priority, 0);
    }

    #[test]
    fn test_from_vec_sorted() {
        for n in 2..200 {
            let entries: Vec<u32> = (0..n).collect();
            let t = TreapMultiset::from_vec(entries.clone());
            assert_eq!(check(t.root()), n as usize);
            assert_eq!(t.iter().cloned().collect::<Vec<u32>>(), entries);
        }
    }

    #[test]
    fn test_from_vec_sorted_duplicates() {
        let t = TreapMultiset::from_vec(vec![1, 1, 2, 2, 2, 3, 3]);
        assert_eq!(check(t.root()), 7);
        assert_eq!(t.count(&1), 2);
        assert_eq!(t.count(&2), 3);
        assert_eq!(t.count(&3), 2);
        assert_eq!(t.erase(&2).count(&2), 2);
    }

    #[test]
    fn test_from_vec_unsorted() {
        let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
        let mut entries: Vec<u32> = (0..500).map(|_| rng.gen_range(0, 100)).collect();
        let t = TreapMultiset::from_vec(entries.clone());
        entries.sort();
        assert_eq!(check(t.root()), 500);
        assert_eq!(t.iter().cloned().collect::<Vec<u32>>(), entries);
    }

    #[test]
    fn test_sorted_matches_inserts() {
        let entries: Vec<u32> = (0..64).map(|i| i * 3).collect();
        let bulk = TreapMultiset::from_vec(entries.clone());
        let mut inserted = TreapMultiset::new();
        for entry in entries {
            inserted = inserted.insert(entry);
        }
        assert_eq!(bulk, inserted);
    }

    #[test]
    fn test_from_iter() {
        let t: TreapMultiset<u32> = vec![3, 1, 2].into_iter().collect();
        assert_eq!(t.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);
    }

    #[test]
    fn test_bulk_loaded_is_persistent() {
        let t = TreapMultiset::from_vec((0..10).collect());
        let u = t.insert(5).erase(&0);
        assert_eq!(t.iter().cloned().collect::<Vec<u32>>(), (0..10).collect::<Vec<u32>>());
        assert_eq!(check(u.root()), 10);
    }
}
