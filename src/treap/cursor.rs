use crate::treap::node::{self, Direction, Node, Tree};
use crate::treap::tree;
use std::fmt;
use std::ops::{AddAssign, Sub, SubAssign};
use std::sync::Arc;

/// A random access cursor over the entries of one `TreapMultiset` version.
///
/// The cursor stores the path from the root of its version to the current node. Stepping with
/// `move_next` and `move_prev` costs amortized `O(1)` over a full traversal, while jumping by an
/// arbitrary offset, computing the rank, and computing the distance between two cursors cost
/// `O(log N)`. A cursor with an empty path is positioned at the end.
///
/// The cursor holds shared handles to the nodes it visits, so it stays readable even if the
/// version it was taken from is dropped.
///
/// # Examples
///
/// ```
/// use persistent_treap::TreapMultiset;
///
/// let t = TreapMultiset::from_vec(vec![10, 20, 30, 40]);
///
/// let mut cursor = t.lower_bound(&15);
/// assert_eq!(cursor.get(), Some(&20));
/// assert_eq!(cursor.rank(), 1);
///
/// cursor += 2;
/// assert_eq!(cursor.get(), Some(&40));
///
/// cursor.move_next();
/// assert!(cursor.is_end());
/// assert_eq!(&cursor - &t.begin(), 4);
/// ```
pub struct Cursor<T> {
    path: Vec<Arc<Node<T>>>,
    root: Tree<T>,
}

impl<T> Cursor<T> {
    pub(crate) fn new(path: Vec<Arc<Node<T>>>, root: &Tree<T>) -> Self {
        Cursor {
            path,
            root: root.clone(),
        }
    }

    pub(crate) fn path(&self) -> &[Arc<Node<T>>] {
        &self.path
    }

    pub(crate) fn belongs_to(&self, root: &Tree<T>) -> bool {
        match (&self.root, root) {
            (Some(left), Some(right)) => Arc::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        }
    }

    /// Returns the entry under the cursor, or `None` if the cursor is at the end.
    pub fn get(&self) -> Option<&T> {
        self.path.last().map(|node| &node.entry)
    }

    /// Returns `true` if the cursor is positioned past the last entry.
    pub fn is_end(&self) -> bool {
        self.path.is_empty()
    }

    /// Returns the number of entries in the version the cursor was taken from.
    pub fn len(&self) -> usize {
        node::len(&self.root)
    }

    /// Returns `true` if the version the cursor was taken from has no entries.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Moves the cursor to the next entry in order, or to the end after the last entry.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end.
    pub fn move_next(&mut self) {
        let right = match self.path.last() {
            Some(node) => node.right.clone(),
            None => panic!("Error: cannot advance a cursor past the end."),
        };
        if right.is_some() {
            self.descend(right, Direction::Right);
            return;
        }
        self.ascend(Direction::Left);
    }

    /// Moves the cursor to the previous entry in order. Moving back from the end positions the
    /// cursor at the last entry.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the first entry or the version is empty.
    pub fn move_prev(&mut self) {
        let left = match self.path.last() {
            Some(node) => node.left.clone(),
            None => {
                self.path = tree::rightmost(&self.root);
                assert!(!self.path.is_empty(), "Error: cannot move a cursor before the first entry.");
                return;
            },
        };
        if left.is_some() {
            self.descend(left, Direction::Left);
            return;
        }
        self.ascend(Direction::Right);
        assert!(!self.path.is_empty(), "Error: cannot move a cursor before the first entry.");
    }

    // enters `subtree` on the `direction` side, then walks to its nearest entry
    fn descend(&mut self, subtree: Tree<T>, direction: Direction) {
        let inner = match direction {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        };
        let mut current = subtree;
        while let Some(node) = current {
            current = node.child(inner).clone();
            self.path.push(node);
        }
    }

    // pops until the popped node hangs on the `from` side of the new top
    fn ascend(&mut self, from: Direction) {
        while let Some(child) = self.path.pop() {
            match self.path.last() {
                Some(parent) if parent.direction_of(&child) == Some(from) => return,
                Some(_) => continue,
                None => return,
            }
        }
    }

    /// Returns the number of entries ordered strictly before the cursor. The end cursor has a
    /// rank equal to the number of entries.
    pub fn rank(&self) -> usize {
        if self.path.is_empty() {
            self.len()
        } else {
            tree::rank_of_path(&self.path)
        }
    }

    /// Moves the cursor to the entry of rank `rank`, or to the end if `rank` equals the number of
    /// entries.
    ///
    /// # Panics
    ///
    /// Panics if `rank` is greater than the number of entries.
    pub fn move_to_rank(&mut self, rank: usize) {
        assert!(rank <= self.len(), "Error: rank out of bounds.");
        self.path = tree::select_path(&self.root, rank);
    }

    /// Moves the cursor `offset` entries forward, or backward for a negative offset.
    ///
    /// # Panics
    ///
    /// Panics if the target lies before the first entry or past the end.
    pub fn advance_by(&mut self, offset: isize) {
        let target = self.offset_rank(offset).expect("Error: cursor offset out of bounds.");
        self.move_to_rank(target);
    }

    /// Returns the entry `offset` entries away from the cursor, or `None` if there is none.
    pub fn get_at(&self, offset: isize) -> Option<&T> {
        if offset == 0 {
            return self.get();
        }
        self.offset_rank(offset).and_then(|rank| tree::select(&self.root, rank))
    }

    fn offset_rank(&self, offset: isize) -> Option<usize> {
        match (self.rank() as isize).checked_add(offset) {
            Some(rank) if rank >= 0 && rank as usize <= self.len() => Some(rank as usize),
            _ => None,
        }
    }

    /// Returns the number of steps from this cursor to `other`, negative if `other` comes first.
    pub fn distance_to(&self, other: &Cursor<T>) -> isize {
        other.rank() as isize - self.rank() as isize
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        Cursor {
            path: self.path.clone(),
            root: self.root.clone(),
        }
    }
}

impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Cursor<T>) -> bool {
        self.belongs_to(&other.root)
            && self.path.len() == other.path.len()
            && self
                .path
                .iter()
                .zip(other.path.iter())
                .all(|(left, right)| Arc::ptr_eq(left, right))
    }
}

impl<T> Eq for Cursor<T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("entry", &self.get())
            .field("rank", &self.rank())
            .finish()
    }
}

impl<T> AddAssign<isize> for Cursor<T> {
    fn add_assign(&mut self, offset: isize) {
        self.advance_by(offset);
    }
}

impl<T> SubAssign<isize> for Cursor<T> {
    fn sub_assign(&mut self, offset: isize) {
        let offset = offset.checked_neg().expect("Error: cursor offset out of bounds.");
        self.advance_by(offset);
    }
}

impl<'a, T> Sub for &'a Cursor<T> {
    type Output = isize;

    fn sub(self, other: &'a Cursor<T>) -> isize {
        other.distance_to(self)
    }
}
