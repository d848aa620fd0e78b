use crate::compare::LessThan;
use crate::treap::node::{self, Direction, Node, Tree};
use log::trace;
use std::sync::Arc;

/// A root-to-node path of owned, not yet published nodes.
///
/// Every node on the path except the last has the slot leading to the next node vacated. The path
/// is either closed (the last node is a complete subtree) or open (the last node's vacated slot is
/// still waiting for a subtree). Linking the path back together publishes the nodes.
pub struct Path<T> {
    nodes: Vec<Node<T>>,
    directions: Vec<Direction>,
}

impl<T> Path<T> {
    pub fn new() -> Self {
        Path {
            nodes: Vec::new(),
            directions: Vec::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.nodes.len()
    }

    fn is_open(&self) -> bool {
        self.nodes.len() == self.directions.len()
    }

    /// Pushes a node whose `direction` slot the caller has vacated, leaving the path open.
    pub fn push_parent(&mut self, node: Node<T>, direction: Direction) {
        debug_assert!(self.is_open());
        debug_assert!(node.child(direction).is_none());
        self.nodes.push(node);
        self.directions.push(direction);
    }

    /// Pushes a complete subtree into the open slot, closing the path.
    pub fn push(&mut self, node: Node<T>) {
        debug_assert!(self.is_open());
        self.nodes.push(node);
    }

    /// Returns `true` if the last node has a strictly smaller priority than its parent.
    pub fn is_heap_violated(&self) -> bool {
        let depth = self.nodes.len();
        depth > 1 && self.nodes[depth - 1].priority < self.nodes[depth - 2].priority
    }

    /// Rotates the last node above its parent. The rotated node takes the parent's place on the
    /// path, so the grandparent's vacated slot now leads to it.
    pub fn rotate_up(&mut self) {
        debug_assert!(!self.is_open());
        if let (Some(node), Some(parent), Some(direction)) =
            (self.nodes.pop(), self.nodes.pop(), self.directions.pop())
        {
            self.nodes.push(node::rotate_up(node, parent, direction));
        }
    }

    /// Links an open path around `subtree` and returns the new root.
    pub fn finish(mut self, subtree: Tree<T>) -> Tree<T> {
        debug_assert!(self.is_open());
        let mut tree = subtree;
        while let (Some(mut parent), Some(direction)) = (self.nodes.pop(), self.directions.pop()) {
            *parent.child_mut(direction) = tree;
            tree = Some(Arc::new(parent));
        }
        tree
    }

    /// Links a closed path and returns the new root.
    pub fn into_tree(mut self) -> Tree<T> {
        debug_assert!(!self.is_open());
        let last = self.nodes.pop().map(Arc::new);
        self.finish(last)
    }
}

/// Inserts `new_node` into `tree` and returns the new root.
///
/// Every node on the search path is detached and relinked, so nodes shared with other versions
/// are cloned while nodes owned only by `tree` are reused in place.
pub fn insert<T, C>(tree: Tree<T>, new_node: Node<T>, less: &C) -> Tree<T>
where
    T: Clone,
    C: LessThan<T>,
{
    let mut path = Path::new();
    let mut current = tree;
    while let Some(shared) = current {
        let mut node = node::detach(shared);
        node.len += 1;
        let direction = if less.less(&new_node.entry, &node.entry) {
            Direction::Left
        } else {
            Direction::Right
        };
        current = node.child_mut(direction).take();
        path.push_parent(node, direction);
    }
    let depth = path.depth();
    path.push(new_node);

    let mut rotations = 0;
    while path.is_heap_violated() {
        path.rotate_up();
        rotations += 1;
    }
    trace!("inserted at depth {} with {} rotations", depth, rotations);
    path.into_tree()
}

/// Removes the last node of `path`, a non-empty root-to-node path, and returns the new root.
///
/// When the removed node has two children, the minimum of its right subtree takes its place and
/// inherits its priority, which keeps the heap property intact.
pub fn remove<T: Clone>(path: &[Arc<Node<T>>]) -> Tree<T> {
    let mut cloned = Path::new();
    for pair in path.windows(2) {
        let mut node = (*pair[0]).clone();
        node.len -= 1;
        let direction = node
            .direction_of(&pair[1])
            .expect("Error: path is not connected.");
        node.child_mut(direction).take();
        cloned.push_parent(node, direction);
    }
    trace!("removing at depth {}", cloned.depth());

    let replacement = match path.last() {
        Some(target) => splice(target),
        None => return None,
    };
    cloned.finish(replacement)
}

fn splice<T: Clone>(target: &Node<T>) -> Tree<T> {
    match (&target.left, &target.right) {
        (None, right) => right.clone(),
        (left, None) => left.clone(),
        (Some(left), Some(right)) => {
            let (mut successor, rest) = remove_min(Arc::clone(right));
            successor.left = Some(Arc::clone(left));
            successor.right = rest;
            successor.priority = target.priority;
            successor.update();
            Some(Arc::new(successor))
        },
    }
}

/// Detaches the minimum node of `tree`. Returns the node with no children and the remaining
/// subtree.
pub fn remove_min<T: Clone>(tree: Arc<Node<T>>) -> (Node<T>, Tree<T>) {
    let mut path = Path::new();
    let mut node = node::detach(tree);
    while let Some(left) = node.left.take() {
        node.len -= 1;
        path.push_parent(node, Direction::Left);
        node = node::detach(left);
    }
    let rest = node.right.take();
    node.len = 1;
    (node, path.finish(rest))
}

/// Replaces the entry of the last node of `path`, a root-to-node path, and returns the new root.
pub fn replace<T: Clone>(path: &[Arc<Node<T>>], entry: T) -> Tree<T> {
    let mut cloned = Path::new();
    for pair in path.windows(2) {
        let mut node = (*pair[0]).clone();
        let direction = node
            .direction_of(&pair[1])
            .expect("Error: path is not connected.");
        node.child_mut(direction).take();
        cloned.push_parent(node, direction);
    }
    match path.last() {
        Some(target) => {
            let mut node = (**target).clone();
            node.entry = entry;
            cloned.push(node);
            cloned.into_tree()
        },
        None => None,
    }
}

pub fn contains<T, C: LessThan<T>>(tree: &Tree<T>, key: &T, less: &C) -> bool {
    let mut current = tree.as_ref();
    while let Some(node) = current {
        if less.less(key, &node.entry) {
            current = node.left.as_ref();
        } else if less.less(&node.entry, key) {
            current = node.right.as_ref();
        } else {
            return true;
        }
    }
    false
}

/// Returns the path to the first node that is not less than `key`. The path is empty if there is
/// no such node.
pub fn lower_bound<T, C: LessThan<T>>(tree: &Tree<T>, key: &T, less: &C) -> Vec<Arc<Node<T>>> {
    bound(tree, |entry| !less.less(entry, key))
}

/// Returns the path to the first node that is greater than `key`. The path is empty if there is no
/// such node.
pub fn upper_bound<T, C: LessThan<T>>(tree: &Tree<T>, key: &T, less: &C) -> Vec<Arc<Node<T>>> {
    bound(tree, |entry| less.less(key, entry))
}

// `goes_left` must be monotone over the in-order sequence
fn bound<T, F>(tree: &Tree<T>, goes_left: F) -> Vec<Arc<Node<T>>>
where
    F: Fn(&T) -> bool,
{
    let mut path = Vec::new();
    let mut kept = 0;
    let mut current = tree.as_ref();
    while let Some(node) = current {
        path.push(Arc::clone(node));
        if goes_left(&node.entry) {
            kept = path.len();
            current = node.left.as_ref();
        } else {
            current = node.right.as_ref();
        }
    }
    path.truncate(kept);
    path
}

pub fn leftmost<T>(tree: &Tree<T>) -> Vec<Arc<Node<T>>> {
    extreme(tree, Direction::Left)
}

pub fn rightmost<T>(tree: &Tree<T>) -> Vec<Arc<Node<T>>> {
    extreme(tree, Direction::Right)
}

fn extreme<T>(tree: &Tree<T>, direction: Direction) -> Vec<Arc<Node<T>>> {
    let mut path = Vec::new();
    let mut current = tree.as_ref();
    while let Some(node) = current {
        path.push(Arc::clone(node));
        current = node.child(direction).as_ref();
    }
    path
}

/// Returns the path to the node of rank `rank`. The path is empty if `rank` is out of bounds.
pub fn select_path<T>(tree: &Tree<T>, mut rank: usize) -> Vec<Arc<Node<T>>> {
    let mut path = Vec::new();
    let mut current = tree.as_ref();
    while let Some(node) = current {
        path.push(Arc::clone(node));
        let left_len = node.left_len();
        if rank < left_len {
            current = node.left.as_ref();
        } else if rank > left_len {
            rank -= left_len + 1;
            current = node.right.as_ref();
        } else {
            return path;
        }
    }
    Vec::new()
}

/// Returns the entry of rank `rank`.
pub fn select<T>(tree: &Tree<T>, mut rank: usize) -> Option<&T> {
    let mut current = tree.as_ref();
    while let Some(node) = current {
        let left_len = node.left_len();
        if rank < left_len {
            current = node.left.as_ref();
        } else if rank > left_len {
            rank -= left_len + 1;
            current = node.right.as_ref();
        } else {
            return Some(&node.entry);
        }
    }
    None
}

/// Returns the number of entries ordered before the last node of `path`, a root-to-node path.
pub fn rank_of_path<T>(path: &[Arc<Node<T>>]) -> usize {
    let mut rank = 0;
    for pair in path.windows(2) {
        if pair[0].direction_of(&pair[1]) == Some(Direction::Right) {
            rank += pair[0].left_len() + 1;
        }
    }
    path.last().map_or(0, |node| rank + node.left_len())
}

/// An in-order iterator over the nodes of a tree.
pub struct InOrder<'a, T> {
    current: Option<&'a Node<T>>,
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> InOrder<'a, T> {
    pub fn new(tree: &'a Tree<T>) -> Self {
        InOrder {
            current: tree.as_deref(),
            stack: Vec::new(),
            remaining: node::len(tree),
        }
    }

    /// Starts at the first node that is not less than `key`.
    pub fn from_key<C: LessThan<T>>(tree: &'a Tree<T>, key: &T, less: &C) -> Self {
        let mut stack = Vec::new();
        let mut skipped = 0;
        let mut current = tree.as_deref();
        while let Some(node) = current {
            if less.less(&node.entry, key) {
                skipped += node.left_len() + 1;
                current = node.right.as_deref();
            } else {
                stack.push(node);
                current = node.left.as_deref();
            }
        }
        InOrder {
            current: None,
            stack,
            remaining: node::len(tree) - skipped,
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T>
where
    T: 'a,
{
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.current = node.left.as_deref();
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = node.right.as_deref();
            self.remaining -= 1;
            node
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
