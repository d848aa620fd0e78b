use std::sync::Arc;

/// A possibly empty subtree shared between treap versions.
pub type Tree<T> = Option<Arc<Node<T>>>;

/// The side of a parent on which a child hangs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Left,
    Right,
}

/// A struct representing an internal node of a treap.
///
/// A node is only ever mutated while it is owned by a single in-progress operation. Once it is
/// wrapped in an `Arc` and linked into a tree it is treated as immutable.
#[derive(Clone)]
pub struct Node<T> {
    pub entry: T,
    pub priority: u32,
    pub len: usize,
    pub left: Tree<T>,
    pub right: Tree<T>,
}

impl<T> Node<T> {
    pub fn new(entry: T, priority: u32) -> Self {
        Node {
            entry,
            priority,
            len: 1,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        let Node {
            ref mut len,
            ref left,
            ref right,
            ..
        } = self;
        *len = 1;
        if let Some(ref left_node) = left {
            *len += left_node.len;
        }
        if let Some(ref right_node) = right {
            *len += right_node.len;
        }
    }

    pub fn child(&self, direction: Direction) -> &Tree<T> {
        match direction {
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    pub fn child_mut(&mut self, direction: Direction) -> &mut Tree<T> {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    /// Returns the side on which `child` hangs from this node, comparing by identity.
    pub fn direction_of(&self, child: &Arc<Node<T>>) -> Option<Direction> {
        if is_same(&self.left, child) {
            Some(Direction::Left)
        } else if is_same(&self.right, child) {
            Some(Direction::Right)
        } else {
            None
        }
    }

    pub fn left_len(&self) -> usize {
        len(&self.left)
    }
}

fn is_same<T>(tree: &Tree<T>, node: &Arc<Node<T>>) -> bool {
    tree.as_ref().map_or(false, |tree_node| Arc::ptr_eq(tree_node, node))
}

pub fn len<T>(tree: &Tree<T>) -> usize {
    tree.as_ref().map_or(0, |node| node.len)
}

/// Takes ownership of a node. The node is moved out when this handle is its only owner and
/// shallowly cloned otherwise, so nodes still visible to another version are never mutated.
pub fn detach<T: Clone>(node: Arc<Node<T>>) -> Node<T> {
    Arc::try_unwrap(node).unwrap_or_else(|shared| (*shared).clone())
}

/// Rotates `node` right around `parent`, where `node` was the left child of `parent` and the left
/// slot of `parent` has already been vacated. Returns `node` as the new subtree root.
pub fn rotate_right<T>(mut node: Node<T>, mut parent: Node<T>) -> Node<T> {
    debug_assert!(parent.left.is_none());
    parent.left = node.right.take();
    parent.update();
    node.right = Some(Arc::new(parent));
    node
}

/// Rotates `node` left around `parent`, where `node` was the right child of `parent` and the
/// right slot of `parent` has already been vacated. Returns `node` as the new subtree root.
pub fn rotate_left<T>(mut node: Node<T>, mut parent: Node<T>) -> Node<T> {
    debug_assert!(parent.right.is_none());
    parent.right = node.left.take();
    parent.update();
    node.left = Some(Arc::new(parent));
    node
}

/// Rotates `node` above `parent`. `direction` is the side of `parent` that `node` hangs from.
///
/// The demoted parent is resized inside the rotation, before the promoted node is resized here.
pub fn rotate_up<T>(node: Node<T>, parent: Node<T>, direction: Direction) -> Node<T> {
    let expected_len = parent.len;
    let mut node = match direction {
        Direction::Left => rotate_right(node, parent),
        Direction::Right => rotate_left(node, parent),
    };
    node.update();
    debug_assert_eq!(node.len, expected_len);
    node
}
