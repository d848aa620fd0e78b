use crate::compare::LessThan;
use crate::rng::DEFAULT_SEED;
use crate::treap::multiset::TreapMultiset;
use crate::treap::node::Node;
use crate::treap::tree;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::io::{self, Write};

fn label<T: fmt::Display>(node: &Node<T>) -> String {
    format!("{}({},{})", node.entry, node.priority, node.len)
}

impl<T, C> TreapMultiset<T, C>
where
    T: fmt::Display,
{
    /// Writes the tree of this version as a Graphviz digraph. Every node is labelled
    /// `entry(priority,len)` and a missing child is drawn as a point.
    ///
    /// # Examples
    ///
    /// ```
    /// use persistent_treap::TreapMultiset;
    ///
    /// let t = TreapMultiset::new().insert(1);
    /// let mut out = Vec::new();
    /// t.write_dot(&mut out).unwrap();
    /// let dot = String::from_utf8(out).unwrap();
    /// assert!(dot.starts_with("digraph Treap {"));
    /// assert!(dot.contains("\"1(0,1)\" -> "));
    /// ```
    pub fn write_dot<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "digraph Treap {{")?;
        for node in tree::InOrder::new(self.root()) {
            let parent = label(node);
            let children = [("L", &node.left), ("R", &node.right)];
            for &(side, child) in &children {
                let child = match child {
                    Some(child_node) => label(child_node),
                    None => {
                        let placeholder = format!("{:p}{}", node, side);
                        writeln!(out, "  \"{}\"[shape=point]", placeholder)?;
                        placeholder
                    },
                };
                writeln!(out, "  \"{}\" -> \"{}\"[label={}]", parent, child, side)?;
            }
        }
        writeln!(out, "}}")
    }
}

impl<T: fmt::Display, C> fmt::Display for TreapMultiset<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, entry) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

impl<T: Serialize, C> Serialize for TreapMultiset<T, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T, C> Deserialize<'de> for TreapMultiset<T, C>
where
    T: Deserialize<'de> + Clone,
    C: LessThan<T> + Clone + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::deserialize(deserializer)?;
        Ok(Self::from_vec_with(DEFAULT_SEED, C::default(), entries))
    }
}
