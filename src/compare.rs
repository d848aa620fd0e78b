//! Ordering relations used to place entries in a treap.

/// A strict weak ordering over entries of type `T`.
///
/// Two entries `a` and `b` are considered equivalent when neither `less(a, b)` nor `less(b, a)`
/// holds. Any `Fn(&T, &T) -> bool` closure is an ordering relation.
///
/// # Examples
///
/// ```
/// use persistent_treap::compare::{LessThan, Natural};
///
/// assert!(Natural.less(&1, &2));
/// assert!(!Natural.less(&2, &2));
///
/// let by_len = |a: &&str, b: &&str| a.len() < b.len();
/// assert!(by_len.less(&"ab", &"abc"));
/// assert!(by_len.equivalent(&"ab", &"cd"));
/// ```
pub trait LessThan<T> {
    /// Returns `true` if `a` is ordered strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Returns `true` if `a` and `b` fall into the same equivalence class.
    fn equivalent(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// The ordering relation given by `Ord`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Natural;

impl<T: Ord> LessThan<T> for Natural {
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T, F> LessThan<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::{LessThan, Natural};

    #[test]
    fn test_natural() {
        assert!(Natural.less(&1, &2));
        assert!(!Natural.less(&2, &1));
        assert!(Natural.equivalent(&2, &2));
    }

    #[test]
    fn test_closure() {
        let by_tens = |a: &u32, b: &u32| a / 10 < b / 10;
        assert!(by_tens.less(&9, &10));
        assert!(by_tens.equivalent(&11, &19));
        assert!(!by_tens.equivalent(&19, &20));
    }
}
