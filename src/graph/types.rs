//! Policy types injected at graph construction.
//!
//! A graph is parameterized by two caller-supplied behaviors: a three-way
//! comparator deciding vertex identity, and an ownership mode deciding who
//! disposes of payloads. Both are fixed once at construction.

use std::cmp::Ordering;
use std::fmt;

/// Three-way comparator over payloads.
///
/// Two payloads denote the same vertex iff the comparator returns
/// [`Ordering::Equal`]. The registry uses it for every membership decision,
/// so it must be a consistent total order over the payloads the caller
/// intends to store.
pub type CompareFn<P> = Box<dyn Fn(&P, &P) -> Ordering>;

/// Disposer invoked exactly once per payload when the graph manages
/// payload lifetime. See [`Ownership::Managed`].
pub type DisposeFn<P> = Box<dyn FnMut(P)>;

/// Who is responsible for payload lifetime.
///
/// Recorded once at construction and checked once per removal, never
/// per-query.
pub enum Ownership<P> {
    /// The graph runs the disposer on `remove`, `clear`, and drop.
    Managed(DisposeFn<P>),
    /// `remove` hands payloads back to the caller; payloads still present at
    /// teardown are dropped through normal drop glue.
    Caller,
}

impl<P> Ownership<P> {
    /// Whether the graph disposes of payloads itself.
    pub fn is_managed(&self) -> bool {
        matches!(self, Ownership::Managed(_))
    }
}

impl<P> fmt::Debug for Ownership<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ownership::Managed(_) => f.write_str("Managed(..)"),
            Ownership::Caller => f.write_str("Caller"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ownership_mode() {
        let managed: Ownership<i32> = Ownership::Managed(Box::new(|_| {}));
        let caller: Ownership<i32> = Ownership::Caller;

        assert!(managed.is_managed());
        assert!(!caller.is_managed());
    }

    #[test]
    fn test_ownership_debug() {
        let managed: Ownership<i32> = Ownership::Managed(Box::new(|_| {}));
        assert_eq!(format!("{:?}", managed), "Managed(..)");
        assert_eq!(format!("{:?}", Ownership::<i32>::Caller), "Caller");
    }
}
