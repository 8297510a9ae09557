//! Lock-guarded shared ownership of a grouped sequence.
//!
//! [`GroupedSequence`] keeps its invariants only while one caller mutates
//! it at a time. `SharedSequence` puts it behind a `parking_lot::RwLock` so
//! that several threads can hold handles to the same structure: reads run
//! concurrently with each other, and each mutating closure runs alone.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;

use crate::address::Address;
use crate::error::Result;
use crate::logging::targets;
use crate::sequence::GroupedSequence;

/// A cloneable handle to a grouped sequence shared between owners.
///
/// Clones of a handle refer to the same structure. Use
/// [`snapshot`](Self::snapshot) to get an independent copy.
///
/// # Example
///
/// ```
/// use sectioned::SharedSequence;
///
/// let shared = SharedSequence::<u32>::new();
/// let handle = shared.clone();
///
/// std::thread::spawn(move || {
///     handle.write(|sequence| {
///         sequence.add_row(1, "A");
///     });
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(shared.read(|sequence| sequence.rows_in("A").to_vec()), vec![1]);
/// ```
pub struct SharedSequence<R> {
    inner: Arc<RwLock<GroupedSequence<R>>>,
}

impl<R> Clone for SharedSequence<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R> Default for SharedSequence<R> {
    fn default() -> Self {
        Self::from_sequence(GroupedSequence::new())
    }
}

impl<R> SharedSequence<R> {
    /// Creates a handle to a new, empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `sequence` and shares it.
    pub fn from_sequence(sequence: GroupedSequence<R>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(sequence)),
        }
    }

    /// Runs `f` with shared read access.
    pub fn read<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&GroupedSequence<R>) -> T,
    {
        f(&*self.inner.read())
    }

    /// Runs `f` with exclusive access.
    ///
    /// Everything `f` does is observed by other handles as a single change.
    pub fn write<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut GroupedSequence<R>) -> T,
    {
        let mut guard = self.inner.write();
        trace!(target: targets::SHARED, "acquired write lock");
        f(&mut *guard)
    }

    /// Returns the number of groups.
    pub fn group_count(&self) -> usize {
        self.inner.read().group_count()
    }

    /// Appends `row` to `group_name`, creating the group if needed.
    pub fn add_row(&self, row: R, group_name: &str) -> Address {
        self.inner.write().add_row(row, group_name)
    }

    /// Removes the group named `name`, if present.
    pub fn delete_group(&self, name: &str) -> bool {
        self.inner.write().delete_group(name).is_some()
    }

    /// Removes the group at `index`.
    pub fn delete_group_at(&self, index: usize) -> Result<()> {
        self.inner.write().delete_group_at(index).map(|_| ())
    }

    /// Returns `true` if this handle and `other` share one structure.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Unwraps the sequence if this is the last handle.
    pub fn try_into_inner(self) -> std::result::Result<GroupedSequence<R>, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl<R: PartialEq> SharedSequence<R> {
    /// Removes `row` from whichever group holds it.
    pub fn delete_row(&self, row: &R) -> Option<Address> {
        self.inner.write().delete_row(row)
    }

    /// Returns the address of `row`.
    pub fn address_of(&self, row: &R) -> Option<Address> {
        self.inner.read().address_of(row)
    }
}

impl<R: Clone> SharedSequence<R> {
    /// Returns an independent copy of the current contents.
    pub fn snapshot(&self) -> GroupedSequence<R> {
        self.inner.read().snapshot()
    }

    /// Returns the rows of the group named `name`, or an empty list.
    pub fn rows_in(&self, name: &str) -> Vec<R> {
        self.inner.read().rows_in(name).to_vec()
    }
}

impl<R> From<GroupedSequence<R>> for SharedSequence<R> {
    fn from(sequence: GroupedSequence<R>) -> Self {
        Self::from_sequence(sequence)
    }
}

impl<R> std::fmt::Debug for SharedSequence<R>
where
    R: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSequence")
            .field("sequence", &*self.inner.read())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::GroupSpec;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let shared = SharedSequence::new();
        let other = shared.clone();

        shared.add_row("r1", "A");
        assert_eq!(other.rows_in("A"), vec!["r1"]);
        assert!(shared.ptr_eq(&other));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let shared = SharedSequence::new();
        shared.add_row(1, "A");

        let snapshot = shared.snapshot();
        shared.add_row(2, "A");

        assert_eq!(snapshot.rows_in("A"), &[1]);
        assert_eq!(shared.rows_in("A"), vec![1, 2]);
    }

    #[test]
    fn test_write_closure_is_atomic() {
        let shared = SharedSequence::from_sequence(
            GroupedSequence::create([GroupSpec::new("A", [1u32])]).unwrap(),
        );

        let moved = shared.write(|sequence| {
            let row = sequence.delete_row_at((0, 0))?;
            sequence.add_row(row, "B");
            Ok::<_, crate::SequenceError>(sequence.address_of(&row))
        });

        assert_eq!(moved.unwrap(), Some(Address::new(0, 0)));
        let names = shared.read(|sequence| sequence.names().collect::<Vec<_>>().join(","));
        assert_eq!(names, "B");
    }

    #[test]
    fn test_concurrent_writers() {
        let shared = SharedSequence::new();
        let handles: Vec<_> = (0..4u32)
            .map(|worker| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..25u32 {
                        shared.add_row(worker * 100 + i, &format!("worker-{worker}"));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.group_count(), 4);
        let sequence = shared.try_into_inner().unwrap();
        assert_eq!(sequence.total_rows(), 100);
        for worker in 0..4u32 {
            let rows = sequence.rows_in(&format!("worker-{worker}"));
            let expected: Vec<u32> = (0..25).map(|i| worker * 100 + i).collect();
            assert_eq!(rows, expected.as_slice());
        }
    }

    #[test]
    fn test_deletes() {
        let shared = SharedSequence::new();
        shared.add_row("x", "A");
        shared.add_row("y", "B");

        assert_eq!(shared.delete_row(&"x"), Some(Address::new(0, 0)));
        assert!(!shared.delete_group("A"));
        assert!(shared.delete_group_at(3).is_err());
        assert!(shared.delete_group_at(0).is_ok());
        assert_eq!(shared.group_count(), 0);
    }
}
