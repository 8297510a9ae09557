//! The grouped sequence: ordered, named groups of row identifiers.
//!
//! `GroupedSequence<R>` is the data model behind a sectioned list. It keeps
//! groups in order, keeps rows in order within each group, and translates
//! between identity (group name, row identifier) and position
//! ([`Address`]).
//!
//! Lookups follow a deliberate asymmetry:
//!
//! - Reads by name or identifier are lenient: a missing group has no rows,
//!   and a missing identifier has no address.
//! - Positional access is strict: an index outside the sequence is an error.
//! - Deletions by name or identifier are idempotent: deleting something
//!   that is not there does nothing.
//!
//! # Example
//!
//! ```
//! use sectioned::{Address, GroupedSequence};
//!
//! let mut sequence = GroupedSequence::new();
//! sequence.add_row("r1", "A");
//! sequence.add_row("r2", "A");
//!
//! assert_eq!(sequence.rows_in("A"), &["r1", "r2"]);
//! assert_eq!(sequence.address_of(&"r2"), Some(Address::new(0, 1)));
//!
//! sequence.delete_row(&"r1");
//! sequence.delete_row(&"r2");
//! assert_eq!(sequence.group_count(), 0);
//! ```

use tracing::{debug, trace, warn};

use crate::address::Address;
use crate::config::{DuplicateNamePolicy, SequenceConfig};
use crate::error::{Result, SequenceError};
use crate::group::{Group, GroupSpec};
use crate::logging::targets;

/// An ordered sequence of named groups of row identifiers.
///
/// Group names are unique. A row identifier is expected to appear in at
/// most one group; [`add_row`](Self::add_row) does not enforce this, and
/// when it is violated every identifier-based operation acts on the first
/// occurrence in section-then-row order.
///
/// Cloning is deep: the clone shares no groups or row lists with the
/// original.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedSequence<R> {
    groups: Vec<Group<R>>,
    config: SequenceConfig,
}

impl<R> Default for GroupedSequence<R> {
    fn default() -> Self {
        Self::with_config(SequenceConfig::default())
    }
}

impl<R> GroupedSequence<R> {
    /// Creates an empty sequence with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty sequence with the given configuration.
    pub fn with_config(config: SequenceConfig) -> Self {
        Self {
            groups: Vec::new(),
            config,
        }
    }

    /// Builds a sequence from records, in order, with the default
    /// configuration.
    ///
    /// Fails with [`SequenceError::DuplicateName`] if two records share a
    /// name.
    pub fn create<I>(specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = GroupSpec<R>>,
    {
        Self::create_with_config(specs, SequenceConfig::default())
    }

    /// Builds a sequence from records using `config`.
    ///
    /// Repeated names are handled by `config.duplicate_names`.
    pub fn create_with_config<I>(specs: I, config: SequenceConfig) -> Result<Self>
    where
        I: IntoIterator<Item = GroupSpec<R>>,
    {
        let mut sequence = Self::with_config(config);
        for spec in specs {
            if sequence.config.duplicate_names == DuplicateNamePolicy::Reject
                && sequence.contains_group(&spec.name)
            {
                warn!(target: targets::SEQUENCE, name = %spec.name, "repeated group name in initial records");
                return Err(SequenceError::duplicate_name(spec.name));
            }
            sequence.add_group_with_title(spec.name, spec.rows, spec.show_title);
        }
        debug!(target: targets::SEQUENCE, groups = sequence.groups.len(), "created grouped sequence");
        Ok(sequence)
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Adds a group whose name is shown as its title.
    ///
    /// See [`add_group_with_title`](Self::add_group_with_title).
    pub fn add_group(&mut self, name: impl Into<String>, rows: impl IntoIterator<Item = R>) {
        self.add_group_with_title(name, rows, true);
    }

    /// Adds a group, or replaces the rows and title flag of the group that
    /// already has this name.
    ///
    /// A replaced group keeps its position and its previous rows are
    /// discarded. A new group is appended at the end.
    pub fn add_group_with_title(
        &mut self,
        name: impl Into<String>,
        rows: impl IntoIterator<Item = R>,
        show_title: bool,
    ) {
        let name = name.into();
        let rows: Vec<R> = rows.into_iter().collect();
        match self.index_of(&name) {
            Some(index) => {
                debug!(target: targets::SEQUENCE, %name, index, rows = rows.len(), "replaced group");
                self.groups[index].replace(rows, show_title);
            }
            None => {
                debug!(target: targets::SEQUENCE, %name, index = self.groups.len(), rows = rows.len(), "appended group");
                self.groups.push(Group::new(name, rows, show_title));
            }
        }
    }

    /// Inserts a new group at `at`, shifting later groups back by one.
    ///
    /// `at` must lie in `0..=group_count()`, otherwise
    /// [`SequenceError::IndexOutOfRange`] is returned. If the name is
    /// already taken the configured [`DuplicateNamePolicy`] applies: under
    /// `Reject` the call fails with [`SequenceError::DuplicateName`]; under
    /// `Replace` the existing group is removed first and `at` is taken
    /// relative to the remaining groups.
    pub fn insert_group(
        &mut self,
        name: impl Into<String>,
        rows: impl IntoIterator<Item = R>,
        show_title: bool,
        at: usize,
    ) -> Result<()> {
        let name = name.into();
        let existing = self.index_of(&name);

        if existing.is_some() && self.config.duplicate_names == DuplicateNamePolicy::Reject {
            warn!(target: targets::SEQUENCE, %name, "rejected insert of existing group name");
            return Err(SequenceError::duplicate_name(name));
        }

        let len = self.groups.len() - usize::from(existing.is_some());
        if at > len {
            return Err(SequenceError::index_out_of_range(at, len));
        }

        if let Some(index) = existing {
            self.groups.remove(index);
            debug!(target: targets::SEQUENCE, %name, from = index, "removed group for repositioning");
        }
        let rows: Vec<R> = rows.into_iter().collect();
        debug!(target: targets::SEQUENCE, %name, index = at, rows = rows.len(), "inserted group");
        self.groups.insert(at, Group::new(name, rows, show_title));
        Ok(())
    }

    /// Appends `row` to the group named `group_name`.
    ///
    /// A missing group is created at the end of the sequence with its
    /// title shown. The row is not removed from any other group it may
    /// already be in.
    pub fn add_row(&mut self, row: R, group_name: &str) -> Address {
        let section = match self.index_of(group_name) {
            Some(section) => section,
            None => {
                debug!(target: targets::SEQUENCE, name = group_name, index = self.groups.len(), "appended group for new row");
                self.groups.push(Group::new(group_name, Vec::new(), true));
                self.groups.len() - 1
            }
        };
        let group = &mut self.groups[section];
        group.push(row);
        let address = Address::new(section, group.len() - 1);
        trace!(target: targets::SEQUENCE, %address, "added row");
        address
    }

    /// Removes the row at `address`, returning it.
    ///
    /// If this empties the group, the group is removed as well. Both
    /// coordinates are checked.
    pub fn delete_row_at(&mut self, address: impl Into<Address>) -> Result<R> {
        let address = address.into();
        self.check_address(address)?;
        Ok(self.remove_row_unchecked(address))
    }

    /// Removes the group named `name` with all of its rows.
    ///
    /// Returns the removed group, or `None` (and changes nothing) if there
    /// is no such group.
    pub fn delete_group(&mut self, name: &str) -> Option<Group<R>> {
        let index = self.index_of(name)?;
        debug!(target: targets::SEQUENCE, name, index, "deleted group");
        Some(self.groups.remove(index))
    }

    /// Removes the group at `index` with all of its rows.
    pub fn delete_group_at(&mut self, index: usize) -> Result<Group<R>> {
        self.group_at(index)?;
        let group = self.groups.remove(index);
        debug!(target: targets::SEQUENCE, name = group.name(), index, "deleted group");
        Ok(group)
    }

    /// Removes every group.
    pub fn clear(&mut self) {
        debug!(target: targets::SEQUENCE, groups = self.groups.len(), "cleared sequence");
        self.groups.clear();
    }

    fn remove_row_unchecked(&mut self, address: Address) -> R {
        let group = &mut self.groups[address.section];
        let row = group.remove(address.row);
        trace!(target: targets::SEQUENCE, %address, "removed row");
        if group.is_empty() {
            let group = self.groups.remove(address.section);
            debug!(target: targets::SEQUENCE, name = group.name(), index = address.section, "removed emptied group");
        }
        row
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// Returns the number of groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the number of rows across all groups.
    pub fn total_rows(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// Returns the number of rows in the group named `name`.
    pub fn row_count(&self, name: &str) -> Result<usize> {
        self.group(name)
            .map(Group::len)
            .ok_or_else(|| SequenceError::not_found(name))
    }

    /// Returns the number of rows in the group at `index`.
    pub fn row_count_at(&self, index: usize) -> Result<usize> {
        self.group_at(index).map(Group::len)
    }

    /// Returns the rows of the group named `name`, or an empty slice if
    /// there is no such group.
    pub fn rows_in(&self, name: &str) -> &[R] {
        self.group(name).map(Group::rows).unwrap_or(&[])
    }

    /// Returns the display title of the group at `index`.
    ///
    /// This is the group's name, or the configured placeholder
    /// (`"empty name"` by default) if its title is hidden.
    pub fn title_at(&self, index: usize) -> Result<&str> {
        let group = self.group_at(index)?;
        Ok(group.title(&self.config.empty_title))
    }

    /// Returns the position of the group named `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.groups.iter().position(|group| group.name() == name)
    }

    /// Returns `true` if a group named `name` exists.
    pub fn contains_group(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Returns the group named `name`.
    pub fn group(&self, name: &str) -> Option<&Group<R>> {
        self.groups.iter().find(|group| group.name() == name)
    }

    /// Returns the group at `index`.
    pub fn group_at(&self, index: usize) -> Result<&Group<R>> {
        self.groups
            .get(index)
            .ok_or_else(|| SequenceError::index_out_of_range(index, self.groups.len()))
    }

    /// Returns the row stored at `address`.
    pub fn at(&self, address: impl Into<Address>) -> Result<&R> {
        let address = address.into();
        self.check_address(address)?;
        Ok(&self.groups[address.section].rows()[address.row])
    }

    /// Iterates over the groups in order.
    pub fn groups(&self) -> impl ExactSizeIterator<Item = &Group<R>> + '_ {
        self.groups.iter()
    }

    /// Iterates over the group names in order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.groups.iter().map(Group::name)
    }

    fn check_address(&self, address: Address) -> Result<()> {
        let group = self.group_at(address.section)?;
        if address.row >= group.len() {
            return Err(SequenceError::RowOutOfRange {
                section: address.section,
                row: address.row,
                len: group.len(),
            });
        }
        Ok(())
    }
}

impl<R: PartialEq> GroupedSequence<R> {
    /// Returns the address of `row`.
    ///
    /// Groups are searched in order and the first match wins.
    pub fn address_of(&self, row: &R) -> Option<Address> {
        self.groups.iter().enumerate().find_map(|(section, group)| {
            group
                .position(row)
                .map(|row_index| Address::new(section, row_index))
        })
    }

    /// Returns `true` if `row` is in any group.
    pub fn contains_row(&self, row: &R) -> bool {
        self.groups.iter().any(|group| group.contains(row))
    }

    /// Removes `row` from the group that holds it.
    ///
    /// If this empties the group, the group is removed as well. Returns
    /// the address the row had, or `None` (and changes nothing) if the row
    /// is not present.
    pub fn delete_row(&mut self, row: &R) -> Option<Address> {
        let address = self.address_of(row)?;
        self.remove_row_unchecked(address);
        Some(address)
    }
}

impl<R: Clone> GroupedSequence<R> {
    /// Returns a fully independent copy of the sequence.
    ///
    /// Mutating the copy never affects the original and vice versa.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Returns the bulk-load records describing the current contents.
    ///
    /// Feeding them back to [`create_with_config`](Self::create_with_config)
    /// with the same configuration rebuilds an equal sequence.
    pub fn to_specs(&self) -> Vec<GroupSpec<R>> {
        self.groups.iter().map(GroupSpec::from).collect()
    }
}
