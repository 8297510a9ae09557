//! Ordered, named groups of row identifiers for sectioned list views.
//!
//! This crate provides the data model that sits behind a sectioned list or
//! table: an ordered sequence of named groups (sections), each holding an
//! ordered list of opaque row identifiers. It answers the questions a list
//! view asks (how many sections, how many rows, what title, which item is
//! here) and translates between identity and position in both directions.
//!
//! - [`GroupedSequence`]: the structure itself
//! - [`Group`] / [`GroupSpec`]: a stored group and its bulk-load record
//! - [`Address`]: a `(section, row)` position
//! - [`SectionSource`]: the lenient, read-only view a renderer drives
//! - [`SharedSequence`]: lock-guarded shared ownership across threads
//! - [`SequenceConfig`]: placeholder title and duplicate-name policy
//! - [`load`]: JSON and TOML bulk loading
//!
//! Row identifiers are never interpreted: any `Clone + PartialEq` type
//! works, from `&str` and `String` to integer handles.
//!
//! # Example
//!
//! ```
//! use sectioned::{Address, GroupSpec, GroupedSequence};
//!
//! let mut sequence = GroupedSequence::create([
//!     GroupSpec::new("Fruit", ["apple", "pear"]),
//!     GroupSpec::untitled("Misc", ["x"]),
//! ])?;
//!
//! assert_eq!(sequence.title_at(1)?, "empty name");
//! assert_eq!(sequence.address_of(&"pear"), Some(Address::new(0, 1)));
//!
//! sequence.insert_group("Veg", ["leek"], true, 1)?;
//! assert_eq!(*sequence.at((2, 0))?, "x");
//!
//! // Removing the last row of a group removes the group.
//! sequence.delete_row(&"leek");
//! assert_eq!(sequence.index_of("Veg"), None);
//! # Ok::<(), sectioned::SequenceError>(())
//! ```

mod address;
mod config;
mod error;
mod group;
pub mod load;
pub mod logging;
mod sequence;
mod shared;
mod traits;

pub use address::Address;
pub use config::{DuplicateNamePolicy, EMPTY_SECTION_TITLE, SequenceConfig};
pub use error::{Result, SequenceError};
pub use group::{Group, GroupSpec};
pub use sequence::GroupedSequence;
pub use shared::SharedSequence;
pub use traits::SectionSource;
