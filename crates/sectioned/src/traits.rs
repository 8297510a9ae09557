//! The read-only surface a sectioned list view is populated through.

use crate::address::Address;
use crate::sequence::GroupedSequence;

/// Read access to sectioned data, shaped the way a list view asks for it.
///
/// A view asks how many sections there are, how many rows each has, what
/// each section's header says and which item sits at a position. Unlike
/// the strict positional methods on [`GroupedSequence`], these answer an
/// out-of-range request with `0` or `None`, since views routinely probe
/// positions that a concurrent change has just invalidated.
pub trait SectionSource {
    /// The row identifier type.
    type Row;

    /// Returns the number of sections.
    fn section_count(&self) -> usize;

    /// Returns the number of rows in `section`, or 0 if it does not exist.
    fn rows_in_section(&self, section: usize) -> usize;

    /// Returns the header title of `section`.
    fn section_title(&self, section: usize) -> Option<&str>;

    /// Returns the item at `address`.
    fn item_at(&self, address: Address) -> Option<&Self::Row>;

    /// Returns every address in display order.
    fn addresses(&self) -> Vec<Address> {
        (0..self.section_count())
            .flat_map(|section| {
                (0..self.rows_in_section(section)).map(move |row| Address::new(section, row))
            })
            .collect()
    }
}

impl<R> SectionSource for GroupedSequence<R> {
    type Row = R;

    fn section_count(&self) -> usize {
        self.group_count()
    }

    fn rows_in_section(&self, section: usize) -> usize {
        self.row_count_at(section).unwrap_or(0)
    }

    fn section_title(&self, section: usize) -> Option<&str> {
        self.title_at(section).ok()
    }

    fn item_at(&self, address: Address) -> Option<&R> {
        self.at(address).ok()
    }
}
