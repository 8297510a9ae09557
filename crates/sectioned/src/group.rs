//! Groups and the records used to bulk-load them.

use serde::{Deserialize, Serialize};

/// A named, ordered run of row identifiers.
///
/// A group corresponds to one section of a sectioned list. Its rows keep
/// exactly the order in which they were inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<R> {
    name: String,
    show_title: bool,
    rows: Vec<R>,
}

impl<R> Group<R> {
    pub(crate) fn new(name: impl Into<String>, rows: Vec<R>, show_title: bool) -> Self {
        Self {
            name: name.into(),
            show_title,
            rows,
        }
    }

    /// Returns the group's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if the group's name is used as its display title.
    pub fn show_title(&self) -> bool {
        self.show_title
    }

    /// Returns the rows of the group in order.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Returns the number of rows in the group.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the group has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the display title, substituting `placeholder` when the title
    /// is hidden.
    pub fn title<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if self.show_title {
            self.name.as_str()
        } else {
            placeholder
        }
    }

    /// Consumes the group, returning its rows.
    pub fn into_rows(self) -> Vec<R> {
        self.rows
    }

    pub(crate) fn replace(&mut self, rows: Vec<R>, show_title: bool) {
        self.rows = rows;
        self.show_title = show_title;
    }

    pub(crate) fn push(&mut self, row: R) {
        self.rows.push(row);
    }

    pub(crate) fn remove(&mut self, row: usize) -> R {
        self.rows.remove(row)
    }
}

impl<R: PartialEq> Group<R> {
    /// Returns the position of the first occurrence of `row`.
    pub fn position(&self, row: &R) -> Option<usize> {
        self.rows.iter().position(|candidate| candidate == row)
    }

    /// Returns `true` if the group holds `row`.
    pub fn contains(&self, row: &R) -> bool {
        self.rows.contains(row)
    }
}

fn default_show_title() -> bool {
    true
}

/// One record of the bulk-load format.
///
/// In JSON this reads as `{"name": "Fruit", "rows": ["apple"], "showTitle": false}`.
/// `showTitle` may be omitted (defaults to `true`) and is also accepted as
/// `show_title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSpec<R> {
    /// Group name.
    pub name: String,
    /// Row identifiers in order.
    #[serde(default = "Vec::new")]
    pub rows: Vec<R>,
    /// Whether the name is shown as the section title.
    #[serde(default = "default_show_title", alias = "show_title")]
    pub show_title: bool,
}

impl<R> GroupSpec<R> {
    /// Creates a record with a visible title.
    pub fn new(name: impl Into<String>, rows: impl IntoIterator<Item = R>) -> Self {
        Self {
            name: name.into(),
            rows: rows.into_iter().collect(),
            show_title: true,
        }
    }

    /// Sets whether the title is shown.
    pub fn show_title(mut self, show_title: bool) -> Self {
        self.show_title = show_title;
        self
    }

    /// Creates a record whose title is hidden.
    pub fn untitled(name: impl Into<String>, rows: impl IntoIterator<Item = R>) -> Self {
        Self::new(name, rows).show_title(false)
    }
}

impl<R> From<GroupSpec<R>> for Group<R> {
    fn from(spec: GroupSpec<R>) -> Self {
        Group::new(spec.name, spec.rows, spec.show_title)
    }
}

impl<R: Clone> From<&Group<R>> for GroupSpec<R> {
    fn from(group: &Group<R>) -> Self {
        Self {
            name: group.name.clone(),
            rows: group.rows.clone(),
            show_title: group.show_title,
        }
    }
}
