//! Identifiers of validation rules and a [Selector] to address them.
//!
//! Every rule lives in three layers: a category (`agreement`, `table`, ...), a group inside the
//! category (usually a relation or a short rule name) and an index inside the group. The string
//! form is `category/group/index`, e.g. `table/amod/0`. Comparison is case-insensitive.

use serde::{Deserialize, Serialize};
use std::{
    convert::TryFrom,
    fmt,
    hash::{Hash, Hasher},
    num::ParseIntError,
};
use unicase::UniCase;

#[derive(Debug, Clone, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    ParseIntError(#[from] ParseIntError),
    #[error("malformed rule selector \"{0}\"")]
    ParseStringError(String),
}

/// Identifies a category of rules.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialOrd, Ord)]
pub struct Category(String);

impl Eq for Category {}
impl PartialEq for Category {
    fn eq(&self, other: &Category) -> bool {
        UniCase::new(&self.0) == UniCase::new(&other.0)
    }
}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        UniCase::new(&self.0).hash(state)
    }
}

/// Identifies a group of rules within a category.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialOrd, Ord)]
pub struct Group {
    parent: Category,
    inner: String,
}

impl Eq for Group {}
impl PartialEq for Group {
    fn eq(&self, other: &Group) -> bool {
        self.parent == other.parent && UniCase::new(&self.inner) == UniCase::new(&other.inner)
    }
}

impl Hash for Group {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.parent.hash(state);
        UniCase::new(&self.inner).hash(state);
    }
}

/// Identifies a single rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Index {
    parent: Group,
    inner: usize,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.parent, self.inner)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.parent, self.inner)
    }
}

impl Category {
    pub fn new<S: Into<String>>(category: S) -> Self {
        Category(category.into())
    }

    /// Creates a group of this category.
    pub fn join<S: Into<String>>(&self, group: S) -> Group {
        Group {
            parent: self.clone(),
            inner: group.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Group {
    /// Creates the id of the `index`th rule in this group.
    pub fn join(&self, index: usize) -> Index {
        Index {
            parent: self.clone(),
            inner: index,
        }
    }

    pub fn parent(&self) -> &Category {
        &self.parent
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl Index {
    /// Shorthand for `Category::new(category).join(group).join(index)`.
    pub fn new<S: Into<String>, T: Into<String>>(category: S, group: T, index: usize) -> Self {
        Category::new(category).join(group).join(index)
    }

    pub fn parent(&self) -> &Group {
        &self.parent
    }

    pub fn category(&self) -> &Category {
        self.parent.parent()
    }

    pub fn index(&self) -> usize {
        self.inner
    }
}

/// Matches rule ids at the category, group or index level.
/// Deserializes from the `category[/group[/index]]` string form.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub enum Selector {
    Category(Category),
    Group(Group),
    Index(Index),
}

impl From<Category> for Selector {
    fn from(category: Category) -> Self {
        Selector::Category(category)
    }
}

impl From<Group> for Selector {
    fn from(group: Group) -> Self {
        Selector::Group(group)
    }
}

impl From<Index> for Selector {
    fn from(index: Index) -> Self {
        Selector::Index(index)
    }
}

impl TryFrom<&str> for Selector {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let parts: Vec<&str> = value.split('/').collect();

        if parts.iter().any(|x| x.is_empty()) {
            return Err(Error::ParseStringError(value.to_owned()));
        }

        Ok(match parts.as_slice() {
            [category] => Category::new(*category).into(),
            [category, group] => Category::new(*category).join(*group).into(),
            [category, group, index] => Category::new(*category)
                .join(*group)
                .join(index.parse()?)
                .into(),
            _ => return Err(Error::ParseStringError(value.to_owned())),
        })
    }
}

impl TryFrom<String> for Selector {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Selector::try_from(value.as_str())
    }
}

impl From<Selector> for String {
    fn from(selector: Selector) -> Self {
        selector.to_string()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Category(x) => write!(f, "{}", x),
            Selector::Group(x) => write!(f, "{}", x),
            Selector::Index(x) => write!(f, "{}", x),
        }
    }
}

impl Selector {
    /// Whether `id` lies in the category, group or index this selector names.
    pub fn is_match(&self, id: &Index) -> bool {
        match self {
            Selector::Category(category) => id.category() == category,
            Selector::Group(group) => id.parent() == group,
            Selector::Index(index) => id == index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_parse() {
        let index = Index::new("table", "amod", 1);

        assert_eq!(
            Selector::try_from("table").unwrap(),
            Selector::Category(Category::new("table"))
        );
        assert_eq!(
            Selector::try_from("TABLE/Amod/1").unwrap(),
            Selector::Index(index.clone())
        );
        assert_eq!(String::from(Selector::from(index)), "table/amod/1");

        assert!(matches!(
            Selector::try_from("table/amod/x"),
            Err(Error::ParseIntError(_))
        ));
        assert!(matches!(
            Selector::try_from("a/b/1/2"),
            Err(Error::ParseStringError(_))
        ));
        assert!(matches!(
            Selector::try_from("table//1"),
            Err(Error::ParseStringError(_))
        ));
    }

    #[test]
    fn selectors_match() {
        let id = Index::new("agreement", "noun_adjective", 0);

        assert!(Selector::from(Category::new("Agreement")).is_match(&id));
        assert!(Selector::from(Category::new("agreement").join("noun_adjective")).is_match(&id));
        assert!(!Selector::from(Category::new("agreement").join("numeral")).is_match(&id));
        assert!(!Selector::from(Index::new("agreement", "noun_adjective", 1)).is_match(&id));
    }
}
