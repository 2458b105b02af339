//! Identity-directory capabilities the mapper depends on
//!
//! The host (an identity provider) owns the real user and group models. The
//! mapper only needs a group's name, the first value of a named attribute,
//! and the subject's group memberships, so those are the traits defined here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A directory group as seen by the mapper
pub trait DirectoryGroup {
    /// Group name, unique per subject
    fn name(&self) -> &str;

    /// First value of a multi-valued attribute, if the attribute is set
    fn first_attribute(&self, key: &str) -> Option<&str>;
}

/// The authenticated subject a token is being issued for
pub trait DirectorySubject {
    type Group: DirectoryGroup;

    /// Username, used for diagnostics only
    fn username(&self) -> &str;

    /// Group memberships in directory order
    fn groups(&self) -> &[Self::Group];
}

/// In-memory group with multi-valued attributes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticGroup {
    pub name: String,

    #[serde(default)]
    pub attributes: BTreeMap<String, Vec<String>>,
}

impl StaticGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Append a value to an attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes
            .entry(key.into())
            .or_default()
            .push(value.into());
        self
    }
}

impl DirectoryGroup for StaticGroup {
    fn name(&self) -> &str {
        &self.name
    }

    fn first_attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

/// In-memory subject
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticSubject {
    pub username: String,

    #[serde(default)]
    pub groups: Vec<StaticGroup>,
}

impl StaticSubject {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            groups: Vec::new(),
        }
    }

    pub fn with_group(mut self, group: StaticGroup) -> Self {
        self.groups.push(group);
        self
    }
}

impl DirectorySubject for StaticSubject {
    type Group = StaticGroup;

    fn username(&self) -> &str {
        &self.username
    }

    fn groups(&self) -> &[StaticGroup] {
        &self.groups
    }
}
