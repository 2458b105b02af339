//! Permission descriptor parsing
//!
//! A permission descriptor is a compact override written into a group
//! attribute instead of a plain filter pattern:
//!
//! ```text
//! role:topic-writer,pattern:marco.*,cluster:foobar
//! ```
//!
//! Recognized keys are `role`, `pattern` and `cluster`. Pairs with an
//! unknown key, an empty key or an empty value are dropped. There is no
//! escaping for `,` or `:` inside values.
//!
//! # Known behavior
//!
//! The whole input is lowercased before it is split, so pattern and cluster
//! values lose their case as well. Only the first space character is
//! removed; later spaces stay in place. Both are kept as-is because existing
//! group attributes were written against this behavior.

use std::fmt;
use std::str::FromStr;

/// Separator between `key:value` pairs
pub const PAIR_SEPARATOR: char = ',';

/// Separator between a key and its value; its presence marks a descriptor
pub const KEY_VALUE_SEPARATOR: char = ':';

/// Keys recognized in a descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorKey {
    Role,
    Pattern,
    Cluster,
}

impl DescriptorKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Role => "role",
            Self::Pattern => "pattern",
            Self::Cluster => "cluster",
        }
    }
}

impl FromStr for DescriptorKey {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "role" => Ok(Self::Role),
            "pattern" => Ok(Self::Pattern),
            "cluster" => Ok(Self::Cluster),
            other => Err(UnknownKey(other.to_string())),
        }
    }
}

impl fmt::Display for DescriptorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key that is not part of the descriptor syntax
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKey(pub String);

impl fmt::Display for UnknownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown descriptor key: '{}'", self.0)
    }
}

impl std::error::Error for UnknownKey {}

/// Returns true when a raw attribute value is a descriptor rather than a
/// plain filter pattern
pub fn is_descriptor(raw: &str) -> bool {
    raw.contains(KEY_VALUE_SEPARATOR)
}

/// Overrides parsed from a descriptor
///
/// Each field is `Some` only if the descriptor carried a well-formed pair
/// for it. When a key is repeated the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionDescriptor {
    pub role: Option<String>,
    pub pattern: Option<String>,
    pub cluster: Option<String>,
}

impl PermissionDescriptor {
    /// Parses a descriptor. Never fails; the worst case is an empty descriptor.
    ///
    /// # Examples
    ///
    /// ```
    /// use akhq_acl_mapper::descriptor::PermissionDescriptor;
    ///
    /// let d = PermissionDescriptor::parse("role:custom-role,pattern:abc.*");
    /// assert_eq!(d.role.as_deref(), Some("custom-role"));
    /// assert_eq!(d.pattern.as_deref(), Some("abc.*"));
    /// assert!(d.cluster.is_none());
    /// ```
    pub fn parse(input: &str) -> Self {
        let normalized = input.to_lowercase().replacen(' ', "", 1);

        normalized
            .split(PAIR_SEPARATOR)
            .filter_map(Self::parse_pair)
            .fold(Self::default(), |mut descriptor, (key, value)| {
                descriptor.set(key, value);
                descriptor
            })
    }

    /// Splits one candidate pair, dropping it unless both sides are present
    /// and the key is recognized. Segments after the value are ignored.
    fn parse_pair(pair: &str) -> Option<(DescriptorKey, &str)> {
        let mut parts = pair.split(KEY_VALUE_SEPARATOR);
        let key = parts.next().filter(|k| !k.is_empty())?;
        let value = parts.next().filter(|v| !v.is_empty())?;

        key.parse::<DescriptorKey>().ok().map(|key| (key, value))
    }

    fn set(&mut self, key: DescriptorKey, value: &str) {
        let slot = match key {
            DescriptorKey::Role => &mut self.role,
            DescriptorKey::Pattern => &mut self.pattern,
            DescriptorKey::Cluster => &mut self.cluster,
        };
        *slot = Some(value.to_string());
    }

    /// Value for a key, if present
    pub fn get(&self, key: DescriptorKey) -> Option<&str> {
        match key {
            DescriptorKey::Role => self.role.as_deref(),
            DescriptorKey::Pattern => self.pattern.as_deref(),
            DescriptorKey::Cluster => self.cluster.as_deref(),
        }
    }

    /// Returns true if no recognized pair survived parsing
    pub fn is_empty(&self) -> bool {
        self.role.is_none() && self.pattern.is_none() && self.cluster.is_none()
    }
}

impl From<&str> for PermissionDescriptor {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_full_descriptor() {
        let d = PermissionDescriptor::parse("role:topic-writer,pattern:marco.*,cluster:foobar");
        assert_eq!(d.role.as_deref(), Some("topic-writer"));
        assert_eq!(d.pattern.as_deref(), Some("marco.*"));
        assert_eq!(d.cluster.as_deref(), Some("foobar"));
    }

    #[test]
    fn test_unknown_key_dropped() {
        let d = PermissionDescriptor::parse("foo:bar,pattern:xyz");
        assert_eq!(d.pattern.as_deref(), Some("xyz"));
        assert!(d.role.is_none());
        assert!(d.cluster.is_none());
    }

    #[test]
    fn test_misspelled_key_dropped() {
        let d = PermissionDescriptor::parse("rolZ:topic-writer,pattern:marco.*");
        assert!(d.role.is_none());
        assert_eq!(d.pattern.as_deref(), Some("marco.*"));
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let d = PermissionDescriptor::parse("role:a,role:b");
        assert_eq!(d.role.as_deref(), Some("b"));
    }

    #[test]
    fn test_incomplete_pairs_dropped() {
        let d = PermissionDescriptor::parse("role:,pattern,:x,cluster:prod");
        assert!(d.role.is_none());
        assert!(d.pattern.is_none());
        assert_eq!(d.cluster.as_deref(), Some("prod"));
    }

    #[test]
    fn test_extra_segments_ignored() {
        let d = PermissionDescriptor::parse("pattern:a:b");
        assert_eq!(d.pattern.as_deref(), Some("a"));
    }

    #[test]
    fn test_input_is_lowercased() {
        let d = PermissionDescriptor::parse("ROLE:Admin,Pattern:Prod-.*,CLUSTER:EU");
        assert_eq!(d.role.as_deref(), Some("admin"));
        assert_eq!(d.pattern.as_deref(), Some("prod-.*"));
        assert_eq!(d.cluster.as_deref(), Some("eu"));
    }

    #[test]
    fn test_only_first_space_removed() {
        let d = PermissionDescriptor::parse("role:a, pattern:x");
        assert_eq!(d.pattern.as_deref(), Some("x"));

        // The second space survives and turns " cluster" into an unknown key
        let d = PermissionDescriptor::parse("role:a, pattern:x, cluster:c");
        assert_eq!(d.pattern.as_deref(), Some("x"));
        assert!(d.cluster.is_none());
    }

    #[test]
    fn test_garbage_yields_empty() {
        assert!(PermissionDescriptor::parse("").is_empty());
        assert!(PermissionDescriptor::parse(":").is_empty());
        assert!(PermissionDescriptor::parse(",,,").is_empty());
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!("role".parse::<DescriptorKey>(), Ok(DescriptorKey::Role));
        assert_eq!("cluster".parse::<DescriptorKey>(), Ok(DescriptorKey::Cluster));
        assert!("Role".parse::<DescriptorKey>().is_err());
        assert_eq!(DescriptorKey::Pattern.to_string(), "pattern");
    }

    #[test]
    fn test_get_and_from() {
        let d = PermissionDescriptor::from("cluster:prod,role:acl-admin");
        assert_eq!(d.get(DescriptorKey::Role), Some("acl-admin"));
        assert_eq!(d.get(DescriptorKey::Cluster), Some("prod"));
        assert_eq!(d.get(DescriptorKey::Pattern), None);
        assert!(!d.is_empty());
    }

    #[test]
    fn test_is_descriptor() {
        assert!(is_descriptor("role:x"));
        assert!(!is_descriptor("^prod-.*"));
    }

    proptest! {
        #[test]
        fn test_parse_never_panics(input in ".*") {
            let _ = PermissionDescriptor::parse(&input);
        }

        #[test]
        fn test_parsed_values_are_lowercase_and_non_empty(input in "[a-zA-Z:, .*]{0,40}") {
            let d = PermissionDescriptor::parse(&input);
            for value in [&d.role, &d.pattern, &d.cluster].into_iter().flatten() {
                prop_assert!(!value.is_empty());
                prop_assert!(!value.contains(','));
                prop_assert!(!value.contains(':'));
                prop_assert_eq!(value.to_lowercase(), value.clone());
            }
        }
    }
}
