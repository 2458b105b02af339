//! Claim entries and their resolution from group attribute values

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::trace;

use crate::category::PermissionCategory;
use crate::descriptor::{is_descriptor, PermissionDescriptor};

/// Pattern used when a descriptor omits `pattern`; matches no resource name
pub const DENY_ALL_PATTERN: &str = "^$";

/// One AKHQ role binding inside a group's claim list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimEntry {
    /// Role granted to members of the group
    pub role: String,

    /// Resource filters the role applies to
    pub patterns: Vec<String>,

    /// Clusters the binding is limited to; absent means every cluster
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clusters: Option<Vec<String>>,
}

impl ClaimEntry {
    /// Create an entry with a single pattern and no cluster scope
    pub fn new(role: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            patterns: vec![pattern.into()],
            clusters: None,
        }
    }

    /// Limit the entry to a single cluster
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.clusters = Some(vec![cluster.into()]);
        self
    }
}

/// Claim lists keyed by group name. Groups without entries never appear.
pub type GroupClaims = BTreeMap<String, Vec<ClaimEntry>>;

/// Resolve a group's raw attribute value into a claim entry
///
/// Returns `None` when the value is absent or blank. A value without `:` is
/// a plain filter pattern and keeps the default role. Anything else is read
/// as a [`PermissionDescriptor`]; missing overrides fall back to the default
/// role, to [`DENY_ALL_PATTERN`] and to no cluster scope respectively.
///
/// # Examples
///
/// ```
/// use akhq_acl_mapper::claim::{resolve_claim, ClaimEntry};
///
/// let entry = resolve_claim("topic-reader", Some("role:x")).unwrap();
/// assert_eq!(entry, ClaimEntry::new("x", "^$"));
/// ```
pub fn resolve_claim(default_role: &str, raw: Option<&str>) -> Option<ClaimEntry> {
    let raw = raw.filter(|value| !value.trim().is_empty())?;

    if !is_descriptor(raw) {
        return Some(ClaimEntry::new(default_role, raw));
    }

    let descriptor = PermissionDescriptor::parse(raw);
    let PermissionDescriptor {
        role,
        pattern,
        cluster,
    } = descriptor;

    let mut entry = ClaimEntry::new(
        role.unwrap_or_else(|| default_role.to_string()),
        pattern.unwrap_or_else(|| DENY_ALL_PATTERN.to_string()),
    );
    if let Some(cluster) = cluster {
        entry = entry.with_cluster(cluster);
    }

    Some(entry)
}

/// Resolve the raw value for one category
pub fn resolve_category(category: &PermissionCategory, raw: Option<&str>) -> Option<ClaimEntry> {
    let entry = resolve_claim(category.default_role, raw)?;
    trace!(
        attribute = category.attribute,
        role = %entry.role,
        "Resolved claim entry"
    );
    Some(entry)
}
