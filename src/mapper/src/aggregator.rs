//! Group aggregation
//!
//! Folds a subject's group memberships into [`GroupClaims`]: every group is
//! asked for the five category attributes, present values are resolved into
//! claim entries in category order, and groups that resolve to nothing are
//! left out so unrelated memberships never show up in the token.

use tracing::debug;

use crate::category::PermissionCategory;
use crate::claim::{resolve_category, ClaimEntry, GroupClaims};
use crate::directory::{DirectoryGroup, DirectorySubject};

/// Aggregator configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregatorConfig {
    /// Emit the groups-processed diagnostic
    pub debug: bool,
}

/// Builds per-group claim lists for one subject
#[derive(Debug, Clone, Default)]
pub struct GroupAggregator {
    config: AggregatorConfig,
}

impl GroupAggregator {
    pub fn new(config: AggregatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    /// Build the claims for every group the subject belongs to
    pub fn aggregate<S: DirectorySubject>(&self, subject: &S) -> GroupClaims {
        let groups = subject.groups();
        let claims = self.aggregate_groups(groups);

        if self.config.debug {
            debug!(
                username = subject.username(),
                groups = groups.len(),
                "Number of groups processed [{}]: {}",
                subject.username(),
                groups.len()
            );
        }

        claims
    }

    /// Build the claims for an already materialized group list
    ///
    /// If two groups share a name, the later one with entries replaces the
    /// earlier one.
    pub fn aggregate_groups<'a, G, I>(&self, groups: I) -> GroupClaims
    where
        G: DirectoryGroup + 'a,
        I: IntoIterator<Item = &'a G>,
    {
        groups
            .into_iter()
            .filter_map(|group| {
                let entries = Self::group_entries(group);
                if entries.is_empty() {
                    None
                } else {
                    Some((group.name().to_string(), entries))
                }
            })
            .collect()
    }

    /// Resolve the category attributes of a single group, in category order
    pub fn group_entries<G: DirectoryGroup + ?Sized>(group: &G) -> Vec<ClaimEntry> {
        PermissionCategory::ALL
            .iter()
            .filter_map(|category| resolve_category(category, group.first_attribute(category.attribute)))
            .collect()
    }
}
