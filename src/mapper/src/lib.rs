//! # AKHQ ACL Mapper
//!
//! Derives AKHQ access-control claims from directory group attributes and
//! injects them into identity tokens.
//!
//! Each group may carry up to five attributes, one per permission category
//! (topics, consumer groups, connects, schema registry, ACLs). An attribute
//! holds either a plain filter pattern or a permission descriptor such as
//! `role:topic-writer,pattern:marco.*,cluster:foobar`. The mapper turns them
//! into a `groups` claim:
//!
//! ```json
//! {
//!   "team-a": [
//!     {"role": "topic-reader", "patterns": ["^prod-.*"]},
//!     {"role": "acl-admin", "patterns": [".*"], "clusters": ["prod"]}
//!   ]
//! }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use akhq_acl_mapper::{AggregatorConfig, GroupAggregator, ClaimEntry};
//! use akhq_acl_mapper::directory::{StaticGroup, StaticSubject};
//!
//! let subject = StaticSubject::new("alice")
//!     .with_group(StaticGroup::new("team-a").with_attribute("topics-filter-regexp", "^prod-.*"))
//!     .with_group(StaticGroup::new("empty-team"));
//!
//! let claims = GroupAggregator::new(AggregatorConfig::default()).aggregate(&subject);
//!
//! assert_eq!(claims["team-a"], vec![ClaimEntry::new("topic-reader", "^prod-.*")]);
//! assert!(!claims.contains_key("empty-team"));
//! ```

pub mod aggregator;
pub mod category;
pub mod claim;
pub mod config;
pub mod descriptor;
pub mod directory;
pub mod error;
pub mod mapper;
pub mod token;

// Re-export commonly used types
pub use aggregator::{AggregatorConfig, GroupAggregator};
pub use category::PermissionCategory;
pub use claim::{resolve_claim, ClaimEntry, GroupClaims, DENY_ALL_PATTERN};
pub use config::MapperConfig;
pub use descriptor::{DescriptorKey, PermissionDescriptor};
pub use directory::{DirectoryGroup, DirectorySubject};
pub use error::{MapperError, Result};
pub use mapper::AclMapper;
pub use token::{ClaimsSink, TokenClaims, TokenKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
