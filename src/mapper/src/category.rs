//! Fixed permission categories understood by the AKHQ access-control layer

/// Group attribute holding the topic filter
pub const TOPICS_FILTER_ATTRIBUTE: &str = "topics-filter-regexp";
/// Group attribute holding the consumer-group filter
pub const CONSUMER_GROUPS_FILTER_ATTRIBUTE: &str = "consumer-groups-filter-regexp";
/// Group attribute holding the Kafka Connect filter
pub const CONNECTS_FILTER_ATTRIBUTE: &str = "connects-filter-regexp";
/// Group attribute holding the schema-registry filter
pub const REGISTRY_FILTER_ATTRIBUTE: &str = "registry-filter-regexp";
/// Group attribute holding the ACL filter
pub const ACLS_FILTER_ATTRIBUTE: &str = "acls-filter-regexp";

pub const TOPIC_READER_ROLE: &str = "topic-reader";
pub const GROUP_READER_ROLE: &str = "group-reader";
pub const CONNECT_READER_ROLE: &str = "connect-reader";
pub const REGISTRY_READER_ROLE: &str = "registry-reader";
pub const ACL_READER_ROLE: &str = "acl-reader";

/// A permission category: the group attribute that carries its filter and
/// the role granted when the attribute does not override it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PermissionCategory {
    /// Role assigned unless a descriptor names another one
    pub default_role: &'static str,

    /// Group attribute read for this category
    pub attribute: &'static str,
}

impl PermissionCategory {
    pub const TOPIC: Self = Self::new(TOPIC_READER_ROLE, TOPICS_FILTER_ATTRIBUTE);
    pub const CONSUMER_GROUP: Self = Self::new(GROUP_READER_ROLE, CONSUMER_GROUPS_FILTER_ATTRIBUTE);
    pub const CONNECT: Self = Self::new(CONNECT_READER_ROLE, CONNECTS_FILTER_ATTRIBUTE);
    pub const SCHEMA_REGISTRY: Self = Self::new(REGISTRY_READER_ROLE, REGISTRY_FILTER_ATTRIBUTE);
    pub const ACL: Self = Self::new(ACL_READER_ROLE, ACLS_FILTER_ATTRIBUTE);

    /// All categories, in the order their entries appear in a group's claim list
    pub const ALL: [Self; 5] = [
        Self::TOPIC,
        Self::CONSUMER_GROUP,
        Self::CONNECT,
        Self::SCHEMA_REGISTRY,
        Self::ACL,
    ];

    const fn new(default_role: &'static str, attribute: &'static str) -> Self {
        Self {
            default_role,
            attribute,
        }
    }
}
