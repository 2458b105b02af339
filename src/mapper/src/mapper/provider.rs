//! Provider metadata reported to the identity provider

/// Unique provider id
pub const PROVIDER_ID: &str = "stevenjdh-akhq-acl-mapper";

/// Name shown in the mapper type list
pub const DISPLAY_NAME: &str = "AKHQ ACL Mapper";

pub const HELP_TEXT: &str =
    "An AKHQ ACL mapper for Keycloak to transition from AKHQ version 0.24.x to 0.25.x and above.";

/// Category shared with the built-in token mappers
pub const DISPLAY_CATEGORY: &str = "Token mapper";

/// Same priority as script mappers
pub const PRIORITY: i32 = 50;

pub const TOKEN_CLAIM_NAME: &str = "claim.name";
pub const INCLUDE_IN_ID_TOKEN: &str = "id.token.claim";
pub const INCLUDE_IN_ACCESS_TOKEN: &str = "access.token.claim";
pub const INCLUDE_IN_LIGHTWEIGHT_ACCESS_TOKEN: &str = "lightweight.claim";
pub const INCLUDE_IN_USERINFO: &str = "userinfo.token.claim";

/// Names of the configuration properties the mapper exposes
pub fn config_property_names() -> &'static [&'static str] {
    &[
        TOKEN_CLAIM_NAME,
        INCLUDE_IN_ID_TOKEN,
        INCLUDE_IN_ACCESS_TOKEN,
        INCLUDE_IN_LIGHTWEIGHT_ACCESS_TOKEN,
        INCLUDE_IN_USERINFO,
    ]
}
