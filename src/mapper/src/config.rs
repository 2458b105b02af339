//! Mapper configuration
//!
//! Mirrors the standard protocol-mapper properties: the claim name the
//! groups document is written under and the token types it is included in.

use serde::{Deserialize, Serialize};

use crate::aggregator::AggregatorConfig;
use crate::error::{MapperError, Result};
use crate::token::TokenKind;

/// Claim name used when none is configured explicitly
pub const DEFAULT_CLAIM_NAME: &str = "groups";

/// Protocol-mapper configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapperConfig {
    /// Token claim the groups document is assigned to. When unset or blank
    /// the mapper leaves the token untouched.
    #[serde(default = "default_claim_name")]
    pub claim_name: Option<String>,

    #[serde(default = "default_true")]
    pub include_in_id_token: bool,

    #[serde(default = "default_true")]
    pub include_in_access_token: bool,

    #[serde(default)]
    pub include_in_lightweight_access_token: bool,

    #[serde(default = "default_true")]
    pub include_in_userinfo: bool,

    /// Emit the groups-processed diagnostic
    #[serde(default)]
    pub debug: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            claim_name: default_claim_name(),
            include_in_id_token: true,
            include_in_access_token: true,
            include_in_lightweight_access_token: false,
            include_in_userinfo: true,
            debug: false,
        }
    }
}

fn default_true() -> bool { true }
fn default_claim_name() -> Option<String> { Some(DEFAULT_CLAIM_NAME.to_string()) }

impl MapperConfig {
    pub fn with_claim_name(mut self, claim_name: impl Into<String>) -> Self {
        self.claim_name = Some(claim_name.into());
        self
    }

    pub fn without_claim_name(mut self) -> Self {
        self.claim_name = None;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Configured claim name, ignoring blank values
    pub fn claim_name(&self) -> Option<&str> {
        self.claim_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }

    /// Whether the claim goes into the given token type
    pub fn includes(&self, kind: TokenKind) -> bool {
        match kind {
            TokenKind::IdToken => self.include_in_id_token,
            TokenKind::AccessToken => self.include_in_access_token,
            TokenKind::LightweightAccessToken => self.include_in_lightweight_access_token,
            TokenKind::UserInfo => self.include_in_userinfo,
        }
    }

    pub fn aggregator_config(&self) -> AggregatorConfig {
        AggregatorConfig { debug: self.debug }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = self.claim_name() {
            if name.chars().any(char::is_whitespace) {
                return Err(MapperError::InvalidConfig(format!(
                    "Claim name '{}' must not contain whitespace",
                    name
                )));
            }
        }

        Ok(())
    }
}
