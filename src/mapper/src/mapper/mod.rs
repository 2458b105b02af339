//! Protocol-mapper integration
//!
//! [`AclMapper`] is what an identity provider invokes once per token
//! issuance. It aggregates the subject's group claims and writes them,
//! exactly once, under the configured claim name.
//!
//! # Examples
//!
//! ```
//! use akhq_acl_mapper::directory::{StaticGroup, StaticSubject};
//! use akhq_acl_mapper::mapper::AclMapper;
//! use akhq_acl_mapper::token::{TokenClaims, TokenKind};
//! use akhq_acl_mapper::MapperConfig;
//!
//! let subject = StaticSubject::new("alice").with_group(
//!     StaticGroup::new("team-a").with_attribute("topics-filter-regexp", "^prod-.*"),
//! );
//!
//! let mapper = AclMapper::new(MapperConfig::default());
//! let mut token = TokenClaims::new();
//! assert!(mapper.transform(TokenKind::IdToken, &subject, &mut token).unwrap());
//! assert!(token.contains("groups"));
//! ```

mod provider;


pub use provider::{
    config_property_names, DISPLAY_CATEGORY, DISPLAY_NAME, HELP_TEXT, PRIORITY, PROVIDER_ID,
};

use tracing::debug;

use crate::aggregator::GroupAggregator;
use crate::claim::GroupClaims;
use crate::config::MapperConfig;
use crate::directory::DirectorySubject;
use crate::error::Result;
use crate::token::{ClaimsSink, TokenKind};

/// AKHQ ACL protocol mapper
#[derive(Debug, Clone, Default)]
pub struct AclMapper {
    config: MapperConfig,
    aggregator: GroupAggregator,
}

impl AclMapper {
    pub fn new(config: MapperConfig) -> Self {
        let aggregator = GroupAggregator::new(config.aggregator_config());
        Self { config, aggregator }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Build the groups claims document without assigning it anywhere
    pub fn group_claims<S: DirectorySubject>(&self, subject: &S) -> GroupClaims {
        self.aggregator.aggregate(subject)
    }

    /// Assign the groups claims document to the sink
    ///
    /// Nothing is written when no claim name is configured. Otherwise the
    /// document is written even if it is empty.
    pub fn set_claim<S, T>(&self, subject: &S, sink: &mut T) -> Result<()>
    where
        S: DirectorySubject,
        T: ClaimsSink + ?Sized,
    {
        let Some(claim_name) = self.config.claim_name() else {
            debug!(username = subject.username(), "No claim name configured, skipping");
            return Ok(());
        };

        let claims = self.group_claims(subject);
        let value = serde_json::to_value(&claims)?;
        sink.set_other_claim(claim_name, value);

        Ok(())
    }

    /// Apply the mapper to a token of the given type
    ///
    /// Returns whether the mapper was applied; token types excluded by the
    /// configuration are left untouched.
    pub fn transform<S, T>(&self, kind: TokenKind, subject: &S, sink: &mut T) -> Result<bool>
    where
        S: DirectorySubject,
        T: ClaimsSink + ?Sized,
    {
        if !self.config.includes(kind) {
            debug!(token = %kind, "Claim not included in token type");
            return Ok(false);
        }

        self.set_claim(subject, sink)?;
        Ok(true)
    }
}
