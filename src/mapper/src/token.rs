//! Token claim sinks

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::Result;

/// Token types a protocol mapper can contribute claims to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    IdToken,
    AccessToken,
    LightweightAccessToken,
    UserInfo,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IdToken => "id",
            Self::AccessToken => "access",
            Self::LightweightAccessToken => "lightweight",
            Self::UserInfo => "userinfo",
        }
    }
}

impl FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id" | "id_token" => Ok(Self::IdToken),
            "access" | "access_token" => Ok(Self::AccessToken),
            "lightweight" | "lightweight_access_token" => Ok(Self::LightweightAccessToken),
            "userinfo" | "user_info" => Ok(Self::UserInfo),
            other => Err(format!("Unknown token kind: '{}'", other)),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Destination for custom claims on an outgoing token
pub trait ClaimsSink {
    /// Set a custom claim, replacing any previous value under the same name
    fn set_other_claim(&mut self, name: &str, value: Value);
}

/// Custom claims of a token under construction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenClaims {
    other_claims: Map<String, Value>,
}

impl TokenClaims {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn other_claims(&self) -> &Map<String, Value> {
        &self.other_claims
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.other_claims.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.other_claims.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.other_claims.is_empty()
    }

    /// Serialize the claims as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.other_claims)?)
    }
}

impl ClaimsSink for TokenClaims {
    fn set_other_claim(&mut self, name: &str, value: Value) {
        self.other_claims.insert(name.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_claim_replaces() {
        let mut claims = TokenClaims::new();
        claims.set_other_claim("groups", json!({"a": []}));
        claims.set_other_claim("groups", json!({}));

        assert_eq!(claims.get("groups"), Some(&json!({})));
        assert_eq!(claims.other_claims().len(), 1);
    }

    #[test]
    fn test_token_kind_parsing() {
        assert_eq!("id".parse::<TokenKind>(), Ok(TokenKind::IdToken));
        assert_eq!("ACCESS".parse::<TokenKind>(), Ok(TokenKind::AccessToken));
        assert_eq!("lightweight".parse::<TokenKind>(), Ok(TokenKind::LightweightAccessToken));
        assert_eq!("userinfo".parse::<TokenKind>(), Ok(TokenKind::UserInfo));
        assert!("refresh".parse::<TokenKind>().is_err());
    }

    #[test]
    fn test_to_json() {
        let mut claims = TokenClaims::new();
        claims.set_other_claim("groups", json!({}));

        let parsed: Value = serde_json::from_str(&claims.to_json().unwrap()).unwrap();
        assert_eq!(parsed, json!({"groups": {}}));
    }
}
