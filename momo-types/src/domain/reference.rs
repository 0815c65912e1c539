//! Client-generated reference identifiers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier sent in the `X-Reference-Id` header.
///
/// The provider uses it as an idempotency key, and it doubles as the handle
/// for later lookups: the transaction id of a payment or transfer, or the
/// user id of a sandbox API user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceId(Uuid);

impl ReferenceId {
    /// Generates a fresh random (v4) reference id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ReferenceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ReferenceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ReferenceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(ReferenceId::new(), ReferenceId::new());
    }

    #[test]
    fn test_display_parses_back() {
        let id = ReferenceId::new();
        let parsed: ReferenceId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_rejects_non_uuid() {
        assert!("not-a-uuid".parse::<ReferenceId>().is_err());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id: ReferenceId = "6c6eb16c-8b34-4d5d-bd41-2a9303f65075".parse().unwrap();
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            "\"6c6eb16c-8b34-4d5d-bd41-2a9303f65075\""
        );
    }
}
