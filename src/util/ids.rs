// Layer 1: Standard library imports
use std::fmt::{self, Display};

// Layer 2: Third-party crate imports
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Layer 3: Internal module imports
// (none)

/// Unique identifier for an actor within a system.
///
/// Assigned by the caller at spawn time and immutable for the actor's
/// lifetime. Two actors in the same system must never share an id; the
/// system enforces this with `Error::DuplicateId` rather than generating
/// ids automatically.
///
/// # Example
/// ```rust
/// use actor_core::util::ActorId;
///
/// let id: ActorId = "worker-1".into();
/// assert_eq!(id.as_str(), "worker-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(String);

impl ActorId {
    /// Wrap a string as an actor id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ActorId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ActorId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a single in-flight message.
///
/// Used for correlation in logs and monitoring events; never used for
/// routing decisions by user behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Generate a new random message id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_id_from_str() {
        let id: ActorId = "root".into();
        assert_eq!(id.as_str(), "root");
        assert_eq!(id.to_string(), "root");
    }

    #[test]
    fn test_actor_id_equality() {
        let a: ActorId = "worker".into();
        let b: ActorId = "worker".into();
        let c: ActorId = "other".into();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_message_id_unique() {
        let a = MessageId::new();
        let b = MessageId::new();
        assert_ne!(a, b);
    }
}
