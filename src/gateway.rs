//! Inbound event model and the seam toward the connectivity layer.
//!
//! The gateway (authentication, websocket plumbing, event delivery) lives
//! outside this crate. It hands us [`MessageEvent`] values and a
//! [`GuildControl`] handle for guild administration; nothing here performs
//! network I/O.

use crate::error::GatewayError;
use async_trait::async_trait;
use std::fmt;

/// Unique id of a guild (server/workspace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuildId(pub u64);

/// Unique id of a channel within a guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelId(pub u64);

/// Unique id of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub u64);

impl fmt::Display for GuildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A guild member as seen by the dispatch core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// The member's user id.
    pub id: UserId,
    /// Display name shown in the guild (nickname if set, username otherwise).
    pub display_name: String,
}

impl Member {
    /// Create a member value.
    pub fn new(id: UserId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}

/// An incoming message event as delivered by the gateway.
///
/// `guild` is `None` for direct-message-style events; those are not
/// supported by the dispatch core and are silently ignored.
#[derive(Debug, Clone)]
pub struct MessageEvent {
    /// Raw message text.
    pub content: String,
    /// The member who sent the message.
    pub author: Member,
    /// Channel the message was posted in.
    pub channel: ChannelId,
    /// Originating guild, if any.
    pub guild: Option<GuildId>,
    /// True when the message was produced by an automated webhook
    /// integration rather than a human sender.
    pub webhook: bool,
}

impl MessageEvent {
    /// Build an event from its parts.
    pub fn new(
        content: impl Into<String>,
        author: Member,
        channel: ChannelId,
        guild: Option<GuildId>,
    ) -> Self {
        Self {
            content: content.into(),
            author,
            channel,
            guild,
            webhook: false,
        }
    }

    /// Mark this event as webhook-originated.
    pub fn from_webhook(mut self) -> Self {
        self.webhook = true;
        self
    }
}

/// Guild administration handle, implemented by the connectivity layer.
///
/// Modules reach the platform's moderation surface through this trait; the
/// dispatch core itself never calls it. The surface is intentionally small:
/// only what the shipped modules need.
#[async_trait]
pub trait GuildControl: Send + Sync {
    /// Resolve a user-supplied token (mention, name, or raw id) to a member
    /// of the guild.
    async fn resolve_member(&self, token: &str) -> Result<Member, GatewayError>;

    /// Ban a member from the guild.
    async fn ban(&self, user: UserId, reason: Option<&str>) -> Result<(), GatewayError>;

    /// Lift a ban.
    async fn unban(&self, user: UserId) -> Result<(), GatewayError>;

    /// Current ban list.
    async fn bans(&self) -> Result<Vec<Member>, GatewayError>;
}
