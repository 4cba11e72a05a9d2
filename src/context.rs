//! Per-invocation context.

use crate::error::ModuleResult;
use crate::gateway::{ChannelId, GuildControl, GuildId, Member, MessageEvent};
use crate::outbound::{Outbound, OutboundMessage};

/// Everything a module needs to handle one event.
///
/// Built by the dispatcher per incoming event and discarded when handling
/// completes. Nothing in here is ever stored on a module or shared between
/// invocations, so concurrent dispatch to the same module instance is safe.
pub struct Context<'a> {
    /// The raw inbound event.
    pub event: &'a MessageEvent,
    /// Outbound send handle for replies.
    pub sender: Outbound<'a>,
    /// Guild administration handle.
    pub control: &'a dyn GuildControl,
}

impl Context<'_> {
    /// The member who sent the message.
    pub fn author(&self) -> &Member {
        &self.event.author
    }

    /// The channel the message was posted in.
    pub fn channel(&self) -> ChannelId {
        self.event.channel
    }

    /// The originating guild, if any.
    pub fn guild(&self) -> Option<GuildId> {
        self.event.guild
    }

    /// Send plain text to the originating channel. Fire-and-forget:
    /// delivery is not awaited.
    pub async fn send(&self, text: impl Into<String>) -> ModuleResult {
        self.sender
            .send(OutboundMessage {
                channel: self.event.channel,
                text: text.into(),
            })
            .await?;
        Ok(())
    }
}
