//! Outbound message path.
//!
//! Replies are fire-and-forget: modules enqueue plain text for a channel and
//! never await delivery. The connectivity layer drains the channel and does
//! the actual sending.

use crate::gateway::ChannelId;
use tokio::sync::{Mutex, mpsc};

/// Plain text addressed to a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    /// Destination channel.
    pub channel: ChannelId,
    /// User-visible text. No format contract beyond "a string of text".
    pub text: String,
}

/// Middleware for routing outbound messages.
///
/// Direct enqueues onto the connectivity layer's sender; Capturing buffers
/// in memory so tests can assert on what a module emitted.
#[derive(Clone)]
pub enum Outbound<'a> {
    Direct(&'a mpsc::Sender<OutboundMessage>),
    Capturing(&'a Mutex<Vec<OutboundMessage>>),
}

impl Outbound<'_> {
    /// Send or buffer a message depending on middleware mode.
    pub async fn send(
        &self,
        msg: OutboundMessage,
    ) -> Result<(), mpsc::error::SendError<OutboundMessage>> {
        match self {
            Self::Direct(tx) => tx.send(msg).await,
            Self::Capturing(buf) => {
                let mut guard = buf.lock().await;
                guard.push(msg);
                Ok(())
            }
        }
    }
}
