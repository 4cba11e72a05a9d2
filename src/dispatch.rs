//! Event intake and routing.

use crate::context::Context;
use crate::error::ModuleResult;
use crate::gateway::{GuildControl, MessageEvent};
use crate::outbound::Outbound;
use crate::registry::Registry;
use crate::tokens::Tokens;
use std::sync::Arc;
use tracing::trace;

/// Routes inbound message events to the module owning their first token.
///
/// The host delivers events one at a time (possibly from multiple tasks);
/// each dispatch runs to completion without touching shared mutable state,
/// so a single `Dispatcher` value can serve concurrent deliveries.
pub struct Dispatcher {
    registry: Arc<Registry>,
    prefix: Option<String>,
}

impl Dispatcher {
    /// Create a dispatcher over a finished registry.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            prefix: None,
        }
    }

    /// Require messages to start with `prefix` (e.g. "!"); the prefix is
    /// stripped before the first token is matched. Without a prefix, the
    /// first token of the message text is matched directly.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Dispatch one inbound event.
    ///
    /// Webhook-origin events are discarded. The dispatcher consumes exactly
    /// the routing keyword from the token stream before calling the owning
    /// module's `handle`, so the first token a module reads is its
    /// sub-command. A first token no module claims is a silent no-op: only
    /// a matched module renders its own help.
    pub async fn dispatch(
        &self,
        event: &MessageEvent,
        sender: Outbound<'_>,
        control: &dyn GuildControl,
    ) -> ModuleResult {
        if event.webhook {
            trace!(channel = %event.channel, "ignoring webhook message");
            return Ok(());
        }

        let mut text = event.content.as_str();
        if let Some(prefix) = &self.prefix {
            match text.strip_prefix(prefix.as_str()) {
                Some(rest) => text = rest,
                None => return Ok(()),
            }
        }

        let mut tokens = Tokens::new(text);
        let Some(first) = tokens.next() else {
            return Ok(());
        };

        let keyword = first.to_ascii_lowercase();
        let Some(module) = self.registry.get(&keyword) else {
            trace!(keyword = %keyword, "no module claims keyword");
            return Ok(());
        };

        let ctx = Context {
            event,
            sender,
            control,
        };
        module.handle(&ctx, &mut tokens).await
    }
}
