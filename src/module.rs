//! The module contract.
//!
//! A module owns a family of related commands (a `BanModule`, a
//! `RoleModule`, ...). It declares the routing keywords it answers to and a
//! fixed set of sub-commands, and the dispatcher forwards matching events to
//! its [`handle`](Module::handle) entry point.

use crate::context::Context;
use crate::error::ModuleResult;
use crate::tokens::Tokens;
use async_trait::async_trait;
use tracing::info;

/// Trait implemented by all command-owning modules.
///
/// `keywords` and `commands` are fixed at construction time (const tables)
/// and must never depend on per-invocation state; all per-invocation data
/// arrives through the [`Context`] and token stream parameters.
#[async_trait]
pub trait Module: Send + Sync {
    /// Unique human-readable label, used for registry diagnostics and logs.
    fn identifier(&self) -> &'static str;

    /// Top-level routing keywords this module is registered under,
    /// lowercase. Usually one; aliases are allowed.
    fn keywords(&self) -> &'static [&'static str];

    /// Recognized sub-commands, lowercase.
    fn commands(&self) -> &'static [&'static str];

    /// Entry point invoked by the dispatcher once it has decided this
    /// module owns the event. The routing keyword has already been consumed
    /// from `tokens`; the next token, if any, is the sub-command.
    ///
    /// Webhook-origin events and events with no guild context are silently
    /// ignored. Otherwise: no sub-command or an unrecognized one routes to
    /// [`help`](Module::help), a recognized one (exact case-insensitive
    /// match, no abbreviation) to [`execute`](Module::execute).
    async fn handle(&self, ctx: &Context<'_>, tokens: &mut Tokens<'_>) -> ModuleResult {
        if ctx.event.webhook {
            return Ok(());
        }
        if ctx.guild().is_none() {
            return Ok(());
        }

        info!(
            module = self.identifier(),
            author = %ctx.author().display_name,
            content = %ctx.event.content,
            "handling message"
        );

        match tokens.next() {
            None => self.help(ctx).await,
            Some(word) => {
                let command = word.to_ascii_lowercase();
                if self.commands().contains(&command.as_str()) {
                    self.execute(ctx, &command, tokens).await
                } else {
                    self.help(ctx).await
                }
            }
        }
    }

    /// Execute sub-command `command`. Further arguments may be read from
    /// `tokens`.
    ///
    /// The default is a diagnostic placeholder, so a module can be declared
    /// and registered before any command is wired up and unimplemented
    /// commands surface visibly instead of doing nothing.
    async fn execute(
        &self,
        ctx: &Context<'_>,
        command: &str,
        _tokens: &mut Tokens<'_>,
    ) -> ModuleResult {
        ctx.send(format!("Handle `{command}` here")).await
    }

    /// Render a help message for this module: at least one line for each
    /// publicly available command.
    async fn help(&self, ctx: &Context<'_>) -> ModuleResult;
}
