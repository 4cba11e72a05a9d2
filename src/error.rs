//! Unified error handling for guildbot.
//!
//! Registration failures are configuration errors and fatal at startup;
//! everything a module can hit at dispatch time is either a transport fault
//! or a gateway fault. Unmatched commands are never errors — they route to
//! help or are dropped.

use crate::outbound::OutboundMessage;
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors raised while building the registry at startup.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two modules claimed the same routing keyword. The process must not
    /// proceed into dispatch with an ambiguous registry.
    #[error("keyword `{keyword}` already registered by `{existing}`, rejecting `{rejected}`")]
    DuplicateKeyword {
        /// The contested keyword, case-folded.
        keyword: String,
        /// Identifier of the module that registered first.
        existing: &'static str,
        /// Identifier of the module whose registration was refused.
        rejected: &'static str,
    },
}

/// Errors that can occur while a module handles an event.
#[derive(Debug, Error)]
pub enum ModuleError {
    #[error("send error: {0}")]
    Send(#[from] mpsc::error::SendError<OutboundMessage>),

    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Result type for module operations and dispatch.
pub type ModuleResult = Result<(), ModuleError>;

/// Errors surfaced by the connectivity layer through [`GuildControl`].
///
/// [`GuildControl`]: crate::gateway::GuildControl
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("no such member: {0}")]
    UnknownMember(String),

    #[error("missing permission: {0}")]
    MissingPermission(&'static str),

    #[error("gateway unavailable: {0}")]
    Unavailable(String),
}
