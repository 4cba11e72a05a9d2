//! # guildbot
//!
//! Command-dispatch core for a guild chat-bot.
//!
//! The connectivity layer delivers [`MessageEvent`]s; the [`Dispatcher`]
//! decides whether an event is a command invocation, looks the first token
//! up in the [`Registry`], and forwards the event with the remaining token
//! stream to the owning [`Module`]. The module picks its sub-command from
//! the stream and either executes it or renders help. Unmatched top-level
//! commands and non-user events (webhooks, direct messages) are dropped
//! silently.
//!
//! ```
//! use guildbot::{BanModule, Dispatcher, Registry, RoleModule};
//! use std::sync::Arc;
//!
//! let mut registry = Registry::new();
//! registry.register(Arc::new(BanModule)).unwrap();
//! registry.register(Arc::new(RoleModule)).unwrap();
//!
//! let dispatcher = Dispatcher::new(Arc::new(registry)).with_prefix("!");
//! ```
//!
//! The registry is built once at startup and read-only afterwards, so the
//! dispatcher can serve events from concurrent tasks without locking.

pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod gateway;
pub mod module;
pub mod modules;
pub mod outbound;
pub mod registry;
pub mod tokens;

pub use config::{BotConfig, Config, ConfigError};
pub use context::Context;
pub use dispatch::Dispatcher;
pub use error::{GatewayError, ModuleError, ModuleResult, RegistryError};
pub use gateway::{ChannelId, GuildControl, GuildId, Member, MessageEvent, UserId};
pub use module::Module;
pub use modules::{BanModule, RoleModule};
pub use outbound::{Outbound, OutboundMessage};
pub use registry::Registry;
pub use tokens::Tokens;
