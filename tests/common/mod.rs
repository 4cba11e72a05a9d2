//! Integration test common infrastructure.
//!
//! Provides a stub guild-control implementation, canned events, and a
//! harness that wires a registry and dispatcher to a capturing outbound
//! buffer so tests can assert on emitted replies.

#![allow(dead_code)]

use async_trait::async_trait;
use guildbot::{
    ChannelId, Dispatcher, GatewayError, GuildControl, GuildId, Member, MessageEvent, Module,
    ModuleResult, Outbound, OutboundMessage, Registry, UserId,
};
use std::sync::{Arc, Once};
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const CHANNEL: ChannelId = ChannelId(100);
pub const GUILD: GuildId = GuildId(10);

static INIT: Once = Once::new();

/// Install a test tracing subscriber once per test binary.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Event from a human sender in a guild channel.
pub fn guild_event(text: &str) -> MessageEvent {
    MessageEvent::new(
        text,
        Member::new(UserId(1), "alice"),
        CHANNEL,
        Some(GUILD),
    )
}

/// Event with no guild context (direct-message-style).
pub fn direct_event(text: &str) -> MessageEvent {
    MessageEvent::new(text, Member::new(UserId(1), "alice"), CHANNEL, None)
}

/// In-memory [`GuildControl`] with a fixed member roster.
pub struct StubControl {
    members: Vec<Member>,
    pub banned: Mutex<Vec<(Member, Option<String>)>>,
}

impl StubControl {
    pub fn new(members: Vec<Member>) -> Self {
        Self {
            members,
            banned: Mutex::new(Vec::new()),
        }
    }

    pub async fn banned_names(&self) -> Vec<String> {
        self.banned
            .lock()
            .await
            .iter()
            .map(|(member, _)| member.display_name.clone())
            .collect()
    }
}

#[async_trait]
impl GuildControl for StubControl {
    async fn resolve_member(&self, token: &str) -> Result<Member, GatewayError> {
        let name = token.trim_start_matches('@');
        self.members
            .iter()
            .find(|member| member.display_name == name)
            .cloned()
            .ok_or_else(|| GatewayError::UnknownMember(token.to_string()))
    }

    async fn ban(&self, user: UserId, reason: Option<&str>) -> Result<(), GatewayError> {
        let member = self
            .members
            .iter()
            .find(|member| member.id == user)
            .cloned()
            .ok_or_else(|| GatewayError::UnknownMember(user.to_string()))?;
        self.banned
            .lock()
            .await
            .push((member, reason.map(str::to_string)));
        Ok(())
    }

    async fn unban(&self, user: UserId) -> Result<(), GatewayError> {
        self.banned
            .lock()
            .await
            .retain(|(member, _)| member.id != user);
        Ok(())
    }

    async fn bans(&self) -> Result<Vec<Member>, GatewayError> {
        Ok(self
            .banned
            .lock()
            .await
            .iter()
            .map(|(member, _)| member.clone())
            .collect())
    }
}

/// Registry + dispatcher + capturing outbound buffer.
pub struct Harness {
    pub dispatcher: Dispatcher,
    pub control: StubControl,
    pub outbox: Mutex<Vec<OutboundMessage>>,
}

impl Harness {
    /// Build a harness over `modules` with a two-member roster
    /// (alice and bob).
    pub fn new(modules: Vec<Arc<dyn Module>>) -> Self {
        init_tracing();

        let mut registry = Registry::new();
        for module in modules {
            registry
                .register(module)
                .expect("test module registration failed");
        }

        Self {
            dispatcher: Dispatcher::new(Arc::new(registry)),
            control: StubControl::new(vec![
                Member::new(UserId(1), "alice"),
                Member::new(UserId(2), "bob"),
            ]),
            outbox: Mutex::new(Vec::new()),
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.dispatcher = self.dispatcher.with_prefix(prefix);
        self
    }

    pub async fn dispatch(&self, event: &MessageEvent) -> ModuleResult {
        self.dispatcher
            .dispatch(event, Outbound::Capturing(&self.outbox), &self.control)
            .await
    }

    pub async fn dispatch_text(&self, text: &str) -> ModuleResult {
        self.dispatch(&guild_event(text)).await
    }

    /// Text of every reply emitted so far.
    pub async fn sent(&self) -> Vec<String> {
        self.outbox
            .lock()
            .await
            .iter()
            .map(|msg| msg.text.clone())
            .collect()
    }
}
