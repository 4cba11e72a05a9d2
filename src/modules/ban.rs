//! Ban management commands.

use crate::context::Context;
use crate::error::{GatewayError, ModuleResult};
use crate::module::Module;
use crate::tokens::Tokens;
use async_trait::async_trait;

const COMMANDS: &[&str] = &["add", "remove", "list"];

/// Module owning the `ban` command family.
pub struct BanModule;

#[async_trait]
impl Module for BanModule {
    fn identifier(&self) -> &'static str {
        "ban"
    }

    fn keywords(&self) -> &'static [&'static str] {
        &["ban"]
    }

    fn commands(&self) -> &'static [&'static str] {
        COMMANDS
    }

    async fn execute(
        &self,
        ctx: &Context<'_>,
        command: &str,
        tokens: &mut Tokens<'_>,
    ) -> ModuleResult {
        match command {
            "add" => {
                let Some(target) = tokens.next() else {
                    return ctx.send("Usage: ban add <member> [reason]").await;
                };
                let member = match ctx.control.resolve_member(target).await {
                    Ok(member) => member,
                    Err(GatewayError::UnknownMember(token)) => {
                        return ctx.send(format!("No such member: {token}")).await;
                    }
                    Err(e) => return Err(e.into()),
                };

                let reason_words: Vec<&str> = tokens.collect();
                let reason = if reason_words.is_empty() {
                    None
                } else {
                    Some(reason_words.join(" "))
                };

                ctx.control.ban(member.id, reason.as_deref()).await?;
                ctx.send(format!("Banned {}", member.display_name)).await
            }
            "remove" => {
                let Some(target) = tokens.next() else {
                    return ctx.send("Usage: ban remove <member>").await;
                };
                let member = match ctx.control.resolve_member(target).await {
                    Ok(member) => member,
                    Err(GatewayError::UnknownMember(token)) => {
                        return ctx.send(format!("No such member: {token}")).await;
                    }
                    Err(e) => return Err(e.into()),
                };

                ctx.control.unban(member.id).await?;
                ctx.send(format!("Unbanned {}", member.display_name)).await
            }
            "list" => {
                let bans = ctx.control.bans().await?;
                if bans.is_empty() {
                    return ctx.send("No members are banned.").await;
                }

                let mut lines = vec![format!("{} banned member(s):", bans.len())];
                for member in bans {
                    lines.push(format!("  {} ({})", member.display_name, member.id));
                }
                ctx.send(lines.join("\n")).await
            }
            // handle() only forwards commands from COMMANDS.
            _ => Ok(()),
        }
    }

    async fn help(&self, ctx: &Context<'_>) -> ModuleResult {
        ctx.send(
            "ban add <member> [reason]: ban a member from this guild\n\
             ban remove <member>: lift a ban\n\
             ban list: show currently banned members",
        )
        .await
    }
}
