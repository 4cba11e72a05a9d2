//! Role management commands.
//!
//! The command set is declared but not yet wired up; the default placeholder
//! `execute` surfaces each sub-command until it gets a real implementation.

use crate::context::Context;
use crate::error::ModuleResult;
use crate::module::Module;
use async_trait::async_trait;

/// Module owning the `role` command family.
pub struct RoleModule;

#[async_trait]
impl Module for RoleModule {
    fn identifier(&self) -> &'static str {
        "role"
    }

    fn keywords(&self) -> &'static [&'static str] {
        &["role"]
    }

    fn commands(&self) -> &'static [&'static str] {
        &["add", "remove", "list"]
    }

    async fn help(&self, ctx: &Context<'_>) -> ModuleResult {
        ctx.send(
            "role add <member> <role>: give a member a role\n\
             role remove <member> <role>: take a role from a member\n\
             role list: show assignable roles",
        )
        .await
    }
}
