//! Concrete command modules shipped with the bot.
//!
//! Each module owns one family of commands and is registered with the
//! registry at startup. New modules implement [`Module`](crate::Module) and
//! get added here.

mod ban;
mod role;

pub use ban::BanModule;
pub use role::RoleModule;
