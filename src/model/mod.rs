//! Domain models.
//!
//! - `config` - raw and normalized reaction config records
//! - `discord` - views of the Discord objects the bot resolves
//! - `emoji` - emoji identity used as the reaction tracking key
//! - `index` - the synchronization index built at startup
//! - `notification` - typed reaction add/remove notifications and their outcomes

pub mod config;
pub mod discord;
pub mod emoji;
pub mod index;
pub mod notification;
