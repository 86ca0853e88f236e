//! Service layer.
//!
//! - `config` - `ConfigResolver`, normalizing the operator's reaction config
//! - `reaction_role` - `ReactionRoleService`, building the synchronization index at startup and
//!   reconciling member roles on each reaction notification

pub mod config;
pub mod reaction_role;

#[cfg(test)]
mod test;
