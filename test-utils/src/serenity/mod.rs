//! Test factories for creating Serenity API objects.
//!
//! When testing code that converts Serenity structs into domain models, you need Serenity
//! structs that look like what Discord sends. These factories build them from JSON with
//! sensible defaults while allowing customization of the fields the bot reads.
//!
//! # Available Factories
//!
//! - `member::create_test_member` - Create Serenity Member objects
//! - `reaction::create_test_reaction` - Create Serenity Reaction events
//! - `reaction::create_test_message_reaction` - Create reactions listed on a message
//! - `role::create_test_role` - Create Serenity Role objects

pub mod member;
pub mod reaction;
pub mod role;

// Re-export commonly used functions for convenience
pub use member::create_test_member;
pub use reaction::{create_test_message_reaction, create_test_reaction, TestEmoji};
pub use role::create_test_role;
