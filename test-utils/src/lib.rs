//! Reactrole Test Utils
//!
//! Provides factories for building Serenity API objects in tests. The objects are created by
//! deserializing JSON shaped like Discord's gateway and REST payloads, so tests exercise the
//! same conversion code the bot runs against real events.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_reaction, TestEmoji};
//!
//! #[test]
//! fn converts_reaction() {
//!     let reaction = create_test_reaction(1, 2, 3, Some(4), TestEmoji::Unicode("✅"));
//!     let member = create_test_member(4, 3, &[10, 11]);
//!     // Convert and assert...
//! }
//! ```

pub mod serenity;
