//! Command definitions for chat-platform slash commands.
//!
//! This crate provides:
//! - [`CommandBuilder`] for assembling and validating command trees
//! - [`Command`] and [`CommandOption`], the immutable results of a build
//! - [`CommandError`], raised synchronously on invalid input
//!
//! Definitions are plain data. Registering them with a gateway is handled by
//! `herald-gateway`.
//!
//! # Example
//!
//! ```rust
//! use herald_commands::{CommandBuilder, OptionType};
//!
//! let echo = CommandBuilder::create_command("echo", "Send an echo message")?
//!     .add_option("message", "The message to send", OptionType::String)?
//!     .build();
//!
//! assert_eq!(echo.name(), "echo");
//! assert!(!echo.is_sub_command());
//! # Ok::<(), herald_commands::CommandError>(())
//! ```

mod builder;
mod command;
pub mod error;
mod option;

pub use builder::CommandBuilder;
pub use command::Command;
pub use error::{CommandError, CommandResult};
pub use option::{CommandOption, OptionType};
