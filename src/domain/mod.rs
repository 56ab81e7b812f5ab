//! Domain models and types for Sieve.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Record model** ([`Record`]) and the value coercion rules used by every
//!   detector and masker ([`value_text`], [`is_present`])
//! - **Error types** ([`SieveError`], [`RowCondition`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible boundary operations return [`Result<T>`](crate::domain::Result):
//!
//! ```rust,no_run
//! use sieve::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let config = sieve::config::load_config("sieve.toml")?;
//!     println!("batch size: {}", config.processing.batch_size);
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod record;
pub mod result;

pub use errors::{RowCondition, SieveError};
pub use record::{is_present, value_text, Record};
pub use result::Result;
