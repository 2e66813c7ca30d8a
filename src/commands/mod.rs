//! # CLI Command Implementations
//!
//! `docupages` has a single command, publishing, whose arguments are
//! flattened into the top-level parser. It follows the usual layout:
//!
//! - An `Args` struct that defines the command's arguments and options,
//!   derived using `clap`.
//! - An `execute` function that turns the parsed `Args` into library values
//!   and calls into the `docupages` library to perform the work.

pub mod publish;
