//! Chipper build preparation library.
//!
//! This crate computes the build context a simulation bundler consumes:
//! which locales to bundle, which locale the string plugin reads, and how
//! asset URLs are cache-busted. It backs the `chipper` binary and can be
//! driven programmatically from tests.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions
//! - [`context`] - Build context construction and the pre-bundle step
//! - [`error`] - Semantic error types
//! - [`inspect`] - Offline report of what the startup initializer derives
//! - [`locales`] - Locale selection from options and translated strings
//! - [`output`] - Human and JSON rendering of build contexts
//! - [`package`] - `package.json` metadata
//! - [`prepare`] - The prepare command
//! - [`strings_scanner`] - Discovery of translated string files

pub mod cli;
pub mod context;
pub mod error;
pub mod inspect;
pub mod locales;
pub mod output;
pub mod package;
pub mod prepare;
pub mod strings_scanner;
