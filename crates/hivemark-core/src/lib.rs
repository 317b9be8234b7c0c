//! Core library for hivemark.
//!
//! This crate provides the title styling engine and the theme text filters
//! used by the `hivemark` CLI and any downstream consumers.
//!
//! # Modules
//!
//! - [`styler`] - The automatic title styling pipeline
//! - [`rules`] - The ordered rewrite-rule table the styler applies
//! - [`dom`] - Fragment parsing, tree traversal, and reserialization
//! - [`sanitize`] - Allow-list HTML sanitization
//! - [`classes`] - Body and post CSS class computation
//! - [`titles`] - Document title assembly
//! - [`filters`] - Small output filters (excerpts, link wrappers)
//! - [`editor`] - Rich-text editor buttons and style formats
//! - [`embeds`] - Media embed extraction from content blobs
//! - [`fonts`] - Web font stylesheet URL construction
//! - [`gravatar`] - Gravatar probe URL construction
//! - [`updates`] - Theme identification metadata
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use hivemark_core::styler::style_title;
//!
//! let styled = style_title("Breaking: news happened", true);
//! assert_eq!(styled, "<strong>Breaking:</strong> news happened");
//! ```
#![deny(unsafe_code)]

pub mod classes;
pub mod config;
pub mod dom;
pub mod editor;
pub mod embeds;
pub mod error;
pub mod filters;
pub mod fonts;
pub mod gravatar;
pub mod rules;
pub mod sanitize;
pub mod styler;
pub mod titles;
pub mod updates;

pub use config::{Config, ConfigLoader, LogLevel};

pub use error::{ConfigError, ConfigResult};

pub use styler::{StyleReport, style_title};

/// Default maximum input size: 5 MiB.
///
/// Guards the file-reading commands against oversized inputs; title strings
/// themselves are never anywhere near this.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
