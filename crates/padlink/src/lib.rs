//! `padlink` - shareable links and archives for embeddable code playgrounds.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

/// Downloadable archive export.
pub mod archive;
/// URL-fragment-safe token codec.
pub mod codec;
/// Tool configuration loading.
pub mod config;
/// Share-link composition and fragment resolution.
pub mod link;
/// Playground project model and wire format.
pub mod project;

pub use link::ResolvedState;
pub use project::{Project, ProjectFile, SampleName};
