//! Releasekit - scene-style release name generator
//!
//! This library crate exposes the mediainfo and rename collaborators for
//! integration testing; the naming logic itself lives in
//! `releasekit-engine`.

pub mod error;
pub mod mediainfo;
pub mod rename;

pub use error::{Error, Result};
