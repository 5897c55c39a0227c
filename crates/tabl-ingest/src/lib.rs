//! Loaders that turn CSV sources (files, readers, URLs) into tables.
//!
//! This crate is the table model's only I/O collaborator: each loader is a
//! one-shot blocking read performed once at construction, and I/O failures
//! propagate to the caller with source context attached.

pub mod csv;
pub mod error;
pub mod url;

pub use crate::csv::{from_path, from_reader, read_grid};
pub use crate::error::{IngestError, Result};
pub use crate::url::from_url;
