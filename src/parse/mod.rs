//! Description-blob parsing.
//!
//! Recovers the structured fields of a radar from the free-text
//! description the tracker stores. Everything here is a pure function of
//! its inputs.

pub mod mapper;
pub mod section;

pub use mapper::map_radar_fields;
pub use section::{extract_first, extract_section, Section};
