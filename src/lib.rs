//! Sonar - a client for the OpenRadar bug tracker
//!
//! This crate fetches bug reports ("radars") by numeric ID, reconstructs
//! the structured fields from the tracker's free-text description blobs,
//! and submits new reports. The tracker boundary is the [`BugTracker`]
//! trait so further backends can be added without touching calling code.
//!
//! ```no_run
//! use sonar::{BugTracker, OpenRadar};
//!
//! # async fn example() -> sonar::Result<()> {
//! let tracker = OpenRadar::new("my-token")?;
//! let radar = tracker.fetch(12345).await?;
//! println!("{}: {}", radar.classification, radar.title);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod logging;
pub mod parse;

pub use api::client::{BugTracker, OpenRadar, TwoFactorProvider};
pub use api::error::{AttachmentError, Result, SonarError};
pub use api::types::{Attachment, Classification, Product, Radar, Reproducibility};
