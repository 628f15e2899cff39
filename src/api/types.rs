//! Bug report types: the radar record, its categorical fields, and file
//! attachments.

use std::ffi::OsStr;
use std::fmt;
use std::fs;
use std::path::Path;

use super::error::AttachmentError;

/// A bug report.
///
/// The description blob stored by the tracker is already decomposed here:
/// `description` holds the summary section, and the remaining sections
/// live in their own fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Radar {
    /// The tracker-assigned identifier. `None` until the ticket exists
    /// server-side.
    pub id: Option<i64>,
    /// The kind of report (crash, enhancement, ...).
    pub classification: Classification,
    /// The product the report is filed against.
    pub product: Product,
    /// How reliably the problem reproduces.
    pub reproducibility: Reproducibility,
    /// One-line title.
    pub title: String,
    /// The summary section of the report body.
    pub description: String,
    /// Steps to reproduce the problem.
    pub steps: String,
    /// What was expected to happen.
    pub expected: String,
    /// What actually happened.
    pub actual: String,
    /// Hardware/software configuration notes.
    pub configuration: String,
    /// The affected product version.
    pub version: String,
    /// Free-form notes. Never the empty string: submission forms treat
    /// `""` as a missing field, so an absent section becomes a single
    /// space.
    pub notes: String,
    /// Attached files, in the order they were added.
    pub attachments: Vec<Attachment>,
}

impl fmt::Display for Radar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "rdar://{}: {}", id, self.title),
            None => write!(f, "{}", self.title),
        }
    }
}

/// The kind of problem a radar reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Classification {
    Security,
    Crash,
    Power,
    Performance,
    UiUsability,
    SeriousBug,
    OtherBug,
    Feature,
    #[default]
    Enhancement,
}

impl Classification {
    /// Every classification, in canonical order.
    pub const ALL: [Classification; 9] = [
        Classification::Security,
        Classification::Crash,
        Classification::Power,
        Classification::Performance,
        Classification::UiUsability,
        Classification::SeriousBug,
        Classification::OtherBug,
        Classification::Feature,
        Classification::Enhancement,
    ];

    /// The canonical display name used by the tracker.
    pub fn name(self) -> &'static str {
        match self {
            Classification::Security => "Security",
            Classification::Crash => "Crash/Hang/Data Loss",
            Classification::Power => "Power",
            Classification::Performance => "Performance",
            Classification::UiUsability => "UI/Usability",
            Classification::SeriousBug => "Serious Bug",
            Classification::OtherBug => "Other Bug",
            Classification::Feature => "Feature (New)",
            Classification::Enhancement => "Enhancement",
        }
    }

    /// Resolve a raw string to a classification, case-insensitively.
    ///
    /// Unknown values resolve to [`Classification::Enhancement`]; this is
    /// total so an evolving upstream schema can never fail a fetch.
    pub fn from_name(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|member| member.name().eq_ignore_ascii_case(raw))
            .unwrap_or_default()
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The product a radar is filed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Product {
    #[default]
    Ios,
    MacOs,
    TvOs,
    WatchOs,
    Hardware,
    DeveloperTools,
    Documentation,
    Safari,
    Icloud,
    Itunes,
    Other,
}

impl Product {
    /// Every product, in canonical order.
    pub const ALL: [Product; 11] = [
        Product::Ios,
        Product::MacOs,
        Product::TvOs,
        Product::WatchOs,
        Product::Hardware,
        Product::DeveloperTools,
        Product::Documentation,
        Product::Safari,
        Product::Icloud,
        Product::Itunes,
        Product::Other,
    ];

    /// The canonical display name used by the tracker.
    pub fn name(self) -> &'static str {
        match self {
            Product::Ios => "iOS",
            Product::MacOs => "macOS",
            Product::TvOs => "tvOS",
            Product::WatchOs => "watchOS",
            Product::Hardware => "Hardware",
            Product::DeveloperTools => "Developer Tools",
            Product::Documentation => "Documentation",
            Product::Safari => "Safari",
            Product::Icloud => "iCloud",
            Product::Itunes => "iTunes",
            Product::Other => "Other",
        }
    }

    /// Resolve a raw string to a product, case-insensitively.
    ///
    /// Unknown values resolve to [`Product::Ios`].
    pub fn from_name(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|member| member.name().eq_ignore_ascii_case(raw))
            .unwrap_or_default()
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How reliably a reported problem reproduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reproducibility {
    #[default]
    Always,
    Sometimes,
    Rarely,
    Unable,
    DidNotTry,
    NotApplicable,
}

impl Reproducibility {
    /// Every reproducibility, in canonical order.
    pub const ALL: [Reproducibility; 6] = [
        Reproducibility::Always,
        Reproducibility::Sometimes,
        Reproducibility::Rarely,
        Reproducibility::Unable,
        Reproducibility::DidNotTry,
        Reproducibility::NotApplicable,
    ];

    /// The canonical display name used by the tracker.
    pub fn name(self) -> &'static str {
        match self {
            Reproducibility::Always => "Always",
            Reproducibility::Sometimes => "Sometimes",
            Reproducibility::Rarely => "Rarely",
            Reproducibility::Unable => "Unable",
            Reproducibility::DidNotTry => "I didn't try",
            Reproducibility::NotApplicable => "Not applicable",
        }
    }

    /// Resolve a raw string to a reproducibility, case-insensitively.
    ///
    /// Unknown values resolve to [`Reproducibility::Always`].
    pub fn from_name(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|member| member.name().eq_ignore_ascii_case(raw))
            .unwrap_or_default()
    }
}

impl fmt::Display for Reproducibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A file attached to a radar.
///
/// Built once from a local file; the bytes are read at attach time and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Attachment {
    /// The file name shown by the tracker (last path component).
    pub filename: String,
    /// The MIME type derived from the file extension.
    pub mime_type: String,
    data: Vec<u8>,
}

impl Attachment {
    /// Build an attachment from a local file.
    ///
    /// The MIME type is resolved from the extension before the file is
    /// read; an unknown extension aborts construction with
    /// [`AttachmentError::InvalidMimeType`] and nothing is read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AttachmentError> {
        let path = path.as_ref();

        let filename = path
            .file_name()
            .and_then(OsStr::to_str)
            .unwrap_or_default()
            .to_string();

        let extension = path.extension().and_then(OsStr::to_str).unwrap_or_default();
        let mime_type = mime_guess::from_ext(extension)
            .first()
            .ok_or_else(|| AttachmentError::InvalidMimeType {
                extension: extension.to_string(),
            })?
            .essence_str()
            .to_string();

        let data = fs::read(path)?;

        Ok(Self {
            filename,
            mime_type,
            data,
        })
    }

    /// The attachment size in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// The attachment payload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl PartialEq for Attachment {
    fn eq(&self, other: &Self) -> bool {
        self.filename == other.filename && self.size() == other.size() && self.data == other.data
    }
}

impl Eq for Attachment {}
