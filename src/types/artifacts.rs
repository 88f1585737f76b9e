//! Image artifacts and the terminal outcome of a run.

use super::{Provenance, ValidatedUrl};
use crate::error::AppError;
use std::fmt;
use std::path::{Path, PathBuf};

/// What the generation service handed back: pixels inline, or a link to them.
#[derive(Clone, PartialEq, Eq)]
pub enum GeneratedImage {
    InlineBytes(Vec<u8>),
    RemoteRef(ValidatedUrl),
}

impl GeneratedImage {
    pub fn shape(&self) -> &'static str {
        match self {
            Self::InlineBytes(_) => "inline",
            Self::RemoteRef(_) => "url",
        }
    }
}

impl fmt::Debug for GeneratedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InlineBytes(bytes) => write!(f, "InlineBytes({} bytes)", bytes.len()),
            Self::RemoteRef(url) => write!(f, "RemoteRef({})", url),
        }
    }
}

/// Encoded image bytes (PNG/JPEG/WebP) in memory, independent of how they arrived.
#[derive(Clone, PartialEq, Eq)]
pub struct RasterBytes(Vec<u8>);

impl RasterBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for RasterBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RasterBytes({} bytes)", self.0.len())
    }
}

/// The finished poster on disk and in memory.
#[derive(Debug, Clone)]
pub struct CompositedPoster {
    bytes: RasterBytes,
    path: PathBuf,
    logo_applied: bool,
}

impl CompositedPoster {
    pub fn new(bytes: RasterBytes, path: PathBuf, logo_applied: bool) -> Self {
        Self {
            bytes,
            path,
            logo_applied,
        }
    }

    pub fn bytes(&self) -> &RasterBytes {
        &self.bytes
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn logo_applied(&self) -> bool {
        self.logo_applied
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "poster.png".to_string())
    }
}

/// What reaches the publisher.
#[derive(Debug, Clone)]
pub enum PosterArtifact {
    /// Bytes produced (and persisted) locally
    Local(CompositedPoster),
    /// Compositing was skipped and only the service's URL survived
    Remote(ValidatedUrl),
}

impl PosterArtifact {
    pub fn logo_applied(&self) -> bool {
        match self {
            Self::Local(poster) => poster.logo_applied(),
            Self::Remote(_) => false,
        }
    }

    pub fn output_path(&self) -> Option<&Path> {
        match self {
            Self::Local(poster) => Some(poster.path()),
            Self::Remote(_) => None,
        }
    }
}

/// Identifier the messaging platform assigned to a delivered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageId(pub i64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether the failure notice itself made it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertStatus {
    Sent(MessageId),
    /// Sending the alert failed; the failure was logged and discarded
    Undelivered,
    /// Dry runs never alert
    Skipped,
}

/// Facts about a run that produced a poster, for the completion log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub provenance: Provenance,
    pub logo_applied: bool,
    pub output_path: Option<PathBuf>,
    pub remote_only: bool,
}

/// Terminal state of one pipeline invocation.
#[derive(Debug)]
pub enum DeliveryOutcome {
    Delivered {
        message_id: MessageId,
        summary: RunSummary,
    },
    /// Every stage up to persistence ran; publishing was skipped on request
    DryRun { summary: RunSummary },
    Failed { error: AppError, alert: AlertStatus },
}

impl DeliveryOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed { .. })
    }

    pub fn summary(&self) -> Option<&RunSummary> {
        match self {
            Self::Delivered { summary, .. } | Self::DryRun { summary } => Some(summary),
            Self::Failed { .. } => None,
        }
    }
}
