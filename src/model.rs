use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One wallpaper entry found on the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallpaperRecord {
    pub image_url: String,
    /// `YYYYMMDD`
    pub date: String,
}

/// Where a record's image lives: `root/YYYY/MM/YYYYMMDD.jpg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationPath {
    pub root: PathBuf,
    pub year: String,
    pub month: String,
    pub file_name: String,
}

impl DestinationPath {
    /// The year/month directory holding the file.
    pub fn dir(&self) -> PathBuf {
        self.root.join(&self.year).join(&self.month)
    }

    pub fn file(&self) -> PathBuf {
        self.dir().join(&self.file_name)
    }

    pub fn date(&self) -> &str {
        self.file_name.trim_end_matches(".jpg")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Skipped(PathBuf),
    Succeeded(PathBuf),
    Failed { url: String, reason: String },
}

impl DownloadOutcome {
    pub fn status(&self) -> &'static str {
        match self {
            DownloadOutcome::Skipped(_) => "skipped",
            DownloadOutcome::Succeeded(_) => "succeeded",
            DownloadOutcome::Failed { .. } => "failed",
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            DownloadOutcome::Skipped(p) | DownloadOutcome::Succeeded(p) => Some(p),
            DownloadOutcome::Failed { .. } => None,
        }
    }
}

/// Flat row written to the outcome report.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutcomeRow {
    pub status: String,
    pub path: Option<String>,
    pub url: Option<String>,
    pub reason: Option<String>,
}

impl From<&DownloadOutcome> for OutcomeRow {
    fn from(outcome: &DownloadOutcome) -> Self {
        let (url, reason) = match outcome {
            DownloadOutcome::Failed { url, reason } => (Some(url.clone()), Some(reason.clone())),
            _ => (None, None),
        };
        OutcomeRow {
            status: outcome.status().to_string(),
            path: outcome.path().map(|p| p.display().to_string()),
            url,
            reason,
        }
    }
}
