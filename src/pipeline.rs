use crate::canonical::canonicalize;
use crate::downloader::plan;
use crate::error::{Error, FetchError, Result};
use crate::extractor;
use crate::model::DownloadOutcome;
use crate::paths;
use std::fmt;
use std::path::Path;

/// Counts of each outcome kind for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn from_outcomes<'a>(outcomes: impl IntoIterator<Item = &'a DownloadOutcome>) -> Self {
        let mut summary = RunSummary::default();
        for outcome in outcomes {
            match outcome {
                DownloadOutcome::Succeeded(_) => summary.succeeded += 1,
                DownloadOutcome::Skipped(_) => summary.skipped += 1,
                DownloadOutcome::Failed { .. } => summary.failed += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.skipped + self.failed
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "共 {} 张壁纸，新下载 {}，已存在 {}，失败 {}",
            self.total(),
            self.succeeded,
            self.skipped,
            self.failed
        )
    }
}

/// Processes every wallpaper on the page and returns one outcome per record.
///
/// Only an unusable `root` aborts the run. Every other failure is recorded
/// as a `Failed` outcome for its record and processing continues.
pub fn run<F>(page_html: &str, root: &Path, mut fetch_image: F) -> Result<Vec<DownloadOutcome>>
where
    F: FnMut(&str) -> std::result::Result<Vec<u8>, FetchError>,
{
    ensure_dir(root)?;

    let mut outcomes = Vec::new();
    for record in extractor::parse(page_html) {
        let image_url = canonicalize(&record.image_url);
        log::debug!("{} -> {image_url}", record.image_url);
        let dest = paths::derive(root, &record)?;
        let outcome = match ensure_dir(&dest.dir()) {
            Ok(()) => plan(&dest, &image_url, &mut fetch_image),
            Err(e) => {
                log::warn!("{e}");
                DownloadOutcome::Failed {
                    url: image_url,
                    reason: e.to_string(),
                }
            }
        };
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

/// Creates `dir` and its parents when missing.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    log::info!("已创建保存壁纸的目录: {}", dir.display());
    Ok(())
}
