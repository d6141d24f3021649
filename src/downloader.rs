use crate::error::FetchError;
use crate::model::{DestinationPath, DownloadOutcome};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use std::io::Read;
use std::time::Duration;

/// Blocking HTTP client for the listing page and wallpaper images.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(HttpFetcher { client })
    }

    pub fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let resp = self.client.get(url).send()?.error_for_status()?;
        Ok(resp.text()?)
    }

    pub fn fetch_image(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let resp = self.client.get(url).send()?.error_for_status()?;
        let total = resp.content_length().unwrap_or(0);
        let pb = if total > 0 {
            ProgressBar::new(total)
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.cyan/blue} {bytes}/{total_bytes} {msg}")
                .unwrap(),
        );
        // Content-Length is only a hint; the buffer grows with what actually arrives.
        let mut bytes = Vec::new();
        let result = pb.wrap_read(resp).read_to_end(&mut bytes);
        pb.finish_and_clear();
        result?;
        Ok(bytes)
    }
}

/// Decides whether a wallpaper needs fetching and, if so, saves it.
///
/// An existing file is never touched and `fetch_image` is not called for it,
/// so repeated runs only download dates that are still missing.
pub fn plan<F>(path: &DestinationPath, image_url: &str, fetch_image: F) -> DownloadOutcome
where
    F: FnOnce(&str) -> Result<Vec<u8>, FetchError>,
{
    let file = path.file();
    if file.exists() {
        log::info!("日期为 {} 的壁纸已存在，跳过下载", path.date());
        return DownloadOutcome::Skipped(file);
    }
    let failed = |reason: String| {
        log::warn!("下载壁纸失败: {image_url}: {reason}");
        DownloadOutcome::Failed {
            url: image_url.to_string(),
            reason,
        }
    };
    let bytes = match fetch_image(image_url) {
        Ok(bytes) => bytes,
        Err(e) => return failed(e.to_string()),
    };
    // Overwrites whatever appeared at the path since the existence check.
    if let Err(e) = std::fs::write(&file, &bytes) {
        return failed(format!("写入文件 {} 失败: {e}", file.display()));
    }
    log::info!("已下载并保存壁纸至: {}", file.display());
    DownloadOutcome::Succeeded(file)
}
