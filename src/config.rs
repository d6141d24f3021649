use crate::cli::{Args, DEFAULT_PAGE_URL, ReportFormat, is_valid_page_url};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_DIR_NAME: &str = "BingWallpapers";

/// Everything one run needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub page_url: String,
    pub root: PathBuf,
    pub timeout: Duration,
    pub report: Option<(PathBuf, ReportFormat)>,
}

impl Config {
    pub fn from_args(args: &Args) -> Self {
        let page_url = if is_valid_page_url(&args.url) {
            args.url.clone()
        } else {
            log::warn!("无效的网址 {}，改用默认网址 {DEFAULT_PAGE_URL}", args.url);
            DEFAULT_PAGE_URL.to_string()
        };
        let root = args.dir.clone().unwrap_or_else(default_root);
        Config {
            page_url,
            root,
            timeout: Duration::from_secs(args.timeout),
            report: args.report.clone().map(|path| (path, args.format)),
        }
    }
}

/// `~/BingWallpapers`, or a relative `BingWallpapers` without a home directory.
pub fn default_root() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIR_NAME))
}
