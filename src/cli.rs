use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub const DEFAULT_PAGE_URL: &str = "https://bing.iamdt.cn/";

lazy_static::lazy_static! {
    static ref PAGE_URL: regex::Regex =
        regex::Regex::new(r"^https?://bing\.iamdt\.cn/(\d{4}-\d{2}\.html)?$").unwrap();
}

#[derive(Parser, Debug)]
#[command(
    name = "BingWallpaperDownloader",
    version,
    about = "抓取必应每日壁纸列表页，按 年/月/日期.jpg 保存尚未下载的壁纸。"
)]
pub struct Args {
    #[arg(
        long,
        default_value = DEFAULT_PAGE_URL,
        help = "要抓取的页面网址，支持首页或月份归档页（如 https://bing.iamdt.cn/2024-03.html）"
    )]
    pub url: String,
    #[arg(long, help = "壁纸的保存目录，默认 ~/BingWallpapers")]
    pub dir: Option<PathBuf>,
    #[arg(
        long,
        default_value_t = 30,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "每个网络请求的超时秒数（至少 1 秒）"
    )]
    pub timeout: u64,
    #[arg(long, help = "将每条壁纸的下载结果写入报告文件")]
    pub report: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = ReportFormat::Json, help = "报告格式 (json 或 csv)，默认json")]
    pub format: ReportFormat,
    #[arg(short, long, help = "输出调试日志")]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Json,
    Csv,
}

pub fn parse_args() -> Args {
    Args::parse()
}

/// Accepts the listing site root or one of its monthly archive pages.
pub fn is_valid_page_url(url: &str) -> bool {
    PAGE_URL.is_match(url)
}
