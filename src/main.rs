mod canonical;
mod cli;
mod config;
mod downloader;
mod error;
mod extractor;
mod model;
mod output;
mod paths;
mod pipeline;

use anyhow::{Context, Result};
use config::Config;
use downloader::HttpFetcher;
use model::OutcomeRow;
use pipeline::RunSummary;
use std::time::Instant;

fn main() {
    let args = cli::parse_args();
    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(&Config::from_args(&args)) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    log::info!("抓取页面: {}", config.page_url);
    log::info!("壁纸将保存在: {}", config.root.display());

    let start = Instant::now();
    let fetcher = HttpFetcher::new(config.timeout).context("无法创建 HTTP 客户端")?;
    let html = fetcher
        .fetch_page(&config.page_url)
        .with_context(|| format!("无法获取页面 {}", config.page_url))?;

    let outcomes = pipeline::run(&html, &config.root, |url| fetcher.fetch_image(url))?;

    if let Some((path, format)) = &config.report {
        let rows: Vec<_> = outcomes.iter().map(OutcomeRow::from).collect();
        output::write_report(&rows, path, *format)?;
    }

    let summary = RunSummary::from_outcomes(&outcomes);
    log::info!("程序运行结束: {summary}，耗时 {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}
