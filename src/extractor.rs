use crate::model::WallpaperRecord;
use regex::{CaptureMatches, Regex};

lazy_static::lazy_static! {
    // Image block on the listing page: the big image followed by its
    // `<p>YYYY-MM-DD <a href="...">` caption. Blocks may span lines.
    static ref WALLPAPER_BLOCK: Regex = Regex::new(
        r#"(?s)<img class="bigImg".*?src="(.*?)".*?<p>(.*?) <a href=""#
    ).unwrap();
}

/// Lazily yields wallpaper records from a listing page, in document order.
///
/// Blocks that do not match the marker pattern are skipped silently, as are
/// matched blocks whose date does not normalize to eight digits.
pub fn parse(html: &str) -> Records<'_> {
    Records {
        captures: WALLPAPER_BLOCK.captures_iter(html),
    }
}

pub struct Records<'h> {
    captures: CaptureMatches<'static, 'h>,
}

impl Iterator for Records<'_> {
    type Item = WallpaperRecord;

    fn next(&mut self) -> Option<WallpaperRecord> {
        for caps in self.captures.by_ref() {
            let image_url = caps[1].trim().to_string();
            let date = normalize_date(&caps[2]);
            if image_url.is_empty() || !is_record_date(&date) {
                log::debug!("忽略不完整的壁纸条目: url={image_url:?} date={date:?}");
                continue;
            }
            log::debug!("解析到壁纸: {date} {image_url}");
            return Some(WallpaperRecord { image_url, date });
        }
        None
    }
}

/// `" 2024-03-15 "` becomes `"20240315"`.
pub fn normalize_date(raw: &str) -> String {
    raw.trim().replace('-', "")
}

pub fn is_record_date(date: &str) -> bool {
    date.len() == 8 && date.bytes().all(|b| b.is_ascii_digit())
}
