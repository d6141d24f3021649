use crate::error::{Error, Result};
use crate::extractor::is_record_date;
use crate::model::{DestinationPath, WallpaperRecord};
use std::path::Path;

/// Maps a record onto `root/YYYY/MM/YYYYMMDD.jpg`.
pub fn derive(root: &Path, record: &WallpaperRecord) -> Result<DestinationPath> {
    let date = record.date.as_str();
    if !is_record_date(date) {
        return Err(Error::InvalidDate(record.date.clone()));
    }
    Ok(DestinationPath {
        root: root.to_path_buf(),
        year: date[0..4].to_string(),
        month: date[4..6].to_string(),
        file_name: format!("{date}.jpg"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn record(date: &str) -> WallpaperRecord {
        WallpaperRecord {
            image_url: "https://x/img.jpg".into(),
            date: date.into(),
        }
    }

    #[test]
    fn partitions_by_year_and_month() {
        let dest = derive(Path::new("/data"), &record("20240315")).unwrap();
        assert_eq!(dest.year, "2024");
        assert_eq!(dest.month, "03");
        assert_eq!(dest.file_name, "20240315.jpg");
        assert_eq!(dest.dir(), PathBuf::from("/data/2024/03"));
        assert_eq!(dest.file(), PathBuf::from("/data/2024/03/20240315.jpg"));
        assert_eq!(dest.date(), "20240315");
    }

    #[test]
    fn rejects_malformed_dates() {
        for date in ["", "2024031", "202403150", "2024-03-1", "2024031x", "２０２４０３１５"] {
            assert!(
                matches!(derive(Path::new("/data"), &record(date)), Err(Error::InvalidDate(d)) if d == date),
                "{date}"
            );
        }
    }
}
