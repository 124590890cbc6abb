use chrono::{Datelike, Local};
use std::path::PathBuf;

/// Generate default output filename with format: cera-searvey-ioc-active-{YYMMDD}.csv
pub fn generate_default_csv_filename() -> PathBuf {
    dated_csv_filename("cera-searvey-ioc-active")
}

/// Generate default filename for the unfiltered dump with format:
/// cera-searvey-ioc-all-{YYMMDD}.csv
pub fn generate_default_dump_filename() -> PathBuf {
    dated_csv_filename("cera-searvey-ioc-all")
}

fn dated_csv_filename(stem: &str) -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    PathBuf::from(format!("{}-{:02}{:02}{:02}.csv", stem, year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_csv_filename() {
        let filename = generate_default_csv_filename();
        let filename_str = filename.to_string_lossy();

        assert!(filename_str.starts_with("cera-searvey-ioc-active-"));
        assert!(filename_str.ends_with(".csv"));

        // stem + dash + YYMMDD + extension
        let digits = filename_str
            .trim_start_matches("cera-searvey-ioc-active-")
            .trim_end_matches(".csv");
        assert_eq!(digits.len(), 6);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_default_dump_filename() {
        let filename = generate_default_dump_filename();
        let filename_str = filename.to_string_lossy();

        assert!(filename_str.starts_with("cera-searvey-ioc-all-"));
        assert!(filename_str.ends_with(".csv"));
    }
}
