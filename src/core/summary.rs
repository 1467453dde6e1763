//! 終端摘要的文字格式

use crate::core::sql::sample_preview;

pub fn file_summary(name: &str, found: usize) -> String {
    format!("Parsing {}...\n  Found {} records", name, found)
}

pub fn totals_summary(total: usize, unique: usize) -> String {
    format!("\nTotal records: {}\nUnique records: {}", total, unique)
}

pub fn sample_summary(tuple: &str) -> String {
    format!(
        "\n--- Sample record (first one) ---\n{}",
        sample_preview(tuple)
    )
}

pub fn saved_summary(path: &str) -> String {
    format!("\nSaved parsed data to {}", path)
}
