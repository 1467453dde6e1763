use crate::domain::model::Record;
use crate::utils::error::Result;
use csv::{Reader, ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::io::Read;

/// 以標題列為鍵讀取 CSV，逐列產生 [`Record`]。
///
/// 缺少的欄位視為空字串；`id` 去除空白後為空的列會被略過。
/// `transformed_image_url` 與 `created_at` 為空時存成 `None`。
pub struct RecordExtractor<R: Read> {
    reader: Reader<R>,
    columns: HashMap<String, usize>,
    row: StringRecord,
}

impl<R: Read> RecordExtractor<R> {
    pub fn new(input: R) -> Result<Self> {
        // 欄位數不一致的列照樣讀取，短少的欄位當作空字串
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(input);

        // 重複的標題以最後一欄為準
        let columns = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(index, name)| (name.to_string(), index))
            .collect();

        Ok(Self {
            reader,
            columns,
            row: StringRecord::new(),
        })
    }

    fn field(&self, name: &str) -> &str {
        self.columns
            .get(name)
            .and_then(|&index| self.row.get(index))
            .map(str::trim)
            .unwrap_or("")
    }

    fn optional_field(&self, name: &str) -> Option<String> {
        let value = self.field(name);
        (!value.is_empty()).then(|| value.to_string())
    }

    fn build_record(&self) -> Option<Record> {
        let id = self.field("id");
        if id.is_empty() {
            return None;
        }

        Some(Record {
            id: id.to_string(),
            first_name: self.field("first_name").to_string(),
            last_name: self.field("last_name").to_string(),
            email: self.field("email").to_string(),
            phone: self.field("phone").to_string(),
            treatment_type: self.field("treatment_type").to_string(),
            original_image_url: self.field("original_image_url").to_string(),
            transformed_image_url: self.optional_field("transformed_image_url"),
            created_at: self.optional_field("created_at"),
        })
    }
}

impl<R: Read> Iterator for RecordExtractor<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.reader.read_record(&mut self.row) {
                Ok(true) => {
                    if let Some(record) = self.build_record() {
                        return Some(Ok(record));
                    }
                    tracing::trace!("Skipping row without id");
                }
                Ok(false) => return None,
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

/// 讀取整個輸入並收集所有有效紀錄，遇到解析錯誤立即回傳
pub fn extract_records<R: Read>(input: R) -> Result<Vec<Record>> {
    RecordExtractor::new(input)?.collect()
}
