use serde::{Deserialize, Serialize};

/// 一筆諮詢紀錄，欄位名稱與輸出的 JSON 一致
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub treatment_type: String,
    pub original_image_url: String,
    /// `None` 代表缺少或空白，與空字串不同
    pub transformed_image_url: Option<String>,
    pub created_at: Option<String>,
}

/// 單一輸入檔案擷取出的紀錄
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub records: Vec<Record>,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    /// 去重後的紀錄，依第一次出現的順序
    pub records: Vec<Record>,
    /// 與 `records` 一一對應的 SQL tuple
    pub sql_values: Vec<String>,
    pub total_extracted: usize,
}

/// 寫到磁碟的 JSON 文件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedOutput {
    pub total_records: usize,
    pub records: Vec<Record>,
}

impl ParsedOutput {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            total_records: records.len(),
            records,
        }
    }
}
