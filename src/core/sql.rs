use crate::domain::model::Record;

/// `transformed_image_url` 超過這個字元數就改寫成 `NULL`（通常是內嵌的 base64 圖片）
pub const MAX_TRANSFORMED_URL_LEN: usize = 500;

/// 範例輸出的最大字元數
pub const PREVIEW_LEN: usize = 500;

/// 與 [`encode_record`] 輸出順序相同的欄位名稱
pub const COLUMNS: [&str; 9] = [
    "id",
    "first_name",
    "last_name",
    "email",
    "phone",
    "treatment_type",
    "original_image_url",
    "transformed_image_url",
    "created_at",
];

/// 轉成 SQL 字串常值，單引號加倍
pub fn escape_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// 同 [`escape_literal`]，沒有值時輸出不加引號的 `NULL`
pub fn escape_optional(value: Option<&str>) -> String {
    match value {
        Some(value) => escape_literal(value),
        None => "NULL".to_string(),
    }
}

fn encode_transformed_url(value: Option<&str>) -> String {
    match value {
        Some(url) if url.trim().chars().count() > MAX_TRANSFORMED_URL_LEN => {
            tracing::debug!(
                "Dropping transformed_image_url of {} characters",
                url.chars().count()
            );
            "NULL".to_string()
        }
        other => escape_optional(other),
    }
}

fn encode_created_at(value: Option<&str>) -> String {
    match value {
        Some(timestamp) => escape_literal(timestamp),
        None => "NOW()".to_string(),
    }
}

/// 把一筆 [`Record`] 編碼成 SQL VALUES tuple
///
/// # 範例
///
/// ```text
/// ('abc-123'::uuid, 'Alice', 'O''Brien', '', '', 'hair', '', NULL, NOW())
/// ```
pub fn encode_record(record: &Record) -> String {
    let values = [
        format!("{}::uuid", escape_literal(&record.id)),
        escape_literal(&record.first_name),
        escape_literal(&record.last_name),
        escape_literal(&record.email),
        escape_literal(&record.phone),
        escape_literal(&record.treatment_type),
        escape_literal(&record.original_image_url),
        encode_transformed_url(record.transformed_image_url.as_deref()),
        encode_created_at(record.created_at.as_deref()),
    ];
    format!("({})", values.join(", "))
}

pub fn encode_records(records: &[Record]) -> Vec<String> {
    records.iter().map(encode_record).collect()
}

/// 截斷過長的 tuple 供終端顯示
pub fn sample_preview(tuple: &str) -> String {
    match tuple.char_indices().nth(PREVIEW_LEN) {
        Some((end, _)) => format!("{}...", &tuple[..end]),
        None => tuple.to_string(),
    }
}

/// 每 `batch_size` 筆 tuple 組成一個 `INSERT` 敘述
pub fn insert_statements(table: &str, values: &[String], batch_size: usize) -> Vec<String> {
    let columns = COLUMNS.join(", ");
    values
        .chunks(batch_size.max(1))
        .map(|batch| {
            format!(
                "INSERT INTO {} ({}) VALUES\n{};",
                table,
                columns,
                batch.join(",\n")
            )
        })
        .collect()
}
