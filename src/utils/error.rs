use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid file pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl ImportError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ImportError::CsvError(e) => format!("無法解析 CSV 檔案: {}", e),
            ImportError::IoError(e) => format!("檔案讀寫失敗: {}", e),
            ImportError::SerializationError(e) => format!("JSON 輸出失敗: {}", e),
            ImportError::PatternError(e) => format!("檔名樣式無效: {}", e),
            ImportError::ConfigError { message } => format!("配置錯誤: {}", message),
            ImportError::ConfigValidationError { field, message } => {
                format!("配置欄位 {} 無效: {}", field, message)
            }
            ImportError::InvalidConfigValueError { field, value, reason } => {
                format!("配置欄位 {} 的值 '{}' 無效: {}", field, value, reason)
            }
            ImportError::MissingConfigError { field } => format!("缺少必要配置: {}", field),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ImportError::CsvError(_) => "檢查 CSV 檔案是否為 UTF-8 編碼且包含標題列",
            ImportError::IoError(_) => "確認輸入目錄存在且輸出路徑可寫入",
            ImportError::SerializationError(_) => "確認輸出路徑可寫入",
            ImportError::PatternError(_) => "使用有效的 glob 樣式，例如 consultations_rows*.csv",
            ImportError::ConfigError { .. }
            | ImportError::ConfigValidationError { .. }
            | ImportError::InvalidConfigValueError { .. }
            | ImportError::MissingConfigError { .. } => "檢查命令列參數或 TOML 配置檔",
        }
    }
}

pub type Result<T> = std::result::Result<T, ImportError>;
