use crate::core::ConfigProvider;
use crate::utils::error::{ImportError, Result};
use crate::utils::validation::{
    validate_file_pattern, validate_path, validate_positive_number, validate_sql_identifier,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_TABLE: &str = "consultations";
const DEFAULT_BATCH_SIZE: usize = 100;
const REQUIRED_SECTIONS: [&str; 2] = ["input", "output"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub dir: String,
    pub pattern: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub json_path: String,
    pub sql_path: Option<String>,
    pub table: Option<String>,
    pub batch_size: Option<usize>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ImportError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let table: toml::Table =
            toml::from_str(&processed_content).map_err(Self::parsing_error)?;

        // 先檢查必要區段，讓錯誤訊息指出缺少哪一段
        if let Some(section) = REQUIRED_SECTIONS
            .iter()
            .find(|section| !table.contains_key(**section))
        {
            return Err(ImportError::MissingConfigError {
                field: format!("[{}]", section),
            });
        }

        toml::Value::Table(table)
            .try_into()
            .map_err(Self::parsing_error)
    }

    fn parsing_error(e: toml::de::Error) -> ImportError {
        ImportError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        }
    }

    /// 替換環境變數 (例如 ${CSV_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ImportError::ConfigError {
            message: format!("Failed to compile env var pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_dir(&self) -> &str {
        &self.input.dir
    }

    fn file_pattern(&self) -> &str {
        &self.input.pattern
    }

    fn output_path(&self) -> &str {
        &self.output.json_path
    }

    fn sql_output_path(&self) -> Option<&str> {
        self.output.sql_path.as_deref()
    }

    fn table_name(&self) -> &str {
        self.output.table.as_deref().unwrap_or(DEFAULT_TABLE)
    }

    fn batch_size(&self) -> usize {
        self.output.batch_size.unwrap_or(DEFAULT_BATCH_SIZE)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input.dir", &self.input.dir)?;
        validate_file_pattern("input.pattern", &self.input.pattern)?;
        validate_path("output.json_path", &self.output.json_path)?;
        if let Some(sql_path) = &self.output.sql_path {
            validate_path("output.sql_path", sql_path)?;
        }
        validate_sql_identifier("output.table", self.table_name())?;
        validate_positive_number("output.batch_size", self.batch_size(), 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[input]
dir = "./csv_files"
pattern = "consultations_rows*.csv"

[output]
json_path = "./parsed_data.json"
sql_path = "./import.sql"
batch_size = 50
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.input_dir(), "./csv_files");
        assert_eq!(config.file_pattern(), "consultations_rows*.csv");
        assert_eq!(config.sql_output_path(), Some("./import.sql"));
        assert_eq!(config.table_name(), "consultations");
        assert_eq!(config.batch_size(), 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CONSULT_IMPORT_TEST_DIR", "/data/exports");

        let toml_content = r#"
[input]
dir = "${CONSULT_IMPORT_TEST_DIR}"
pattern = "*.csv"

[output]
json_path = "${CONSULT_IMPORT_UNSET_VAR}/out.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input.dir, "/data/exports");
        assert_eq!(config.output.json_path, "${CONSULT_IMPORT_UNSET_VAR}/out.json");

        std::env::remove_var("CONSULT_IMPORT_TEST_DIR");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[input]
dir = "./csv_files"
pattern = "nested/*.csv"

[output]
json_path = "./parsed_data.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_section_is_reported() {
        let result = TomlConfig::from_toml_str("[input]\ndir = \"x\"\npattern = \"*.csv\"\n");
        match result {
            Err(ImportError::MissingConfigError { field }) => assert_eq!(field, "[output]"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_missing_field_is_a_parse_error() {
        let result = TomlConfig::from_toml_str(
            "[input]\ndir = \"x\"\n\n[output]\njson_path = \"out.json\"\n",
        );
        assert!(matches!(
            result,
            Err(ImportError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        assert!(matches!(
            TomlConfig::from_toml_str("[input\n"),
            Err(ImportError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[input]
dir = "./exports"
pattern = "consultations_rows*.csv"

[output]
json_path = "./out/parsed.json"
table = "public.consultations"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.input_dir(), "./exports");
        assert_eq!(config.table_name(), "public.consultations");
    }
}
