pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_pattern, validate_path, validate_positive_number, validate_sql_identifier,
    Validate,
};
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "consult-import"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Deduplicate consultation CSV exports into JSON and SQL INSERT values")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = "./csv_files"))]
    pub input_dir: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "consultations_rows*.csv"))]
    pub file_pattern: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "./parsed_data.json"))]
    pub output_path: String,

    #[cfg_attr(feature = "cli", arg(long, help = "Also write batched INSERT statements to this file"))]
    pub sql_output: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, default_value = "consultations"))]
    pub table: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "100"))]
    pub batch_size: usize,

    // 使用設定檔時不接受其他輸入輸出參數
    #[cfg_attr(
        feature = "cli",
        arg(
            long,
            help = "Load settings from a TOML file instead of flags",
            conflicts_with_all = ["input_dir", "file_pattern", "output_path", "sql_output", "table", "batch_size"]
        )
    )]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input_dir: "./csv_files".to_string(),
            file_pattern: "consultations_rows*.csv".to_string(),
            output_path: "./parsed_data.json".to_string(),
            sql_output: None,
            table: "consultations".to_string(),
            batch_size: 100,
            config: None,
            verbose: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn input_dir(&self) -> &str {
        &self.input_dir
    }

    fn file_pattern(&self) -> &str {
        &self.file_pattern
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn sql_output_path(&self) -> Option<&str> {
        self.sql_output.as_deref()
    }

    fn table_name(&self) -> &str {
        &self.table
    }

    fn batch_size(&self) -> usize {
        self.batch_size
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_dir", &self.input_dir)?;
        validate_file_pattern("file_pattern", &self.file_pattern)?;
        validate_path("output_path", &self.output_path)?;
        if let Some(sql_output) = &self.sql_output {
            validate_path("sql_output", sql_output)?;
        }
        validate_sql_identifier("table", &self.table)?;
        validate_positive_number("batch_size", self.batch_size, 1)?;
        Ok(())
    }
}
