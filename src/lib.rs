pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::pipelines::ConsultationPipeline;
pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use core::etl::EtlEngine;
pub use domain::model::{ParsedOutput, Record};
pub use utils::error::{ImportError, Result};
