pub mod dedup;
pub mod etl;
pub mod extract;
pub mod sql;
pub mod summary;

pub use crate::domain::model::{ParsedOutput, Record, SourceFile, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
