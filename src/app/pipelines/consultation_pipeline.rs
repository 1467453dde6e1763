use crate::core::dedup::Deduplicator;
use crate::core::extract::extract_records;
use crate::core::sql::{encode_records, insert_statements};
use crate::core::summary::{file_summary, sample_summary, saved_summary, totals_summary};
use crate::core::{ConfigProvider, ParsedOutput, Pipeline, SourceFile, Storage, TransformResult};
use crate::utils::error::Result;
use std::path::Path;

/// 讀取諮詢紀錄 CSV，去重後輸出 JSON（以及選擇性的 SQL INSERT 檔）
pub struct ConsultationPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> ConsultationPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn render_sql(&self, values: &[String]) -> String {
        let statements = insert_statements(
            self.config.table_name(),
            values,
            self.config.batch_size(),
        );
        tracing::debug!(
            "Rendered {} INSERT statements for {} rows",
            statements.len(),
            values.len()
        );

        let mut sql = statements.join("\n\n");
        if !sql.is_empty() {
            sql.push('\n');
        }
        sql
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ConsultationPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<SourceFile>> {
        let input_dir = self.config.input_dir();
        let names = self
            .storage
            .list_files(input_dir, self.config.file_pattern())
            .await?;

        if names.is_empty() {
            tracing::warn!(
                "No files matching '{}' found in {}",
                self.config.file_pattern(),
                input_dir
            );
        }

        // 檔案依名稱排序後逐一處理，確保去重結果可重現
        let mut sources = Vec::with_capacity(names.len());
        for name in names {
            let path = Path::new(input_dir).join(&name);
            let data = self.storage.read_file(&path.to_string_lossy()).await?;
            let records = extract_records(data.as_slice())?;
            println!("{}", file_summary(&name, records.len()));
            sources.push(SourceFile { name, records });
        }

        Ok(sources)
    }

    async fn transform(&self, sources: Vec<SourceFile>) -> Result<TransformResult> {
        let total_extracted: usize = sources.iter().map(|s| s.records.len()).sum();
        let mut deduplicator = Deduplicator::new();
        for source in sources {
            deduplicator.extend(source.records);
        }
        if deduplicator.duplicates() > 0 {
            tracing::debug!("Discarded {} duplicate records", deduplicator.duplicates());
        }

        let records = deduplicator.finish();
        println!("{}", totals_summary(total_extracted, records.len()));

        let sql_values = encode_records(&records);
        if let Some(first) = sql_values.first() {
            println!("{}", sample_summary(first));
        }

        Ok(TransformResult {
            records,
            sql_values,
            total_extracted,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let output_path = self.config.output_path();
        let output = ParsedOutput::new(result.records);
        let json = serde_json::to_string_pretty(&output)?;

        let sql_path = self.config.sql_output_path();
        if let Some(sql_path) = sql_path {
            let sql = self.render_sql(&result.sql_values);
            self.storage.write_file(sql_path, sql.as_bytes()).await?;
        }

        // JSON 寫入失敗時一併移除本次的 SQL 檔
        if let Err(e) = self.storage.write_file(output_path, json.as_bytes()).await {
            if let Some(sql_path) = sql_path {
                if let Err(cleanup) = self.storage.remove_file(sql_path).await {
                    tracing::warn!("Failed to remove {}: {}", sql_path, cleanup);
                }
            }
            return Err(e);
        }
        println!("{}", saved_summary(output_path));

        Ok(output_path.to_string())
    }
}
