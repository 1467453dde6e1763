use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// 依序執行 extract → transform → load，任一步失敗就中止，不會寫出 JSON
    pub async fn run(&self) -> Result<String> {
        tracing::debug!("Extracting records");
        let sources = self.pipeline.extract().await?;
        tracing::debug!("Extracted {} files", sources.len());

        tracing::debug!("Deduplicating and encoding records");
        let result = self.pipeline.transform(sources).await?;

        tracing::debug!("Writing {} unique records", result.records.len());
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
