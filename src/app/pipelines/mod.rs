pub mod consultation_pipeline;

pub use consultation_pipeline::ConsultationPipeline;
