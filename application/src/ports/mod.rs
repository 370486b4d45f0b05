//! Ports (interfaces) for the application layer
//!
//! These define how the application layer communicates with the outside
//! world. Implementations (adapters) live in the infrastructure layer.

pub mod analysis_store;
pub mod document_fetcher;
pub mod model_gateway;
pub mod transcript_source;

pub use analysis_store::AnalysisStore;
pub use document_fetcher::{DocumentFetcher, FetchError};
pub use model_gateway::{GatewayError, ModelGateway};
pub use transcript_source::{SourceError, TranscriptSource};
