//! Model provider adapters

mod openai;

pub use openai::OpenAiGateway;
