//! HTTP API

mod server;

pub use server::{ApiState, router, serve};
