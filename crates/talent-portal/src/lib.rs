//! Typed access to the talent portal backend and the GRPO ranking service.
//!
//! The crate exposes the shared record shapes in [`domain`], one-shot HTTP
//! wrappers in [`client`], and render-safe page loaders in [`loaders`].

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod loaders;
pub mod telemetry;

pub use client::{ApiClient, ClientError, RankRequest, RankingClient};
pub use config::{AppConfig, ServiceEndpoints};
pub use error::AppError;
