//! One-shot HTTP wrappers over the backend API and the ranking service.

pub mod backend;
pub mod error;
pub mod ranking;
mod transport;

pub use backend::ApiClient;
pub use error::ClientError;
pub use ranking::{RankRequest, RankingClient, ServiceHealth};
