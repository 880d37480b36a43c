//! # dsg-core
//!
//! Core business logic for the discharge summary generator:
//! - sled-backed single-table persistence of discharge summaries
//! - prompt building and the completion-provider client
//! - the [`DischargeService`] composing generation and persistence
//!
//! **No API concerns**: HTTP routing, status codes, and request parsing
//! belong in `dsg-api-rest`.

pub mod config;
pub mod error;
pub mod model;
pub mod prompt;
pub mod seed;
pub mod service;
pub mod store;

pub use config::{CoreConfig, ProviderConfig};
pub use error::{DischargeError, DischargeResult};
pub use model::{CompletionRequest, OpenAiChatModel, SummaryModel};
pub use service::DischargeService;
pub use store::DischargeStore;
