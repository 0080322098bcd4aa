//! Narrative summary generation for projects and sites.
//!
//! Wraps a generative-text API behind the narrow [`InsightsProvider`]
//! trait so the application can swap in a stub for tests and a disabled
//! provider when no API key is configured. Failures never propagate past
//! this crate: [`summary`] converts every error into a fixed fallback
//! string, so a broken narrative call can never block a CRUD operation.

pub mod gemini;
pub mod provider;
pub mod summary;

pub use gemini::GeminiClient;
pub use provider::{DisabledProvider, InsightsError, InsightsProvider};
