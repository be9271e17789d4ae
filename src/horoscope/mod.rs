//! Horoscope generation — prompt templates and the best-effort LLM service.

pub mod prompts;
pub mod service;

pub use service::{FALLBACK_MESSAGE, HoroscopeService};
