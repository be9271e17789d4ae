//! Zodiac AI — birth-profile onboarding and horoscope service core.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod horoscope;
pub mod llm;
pub mod onboarding;
pub mod profile;
