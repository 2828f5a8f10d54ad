//! StartupDeck — typed Rust client SDK for the StartupDeck idea-analysis
//! platform.
//!
//! This crate re-exports the SDK sub-crates for convenient single-import
//! usage. Enable features to control which modules are available.
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `default` | `client` plus every capability endpoint group |
//! | `client` | `ApiClient`, backends, `RetryPolicy`, `ResponseCache`, `RateLimiter` |
//! | `auth` | Identity-service consumer (password, magic link, OAuth) |
//! | `ideas` | Idea analysis endpoints |
//! | `features` | Feature generation endpoints |
//! | `market` | Market mapping endpoints |
//! | `tech` | Tech stack endpoints |
//! | `pitch` | Pitch deck endpoints |
//! | `analytics` | Analytics endpoints |
//! | `assets` | User asset storage |
//! | `contact` | Contact-form relay |
//! | `full` | Everything |
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use startupdeck::client::ApiClient;
//! use startupdeck::core::{AnonymousSession, ApiConfig, Environment};
//! use startupdeck::ideas::{AnalyzeIdeaRequest, IdeasApi};
//!
//! let config = ApiConfig::new(Environment::detect());
//! let client = Arc::new(ApiClient::from_config(config, Arc::new(AnonymousSession))?);
//! let ideas = IdeasApi::new(client);
//! ```

/// Core types: `ApiResponse`, `DeckError`, `ApiConfig`, `SessionProvider`.
/// Always available.
pub use startupdeck_core as core;

/// `ApiClient`, transport backends, and the retry/cache/rate-limit utilities.
#[cfg(feature = "client")]
pub use startupdeck_client as client;

/// Identity-service consumer.
#[cfg(feature = "auth")]
pub use startupdeck_auth as auth;

/// Idea analysis endpoints.
#[cfg(feature = "ideas")]
pub use startupdeck_ideas as ideas;

/// Feature generation endpoints.
#[cfg(feature = "features")]
pub use startupdeck_features as features;

/// Market mapping endpoints.
#[cfg(feature = "market")]
pub use startupdeck_market as market;

/// Tech stack endpoints.
#[cfg(feature = "tech")]
pub use startupdeck_tech as tech;

/// Pitch deck endpoints.
#[cfg(feature = "pitch")]
pub use startupdeck_pitch as pitch;

/// Analytics endpoints.
#[cfg(feature = "analytics")]
pub use startupdeck_analytics as analytics;

/// User asset storage.
#[cfg(feature = "assets")]
pub use startupdeck_assets as assets;

/// Contact-form relay.
#[cfg(feature = "contact")]
pub use startupdeck_contact as contact;
