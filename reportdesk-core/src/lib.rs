//! # reportdesk-core
//!
//! Framework-agnostic state and data model behind the reportdesk web UI.
//!
//! Everything here is plain Rust: no DOM, no reactive runtime. The Leptos
//! components in `reportdesk-web` hold these values in signals and feed user
//! events through them, which keeps every interaction rule testable on the
//! host without a browser.
//!
//! ## Quick Start
//!
//! ```rust
//! use reportdesk_core::menu::{MenuEntry, MenuEvent, MenuState, ReportIntent};
//! use reportdesk_core::report::ReportItem;
//!
//! let item = ReportItem::new("churn", "Churn by cohort");
//!
//! let step = MenuState::Closed.on(MenuEvent::Trigger, item.tier());
//! assert_eq!(step.next, MenuState::Open);
//!
//! let step = step.next.on(MenuEvent::Select(MenuEntry::MoreInformation), item.tier());
//! assert_eq!(step.intent, Some(ReportIntent::Info));
//! assert_eq!(step.next, MenuState::Closed);
//! ```
//!
//! ## Architecture
//!
//! - [`report`] - report catalog records
//! - [`menu`] - dropdown state machine and the intents it emits
//! - [`outside`] - outside-click classification over an abstract subtree
//! - [`auth`] - login/registration forms and session payloads
//! - [`feedback`] - "Send a Suggestion" payloads
//! - [`onboarding`] - onboarding wizard steps
//! - [`usage`] - plan quota accounting for the upsell modal
//! - [`date_range`] - validated date ranges and presets
//! - [`config`] - runtime configuration
//! - [`error`] - error types shared by the above
//!
//! ---
//!
//! Developed by the Reportdesk Team (c)2025

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod auth;
pub mod config;
pub mod date_range;
pub mod error;
pub mod feedback;
pub mod menu;
pub mod onboarding;
pub mod outside;
pub mod report;
pub mod usage;

pub use config::AppConfig;
pub use error::{ApiError, ConfigError, FormError};
pub use menu::{MenuEntry, MenuEvent, MenuState, ReportIntent, Transition};
pub use report::{ReportItem, ReportTier};
