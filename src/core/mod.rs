//! # Core Application Logic
//!
//! AyurAssist's business logic. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (query+outcome)│
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • present() (view tree)│
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐           ┌──────────────┐
//!            │    TUI     │           │  Text report │
//!            │  Adapter   │           │  (one-shot)  │
//!            │ (ratatui)  │           │              │
//!            └────────────┘           └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`presenter`]: `present()`, outcome → `Screen` view tree
//! - [`config`]: layered settings

pub mod action;
pub mod config;
pub mod presenter;
pub mod state;
