//! # TUI Components
//!
//! ## Stateless components (props only)
//!
//! - `TitleBar`: app name, service host, status
//! - `IntroPanel`: the "how it works" steps before the first query
//! - `BusyPanel` / `ErrorBanner`: pending and failed outcomes
//! - `SuggestionChips`: the "no match" screen
//! - `ConditionCardView`: one matched condition
//!
//! ## Stateful components (event-driven)
//!
//! - `InputBox`: symptom text entry
//! - `ResultList` + `ResultListState`: scrollable cards
//! - `SuggestionState`: keyboard selection over the chips
//!
//! Each file keeps its state type, events, rendering and tests together.
//! Components take their data as props, never by reaching into `App`.
//!
//! ```text
//! components/
//! ├── mod.rs
//! ├── title_bar.rs
//! ├── intro.rs
//! ├── status_panel.rs    (busy spinner, error banner)
//! ├── suggestions.rs
//! ├── condition_card.rs
//! ├── results.rs
//! └── input_box/
//! ```

pub mod condition_card;
pub mod input_box;
pub mod intro;
pub mod results;
pub mod status_panel;
pub mod suggestions;
mod title_bar;

pub use input_box::{InputBox, InputEvent};
pub use intro::IntroPanel;
pub use results::{ResultList, ResultListState};
pub use status_panel::{BusyPanel, ErrorBanner};
pub use suggestions::{SuggestionChips, SuggestionEvent, SuggestionState};
pub use title_bar::TitleBar;
