//! # Race Tracker: Session-Scoped Race Results Dashboard Core
//!
//! **Version**: 0.1.0
//!
//! Race Tracker holds the race results a user enters during one session and
//! derives everything the dashboard page draws from them: a position bar
//! chart, a distance box chart by age category, a sorted and colour-scaled
//! results table, and three summary metrics.
//!
//! ## Design Principles (Toyota Way Aligned)
//!
//! - **Poka-Yoke safety**: `RaceEntry` is validated on construction, so the
//!   store never holds an out-of-range distance or position
//! - **Muda elimination**: Append-only store, no indexes to keep in sync
//! - **Jidoka**: Views are pure functions of the store, recomputed per render
//!
//! ## Example Usage
//!
//! ```rust
//! use race_tracker::form::RaceForm;
//! use race_tracker::session::Session;
//!
//! let mut session = Session::new();
//! session.submit(RaceForm {
//!     race_date: Some("2024-05-01".to_string()),
//!     race_name: "Spring Sprint".to_string(),
//!     participant_name: "Bea".to_string(),
//!     age_category: "Teen (13-16)".to_string(),
//!     distance: 12.5,
//!     completion_time: "00:41:05".to_string(),
//!     position: 1,
//! })?;
//!
//! let page = session.render();
//! let view = page.view().expect("one entry was submitted");
//! assert_eq!(view.table.len(), 1);
//! # Ok::<(), race_tracker::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod entry;
pub mod error;
pub mod form;
pub mod session;
pub mod store;
pub mod view;

pub use entry::{AgeCategory, RaceEntry};
pub use error::{Error, Result};
pub use store::RecordStore;
