// prelude.rs - Convenient re-exports.
//
//! # Prelude
//!
//! ```
//! use rxgroups::prelude::*;
//!
//! let pat = Pattern::new(r"\d+").unwrap();
//! assert_eq!(pat.find_all_matches("1 + 22"), Some(vec!["1", "22"]));
//! ```

pub use crate::engine::{Engine, MatchSpans, Span};
pub use crate::error::PatternError;
pub use crate::group::GroupMap;
pub use crate::groups::Extraction;
pub use crate::pattern::{Pattern, PatternBuilder, PatternFlags};
