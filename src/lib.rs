//! # rxgroups
//!
//! Group-aware match extraction and replacement on top of the
//! [`regex`](https://crates.io/crates/regex) crate.
//!
//! Capture groups are presented as uniform maps keyed by group identifier:
//! the declared name of a named group, or the 1-based position of an
//! unnamed one. The same group always resolves to the same key, whether it
//! is extracted from the first match, from every match, or handed to a
//! replacement function.
//!
//! ## Quick Start
//!
//! ```rust
//! use rxgroups::prelude::*;
//!
//! let pat = Pattern::new(r"(?P<greeting>\w+),\s*(?P<name>\w+)!").unwrap();
//!
//! let groups = pat.find_groups("hello, world!").into_groups().unwrap();
//! assert_eq!(groups.get("greeting"), Some("hello"));
//! assert_eq!(groups.get("name"), Some("world"));
//!
//! let out = pat.replace_all_groups_func(
//!     "hello, world! hi, cosmos!",
//!     Some(|m: &GroupMap<'_, '_>| format!("{}, {}.", &m["name"], &m["greeting"])),
//! );
//! assert_eq!(out, "world, hello. cosmos, hi.");
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`engine`] | Contract with the regex engine, spans |
//! | [`pattern`] | Compiled patterns and build options |
//! | [`group`] | Group identifiers and group maps |
//! | [`find`] | Whole-match text extraction |
//! | [`groups`] | Per-match group extraction |
//! | [`replace`] | Group-driven replacement |
//! | [`error`] | Compilation errors |

pub mod engine;
pub mod error;
pub mod find;
pub mod group;
pub mod groups;
pub mod pattern;
pub mod prelude;
pub mod replace;
