// src/specs/mod.rs
//! # Page specs
//!
//! Each spec knows *where the ground truth lives* in one remote page and how
//! to read it. Specs are pure: they take markup and return records or a typed
//! error. They never fetch, never touch the clock, never write files.
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::collect → Fetch::fetch(url)
//!                       ↘ specs::fuel::extract(markup, "petrol")
//!       file::write_snapshot (outside of specs)
//! ```
//!
//! ## Conventions
//! - Locate data by the site's structural class markers, not by position.
//! - A bad cell skips its row; only an entirely empty page is an error.
//! - Keep selectors tolerant of whitespace and nested inline markup.
//!
//! Specs are tested offline against inline fixtures (see `tests/`).
pub mod fuel;
