//! Typo dictionary, allow-list, and the checker combining them.
//!
//! Both tables are loaded once, before any lookup, and never change
//! afterwards.

mod allowlist;
mod checker;
mod typos;


// Re-export public API
pub use allowlist::AllowList;
pub use checker::{Checker, Verdict};
pub use typos::TypoDictionary;
