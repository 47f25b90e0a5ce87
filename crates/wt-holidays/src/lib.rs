//! # wt-holidays
//!
//! Where holiday lists come from and how they are cached.
//!
//! - [`source`] — the [`HolidaySource`] trait plus file and static sources
//! - [`colombia`] — rule-based Colombian public holidays (Emiliani law)
//! - [`fallback`] — the list substituted when a source fails
//! - [`provider`] — a once-initialised, immutable holiday snapshot

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Colombian holiday rules.
pub mod colombia;

/// Fallback holiday list.
pub mod fallback;

/// `HolidayProvider` — the cached snapshot.
pub mod provider;

/// `HolidaySource` and its implementations.
pub mod source;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use fallback::fallback_holidays;
pub use provider::{HolidayOrigin, HolidayProvider, HolidaySnapshot};
pub use source::{HolidaySource, JsonFileSource, StaticSource};
