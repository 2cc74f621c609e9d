//! Travel-log presentational crate.
//!
//! This crate contains the shared pieces of the travel-log UI used by the
//! web component: the `TravelEntry` record with its HTML renderer
//! (`entry`) and the markup escaping helper (`markup`). These modules are
//! intentionally minimal — no async, no I/O, no state — so the renderer
//! stays a pure function usable from any embedding.
//!
/// Travel entry record and fragment renderer
pub mod entry;
/// HTML escaping helper
pub mod markup;
