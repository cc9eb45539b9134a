//! Robot records and their persistent store
//!
//! ## Schema Overview
//!
//! ```text
//! RobotRecord
//!   ├── Manufacturer          (flat optional fields)
//!   ├── Specification        (opaque JSON sub-blocks)
//!   ├── MediaBlock ──< MediaRef (URL or blob id, never inline data)
//!   └── RobotStats           (denormalized counters)
//! ```
//!
//! Records enter the store through a [`RobotDraft`] (create) and change
//! through a [`RobotPatch`] (partial update). Patches merge shallowly:
//! a supplied nested block replaces the stored block wholesale, so callers
//! must resend full nested blocks they wish to preserve.

mod blocks;
mod draft;
mod patch;
mod record;
mod store;

pub use blocks::{Manufacturer, MediaBlock, MediaRef, MediaSource, Specification};
pub use draft::RobotDraft;
pub use patch::RobotPatch;
pub use record::{RobotRecord, RobotStats, RobotStatus};
pub use store::RobotStore;
