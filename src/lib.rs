//! # Robopedia: Embedded Robot-Catalog Store
//!
//! Robopedia is a small, synchronous, embedded store for robot encyclopedia
//! records. It reproduces the persistence layer of a catalog content app -
//! unique slug/id allocation, whole-store read-modify-write persistence,
//! independent media blob storage and first-run seeding - over a pluggable
//! key-value backend.
//!
//! ## Layers
//!
//! - [`storage`] - synchronous key-value backends (in-memory, file-per-key)
//! - [`robot`] - record types, drafts, patches and the record store
//! - [`media`] - inline-encoded blob store with independent lifecycle
//! - [`slug`] - deterministic slug derivation and collision resolution
//! - [`catalog`] - the CRUD façade composing all of the above
//!
//! ## Example
//!
//! ```rust
//! use robopedia::{Catalog, robot::RobotDraft};
//!
//! let catalog = Catalog::builder().seed(false).open()?;
//!
//! let spot = catalog.create(RobotDraft::new("Spot").category("quadruped"))?;
//! assert_eq!(spot.slug(), "spot");
//!
//! // Same name, next free slug.
//! let spot2 = catalog.create(RobotDraft::new("Spot"))?;
//! assert_eq!(spot2.slug(), "spot-1");
//! # Ok::<(), robopedia::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod catalog;
pub mod error;
pub mod media;
pub mod robot;
pub mod seed;
pub mod slug;
pub mod storage;

pub use catalog::{Catalog, CatalogBuilder};
pub use error::{Error, Result};
