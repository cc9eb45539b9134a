//! Media blobs and their persistent store
//!
//! Blobs are uploaded files kept inline-encoded in storage, with a lifecycle
//! fully independent of robot records: records reference blobs by id, and
//! deleting a record never deletes the blobs it referenced.

mod blob;
mod store;

pub use blob::MediaBlob;
pub use store::MediaStore;
