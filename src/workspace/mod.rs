//! Workspace item payload for the projects app.
//!
//! The surrounding application shell persists the whole projects workspace as
//! one JSON document in a generic key/value item store, keyed by
//! [`APP_NAME`] and [`ITEM_KEY`]. This module defines that document and how it
//! maps onto the board catalog and project list.

mod snapshot;

pub use snapshot::{APP_NAME, ITEM_KEY, SnapshotError, WorkspaceSnapshot};
