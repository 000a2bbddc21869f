#![deny(unsafe_code)]
//! Session resolution and viewer state for the brainstream gallery.
//!
//! This crate sits between the field-line engine in `brainstream-core`
//! and any concrete host. It owns the image-record data model, the
//! query-string session resolver, the pluggable [`SessionStore`]
//! backends, the stream/viewer view state, and (behind the `png`
//! feature) PNG snapshots of rendered surfaces.

pub mod error;
pub mod query;
pub mod record;
#[cfg(feature = "png")]
pub mod snapshot;
pub mod state;
pub mod store;
pub mod stream;
pub mod viewer;

pub use error::SessionError;
pub use query::session_id_from_query;
pub use record::{ImageRecord, SessionImageSet};
pub use state::{App, AppState};
pub use store::{DirStore, MockStore, SessionStore};
pub use stream::{stream_items, StreamItem};
pub use viewer::{Download, Viewer};
