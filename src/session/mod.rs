//! Session handling: persisted credential storage, role normalization, and
//! the session service provided to the view layer via context.
//!
//! DESIGN
//! ======
//! The session is an explicit service object ([`service::Session`]) backed by
//! an injected [`store::SessionStore`] port, so tests swap the browser's
//! `localStorage` for an in-memory double.

pub mod role;
pub mod service;
pub mod store;

pub use role::Role;
pub use service::{Session, SessionState, UserProfile};
pub use store::SessionStore;
