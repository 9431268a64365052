//! REST client for the SB GmbH backend.
//!
//! DESIGN
//! ======
//! [`api::ApiClient`] is constructed explicitly and handed to pages via
//! context; there is no ambient singleton. The loosely-shaped server payloads
//! (envelopes, nested token paths, mixed field spellings) are projected into
//! typed models by the pure functions in [`payload`], which keeps that logic
//! testable off the wasm target.

pub mod api;
pub mod error;
pub mod payload;
pub mod types;

pub use api::ApiClient;
pub use error::ApiError;
