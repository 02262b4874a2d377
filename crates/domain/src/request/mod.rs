//! Request descriptor types
//!
//! A request descriptor carries everything the gateway needs for one
//! exchange: a server-relative path, an HTTP method, header overrides,
//! and an optional body. Descriptors are built per call and never
//! persisted.

mod body;
mod header;
mod method;
mod spec;

pub use body::{FormField, RequestBody};
pub use header::{Header, Headers};
pub use method::HttpMethod;
pub use spec::ApiRequest;
