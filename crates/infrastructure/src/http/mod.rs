//! HTTP transport adapter
//!
//! Implements the `HttpTransport` port with reqwest.

mod form;
mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;
