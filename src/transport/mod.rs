//! HTTP transport shared by the model and speech clients.

mod http;

pub use http::{read_body, HttpTransport};
