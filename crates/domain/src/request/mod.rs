//! Request types
//!
//! Everything the matcher needs to know about one outgoing request.

mod header;
mod method;
mod record;

pub use header::{Header, Headers};
pub use method::HttpMethod;
pub use record::RequestRecord;
