//! # rawline - Raw HTTP/1.x Request Text
//!
//! Turns a structured description of an HTTP/1.x request into the exact raw
//! request text, for raw-socket tools, logs and test fixtures.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  from_json / new  ┌───────────────────┐  build  ┌─────────────┐
//! │ JSON or code │──────────────────▶│ RequestDescriptor │────────▶│ raw request │
//! └──────────────┘                   └───────────────────┘    │    └─────────────┘
//!                                                             │
//!                                                             ▼ on failure
//!                                                       InvalidRequest
//! ```
//!
//! ## Example
//!
//! ```
//! use rawline::{build, HeaderField, RequestDescriptor};
//!
//! let descriptor = RequestDescriptor::new("GET", "HTTP", "app.com/features?p1=v1", "HTTP/1.1")
//!     .with_header(HeaderField::single("Connection", "keep-alive"));
//!
//! assert_eq!(
//!     build(&descriptor).unwrap(),
//!     "GET http://app.com/features?p1=v1 HTTP/1.1\nHOST: app.com\nConnection: keep-alive\n\n"
//! );
//! ```

pub mod cmd_args;
pub mod config;
pub mod content_type;
pub mod descriptor;
pub mod error;
pub mod serializer;
pub mod source;

// Re-export main types for easy access
pub use content_type::ContentType;
pub use descriptor::{Body, CookiePair, FormDataParam, HeaderField, HeaderValue, RequestDescriptor};
pub use error::{InvalidRequest, InvalidRequestKind, Result};
pub use serializer::{build, derive_host};
