//! Step definitions for Cucumber tests
//!
//! Steps are organized by what they touch:
//! - `descriptor` - assembling the request descriptor (Given)
//! - `raw_request` - building it and checking text or error (When/Then)

pub mod descriptor;
pub mod raw_request;
