//! Step definitions for building and checking raw requests
//!
//! This module contains step definitions for:
//! - Running the serializer
//! - Comparing the raw text, whole or line by line
//! - Checking rejection messages and error kinds

use crate::common::world::{unescape, RawlineWorld};
use cucumber::gherkin::Step;
use cucumber::{then, when};
use tracing::debug;

// === BUILD ===

#[when("the request is built")]
async fn when_request_built(world: &mut RawlineWorld) {
    world.build();
    debug!("Build result: {:?} / {:?}", world.raw_request, world.error);
}

#[when("the request is built twice")]
async fn when_request_built_twice(world: &mut RawlineWorld) {
    world.build();
    let first = world.raw_request().to_string();
    world.build();
    assert_eq!(world.raw_request(), first, "Second build differs from the first");
}

// === RAW TEXT ===

#[then(regex = r#"^the raw request is "(.*)"$"#)]
async fn then_raw_request_is(world: &mut RawlineWorld, expected: String) {
    assert_eq!(world.raw_request(), unescape(&expected));
}

/// Each table row is one line; the rows are joined with `\n`
#[then("the raw request has lines:")]
async fn then_raw_request_has_lines(world: &mut RawlineWorld, step: &Step) {
    let table = step.table.as_ref().expect("Step needs a table of lines");
    let expected = table
        .rows
        .iter()
        .map(|row| row.first().map(String::as_str).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq!(world.raw_request(), expected);
}

#[then(regex = r#"^the raw request ends with "(.*)"$"#)]
async fn then_raw_request_ends_with(world: &mut RawlineWorld, expected: String) {
    let expected = unescape(&expected);
    let raw = world.raw_request();
    assert!(raw.ends_with(&expected), "{raw:?} does not end with {expected:?}");
}

#[then(regex = r#"^line (\d+) of the raw request is "(.*)"$"#)]
async fn then_line_is(world: &mut RawlineWorld, number: usize, expected: String) {
    let line = world
        .raw_request()
        .split('\n')
        .nth(number - 1)
        .unwrap_or_else(|| panic!("Raw request has no line {number}"));
    assert_eq!(line, unescape(&expected));
}

#[then(regex = r#"^the raw request has no "([^"]*)" line$"#)]
async fn then_no_line_starting_with(world: &mut RawlineWorld, prefix: String) {
    let raw = world.raw_request();
    assert!(
        !raw.split('\n').any(|line| line.starts_with(&prefix)),
        "{raw:?} has a {prefix:?} line"
    );
}

// === ERRORS ===

#[then(regex = r#"^the request is rejected with "(.*)"$"#)]
async fn then_rejected_with(world: &mut RawlineWorld, expected: String) {
    assert_eq!(world.error().to_string(), unescape(&expected));
}

#[then(regex = r"^the error kind is (\w+)$")]
async fn then_error_kind(world: &mut RawlineWorld, kind: String) {
    assert_eq!(format!("{:?}", world.error().kind()), kind);
}

#[then("no raw request is produced")]
async fn then_no_raw_request(world: &mut RawlineWorld) {
    let _ = world.error();
    assert!(world.raw_request.is_none());
}
