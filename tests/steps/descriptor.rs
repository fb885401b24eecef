//! Step definitions for assembling request descriptors
//!
//! This module contains step definitions for:
//! - Start line fields and the url
//! - Headers and header values
//! - Cookies
//! - Bodies and form parameters
//! - Whole descriptor documents

use crate::common::world::{unescape, RawlineWorld};
use cucumber::gherkin::Step;
use cucumber::given;
use rawline::{Body, CookiePair, FormDataParam, HeaderField, HeaderValue, RequestDescriptor};
use tracing::debug;

// === START LINE ===

#[given(regex = r#"^a "([^"]*)" request to "([^"]*)" over "([^"]*)" "([^"]*)"$"#)]
async fn given_request(
    world: &mut RawlineWorld,
    method: String,
    url: String,
    protocol: String,
    protocol_version: String,
) {
    debug!("Starting descriptor: {method} {protocol} {url} {protocol_version}");
    world.descriptor = RequestDescriptor::new(method, protocol, url, protocol_version);
}

#[given(regex = r#"^the url is "([^"]*)"$"#)]
async fn given_url(world: &mut RawlineWorld, url: String) {
    world.descriptor.url = url;
}

#[given(regex = r"^the (method|protocol|url|protocol version) is empty$")]
async fn given_empty_field(world: &mut RawlineWorld, field: String) {
    let descriptor = &mut world.descriptor;
    match field.as_str() {
        "method" => descriptor.method.clear(),
        "protocol" => descriptor.protocol.clear(),
        "url" => descriptor.url.clear(),
        "protocol version" => descriptor.protocol_version.clear(),
        other => panic!("Unknown start line field: {other}"),
    }
}

// === HEADERS ===

/// Values are written `v1, v2;params, ...` the way they appear on the wire
#[given(regex = r#"^the header "([^"]*)": "(.*)"$"#)]
async fn given_header(world: &mut RawlineWorld, name: String, values: String) {
    let mut header = HeaderField::new(name);
    header.values = values
        .split(", ")
        .map(|value| match value.split_once(';') {
            Some((value, params)) => HeaderValue::with_params(value, params),
            None => HeaderValue::new(value),
        })
        .collect();
    world.descriptor.headers.push(header);
}

#[given(regex = r#"^the header "([^"]*)" without values$"#)]
async fn given_header_without_values(world: &mut RawlineWorld, name: String) {
    world.descriptor.headers.push(HeaderField::new(name));
}

#[given("no headers")]
async fn given_no_headers(world: &mut RawlineWorld) {
    world.descriptor.headers.clear();
}

// === COOKIES ===

#[given(regex = r#"^the cookie "([^"]*)" = "([^"]*)"$"#)]
async fn given_cookie(world: &mut RawlineWorld, name: String, value: String) {
    let descriptor = std::mem::take(&mut world.descriptor);
    world.descriptor = descriptor.with_cookie(CookiePair::new(name, value));
}

#[given("an empty cookie list")]
async fn given_empty_cookie_list(world: &mut RawlineWorld) {
    world.descriptor.cookie = Some(Vec::new());
}

// === BODY ===

#[given(regex = r#"^a multipart body with boundary "([^"]*)"$"#)]
async fn given_multipart_body(world: &mut RawlineWorld, boundary: String) {
    world.descriptor.body = Some(Body::multipart(boundary, Vec::new()));
}

#[given("an urlencoded body")]
async fn given_urlencoded_body(world: &mut RawlineWorld) {
    world.descriptor.body = Some(Body::url_encoded(Vec::new()));
}

#[given(regex = r#"^the form parameter "([^"]*)" = "([^"]*)"$"#)]
async fn given_form_param(world: &mut RawlineWorld, name: String, value: String) {
    world.push_form_param(FormDataParam::new(name, value));
}

#[given(regex = r#"^a "([^"]*)" body "(.*)"$"#)]
async fn given_verbatim_body(world: &mut RawlineWorld, content_type: String, text: String) {
    let body = Body::other(content_type, unescape(&text)).expect("Verbatim body should be accepted");
    world.descriptor.body = Some(body);
}

#[given("a Content-Type header matching the body")]
async fn given_content_type_header(world: &mut RawlineWorld) {
    let header = world
        .descriptor
        .body
        .as_ref()
        .expect("A body must be set up first")
        .content_type_header();
    world.descriptor.headers.push(header);
}

// === DOCUMENTS ===

#[given("the request descriptor document:")]
async fn given_descriptor_document(world: &mut RawlineWorld, step: &Step) {
    let document = step
        .docstring
        .as_ref()
        .expect("Step needs a doc string with the JSON document");
    world.descriptor =
        RequestDescriptor::from_json(document).expect("Descriptor document should load");
}
