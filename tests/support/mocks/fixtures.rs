// tests/support/mocks/fixtures.rs
use once_cell::sync::Lazy;

static MAX_TITLE: Lazy<String> = Lazy::new(|| "x".repeat(200));
static TOO_LONG_TITLE: Lazy<String> = Lazy::new(|| "x".repeat(201));
static MAX_BODY: Lazy<String> = Lazy::new(|| "y".repeat(1000));
static TOO_LONG_BODY: Lazy<String> = Lazy::new(|| "y".repeat(1001));

/// Title at exactly the 200 character limit.
pub fn max_title() -> String {
    MAX_TITLE.clone()
}

pub fn too_long_title() -> String {
    TOO_LONG_TITLE.clone()
}

/// Body at exactly the 1000 character limit.
pub fn max_body() -> String {
    MAX_BODY.clone()
}

pub fn too_long_body() -> String {
    TOO_LONG_BODY.clone()
}
