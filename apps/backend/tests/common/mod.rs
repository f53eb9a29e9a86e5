#![allow(dead_code)]

// tests/common/mod.rs
pub mod proptest_prelude;

// Logging is auto-installed for every test binary that includes `mod common;`
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}
