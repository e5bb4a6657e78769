//! Helpers for CI-tuned test execution.

pub mod property_test_profile;
