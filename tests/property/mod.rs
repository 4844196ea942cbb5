//! Property-based tests

mod field_errors_proptest;
mod role_proptest;
