//! Property-based tests for authenticated push URLs.
//!
//! These tests use proptest to generate repository URLs and tokens and
//! verify that the token lands in the authority exactly once.
