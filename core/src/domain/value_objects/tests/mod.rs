//! Tests for request value objects
