//! Tests for the token cache
