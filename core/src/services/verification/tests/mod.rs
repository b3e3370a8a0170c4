//! Tests for the verification orchestrator

#[cfg(test)]
mod service_tests;
