//! Tests for the provider module

#[cfg(test)]
mod environment_tests;
#[cfg(test)]
mod factory_tests;
#[cfg(test)]
mod models_tests;
