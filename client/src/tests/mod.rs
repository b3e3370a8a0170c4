mod auth_tests;
mod flow_tests;
