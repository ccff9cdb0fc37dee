//! Integration tests for context menu dispatch
//!
//! Every test builds its own registry and surface; nothing is shared
//! between tests.


mod decorator_tests;
mod fallback_tests;
mod registry_tests;
mod scenario_tests;
