//! Integration tests for metromap.
//!
//! These tests drive the session the way a UI would: raw events and
//! explicit edit operations in, rendered state out.

mod editing_workflow_tests;
