//! Unit tests for the board context.

mod planning_tests;
