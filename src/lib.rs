//! Workspace-level integration tests for picalc.
//!
//! This package exists to host the golden-file tests in `tests/` and their
//! shared testdata; it exports nothing.
