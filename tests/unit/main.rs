//! Unit tests for the OCR launcher.
//!
//! These tests use canned port implementations and a paused tokio clock;
//! they run fast and touch no real processes or sockets.

mod mocks;
