//! Shared plumbing for the runnable demos.
pub mod common;
