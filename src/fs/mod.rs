//! Filesystem utilities for readmegen.
//!
//! The generated README is persisted through an atomic replace so a failed
//! write never leaves a truncated file behind.

pub mod atomic;

pub use atomic::atomic_write_file;
