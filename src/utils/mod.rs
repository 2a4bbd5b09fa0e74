//! Shared utility functions.
//!
//! - `names`: filesystem-safe name derivation for folders and files

pub mod names;
