//! Utilities for working with ID3v2 integers

pub mod synchsafe;
