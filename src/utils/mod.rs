//! A set of utilities to help with common use cases that are not required to fully use the
//! library.

pub mod token;
