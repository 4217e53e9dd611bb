//! Output document model.
//!
//! This module defines the writer-agnostic block sequence produced by the
//! transducer and consumed by every output format.

pub mod nodes;
