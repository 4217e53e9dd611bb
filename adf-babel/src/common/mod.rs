//! Format-agnostic conversion helpers shared by the transducer and writers.

pub mod color;
pub mod inline;
pub mod lists;
pub mod marks;
pub mod plain_text;
pub mod tables;
