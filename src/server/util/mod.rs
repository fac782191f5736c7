//! Small helpers shared by several layers.

pub mod jwt;
pub mod search;
