//! Template invocation contract and the builtin template registry.

pub mod registry;
pub mod spec;
