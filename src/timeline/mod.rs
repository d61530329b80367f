//! Timeline bookkeeping: named frame windows that gate sub-templates.

pub mod sequence;
