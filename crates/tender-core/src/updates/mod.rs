//! Update builder types for partial edits.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields are written; `Some("")` is a real value and clears the field to the
//! empty string, so "leave unchanged" and "set empty" stay distinguishable.

pub mod bid;
pub mod tender;
