//! Request middleware.
//!
//! Purpose: request lifecycle concerns that apply to every route.

pub mod trace;

pub use trace::Trace;
