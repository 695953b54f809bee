//! Design tokens for theming
//!
//! Only color tokens are needed by Perch widgets; spacing and typography come
//! from the host.

mod color;

pub use color::*;
