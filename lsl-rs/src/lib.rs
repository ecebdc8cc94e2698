//! Front-end of an LSL/OSSL script compiler.
//!
//! [`compiler`] turns script source into an expression tree with resolved
//! literal values.  [`config`] and [`cli`] back the `lsltree` binary, which
//! prints that tree for inspection.

pub mod cli;
pub mod compiler;
pub mod config;
