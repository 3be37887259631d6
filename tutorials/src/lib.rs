//! Tutorial catalog registry.
//!
//! A catalog declares tutorials (ordered steps, each rendering an external
//! template) and optional diff-viewer bindings. The crate keeps a strict
//! separation:
//!
//! - **[`core`]**: Pure, deterministic logic (data model, invariants, the
//!   [`Registry`](core::registry::Registry)). No I/O.
//! - **[`io`]**: Config and catalog files.
//!
//! [`catalog`] holds the built-in catalog and the startup routine; [`load`]
//! wires config and catalog files into a ready registry for the CLI.

pub mod catalog;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod load;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
