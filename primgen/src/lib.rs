//! Generates primitive device netlist templates and the device registry
//! that netlisters use to resolve primitive instances.
//!
//! The entry point is [`generate`], which renders one primitive file per
//! output format from a [`TechConfig`](config::TechConfig) and returns a
//! [`NetlistSetup`] describing the generated files and devices.

pub mod builtin;
pub mod config;
pub mod error;
pub mod format;
pub mod generate;
pub mod io;
pub mod registry;
pub mod setup;

pub(crate) mod log;
pub(crate) mod templates;

pub use setup::{generate, NetlistSetup, NETLIST_SETUP_FILE};
