//! Shellsound CLI library.
//!
//! This crate provides the command implementations behind the `shellsound`
//! binary: batch generation, catalog listing, single-sound inspection and
//! verification of previously generated files.

pub mod commands;
pub mod paths;
