//! Core library for the fhevm-scaffold toolkit.
//!
//! Turns the FHEVM examples hub (Solidity contracts, their Hardhat tests and a
//! base Hardhat template) into standalone projects and documentation:
//!
//! - [`catalog`]: static table of examples and categories
//! - [`resolver`]: locates an example's sources and extracts its contract name
//! - [`materialize`]: generates a project for a single example
//! - [`category`]: generates one project for a whole category
//! - [`docs`]: renders Markdown pages and maintains the docs index
//!
//! The library never runs Hardhat or talks to a network; it only arranges
//! files on disk.

pub mod catalog;
pub mod category;
pub mod config;
pub mod docs;
pub mod error;
pub mod manifest;
pub mod materialize;
pub mod resolver;
pub mod template;
pub mod templates;
pub mod toolchain;

#[cfg(test)]
mod testutil;
