//! # Core Module
//!
//! Data structures and algorithms for molecular geometry analysis.
//!
//! - **Molecular Representation** ([`models`]) - Molecules, bonds and element data
//! - **Bond Perception** ([`topology`]) - Building bond lists from coordinates
//! - **Geometry** ([`utils`]) - Distances, angles and centers
//! - **Input** ([`io`]) - Type-checked molecule definitions from TOML
//! - **Configuration** ([`config`]) - The bonding distance window
//! - **Errors** ([`error`]) - Error types shared by all of the above

pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod topology;
pub mod utils;
