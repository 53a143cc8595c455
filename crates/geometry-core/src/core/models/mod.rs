//! # Core Models Module
//!
//! Types representing a molecule and its derived connectivity.
//!
//! - [`molecule`] - The molecule container and its validated name
//! - [`topology`] - Distance-perceived bonds
//! - [`element`] - Standard atomic weights
//!
//! ```ignore
//! use geometry_analysis::core::models::molecule::Molecule;
//!
//! let water = Molecule::new("water", symbols, coordinates)?;
//! for bond in water.bonds() {
//!     println!("{bond}");
//! }
//! ```

pub mod element;
pub mod molecule;
pub mod topology;
