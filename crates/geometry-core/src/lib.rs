//! # Geometry Analysis
//!
//! A small library for structural analysis of molecules: interatomic distances,
//! bond angles and bond connectivity perceived from 3D coordinates.
//!
//! ## Overview
//!
//! Everything lives in the [`core`] layer:
//!
//! - **Geometry** ([`core::utils::geometry`]) - Pure distance, angle and weighted-center functions.
//! - **Bond perception** ([`core::topology::bonding`]) - Distance-window bond detection.
//! - **Molecules** ([`core::models::molecule`]) - A container that keeps its bond list
//!   consistent with its coordinates.
//! - **Configuration** ([`core::config`]) - The bonding window, built in code or loaded from TOML.
//!
//! ## Usage
//!
//! ```
//! use geometry_analysis::core::models::molecule::Molecule;
//! use nalgebra::Point3;
//!
//! let symbols = vec!["H".to_string(), "O".to_string(), "H".to_string()];
//! let coordinates = vec![
//!     Point3::new(2.0, 0.0, 0.0),
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(-2.0, 0.0, 0.0),
//! ];
//!
//! let mut water = Molecule::new("water", symbols, coordinates)?;
//! assert_eq!(water.bonds().len(), 2);
//!
//! water.set_coordinates(vec![
//!     Point3::new(5.0, 0.0, 0.0),
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(-2.0, 0.0, 0.0),
//! ])?;
//! assert_eq!(water.bonds().len(), 1);
//! # Ok::<(), geometry_analysis::core::error::MoleculeError>(())
//! ```

pub mod core;
