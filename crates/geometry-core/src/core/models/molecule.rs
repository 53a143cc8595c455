use super::element::atomic_mass;
use super::topology::Bond;
use crate::core::config::BondingConfig;
use crate::core::error::MoleculeError;
use crate::core::topology::bonding::build_bond_list;
use crate::core::utils::geometry::{
    AngleUnit, calculate_angle, calculate_distance, calculate_weighted_center,
};
use nalgebra::Point3;
use std::fmt;
use tracing::debug;

/// A validated, non-empty molecule name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoleculeName(String);

impl MoleculeName {
    pub fn new(name: impl Into<String>) -> Result<Self, MoleculeError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MoleculeError::InvalidName(
                "name must contain at least one non-whitespace character".to_string(),
            ));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for MoleculeName {
    type Error = MoleculeError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for MoleculeName {
    type Error = MoleculeError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for MoleculeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named set of atoms with coordinates and the bonds perceived from them.
///
/// The bond list is derived state: it is rebuilt before any method that
/// changes coordinates or the bonding configuration returns, so callers never
/// observe bonds that disagree with the current geometry. The atom set is
/// fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    name: MoleculeName,
    symbols: Vec<String>,
    coordinates: Vec<Point3<f64>>,
    config: BondingConfig,
    bonds: Vec<Bond>,
}

impl Molecule {
    /// Creates a molecule using the default bonding window.
    ///
    /// # Errors
    ///
    /// Returns [`MoleculeError::InvalidName`] for a blank name,
    /// [`MoleculeError::InvalidSymbol`] for a blank element symbol and
    /// [`MoleculeError::ShapeMismatch`] if the symbol and coordinate counts
    /// differ.
    ///
    /// Blank names and symbols are rejected deliberately, even though only the
    /// name's type is strictly required: an empty name or symbol cannot be
    /// reported or looked up meaningfully later.
    pub fn new<N>(
        name: N,
        symbols: Vec<String>,
        coordinates: Vec<Point3<f64>>,
    ) -> Result<Self, MoleculeError>
    where
        N: TryInto<MoleculeName>,
        MoleculeError: From<N::Error>,
    {
        Self::with_config(name, symbols, coordinates, BondingConfig::default())
    }

    /// Creates a molecule whose bonds are perceived with `config`.
    pub fn with_config<N>(
        name: N,
        symbols: Vec<String>,
        coordinates: Vec<Point3<f64>>,
        config: BondingConfig,
    ) -> Result<Self, MoleculeError>
    where
        N: TryInto<MoleculeName>,
        MoleculeError: From<N::Error>,
    {
        let name: MoleculeName = name.try_into()?;
        config.validate()?;
        if let Some(index) = symbols.iter().position(|s| s.trim().is_empty()) {
            return Err(MoleculeError::InvalidSymbol {
                index,
                reason: "element symbol must not be empty".to_string(),
            });
        }
        check_shape(symbols.len(), coordinates.len())?;

        let bonds = build_bond_list(&coordinates, &config);
        Ok(Self {
            name,
            symbols,
            coordinates,
            config,
            bonds,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn coordinates(&self) -> &[Point3<f64>] {
        &self.coordinates
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn config(&self) -> &BondingConfig {
        &self.config
    }

    pub fn num_atoms(&self) -> usize {
        self.symbols.len()
    }

    /// Replaces the coordinate matrix and rebuilds the bond list.
    ///
    /// # Errors
    ///
    /// Returns [`MoleculeError::ShapeMismatch`] if the new matrix does not have
    /// one row per atom; the molecule is left unchanged in that case.
    pub fn set_coordinates(&mut self, coordinates: Vec<Point3<f64>>) -> Result<(), MoleculeError> {
        check_shape(self.symbols.len(), coordinates.len())?;
        self.coordinates = coordinates;
        self.rebuild_bonds();
        Ok(())
    }

    /// Switches to a different bonding window and rebuilds the bond list.
    pub fn set_config(&mut self, config: BondingConfig) -> Result<(), MoleculeError> {
        config.validate()?;
        self.config = config;
        self.rebuild_bonds();
        Ok(())
    }

    fn rebuild_bonds(&mut self) {
        self.bonds = build_bond_list(&self.coordinates, &self.config);
        debug!(
            molecule = self.name.as_str(),
            bonds = self.bonds.len(),
            "Rebuilt bond list."
        );
    }

    fn position(&self, index: usize) -> Result<&Point3<f64>, MoleculeError> {
        self.coordinates
            .get(index)
            .ok_or(MoleculeError::AtomIndexOutOfRange {
                index,
                num_atoms: self.coordinates.len(),
            })
    }

    pub fn distance_between(&self, i: usize, j: usize) -> Result<f64, MoleculeError> {
        Ok(calculate_distance(self.position(i)?, self.position(j)?))
    }

    /// Angle at atom `j` formed with atoms `i` and `k`.
    pub fn angle_between(
        &self,
        i: usize,
        j: usize,
        k: usize,
        unit: AngleUnit,
    ) -> Result<f64, MoleculeError> {
        Ok(calculate_angle(
            self.position(i)?,
            self.position(j)?,
            self.position(k)?,
            unit,
        )?)
    }

    /// Indices of the atoms bonded to `atom`, in ascending order.
    pub fn neighbors(&self, atom: usize) -> Result<Vec<usize>, MoleculeError> {
        self.position(atom)?;
        let mut neighbors: Vec<usize> = self
            .bonds
            .iter()
            .filter(|b| b.contains(atom))
            .filter_map(|b| b.other(atom))
            .collect();
        neighbors.sort_unstable();
        Ok(neighbors)
    }

    fn atomic_masses(&self) -> Result<Vec<f64>, MoleculeError> {
        self.symbols
            .iter()
            .map(|s| atomic_mass(s).ok_or_else(|| MoleculeError::UnknownElement(s.clone())))
            .collect()
    }

    pub fn molecular_mass(&self) -> Result<f64, MoleculeError> {
        Ok(self.atomic_masses()?.iter().sum())
    }

    /// Mass-weighted center of the molecule, or `None` for an empty molecule.
    pub fn center_of_mass(&self) -> Result<Option<Point3<f64>>, MoleculeError> {
        let masses = self.atomic_masses()?;
        Ok(calculate_weighted_center(&self.coordinates, &masses))
    }
}

fn check_shape(symbols: usize, coordinates: usize) -> Result<(), MoleculeError> {
    if symbols != coordinates {
        return Err(MoleculeError::ShapeMismatch {
            symbols,
            coordinates,
        });
    }
    Ok(())
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "name: {}\nnumber of atoms: {}\nnumber of bonds: {}",
            self.name,
            self.num_atoms(),
            self.bonds.len()
        )
    }
}
