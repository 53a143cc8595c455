use crate::core::config::BondingConfig;
use crate::core::models::topology::Bond;
use crate::core::utils::geometry::calculate_distance;
use itertools::Itertools;
use nalgebra::Point3;
use tracing::{debug, instrument, trace};

/// Perceives bonds from interatomic distances.
///
/// Every unique pair `i < j` is visited in ascending order and kept when its
/// distance lies strictly inside the window described by `config`. The result
/// is deterministic and free of duplicates. The scan is quadratic in the atom
/// count, which is fine for small molecules.
#[instrument(skip_all, name = "build_bond_list")]
pub fn build_bond_list(coordinates: &[Point3<f64>], config: &BondingConfig) -> Vec<Bond> {
    let bonds: Vec<Bond> = coordinates
        .iter()
        .enumerate()
        .tuple_combinations()
        .filter_map(|((i, p1), (j, p2))| {
            let distance = calculate_distance(p1, p2);
            config.is_bonded(distance).then(|| {
                trace!(atom1 = i, atom2 = j, distance, "Perceived bond.");
                Bond::new(i, j, distance)
            })
        })
        .collect();

    debug!(
        atoms = coordinates.len(),
        bonds = bonds.len(),
        max_bond = config.max_bond,
        min_bond = config.min_bond,
        "Built bond list."
    );
    bonds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear_triatomic(left: f64, right: f64) -> Vec<Point3<f64>> {
        vec![
            Point3::new(left, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(right, 0.0, 0.0),
        ]
    }

    #[test]
    fn linear_triatomic_bonds_outer_atoms_to_center() {
        let bonds = build_bond_list(&linear_triatomic(2.0, -2.0), &BondingConfig::default());
        let pairs: Vec<_> = bonds.iter().map(Bond::atoms).collect();
        assert_eq!(pairs, vec![(0, 1), (1, 2)]);
        assert!(bonds.iter().all(|b| b.length == 2.0));
    }

    #[test]
    fn stretched_atom_drops_its_bond() {
        let bonds = build_bond_list(&linear_triatomic(5.0, -2.0), &BondingConfig::default());
        let pairs: Vec<_> = bonds.iter().map(Bond::atoms).collect();
        assert_eq!(pairs, vec![(1, 2)]);
    }

    #[test]
    fn empty_and_single_atom_inputs_have_no_bonds() {
        let config = BondingConfig::default();
        assert!(build_bond_list(&[], &config).is_empty());
        assert!(build_bond_list(&[Point3::origin()], &config).is_empty());
    }

    #[test]
    fn coincident_atoms_are_not_bonded() {
        let coords = vec![Point3::origin(), Point3::origin()];
        assert!(build_bond_list(&coords, &BondingConfig::default()).is_empty());
    }

    #[test]
    fn cutoff_is_configurable() {
        let coords = linear_triatomic(2.0, -1.2);
        let tight = BondingConfig::builder().max_bond(1.5).build().unwrap();
        let pairs: Vec<_> = build_bond_list(&coords, &tight)
            .iter()
            .map(Bond::atoms)
            .collect();
        assert_eq!(pairs, vec![(1, 2)]);

        let loose = BondingConfig::builder().max_bond(3.5).build().unwrap();
        assert_eq!(build_bond_list(&coords, &loose).len(), 3);
    }

    #[test]
    fn min_bond_excludes_too_short_pairs() {
        let coords = linear_triatomic(0.3, -1.0);
        let config = BondingConfig::builder().min_bond(0.5).build().unwrap();
        let pairs: Vec<_> = build_bond_list(&coords, &config)
            .iter()
            .map(Bond::atoms)
            .collect();
        assert_eq!(pairs, vec![(0, 2), (1, 2)]);
    }

    #[test]
    fn pairs_are_ordered_and_unique() {
        let coords = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ];
        let bonds = build_bond_list(&coords, &BondingConfig::default());
        let pairs: Vec<_> = bonds.iter().map(Bond::atoms).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        assert!(pairs.iter().all(|(i, j)| i < j));
    }

    #[test]
    fn identical_input_yields_identical_bonds() {
        let coords = linear_triatomic(1.1, -0.9);
        let config = BondingConfig::default();
        assert_eq!(
            build_bond_list(&coords, &config),
            build_bond_list(&coords, &config)
        );
    }
}
