use crate::core::config::BondingConfig;
use crate::core::error::MoleculeError;
use crate::core::models::molecule::Molecule;
use nalgebra::Point3;
use toml::{Table, Value};

/// An untrusted, dynamically-typed description of a molecule.
///
/// Values arrive as TOML, so every field is type-checked before it reaches
/// [`Molecule::with_config`]:
///
/// ```toml
/// name = "water"
/// symbols = ["H", "O", "H"]
/// coordinates = [[2.0, 0.0, 0.0], [0.0, 0.0, 0.0], [-2.0, 0.0, 0.0]]
///
/// [bonding]
/// max_bond = 2.93
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeDefinition {
    pub name: String,
    pub symbols: Vec<String>,
    pub coordinates: Vec<Point3<f64>>,
    pub bonding: BondingConfig,
}

impl MoleculeDefinition {
    pub fn from_toml_str(content: &str) -> Result<Self, MoleculeError> {
        let table: Table = toml::from_str(content)?;

        let name = match required(&table, "name")? {
            Value::String(s) => s.clone(),
            other => return Err(type_mismatch("name", "string", other)),
        };

        let symbols = match required(&table, "symbols")? {
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.clone()),
                    other => Err(type_mismatch("symbols", "array of strings", other)),
                })
                .collect::<Result<Vec<_>, _>>()?,
            other => return Err(type_mismatch("symbols", "array of strings", other)),
        };

        let coordinates = match required(&table, "coordinates")? {
            Value::Array(rows) => rows
                .iter()
                .enumerate()
                .map(|(row, value)| parse_row(row, value))
                .collect::<Result<Vec<_>, _>>()?,
            other => return Err(type_mismatch("coordinates", "array of rows", other)),
        };

        let bonding = match table.get("bonding") {
            None => BondingConfig::default(),
            Some(value @ Value::Table(_)) => value.clone().try_into()?,
            Some(other) => return Err(type_mismatch("bonding", "table", other)),
        };

        Ok(Self {
            name,
            symbols,
            coordinates,
            bonding,
        })
    }

    pub fn into_molecule(self) -> Result<Molecule, MoleculeError> {
        Molecule::with_config(self.name, self.symbols, self.coordinates, self.bonding)
    }
}

fn required<'a>(table: &'a Table, field: &'static str) -> Result<&'a Value, MoleculeError> {
    table.get(field).ok_or(MoleculeError::MissingField(field))
}

fn type_mismatch(field: &'static str, expected: &'static str, found: &Value) -> MoleculeError {
    MoleculeError::InvalidType {
        field,
        expected,
        found: found.type_str(),
    }
}

fn parse_row(row: usize, value: &Value) -> Result<Point3<f64>, MoleculeError> {
    let Value::Array(components) = value else {
        return Err(MoleculeError::InvalidCoordinateRow {
            row,
            reason: format!("expected an array of 3 numbers, found {}", value.type_str()),
        });
    };
    if components.len() != 3 {
        return Err(MoleculeError::InvalidCoordinateRow {
            row,
            reason: format!("expected 3 components, found {}", components.len()),
        });
    }

    let mut xyz = [0.0; 3];
    for (slot, component) in xyz.iter_mut().zip(components) {
        *slot = match component {
            Value::Float(f) => *f,
            Value::Integer(i) => *i as f64,
            other => {
                return Err(MoleculeError::InvalidCoordinateRow {
                    row,
                    reason: format!("expected a number, found {}", other.type_str()),
                });
            }
        };
    }
    Ok(Point3::from(xyz))
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATER: &str = r#"
        name = "water"
        symbols = ["H", "O", "H"]
        coordinates = [[2, 0, 0], [0, 0, 0], [-2, 0, 0]]
    "#;

    #[test]
    fn from_toml_str_parses_integer_coordinates() {
        let definition = MoleculeDefinition::from_toml_str(WATER).unwrap();
        assert_eq!(definition.name, "water");
        assert_eq!(definition.symbols, vec!["H", "O", "H"]);
        assert_eq!(
            definition.coordinates,
            vec![
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(-2.0, 0.0, 0.0)
            ]
        );
        assert_eq!(definition.bonding, BondingConfig::default());
    }

    #[test]
    fn into_molecule_builds_bonds() {
        let water = MoleculeDefinition::from_toml_str(WATER)
            .unwrap()
            .into_molecule()
            .unwrap();
        assert_eq!(water.bonds().len(), 2);
    }

    #[test]
    fn non_string_name_fails_with_type_error() {
        let content = r#"
            name = 25
            symbols = ["H", "O", "H"]
            coordinates = [[0, 0, 0], [0, 0, 0], [0, 0, 0]]
        "#;
        let result = MoleculeDefinition::from_toml_str(content);
        assert!(matches!(
            result,
            Err(MoleculeError::InvalidType {
                field: "name",
                expected: "string",
                found: "integer"
            })
        ));
    }

    #[test]
    fn non_string_symbol_fails_with_type_error() {
        let content = r#"
            name = "water"
            symbols = ["H", 8, "H"]
            coordinates = [[0, 0, 0], [0, 0, 0], [0, 0, 0]]
        "#;
        assert!(matches!(
            MoleculeDefinition::from_toml_str(content),
            Err(MoleculeError::InvalidType {
                field: "symbols",
                ..
            })
        ));
    }

    #[test]
    fn missing_field_is_reported() {
        let content = r#"
            name = "water"
            symbols = ["H", "O", "H"]
        "#;
        assert!(matches!(
            MoleculeDefinition::from_toml_str(content),
            Err(MoleculeError::MissingField("coordinates"))
        ));
    }

    #[test]
    fn two_component_row_fails_with_shape_error() {
        let content = r#"
            name = "water"
            symbols = ["H", "O"]
            coordinates = [[0, 0, 0], [1.0, 2.0]]
        "#;
        assert!(matches!(
            MoleculeDefinition::from_toml_str(content),
            Err(MoleculeError::InvalidCoordinateRow { row: 1, .. })
        ));
    }

    #[test]
    fn non_numeric_component_fails() {
        let content = r#"
            name = "water"
            symbols = ["H"]
            coordinates = [[0, "x", 0]]
        "#;
        assert!(matches!(
            MoleculeDefinition::from_toml_str(content),
            Err(MoleculeError::InvalidCoordinateRow { row: 0, .. })
        ));
    }

    #[test]
    fn mismatched_counts_fail_when_building_molecule() {
        let content = r#"
            name = "water"
            symbols = ["H", "O", "H"]
            coordinates = [[0, 0, 0]]
        "#;
        let result = MoleculeDefinition::from_toml_str(content)
            .unwrap()
            .into_molecule();
        assert!(matches!(
            result,
            Err(MoleculeError::ShapeMismatch {
                symbols: 3,
                coordinates: 1
            })
        ));
    }

    #[test]
    fn bonding_table_overrides_cutoff() {
        let content = format!("{WATER}\n[bonding]\nmax_bond = 1.5\n");
        let definition = MoleculeDefinition::from_toml_str(&content).unwrap();
        assert_eq!(definition.bonding.max_bond, 1.5);
        assert!(definition.into_molecule().unwrap().bonds().is_empty());
    }

    #[test]
    fn malformed_toml_fails_with_parse_error() {
        assert!(matches!(
            MoleculeDefinition::from_toml_str("name = "),
            Err(MoleculeError::Toml { .. })
        ));
    }
}
