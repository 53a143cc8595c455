use phf::phf_map;

/// Standard atomic weights in unified atomic mass units, keyed by canonical
/// element symbol.
static ATOMIC_MASSES: phf::Map<&'static str, f64> = phf_map! {
    "H" => 1.008,
    "He" => 4.0026,
    "Li" => 6.94,
    "Be" => 9.0122,
    "B" => 10.81,
    "C" => 12.011,
    "N" => 14.007,
    "O" => 15.999,
    "F" => 18.998,
    "Ne" => 20.180,
    "Na" => 22.990,
    "Mg" => 24.305,
    "Al" => 26.982,
    "Si" => 28.085,
    "P" => 30.974,
    "S" => 32.06,
    "Cl" => 35.45,
    "Ar" => 39.948,
    "K" => 39.098,
    "Ca" => 40.078,
    "Fe" => 55.845,
    "Cu" => 63.546,
    "Zn" => 65.38,
    "Br" => 79.904,
    "I" => 126.90,
};

/// Looks up the standard atomic weight of an element.
///
/// The lookup is case-sensitive on the canonical symbol (`"Cl"`, not `"CL"`).
pub fn atomic_mass(symbol: &str) -> Option<f64> {
    ATOMIC_MASSES.get(symbol).copied()
}
