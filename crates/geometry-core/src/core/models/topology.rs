use std::fmt;

/// A distance-perceived bond between two atoms of a molecule.
///
/// Bonds are unordered: the constructor stores the smaller index first, so
/// `Bond::new(2, 0, d)` and `Bond::new(0, 2, d)` are the same bond.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bond {
    pub atom1: usize, // Smaller atom index
    pub atom2: usize, // Larger atom index
    pub length: f64, // Interatomic distance at perception time
}

impl Bond {
    pub fn new(a: usize, b: usize, length: f64) -> Self {
        let (atom1, atom2) = if a <= b { (a, b) } else { (b, a) };
        Self {
            atom1,
            atom2,
            length,
        }
    }

    /// The canonical `(smaller, larger)` index pair.
    pub fn atoms(&self) -> (usize, usize) {
        (self.atom1, self.atom2)
    }

    pub fn contains(&self, atom: usize) -> bool {
        self.atom1 == atom || self.atom2 == atom
    }

    /// Returns the partner of `atom` in this bond, if `atom` takes part in it.
    pub fn other(&self, atom: usize) -> Option<usize> {
        if self.atom1 == atom {
            Some(self.atom2)
        } else if self.atom2 == atom {
            Some(self.atom1)
        } else {
            None
        }
    }
}

impl fmt::Display for Bond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} ({:.3})", self.atom1, self.atom2, self.length)
    }
}
