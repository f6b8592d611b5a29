use std::collections::HashMap;
use std::ops::{Index, IndexMut};

use crate::atom::Atom;
use crate::error::QError;
use crate::kind::AtomKind;
use crate::unit_cell::UnitCell;

/// A set of atoms together with the unit cell they live in.
#[derive(Debug, Default)]
pub struct Structure {
    pub unit_cell: UnitCell,
    pub atoms: Vec<Atom>,
}

impl Structure {
    pub fn new() -> Self {
        Structure {
            unit_cell: UnitCell::new(),
            atoms: vec![],
        }
    }

    pub fn size(&self) -> usize {
        self.atoms.len()
    }

    pub fn positions(&self) -> Vec<[f64; 3]> {
        self.atoms.iter().map(|a| [a.x, a.y, a.z]).collect()
    }

    pub fn add_atom(&mut self, atom: Atom) {
        self.atoms.push(atom)
    }

    /// Classify every atom against the full connectivity matrix, one row per
    /// atom. The row at index `i` corresponds to `self.atoms[i]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square over the atom count.
    pub fn classify_atoms(&mut self, matrix: &[Vec<f64>]) -> Result<(), QError> {
        if matrix.len() != self.atoms.len() {
            return Err(QError::ConnectivityMismatch {
                atoms: self.atoms.len(),
                row: matrix.len(),
            });
        }

        let peers = self.atoms.clone();
        for (atom, row) in self.atoms.iter_mut().zip(matrix) {
            atom.classify(&peers, row)?;
        }
        Ok(())
    }

    /// Group classified atoms by kind. The map values are atom indices;
    /// atoms that have not been classified yet are skipped.
    pub fn kind_groups(&self) -> HashMap<AtomKind, Vec<usize>> {
        let mut groups: HashMap<AtomKind, Vec<usize>> = HashMap::new();
        for (i, atom) in self.atoms.iter().enumerate() {
            if let Some(kind) = atom.kind() {
                groups.entry(kind.clone()).or_default().push(i);
            }
        }
        groups
    }
}

impl Index<usize> for Structure {
    type Output = Atom;

    fn index(&self, index: usize) -> &Self::Output {
        &self.atoms[index]
    }
}

impl IndexMut<usize> for Structure {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.atoms[index]
    }
}
