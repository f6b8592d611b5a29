// SPDX-License-Identifier: BSD-3-Clause
//
// See LICENSE at the project root for full text.

use crate::element;
use crate::error::QError;
use crate::kind::{AtomKind, Connectivity, Link};
use crate::unit_cell::UnitCell;
use log::warn;
use std::fmt;

/// An atom, or a point charge treated as one.
///
/// `connectivity` and `kind` stay `None` until [`Atom::classify`] has been
/// called with a connectivity-matrix row; they are not part of equality.
#[derive(Debug, Clone)]
pub struct Atom {
    pub element: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub charge: f64,
    pub atomic_number: u32,
    connectivity: Option<Connectivity>,
    kind: Option<AtomKind>,
}

/// Result of the periodic image search: the minimal distance and the
/// coordinates of the winning image of the target point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestImage {
    pub distance: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Atom {
    fn default() -> Self {
        Atom {
            element: "H".to_string(),
            x: 0.0,
            y: 0.0,
            z: 0.0,
            charge: 0.0,
            atomic_number: 1,
            connectivity: None,
            kind: None,
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>6} {:10.6} {:10.6} {:10.6} {:10.6}",
            self.element, self.x, self.y, self.z, self.charge
        )
    }
}

impl PartialEq for Atom {
    /// Element symbols compare case-insensitively; the numeric fields compare
    /// exactly. Callers needing a tolerance must compare fields themselves.
    fn eq(&self, other: &Self) -> bool {
        self.element.eq_ignore_ascii_case(&other.element)
            && self.x == other.x
            && self.y == other.y
            && self.z == other.z
            && self.charge == other.charge
    }
}

fn parse_field(value: &str, name: &str) -> f64 {
    match value.parse::<f64>() {
        Ok(v) => v,
        Err(_) => {
            warn!("{name} field '{value}' cannot be cast to float, keeping 0.0");
            0.0
        }
    }
}

impl Atom {
    pub fn new(element: &str, x: f64, y: f64, z: f64, charge: f64) -> Self {
        Atom {
            element: element.to_string(),
            x,
            y,
            z,
            charge,
            ..Default::default()
        }
    }

    /// Build an atom from raw text fields. A field that does not parse as a
    /// float is reported through `log::warn!` and keeps its 0.0 default;
    /// construction itself never fails.
    pub fn from_fields(element: &str, x: &str, y: &str, z: &str, charge: &str) -> Self {
        Atom {
            element: element.to_string(),
            x: parse_field(x, "x"),
            y: parse_field(y, "y"),
            z: parse_field(z, "z"),
            charge: parse_field(charge, "charge"),
            ..Default::default()
        }
    }

    /// The atom as one line of an xyz coordinate file, without the charge.
    pub fn xyz_line(&self) -> String {
        format!(
            "{:>6} {:10.6} {:10.6} {:10.6}",
            self.element, self.x, self.y, self.z
        )
    }

    /// Straight-line distance from the atom to a point.
    pub fn distance_to(&self, x1: f64, y1: f64, z1: f64) -> f64 {
        ((self.x - x1).powi(2) + (self.y - y1).powi(2) + (self.z - z1).powi(2)).sqrt()
    }

    /// Shortest distance from the atom to any periodic image of a point.
    ///
    /// The search translates the point by every {+1, 0, -1} combination of
    /// the three lattice vectors (27 candidates) and keeps the first minimum.
    /// Only single-step images are considered, so the result holds for
    /// near-orthogonal or mildly skewed cells.
    pub fn distance_to_periodic(
        &self,
        x1: f64,
        y1: f64,
        z1: f64,
        cell: &UnitCell,
    ) -> ClosestImage {
        let [a, b, c] = cell.vectors();
        let null = [0.0; 3];

        let a_set = [a, null, [-a[0], -a[1], -a[2]]];
        let b_set = [b, null, [-b[0], -b[1], -b[2]]];
        let c_set = [c, null, [-c[0], -c[1], -c[2]]];

        let mut closest = ClosestImage {
            distance: f64::INFINITY,
            x: x1,
            y: y1,
            z: z1,
        };
        for ta in &a_set {
            for tb in &b_set {
                for tc in &c_set {
                    let x2 = x1 + ta[0] + tb[0] + tc[0];
                    let y2 = y1 + ta[1] + tb[1] + tc[1];
                    let z2 = z1 + ta[2] + tb[2] + tc[2];
                    let r = self.distance_to(x2, y2, z2);
                    if r < closest.distance {
                        closest = ClosestImage {
                            distance: r,
                            x: x2,
                            y: y2,
                            z: z2,
                        };
                    }
                }
            }
        }
        closest
    }

    /// Return a translated copy. The copy keeps the element and charge and
    /// starts with a fresh (unclassified) state.
    pub fn translated(&self, dx: f64, dy: f64, dz: f64) -> Atom {
        Atom::new(
            &self.element,
            self.x + dx,
            self.y + dy,
            self.z + dz,
            self.charge,
        )
    }

    /// Translate the atom in place.
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    /// `(valence, total)` electron counts for the atom's element. Elements
    /// outside the parameterized table yield `(0, 0)`.
    pub fn electron_counts(&self) -> (u32, u32) {
        match element::lookup(&self.element) {
            Some(data) => (data.valence_electrons, data.total_electrons),
            None => (0, 0),
        }
    }

    /// Set the element symbol from an atomic number. Unknown numbers leave
    /// the symbol unchanged.
    pub fn set_element_from_number(&mut self, num: u32) {
        if let Some(data) = element::by_atomic_number(num) {
            self.element = data.symbol.to_string();
        }
    }

    pub fn connectivity(&self) -> Option<&Connectivity> {
        self.connectivity.as_ref()
    }

    pub fn kind(&self) -> Option<&AtomKind> {
        self.kind.as_ref()
    }

    /// Classify the atom against its peers.
    ///
    /// `row` is this atom's row of the connectivity matrix over `peers`; a
    /// zero entry means "not bonded". Sets [`Atom::connectivity`] to the
    /// canonical neighbor multiset and [`Atom::kind`] to the resulting
    /// classification key.
    ///
    /// # Errors
    ///
    /// Returns an error if `row` and `peers` have different lengths.
    pub fn classify(&mut self, peers: &[Atom], row: &[f64]) -> Result<(), QError> {
        if row.len() != peers.len() {
            return Err(QError::ConnectivityMismatch {
                atoms: peers.len(),
                row: row.len(),
            });
        }

        let links: Vec<Link> = peers
            .iter()
            .zip(row)
            .filter(|(_, &order)| order != 0.0)
            .map(|(peer, &order)| Link::new(&peer.element, order))
            .collect();

        let connectivity = Connectivity::from_links(&links);
        self.kind = Some(AtomKind {
            element: self.element.clone(),
            connectivity: connectivity.clone(),
        });
        self.connectivity = Some(connectivity);
        Ok(())
    }
}
