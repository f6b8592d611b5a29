use crate::error::QError;
use core::f64;
use nalgebra::Matrix3;

type Vec3D = [f64; 3];

/// A parallelepiped unit cell.
///
/// The rows of `cell_matrix` are the lattice vectors a, b and c. A zero
/// matrix stands for "no periodicity": the image search degenerates to the
/// plain Euclidean distance.
#[derive(Default, Debug, Clone)]
pub struct UnitCell {
    pub cell_matrix: Matrix3<f64>,
}

impl PartialEq for UnitCell {
    fn eq(&self, other: &Self) -> bool {
        self.cell_matrix
            .iter()
            .zip(other.cell_matrix.iter())
            .all(|(a, b)| (a - b).abs() < f64::EPSILON)
    }
}

impl UnitCell {
    const EPSILON: f64 = 1e-5;

    fn deg2rad(x: f64) -> f64 {
        x * f64::consts::PI / 180.0
    }

    fn cos_degree(theta: f64) -> f64 {
        Self::deg2rad(theta).cos()
    }

    fn sin_degree(theta: f64) -> f64 {
        Self::deg2rad(theta).sin()
    }

    pub fn new() -> Self {
        UnitCell {
            cell_matrix: Matrix3::zeros(),
        }
    }

    pub fn from_vectors(a: Vec3D, b: Vec3D, c: Vec3D) -> Self {
        UnitCell {
            cell_matrix: Matrix3::new(
                a[0], a[1], a[2], b[0], b[1], b[2], c[0], c[1], c[2],
            ),
        }
    }

    /// Parse nine whitespace-separated floats, row-major, as found in
    /// extended-XYZ `Lattice="..."` strings.
    pub fn parse(lattice: &str) -> Result<Self, QError> {
        let parts: Vec<&str> = lattice.split_whitespace().collect();
        if parts.len() != 9 {
            return Err(QError::GenericError(format!(
                "lattice requires exactly 9 components, got {}: {parts:?}",
                parts.len()
            )));
        }

        let mut cell_matrix = Matrix3::zeros();
        for (i, part) in parts.iter().enumerate() {
            cell_matrix[(i / 3, i % 3)] = part.parse::<f64>()?;
        }
        Ok(UnitCell { cell_matrix })
    }

    /// The lattice vectors a, b, c.
    pub fn vectors(&self) -> [Vec3D; 3] {
        let m = &self.cell_matrix;
        [
            [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
            [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
            [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
        ]
    }

    pub fn is_zero(&self) -> bool {
        self.cell_matrix.iter().all(|&x| x == 0.0)
    }

    fn check_lengths(lengths: &Vec3D) -> Result<(), QError> {
        if lengths.iter().any(|&x| x < 0.0) {
            return Err(QError::GenericError(
                "lengths cannot be negative".to_string(),
            ));
        };

        Ok(())
    }

    fn check_angles(angles: &Vec3D) -> Result<(), QError> {
        if angles.iter().any(|&x| x < 0.0) {
            return Err(QError::GenericError(
                "angles cannot be negative".to_string(),
            ));
        };

        if angles.iter().any(|&x| x.abs() < Self::EPSILON) {
            return Err(QError::GenericError(
                "angles cannot be (roughly) zero".to_string(),
            ));
        }

        if angles.iter().any(|&x| x >= 180.0) {
            return Err(QError::GenericError(
                "angles cannot be larger than or equal to 180 degrees".to_string(),
            ));
        }

        Ok(())
    }

    /// Build the cell from crystallographic lengths a, b, c and angles
    /// alpha, beta, gamma (degrees). Angles within 1e-3 of 90 degrees are
    /// snapped to exactly 90.
    pub fn from_lengths_angles(lengths: Vec3D, mut angles: Vec3D) -> Result<Self, QError> {
        Self::check_lengths(&lengths)?;
        Self::check_angles(&angles)?;

        if angles.iter().all(|&x| (x - 90.0).abs() < 1e-3) {
            angles.iter_mut().for_each(|x| *x = 90.0);
        }
        let mut cell_matrix: Matrix3<f64> = Matrix3::zeros();
        cell_matrix[(0, 0)] = lengths[0];

        cell_matrix[(1, 0)] = Self::cos_degree(angles[2]) * lengths[1];
        cell_matrix[(1, 1)] = Self::sin_degree(angles[2]) * lengths[1];

        cell_matrix[(2, 0)] = Self::cos_degree(angles[1]);
        cell_matrix[(2, 1)] = (Self::cos_degree(angles[0])
            - Self::cos_degree(angles[1]) * Self::cos_degree(angles[2]))
            / Self::sin_degree(angles[2]);
        cell_matrix[(2, 2)] = (1.0
            - cell_matrix[(2, 0)] * cell_matrix[(2, 0)]
            - cell_matrix[(2, 1)] * cell_matrix[(2, 1)])
            .sqrt();
        cell_matrix[(2, 0)] *= lengths[2];
        cell_matrix[(2, 1)] *= lengths[2];
        cell_matrix[(2, 2)] *= lengths[2];

        Ok(UnitCell { cell_matrix })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Matrix3;

    #[test]
    fn test_unit_cell_new() {
        let cell = UnitCell::new();
        assert_eq!(cell.cell_matrix, Matrix3::zeros());
        assert!(cell.is_zero());
    }

    #[test]
    fn test_unit_cell_parse() {
        let lattice = "1.0 2.0 3.0 4.0 5.0 6.0 7.0 8.0 9.0";
        let cell = UnitCell::parse(lattice).unwrap();

        let expected = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(cell.cell_matrix, expected);
        assert_eq!(cell.vectors()[1], [4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_unit_cell_parse_invalid() {
        assert!(UnitCell::parse("1.0 2.0 3.0").is_err());
        assert!(UnitCell::parse("1 2 3 4 5 six 7 8 9").is_err());
    }

    #[test]
    fn test_from_vectors() {
        let cell = UnitCell::from_vectors([1.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 3.0]);
        assert_eq!(
            cell.vectors(),
            [[1.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 3.0]]
        );
        assert!(!cell.is_zero());
    }

    #[test]
    fn test_check_lengths_valid() {
        let lengths = [1.0, 2.0, 3.0];
        assert!(UnitCell::check_lengths(&lengths).is_ok());
    }

    #[test]
    #[should_panic(expected = "lengths cannot be negative")]
    fn test_check_lengths_invalid() {
        let lengths = [-1.0, -2.0, -3.0];
        UnitCell::check_lengths(&lengths).unwrap();
    }

    #[test]
    fn test_check_angles_valid() {
        let angles = [90.0, 90.0, 90.0];
        assert!(UnitCell::check_angles(&angles).is_ok());
    }

    #[test]
    fn from_lengths_angles() {
        let expected = UnitCell::from_lengths_angles(
            [8.43116035, 14.50510613, 15.60911468],
            [73.31699212, 85.70200582, 89.37501529],
        )
        .unwrap();
        let mut true_cell = UnitCell::new();
        true_cell.cell_matrix[(0, 0)] = 8.43116035;
        true_cell.cell_matrix[(1, 0)] = 0.158219155128;
        true_cell.cell_matrix[(1, 1)] = 14.5042431863;
        true_cell.cell_matrix[(2, 0)] = 1.16980663624;
        true_cell.cell_matrix[(2, 1)] = 4.4685149855;
        true_cell.cell_matrix[(2, 2)] = 14.9100096405;
        let diff = expected.cell_matrix - true_cell.cell_matrix;
        assert!((diff).iter().all(|&x| x.abs() < 1e-6), "diff: {diff}");
    }

    #[test]
    #[should_panic(expected = "angles cannot be negative")]
    fn test_check_angles_invalid_negative() {
        let angles = [-90.0, -90.0, -90.0];
        UnitCell::check_angles(&angles).unwrap();
    }

    #[test]
    #[should_panic(expected = "angles cannot be (roughly) zero")]
    fn test_check_angles_invalid_zero() {
        let angles = [0.0, 0.0, 0.0];
        UnitCell::check_angles(&angles).unwrap();
    }

    #[test]
    #[should_panic(expected = "angles cannot be larger than or equal to 180 degrees")]
    fn test_check_angles_invalid_180() {
        let angles = [180.0, 180.0, 180.0];
        UnitCell::check_angles(&angles).unwrap();
    }

    #[test]
    #[should_panic(expected = "lengths cannot be negative")]
    fn test_from_lengths_angles_invalid() {
        let lengths = [-10.0, 20.0, 30.0];
        let angles = [90.0, 90.0, 90.0];
        UnitCell::from_lengths_angles(lengths, angles).unwrap();
    }
}
