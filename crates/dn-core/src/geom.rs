use core::fmt;
use core::ops::Mul;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dimensionality {
    #[serde(rename = "2d")]
    Planar,
    #[default]
    #[serde(rename = "3d")]
    Volumetric,
}

impl Dimensionality {
    pub fn components(self) -> usize {
        match self {
            Self::Planar => 2,
            Self::Volumetric => 3,
        }
    }

    pub fn from_components(n: usize) -> Option<Self> {
        match n {
            2 => Some(Self::Planar),
            3 => Some(Self::Volumetric),
            _ => None,
        }
    }
}

impl fmt::Display for Dimensionality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planar => write!(f, "2d"),
            Self::Volumetric => write!(f, "3d"),
        }
    }
}

/// A node position in output axis order (`x, y` or `x, y, z`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    xyz: [f64; 3],
    dims: Dimensionality,
}

impl Coord {
    pub fn planar(x: f64, y: f64) -> Self {
        Self {
            xyz: [x, y, 0.0],
            dims: Dimensionality::Planar,
        }
    }

    pub fn volumetric(x: f64, y: f64, z: f64) -> Self {
        Self {
            xyz: [x, y, z],
            dims: Dimensionality::Volumetric,
        }
    }

    /// Reorders a raw image coordinate (`z, y, x` or `y, x`) into output
    /// order. Returns `None` when the component count does not match `dims`.
    pub fn from_image_axes(raw: &[f64], dims: Dimensionality) -> Option<Self> {
        match (dims, raw) {
            (Dimensionality::Planar, &[y, x]) => Some(Self::planar(x, y)),
            (Dimensionality::Volumetric, &[z, y, x]) => Some(Self::volumetric(x, y, z)),
            _ => None,
        }
    }

    /// Builds a coordinate from components already in output order.
    pub fn from_components(components: &[f64]) -> Option<Self> {
        match *components {
            [x, y] => Some(Self::planar(x, y)),
            [x, y, z] => Some(Self::volumetric(x, y, z)),
            _ => None,
        }
    }

    pub fn dims(&self) -> Dimensionality {
        self.dims
    }

    pub fn x(&self) -> f64 {
        self.xyz[0]
    }

    pub fn y(&self) -> f64 {
        self.xyz[1]
    }

    pub fn z(&self) -> Option<f64> {
        match self.dims {
            Dimensionality::Planar => None,
            Dimensionality::Volumetric => Some(self.xyz[2]),
        }
    }

    pub fn components(&self) -> &[f64] {
        &self.xyz[..self.dims.components()]
    }
}

impl Mul<f64> for Coord {
    type Output = Coord;

    fn mul(self, rhs: f64) -> Self::Output {
        Coord {
            xyz: [self.xyz[0] * rhs, self.xyz[1] * rhs, self.xyz[2] * rhs],
            dims: self.dims,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Coord, Dimensionality};

    #[test]
    fn image_axes_are_reversed() {
        let c = Coord::from_image_axes(&[1.0, 2.0, 3.0], Dimensionality::Volumetric)
            .expect("three components");
        assert_eq!(c.components(), &[3.0, 2.0, 1.0]);
        assert_eq!(c.z(), Some(1.0));

        let p = Coord::from_image_axes(&[5.0, 7.0], Dimensionality::Planar).expect("two components");
        assert_eq!(p.components(), &[7.0, 5.0]);
        assert_eq!(p.z(), None);
    }

    #[test]
    fn wrong_component_count_is_rejected() {
        assert!(Coord::from_image_axes(&[1.0, 2.0], Dimensionality::Volumetric).is_none());
        assert!(Coord::from_image_axes(&[1.0, 2.0, 3.0], Dimensionality::Planar).is_none());
        assert!(Coord::from_components(&[1.0]).is_none());
    }

    #[test]
    fn scaling_keeps_dimensionality() {
        let c = Coord::volumetric(3.0, 2.0, 1.0) * 2.0;
        assert_eq!(c.components(), &[6.0, 4.0, 2.0]);
        assert_eq!(c.dims(), Dimensionality::Volumetric);

        let p = Coord::planar(1.5, -1.0) * 2.0;
        assert_eq!(p.components(), &[3.0, -2.0]);
    }

    #[test]
    fn dimensionality_round_trips_component_count() {
        for d in [Dimensionality::Planar, Dimensionality::Volumetric] {
            assert_eq!(Dimensionality::from_components(d.components()), Some(d));
        }
        assert_eq!(Dimensionality::from_components(4), None);
        assert_eq!(Dimensionality::Planar.to_string(), "2d");
    }
}
