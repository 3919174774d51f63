//! 2-D city coordinates.

/// An immutable point in the plane.
///
/// Cities are compared by value only. Two cities with identical coordinates
/// are still distinct positions of the input list: the engine works on
/// indices into that list, never on coordinate equality.
///
/// # Examples
///
/// ```
/// use u_tsp::City;
///
/// let a = City::new(0.0, 0.0);
/// let b = City::from((3.0, 4.0));
/// assert!((a.distance(&b) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub x: f64,
    pub y: f64,
}

impl City {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &City) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl From<(f64, f64)> for City {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<City> for (f64, f64) {
    fn from(city: City) -> Self {
        (city.x, city.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_symmetric() {
        let a = City::new(1.0, 2.0);
        let b = City::new(-2.0, 6.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
        assert!((b.distance(&a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = City::new(7.5, -3.25);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn test_tuple_conversions() {
        let c: City = (10.0, 0.0).into();
        assert_eq!(c, City::new(10.0, 0.0));
        let t: (f64, f64) = c.into();
        assert_eq!(t, (10.0, 0.0));
    }
}
