//! Great-circle distance on a spherical Earth.
//!
//! Both points are projected onto the unit sphere, the straight-line chord
//! between them is measured, and the chord is converted back to an arc.

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// The fixed point every visitor's distance is measured from.
pub const REFERENCE_POINT: Coordinate = Coordinate::new(34.827619, 113.551425);

/// A position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Degrees north of the equator (negative is south).
    pub latitude: f64,
    /// Degrees east of Greenwich (negative is west).
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Cartesian point on the unit sphere.
    fn unit_vector(self) -> [f64; 3] {
        let lat = self.latitude.to_radians();
        let lon = self.longitude.to_radians();
        [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
    }
}

/// Great-circle distance between two points, rounded to whole kilometres.
///
/// Always in `[0, π·R]`. Non-finite input yields 0.
pub fn distance_km(a: Coordinate, b: Coordinate) -> u32 {
    let [ax, ay, az] = a.unit_vector();
    let [bx, by, bz] = b.unit_vector();

    let chord = ((ax - bx).powi(2) + (ay - by).powi(2) + (az - bz).powi(2)).sqrt();

    // Rounding can push the half-chord a hair past 1 for antipodal points.
    let half_chord = (chord / 2.0).clamp(0.0, 1.0);
    let arc = 2.0 * half_chord.asin() * EARTH_RADIUS_KM;

    // NaN saturates to 0.
    arc.round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_point_to_itself_is_zero() {
        assert_eq!(distance_km(REFERENCE_POINT, REFERENCE_POINT), 0);
    }

    #[test]
    fn quarter_turn_along_equator() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 90.0);
        // π/2 · 6371 = 10007.54
        assert_eq!(distance_km(a, b), 10008);
    }

    #[test]
    fn antipodes_are_half_a_circumference() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        // π · 6371 = 20015.09
        assert_eq!(distance_km(a, b), 20015);
    }

    #[test]
    fn pole_to_pole() {
        let north = Coordinate::new(90.0, 0.0);
        let south = Coordinate::new(-90.0, 0.0);
        assert_eq!(distance_km(north, south), 20015);
    }

    #[test]
    fn beijing_from_reference() {
        let beijing = Coordinate::new(39.9042, 116.4074);
        let d = distance_km(REFERENCE_POINT, beijing);
        assert!((600..640).contains(&d), "got {d}");
    }

    #[test]
    fn non_finite_input_is_zero() {
        let nan = Coordinate::new(f64::NAN, 10.0);
        assert_eq!(distance_km(REFERENCE_POINT, nan), 0);
    }
}
