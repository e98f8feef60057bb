//! Geodesic distance measurement against a line's stations.

use crate::line::{Line, Station};
use geo::{algorithm::GeodesicDistance, geometry::Point};

/// Kilometers between two points on the WGS84 ellipsoid.
pub fn geodesic_km(a: Point<f64>, b: Point<f64>) -> f64 {
    a.geodesic_distance(&b) / 1000.0
}

/// The station minimizing geodesic distance to some candidate point.
#[derive(Debug, Clone, PartialEq)]
pub struct Nearest<'a> {
    pub station: &'a Station,
    pub index: usize,
    pub distance_km: f64,
}

impl Line {
    /// Returns the station nearest to `point`.
    ///
    /// Equidistant stations resolve to the first in line order.
    pub fn nearest(&self, point: Point<f64>) -> Nearest<'_> {
        let stations = self.stations();
        let mut best = Nearest {
            station: &stations[0],
            index: 0,
            distance_km: geodesic_km(point, stations[0].point()),
        };
        for (index, station) in stations.iter().enumerate().skip(1) {
            let distance_km = geodesic_km(point, station.point());
            if distance_km < best.distance_km {
                best = Nearest {
                    station,
                    index,
                    distance_km,
                };
            }
        }
        best
    }

    /// Geodesic distance from the line's first station to `station`,
    /// in kilometers.
    ///
    /// Straight-line from the origin, not cumulative track length
    /// over intermediate stations.
    pub fn along_km(&self, station: &Station) -> f64 {
        geodesic_km(self.origin().point(), station.point())
    }
}

/// Measures each candidate's minimum geodesic distance to any station
/// of `line`, one entry per candidate.
pub fn measure_distances<'a>(line: &'a Line, candidates: &[Point<f64>]) -> Vec<Nearest<'a>> {
    candidates.iter().map(|point| line.nearest(*point)).collect()
}

#[cfg(test)]
mod tests {
    use super::{geodesic_km, measure_distances};
    use crate::line::{Line, Station};
    use approx::assert_relative_eq;
    use geo::geometry::Point;

    fn station(name: &str, latitude: f64, longitude: f64) -> Station {
        Station {
            station: name.to_string(),
            latitude,
            longitude,
        }
    }

    fn labrador_line() -> Line {
        Line::from_stations(
            "labsea",
            vec![
                station("LS_01", 60.0, -50.0),
                station("LS_02", 61.0, -49.0),
                station("LS_03", 62.0, -48.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_geodesic_km_equator_degree() {
        // One degree of longitude on the equator.
        let d = geodesic_km(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        assert_relative_eq!(d, 111.319, max_relative = 1e-3);
    }

    #[test]
    fn test_geodesic_km_zero() {
        let p = Point::new(-50.0, 60.0);
        assert!(geodesic_km(p, p).abs() < 1e-9);
    }

    #[test]
    fn test_nearest_tracks_minimum() {
        let line = labrador_line();
        let candidate = Point::new(-50.05, 60.0);

        let nearest = line.nearest(candidate);
        assert_eq!(nearest.index, 0);
        assert_eq!(nearest.station.station, "LS_01");
        // 0.05 degrees of longitude at 60N is roughly 2.8 km.
        assert!(nearest.distance_km < 10.0);
        assert_relative_eq!(nearest.distance_km, 2.79, max_relative = 1e-2);

        // The matched station is the along-line origin.
        assert!(line.along_km(nearest.station).abs() < 1e-9);
    }

    #[test]
    fn test_nearest_tie_keeps_first() {
        let line = Line::from_stations(
            "tie",
            vec![station("N", 1.0, -50.0), station("S", -1.0, -50.0)],
        )
        .unwrap();

        // Equidistant from both stations by symmetry about the equator.
        let nearest = line.nearest(Point::new(-50.0, 0.0));
        assert_eq!(nearest.index, 0);
        assert_eq!(nearest.station.station, "N");
    }

    #[test]
    fn test_measure_distances_per_candidate() {
        let line = labrador_line();
        let candidates = vec![
            Point::new(-50.05, 60.0),
            Point::new(-48.99, 61.01),
            Point::new(0.0, 0.0),
        ];

        let measured = measure_distances(&line, &candidates);
        assert_eq!(measured.len(), candidates.len());
        assert_eq!(measured[0].index, 0);
        assert_eq!(measured[1].index, 1);
        // A profile at the null island is thousands of km from the
        // Labrador Sea.
        assert!(measured[2].distance_km > 5_000.0);
    }

    #[test]
    fn test_along_km_increases_from_origin() {
        let line = labrador_line();
        let stations = line.stations();
        assert!(line.along_km(&stations[0]).abs() < 1e-9);
        let to_second = line.along_km(&stations[1]);
        let to_third = line.along_km(&stations[2]);
        assert!(to_second > 100.0);
        assert!(to_third > to_second);
    }
}
