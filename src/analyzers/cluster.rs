use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{MonitorError, Result};
use crate::utils::constants::{CLUSTER_MAX_ITERATIONS, CLUSTER_RESTARTS, CLUSTER_SEED};

/// Groups 1-D AQI readings into representative severity levels with Lloyd's
/// k-means.
///
/// Seeding is fixed, so identical input always produces identical centers.
/// Each restart draws fresh initial centers from the data; the restart with
/// the lowest inertia wins.
pub struct SeverityClusterer {
    restarts: usize,
    max_iterations: usize,
    seed: u64,
}

impl SeverityClusterer {
    pub fn new() -> Self {
        Self {
            restarts: CLUSTER_RESTARTS,
            max_iterations: CLUSTER_MAX_ITERATIONS,
            seed: CLUSTER_SEED,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Clusters the values into at most `k` severity groups and returns the
    /// centroids in ascending order.
    ///
    /// The effective cluster count is `min(k, values.len())`, never less
    /// than one. An empty input is the caller's error.
    pub fn cluster(&self, values: &[f64], k: usize) -> Result<Vec<f64>> {
        if values.is_empty() {
            return Err(MonitorError::InvalidInput(
                "cannot cluster an empty set of AQI values".to_string(),
            ));
        }

        let k = k.clamp(1, values.len());
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut best_centers: Option<Vec<f64>> = None;
        let mut best_inertia = f64::INFINITY;

        for _ in 0..self.restarts {
            let indices = rand::seq::index::sample(&mut rng, values.len(), k);
            let init: Vec<f64> = indices.iter().map(|i| values[i]).collect();

            let (centers, inertia) = self.lloyd(values, init);
            if inertia < best_inertia {
                best_inertia = inertia;
                best_centers = Some(centers);
            }
        }

        let mut centers = best_centers.unwrap_or_else(|| values.to_vec());
        centers.sort_by(|a, b| a.partial_cmp(b).expect("centroids are finite"));
        Ok(centers)
    }

    /// One full run of Lloyd's algorithm from the given initial centers.
    fn lloyd(&self, values: &[f64], mut centers: Vec<f64>) -> (Vec<f64>, f64) {
        let k = centers.len();
        let mut assignments = vec![0usize; values.len()];

        for _ in 0..self.max_iterations {
            for (i, v) in values.iter().enumerate() {
                assignments[i] = nearest_center(&centers, *v);
            }

            let mut sums = vec![0.0f64; k];
            let mut counts = vec![0usize; k];
            for (i, v) in values.iter().enumerate() {
                sums[assignments[i]] += v;
                counts[assignments[i]] += 1;
            }

            let mut moved = false;
            for c in 0..k {
                // An empty cluster keeps its previous center.
                if counts[c] == 0 {
                    continue;
                }
                let mean = sums[c] / counts[c] as f64;
                if (mean - centers[c]).abs() > 1e-9 {
                    centers[c] = mean;
                    moved = true;
                }
            }

            if !moved {
                break;
            }
        }

        let inertia = values
            .iter()
            .map(|v| {
                let c = centers[nearest_center(&centers, *v)];
                (v - c) * (v - c)
            })
            .sum();

        (centers, inertia)
    }
}

impl Default for SeverityClusterer {
    fn default() -> Self {
        Self::new()
    }
}

fn nearest_center(centers: &[f64], value: f64) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, c) in centers.iter().enumerate() {
        let dist = (value - c).abs();
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_separated_groups() {
        let centers = SeverityClusterer::new()
            .cluster(&[50.0, 55.0, 180.0, 190.0, 400.0], 3)
            .unwrap();

        assert_eq!(centers.len(), 3);
        assert!(centers.windows(2).all(|w| w[0] <= w[1]));
        assert!(centers[0] < 100.0);
        assert!(centers[2] > 250.0);
    }

    #[test]
    fn test_effective_k_clamps_to_input_size() {
        let centers = SeverityClusterer::new().cluster(&[100.0], 3).unwrap();
        assert_eq!(centers, vec![100.0]);
    }

    #[test]
    fn test_empty_input_is_invalid() {
        let err = SeverityClusterer::new().cluster(&[], 3).unwrap_err();
        assert!(matches!(err, MonitorError::InvalidInput(_)));
    }

    #[test]
    fn test_identical_input_gives_identical_centers() {
        let values = [42.0, 88.0, 90.0, 155.0, 310.0, 305.0, 47.0];
        let clusterer = SeverityClusterer::new();
        let a = clusterer.cluster(&values, 3).unwrap();
        let b = clusterer.cluster(&values, 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_k_equal_to_input_size_returns_the_points() {
        let centers = SeverityClusterer::new()
            .cluster(&[300.0, 10.0, 150.0], 3)
            .unwrap();
        assert_eq!(centers, vec![10.0, 150.0, 300.0]);
    }

    #[test]
    fn test_duplicate_values_do_not_panic() {
        let centers = SeverityClusterer::new()
            .cluster(&[80.0, 80.0, 80.0, 80.0], 3)
            .unwrap();
        assert_eq!(centers.len(), 3);
        assert!(centers.iter().all(|c| (c - 80.0).abs() < 1e-9));
    }

    #[test]
    fn test_centers_stay_within_data_range() {
        let values = [12.0, 75.0, 140.0, 260.0, 480.0, 33.0, 91.0];
        let centers = SeverityClusterer::new().cluster(&values, 3).unwrap();
        for c in centers {
            assert!((12.0..=480.0).contains(&c));
        }
    }
}
