use crate::config::{InitMode, KMeansConfig, StabilityRule};
use crate::distance::nearest_centroid;
use crate::error::KMeansError;
use crate::scalar::{Accumulator, Scalar};
use log::{debug, info, trace};
use ndarray::{Array2, ArrayView2};
use num_traits::Zero;
use rand::Rng;
use std::time::Instant;

/// Number of stable iterations after which the loop stops
pub const STABLE_ITERATIONS: usize = 3;

/// Summary of a finished clustering run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterReport {
    /// Number of assign/update iterations performed
    pub iterations: usize,

    /// Mean distance from each point to its assigned centroid in the last iteration
    pub cost: f64,

    /// Value of the stability counter when the loop stopped
    pub stable_iterations: usize,

    /// Whether the loop stopped before hitting `max_iters`
    pub converged: bool,
}

/// Counts iterations whose cost barely moved
#[derive(Debug, Clone)]
struct StabilityCounter {
    rule: StabilityRule,
    end_error: f64,
    count: usize,
}

impl StabilityCounter {
    fn new(rule: StabilityRule, end_error: f64) -> Self {
        Self {
            rule,
            end_error,
            count: 0,
        }
    }

    /// Record one iteration and return the updated count.
    ///
    /// The iteration is stable when `|last - current| < end_error * last`.
    /// `last_cost` is 0 before the first iteration, so the first one never
    /// counts.
    fn observe(&mut self, last_cost: f64, current_cost: f64) -> usize {
        if (last_cost - current_cost).abs() < self.end_error * last_cost {
            self.count += 1;
        } else if self.rule == StabilityRule::Consecutive {
            self.count = 0;
        }
        self.count
    }

    fn is_stable(&self) -> bool {
        self.count >= STABLE_ITERATIONS
    }
}

/// Reject runs with fewer points than clusters
pub fn check_sample_count(n_samples: usize, k: usize) -> Result<(), KMeansError> {
    if n_samples < k {
        return Err(KMeansError::InsufficientData(format!(
            "Number of samples ({}) is less than k ({})",
            n_samples, k
        )));
    }
    Ok(())
}

/// Seed `centroids` from rows of `data` according to `mode`.
///
/// `data` must hold at least as many rows as `centroids`.
pub fn seed_centroids<T, R>(
    data: &ArrayView2<T>,
    centroids: &mut Array2<T>,
    mode: InitMode,
    rng: &mut R,
) -> Result<(), KMeansError>
where
    T: Scalar,
    R: Rng,
{
    let n_samples = data.nrows();
    let k = centroids.nrows();
    check_sample_count(n_samples, k)?;

    match mode {
        InitMode::Manual => {}
        InitMode::Random => {
            let interval = n_samples / k;
            for cluster_idx in 0..k {
                let offset = rng.gen_range(0..interval);
                let data_idx = (interval * cluster_idx + offset).min(n_samples - 1);
                trace!("Seeding centroid {} from point {}", cluster_idx, data_idx);
                centroids.row_mut(cluster_idx).assign(&data.row(data_idx));
            }
        }
        InitMode::Uniform => {
            for cluster_idx in 0..k {
                let data_idx = cluster_idx * n_samples / k;
                trace!("Seeding centroid {} from point {}", cluster_idx, data_idx);
                centroids.row_mut(cluster_idx).assign(&data.row(data_idx));
            }
        }
    }

    Ok(())
}

/// Run Lloyd iterations on already seeded centroids.
///
/// Each iteration assigns every point to its nearest centroid, accumulates
/// the per-cluster sums in `A`, and replaces every non-empty centroid by the
/// saturated mean of its points. Empty clusters keep their centroid.
pub fn lloyd<T, A>(
    data: &ArrayView2<T>,
    centroids: &mut Array2<T>,
    config: &KMeansConfig,
) -> Result<ClusterReport, KMeansError>
where
    T: Scalar,
    A: Accumulator<T>,
{
    let (n_samples, n_features) = data.dim();
    let k = centroids.nrows();
    check_sample_count(n_samples, k)?;

    if centroids.ncols() != n_features {
        return Err(KMeansError::InvalidDimensions(format!(
            "Expected {} features, got {}",
            centroids.ncols(),
            n_features
        )));
    }

    let mut cluster_sums: Array2<A> = Array2::from_elem((k, n_features), A::zero());
    let mut cluster_counts = vec![0usize; k];

    let mut stability = StabilityCounter::new(config.stability, config.end_error);
    let mut iterations = 0;
    let mut last_cost;
    let mut current_cost = 0.0f64;

    loop {
        let iter_start = Instant::now();

        cluster_sums.fill(A::zero());
        cluster_counts.fill(0);

        last_cost = current_cost;
        current_cost = 0.0;

        // Assignment
        for point in data.outer_iter() {
            let (label, dist) = nearest_centroid(&point, &centroids.view());
            current_cost += dist;
            cluster_counts[label] += 1;
            for (sum, &x) in cluster_sums.row_mut(label).iter_mut().zip(point.iter()) {
                *sum += A::from(x);
            }
        }
        current_cost /= n_samples as f64;

        // Update
        let mut frozen = 0;
        for (cluster_idx, &count) in cluster_counts.iter().enumerate() {
            if count == 0 {
                frozen += 1;
                continue;
            }
            let divisor = A::from_count(count);
            for (c, &sum) in centroids
                .row_mut(cluster_idx)
                .iter_mut()
                .zip(cluster_sums.row(cluster_idx).iter())
            {
                *c = (sum / divisor).saturate();
            }
        }

        iterations += 1;

        let stable = stability.observe(last_cost, current_cost);

        debug!(
            "Iteration {}/{}: cost = {:.6}, delta = {:.6}, stable = {}, empty clusters = {}, time = {:.4}s",
            iterations,
            config.max_iters,
            current_cost,
            (last_cost - current_cost).abs(),
            stable,
            frozen,
            iter_start.elapsed().as_secs_f64()
        );

        // A zero cost means every point sits on its centroid.
        let converged = current_cost.is_zero() || stability.is_stable();
        if converged || iterations >= config.max_iters {
            info!(
                "Stopped after {} iterations: cost = {:.6}, {}",
                iterations,
                current_cost,
                if converged {
                    "converged"
                } else {
                    "iteration limit reached"
                }
            );
            return Ok(ClusterReport {
                iterations,
                cost: current_cost,
                stable_iterations: stable,
                converged,
            });
        }
    }
}
