use crate::algorithm::{check_sample_count, lloyd, seed_centroids, ClusterReport};
use crate::config::{InitMode, KMeansConfig, StabilityRule};
use crate::distance::assign_labels;
use crate::error::KMeansError;
use crate::scalar::{Accumulator, Scalar};
use log::info;
use ndarray::{Array2, ArrayView1, ArrayView2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::marker::PhantomData;
use std::time::{SystemTime, UNIX_EPOCH};

/// Lloyd's k-means over points of storage type `T`, accumulating centroid
/// sums in `A`.
///
/// Points are passed as a flat point-major buffer: point `i` occupies
/// `data[i * d..(i + 1) * d]`. Centroids live in the engine, start at zero,
/// and are updated in place by [`KMeans::cluster`].
///
/// # Example
///
/// ```
/// use lloyd_kmeans::{InitMode, KMeans};
///
/// let data = [1.0f64, 2.0, 3.0, 10.0, 11.0, 12.0];
///
/// let mut kmeans: KMeans<f64, f64> = KMeans::new(1, 2);
/// kmeans.set_init_mode(InitMode::Uniform);
///
/// let labels = kmeans.fit_predict(&data).unwrap();
/// assert_eq!(labels, vec![0, 0, 0, 1, 1, 1]);
/// assert_eq!(kmeans.mean(0)[0], 2.0);
/// assert_eq!(kmeans.mean(1)[0], 11.0);
/// ```
pub struct KMeans<T, A, R = ChaCha8Rng> {
    /// Model configuration
    config: KMeansConfig,

    /// Number of features (dimensions)
    d: usize,

    /// Current centroids, shape (k, d)
    centroids: Array2<T>,

    /// Random source for `InitMode::Random`
    rng: R,

    _accumulator: PhantomData<fn() -> A>,
}

impl<T, A> KMeans<T, A, ChaCha8Rng>
where
    T: Scalar,
    A: Accumulator<T>,
{
    /// Create a new KMeans instance with default configuration.
    ///
    /// The random source is seeded from the wall clock.
    ///
    /// # Arguments
    ///
    /// * `d` - Number of features (dimensions) in the data
    /// * `k` - Number of clusters
    ///
    /// # Panics
    ///
    /// Panics if `d` or `k` is 0.
    pub fn new(d: usize, k: usize) -> Self {
        Self::with_config(d, KMeansConfig::new(k))
    }

    /// Create a new KMeans instance with custom configuration.
    ///
    /// Seeds the random source from `config.seed`, or from the wall clock
    /// when no seed is set.
    ///
    /// # Panics
    ///
    /// Panics if `d` or `config.k` is 0.
    pub fn with_config(d: usize, config: KMeansConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => clock_seeded_rng(),
        };
        Self::with_rng(d, config, rng)
    }
}

impl<T, A, R> KMeans<T, A, R>
where
    T: Scalar,
    A: Accumulator<T>,
    R: Rng,
{
    /// Create a new KMeans instance drawing random initializations from `rng`.
    ///
    /// `config.seed` is ignored.
    ///
    /// # Panics
    ///
    /// Panics if `d` or `config.k` is 0.
    pub fn with_rng(d: usize, config: KMeansConfig, rng: R) -> Self {
        assert!(d > 0, "d must be greater than 0");
        assert!(config.k > 0, "k must be greater than 0");

        Self {
            centroids: Array2::zeros((config.k, d)),
            config,
            d,
            rng,
            _accumulator: PhantomData,
        }
    }

    /// Overwrite centroid `i` with `mean`.
    ///
    /// # Errors
    ///
    /// Returns an error if `i >= k` or `mean.len() != d`.
    pub fn set_mean(&mut self, i: usize, mean: &[T]) -> Result<(), KMeansError> {
        if i >= self.config.k {
            return Err(KMeansError::InvalidCluster(format!(
                "Cluster {} out of range for k = {}",
                i, self.config.k
            )));
        }
        if mean.len() != self.d {
            return Err(KMeansError::InvalidDimensions(format!(
                "Expected {} features, got {}",
                self.d,
                mean.len()
            )));
        }

        self.centroids
            .row_mut(i)
            .assign(&ArrayView1::from(mean));
        Ok(())
    }

    /// Read-only view of centroid `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= k`.
    pub fn mean(&self, i: usize) -> ArrayView1<'_, T> {
        self.centroids.row(i)
    }

    /// All centroids, shape (k, d)
    pub fn centroids(&self) -> &Array2<T> {
        &self.centroids
    }

    /// Set the initialization mode used by the next `init` or `cluster`.
    pub fn set_init_mode(&mut self, mode: InitMode) {
        self.config.init_mode = mode;
    }

    /// Set the maximum number of iterations.
    pub fn set_max_iters(&mut self, max_iters: usize) {
        self.config.max_iters = max_iters;
    }

    /// Set the relative convergence tolerance.
    pub fn set_end_error(&mut self, end_error: f64) {
        self.config.end_error = end_error;
    }

    /// Set the stability counting rule.
    pub fn set_stability_rule(&mut self, rule: StabilityRule) {
        self.config.stability = rule;
    }

    /// Get the initialization mode.
    pub fn init_mode(&self) -> InitMode {
        self.config.init_mode
    }

    /// Get the maximum number of iterations.
    pub fn max_iters(&self) -> usize {
        self.config.max_iters
    }

    /// Get the relative convergence tolerance.
    pub fn end_error(&self) -> f64 {
        self.config.end_error
    }

    /// Get the stability counting rule.
    pub fn stability_rule(&self) -> StabilityRule {
        self.config.stability
    }

    /// Get the number of clusters.
    pub fn k(&self) -> usize {
        self.config.k
    }

    /// Get the number of features (dimensions).
    pub fn d(&self) -> usize {
        self.d
    }

    /// Get the configuration.
    pub fn config(&self) -> &KMeansConfig {
        &self.config
    }

    /// Seed the centroids from `data` according to the configured init mode.
    ///
    /// `InitMode::Manual` leaves the centroids untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if `data.len()` is not a multiple of `d`, or if it
    /// holds fewer than `k` points. Centroids are not modified on error.
    pub fn init(&mut self, data: &[T]) -> Result<(), KMeansError> {
        let points = self.points(data)?;
        seed_centroids(
            &points,
            &mut self.centroids,
            self.config.init_mode,
            &mut self.rng,
        )
    }

    /// Seed the centroids and run Lloyd's algorithm on `data`.
    ///
    /// When `labels` is given, it receives the index of the nearest final
    /// centroid for every point.
    ///
    /// # Errors
    ///
    /// Returns an error if `data.len()` is not a multiple of `d`, if it holds
    /// fewer than `k` points, or if `labels` does not hold one slot per
    /// point. Centroids are not modified on error.
    pub fn cluster(
        &mut self,
        data: &[T],
        labels: Option<&mut [usize]>,
    ) -> Result<ClusterReport, KMeansError> {
        let points = self.points(data)?;
        self.run(&points, labels)
    }

    /// Same as [`KMeans::cluster`] for data already held as an (n, d) array.
    pub fn cluster_array(
        &mut self,
        data: &ArrayView2<T>,
        labels: Option<&mut [usize]>,
    ) -> Result<ClusterReport, KMeansError> {
        self.check_features(data.ncols())?;
        self.run(data, labels)
    }

    /// Cluster `data` and return the label of every point.
    pub fn fit_predict(&mut self, data: &[T]) -> Result<Vec<usize>, KMeansError> {
        let points = self.points(data)?;
        let mut labels = vec![0; points.nrows()];
        self.run(&points, Some(&mut labels[..]))?;
        Ok(labels)
    }

    /// Label `data` against the current centroids without updating them.
    pub fn predict(&self, data: &[T]) -> Result<Vec<usize>, KMeansError> {
        let points = self.points(data)?;
        let mut labels = vec![0; points.nrows()];
        assign_labels(&points, &self.centroids.view(), &mut labels);
        Ok(labels)
    }

    fn run(
        &mut self,
        points: &ArrayView2<T>,
        labels: Option<&mut [usize]>,
    ) -> Result<ClusterReport, KMeansError> {
        let n_samples = points.nrows();
        check_sample_count(n_samples, self.config.k)?;
        if let Some(labels) = labels.as_deref() {
            if labels.len() != n_samples {
                return Err(KMeansError::InvalidDimensions(format!(
                    "Expected {} labels, got {}",
                    n_samples,
                    labels.len()
                )));
            }
        }

        info!(
            "Clustering {} samples, {} features, {} clusters ({:?} init)",
            n_samples, self.d, self.config.k, self.config.init_mode
        );

        seed_centroids(
            points,
            &mut self.centroids,
            self.config.init_mode,
            &mut self.rng,
        )?;
        let report = lloyd::<T, A>(points, &mut self.centroids, &self.config)?;

        if let Some(labels) = labels {
            assign_labels(points, &self.centroids.view(), labels);
        }

        Ok(report)
    }

    /// View a flat point-major buffer as (n, d)
    fn points<'a>(&self, data: &'a [T]) -> Result<ArrayView2<'a, T>, KMeansError> {
        if data.len() % self.d != 0 {
            return Err(KMeansError::InvalidDimensions(format!(
                "Buffer of {} values is not a multiple of {} features",
                data.len(),
                self.d
            )));
        }

        ArrayView2::from_shape((data.len() / self.d, self.d), data)
            .map_err(|e| KMeansError::InvalidDimensions(e.to_string()))
    }

    fn check_features(&self, n_features: usize) -> Result<(), KMeansError> {
        if n_features != self.d {
            return Err(KMeansError::InvalidDimensions(format!(
                "Expected {} features, got {}",
                self.d, n_features
            )));
        }
        Ok(())
    }
}

fn clock_seeded_rng() -> ChaCha8Rng {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default();
    ChaCha8Rng::seed_from_u64(nanos)
}
