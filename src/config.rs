/// How centroids are seeded before the first iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitMode {
    /// Pick one random point from each of `k` contiguous intervals of the input
    #[default]
    Random,

    /// Keep the centroids already written with `set_mean`
    Manual,

    /// Pick the point at offset `i * n / k` for cluster `i`
    Uniform,
}

/// How stable iterations are counted towards early stopping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StabilityRule {
    /// Every stable iteration counts, wherever it occurs in the run.
    /// The counter is never reset by an unstable iteration.
    #[default]
    Cumulative,

    /// An unstable iteration resets the counter, so the stable
    /// iterations have to be back to back.
    Consecutive,
}

/// Configuration for the KMeans algorithm
#[derive(Debug, Clone)]
pub struct KMeansConfig {
    /// Number of clusters
    pub k: usize,

    /// Centroid seeding strategy
    pub init_mode: InitMode,

    /// Maximum number of iterations. At least one iteration always runs.
    pub max_iters: usize,

    /// Relative convergence tolerance. An iteration is stable when the
    /// change in mean distance is below `end_error` times the previous cost.
    pub end_error: f64,

    /// Counting rule for stable iterations
    pub stability: StabilityRule,

    /// Seed for the random source used by `InitMode::Random`.
    /// `None` seeds from the wall clock.
    pub seed: Option<u64>,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            k: 8,
            init_mode: InitMode::Random,
            max_iters: 100,
            end_error: 0.001,
            stability: StabilityRule::Cumulative,
            seed: None,
        }
    }
}

impl KMeansConfig {
    /// Create a new configuration with the specified number of clusters
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Set the initialization mode
    pub fn with_init_mode(mut self, init_mode: InitMode) -> Self {
        self.init_mode = init_mode;
        self
    }

    /// Set the maximum number of iterations
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Set the relative convergence tolerance
    pub fn with_end_error(mut self, end_error: f64) -> Self {
        self.end_error = end_error;
        self
    }

    /// Set the stability counting rule
    pub fn with_stability(mut self, stability: StabilityRule) -> Self {
        self.stability = stability;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
