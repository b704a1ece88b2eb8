//! # lloyd-kmeans
//!
//! Lloyd's k-means clustering over flat point buffers, with separate
//! storage and accumulation types.
//!
//! ## Features
//!
//! - **Generic numerics**: points are stored as any primitive integer or
//!   float `T`; centroid sums are accumulated in a wider `A` and narrowed
//!   back with a saturating cast, so `u8` pixels summed in `u32` never wrap
//! - **Two seeding strategies**: random pick per interval or evenly spaced
//!   points, plus manual centroids via `set_mean`
//! - **Injectable randomness**: any `rand::Rng` can drive random seeding
//! - **ndarray compatible**: centroids are exposed as `Array2` / `ArrayView1`
//!
//! ## Example
//!
//! ```rust
//! use lloyd_kmeans::{InitMode, KMeans};
//!
//! // Two groups of 2D points, point-major
//! let data = [
//!     0.0f32, 0.0,
//!     0.5, 0.5,
//!     9.0, 9.0,
//!     9.5, 9.5,
//! ];
//!
//! let mut kmeans: KMeans<f32, f64> = KMeans::new(2, 2);
//! kmeans.set_init_mode(InitMode::Uniform);
//!
//! let mut labels = vec![0; 4];
//! let report = kmeans.cluster(&data, Some(&mut labels[..])).unwrap();
//!
//! assert_eq!(labels, vec![0, 0, 1, 1]);
//! assert!(report.iterations >= 1);
//! assert_eq!(kmeans.mean(1).to_vec(), vec![9.25, 9.25]);
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust
//! use lloyd_kmeans::{InitMode, KMeans, KMeansConfig, StabilityRule};
//!
//! let data: Vec<u8> = (0..200).map(|i| if i < 100 { 250 } else { 5 }).collect();
//!
//! let config = KMeansConfig {
//!     k: 2,
//!     init_mode: InitMode::Random,
//!     max_iters: 50,
//!     end_error: 1e-4,
//!     stability: StabilityRule::Consecutive,
//!     seed: Some(42),
//! };
//!
//! // u8 storage, u32 accumulation
//! let mut kmeans: KMeans<u8, u32> = KMeans::with_config(1, config);
//! let labels = kmeans.fit_predict(&data).unwrap();
//!
//! assert_eq!(labels[0], 0);
//! assert_eq!(labels[199], 1);
//! assert_eq!(kmeans.mean(0)[0], 250);
//! assert_eq!(kmeans.mean(1)[0], 5);
//! ```

mod algorithm;
mod config;
mod distance;
mod error;
mod kmeans;
mod scalar;

pub use algorithm::{ClusterReport, STABLE_ITERATIONS};
pub use config::{InitMode, KMeansConfig, StabilityRule};
pub use distance::{euclidean_distance, nearest_centroid};
pub use error::KMeansError;
pub use kmeans::KMeans;
pub use scalar::{saturating_cast, Accumulator, Scalar};
