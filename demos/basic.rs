//! Basic example demonstrating lloyd-kmeans usage
//!
//! Run with: RUST_LOG=debug cargo run --example basic --release

use lloyd_kmeans::{InitMode, KMeans, KMeansConfig};
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

fn main() {
    env_logger::init();

    println!("=== lloyd-kmeans example ===\n");

    // Generate synthetic data: 3 clusters in 2D for easy visualization
    let n_samples = 300;
    let n_features = 2;
    let n_clusters = 3;

    println!("Generating {} samples with {} features...", n_samples, n_features);

    // Cluster centers
    let centers = [[-5.0f32, -5.0], [0.0, 5.0], [5.0, -5.0]];

    // Points are laid out one cluster after another so random seeding picks
    // one point from each block
    let noise = Array2::random((n_samples, n_features), Uniform::new(-1.0f32, 1.0));
    let mut data = Vec::with_capacity(n_samples * n_features);
    for i in 0..n_samples {
        let cluster_idx = i * n_clusters / n_samples;
        data.push(centers[cluster_idx][0] + noise[[i, 0]]);
        data.push(centers[cluster_idx][1] + noise[[i, 1]]);
    }

    println!("True cluster centers:");
    for (i, center) in centers.iter().enumerate() {
        println!("  Cluster {}: ({:.2}, {:.2})", i, center[0], center[1]);
    }
    println!();

    // Configure and run k-means
    let config = KMeansConfig::new(n_clusters)
        .with_init_mode(InitMode::Random)
        .with_max_iters(100)
        .with_end_error(1e-4)
        .with_seed(42);

    println!("Running k-means with k={}...\n", n_clusters);

    let mut kmeans: KMeans<f32, f64> = KMeans::with_config(n_features, config);
    let mut labels = vec![0; n_samples];
    let report = kmeans
        .cluster(&data, Some(&mut labels[..]))
        .expect("Clustering failed");

    println!(
        "Finished after {} iterations (cost {:.4}, converged: {})",
        report.iterations, report.cost, report.converged
    );

    // Print learned centroids
    println!("\nLearned centroids:");
    for (i, centroid) in kmeans.centroids().outer_iter().enumerate() {
        println!("  Centroid {}: ({:.4}, {:.4})", i, centroid[0], centroid[1]);
    }
    println!();

    // Count samples per cluster
    let mut cluster_counts = vec![0usize; n_clusters];
    for &label in labels.iter() {
        cluster_counts[label] += 1;
    }

    println!("Cluster distribution:");
    for (i, count) in cluster_counts.iter().enumerate() {
        println!(
            "  Cluster {}: {} samples ({:.1}%)",
            i,
            count,
            (*count as f64 / n_samples as f64) * 100.0
        );
    }
    println!();

    // Show first few predictions
    println!("First 10 sample assignments:");
    for i in 0..10 {
        println!(
            "  Sample {} at ({:.2}, {:.2}) -> Cluster {}",
            i,
            data[i * 2],
            data[i * 2 + 1],
            labels[i]
        );
    }

    println!("\n=== Done! ===");
}
