use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lloyd_kmeans::{InitMode, KMeans, KMeansConfig};
use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use std::time::Duration;

fn random_points(n_samples: usize, n_features: usize) -> Vec<f32> {
    Array2::random((n_samples, n_features), Uniform::new(-1.0f32, 1.0)).into_raw_vec()
}

fn bench_config(k: usize) -> KMeansConfig {
    KMeansConfig::new(k)
        .with_init_mode(InitMode::Uniform)
        .with_max_iters(5)
}

fn benchmark_kmeans_varying_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans_samples");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n_features = 32;
    let k = 16;
    let sample_sizes = [1_000, 5_000, 10_000];

    for n_samples in sample_sizes.iter() {
        group.throughput(Throughput::Elements(*n_samples as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_samples),
            n_samples,
            |b, &n_samples| {
                let data = random_points(n_samples, n_features);
                let config = bench_config(k);

                b.iter(|| {
                    let mut kmeans: KMeans<f32, f64> =
                        KMeans::with_config(n_features, config.clone());
                    kmeans.cluster(black_box(&data), None).unwrap();
                    kmeans
                });
            },
        );
    }
    group.finish();
}

fn benchmark_kmeans_varying_clusters(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans_clusters");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n_samples = 5_000;
    let n_features = 32;
    let cluster_counts = [4, 16, 64];

    for k in cluster_counts.iter() {
        group.throughput(Throughput::Elements(*k as u64));
        group.bench_with_input(BenchmarkId::from_parameter(k), k, |b, &k| {
            let data = random_points(n_samples, n_features);
            let config = bench_config(k);

            b.iter(|| {
                let mut kmeans: KMeans<f32, f64> = KMeans::with_config(n_features, config.clone());
                kmeans.cluster(black_box(&data), None).unwrap();
                kmeans
            });
        });
    }
    group.finish();
}

fn benchmark_integer_storage(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans_storage");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    // RGB-like pixels
    let n_samples = 10_000;
    let n_features = 3;
    let k = 8;
    let data: Vec<u8> = random_points(n_samples, n_features)
        .into_iter()
        .map(|x| ((x + 1.0) * 127.5) as u8)
        .collect();

    group.bench_function("u8_pixels_u32_acc", |b| {
        b.iter(|| {
            let mut kmeans: KMeans<u8, u32> = KMeans::with_config(n_features, bench_config(k));
            kmeans.cluster(black_box(&data), None).unwrap();
            kmeans
        });
    });
    group.finish();
}

fn benchmark_predict(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmeans_predict");
    group.sample_size(10);
    group.warm_up_time(Duration::from_millis(500));
    group.measurement_time(Duration::from_secs(2));

    let n_train = 5_000;
    let n_features = 32;
    let k = 16;
    let predict_sizes = [1_000, 5_000];

    // Pre-train the model
    let train_data = random_points(n_train, n_features);
    let mut kmeans: KMeans<f32, f64> = KMeans::with_config(n_features, bench_config(k));
    kmeans.cluster(&train_data, None).unwrap();

    for n_predict in predict_sizes.iter() {
        group.throughput(Throughput::Elements(*n_predict as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(n_predict),
            n_predict,
            |b, &n_predict| {
                let test_data = random_points(n_predict, n_features);

                b.iter(|| kmeans.predict(black_box(&test_data)).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_kmeans_varying_samples,
    benchmark_kmeans_varying_clusters,
    benchmark_integer_storage,
    benchmark_predict,
);

criterion_main!(benches);
