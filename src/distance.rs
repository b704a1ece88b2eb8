use crate::scalar::Scalar;
use ndarray::{ArrayView1, ArrayView2};
use num_traits::AsPrimitive;

/// Euclidean distance between two points, computed in `f64`.
///
/// Components are widened before subtracting so integer storage types
/// cannot overflow.
#[inline]
pub fn euclidean_distance<T: Scalar>(x: &ArrayView1<T>, c: &ArrayView1<T>) -> f64 {
    x.iter()
        .zip(c.iter())
        .map(|(&a, &b)| {
            let diff = AsPrimitive::<f64>::as_(a) - AsPrimitive::<f64>::as_(b);
            diff * diff
        })
        .sum::<f64>()
        .sqrt()
}

/// Find the nearest centroid to `point`.
///
/// Centroids are scanned in ascending order and replaced only on a strictly
/// smaller distance, so on ties the lowest index wins.
///
/// # Returns
/// * `(label, distance)` - Index of the nearest centroid and the distance to it
pub fn nearest_centroid<T: Scalar>(point: &ArrayView1<T>, centroids: &ArrayView2<T>) -> (usize, f64) {
    let mut best_label = 0;
    let mut best_dist = f64::INFINITY;

    for (j, centroid) in centroids.outer_iter().enumerate() {
        let dist = euclidean_distance(point, &centroid);
        if j == 0 || dist < best_dist {
            best_dist = dist;
            best_label = j;
        }
    }

    (best_label, best_dist)
}

/// Write the nearest-centroid label of every row of `data` into `labels`
pub fn assign_labels<T: Scalar>(data: &ArrayView2<T>, centroids: &ArrayView2<T>, labels: &mut [usize]) {
    for (label, point) in labels.iter_mut().zip(data.outer_iter()) {
        *label = nearest_centroid(&point, centroids).0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_euclidean_distance() {
        let x = array![0.0f32, 0.0];
        let c = array![3.0f32, 4.0];

        assert_relative_eq!(euclidean_distance(&x.view(), &c.view()), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_euclidean_distance_integer_no_overflow() {
        let x = array![i32::MIN];
        let c = array![i32::MAX];

        let expected = (i32::MAX as f64) - (i32::MIN as f64);
        assert_relative_eq!(euclidean_distance(&x.view(), &c.view()), expected, epsilon = 1e-3);

        let x = array![0u8, 0];
        let c = array![255u8, 255];
        assert_relative_eq!(
            euclidean_distance(&x.view(), &c.view()),
            (2.0f64 * 255.0 * 255.0).sqrt()
        );
    }

    #[test]
    fn test_find_nearest_centroid() {
        let centroids = array![[0.0f32, 0.0], [10.0, 10.0]];

        let (label, dist) = nearest_centroid(&array![1.0f32, 0.0].view(), &centroids.view());
        assert_eq!(label, 0);
        assert_relative_eq!(dist, 1.0);

        let (label, _) = nearest_centroid(&array![9.0f32, 9.0].view(), &centroids.view());
        assert_eq!(label, 1);
    }

    #[test]
    fn test_tie_goes_to_lowest_index() {
        let centroids = array![[0.0f64], [10.0], [10.0]];

        // (5) is equidistant from centroids 0 and 1
        let (label, dist) = nearest_centroid(&array![5.0f64].view(), &centroids.view());
        assert_eq!(label, 0);
        assert_relative_eq!(dist, 5.0);

        // duplicate centroids: the first one keeps the point
        let (label, _) = nearest_centroid(&array![10.0f64].view(), &centroids.view());
        assert_eq!(label, 1);
    }

    #[test]
    fn test_assign_labels() {
        let data = array![[0i32, 0], [10, 10], [1, 1], [9, 8]];
        let centroids = array![[0i32, 0], [10, 10]];
        let mut labels = vec![usize::MAX; 4];

        assign_labels(&data.view(), &centroids.view(), &mut labels);
        assert_eq!(labels, vec![0, 1, 0, 1]);
    }
}
