//! k-NN local outlier factor over feature vectors.
//!
//! Plain deterministic implementation: distance matrix, k-distance,
//! reachability distance, local reachability density, then the factor.
//! Neighbors are ordered by (distance, index) so ties resolve the same way
//! on every run. Scores near 1.0 mean the point sits in a neighborhood of
//! similar density; larger scores mean sparser than its neighbors.

/// Density ceiling for points whose neighborhood collapses to distance zero
/// (exact duplicates).
const MAX_DENSITY: f64 = 1e9;

/// Compute the outlier factor for every point. `k` is clamped to `n - 1`.
/// Fewer than two points yield an empty result.
pub fn local_outlier_factor(points: &[Vec<f64>], k: usize) -> Vec<f64> {
  let n = points.len();
  if n < 2 {
    return Vec::new();
  }
  let k = k.max(1).min(n - 1);

  // Pairwise distances.
  let mut dist = vec![vec![0.0f64; n]; n];
  for i in 0..n {
    for j in (i + 1)..n {
      let d = euclidean(&points[i], &points[j]);
      dist[i][j] = d;
      dist[j][i] = d;
    }
  }

  // k nearest neighbors per point, ties broken by index.
  let mut neighbors: Vec<Vec<usize>> = Vec::with_capacity(n);
  let mut k_distance: Vec<f64> = Vec::with_capacity(n);
  for i in 0..n {
    let mut order: Vec<usize> = (0..n).filter(|&j| j != i).collect();
    order.sort_by(|&a, &b| {
      dist[i][a]
        .partial_cmp(&dist[i][b])
        .unwrap_or(std::cmp::Ordering::Equal)
        .then(a.cmp(&b))
    });
    order.truncate(k);
    k_distance.push(dist[i][order[k - 1]]);
    neighbors.push(order);
  }

  // Local reachability density.
  let mut lrd: Vec<f64> = Vec::with_capacity(n);
  for i in 0..n {
    let reach_sum: f64 = neighbors[i]
      .iter()
      .map(|&j| dist[i][j].max(k_distance[j]))
      .sum();
    if reach_sum <= 0.0 {
      lrd.push(MAX_DENSITY);
    } else {
      lrd.push(k as f64 / reach_sum);
    }
  }

  // Factor: mean neighbor density relative to own density.
  (0..n)
    .map(|i| {
      let neighbor_sum: f64 = neighbors[i].iter().map(|&j| lrd[j]).sum();
      neighbor_sum / (k as f64 * lrd[i])
    })
    .collect()
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
  a.iter()
    .zip(b)
    .map(|(x, y)| (x - y) * (x - y))
    .sum::<f64>()
    .sqrt()
}
