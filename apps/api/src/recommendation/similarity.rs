/// Cosine similarity of two equal-length vectors.
///
/// Returns `0.0` when either vector has zero magnitude or the lengths differ.
/// For non-negative inputs the result lies in `[0, 1]`.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        tracing::warn!(
            a_len = a.len(),
            b_len = b.len(),
            "skill vector length mismatch; returning zero similarity"
        );
        return 0.0;
    }

    let norm_a = magnitude(a);
    let norm_b = magnitude(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot_product(a, b) / (norm_a * norm_b)).clamp(0.0, 1.0)
}

fn dot_product(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}
