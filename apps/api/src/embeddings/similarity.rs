/// Cosine similarity between two vectors.
///
/// Returns 0 when the lengths differ, either vector has zero magnitude, or the
/// magnitudes overflow `f64`.
/// Callers should read 0 as "no defined similarity", not "orthogonal".
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = magnitude(a);
    let norm_b = magnitude(b);

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let similarity = dot / (norm_a * norm_b);
    if similarity.is_finite() {
        similarity
    } else {
        0.0
    }
}

/// Scales the vector to unit length in place; a zero vector is left untouched.
pub fn l2_normalize(v: &mut [f64]) {
    let norm = magnitude(v);
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}

fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}
