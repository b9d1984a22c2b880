/// Cosine similarity over the shared prefix of two vectors.
///
/// The epsilon in the denominator keeps zero vectors finite instead of NaN.
pub fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt() + 1e-9)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_vectors_score_one() {
        let v = vec![0.5, 0.2, 0.8];
        assert!((cosine(&v, &v) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn orthogonal_vectors_score_zero() {
        assert!(cosine(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-5);
    }

    #[test]
    fn zero_vector_is_finite() {
        let score = cosine(&[0.0, 0.0], &[1.0, 1.0]);
        assert!(score.is_finite());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn mismatched_lengths_use_shared_prefix() {
        let score = cosine(&[1.0, 0.0, 0.0], &[1.0, 0.0]);
        assert!(score > 0.9);
    }
}
