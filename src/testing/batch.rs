/// Two-pass SEM of `xs`, with the same `n <= ddof` convention as the
/// running statistics.
pub fn batch_sem(xs: &[f64], ddof: usize) -> f64 {
    let n = xs.len();
    if n <= ddof {
        return 0.0;
    }
    let mean = xs.iter().sum::<f64>() / n as f64;
    let m2 = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>();
    (m2 / (n - ddof) as f64 / n as f64).sqrt()
}

/// `|a - b| <= eps * max(|b|, 1)`.
pub fn approx_eq_rel(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps * b.abs().max(1.0)
}
