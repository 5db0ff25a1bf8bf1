/// Standard normal CDF, `Φ(a)`.
pub fn normal_probability(a: f64) -> f64 {
    0.5 * (1.0 + libm::erf(a / (2.0f64).sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_around_zero() {
        assert_eq!(normal_probability(0.0), 0.5);
        let p = normal_probability(1.3);
        let q = normal_probability(-1.3);
        assert!((p + q - 1.0).abs() < 1e-12);
    }

    #[test]
    fn known_quantiles() {
        assert!((normal_probability(1.644853627) - 0.95).abs() < 1e-6);
        assert!((normal_probability(-2.326347874) - 0.01).abs() < 1e-6);
    }
}
