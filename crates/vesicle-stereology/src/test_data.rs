//! Synthetic vesicle populations for tests and benchmarks
//!
//! All generators are seeded, so repeated calls return identical data.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, LogNormal, Uniform};

/// Seeded vesicle populations and their planar sections
pub struct TestPopulations;

impl TestPopulations {
    /// Log-normal section radii
    ///
    /// Returns `n` samples with median `exp(mu)` and shape `sigma`.
    pub fn lognormal_radii(n: usize, mu: f64, sigma: f64, seed: u64) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        let dist = LogNormal::new(mu, sigma).unwrap();
        (0..n).map(|_| dist.sample(&mut rng)).collect()
    }

    /// Typical basalt section radii: 2000 samples with median 0.5
    pub fn basalt_radii() -> Vec<f64> {
        Self::lognormal_radii(2000, 0.5f64.ln(), 0.6, 42)
    }

    /// Section radii of equal spheres cut by random planes
    ///
    /// A plane at distance `d`, uniform in `[0, radius)`, from a sphere's
    /// center leaves a circle of radius `sqrt(radius^2 - d^2)`.
    pub fn monodisperse_sections(n: usize, radius: f64, seed: u64) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        let offset = Uniform::new(0.0, radius);
        (0..n)
            .map(|_| {
                let d = offset.sample(&mut rng);
                (radius * radius - d * d).sqrt()
            })
            .collect()
    }

    /// Sections of two sphere populations, mixed in the given proportion
    ///
    /// Returns `n` radii, roughly `fraction * n` of them from spheres of
    /// radius `small` and the rest from spheres of radius `large`.
    pub fn bimodal_sections(n: usize, small: f64, large: f64, fraction: f64, seed: u64) -> Vec<f64> {
        let n_small = (n as f64 * fraction).round() as usize;
        let mut data = Self::monodisperse_sections(n_small, small, seed);
        data.extend(Self::monodisperse_sections(n - n_small, large, seed.wrapping_add(1)));
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generators_are_reproducible() {
        assert_eq!(TestPopulations::basalt_radii(), TestPopulations::basalt_radii());
        assert_eq!(
            TestPopulations::monodisperse_sections(50, 2.0, 7),
            TestPopulations::monodisperse_sections(50, 2.0, 7)
        );
    }

    #[test]
    fn test_sections_never_exceed_sphere() {
        let sections = TestPopulations::monodisperse_sections(1000, 3.0, 1);
        assert!(sections.iter().all(|&r| r > 0.0 && r <= 3.0));

        let mixed = TestPopulations::bimodal_sections(1000, 1.0, 4.0, 0.7, 3);
        assert_eq!(mixed.len(), 1000);
        assert!(mixed.iter().filter(|&&r| r > 1.0).count() <= 300);
    }
}
