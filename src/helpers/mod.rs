
/// This module contains helper functions used by the optimization routines.
pub mod helpers {
    use crate::Float;
    use ndarray::ArrayView1;

    /// This function returns the first non-finite value of an array along
    /// with its index, if any. It is used to report the divergence of the
    /// training error.
    pub fn first_non_finite<F: Float>(arr: ArrayView1<F>) -> Option<(usize, F)> {
        arr.iter()
            .enumerate()
            .find(|(_, x)| !x.is_finite())
            .map(|(idx, &x)| (idx, x))
    }
}

/// This module contains helpers functions to efficiently write tests.
pub mod test_helpers {
    use crate::datasets::{generate_sine_dataset, Dataset};
    use crate::Float;
    use approx::AbsDiffEq;
    use ndarray::ArrayView1;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    pub fn assert_array_all_close<F>(x: ArrayView1<F>, y: ArrayView1<F>, delta: F)
    where
        F: Float + AbsDiffEq<Epsilon = F>,
    {
        assert_eq!(x.len(), y.len());
        for i in 0..x.len() {
            if x[i].abs_diff_ne(&y[i], delta) {
                panic!("x: {}, y: {} ; with precision level {}", x[i], y[i], delta);
            }
        }
    }

    /// Generates a seeded noisy sine dataset.
    pub fn generate_random_data(n_samples: usize, seed: u64) -> Dataset<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_sine_dataset(n_samples, &mut rng)
    }
}
