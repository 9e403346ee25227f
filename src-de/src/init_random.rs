use ndarray::Array1;
use rand::Rng;

use crate::individual::Individual;

/// Uniform initialization in `[0, 1)^n`, drawn row by row.
pub(crate) fn init_random<R: Rng + ?Sized>(n: usize, npop: usize, rng: &mut R) -> Vec<Individual> {
	(0..npop)
		.map(|_| Individual::new(Array1::from_shape_fn(n, |_| rng.random::<f64>())))
		.collect()
}
