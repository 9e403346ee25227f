use ndarray::Array1;
use rand::Rng;

/// Copy a run of consecutive components (wrapping around) from `mutant`,
/// starting at a random fill point, while successive draws stay below `cr`.
///
/// The run may be empty: with `cr == 0` the trial equals the target.
pub(crate) fn exponential_crossover<R: Rng + ?Sized>(
	target: &Array1<f64>,
	mutant: &Array1<f64>,
	cr: f64,
	rng: &mut R,
) -> Array1<f64> {
	let n = target.len();
	let mut trial = target.clone();
	let mut j = rng.random_range(0..n);
	let mut l = 0usize;
	while l < n && rng.random::<f64>() < cr {
		trial[j] = mutant[j];
		j = (j + 1) % n;
		l += 1;
	}
	trial
}
