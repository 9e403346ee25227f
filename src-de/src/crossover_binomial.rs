use ndarray::Array1;
use rand::Rng;

/// Take each component from `mutant` with probability `cr`; the fill point
/// `jrand` is always taken so the trial differs from the target.
///
/// One draw per component, the fill point included.
pub(crate) fn binomial_crossover<R: Rng + ?Sized>(
	target: &Array1<f64>,
	mutant: &Array1<f64>,
	cr: f64,
	rng: &mut R,
) -> Array1<f64> {
	let n = target.len();
	let jrand = rng.random_range(0..n);
	let mut trial = target.clone();
	for j in 0..n {
		let take = rng.random::<f64>() < cr;
		if take || j == jrand {
			trial[j] = mutant[j];
		}
	}
	trial
}
