use ndarray::Array2;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::individual::Individual;

/// Latin hypercube initialization in `[0, 1)^n`.
///
/// Each variable gets one jittered sample per stratum `[k/npop, (k+1)/npop)`,
/// shuffled independently of the other variables.
pub(crate) fn init_latin_hypercube<R: Rng + ?Sized>(
	n: usize,
	npop: usize,
	rng: &mut R,
) -> Vec<Individual> {
	let mut samples = Array2::<f64>::zeros((npop, n));
	for j in 0..n {
		let mut vals = Vec::with_capacity(npop);
		for k in 0..npop {
			let u: f64 = rng.random::<f64>();
			vals.push(((k as f64) + u) / (npop as f64));
		}
		vals.shuffle(rng);
		for (i, v) in vals.into_iter().enumerate() {
			// (k + u) / npop can round up to 1.0 for u close to 1
			samples[(i, j)] = v.min(1.0 - f64::EPSILON / 2.0);
		}
	}
	samples.rows().into_iter().map(|row| Individual::new(row.to_owned())).collect()
}
