use ndarray::{Array1, Zip};

use crate::individual::Population;

pub(crate) fn mutant_rand_to_best1(samples: &[usize], pop: &Population, f: f64) -> Array1<f64> {
	// x_r0 + F * (x_best - x_r0) + F * (x_r1 - x_r2)
	let r0 = samples[0];
	let r1 = samples[1];
	let r2 = samples[2];

	Zip::from(&pop.best().values)
		.and(&pop[r0].values)
		.and(&pop[r1].values)
		.and(&pop[r2].values)
		.map_collect(|&best, &x0, &x1, &x2| x0 + f * (best - x0) + f * (x1 - x2))
}
