use ndarray::{Array1, Zip};

use crate::individual::Population;

pub(crate) fn mutant_rand1(samples: &[usize], pop: &Population, f: f64) -> Array1<f64> {
	let r0 = samples[0];
	let r1 = samples[1];
	let r2 = samples[2];

	Zip::from(&pop[r0].values)
		.and(&pop[r1].values)
		.and(&pop[r2].values)
		.map_collect(|&x0, &x1, &x2| x0 + f * (x1 - x2))
}
