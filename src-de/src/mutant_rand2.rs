use ndarray::{Array1, Zip};

use crate::individual::Population;

pub(crate) fn mutant_rand2(samples: &[usize], pop: &Population, f: f64) -> Array1<f64> {
	let r0 = samples[0];
	let r1 = samples[1];
	let r2 = samples[2];
	let r3 = samples[3];
	let r4 = samples[4];

	Zip::from(&pop[r0].values)
		.and(&pop[r1].values)
		.and(&pop[r2].values)
		.and(&pop[r3].values)
		.and(&pop[r4].values)
		.map_collect(|&x0, &x1, &x2, &x3, &x4| x0 + f * (x1 + x2 - x3 - x4))
}
