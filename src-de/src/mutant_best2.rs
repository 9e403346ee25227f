use ndarray::{Array1, Zip};

use crate::individual::Population;

pub(crate) fn mutant_best2(samples: &[usize], pop: &Population, f: f64) -> Array1<f64> {
	let r0 = samples[0];
	let r1 = samples[1];
	let r2 = samples[2];
	let r3 = samples[3];

	Zip::from(&pop.best().values)
		.and(&pop[r0].values)
		.and(&pop[r1].values)
		.and(&pop[r2].values)
		.and(&pop[r3].values)
		.map_collect(|&best, &x0, &x1, &x2, &x3| best + f * (x0 + x1 - x2 - x3))
}
