use ndarray::{Array1, Zip};

use crate::individual::Population;

pub(crate) fn mutant_best1(samples: &[usize], pop: &Population, f: f64) -> Array1<f64> {
	let r0 = samples[0];
	let r1 = samples[1];

	Zip::from(&pop.best().values)
		.and(&pop[r0].values)
		.and(&pop[r1].values)
		.map_collect(|&best, &x0, &x1| best + f * (x0 - x1))
}
