use ndarray::{Array1, Zip};

use crate::individual::Population;

pub(crate) fn mutant_current_to_best1(
	samples: &[usize],
	pop: &Population,
	f: f64,
	i: usize,
) -> Array1<f64> {
	let r0 = samples[0];
	let r1 = samples[1];

	Zip::from(&pop[i].values)
		.and(&pop.best().values)
		.and(&pop[r0].values)
		.and(&pop[r1].values)
		.map_collect(|&curr, &best, &x0, &x1| curr + f * (best - curr + x0 - x1))
}
