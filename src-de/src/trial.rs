//! Trial generation: mutation, crossover, repair and evaluation of one candidate.

use ndarray::Array1;
use rand::Rng;

use crate::config::{Crossover, MutationBase, Strategy};
use crate::crossover_binomial::binomial_crossover;
use crate::crossover_exponential::exponential_crossover;
use crate::fitness::Fitness;
use crate::individual::{Individual, Population};
use crate::mutant_best1::mutant_best1;
use crate::mutant_best2::mutant_best2;
use crate::mutant_current_to_best1::mutant_current_to_best1;
use crate::mutant_rand1::mutant_rand1;
use crate::mutant_rand2::mutant_rand2;
use crate::mutant_rand_to_best1::mutant_rand_to_best1;
use crate::repair_inplace::repair_inplace;
use crate::sample_indices::sample_indices;
use crate::scaler::Scaler;

/// Prime vector for candidate `i` from the strategy's mutation formula.
///
/// `samples` must hold at least `base.samples()` indices, none equal to `i`.
pub(crate) fn mutate(
	base: MutationBase,
	samples: &[usize],
	pop: &Population,
	f: f64,
	i: usize,
) -> Array1<f64> {
	debug_assert!(samples.len() >= base.samples());
	match base {
		MutationBase::Best1 => mutant_best1(samples, pop, f),
		MutationBase::Best2 => mutant_best2(samples, pop, f),
		MutationBase::Rand1 => mutant_rand1(samples, pop, f),
		MutationBase::Rand2 => mutant_rand2(samples, pop, f),
		MutationBase::RandToBest1 => mutant_rand_to_best1(samples, pop, f),
		MutationBase::CurrentToBest1 => mutant_current_to_best1(samples, pop, f, i),
	}
}

/// Build and evaluate the trial for candidate `i`.
///
/// Draw order: sample permutation, crossover, repair. The returned individual
/// is a fresh value; the population is left untouched.
#[allow(clippy::too_many_arguments)]
pub(crate) fn generate_trial<R, F, A>(
	i: usize,
	f: f64,
	pop: &Population,
	strategy: Strategy,
	cr: f64,
	scaler: &Scaler,
	fitness: &mut Fitness<'_, F, A>,
	rng: &mut R,
) -> Individual
where
	R: Rng + ?Sized,
	F: Fn(&Array1<f64>, &A) -> f64,
{
	let base = strategy.base();
	let samples = sample_indices(i, pop.len(), base.samples(), rng);
	let prime = mutate(base, &samples, pop, f, i);

	let mut values = match strategy.crossover() {
		Crossover::Binomial => binomial_crossover(&pop[i].values, &prime, cr, rng),
		Crossover::Exponential => exponential_crossover(&pop[i].values, &prime, cr, rng),
	};
	repair_inplace(&mut values, rng);

	let energy = fitness.evaluate(&scaler.to_scaled(&values));
	Individual { values, energy }
}
