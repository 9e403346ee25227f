//! One optimization run: initialization, generation steps and termination.

use std::time::{Duration, Instant};

use log::Level;
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{DEConfig, Init, Updating};
use crate::fitness::Fitness;
use crate::individual::{Individual, Population};
use crate::init_latin_hypercube::init_latin_hypercube;
use crate::init_random::init_random;
use crate::scaler::Scaler;
use crate::trial::generate_trial;
use crate::{DEIntermediate, DEReport, Termination};

/// Environment toggle for per-phase timing lines
pub const TIMING_ENV: &str = "OPTDE_DE_TIMING";

fn timing_enabled() -> bool {
	std::env::var(TIMING_ENV).map(|v| v != "0").unwrap_or(false)
}

/// A started run, owning its population and random stream.
///
/// Created by [`crate::DifferentialEvolution::start`] with an evaluated
/// population whose best member sits in slot 0. Every [`Evolution::step`]
/// performs one generation until the run terminates; a terminated run stays
/// terminated.
pub struct Evolution<'s, F, A> {
	config: &'s DEConfig,
	scaler: &'s Scaler,
	fitness: Fitness<'s, F, A>,
	rng: StdRng,
	population: Population,
	nit: usize,
	termination: Option<Termination>,
	started: Instant,
	level: Level,
	timing: bool,
	t_iter_tot: Duration,
}

impl<'s, F, A> Evolution<'s, F, A>
where
	F: Fn(&Array1<f64>, &A) -> f64,
{
	pub(crate) fn new(
		config: &'s DEConfig,
		scaler: &'s Scaler,
		npop: usize,
		mut fitness: Fitness<'s, F, A>,
	) -> Self {
		let started = Instant::now();
		let level = if config.disp { Level::Info } else { Level::Debug };
		let timing = timing_enabled();

		let mut rng: StdRng = match config.seed {
			Some(s) => StdRng::seed_from_u64(s),
			None => {
				let mut thread_rng = rand::rng();
				StdRng::from_rng(&mut thread_rng)
			}
		};

		let n = scaler.len();
		log::log!(
			level,
			"DE Init: {} dimensions, population={}, maxiter={}",
			n,
			npop,
			config.maxiter
		);
		log::log!(
			level,
			"  Strategy: {}, Mutation: [{}, {}), Crossover: CR={:.3}, Updating: {}",
			config.strategy,
			config.mutation.min,
			config.mutation.max,
			config.recombination,
			config.updating
		);
		log::log!(level, "  Tolerances: tol={:.2e}, atol={:.2e}", config.tol, config.atol);

		let members = match config.init {
			Init::LatinHypercube => init_latin_hypercube(n, npop, &mut rng),
			Init::Random => init_random(n, npop, &mut rng),
		};

		let t_eval0 = Instant::now();
		let mut population = Population::new(members);
		for member in population.iter_mut() {
			member.energy = fitness.evaluate(&scaler.to_scaled(&member.values));
		}
		population.promote_best();
		if timing {
			log::info!("TIMING init: eval={:.3} ms", t_eval0.elapsed().as_secs_f64() * 1e3);
		}

		let (mean, std) = population.energy_stats();
		log::log!(level, "  Initial population: mean={:.6e}, std={:.6e}", mean, std);
		log::log!(level, "DE iter {:4}  best_f={:.6e}", 0, population.best().energy);

		Self {
			config,
			scaler,
			fitness,
			rng,
			population,
			nit: 0,
			termination: None,
			started,
			level,
			timing,
			t_iter_tot: Duration::ZERO,
		}
	}

	/// Run one generation; returns the termination cause once the run is over
	pub fn step(&mut self) -> Option<Termination> {
		if self.termination.is_some() {
			return self.termination;
		}
		let iter_start = Instant::now();
		self.nit += 1;

		let f = self.config.mutation.sample(&mut self.rng);
		let accepted = match self.config.updating {
			Updating::Immediate => self.generation_immediate(f),
			Updating::Deferred => self.generation_deferred(f),
		};

		let (mean, std) = self.population.energy_stats();
		log::log!(
			self.level,
			"DE iter {:4}  best_f={:.6e}  std={:.3e}  F={:.3}  accepted={}/{}",
			self.nit,
			self.population.best().energy,
			std,
			f,
			accepted,
			self.population.len()
		);
		log::trace!("DE iter {:4}  mean={:.6e}", self.nit, mean);

		let iter_dur = iter_start.elapsed();
		self.t_iter_tot += iter_dur;
		if self.timing && (self.nit <= 5 || self.nit % 10 == 0) {
			log::info!("TIMING iter {:4}: total={:.3} ms", self.nit, iter_dur.as_secs_f64() * 1e3);
		}

		if self.population.is_converged(self.config.atol, self.config.tol) {
			self.termination = Some(Termination::Converged);
		} else if self.nit >= self.config.maxiter {
			self.termination = Some(Termination::MaxIterations);
		}
		if let Some(cause) = self.termination {
			log::log!(self.level, "DE finished: {} after {} generations", cause, self.nit);
			if self.timing {
				log::info!("TIMING total: iter_total={:.3} s", self.t_iter_tot.as_secs_f64());
			}
		}
		self.termination
	}

	/// Candidates in order; winners replace in place and may take slot 0 at once.
	fn generation_immediate(&mut self, f: f64) -> usize {
		let mut accepted = 0;
		for i in 0..self.population.len() {
			let trial = generate_trial(
				i,
				f,
				&self.population,
				self.config.strategy,
				self.config.recombination,
				self.scaler,
				&mut self.fitness,
				&mut self.rng,
			);
			if trial.energy < self.population[i].energy {
				let new_best = trial.energy < self.population.best().energy;
				self.population.replace(i, trial);
				accepted += 1;
				if new_best {
					self.population.promote(i);
				}
			}
		}
		accepted
	}

	/// All trials against the frozen population, then selection and one promote.
	fn generation_deferred(&mut self, f: f64) -> usize {
		let trials: Vec<Individual> = (0..self.population.len())
			.map(|i| {
				generate_trial(
					i,
					f,
					&self.population,
					self.config.strategy,
					self.config.recombination,
					self.scaler,
					&mut self.fitness,
					&mut self.rng,
				)
			})
			.collect();

		let mut accepted = 0;
		for (i, trial) in trials.into_iter().enumerate() {
			if trial.energy < self.population[i].energy {
				self.population.replace(i, trial);
				accepted += 1;
			}
		}
		self.population.promote_best();
		accepted
	}

	pub fn population(&self) -> &Population {
		&self.population
	}

	pub fn best(&self) -> &Individual {
		self.population.best()
	}

	/// Best individual in user coordinates
	pub fn best_x(&self) -> Array1<f64> {
		self.scaler.to_scaled(&self.population.best().values)
	}

	/// Generations performed so far
	pub fn nit(&self) -> usize {
		self.nit
	}

	/// Objective calls so far, initialization included
	pub fn nfev(&self) -> usize {
		self.fitness.nfev()
	}

	pub fn termination(&self) -> Option<Termination> {
		self.termination
	}

	pub fn is_terminated(&self) -> bool {
		self.termination.is_some()
	}

	/// Snapshot handed to the per-generation callback
	pub fn intermediate(&self) -> DEIntermediate {
		DEIntermediate {
			x: self.best_x(),
			fun: self.population.best().energy,
			convergence: self.population.convergence(),
			iter: self.nit,
		}
	}

	/// Drive the run to termination and build the report
	pub fn finish(mut self) -> DEReport {
		let termination = loop {
			if let Some(cause) = self.step() {
				break cause;
			}
		};

		let mut population = Array2::<f64>::zeros((self.population.len(), self.scaler.len()));
		for (mut row, member) in population.rows_mut().into_iter().zip(self.population.iter()) {
			row.assign(&self.scaler.to_scaled(&member.values));
		}

		DEReport {
			x: self.best_x(),
			fun: self.population.best().energy,
			success: termination == Termination::Converged,
			message: termination.to_string(),
			termination,
			nit: self.nit,
			nfev: self.fitness.nfev(),
			elapsed: self.started.elapsed(),
			convergence: self.population.convergence(),
			population,
			population_energies: self.population.energies(),
		}
	}
}
