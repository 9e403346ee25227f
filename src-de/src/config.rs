//! Solver configuration: strategy selectors, tunables and their validation.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{DEError, Result};

/// Smallest population the solver runs with, whatever the multiplier.
///
/// At exactly five members Rand2 draws one of its samples twice.
pub const MIN_POPULATION: usize = 5;

/// Differential Evolution strategy: a mutation formula paired with a crossover kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
	#[default]
	Best1Bin,
	Best1Exp,
	Best2Bin,
	Best2Exp,
	Rand1Bin,
	Rand1Exp,
	/// At the minimum population of five one of the five samples is drawn twice
	Rand2Bin,
	/// At the minimum population of five one of the five samples is drawn twice
	Rand2Exp,
	RandToBest1Bin,
	RandToBest1Exp,
	CurrentToBest1Bin,
	CurrentToBest1Exp,
}

/// Mutation formula shared by the binomial and exponential variant of a strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationBase {
	Best1,
	Best2,
	Rand1,
	Rand2,
	RandToBest1,
	CurrentToBest1,
}

impl MutationBase {
	/// How many distinct population members the formula draws
	pub fn samples(self) -> usize {
		match self {
			MutationBase::Best1 | MutationBase::CurrentToBest1 => 2,
			MutationBase::Rand1 | MutationBase::RandToBest1 => 3,
			MutationBase::Best2 => 4,
			MutationBase::Rand2 => 5,
		}
	}
}

impl Strategy {
	pub const ALL: [Strategy; 12] = [
		Strategy::Best1Bin,
		Strategy::Best1Exp,
		Strategy::Best2Bin,
		Strategy::Best2Exp,
		Strategy::Rand1Bin,
		Strategy::Rand1Exp,
		Strategy::Rand2Bin,
		Strategy::Rand2Exp,
		Strategy::RandToBest1Bin,
		Strategy::RandToBest1Exp,
		Strategy::CurrentToBest1Bin,
		Strategy::CurrentToBest1Exp,
	];

	pub fn base(self) -> MutationBase {
		match self {
			Strategy::Best1Bin | Strategy::Best1Exp => MutationBase::Best1,
			Strategy::Best2Bin | Strategy::Best2Exp => MutationBase::Best2,
			Strategy::Rand1Bin | Strategy::Rand1Exp => MutationBase::Rand1,
			Strategy::Rand2Bin | Strategy::Rand2Exp => MutationBase::Rand2,
			Strategy::RandToBest1Bin | Strategy::RandToBest1Exp => MutationBase::RandToBest1,
			Strategy::CurrentToBest1Bin | Strategy::CurrentToBest1Exp => {
				MutationBase::CurrentToBest1
			}
		}
	}

	pub fn crossover(self) -> Crossover {
		match self {
			Strategy::Best1Bin
			| Strategy::Best2Bin
			| Strategy::Rand1Bin
			| Strategy::Rand2Bin
			| Strategy::RandToBest1Bin
			| Strategy::CurrentToBest1Bin => Crossover::Binomial,
			Strategy::Best1Exp
			| Strategy::Best2Exp
			| Strategy::Rand1Exp
			| Strategy::Rand2Exp
			| Strategy::RandToBest1Exp
			| Strategy::CurrentToBest1Exp => Crossover::Exponential,
		}
	}

	fn name(self) -> &'static str {
		match self {
			Strategy::Best1Bin => "best1bin",
			Strategy::Best1Exp => "best1exp",
			Strategy::Best2Bin => "best2bin",
			Strategy::Best2Exp => "best2exp",
			Strategy::Rand1Bin => "rand1bin",
			Strategy::Rand1Exp => "rand1exp",
			Strategy::Rand2Bin => "rand2bin",
			Strategy::Rand2Exp => "rand2exp",
			Strategy::RandToBest1Bin => "randtobest1bin",
			Strategy::RandToBest1Exp => "randtobest1exp",
			Strategy::CurrentToBest1Bin => "currenttobest1bin",
			Strategy::CurrentToBest1Exp => "currenttobest1exp",
		}
	}
}

impl fmt::Display for Strategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Strategy {
	type Err = DEError;
	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		let t = s.to_lowercase().replace(['-', '_'], "");
		match t.as_str() {
			"best1bin" | "best1" => Ok(Strategy::Best1Bin),
			"best1exp" => Ok(Strategy::Best1Exp),
			"best2bin" | "best2" => Ok(Strategy::Best2Bin),
			"best2exp" => Ok(Strategy::Best2Exp),
			"rand1bin" | "rand1" => Ok(Strategy::Rand1Bin),
			"rand1exp" => Ok(Strategy::Rand1Exp),
			"rand2bin" | "rand2" => Ok(Strategy::Rand2Bin),
			"rand2exp" => Ok(Strategy::Rand2Exp),
			"randtobest1bin" | "randtobest1" => Ok(Strategy::RandToBest1Bin),
			"randtobest1exp" => Ok(Strategy::RandToBest1Exp),
			"currenttobest1bin" | "currenttobest1" => Ok(Strategy::CurrentToBest1Bin),
			"currenttobest1exp" => Ok(Strategy::CurrentToBest1Exp),
			_ => Err(DEError::UnknownVariant { kind: "strategy", name: s.to_string() }),
		}
	}
}

/// Crossover type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossover {
	/// Binomial (uniform) crossover
	Binomial,
	/// Exponential crossover
	Exponential,
}

/// Initialization scheme for the population
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Init {
	#[default]
	LatinHypercube,
	Random,
}

impl fmt::Display for Init {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Init::LatinHypercube => f.write_str("latinhypercube"),
			Init::Random => f.write_str("random"),
		}
	}
}

impl FromStr for Init {
	type Err = DEError;
	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.to_lowercase().replace(['-', '_'], "").as_str() {
			"latinhypercube" | "lhs" => Ok(Init::LatinHypercube),
			"random" => Ok(Init::Random),
			_ => Err(DEError::UnknownVariant { kind: "init", name: s.to_string() }),
		}
	}
}

/// When accepted trials become visible to the rest of the generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Updating {
	/// Replace as soon as a trial wins; later candidates see the new best
	#[default]
	Immediate,
	/// Build every trial against the frozen population, then replace
	Deferred,
}

impl fmt::Display for Updating {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Updating::Immediate => f.write_str("immediate"),
			Updating::Deferred => f.write_str("deferred"),
		}
	}
}

impl FromStr for Updating {
	type Err = DEError;
	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"immediate" => Ok(Updating::Immediate),
			"deferred" => Ok(Updating::Deferred),
			_ => Err(DEError::UnknownVariant { kind: "updating", name: s.to_string() }),
		}
	}
}

/// Dithering range `[min, max)` for the mutation factor F, `0 <= min < max < 2`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mutation {
	pub min: f64,
	pub max: f64,
}

impl Default for Mutation {
	fn default() -> Self {
		Mutation { min: 0.5, max: 1.0 }
	}
}

impl Mutation {
	pub fn new(min: f64, max: f64) -> Result<Self> {
		let m = Mutation { min, max };
		m.validate()?;
		Ok(m)
	}

	pub fn validate(&self) -> Result<()> {
		let in_range = |v: f64| v.is_finite() && (0.0..2.0).contains(&v);
		if in_range(self.min) && in_range(self.max) && self.min < self.max {
			Ok(())
		} else {
			Err(DEError::InvalidMutationRange { min: self.min, max: self.max })
		}
	}

	/// Draw the generation's F
	pub(crate) fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
		rng.random_range(self.min..self.max)
	}
}

fn check_recombination(rate: f64) -> Result<()> {
	if (0.0..1.0).contains(&rate) {
		Ok(())
	} else {
		Err(DEError::InvalidRecombination { rate })
	}
}

fn check_tolerance(name: &'static str, value: f64) -> Result<()> {
	if value.is_finite() && value >= 0.0 {
		Ok(())
	} else {
		Err(DEError::InvalidTolerance { name, value })
	}
}

fn check_maxiter(maxiter: usize) -> Result<()> {
	if maxiter >= 1 { Ok(()) } else { Err(DEError::InvalidMaxIterations { maxiter }) }
}

fn check_popsize(popsize: usize) -> Result<()> {
	if popsize >= 1 { Ok(()) } else { Err(DEError::InvalidPopulationSize { popsize }) }
}

/// Configuration for the Differential Evolution optimizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DEConfig {
	pub maxiter: usize,
	/// Population multiplier: NP = max(popsize * n, 5)
	pub popsize: usize,
	pub tol: f64,
	pub atol: f64,
	pub mutation: Mutation,
	/// CR in [0, 1)
	pub recombination: f64,
	pub strategy: Strategy,
	pub init: Init,
	pub updating: Updating,
	pub seed: Option<u64>,
	/// Log progress at info level
	pub disp: bool,
}

impl Default for DEConfig {
	fn default() -> Self {
		Self {
			maxiter: 1000,
			popsize: 15,
			tol: 1e-2,
			atol: 0.0,
			mutation: Mutation::default(),
			recombination: 0.7,
			strategy: Strategy::default(),
			init: Init::default(),
			updating: Updating::default(),
			seed: None,
			disp: false,
		}
	}
}

impl DEConfig {
	/// Check every tunable; run again before each solve since fields are public.
	pub fn validate(&self) -> Result<()> {
		check_maxiter(self.maxiter)?;
		check_popsize(self.popsize)?;
		check_tolerance("tol", self.tol)?;
		check_tolerance("atol", self.atol)?;
		self.mutation.validate()?;
		check_recombination(self.recombination)
	}

	/// Population size for an `n`-variable problem; fails when `popsize * n` overflows
	pub fn population_size(&self, n: usize) -> Result<usize> {
		self.popsize
			.checked_mul(n)
			.map(|npop| npop.max(MIN_POPULATION))
			.ok_or(DEError::InvalidPopulationSize { popsize: self.popsize })
	}

	pub fn from_json(s: &str) -> std::result::Result<Self, serde_json::Error> {
		serde_json::from_str(s)
	}
}

/// Fluent builder for `DEConfig`.
///
/// Numeric setters validate their argument and fail at the call site.
#[derive(Debug, Clone, Default)]
pub struct DEConfigBuilder {
	cfg: DEConfig,
}

impl DEConfigBuilder {
	pub fn new() -> Self {
		Self { cfg: DEConfig::default() }
	}
	pub fn maxiter(mut self, v: usize) -> Result<Self> {
		check_maxiter(v)?;
		self.cfg.maxiter = v;
		Ok(self)
	}
	pub fn popsize(mut self, v: usize) -> Result<Self> {
		check_popsize(v)?;
		self.cfg.popsize = v;
		Ok(self)
	}
	pub fn tol(mut self, v: f64) -> Result<Self> {
		check_tolerance("tol", v)?;
		self.cfg.tol = v;
		Ok(self)
	}
	pub fn atol(mut self, v: f64) -> Result<Self> {
		check_tolerance("atol", v)?;
		self.cfg.atol = v;
		Ok(self)
	}
	pub fn mutation(mut self, min: f64, max: f64) -> Result<Self> {
		self.cfg.mutation = Mutation::new(min, max)?;
		Ok(self)
	}
	pub fn recombination(mut self, v: f64) -> Result<Self> {
		check_recombination(v)?;
		self.cfg.recombination = v;
		Ok(self)
	}
	pub fn strategy(mut self, v: Strategy) -> Self {
		self.cfg.strategy = v;
		self
	}
	pub fn init(mut self, v: Init) -> Self {
		self.cfg.init = v;
		self
	}
	pub fn updating(mut self, v: Updating) -> Self {
		self.cfg.updating = v;
		self
	}
	pub fn seed(mut self, v: u64) -> Self {
		self.cfg.seed = Some(v);
		self
	}
	pub fn disp(mut self, v: bool) -> Self {
		self.cfg.disp = v;
		self
	}
	pub fn build(self) -> DEConfig {
		self.cfg
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let cfg = DEConfig::default();
		assert_eq!(cfg.strategy, Strategy::Best1Bin);
		assert_eq!(cfg.init, Init::LatinHypercube);
		assert_eq!(cfg.updating, Updating::Immediate);
		assert_eq!(cfg.mutation, Mutation { min: 0.5, max: 1.0 });
		assert_eq!(cfg.recombination, 0.7);
		assert_eq!(cfg.popsize, 15);
		assert_eq!(cfg.maxiter, 1000);
		assert_eq!(cfg.atol, 0.0);
		assert_eq!(cfg.tol, 0.01);
		assert!(cfg.validate().is_ok());
	}

	#[test]
	fn test_population_floor() {
		let cfg = DEConfigBuilder::new().popsize(1).unwrap().build();
		assert_eq!(cfg.population_size(1), Ok(5));
		assert_eq!(cfg.population_size(7), Ok(7));
		assert_eq!(DEConfig::default().population_size(2), Ok(30));
	}

	#[test]
	fn test_population_size_overflow() {
		let cfg = DEConfig { popsize: usize::MAX / 2, ..DEConfig::default() };
		assert!(cfg.validate().is_ok());
		assert_eq!(cfg.population_size(2), Ok(usize::MAX - 1));
		assert_eq!(
			cfg.population_size(3),
			Err(DEError::InvalidPopulationSize { popsize: usize::MAX / 2 })
		);
	}

	#[test]
	fn test_builder_rejects_at_assignment() {
		assert_eq!(
			DEConfigBuilder::new().maxiter(0).unwrap_err(),
			DEError::InvalidMaxIterations { maxiter: 0 }
		);
		assert!(DEConfigBuilder::new().popsize(0).is_err());
		assert!(DEConfigBuilder::new().tol(-1e-3).is_err());
		assert!(DEConfigBuilder::new().atol(f64::NAN).is_err());
		assert!(DEConfigBuilder::new().recombination(1.0).is_err());
		assert!(DEConfigBuilder::new().recombination(-0.1).is_err());
		assert!(DEConfigBuilder::new().recombination(0.0).is_ok());
		assert!(DEConfigBuilder::new().mutation(0.8, 0.5).is_err());
		assert!(DEConfigBuilder::new().mutation(0.5, 2.0).is_err());
		assert!(DEConfigBuilder::new().mutation(-0.1, 1.0).is_err());
		assert!(DEConfigBuilder::new().mutation(0.5, f64::INFINITY).is_err());
		assert!(DEConfigBuilder::new().mutation(0.0, 1.99).is_ok());
	}

	#[test]
	fn test_validate_catches_direct_mutation() {
		let mut cfg = DEConfig::default();
		cfg.recombination = 1.5;
		assert_eq!(cfg.validate(), Err(DEError::InvalidRecombination { rate: 1.5 }));
		let mut cfg = DEConfig::default();
		cfg.mutation = Mutation { min: 1.0, max: 1.0 };
		assert!(cfg.validate().is_err());
	}

	#[test]
	fn test_strategy_decomposition() {
		for s in Strategy::ALL {
			let reparsed: Strategy = s.to_string().parse().unwrap();
			assert_eq!(reparsed, s);
		}
		assert_eq!(Strategy::Rand2Exp.base(), MutationBase::Rand2);
		assert_eq!(Strategy::Rand2Exp.crossover(), Crossover::Exponential);
		assert_eq!(Strategy::CurrentToBest1Bin.base().samples(), 2);
		assert_eq!(Strategy::Best2Bin.base().samples(), 4);
		let bin = Strategy::ALL.iter().filter(|s| s.crossover() == Crossover::Binomial).count();
		assert_eq!(bin, 6);
	}

	#[test]
	fn test_parse_selectors() {
		assert_eq!("current-to-best1exp".parse::<Strategy>(), Ok(Strategy::CurrentToBest1Exp));
		assert_eq!("Rand_To_Best1Bin".parse::<Strategy>(), Ok(Strategy::RandToBest1Bin));
		assert_eq!("lhs".parse::<Init>(), Ok(Init::LatinHypercube));
		assert_eq!("deferred".parse::<Updating>(), Ok(Updating::Deferred));
		assert_eq!(
			"best3bin".parse::<Strategy>(),
			Err(DEError::UnknownVariant { kind: "strategy", name: "best3bin".into() })
		);
		assert!("sobol".parse::<Init>().is_err());
	}

	#[test]
	fn test_config_json() {
		let cfg = DEConfig::from_json(
			r#"{"strategy": "rand2exp", "updating": "deferred", "maxiter": 50, "seed": 3}"#,
		)
		.unwrap();
		assert_eq!(cfg.strategy, Strategy::Rand2Exp);
		assert_eq!(cfg.updating, Updating::Deferred);
		assert_eq!(cfg.maxiter, 50);
		assert_eq!(cfg.seed, Some(3));
		assert_eq!(cfg.popsize, 15);
		let back = serde_json::to_string(&cfg).unwrap();
		assert!(back.contains("\"latinhypercube\""));
	}
}
