//! Candidate solutions and the population that holds them.
//!
//! Individuals live in the normalized space `[0, 1]^n`; only the solver maps
//! them to user coordinates when it evaluates them. The population keeps its
//! best member in slot 0 after every [`Population::promote_best`] /
//! [`Population::promote`] call.

use ndarray::Array1;
use std::ops::Index;

/// A normalized parameter vector and its cached fitness value.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
	pub values: Array1<f64>,
	/// Fitness at the scaled point, `+inf` until evaluated
	pub energy: f64,
}

impl Individual {
	pub fn new(values: Array1<f64>) -> Self {
		Self { values, energy: f64::INFINITY }
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Whether every component lies inside `[0, 1]`
	pub fn is_normalized(&self) -> bool {
		self.values.iter().all(|v| (0.0..=1.0).contains(v))
	}
}

pub(crate) fn argmin(energies: impl Iterator<Item = f64>) -> (usize, f64) {
	let mut best_i = 0usize;
	let mut best_v = f64::INFINITY;
	for (i, val) in energies.enumerate() {
		if i == 0 || val < best_v {
			best_v = val;
			best_i = i;
		}
	}
	(best_i, best_v)
}

/// Ordered individuals; slot 0 is the best known candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
	members: Vec<Individual>,
}

impl Population {
	pub fn new(members: Vec<Individual>) -> Self {
		Self { members }
	}

	pub fn len(&self) -> usize {
		self.members.len()
	}

	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	pub fn best(&self) -> &Individual {
		&self.members[0]
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
		self.members.iter()
	}

	pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Individual> {
		self.members.iter_mut()
	}

	pub fn energies(&self) -> Array1<f64> {
		self.members.iter().map(|m| m.energy).collect()
	}

	/// Overwrite slot `i` with an accepted trial
	pub(crate) fn replace(&mut self, i: usize, trial: Individual) {
		self.members[i] = trial;
	}

	/// Move slot `i` to the front, the previous best takes its place
	pub(crate) fn promote(&mut self, i: usize) {
		self.members.swap(0, i);
	}

	/// Swap the lowest-energy individual into slot 0
	pub(crate) fn promote_best(&mut self) {
		let (best_i, _) = argmin(self.members.iter().map(|m| m.energy));
		self.promote(best_i);
	}

	/// Mean and standard deviation (ddof 0) of the energies
	pub fn energy_stats(&self) -> (f64, f64) {
		let energies = self.energies();
		let mean = energies.mean().unwrap_or(0.0);
		let std = energies.std(0.0);
		(mean, std)
	}

	/// `std(energies) <= atol + tol * |mean(energies)|`
	pub fn is_converged(&self, atol: f64, tol: f64) -> bool {
		let (mean, std) = self.energy_stats();
		std <= atol + tol * mean.abs()
	}

	/// Coefficient of variation `std / |mean + eps|`
	pub fn convergence(&self) -> f64 {
		let (mean, std) = self.energy_stats();
		std / (mean + f64::EPSILON).abs()
	}
}

impl Index<usize> for Population {
	type Output = Individual;

	fn index(&self, i: usize) -> &Individual {
		&self.members[i]
	}
}
