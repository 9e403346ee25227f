use optde::{Crossover, DEConfigBuilder, DEError, MutationBase, Strategy, Updating, differential_evolution};
use optde_testfunctions::{ackley, booth, mccormick, sphere};

fn config(strategy: Strategy, seed: u64) -> optde::DEConfig {
	DEConfigBuilder::new()
		.seed(seed)
		.maxiter(600)
		.unwrap()
		.tol(0.0)
		.unwrap()
		.atol(1e-12)
		.unwrap()
		.strategy(strategy)
		.build()
}

#[test]
fn test_every_strategy_solves_sphere() {
	for (k, strategy) in Strategy::ALL.into_iter().enumerate() {
		let report = differential_evolution(&sphere, &[(-5.12, 5.12); 3], config(strategy, k as u64)).unwrap();
		assert!(report.fun < 1e-6, "{}: {}", strategy, report.fun);
	}
}

#[test]
fn test_every_strategy_solves_booth_deferred() {
	for strategy in Strategy::ALL {
		let mut cfg = config(strategy, 77);
		cfg.updating = Updating::Deferred;
		let report = differential_evolution(&booth, &[(-10.0, 10.0); 2], cfg).unwrap();
		assert!((report.x[0] - 1.0).abs() < 1e-2, "{}: {:?}", strategy, report.x);
		assert!((report.x[1] - 3.0).abs() < 1e-2, "{}: {:?}", strategy, report.x);
	}
}

#[test]
fn test_de_mccormick() {
	let report =
		differential_evolution(&mccormick, &[(-1.5, 4.0), (-3.0, 4.0)], config(Strategy::Best1Bin, 4)).unwrap();
	assert!((report.fun + 1.9133).abs() < 1e-3, "f = {}", report.fun);
	assert!((report.x[0] + 0.54719).abs() < 1e-2);
	assert!((report.x[1] + 1.54719).abs() < 1e-2);
}

#[test]
fn test_de_ackley_escapes_local_minima() {
	let report =
		differential_evolution(&ackley, &[(-32.768, 32.768); 2], config(Strategy::Rand1Bin, 6)).unwrap();
	assert!(report.fun < 1e-4, "f = {}", report.fun);
}

#[test]
fn test_strategy_names() {
	for strategy in Strategy::ALL {
		let name = strategy.to_string();
		assert_eq!(name.parse::<Strategy>().unwrap(), strategy);
	}
	assert_eq!("best1bin".parse::<Strategy>().unwrap(), Strategy::Best1Bin);
	assert_eq!("rand-to-best1-exp".parse::<Strategy>().unwrap(), Strategy::RandToBest1Exp);
	assert_eq!(Strategy::CurrentToBest1Exp.base(), MutationBase::CurrentToBest1);
	assert_eq!(Strategy::Rand2Exp.crossover(), Crossover::Exponential);
	assert!(matches!(
		"best3bin".parse::<Strategy>(),
		Err(DEError::UnknownVariant { kind: "strategy", .. })
	));
}
