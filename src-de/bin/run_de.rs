use clap::Parser;
use ndarray::Array1;
use optde::{
	DEConfig, DEConfigBuilder, DEError, DEReport, Init, RecordError, Strategy, Updating,
	differential_evolution, run_recorded_differential_evolution,
};
use optde_testfunctions::{FunctionMetadata, get_function, get_function_metadata};
use std::fmt::Write as FmtWrite;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "run_de", about = "Run differential evolution on a selected benchmark function")]
struct Cli {
	/// Name of the benchmark function to optimize (use --list-functions to see available options)
	#[arg(long)]
	function: Option<String>,

	/// Dimensionality of the problem (defaults to the function's natural dimension)
	#[arg(long)]
	dim: Option<usize>,

	/// Load the whole configuration from a JSON file; tunable flags are then ignored
	#[arg(long)]
	config: Option<PathBuf>,

	/// Maximum number of generations
	#[arg(long, default_value_t = 1000)]
	maxiter: usize,

	/// Population size factor (total population = max(popsize * dim, 5))
	#[arg(long, default_value_t = 15)]
	popsize: usize,

	/// Relative convergence tolerance on the population energies
	#[arg(long, default_value_t = 0.01)]
	tol: f64,

	/// Absolute convergence tolerance on the population energies
	#[arg(long, default_value_t = 0.0)]
	atol: f64,

	/// Recombination (crossover) probability in [0, 1)
	#[arg(long, default_value_t = 0.7)]
	recombination: f64,

	/// Lower end of the mutation dithering range
	#[arg(long, default_value_t = 0.5)]
	mutation_min: f64,

	/// Upper end of the mutation dithering range
	#[arg(long, default_value_t = 1.0)]
	mutation_max: f64,

	/// Strategy (e.g. best1bin, rand2exp, currenttobest1bin)
	#[arg(long, default_value = "best1bin")]
	strategy: String,

	/// Initialization scheme: latinhypercube or random
	#[arg(long, default_value = "latinhypercube")]
	init: String,

	/// Updating policy: immediate or deferred
	#[arg(long, default_value = "immediate")]
	updating: String,

	/// Optional random seed for reproducibility
	#[arg(long)]
	seed: Option<u64>,

	/// Log every generation at info level
	#[arg(long)]
	disp: bool,

	/// Write one CSV row per generation into this directory
	#[arg(long)]
	record_dir: Option<PathBuf>,

	/// List all available functions and exit
	#[arg(long)]
	list_functions: bool,
}

fn fail(msg: impl std::fmt::Display) -> ! {
	eprintln!("Error: {msg}");
	process::exit(2);
}

fn fail_solver(e: &DEError) -> ! {
	if e.is_bounds_error() {
		fail(format!("invalid bounds: {e}"))
	} else if e.is_config_error() {
		fail(format!("invalid configuration: {e}"))
	} else {
		fail(e)
	}
}

fn build_config(args: &Cli) -> optde::Result<DEConfig> {
	let strategy: Strategy = args.strategy.parse()?;
	let init: Init = args.init.parse()?;
	let updating: Updating = args.updating.parse()?;

	let mut builder = DEConfigBuilder::new()
		.maxiter(args.maxiter)?
		.popsize(args.popsize)?
		.tol(args.tol)?
		.atol(args.atol)?
		.mutation(args.mutation_min, args.mutation_max)?
		.recombination(args.recombination)?
		.strategy(strategy)
		.init(init)
		.updating(updating)
		.disp(args.disp);
	if let Some(seed) = args.seed {
		builder = builder.seed(seed);
	}
	Ok(builder.build())
}

fn load_config(path: &PathBuf) -> DEConfig {
	let text = std::fs::read_to_string(path)
		.unwrap_or_else(|e| fail(format!("cannot read {}: {e}", path.display())));
	let config = DEConfig::from_json(&text)
		.unwrap_or_else(|e| fail(format!("cannot parse {}: {e}", path.display())));
	if let Err(e) = config.validate() {
		fail_solver(&e);
	}
	config
}

fn list_available_functions() {
	let metadata = get_function_metadata();
	let mut names: Vec<&String> = metadata.keys().collect();
	names.sort();
	println!("Available test functions ({}):", names.len());
	for name in names {
		let meta = &metadata[name];
		println!("- {:<12} {} (dims {:?})", name, meta.description, meta.dimensions);
	}
}

fn determine_dimension(args: &Cli, meta: &FunctionMetadata) -> usize {
	match args.dim {
		Some(dim) if meta.scalable => dim,
		Some(dim) if dim != meta.bounds.len() => {
			fail(format!("{} only accepts dimension {}", meta.name, meta.bounds.len()))
		}
		_ => meta.bounds.len(),
	}
}

fn format_vector(x: &Array1<f64>) -> String {
	let mut buffer = String::new();
	for (idx, value) in x.iter().enumerate() {
		if idx > 0 {
			buffer.push_str(", ");
		}
		let _ = write!(&mut buffer, "{value:.6}");
	}
	buffer
}

fn print_report(report: &DEReport) {
	println!("\nOptimization completed in {:.2?}", report.elapsed);
	println!("Status: {}", report.message);
	println!(
		"Iterations: {} | Evaluations: {} | Success: {}",
		report.nit, report.nfev, report.success
	);
	println!("Best objective: {:.6e}", report.fun);
	println!("Best parameters: [{}]", format_vector(&report.x));
}

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	let args = Cli::parse();

	if args.list_functions {
		list_available_functions();
		return;
	}

	let function_name = match &args.function {
		Some(name) => name.trim().to_lowercase(),
		None => fail("--function must be provided unless --list-functions is used."),
	};
	let metadata = get_function_metadata();
	let (meta, function) = match (metadata.get(&function_name), get_function(&function_name)) {
		(Some(meta), Some(function)) => (meta, function),
		_ => fail(format!(
			"function '{function_name}' not found. Use --list-functions to inspect available names."
		)),
	};

	let dimension = determine_dimension(&args, meta);
	let bounds = meta.bounds_for(dimension);

	let config = match &args.config {
		Some(path) => load_config(path),
		None => build_config(&args).unwrap_or_else(|e| fail_solver(&e)),
	};

	println!(
		"Running DE on '{}' ({}D) with {} strategy...",
		function_name, dimension, config.strategy
	);

	let report = match &args.record_dir {
		Some(dir) => {
			match run_recorded_differential_evolution(&function_name, function, &bounds, config, dir) {
				Ok((report, csv_path)) => {
					println!("Records saved to {}", csv_path.display());
					report
				}
				Err(RecordError::Solver(e)) => fail_solver(&e),
				Err(e) => fail(format!("recording failed: {e}")),
			}
		}
		None => differential_evolution(&function, &bounds, config)
			.unwrap_or_else(|e| fail_solver(&e)),
	};

	print_report(&report);
	if !report.success {
		process::exit(1);
	}
}
