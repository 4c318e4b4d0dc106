#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use ecr_cli::core::prelude::*;
use ecr_cli::extensions::solve::config::*;
use ecr_cli::extensions::solve::formats::{create_solve_result, read_problem, write_solve_result};
use ecr_cli::extensions::solve::interruption::create_interruption_quota;
use ecr_heuristics::utils::Parallelism;
use std::io::BufReader;
use std::sync::Arc;

const PROBLEM_ARG_NAME: &str = "PROBLEM";
const CONFIG_ARG_NAME: &str = "config";
const PRESET_ARG_NAME: &str = "preset";
const GENERATIONS_ARG_NAME: &str = "max-generations";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const BALANCE_ARG_NAME: &str = "balance";
const LOG_ARG_NAME: &str = "log";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves empty container repositioning problem")
        .arg(Arg::new(PROBLEM_ARG_NAME).help("Sets the problem file to use").required(true).index(1))
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(PRESET_ARG_NAME)
                .help("Specifies a named algorithm preset, overrides the one from configuration file")
                .short('p')
                .long(PRESET_ARG_NAME)
                .required(false)
                .value_parser(["quick", "medium", "standard", "full", "default"]),
        )
        .arg(
            Arg::new(GENERATIONS_ARG_NAME)
                .help("Specifies maximum number of generations")
                .short('n')
                .long(GENERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies randomization seed to avoid stochastic behavior")
                .short('s')
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(BALANCE_ARG_NAME)
                .help("Enables balance optimization mode with default weights")
                .short('b')
                .long(BALANCE_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

/// Runs solver command.
pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let problem_path = matches.get_one::<String>(PROBLEM_ARG_NAME).ok_or("problem file is not specified")?;
    let (parameters, network) = read_problem(BufReader::new(open_file(problem_path, "problem")))
        .map_err(|err| format!("cannot read problem from '{problem_path}': {err}"))?;
    let parameters = Arc::new(parameters);

    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| read_config(BufReader::new(open_file(path, "config"))))
        .transpose()?
        .unwrap_or_default();

    let preset = matches
        .get_one::<String>(PRESET_ARG_NAME)
        .map(|name| SolverPreset::from_str(name))
        .transpose()
        .map_err(|err| err.to_string())?;
    let max_generations = parse_int_value::<usize>(matches, GENERATIONS_ARG_NAME, "max generations")?;
    let seed = parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "seed")?;
    let is_balance = matches.get_flag(BALANCE_ARG_NAME);
    let is_logging = matches.get_flag(LOG_ARG_NAME);

    let mut solver_config = create_solver_config(&config, preset)?;
    if let Some(max_generations) = max_generations {
        solver_config.max_generations = max_generations;
    }
    if is_balance && solver_config.imbalance.is_none() {
        solver_config.imbalance = Some(ImbalanceConfig::default());
    }

    let logger: InfoLogger = Arc::new(|msg: &str| println!("{msg}"));
    let telemetry_mode = create_telemetry_mode(&config, is_logging, logger.clone());
    let environment = Arc::new(create_environment(&config, seed, logger));

    if !matches!(telemetry_mode, TelemetryMode::None) {
        parameters.diagnostics().iter().for_each(|msg| (environment.logger)(format!("input: {msg}").as_str()));
    }

    let solver = Solver::new(parameters.clone(), solver_config, environment)
        .map_err(|err| format!("cannot create solver: {err}"))?
        .with_telemetry_mode(telemetry_mode);
    let evaluator = solver.evaluator();

    let result = solver.solve().map_err(|err| format!("cannot find any solution: {err}"))?;

    let breakdown = evaluator.breakdown(&result.best);
    let plan = RebalanceOptimizer::new(parameters.clone(), network, create_rebalance_config(&config))
        .rebalance(&result.best);

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let solve_result = create_solve_result(parameters.as_ref(), result, &breakdown, &plan);

    write_solve_result(out_writer_func(out_result), &solve_result)
}

fn create_environment(config: &Config, seed: Option<u64>, logger: InfoLogger) -> Environment {
    let environment_config = config.environment.clone().unwrap_or_default();

    let random: Arc<dyn Random> = match seed.or(environment_config.seed) {
        Some(seed) => Arc::new(DefaultRandom::new_repeatable(seed)),
        None => Arc::new(DefaultRandom::default()),
    };

    let parallelism = environment_config.threads.map_or_else(Parallelism::default, Parallelism::new_with_cpus);

    Environment::new(random, create_interruption_quota(), parallelism, logger)
}
