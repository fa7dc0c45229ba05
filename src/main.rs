use deontic::cli::{
    config::Config,
    run::{run_check, stdin_to_string},
};

fn main() -> Result<(), ()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let config = Config::default();
    let source = stdin_to_string().map_err(|e| eprintln!("failed to read stdin: {}", e))?;
    let mut stdout = std::io::stdout().lock();
    run_check(config, source, &mut stdout).map(drop).map_err(|e| eprintln!("~ ~ ERROR: {} ~ ~", e))
}
