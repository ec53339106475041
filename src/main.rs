use number_guesser::cli::{self, parse_cli};
use number_guesser::core::GameRng;
use number_guesser::session::GameSession;
use std::io;

fn main() -> io::Result<()> {
    let args = parse_cli();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let mut session = GameSession::new(args.difficulty.into(), rng);
    log::info!("number-guesser starting with seed {}", session.seed());

    let stdin = io::stdin();
    let stdout = io::stdout();
    cli::run(&mut session, stdin.lock(), &mut stdout.lock())
}
