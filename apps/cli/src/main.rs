use std::io;
use std::process::ExitCode;

use chatbox::{ChatResult, ChatboxConfig, IntentCatalog, KeywordClassifier, ResponseSelector, Session};

fn main() -> ExitCode {
    // A missing .env is fine; real variables still apply.
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("chatbox: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> ChatResult<()> {
    let config = ChatboxConfig::from_env()?;
    let catalog = IntentCatalog::load(&config.catalog_path)?;
    let classifier = KeywordClassifier::from_catalog(&catalog);
    let selector = ResponseSelector::from_seed(config.seed);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&catalog, &classifier, selector, &config);
    session.run(stdin.lock(), stdout.lock())?;
    Ok(())
}
