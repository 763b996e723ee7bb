use std::io::{self, Write};
use std::process::ExitCode;

use pwd_gen::{GeneratorConfig, TerminalPrompt, generate_password};
use secrecy::ExposeSecret;

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

#[cfg(feature = "tracing")]
fn setup_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    #[cfg(feature = "tracing")]
    setup_tracing();

    let config = GeneratorConfig::from_env();
    let stdin = io::stdin();
    let mut prompt = TerminalPrompt::new(stdin.lock(), io::stderr());

    let outcome = generate_password(&config, &mut prompt);
    eprintln!();

    match outcome.password() {
        Some(password) => {
            let mut out = io::stdout().lock();
            let _ = writeln!(out, "{}", password.expose_secret());
            let _ = out.flush();
            eprintln!("{}", outcome.feedback());
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("{RED}{}{RESET}", outcome.feedback());
            ExitCode::FAILURE
        }
    }
}
