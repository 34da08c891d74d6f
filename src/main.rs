use std::io::{BufRead, Write};
use std::time::Duration;

use dotenv::dotenv;
use tracing::{event, info, Level};
use tracing_subscriber::EnvFilter;

use taskboard::config::Config;
use taskboard::console::{Command, ConsoleError, Session};
use taskboard::controller;
use taskboard::log;

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = Config::load()?;
    let env_filter = EnvFilter::try_from_env(log::LOG_ENV);
    log::setup(env_filter, config.log.as_ref())?;

    event!(Level::INFO, "Starting taskboard: {}", env!("FULL_VERSION"));

    let runtime = controller::build_runtime()?;
    let mut session = Session::new(runtime.handle().clone(), &config)?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;
    for line in stdin.lock().lines() {
        match line?.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => match session.execute(command) {
                Ok(lines) => {
                    for l in lines {
                        writeln!(stdout, "{}", l)?;
                    }
                }
                Err(err) => writeln!(stdout, "error: {}", err)?,
            },
            Err(ConsoleError::Empty) => {}
            Err(err) => writeln!(stdout, "error: {}", err)?,
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    info!("Stopping taskboard.");
    session.dispose();
    runtime.shutdown_timeout(Duration::from_millis(100));
    Ok(())
}
