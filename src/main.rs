use std::io;

use dotenvy::dotenv;
use tracing::info;
use tracing_appender::rolling;

use lms::config::Config;
use lms::shell::Shell;
use lms::system::LeaveSystem;

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env();

    // Rolling daily log; the console stays reserved for the menu.
    let file_appender = rolling::daily(&config.log_dir, "lms.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Leave management system starting...");

    let mut system = LeaveSystem::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), &config);
    shell.run(&mut system)?;

    info!("Leave management system shut down");
    Ok(())
}
