use clap::Parser;
use numsign_cli::ConsoleCli;

fn main() {
    // Logs go to stderr so stdout carries only the prompt and the result.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = ConsoleCli::parse();
    std::process::exit(cli.run());
}
