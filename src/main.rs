use clap::Parser;
use std::process::ExitCode;
use translation_table::{cli, commands, config, logging};
use cli::Cli;
use config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = Config::load().and_then(|config| {
        let mut stdout = std::io::stdout().lock();
        commands::run(cli.command, config, &mut stdout)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("エラー: {}", e);
            ExitCode::FAILURE
        }
    }
}
