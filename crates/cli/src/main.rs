use std::io::{stdout, Write};
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};
use plugconf_cli::cli_args::{Action, Args};
use plugconf_cli::report;
use plugconf_core::error::{Error, Result};
use plugconf_core::{codec, config, file_handling, generator};

fn execute() -> Result<()> {
    let args = Args::parse();

    let config_path = match args.action() {
        Action::Generate(path) => {
            generator::generate_config(&path)?;
            println!("Example configuration written to `{path}`");
            return Ok(());
        }
        Action::Print | Action::Summary => config::get_config_path(&args.config_path),
    };
    debug!("Config path: `{}`", config_path);

    let options = args.load_options();
    info!(
        "Running directives with `{}`, {:?} in total",
        options.shell, options.timeout
    );
    let loaded = file_handling::load_config_with(&config_path, &options)?;

    if args.action() == Action::Print {
        let mut stdout = stdout();
        stdout
            .write_all(&codec::encode(&loaded)?)
            .and_then(|()| stdout.flush())
            .map_err(Error::Stdio)?;
    } else {
        println!("{}", report::summarize(&loaded));
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
