// #![forbid(unsafe_code)]
// #![deny(non_upper_case_globals)]
// #![deny(non_camel_case_types)]
// #![deny(non_snake_case)]
// #![deny(unused_mut)]
// #![deny(unused_variables)]
// #![deny(unused_imports)]
//#![deny(missing_docs)]
//#![deny(warnings)]

extern crate chrono;
extern crate serde_derive;

#[macro_use]
extern crate log;

mod app;
mod configuration;
mod reporter;
mod result;

use log::LevelFilter;
use std::{path::PathBuf, process::exit};
use structopt::StructOpt;

use self::app::App;
use self::{
    configuration::command_line::{LogLevel, Opt},
    configuration::constants::common::{EXIT_FAILED_CASES, EXIT_RUNNER_ERROR},
    configuration::manifest::Manifest,
};

fn main() {
    let options = Opt::from_args();

    if let Err(e) = init_logging(
        options.logging.unwrap_or(LogLevel::Info).into(),
        &options.log_output_file,
    ) {
        eprintln!("Failed to initialize logging {}", e);
        exit(EXIT_RUNNER_ERROR);
    }

    let manifest = match options.file {
        Some(file) => Manifest::from(file),
        None => Manifest::reference(),
    };

    let manifest = match manifest {
        Ok(manifest) => manifest.with_policy(options.policy.map(Into::into)),
        Err(e) => {
            error!("Failed to load manifest file configuration {}", e);
            exit(EXIT_RUNNER_ERROR);
        }
    };
    debug!("Initiated configuration {:#?}", manifest);

    let app = App::new(manifest, options.scenarios);
    let report = match app.run() {
        Ok(report) => report,
        Err(e) => {
            error!("{}", e);
            exit(EXIT_RUNNER_ERROR);
        }
    };

    if let Some(path) = options.report {
        match report.save_into_file(&path) {
            Ok(()) => info!("Report written to {}", path.display()),
            Err(e) => {
                error!("Failed to write report {}: {}", path.display(), e);
                exit(EXIT_RUNNER_ERROR);
            }
        }
    }

    if !report.is_success() {
        exit(EXIT_FAILED_CASES);
    }
}

fn init_logging(level: LevelFilter, output: &Option<PathBuf>) -> Result<(), fern::InitError> {
    let mut dispatcher = fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}:{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record
                    .line()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "".to_owned()),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout());

    if let Some(log_file) = output {
        dispatcher = dispatcher.chain(fern::log_file(log_file)?)
    }
    dispatcher.apply()?;
    info!("Logging level {} enabled", level);
    Ok(())
}
