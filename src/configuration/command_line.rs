use crate::configuration::constants::cargo_env::CARGO_PKG_NAME;
use crate::result::DurationPolicy;
use clap::arg_enum;
use log::LevelFilter;
use std::path::PathBuf;
use structopt::StructOpt;

arg_enum! {
    #[derive(Debug)]
    pub enum LogLevel {
        Off, Error, Warn, Info, Debug, Trace,
    }
}

arg_enum! {
    #[derive(Debug, Clone, Copy)]
    pub enum PolicyArg {
        Cumulative, Recompute,
    }
}

#[derive(StructOpt, Debug)]
#[structopt(name = CARGO_PKG_NAME)]
pub struct Opt {
    /// Scenario manifest file. Supported: YAML, JSON, TOML, HJSON. Runs the built-in reference scenario when omitted
    #[structopt(parse(from_os_str))]
    pub file: Option<PathBuf>,

    /// Sets a logging level
    #[structopt(case_insensitive = true, long, short = "L", possible_values = &LogLevel::variants(), env = "LOG_LEVEL")]
    pub logging: Option<LogLevel>,

    /// FIle to which application will write logs
    #[structopt(long, short = "O", env = "LOG_OUTPUT_FILE")]
    pub log_output_file: Option<PathBuf>,

    /// Duration rule applied to every scenario, overrides the manifest
    #[structopt(case_insensitive = true, long, short = "p", possible_values = &PolicyArg::variants())]
    pub policy: Option<PolicyArg>,

    /// Run only defined scenarios, any other will be ignored
    #[structopt(long, short = "s")]
    pub scenarios: Vec<String>,

    /// File to which the JSON run report will be written
    #[structopt(long, short = "r", parse(from_os_str))]
    pub report: Option<PathBuf>,
}

impl Into<LevelFilter> for LogLevel {
    fn into(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Into<DurationPolicy> for PolicyArg {
    fn into(self) -> DurationPolicy {
        match self {
            PolicyArg::Cumulative => DurationPolicy::Cumulative,
            PolicyArg::Recompute => DurationPolicy::Recompute,
        }
    }
}
