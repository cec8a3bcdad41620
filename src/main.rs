use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use log::{debug, LevelFilter};
use ssml_speak::app::{App, Outcome};
use ssml_speak::config::{Config, Options};
use ssml_speak::{console, Error, ExitCode};

fn main() {
    let options = match Options::try_parse() {
        Ok(options) => options,
        Err(err) => {
            let _ = err.print();
            let code = match err.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                    ExitCode::VersionOrHelpRequired
                }
                _ => ExitCode::CommandLineError,
            };
            process::exit(code.code());
        }
    };

    init_logging(options.verbose);
    debug!("ssml-speak {} starting with {:?}", ssml_speak::VERSION, options);

    let config = Config::from(options);
    let wait = config.wait_for_key;
    let mut stdout = io::stdout();

    let code = match run(config, &mut stdout) {
        Ok(Outcome::VoicesDisplayed) => console::finish(&mut stdout, "", ExitCode::Success, wait),
        Ok(_) => console::finish(
            &mut stdout,
            "Program terminated successfully.",
            ExitCode::Success,
            wait,
        ),
        Err(err) => {
            debug!("run failed: {:?}", err);
            let code = err.downcast_ref::<Error>().map_or(ExitCode::EngineError, Error::exit_code);
            console::finish(&mut stdout, &format!("{:#}", err), code, wait)
        }
    };
    process::exit(code);
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new().filter_level(level).parse_default_env().init();
}

#[cfg(windows)]
fn run<W: Write>(config: Config, out: &mut W) -> Result<Outcome> {
    use ssml_speak::engine::sapi::{SapiEngine, Session};

    let app = App::new(config)?;
    let session = Session::initialize().context("failed to initialize SAPI")?;
    let mut engine = SapiEngine::new(&session).context("failed to create the speech synthesizer")?;
    Ok(app.run(&mut engine, out)?)
}

#[cfg(not(windows))]
fn run<W: Write>(config: Config, _out: &mut W) -> Result<Outcome> {
    let _app = App::new(config)?;
    Err::<Outcome, _>(Error::EngineUnavailable).context("speech synthesis requires Windows")
}
