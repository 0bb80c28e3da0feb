//! CLI support for non-command bits

use crate::cli::{show, Options};
use crate::error::{Error, Result};
use crate::types;
use clap::{App, ErrorKind};
use std::ffi::OsString;
use std::io::{self, Write};
use tracing::level_filters::LevelFilter;

/// Build the clap app with every argument the visualizer accepts.
pub fn app<'a, 'b>() -> App<'a, 'b> {
    Options::configure_app(app_from_crate!())
}

/// Write the program name and version.
pub fn write_version<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{} {}", crate_name!(), crate_version!())
}

/// Write the message shown when `<type>` or `<value>` is missing.
pub fn write_usage<W: Write>(out: &mut W, program: &str) -> io::Result<()> {
    writeln!(
        out,
        "Insufficient arguments! Usage: {} <type> <value>",
        program
    )?;
    writeln!(out, "Example: {} int32 309", program)?;
    writeln!(out, "Available data types: {}", types::available_names())
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // A subscriber may already be installed when run more than once in a
    // process; the first one wins.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

fn invoke<W: Write>(args: Vec<OsString>, out: &mut W) -> Result<()> {
    let matches = app().get_matches_from_safe(args)?;
    if matches.is_present("version") {
        return Ok(write_version(out)?);
    }

    let opts = Options::from_arg_matches(&matches)?;

    init_logging(opts.verbosity);
    show(&opts, out)
}

/// Run one invocation and return its process exit code.
///
/// `args` includes the program name. Layouts, usage, help and version go to
/// `out`; errors go to `err`.
pub fn run<I, T, W, E>(args: I, out: &mut W, err: &mut E) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
    E: Write,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = args
        .first()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| crate_name!().to_string());

    let reported = match invoke(args, out) {
        Ok(()) => return 0,
        Err(Error::InsufficientArguments) => write_usage(out, &program),
        Err(Error::Cli(e)) => match e.kind {
            ErrorKind::HelpDisplayed => match writeln!(out, "{}", e.message) {
                Ok(()) => return 0,
                Err(e) => Err(e),
            },
            _ => writeln!(err, "{}", e.message),
        },
        Err(e) => writeln!(err, "error: {}", e),
    };

    if let Err(e) = reported {
        let _ = writeln!(err, "error: {}", e);
    }

    1
}

pub fn main() -> i32 {
    let stdout = io::stdout();
    let stderr = io::stderr();

    run(std::env::args_os(), &mut stdout.lock(), &mut stderr.lock())
}
