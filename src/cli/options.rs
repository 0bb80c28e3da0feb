//! Command-line options

use crate::error::{Error, Result};
use clap::{App, AppSettings, Arg, ArgMatches};

/// Everything a single invocation needs to know.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Type name, passed through verbatim to the type registry.
    pub type_name: String,

    /// Value text, scanned (or strictly parsed) later.
    pub value: String,

    /// Reject unknown types and malformed values instead of degrading.
    pub strict: bool,

    /// Emit a JSON report instead of the text layout.
    pub json: bool,

    /// Number of `-v` flags given.
    pub verbosity: u64,
}

impl Options {
    pub fn configure_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
        app.setting(AppSettings::AllowLeadingHyphen)
            .setting(AppSettings::DisableVersion)
            .arg(
                Arg::with_name("type")
                    .value_name("TYPE")
                    .index(1)
                    .help("The integer type to lay out, e.g. int32 or uint8"),
            )
            .arg(
                Arg::with_name("value")
                    .value_name("VALUE")
                    .index(2)
                    .help("The decimal value to lay out"),
            )
            .arg(
                Arg::with_name("extra")
                    .index(3)
                    .multiple(true)
                    .hidden(true),
            )
            .arg(
                Arg::with_name("strict")
                    .long("strict")
                    .help("Fail on unknown types and malformed values"),
            )
            .arg(
                Arg::with_name("json")
                    .long("json")
                    .help("Print a JSON report instead of tables"),
            )
            .arg(
                Arg::with_name("version")
                    .short("V")
                    .long("version")
                    .help("Prints version information"),
            )
            .arg(
                Arg::with_name("verbose")
                    .short("v")
                    .long("verbose")
                    .multiple(true)
                    .help("Log diagnostics to stderr (repeat for more)"),
            )
    }

    /// Construct Options from clap ArgMatches
    ///
    /// Both positionals are required; missing either one is the only
    /// argument validation done here. Arguments that are not valid UTF-8 are
    /// converted lossily rather than rejected.
    pub fn from_arg_matches(args: &ArgMatches) -> Result<Options> {
        match (args.value_of_lossy("type"), args.value_of_lossy("value")) {
            (Some(type_name), Some(value)) => Ok(Options {
                type_name: type_name.into_owned(),
                value: value.into_owned(),
                strict: args.is_present("strict"),
                json: args.is_present("json"),
                verbosity: args.occurrences_of("verbose"),
            }),
            _ => Err(Error::InsufficientArguments),
        }
    }
}
