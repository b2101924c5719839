//! Command-line surface.
//!
//! The clap arguments are generated from [`DisplayFlag`], so adding a flag
//! means touching only the flag table and [`OptionsBuilder::apply`].

use crate::options::{DisplayFlag, DisplayOptions, OptionsBuilder};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

const FILE_ARG: &str = "file";

/// Build the clap command for `rcat`.
pub fn command() -> Command {
    let command = Command::new("rcat")
        .version(crate::VERSION)
        .about("Concatenate FILE to standard output")
        .long_about(
            "Concatenate FILE to standard output.\n\n\
             With no FILE, or when FILE is -, read standard input.",
        )
        .after_help(
            "Examples:\n  \
             rcat f     Output f's contents.\n  \
             rcat       Copy standard input to standard output.\n  \
             rcat -A f  Show f with tabs, line ends and non-printing bytes made visible.",
        )
        .arg(
            Arg::new(FILE_ARG)
                .help("File to read; - or nothing reads standard input")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .index(1),
        );

    DisplayFlag::ALL.into_iter().fold(command, |command, flag| {
        let arg = Arg::new(flag.id())
            .short(flag.short())
            .help(flag.help())
            .action(ArgAction::SetTrue);
        let arg = match flag.long() {
            Some(long) => arg.long(long),
            None => arg,
        };
        command.arg(arg)
    })
}

/// Turn parsed matches into the immutable option set.
pub fn options_from_matches(matches: &ArgMatches) -> DisplayOptions {
    let flags = DisplayFlag::ALL
        .into_iter()
        .filter(|flag| matches.get_flag(flag.id()));
    let builder = OptionsBuilder::new().apply_all(flags);

    let builder = match matches.get_one::<PathBuf>(FILE_ARG) {
        Some(path) if path.as_path() != Path::new("-") => builder.file(path.clone()),
        _ => builder.stdin(),
    };

    builder.build()
}

/// Parse an argument list (program name first) without exiting the process.
///
/// `--help` and `--version` come back as errors of kind `DisplayHelp` and
/// `DisplayVersion`, as clap reports them.
pub fn try_parse_from<I, T>(args: I) -> Result<DisplayOptions, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = command().try_get_matches_from(args)?;
    Ok(options_from_matches(&matches))
}
