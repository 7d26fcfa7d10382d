/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::path::PathBuf;

use clap::{App, Arg, ArgMatches};

use crate::FailResult;
use crate::filetypes::Format;

/// Trait used to factor out code for adding arguments to a binary and parsing them,
/// leveraging type inference to help reduce boilerplate.
pub trait CliDeserialize: Sized {
    fn augment_clap_app<'a, 'b>(app: App<'a, 'b>) -> (App<'a, 'b>, ClapDeserializer<Self>) {
        let app = Self::_augment_clap_app(app);
        let token = ClapDeserializer(Default::default());
        (app, token)
    }

    /// Don't use this. Call 'augment_clap_app' instead.
    fn _augment_clap_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b>;
    /// Don't use this. Call 'resolve_args' on the ClapDeserializer instead.
    fn _resolve_args(matches: &ArgMatches<'_>) -> FailResult<Self>;
}

/// Token of "proof" that a clap app was augmented to be capable of deserializing A.
pub struct ClapDeserializer<A>(std::marker::PhantomData<A>);

impl<A> ClapDeserializer<A>
where A: CliDeserialize,
{
    pub fn resolve_args(self, matches: &ArgMatches<'_>) -> FailResult<A>
    { A::_resolve_args(matches) }
}

// Tuple as product combinator
impl<A, B> CliDeserialize for (A, B)
where
    A: CliDeserialize,
    B: CliDeserialize,
{
    fn _augment_clap_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
        let app = A::_augment_clap_app(app);
        let app = B::_augment_clap_app(app);
        app
    }

    fn _resolve_args(matches: &ArgMatches<'_>) -> FailResult<Self>
    { Ok((A::_resolve_args(matches)?, B::_resolve_args(matches)?)) }
}

// -------------------------------------------------------------------------------------

/// Where the log goes, and how much of it.
#[derive(Debug, Clone, PartialEq)]
pub struct LogArgs {
    pub log: Option<PathBuf>,
    pub verbosity: i32,
}

impl CliDeserialize for LogArgs {
    fn _augment_clap_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
        app.args(&[
            Arg::with_name("log")
                .long("log").takes_value(true).value_name("LOGFILE")
                .help("also write the log to this file"),
            Arg::with_name("verbose")
                .short("v").long("verbose").multiple(true)
                .help("log more (can be repeated)"),
            Arg::with_name("quiet")
                .short("q").long("quiet")
                .help("only log warnings and errors"),
        ])
    }

    fn _resolve_args(m: &ArgMatches<'_>) -> FailResult<Self> {
        let verbosity = match m.is_present("quiet") {
            true => -1,
            false => m.occurrences_of("verbose") as i32,
        };
        Ok(LogArgs { log: m.value_of_os("log").map(PathBuf::from), verbosity })
    }
}

/// The input document and what to do with the table.
#[derive(Debug, Clone, PartialEq)]
pub struct RunArgs {
    pub input: PathBuf,
    pub format: Format,
    pub output: Option<PathBuf>,
}

impl CliDeserialize for RunArgs {
    fn _augment_clap_app<'a, 'b>(app: App<'a, 'b>) -> App<'a, 'b> {
        app.args(&[
            Arg::with_name("input")
                .short("i").long("input").takes_value(true).value_name("INPUT")
                .required(true)
                .help("input yaml with moments, unit cell atoms and extension factors"),
            Arg::with_name("format")
                .long("format").takes_value(true).value_name("FORMAT")
                .possible_values(&["json", "table"])
                .default_value("table")
                .help("output format"),
            Arg::with_name("output")
                .short("o").long("output").takes_value(true).value_name("OUTPUT")
                .help("write the result here instead of stdout"),
        ])
    }

    fn _resolve_args(m: &ArgMatches<'_>) -> FailResult<Self> {
        let input = m.value_of_os("input").map(PathBuf::from).ok_or("missing --input")?;
        let format = m.value_of("format").unwrap_or("table").parse::<Format>()?;
        let output = m.value_of_os("output").map(PathBuf::from);
        Ok(RunArgs { input, format, output })
    }
}
