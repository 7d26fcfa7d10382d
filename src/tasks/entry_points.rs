/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::error::Error as _;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::FailResult;
use crate::ui::logging::GlobalLogger;
use crate::ui::cli_deserialize::{CliDeserialize, LogArgs, RunArgs};
use magframe_tasks_config::{Input, YamlRead};

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        error!("{}", e);
        let mut source = e.source();
        while let Some(cause) = source {
            error!("caused by: {}", cause);
            source = cause.source();
        }

        if std::env::var_os("RUST_BACKTRACE") != Some(OsStr::new("1").to_owned()) {
            error!("\
                (If you found the above error message to be particularly lacking in \
                detail, try again with RUST_BACKTRACE=1)\
            ");
        }
        std::process::exit(1);
    });
}

// -------------------------------------------------------------------------------------

pub fn magframe() {
    wrap_result_main(|| {
        let (app, de) = <(RunArgs, LogArgs)>::augment_clap_app({
            clap::App::new("magframe")
                .about("Local frames of magnetic moments, and their supercell positions.")
        });
        let matches = app.get_matches();
        let (run_args, log_args) = de.resolve_args(&matches)?;

        let mut logger = GlobalLogger::default();
        logger.verbosity(log_args.verbosity);
        if let Some(path) = &log_args.log {
            logger.path(path);
        }
        logger.apply()?;

        let input = {
            let file = File::open(&run_args.input)
                .map_err(|e| format!("could not open {}: {}", run_args.input.display(), e))?;
            Input::from_reader(io::BufReader::new(file))?
        };
        let input = input.validate()?;

        match &run_args.output {
            Some(path) => {
                let mut w = BufWriter::new(File::create(path)?);
                crate::run(&input, run_args.format, &mut w)?;
                w.flush()?;
                info!("wrote {}", path.display());
            },
            None => {
                let stdout = io::stdout();
                let mut w = stdout.lock();
                crate::run(&input, run_args.format, &mut w)?;
                w.flush()?;
            },
        }
        Ok(())
    });
}
