/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Everything that sits between the command line and `magframe-structure`:
//! logging, argument parsing, reading the input document, and writing
//! the resulting table.

#[macro_use] extern crate serde_derive;
#[macro_use] extern crate log;

pub type FailResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

mod ui {
    pub mod logging;
    pub mod cli_deserialize;
}
mod filetypes;
mod cmd;

pub mod entry_points;

pub use crate::cmd::{run, run_from_str};
pub use crate::filetypes::Format;
pub use magframe_tasks_config::{Input, ValidatedInput, YamlRead};
