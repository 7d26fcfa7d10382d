/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::io::Write;

use serde::Serialize;

use magframe_array_types::V3;
use magframe_exact::Surd;
use magframe_structure::{assemble, Arithmetic, Exact, Mode, Numeric};
use magframe_structure::supercell::SupercellToken;
use magframe_tasks_config::{Input, ValidatedInput, YamlRead};

use crate::FailResult;
use crate::filetypes::{Format, Output};

/// Compute the table for a validated input and write it in `format`.
pub fn run(input: &ValidatedInput, format: Format, w: &mut dyn Write) -> FailResult<()> {
    info!(
        "{} moments, {} unit cell atoms, extension {:?}, {} mode",
        input.moments.len(), input.atoms.len(), input.extension.periods(), input.mode,
    );

    match input.mode {
        Mode::Exact => write_table(&Exact, input, input.moments.clone(), format, w),
        Mode::Numeric => {
            let arith = Numeric { zero_tol: input.zero_tol };
            let moments = input.moments.iter().map(|v| v.map_ref(Surd::to_f64)).collect();
            write_table(&arith, input, moments, format, w)
        },
    }
}

/// Parse, validate and run an input document, returning the output as a string.
pub fn run_from_str(yaml: &str, format: Format) -> FailResult<String> {
    let input = Input::from_str(yaml)?.validate()?;
    let mut buf = vec![];
    run(&input, format, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

fn write_table<A>(
    arith: &A,
    input: &ValidatedInput,
    moments: Vec<V3<A::Scalar>>,
    format: Format,
    w: &mut dyn Write,
) -> FailResult<()>
where A: Arithmetic, A::Scalar: Serialize,
{
    let table = assemble(arith, &moments, &input.atoms, &input.extension)?;
    if table.is_empty() {
        warn!("no moments were given; the table has no magnetic atoms");
    }

    let labels = match input.atoms.iter().any(|a| a.label.is_some()) && !table.is_empty() {
        true => {
            let per_atom: Vec<_> = input.atoms.iter().map(|a| a.label.clone()).collect();
            Some(SupercellToken::new(&input.extension, input.atoms.len()).replicate(&per_atom))
        },
        false => None,
    };

    let output = Output { mode: input.mode, table: &table, labels: labels.as_ref().map(|v| &v[..]) };
    output.write(format, w)
}
