/* ************************************************************************ **
** This file is part of magframe, and is licensed under EITHER the MIT      **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Output formats for a computed table.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use itertools::Itertools;
use serde::Serialize;

use magframe_array_types::V3;
use magframe_structure::{MagTable, Mode};

use crate::FailResult;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Format {
    /// One JSON object with an array per quantity.
    Json,
    /// Human-readable, one row per column of the table.
    Table,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Format, String> {
        match s {
            "json" => Ok(Format::Json),
            "table" => Ok(Format::Table),
            _ => Err(format!("unknown output format {:?}", s)),
        }
    }
}

/// A table plus the metadata written alongside it.
pub struct Output<'a, X> {
    pub mode: Mode,
    pub table: &'a MagTable<X>,
    /// Per-replica labels, if any unit-cell atom had one.
    pub labels: Option<&'a [Option<String>]>,
}

#[derive(Serialize)]
struct JsonOutput<'a, X> {
    mode: Mode,
    moments: &'a [V3<X>],
    magnitudes: &'a [X],
    e1: &'a [V3<X>],
    e2: &'a [V3<X>],
    e3: &'a [V3<X>],
    positions: &'a [V3],
    /// `null` when there are no magnetic atoms.
    atom: Option<&'a [usize]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    labels: Option<&'a [Option<String>]>,
}

impl<'a, X> Output<'a, X>
where X: Serialize + fmt::Display,
{
    pub fn write(&self, format: Format, w: &mut dyn Write) -> FailResult<()> {
        match format {
            Format::Json => self.write_json(w),
            Format::Table => self.write_table(w),
        }
    }

    fn write_json(&self, w: &mut dyn Write) -> FailResult<()> {
        let table = self.table;
        let atom = match table.atom.is_sentinel() {
            true => None,
            false => Some(table.atom.as_slice()),
        };
        let json = JsonOutput {
            mode: self.mode,
            moments: &table.moments,
            magnitudes: &table.frames.magnitudes,
            e1: &table.frames.e1,
            e2: &table.frames.e2,
            e3: &table.frames.e3,
            positions: &table.positions,
            atom,
            labels: self.labels,
        };
        serde_json::to_writer_pretty(&mut *w, &json)?;
        writeln!(w)?;
        Ok(())
    }

    fn write_table(&self, w: &mut dyn Write) -> FailResult<()> {
        let table = self.table;
        writeln!(w, "# mode: {}", self.mode)?;
        if table.atom.is_sentinel() {
            writeln!(w, "# no magnetic atoms")?;
            return Ok(());
        }

        let mut header = vec!["col", "atom"];
        if self.labels.is_some() {
            header.push("label");
        }
        header.extend_from_slice(&["position", "|m|", "moment", "e1", "e2", "e3"]);

        let mut rows = vec![header.into_iter().map(String::from).collect::<Vec<_>>()];
        for i in 0..table.len() {
            let (column, (position, atom)) = match (table.column(i), table.replica(i)) {
                (Some(c), Some(r)) => (c, r),
                _ => break,
            };
            let mut row = vec![i.to_string(), atom.to_string()];
            if let Some(labels) = self.labels {
                row.push(labels[i].clone().unwrap_or_else(|| "-".to_string()));
            }
            row.push(position.to_string());
            row.push(column.frame.magnitude.to_string());
            row.push(column.moment.to_string());
            row.push(column.frame.e1.to_string());
            row.push(column.frame.e2.to_string());
            row.push(column.frame.e3.to_string());
            rows.push(row);
        }
        write_aligned(w, &rows)
    }
}

fn write_aligned(w: &mut dyn Write, rows: &[Vec<String>]) -> FailResult<()> {
    let num_cols = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    let widths: Vec<_> = (0..num_cols)
        .map(|c| rows.iter().filter_map(|r| r.get(c)).map(|s| s.chars().count()).max().unwrap_or(0))
        .collect();

    for (r, row) in rows.iter().enumerate() {
        let line = row.iter().zip(&widths)
            .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
            .join("  ");
        let prefix = match r { 0 => "# ", _ => "  " };
        writeln!(w, "{}{}", prefix, line.trim_end())?;
    }
    Ok(())
}
