//! Plain-text rendering shared by every table and view.
//!
//! Output is one header line and one line per row. The first column is the
//! row id, headed by [`PrintConfig::id_label`] and as wide as the larger of
//! the label and the widest id recorded in the schema. Each further column
//! is left-aligned to its schema width. Trailing whitespace is trimmed and
//! every line ends with `\n`, so both layouts render a logical table to the
//! same bytes.

use std::fmt::{self, Write};

use osdf_core::{HasColumns, HasRows};

use crate::config::PrintConfig;

/// Write `source` to `out` under `config`.
pub fn render<S, W>(source: &S, config: &PrintConfig, out: &mut W) -> fmt::Result
where
    S: HasColumns + HasRows + ?Sized,
    W: Write + ?Sized,
{
    let meta = source.column_metadata();
    let id_width = config
        .id_label
        .chars()
        .count()
        .max(meta.max_id().display_width());
    let gap = " ".repeat(config.column_padding);

    let mut line = String::new();
    write!(line, "{:<id_width$}", config.id_label)?;
    for column in meta.iter() {
        write!(line, "{gap}{:<width$}", column.name(), width = column.width())?;
    }
    finish_line(&mut line, out)?;

    let rows = source.row_count();
    let shown = config.max_rows.map_or(rows, |max| max.min(rows));
    for position in 0..shown {
        write!(line, "{:<id_width$}", source.row_id(position))?;
        for (index, column) in meta.iter().enumerate() {
            let datum = source.datum(position, index);
            write!(line, "{gap}{:<width$}", datum, width = column.width())?;
        }
        finish_line(&mut line, out)?;
    }
    if shown < rows {
        writeln!(out, "... {} more rows", rows - shown)?;
    }
    Ok(())
}

/// Render to a new string.
pub fn to_text<S>(source: &S, config: &PrintConfig) -> String
where
    S: HasColumns + HasRows + ?Sized,
{
    Rendered { source, config }.to_string()
}

struct Rendered<'a, S: ?Sized> {
    source: &'a S,
    config: &'a PrintConfig,
}

impl<S> fmt::Display for Rendered<'_, S>
where
    S: HasColumns + HasRows + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self.source, self.config, f)
    }
}

fn finish_line<W: Write + ?Sized>(line: &mut String, out: &mut W) -> fmt::Result {
    out.write_str(line.trim_end())?;
    out.write_char('\n')?;
    line.clear();
    Ok(())
}
