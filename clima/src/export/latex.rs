use std::fmt::{self, Write};
use std::path::Path;

use clima_core::{ClimaError, TableWriter, TypesetTable};

use super::atomic::write_atomic;

/// Renders tables as a booktabs `table` float with caption and label.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatexTableWriter;

impl LatexTableWriter {
    /// Create the writer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render `table` to a LaTeX string.
    ///
    /// Grouped headers become `\multicolumn` cells with a `\cmidrule` under
    /// each group.
    ///
    /// # Errors
    /// Returns `ClimaError::InvalidArg` if a row width or the group spans do not
    /// match the number of columns.
    pub fn render(table: &TypesetTable) -> Result<String, ClimaError> {
        let width = table.columns.len();
        if let Some((index, _)) = table.rows.iter().find(|(_, cells)| cells.len() != width) {
            return Err(ClimaError::InvalidArg(format!(
                "table '{}': row '{index}' does not have {width} cells",
                table.name
            )));
        }
        let spanned: usize = table.groups.iter().map(|g| g.span).sum();
        if !table.groups.is_empty() && spanned != width {
            return Err(ClimaError::InvalidArg(format!(
                "table '{}': groups span {spanned} of {width} columns",
                table.name
            )));
        }

        let mut out = String::new();
        write_document(&mut out, table, width).map_err(|e| {
            ClimaError::Data(format!("table '{}': latex rendering failed: {e}", table.name))
        })?;
        Ok(out)
    }
}

fn write_document(out: &mut impl Write, table: &TypesetTable, width: usize) -> fmt::Result {
    writeln!(out, "\\begin{{table}}")?;
    writeln!(out, "\\centering")?;
    writeln!(out, "\\caption{{{}}}", escape(&table.caption))?;
    writeln!(out, "\\label{{{}}}", table.label)?;
    writeln!(out, "\\begin{{tabular}}{{l{}}}", "r".repeat(width))?;
    writeln!(out, "\\toprule")?;

    if !table.groups.is_empty() {
        let heads: Vec<String> = table
            .groups
            .iter()
            .map(|g| format!("\\multicolumn{{{}}}{{c}}{{{}}}", g.span, escape(&g.label)))
            .collect();
        writeln!(out, " & {} \\\\", heads.join(" & "))?;
        let mut first = 2;
        let rules: Vec<String> = table
            .groups
            .iter()
            .map(|g| {
                let rule = format!("\\cmidrule(lr){{{}-{}}}", first, first + g.span - 1);
                first += g.span;
                rule
            })
            .collect();
        writeln!(out, "{}", rules.join(" "))?;
    }

    let header: Vec<String> = std::iter::once(escape(&table.index_header))
        .chain(table.columns.iter().map(|c| escape(c)))
        .collect();
    writeln!(out, "{} \\\\", header.join(" & "))?;
    writeln!(out, "\\midrule")?;
    for (index, cells) in &table.rows {
        let line: Vec<String> = std::iter::once(escape(index))
            .chain(cells.iter().map(|c| escape(c)))
            .collect();
        writeln!(out, "{} \\\\", line.join(" & "))?;
    }
    writeln!(out, "\\bottomrule")?;
    writeln!(out, "\\end{{tabular}}")?;
    writeln!(out, "\\end{{table}}")
}

impl TableWriter for LatexTableWriter {
    fn name(&self) -> &'static str {
        "latex"
    }

    fn extension(&self) -> &'static str {
        "tex"
    }

    fn write_table(&self, table: &TypesetTable, path: &Path) -> Result<(), ClimaError> {
        write_atomic(path, Self::render(table)?.as_bytes())
    }
}

/// Escape the characters LaTeX treats specially in text mode.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '\\' => out.push_str("\\textbackslash{}"),
            other => out.push(other),
        }
    }
    out
}
