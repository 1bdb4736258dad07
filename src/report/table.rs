//! Plain-text rendering of a report.
//!
//! Fixed-width columns separated by two spaces, a dashed rule under the
//! header, values right-aligned. Headers get at least two columns of padding.

use std::fmt;

use super::Report;

pub const HEADERS: [&str; 6] = [
    "Key Size",
    "Iteration Count",
    "Encrypt Mean Time",
    "Encrypt Std-Dev",
    "Decrypt Mean Time",
    "Decrypt Std-Dev",
];

const HEADER_PADDING: usize = 2;
const SEPARATOR: &str = "  ";

impl Report {
    fn cells(&self) -> Vec<[String; 6]> {
        self.rows
            .iter()
            .map(|row| {
                [
                    row.key_size.bits().to_string(),
                    row.iterations.to_string(),
                    format!("{:.6}", row.encrypt.mean),
                    format!("{:.6}", row.encrypt.std_dev),
                    format!("{:.6}", row.decrypt.mean),
                    format!("{:.6}", row.decrypt.std_dev),
                ]
            })
            .collect()
    }

    /// The table alone, without the provider heading
    pub fn render_table(&self) -> String {
        let cells = self.cells();

        let widths: Vec<usize> = HEADERS
            .iter()
            .enumerate()
            .map(|(i, header)| {
                cells
                    .iter()
                    .map(|row| row[i].len())
                    .fold(header.chars().count() + HEADER_PADDING, usize::max)
            })
            .collect();

        let mut lines = Vec::with_capacity(cells.len() + 2);
        lines.push(join(HEADERS.iter().copied(), &widths));
        lines.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join(SEPARATOR),
        );
        for row in &cells {
            lines.push(join(row.iter().map(String::as_str), &widths));
        }

        lines.join("\n")
    }
}

fn join<'a>(values: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    values
        .zip(widths)
        .map(|(value, width)| format!("{:>width$}", value, width = *width))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Provider: {}", self.provider)?;
        writeln!(f)?;
        writeln!(f, "{}", self.render_table())
    }
}
