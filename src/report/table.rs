//! Plain text tables
//!
//! Columns are separated by two spaces and a dashed rule sits under the
//! headers. Every column is at least two characters wider than its header.
//! Numeric columns are right-aligned, text columns left-aligned. When a row
//! is wider than the header row, the missing leading headers are blank.

/// One table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Left-aligned text
    Text(String),
    /// Right-aligned number, `None` renders as `nan`
    Number(Option<f64>),
}

impl Cell {
    /// Text cell.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Numeric cell.
    #[must_use]
    pub const fn number(value: Option<f64>) -> Self {
        Self::Number(value)
    }

    fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(Some(value)) => format_general(*value),
            Self::Number(None) => "nan".to_string(),
        }
    }

    const fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }
}

/// Format a float with 6 significant digits, trailing zeros removed.
///
/// Scientific notation is used below `1e-4` and from `1e6` upward.
///
/// ```rust
/// use sense_eval::report::format_general;
///
/// assert_eq!(format_general(5.0 / 6.0), "0.833333");
/// assert_eq!(format_general(1.0), "1");
/// assert_eq!(format_general(0.0), "0");
/// assert_eq!(format_general(0.5), "0.5");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_general(value: f64) -> String {
    const PRECISION: i32 = 6;

    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let inf = if value > 0.0 { "inf" } else { "-inf" };
        return inf.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let exponent = value.abs().log10().floor() as i32;
    if exponent < -4 || exponent >= PRECISION {
        let formatted = format!("{:.*e}", (PRECISION - 1) as usize, value);
        let (mantissa, exp) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
        let exp: i32 = exp.parse().unwrap_or(0);
        let sign = if exp < 0 { '-' } else { '+' };
        return format!("{}e{sign}{:02}", strip_zeros(mantissa), exp.abs());
    }

    let decimals = usize::try_from(PRECISION - 1 - exponent).unwrap_or(0);
    strip_zeros(&format!("{value:.decimals$}")).to_string()
}

fn strip_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Text table with a header row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl TextTable {
    /// Create an empty table with headers.
    #[must_use]
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row.
    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table without a trailing newline.
    #[must_use]
    pub fn render(&self) -> String {
        let ncols = self
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0);

        let mut headers = vec![String::new(); ncols - self.headers.len()];
        headers.extend(self.headers.iter().cloned());

        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(Cell::render).collect())
            .collect();

        let numeric: Vec<bool> = (0..ncols)
            .map(|col| {
                !self.rows.is_empty()
                    && self
                        .rows
                        .iter()
                        .all(|row| row.get(col).map_or(true, Cell::is_number))
            })
            .collect();

        let widths: Vec<usize> = (0..ncols)
            .map(|col| {
                cells
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(headers[col].chars().count() + 2))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let line = |values: &[String]| {
            (0..ncols)
                .map(|col| {
                    let value = values.get(col).map_or("", String::as_str);
                    let width = widths[col];
                    if numeric[col] {
                        format!("{value:>width$}")
                    } else {
                        format!("{value:<width$}")
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let rule: Vec<String> = widths.iter().map(|&width| "-".repeat(width)).collect();

        let mut lines = vec![line(&headers), rule.join("  ")];
        lines.extend(cells.iter().map(|row| line(row)));
        lines.join("\n")
    }
}
