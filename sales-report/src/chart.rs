//! Chart descriptors
//!
//! A chart is described by what it shows and which table cells feed its
//! series. The descriptor knows nothing about the spreadsheet library;
//! `workbook` resolves it to cell ranges when the sheet is written.

/// Default chart footprint, in cells
const CHART_WIDTH_COLS: u32 = 8;
const CHART_HEIGHT_ROWS: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Vertical bars
    Column,
    /// Horizontal bars
    Bar,
    Line,
}

/// Binds one chart series to a table on a sheet.
///
/// Rows and columns are 0-based table positions. With a header row, data
/// starts on row 1; `data_rows` rows are bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesBinding {
    pub sheet: String,
    pub has_header: bool,
    pub data_rows: u32,
    pub category_col: u32,
    pub value_col: u32,
}

impl SeriesBinding {
    pub fn first_data_row(&self) -> u32 {
        u32::from(self.has_header)
    }

    /// Last bound row, `None` when the table has no data rows
    pub fn last_data_row(&self) -> Option<u32> {
        (self.data_rows > 0).then(|| self.first_data_row() + self.data_rows - 1)
    }

    /// Absolute range of the category labels, e.g. `'Top Products'!$A$2:$A$6`
    pub fn categories_range(&self) -> Option<String> {
        self.column_range(self.category_col)
    }

    /// Absolute range of the series values, e.g. `'Top Products'!$B$2:$B$6`
    pub fn values_range(&self) -> Option<String> {
        self.column_range(self.value_col)
    }

    /// Header cell naming the series, if the table has one
    pub fn name_cell(&self) -> Option<String> {
        self.has_header.then(|| {
            format!(
                "{}!${}$1",
                quote_sheet(&self.sheet),
                column_letters(self.value_col)
            )
        })
    }

    fn column_range(&self, col: u32) -> Option<String> {
        let last = self.last_data_row()?;
        let letters = column_letters(col);
        Some(format!(
            "{}!${letters}${}:${letters}${}",
            quote_sheet(&self.sheet),
            self.first_data_row() + 1,
            last + 1
        ))
    }
}

/// One embedded chart on an aggregate sheet
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
    /// Top-left cell, 0-based (column, row)
    pub anchor: (u32, u32),
    pub series: SeriesBinding,
}

impl ChartSpec {
    /// Top-left cell in A1 notation
    pub fn anchor_cell(&self) -> String {
        cell_name(self.anchor.0, self.anchor.1)
    }

    /// Bottom-right cell in A1 notation
    pub fn end_cell(&self) -> String {
        cell_name(
            self.anchor.0 + CHART_WIDTH_COLS,
            self.anchor.1 + CHART_HEIGHT_ROWS,
        )
    }
}

/// 0-based column index to letters: 0 → A, 25 → Z, 26 → AA
pub fn column_letters(col: u32) -> String {
    let mut n = col + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// 0-based (column, row) to A1 notation
pub fn cell_name(col: u32, row: u32) -> String {
    format!("{}{}", column_letters(col), row + 1)
}

fn quote_sheet(sheet: &str) -> String {
    format!("'{}'", sheet.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(rows: u32) -> SeriesBinding {
        SeriesBinding {
            sheet: "Sales by Category".into(),
            has_header: true,
            data_rows: rows,
            category_col: 0,
            value_col: 1,
        }
    }

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letters(0), "A");
        assert_eq!(column_letters(3), "D");
        assert_eq!(column_letters(25), "Z");
        assert_eq!(column_letters(26), "AA");
        assert_eq!(column_letters(701), "ZZ");
        assert_eq!(column_letters(702), "AAA");
    }

    #[test]
    fn test_ranges_skip_header() {
        let b = binding(3);
        assert_eq!(b.first_data_row(), 1);
        assert_eq!(b.last_data_row(), Some(3));
        assert_eq!(
            b.categories_range().as_deref(),
            Some("'Sales by Category'!$A$2:$A$4")
        );
        assert_eq!(
            b.values_range().as_deref(),
            Some("'Sales by Category'!$B$2:$B$4")
        );
        assert_eq!(b.name_cell().as_deref(), Some("'Sales by Category'!$B$1"));
    }

    #[test]
    fn test_empty_table_binds_nothing() {
        let b = binding(0);
        assert_eq!(b.last_data_row(), None);
        assert_eq!(b.values_range(), None);
        assert_eq!(b.categories_range(), None);
    }

    #[test]
    fn test_headerless_binding() {
        let b = SeriesBinding {
            has_header: false,
            ..binding(2)
        };
        assert_eq!(b.values_range().as_deref(), Some("'Sales by Category'!$B$1:$B$2"));
        assert_eq!(b.name_cell(), None);
    }

    #[test]
    fn test_sheet_name_quotes_escaped() {
        let b = SeriesBinding {
            sheet: "Bob's Sales".into(),
            ..binding(1)
        };
        assert_eq!(b.values_range().as_deref(), Some("'Bob''s Sales'!$B$2:$B$2"));
    }

    #[test]
    fn test_chart_footprint() {
        let spec = ChartSpec {
            kind: ChartKind::Column,
            title: "Sales by Category".into(),
            x_axis: "Category".into(),
            y_axis: "Total Sales".into(),
            anchor: (3, 1),
            series: binding(3),
        };
        assert_eq!(spec.anchor_cell(), "D2");
        assert_eq!(spec.end_cell(), "L17");
    }
}
