//! XLSX output
//!
//! Tables are written header-first starting at `A1`; charts are resolved
//! from their [`ChartSpec`] against the table on the same sheet.

use std::path::Path;

use chrono::NaiveDateTime;
use umya_spreadsheet::structs::drawing::charts::{
    AxisPositionValues, BarDirectionValues, CategoryAxisData, ChartText, PlotArea,
    StringReference,
};
use umya_spreadsheet::structs::drawing::spreadsheet::MarkerType;
use umya_spreadsheet::structs::{Chart, ChartType};

use crate::chart::{ChartKind, ChartSpec, SeriesBinding};
use crate::error::{ReportError, ReportResult};

/// Number format applied to [`CellValue::DateTime`] cells
pub const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Excel serial number of 1970-01-01
const UNIX_EPOCH_SERIAL: f64 = 25569.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    DateTime(NaiveDateTime),
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

/// Serial date as Excel stores it: days since 1899-12-30, time as fraction
pub fn excel_serial(dt: NaiveDateTime) -> f64 {
    UNIX_EPOCH_SERIAL + dt.and_utc().timestamp() as f64 / SECONDS_PER_DAY
}

/// A header row plus data rows, destined for one sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTable {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetTable {
    pub fn new(name: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            name: name.into(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    /// Series binding over two columns of this table, header excluded
    pub fn binding(&self, category_col: u32, value_col: u32) -> SeriesBinding {
        SeriesBinding {
            sheet: self.name.clone(),
            has_header: true,
            data_rows: self.rows.len() as u32,
            category_col,
            value_col,
        }
    }
}

/// A sheet to write, optionally carrying one chart
#[derive(Debug, Clone)]
pub struct Sheet {
    pub table: SheetTable,
    pub chart: Option<ChartSpec>,
}

/// Write all sheets to `path`, replacing any existing file
pub fn write_workbook(path: &Path, sheets: &[Sheet]) -> ReportResult<()> {
    let mut book = umya_spreadsheet::new_file_empty_worksheet();

    for sheet in sheets {
        let table = &sheet.table;
        let worksheet = book.new_sheet(table.name.as_str()).map_err(|e| {
            ReportError::Workbook(format!("cannot add sheet '{}': {e}", table.name))
        })?;

        for (col, header) in table.headers.iter().enumerate() {
            worksheet
                .get_cell_mut((col as u32 + 1, 1))
                .set_value_string(header.as_str());
        }
        for (row_idx, row) in table.rows.iter().enumerate() {
            for (col, value) in row.iter().enumerate() {
                let cell = worksheet.get_cell_mut((col as u32 + 1, row_idx as u32 + 2));
                match value {
                    CellValue::Text(s) => {
                        cell.set_value_string(s.as_str());
                    }
                    CellValue::Number(n) => {
                        cell.set_value_number(*n);
                    }
                    CellValue::DateTime(dt) => {
                        cell.set_value_number(excel_serial(*dt));
                        cell.get_style_mut()
                            .get_number_format_mut()
                            .set_format_code(DATETIME_FORMAT);
                    }
                }
            }
        }

        if let Some(spec) = &sheet.chart {
            match build_chart(spec) {
                Some(chart) => {
                    worksheet.add_chart(chart);
                }
                None => tracing::warn!(sheet = %table.name, "No data rows, chart skipped"),
            }
        }
    }

    umya_spreadsheet::writer::xlsx::write(&book, path).map_err(|e| ReportError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn string_reference(range: &str) -> StringReference {
    let mut reference = StringReference::default();
    reference.get_formula_mut().set_address_str(range);
    reference
}

fn build_chart(spec: &ChartSpec) -> Option<Chart> {
    let values = spec.series.values_range()?;
    let categories = spec.series.categories_range()?;
    let name_cell = spec.series.name_cell();

    let mut from_marker = MarkerType::default();
    from_marker.set_coordinate(spec.anchor_cell());
    let mut to_marker = MarkerType::default();
    to_marker.set_coordinate(spec.end_cell());

    let chart_type = match spec.kind {
        ChartKind::Column | ChartKind::Bar => ChartType::BarChart,
        ChartKind::Line => ChartType::LineChart,
    };

    let mut chart = Chart::default();
    chart.new_chart(chart_type, from_marker, to_marker, vec![values.as_str()]);

    for series in chart
        .get_area_chart_series_list_mut()
        .get_area_chart_series_mut()
    {
        let mut category_data = CategoryAxisData::default();
        category_data.set_string_reference(string_reference(&categories));
        series.set_category_axis_data(category_data);

        if let Some(name_cell) = &name_cell {
            let mut text = ChartText::default();
            text.set_string_reference(string_reference(name_cell));
            series.set_chart_text(text);
        }
    }

    style_plot_area(chart.get_plot_area_mut(), spec.kind);

    chart.set_title(spec.title.as_str());
    chart.set_horizontal_title(spec.x_axis.as_str());
    chart.set_vertical_title(spec.y_axis.as_str());

    tracing::debug!(
        sheet = %spec.series.sheet,
        values = %values,
        categories = %categories,
        "Chart series bound"
    );
    Some(chart)
}

/// Bar direction, axis placement and value labels for the chart group
fn style_plot_area(plot_area: &mut PlotArea, kind: ChartKind) {
    match kind {
        ChartKind::Column | ChartKind::Bar => {
            if let Some(bar) = plot_area.get_bar_chart_mut() {
                let direction = if kind == ChartKind::Bar {
                    BarDirectionValues::Bar
                } else {
                    BarDirectionValues::Column
                };
                bar.get_bar_direction_mut().set_val(direction);
                bar.get_data_labels_mut().get_show_value_mut().set_val(true);
            }
        }
        ChartKind::Line => {
            if let Some(line) = plot_area.get_line_chart_mut() {
                line.get_data_labels_mut().get_show_value_mut().set_val(true);
            }
        }
    }

    // Horizontal bars run categories up the left edge
    if kind == ChartKind::Bar {
        for axis in plot_area.get_category_axis_mut().iter_mut() {
            axis.get_axis_position_mut().set_val(AxisPositionValues::Left);
        }
        for axis in plot_area.get_value_axis_mut().iter_mut() {
            axis.get_axis_position_mut().set_val(AxisPositionValues::Bottom);
        }
    }
}
