//! Template scanning and typed-value rendering

use std::path::{Path, PathBuf};
use termsheet_domain::{AccumulatedRecord, TypedValue};
use thiserror::Error;
use tracing::{debug, info};
use umya_spreadsheet::{reader, writer, Worksheet};

/// Name of the sheet holding the label/value input pairs.
pub const INPUT_SHEET: &str = "Inputs";

/// Errors from the rendering stage.
#[derive(Error, Debug)]
pub enum SheetError {
    /// The template file does not exist. Rendering never creates a blank
    /// workbook in its place.
    #[error("template not found: {0}")]
    TemplateMissing(PathBuf),

    /// The template has no sheet with the expected name.
    #[error("template has no '{0}' sheet")]
    MissingSheet(String),

    /// The workbook could not be read or written.
    #[error("spreadsheet error: {0}")]
    Xlsx(String),
}

/// Counts from one rendering pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderSummary {
    /// Output cells written.
    pub cells_written: usize,

    /// Distinct record fields that matched at least one label cell. Fields
    /// with no label cell are dropped; the template defines the complete
    /// set of fields the consumer cares about.
    pub fields_matched: usize,
}

/// Write the record's values into the template and save the result.
///
/// Scans the full populated range of the `Inputs` sheet; every cell whose
/// trimmed text exactly equals a field name receives that field's classified
/// value in the cell one column to the right, with a display format matching
/// the classification. The workbook is mutated in memory and saved under
/// `output`; the template file is never touched.
pub fn render_record(
    record: &AccumulatedRecord,
    template: &Path,
    output: &Path,
) -> Result<RenderSummary, SheetError> {
    if !template.is_file() {
        return Err(SheetError::TemplateMissing(template.to_path_buf()));
    }

    let mut book =
        reader::xlsx::read(template).map_err(|e| SheetError::Xlsx(format!("{:?}", e)))?;
    let sheet = book
        .get_sheet_by_name_mut(INPUT_SHEET)
        .ok_or_else(|| SheetError::MissingSheet(INPUT_SHEET.to_string()))?;

    let max_row = sheet.get_highest_row();
    let max_col = sheet.get_highest_column();

    let mut cells_written = 0;
    let mut matched: Vec<String> = Vec::new();

    for row in 1..=max_row {
        for col in 1..=max_col {
            let label = sheet.get_value((col, row));
            let label = label.trim();
            if label.is_empty() {
                continue;
            }
            let Some(raw) = record.get(label) else {
                continue;
            };

            write_typed(sheet, col + 1, row, raw);
            cells_written += 1;
            if !matched.iter().any(|m| m == label) {
                matched.push(label.to_string());
            }
        }
    }

    for (field, _) in record.iter() {
        if !matched.iter().any(|m| m == field) {
            debug!("no label cell for '{}', value dropped", field);
        }
    }

    writer::xlsx::write(&book, output).map_err(|e| SheetError::Xlsx(format!("{:?}", e)))?;
    info!(
        "wrote {} cells ({} fields matched) to {}",
        cells_written,
        matched.len(),
        output.display()
    );

    Ok(RenderSummary {
        cells_written,
        fields_matched: matched.len(),
    })
}

/// Classify one raw value and write it with its display format.
fn write_typed(sheet: &mut Worksheet, col: u32, row: u32, raw: &str) {
    let typed = TypedValue::classify(raw);
    match &typed {
        TypedValue::Currency(v) | TypedValue::Percentage(v) | TypedValue::Number(v) => {
            sheet.get_cell_mut((col, row)).set_value_number(*v);
            if let Some(code) = typed.format_code() {
                sheet
                    .get_style_mut((col, row))
                    .get_number_format_mut()
                    .set_format_code(code);
            }
        }
        TypedValue::Text(s) => {
            sheet.get_cell_mut((col, row)).set_value(s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termsheet_domain::ChunkOutcome;

    fn record(pairs: &[(&str, &str)]) -> AccumulatedRecord {
        let mut record = AccumulatedRecord::new();
        record.fold(&ChunkOutcome::from_pairs(pairs.iter().copied()));
        record
    }

    /// Write a minimal template with labels at the given (col, row) cells.
    fn write_template(path: &Path, labels: &[(u32, u32, &str)]) {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book.get_sheet_by_name_mut("Sheet1").unwrap();
        sheet.set_name(INPUT_SHEET);
        for (col, row, label) in labels {
            sheet.get_cell_mut((*col, *row)).set_value(*label);
        }
        writer::xlsx::write(&book, path).unwrap();
    }

    #[test]
    fn test_label_match_writes_adjacent_cell() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("template.xlsx");
        let output = dir.path().join("output.xlsx");
        write_template(&template, &[(2, 5, "WALA")]);

        let summary = render_record(&record(&[("WALA", "24")]), &template, &output).unwrap();
        assert_eq!(summary.cells_written, 1);
        assert_eq!(summary.fields_matched, 1);

        let book = reader::xlsx::read(&output).unwrap();
        let sheet = book.get_sheet_by_name(INPUT_SHEET).unwrap();
        assert_eq!(sheet.get_value((3u32, 5u32)), "24");
    }

    #[test]
    fn test_each_classification_renders() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("template.xlsx");
        let output = dir.path().join("output.xlsx");
        write_template(
            &template,
            &[
                (1, 1, "Initial Asset Balance"),
                (1, 2, "Default Rate"),
                (1, 3, "WALA"),
                (1, 4, "Payment Frequency"),
            ],
        );

        let record = record(&[
            ("Initial Asset Balance", "$ 550,462,191"),
            ("Default Rate", "12.34%"),
            ("WALA", "1,234.56"),
            ("Payment Frequency", "Monthly"),
        ]);
        render_record(&record, &template, &output).unwrap();

        let book = reader::xlsx::read(&output).unwrap();
        let sheet = book.get_sheet_by_name(INPUT_SHEET).unwrap();
        assert_eq!(sheet.get_value((2u32, 1u32)), "550462191");
        assert_eq!(sheet.get_value((2u32, 2u32)), "0.1234");
        assert_eq!(sheet.get_value((2u32, 3u32)), "1234.56");
        assert_eq!(sheet.get_value((2u32, 4u32)), "Monthly");
    }

    #[test]
    fn test_unmatched_fields_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("template.xlsx");
        let output = dir.path().join("output.xlsx");
        write_template(&template, &[(1, 1, "WALA")]);

        let record = record(&[("WALA", "24"), ("Discount Rate", "5%")]);
        let summary = render_record(&record, &template, &output).unwrap();
        assert_eq!(summary.fields_matched, 1);
        assert_eq!(summary.cells_written, 1);
    }

    #[test]
    fn test_label_matching_trims_cell_text() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("template.xlsx");
        let output = dir.path().join("output.xlsx");
        write_template(&template, &[(1, 1, "  Closing Date  ")]);

        let summary = render_record(
            &record(&[("Closing Date", "Jan 1 2020")]),
            &template,
            &output,
        )
        .unwrap();
        assert_eq!(summary.cells_written, 1);

        let book = reader::xlsx::read(&output).unwrap();
        let sheet = book.get_sheet_by_name(INPUT_SHEET).unwrap();
        assert_eq!(sheet.get_value((2u32, 1u32)), "Jan 1 2020");
    }

    #[test]
    fn test_template_is_never_modified_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("template.xlsx");
        let output = dir.path().join("output.xlsx");
        write_template(&template, &[(1, 1, "WALA")]);

        render_record(&record(&[("WALA", "24")]), &template, &output).unwrap();

        let book = reader::xlsx::read(&template).unwrap();
        let sheet = book.get_sheet_by_name(INPUT_SHEET).unwrap();
        assert_eq!(sheet.get_value((2u32, 1u32)), "");
    }

    #[test]
    fn test_missing_template_is_fatal_and_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("absent.xlsx");
        let output = dir.path().join("output.xlsx");

        let result = render_record(&record(&[("WALA", "24")]), &template, &output);
        assert!(matches!(result, Err(SheetError::TemplateMissing(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_inputs_sheet_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("template.xlsx");
        let output = dir.path().join("output.xlsx");

        // A workbook whose only sheet is not named "Inputs".
        let book = umya_spreadsheet::new_file();
        writer::xlsx::write(&book, &template).unwrap();

        let result = render_record(&record(&[("WALA", "24")]), &template, &output);
        assert!(matches!(result, Err(SheetError::MissingSheet(_))));
    }
}
