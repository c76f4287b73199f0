//! Termsheet Spreadsheet Layer
//!
//! Writes a [`termsheet_domain::AccumulatedRecord`] into a spreadsheet
//! template: label cells on the `Inputs` sheet are matched against field
//! names, and each match's neighboring cell receives the classified value
//! with a matching display format. The template itself is never modified;
//! the populated workbook is saved under a distinct output path.

#![warn(missing_docs)]

mod template;

pub use template::{render_record, RenderSummary, SheetError, INPUT_SHEET};
