use indexmap::IndexMap;

use crate::models::common::Label;

/// Column holding the requirement text in the source dataset
pub const TEXT_COLUMN: &str = "RequirementText";

/// Column holding the original multi-class label in the source dataset
pub const CLASS_COLUMN: &str = "_class_";

/// Derived ground-truth column written to the result table
pub const TRUE_LABEL_COLUMN: &str = "TrueLabel";

/// Collapse the original multi-class label into F/NF.
///
/// Only the literal value `"F"` is functional. Every other value, including an
/// empty or absent cell, is treated as non-functional.
pub fn derive_true_label(class_label: Option<&str>) -> Label {
    match class_label {
        Some("F") => Label::Functional,
        _ => Label::NonFunctional,
    }
}

/// One row of the dataset plus its per-strategy results
#[derive(Debug, Clone, PartialEq)]
pub struct RequirementRecord {
    /// Original cell values, aligned with `Dataset::headers`
    pub fields: Vec<String>,
    /// Requirement text, `None` when the cell is empty
    pub text: Option<String>,
    pub true_label: Label,
    /// Result column name -> label, `None` until classified
    pub results: IndexMap<String, Option<Label>>,
}

impl RequirementRecord {
    pub fn new(fields: Vec<String>, text: &str, class_label: Option<&str>) -> Self {
        Self {
            text: Some(text.to_string()).filter(|t| !t.is_empty()),
            fields,
            true_label: derive_true_label(class_label),
            results: IndexMap::new(),
        }
    }

    pub fn result(&self, column: &str) -> Option<Label> {
        self.results.get(column).copied().flatten()
    }
}

/// Tabular collection of requirements with result columns appended in order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub records: Vec<RequirementRecord>,
    result_columns: Vec<String>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, records: Vec<RequirementRecord>) -> Self {
        Self { headers, records, result_columns: Vec::new() }
    }

    /// Build a dataset from bare requirement texts and class labels
    pub fn from_pairs<I, T, C>(pairs: I) -> Self
        where I: IntoIterator<Item = (T, C)>, T: Into<String>, C: Into<String>
    {
        let headers = vec![TEXT_COLUMN.to_string(), CLASS_COLUMN.to_string()];
        let records = pairs
            .into_iter()
            .map(|(text, class)| {
                let text: String = text.into();
                let class: String = class.into();
                RequirementRecord::new(
                    vec![text.clone(), class.clone()],
                    &text,
                    Some(class.as_str()).filter(|c| !c.is_empty())
                )
            })
            .collect();
        Self::new(headers, records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Result column names in the order they were first created
    pub fn result_columns(&self) -> &[String] {
        &self.result_columns
    }

    /// Create the column if needed and clear every cell in it
    pub fn reset_column(&mut self, column: &str) {
        if !self.result_columns.iter().any(|c| c == column) {
            self.result_columns.push(column.to_string());
        }
        for record in &mut self.records {
            record.results.insert(column.to_string(), None);
        }
    }

    pub fn set_label(&mut self, index: usize, column: &str, label: Label) {
        if let Some(record) = self.records.get_mut(index) {
            record.results.insert(column.to_string(), Some(label));
        }
    }

    /// Keep only the rows at `indices`, in that order, with dense indexing
    pub fn select(&self, indices: impl IntoIterator<Item = usize>) -> Dataset {
        let records = indices
            .into_iter()
            .filter_map(|i| self.records.get(i).cloned())
            .collect();
        Dataset {
            headers: self.headers.clone(),
            records,
            result_columns: self.result_columns.clone(),
        }
    }

    /// Header row of the exported table.
    ///
    /// `TrueLabel` and result columns that already exist in the input keep
    /// their position; missing ones are appended.
    pub fn output_headers(&self) -> Vec<String> {
        let mut headers = self.headers.clone();
        if !self.has_header(TRUE_LABEL_COLUMN) {
            headers.push(TRUE_LABEL_COLUMN.to_string());
        }
        for column in &self.result_columns {
            if !headers.contains(column) {
                headers.push(column.clone());
            }
        }
        headers
    }

    /// Data row of the exported table, unclassified cells left empty.
    /// Input cells under `TrueLabel` or a result column are overwritten.
    pub fn output_row(&self, record: &RequirementRecord) -> Vec<String> {
        let mut row = record.fields.clone();
        row.resize(self.headers.len(), String::new());
        for (cell, header) in row.iter_mut().zip(&self.headers) {
            if header == TRUE_LABEL_COLUMN {
                *cell = record.true_label.to_string();
            } else if self.result_columns.contains(header) {
                *cell = Self::result_cell(record, header);
            }
        }

        if !self.has_header(TRUE_LABEL_COLUMN) {
            row.push(record.true_label.to_string());
        }
        for column in &self.result_columns {
            if column != TRUE_LABEL_COLUMN && !self.has_header(column) {
                row.push(Self::result_cell(record, column));
            }
        }
        row
    }

    fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    fn result_cell(record: &RequirementRecord, column: &str) -> String {
        record
            .result(column)
            .map(|l| l.to_string())
            .unwrap_or_default()
    }
}
