use std::io::{ Read, Write };
use std::path::Path;

use log::{ info, warn };
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

use crate::errors::{ ReqClassError, ReqClassResult };
use crate::models::requirement::{
    Dataset,
    RequirementRecord,
    CLASS_COLUMN,
    TEXT_COLUMN,
};

/// Load a CSV dataset from disk
pub fn load_dataset(path: &Path) -> ReqClassResult<Dataset> {
    let file = std::fs::File::open(path).map_err(|e| {
        ReqClassError::DatasetError(format!("Failed to open {}: {}", path.display(), e))
    })?;
    let dataset = read_dataset(file)?;
    info!("Loaded {} requirements from {}", dataset.len(), path.display());
    Ok(dataset)
}

/// Parse CSV with at least `RequirementText` and `_class_` columns
pub fn read_dataset<R: Read>(reader: R) -> ReqClassResult<Dataset> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let text_idx = column_index(&headers, TEXT_COLUMN)?;
    let class_idx = column_index(&headers, CLASS_COLUMN)?;

    let mut records = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let row = result?;
        if row.len() > headers.len() {
            warn!(
                "Row {} has {} cells but only {} columns; dropping the extra cells: {:?}",
                i + 1,
                row.len(),
                headers.len(),
                row.iter().skip(headers.len()).collect::<Vec<_>>()
            );
        }
        let mut fields: Vec<String> = row
            .iter()
            .map(|f| f.to_string())
            .collect();
        fields.resize(headers.len(), String::new());

        let text = fields[text_idx].clone();
        let class_label = fields[class_idx].clone();
        records.push(
            RequirementRecord::new(fields, &text, Some(class_label.as_str()).filter(|c| !c.is_empty()))
        );
    }

    Ok(Dataset::new(headers, records))
}

fn column_index(headers: &[String], column: &str) -> ReqClassResult<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| ReqClassError::MissingColumn(column.to_string()))
}

/// Uniform sample without replacement, reindexed densely from zero.
///
/// A sample size above the dataset length is clamped to the full dataset.
pub fn sample_dataset(dataset: &Dataset, sample_size: usize, seed: Option<u64>) -> Dataset {
    let amount = if sample_size > dataset.len() {
        warn!(
            "Sample size {} exceeds dataset size {}; using all requirements",
            sample_size,
            dataset.len()
        );
        dataset.len()
    } else {
        sample_size
    };

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let indices = index::sample(&mut rng, dataset.len(), amount);
    dataset.select(indices.into_iter())
}

/// Write the result table (original columns, TrueLabel, result columns)
pub fn write_results<W: Write>(dataset: &Dataset, writer: W) -> ReqClassResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(dataset.output_headers())?;
    for record in &dataset.records {
        wtr.write_record(dataset.output_row(record))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn save_results(dataset: &Dataset, path: &Path) -> ReqClassResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::File::create(path)?;
    write_results(dataset, file)?;
    info!("Results saved to {}", path.display());
    Ok(())
}
