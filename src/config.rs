use std::ops::RangeInclusive;
use std::path::PathBuf;

use serde::{ Deserialize, Serialize };

/// Tunables for one experiment run.
///
/// Every field has a default, so a config file only needs to list the values
/// it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Input CSV with `RequirementText` and `_class_` columns
    pub dataset_path: PathBuf,

    /// Where the result table is written
    pub output_path: PathBuf,

    /// Directory receiving the artifact document
    pub artifact_dir: PathBuf,

    /// Number of requirements drawn without replacement
    pub sample_size: usize,

    /// Trials per strategy, numbered from 1
    pub trial_count: u32,

    /// Seed for sampling; `None` draws from OS entropy
    pub seed: Option<u64>,

    pub classification_temperature: f32,
    pub classification_max_tokens: usize,

    /// Generate one artifact bundle for the first qualifying requirement
    pub generate_artifacts: bool,
    pub artifact_temperature: f32,
    pub artifact_max_tokens: usize,
    pub code_max_tokens: usize,

    /// Language the code stage is asked to produce
    pub code_language: String,
}

impl ExperimentConfig {
    pub fn trials(&self) -> RangeInclusive<u32> {
        1..=self.trial_count
    }

    /// Result column for a strategy and trial.
    ///
    /// A single-trial run keys columns by strategy name alone; with several
    /// trials each trial gets its own column.
    pub fn column_name(&self, strategy_name: &str, trial: u32) -> String {
        if self.trial_count > 1 {
            format!("{} (trial {})", strategy_name, trial)
        } else {
            strategy_name.to_string()
        }
    }
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("PROMISE_exp.csv"),
            output_path: PathBuf::from("binary_classification_total_results.csv"),
            artifact_dir: PathBuf::from("."),
            sample_size: 50,
            trial_count: 1,
            seed: None,
            classification_temperature: 0.2,
            classification_max_tokens: 100,
            generate_artifacts: true,
            artifact_temperature: 0.2,
            artifact_max_tokens: 500,
            code_max_tokens: 700,
            code_language: "Python".to_string(),
        }
    }
}
