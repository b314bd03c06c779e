use std::path::PathBuf;

use chrono::{ DateTime, Utc };
use log::{ info, warn };

use crate::config::ExperimentConfig;
use crate::errors::ReqClassResult;
use crate::implementations::artifact_pipeline::{ ArtifactPipeline, ArtifactSettings };
use crate::implementations::classification_runner::ClassificationRunner;
use crate::implementations::dataset::{ load_dataset, sample_dataset, save_results };
use crate::implementations::label_extractor::extract_label_opt;
use crate::models::artifact::{ ArtifactGate, ArtifactOutcome };
use crate::models::evaluation::{ score_columns, StrategyScore };
use crate::models::requirement::Dataset;
use crate::models::strategy::PromptCatalog;
use crate::traits::completion_service::CompletionService;
use crate::traits::run_observer::RunObserver;

/// Everything a finished run produced
#[derive(Debug, Clone)]
pub struct ExperimentReport {
    /// Sampled requirements with one filled column per strategy (and trial)
    pub dataset: Dataset,
    /// Artifact document, if one was generated
    pub artifact: Option<PathBuf>,
    /// Artifact attempts that failed before a document was written
    pub failed_artifact_attempts: usize,
    pub scores: Vec<StrategyScore>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Runs every strategy over the sampled requirements, one call at a time
pub struct ExperimentDriver<'a> {
    service: &'a dyn CompletionService,
    catalog: &'a PromptCatalog,
    config: &'a ExperimentConfig,
}

impl<'a> ExperimentDriver<'a> {
    pub fn new(
        service: &'a dyn CompletionService,
        catalog: &'a PromptCatalog,
        config: &'a ExperimentConfig
    ) -> Self {
        Self { service, catalog, config }
    }

    /// Number of classification calls a run will make
    pub fn planned_calls(&self, sample_len: usize) -> usize {
        sample_len * self.catalog.len() * (self.config.trial_count as usize)
    }

    /// Load the configured dataset and draw the sample to classify
    pub fn load_sample(&self) -> ReqClassResult<Dataset> {
        let dataset = load_dataset(&self.config.dataset_path)?;
        Ok(self.sample(&dataset))
    }

    /// Export the result table to the configured output path
    pub fn save(&self, report: &ExperimentReport) -> ReqClassResult<()> {
        save_results(&report.dataset, &self.config.output_path)
    }

    pub fn sample(&self, dataset: &Dataset) -> Dataset {
        let sample = sample_dataset(dataset, self.config.sample_size, self.config.seed);
        info!("Sampled {} of {} requirements", sample.len(), dataset.len());
        sample
    }

    /// Classify an already sampled dataset with every strategy and trial.
    ///
    /// Strategies run in catalog order and requirements in sample order; that
    /// order decides which requirement triggers artifact generation. Nothing in
    /// here is fatal: failed calls become ERROR cells.
    pub async fn run(&self, mut dataset: Dataset, observer: &mut dyn RunObserver) -> ExperimentReport {
        let started_at = Utc::now();
        let runner = ClassificationRunner::new(
            self.service,
            self.config.classification_temperature,
            self.config.classification_max_tokens
        );
        let pipeline = ArtifactPipeline::new(self.service, ArtifactSettings::from(self.config));
        let mut gate = ArtifactGate::new(self.config.generate_artifacts);
        let mut artifact = None;
        let mut failed_artifact_attempts = 0;

        let total = dataset.len();
        for strategy in self.catalog.iter() {
            for trial in self.config.trials() {
                let column = self.config.column_name(&strategy.name, trial);
                dataset.reset_column(&column);
                observer.on_pass_start(&column, total);

                for i in 0..total {
                    info!("{}: Requirement {}/{}", column, i + 1, total);
                    let text = dataset.records[i].text.clone();
                    let truth = dataset.records[i].true_label;

                    let label = match text.as_deref() {
                        Some(text) => runner.classify(strategy, text).await,
                        None => {
                            warn!("{}: Requirement {} has no text. Cannot be classified", column, i + 1);
                            extract_label_opt(None)
                        }
                    };
                    dataset.set_label(i, &column, label);
                    observer.on_classified(&column, i, total, label);

                    let outcome = match text.as_deref() {
                        Some(text) => {
                            pipeline.maybe_generate(
                                &mut gate,
                                text,
                                label,
                                truth,
                                &strategy.name,
                                trial
                            ).await
                        }
                        None => ArtifactOutcome::Skipped,
                    };
                    match &outcome {
                        ArtifactOutcome::Skipped => {}
                        ArtifactOutcome::Generated(path) => {
                            artifact = Some(path.clone());
                            observer.on_artifact(&outcome);
                        }
                        ArtifactOutcome::Failed(_) => {
                            failed_artifact_attempts += 1;
                            observer.on_artifact(&outcome);
                        }
                    }
                }

                observer.on_pass_end(&column);
            }
        }

        if self.config.generate_artifacts && !gate.already_generated() {
            warn!("No software artifacts were generated in this run");
        }

        let scores = score_columns(&dataset);
        ExperimentReport {
            dataset,
            artifact,
            failed_artifact_attempts,
            scores,
            started_at,
            finished_at: Utc::now(),
        }
    }
}
