use anyhow::{ anyhow, Result };

use reqclass::{ CompletionService, ExperimentConfig, ExperimentDriver, PromptCatalog };

use crate::cli::ui;

/// Run command: sample, classify with every strategy, export the table
pub async fn execute(
    service: &dyn CompletionService,
    catalog: &PromptCatalog,
    config: &ExperimentConfig,
    skip_confirmation: bool
) -> Result<()> {
    ui::print_header("Requirement Classification Experiment");

    if catalog.is_empty() {
        return Err(anyhow!("No strategies configured"));
    }

    ui::print_info(format!("Loading dataset from {}...", config.dataset_path.display()).as_str());
    let driver = ExperimentDriver::new(service, catalog, config);
    let sample = driver.load_sample()?;

    ui::print_result("Model", service.model());
    ui::print_result("Strategies", &catalog.names().collect::<Vec<_>>().join(", "));
    ui::print_result("Sample size", &sample.len().to_string());
    ui::print_result("Trials", &config.trial_count.to_string());
    ui::print_result(
        "Artifacts",
        if config.generate_artifacts { "enabled (one bundle per run)" } else { "disabled" }
    );

    let planned = driver.planned_calls(sample.len());
    if !skip_confirmation {
        let prompt = format!("This will make {} classification calls. Continue?", planned);
        if !ui::confirm_action(&prompt)? {
            ui::print_warning("Run cancelled.");
            return Ok(());
        }
    }

    let mut observer = ui::ProgressObserver::default();
    let report = driver.run(sample, &mut observer).await;

    driver.save(&report)?;
    ui::print_success(format!("Results saved to {}", config.output_path.display()).as_str());

    match &report.artifact {
        Some(path) => ui::print_result("Software artifacts", &path.display().to_string()),
        None if config.generate_artifacts => {
            ui::print_warning("No requirement qualified for artifact generation.");
        }
        None => {}
    }
    if report.failed_artifact_attempts > 0 {
        ui::print_warning(
            format!("{} artifact attempt(s) failed", report.failed_artifact_attempts).as_str()
        );
    }

    ui::print_header("Evaluation");
    ui::print_scores(&report.scores);

    let elapsed = report.finished_at - report.started_at;
    ui::print_result("Elapsed", &format!("{}s", elapsed.num_seconds()));
    ui::print_success("Experiment completed!");

    Ok(())
}
