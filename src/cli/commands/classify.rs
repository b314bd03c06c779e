use anyhow::Result;

use reqclass::{ ClassificationRunner, CompletionService, ExperimentConfig, PromptCatalog, ReqClassError };

use crate::cli::ui;

/// Classify one requirement with one strategy and show the raw response
pub async fn execute(
    service: &dyn CompletionService,
    catalog: &PromptCatalog,
    config: &ExperimentConfig,
    strategy_name: &str,
    text: &str
) -> Result<()> {
    let strategy = catalog
        .get(strategy_name)
        .ok_or_else(|| ReqClassError::UnknownStrategy(strategy_name.to_string()))?;

    ui::print_header(&format!("Classifying with {}", strategy.name));

    let runner = ClassificationRunner::new(
        service,
        config.classification_temperature,
        config.classification_max_tokens
    );

    let spinner = ui::spinner_with_message("Waiting for the model...");
    let attempt = runner.attempt(strategy, text).await;
    spinner.finish_and_clear();

    match &attempt.response {
        Ok(raw) => {
            ui::print_info("Model output:");
            ui::print_text(raw);
        }
        Err(e) => ui::print_error(&format!("Service call failed: {}", e)),
    }
    println!();
    ui::print_result("Label", &ui::colored_label(attempt.label).to_string());

    Ok(())
}
