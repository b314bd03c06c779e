use colored::*;

use reqclass::PromptCatalog;

use crate::cli::ui;

/// List strategies in the order they are evaluated
pub fn execute(catalog: &PromptCatalog) {
    ui::print_header("Prompt Strategies");
    for (i, strategy) in catalog.iter().enumerate() {
        println!("{}. {}", i + 1, strategy.name.bold());
        for line in strategy.instruction_text.trim_end().lines() {
            println!("   {}", line.dimmed());
        }
    }
}
