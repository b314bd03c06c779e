use std::path::PathBuf;

/// Length of the `=` rule closing an artifact document
const SEPARATOR_WIDTH: usize = 50;

/// Use case, class diagram and code generated for one requirement
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactBundle {
    pub requirement_text: String,
    pub use_case: String,
    pub class_diagram: String,
    pub code: String,
    pub code_language: String,
    pub strategy_name: String,
    pub trial: u32,
}

impl ArtifactBundle {
    /// File name derived from the strategy and trial
    pub fn file_name(&self) -> String {
        format!("software_artifacts_{}_trial_{}.txt", self.strategy_name.replace(' ', "_"), self.trial)
    }

    /// Render the five sections in their fixed order, closed by a separator
    pub fn render(&self) -> String {
        let mut doc = String::new();
        doc.push_str(&format!("\n--- PROMPT PATTERN: {} ---\n", self.strategy_name));
        doc.push_str(&format!("\n--- REQUIREMENT ---\n{}\n", self.requirement_text));
        doc.push_str(&format!("\n--- USE CASE ---\n{}\n", self.use_case));
        doc.push_str(&format!("\n--- CLASS DIAGRAM ---\n{}\n", self.class_diagram));
        doc.push_str(
            &format!("\n--- {} CODE ---\n{}\n", self.code_language.to_uppercase(), self.code)
        );
        doc.push_str(&format!("\n{}\n", "=".repeat(SEPARATOR_WIDTH)));
        doc
    }
}

/// One-shot switch for artifact generation, owned by the experiment driver.
///
/// The gate is open while generation is enabled and nothing has been generated
/// yet. Once closed by `mark_generated` it stays closed for the rest of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactGate {
    enabled: bool,
    generated: bool,
}

impl ArtifactGate {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, generated: false }
    }

    pub fn is_open(&self) -> bool {
        self.enabled && !self.generated
    }

    pub fn already_generated(&self) -> bool {
        self.generated
    }

    pub fn mark_generated(&mut self) {
        self.generated = true;
    }
}

/// What happened when the pipeline was offered a classification outcome
#[derive(Debug, Clone, PartialEq)]
pub enum ArtifactOutcome {
    /// Gate closed or the trigger condition did not hold
    Skipped,
    /// All three stages succeeded and the document was written
    Generated(PathBuf),
    /// A stage or the write failed; the gate stays open
    Failed(String),
}
