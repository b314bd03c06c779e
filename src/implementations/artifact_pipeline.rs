use std::fs;
use std::path::{ Path, PathBuf };

use log::{ error, info };

use crate::config::ExperimentConfig;
use crate::errors::{ ReqClassError, ReqClassResult };
use crate::implementations::completion_client::ServiceError;
use crate::models::artifact::{ ArtifactBundle, ArtifactGate, ArtifactOutcome };
use crate::models::common::Label;
use crate::models::completion::{ ChatMessage, CompletionRequest };
use crate::traits::completion_service::CompletionService;

/// Sampling settings and destination for artifact generation
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactSettings {
    pub temperature: f32,
    pub max_tokens: usize,
    pub code_max_tokens: usize,
    pub code_language: String,
    pub output_dir: PathBuf,
}

impl From<&ExperimentConfig> for ArtifactSettings {
    fn from(config: &ExperimentConfig) -> Self {
        Self {
            temperature: config.artifact_temperature,
            max_tokens: config.artifact_max_tokens,
            code_max_tokens: config.code_max_tokens,
            code_language: config.code_language.clone(),
            output_dir: config.artifact_dir.clone(),
        }
    }
}

pub fn use_case_prompt(requirement_text: &str) -> String {
    format!(
        "You are a software analyst. Analyze the following requirement and reason step-by-step to understand its intent. Then, write a detailed use case.\n\
        Requirement: {}\n\
        Step-by-step reasoning:\n\
        1. Explain the functionality or intent of the requirement.\n\
        2. Identify the user/actor.\n\
        3. Describe the system behavior.\n\
        4. Mention any conditions or exceptions or external dependencies even if not stated directly.\n\
        Now write the use case:\n\n\
        - Use case name:\n\
        - Primary actor:\n\
        - Goal:\n\
        - Preconditions:\n\
        - Main success scenario:\n\
        - Alternate flows:\n\
        - Postconditions:\n",
        requirement_text
    )
}

pub fn class_diagram_prompt(use_case: &str) -> String {
    format!(
        "You are a software designer. Based on the use case below, generate a UML-style class diagram.\n\nUse Case:\n{}",
        use_case
    )
}

pub fn code_prompt(class_diagram: &str, use_case: &str, language: &str) -> String {
    format!(
        "You are a software engineer. Based on this class diagram and use case, generate the {} code implementing the functionality.\n\nClass Diagram:\n{}\n\nUse Case:\n{}",
        language,
        class_diagram,
        use_case
    )
}

/// Chained use case -> class diagram -> code generation for one requirement
pub struct ArtifactPipeline<'a> {
    service: &'a dyn CompletionService,
    settings: ArtifactSettings,
}

impl<'a> ArtifactPipeline<'a> {
    pub fn new(service: &'a dyn CompletionService, settings: ArtifactSettings) -> Self {
        Self { service, settings }
    }

    /// Single user-message call returning trimmed raw text
    pub async fn ask_model(
        &self,
        prompt: &str,
        temperature: f32,
        max_tokens: usize
    ) -> Result<String, ServiceError> {
        let request = CompletionRequest::new(self.service.model(), vec![ChatMessage::user(prompt)])
            .with_temperature(temperature)
            .with_max_tokens(max_tokens);
        let text = self.service.complete(&request).await?;
        Ok(text.trim().to_string())
    }

    async fn stage(&self, stage: &str, prompt: &str, max_tokens: usize) -> ReqClassResult<String> {
        info!("Generating {}", stage);
        self.ask_model(prompt, self.settings.temperature, max_tokens).await.map_err(|e| {
            ReqClassError::ArtifactStageError {
                stage: stage.to_string(),
                message: e.to_string(),
            }
        })
    }

    /// Run the three stages in order, each feeding the next
    pub async fn generate(
        &self,
        requirement_text: &str,
        strategy_name: &str,
        trial: u32
    ) -> ReqClassResult<ArtifactBundle> {
        let use_case = self.stage(
            "use case",
            &use_case_prompt(requirement_text),
            self.settings.max_tokens
        ).await?;

        let class_diagram = self.stage(
            "class diagram",
            &class_diagram_prompt(&use_case),
            self.settings.max_tokens
        ).await?;

        let code = self.stage(
            "code",
            &code_prompt(&class_diagram, &use_case, &self.settings.code_language),
            self.settings.code_max_tokens
        ).await?;

        Ok(ArtifactBundle {
            requirement_text: requirement_text.to_string(),
            use_case,
            class_diagram,
            code,
            code_language: self.settings.code_language.clone(),
            strategy_name: strategy_name.to_string(),
            trial,
        })
    }

    /// Write the rendered document in one step
    pub fn persist(&self, bundle: &ArtifactBundle) -> ReqClassResult<PathBuf> {
        let dir: &Path = &self.settings.output_dir;
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
        let path = dir.join(bundle.file_name());
        fs::write(&path, bundle.render())?;
        Ok(path)
    }

    /// Generate artifacts if the gate is open and both labels are F.
    ///
    /// The gate is closed only after the document has been written, so a
    /// failed attempt leaves it open for the next qualifying requirement.
    pub async fn maybe_generate(
        &self,
        gate: &mut ArtifactGate,
        requirement_text: &str,
        predicted: Label,
        truth: Label,
        strategy_name: &str,
        trial: u32
    ) -> ArtifactOutcome {
        if !gate.is_open() || !predicted.is_functional() || !truth.is_functional() {
            return ArtifactOutcome::Skipped;
        }

        info!("Generating software artifacts for strategy {} (trial {})", strategy_name, trial);

        let result = match self.generate(requirement_text, strategy_name, trial).await {
            Ok(bundle) => self.persist(&bundle),
            Err(e) => Err(e),
        };

        match result {
            Ok(path) => {
                gate.mark_generated();
                info!("Software artifacts saved to {}", path.display());
                ArtifactOutcome::Generated(path)
            }
            Err(e) => {
                error!("Error generating software artifacts: {}", e);
                ArtifactOutcome::Failed(e.to_string())
            }
        }
    }
}
