use crate::config::ExperimentConfig;
use crate::implementations::config::HarnessConfig;
use crate::models::artifact::{ ArtifactBundle, ArtifactGate };
use crate::models::common::{ Label, Provider };
use crate::models::evaluation::StrategyScore;
use crate::models::requirement::{ derive_true_label, Dataset };
use crate::models::strategy::PromptCatalog;

#[test]
fn true_label_collapses_classes() {
    let labels: Vec<Label> = ["F", "PE", "F"]
        .iter()
        .map(|c| derive_true_label(Some(*c)))
        .collect();
    assert_eq!(labels, vec![Label::Functional, Label::NonFunctional, Label::Functional]);

    assert_eq!(derive_true_label(Some("")), Label::NonFunctional);
    assert_eq!(derive_true_label(Some("f")), Label::NonFunctional);
    assert_eq!(derive_true_label(Some("US")), Label::NonFunctional);
    assert_eq!(derive_true_label(None), Label::NonFunctional);
}

#[test]
fn label_strings() {
    assert_eq!(Label::Functional.to_string(), "F");
    assert_eq!(Label::NonFunctional.to_string(), "NF");
    assert_eq!(Label::Error.to_string(), "ERROR");
    assert_eq!("NF".parse::<Label>(), Ok(Label::NonFunctional));
    assert!("maybe".parse::<Label>().is_err());
}

#[test]
fn builtin_catalog_keeps_declaration_order() {
    let catalog = PromptCatalog::builtin();
    let names: Vec<&str> = catalog.names().collect();
    assert_eq!(
        names,
        vec!["Cognitive Verifier", "Context Manager", "Persona", "Question Refinement", "Template"]
    );
}

#[test]
fn strategy_appends_text_without_delimiter() {
    let catalog = PromptCatalog::new().with_strategy("Bare", "Label this:");
    let strategy = catalog.get("Bare").unwrap();
    assert_eq!(strategy.render("The system shall log in users."), "Label this:The system shall log in users.");

    let template = PromptCatalog::builtin();
    let template = template.get("Template").unwrap();
    assert!(template.render("X").ends_with("Requirement: X"));
}

#[test]
fn duplicate_strategy_keeps_position() {
    let catalog = PromptCatalog::new()
        .with_strategy("A", "first")
        .with_strategy("B", "second")
        .with_strategy("A", "replaced");
    let names: Vec<&str> = catalog.names().collect();
    assert_eq!(names, vec!["A", "B"]);
    assert_eq!(catalog.get("A").unwrap().instruction_text, "replaced");
}

#[test]
fn artifact_document_sections_in_order() {
    let bundle = ArtifactBundle {
        requirement_text: "The system shall email receipts.".to_string(),
        use_case: "UC".to_string(),
        class_diagram: "CD".to_string(),
        code: "print('hi')".to_string(),
        code_language: "Python".to_string(),
        strategy_name: "Question Refinement".to_string(),
        trial: 1,
    };

    assert_eq!(bundle.file_name(), "software_artifacts_Question_Refinement_trial_1.txt");

    let doc = bundle.render();
    let markers = [
        "--- PROMPT PATTERN: Question Refinement ---",
        "--- REQUIREMENT ---\nThe system shall email receipts.",
        "--- USE CASE ---\nUC",
        "--- CLASS DIAGRAM ---\nCD",
        "--- PYTHON CODE ---\nprint('hi')",
    ];
    let mut last = 0;
    for marker in markers {
        let pos = doc.find(marker).unwrap_or_else(|| panic!("missing section {:?}", marker));
        assert!(pos >= last, "section {:?} out of order", marker);
        last = pos;
    }
    assert!(doc.ends_with(&format!("\n{}\n", "=".repeat(50))));
}

#[test]
fn gate_is_one_shot() {
    let mut gate = ArtifactGate::new(true);
    assert!(gate.is_open());
    gate.mark_generated();
    assert!(!gate.is_open());
    assert!(gate.already_generated());

    let disabled = ArtifactGate::new(false);
    assert!(!disabled.is_open());
}

#[test]
fn column_names_per_trial() {
    let single = ExperimentConfig::default();
    assert_eq!(single.column_name("Persona", 1), "Persona");

    let multi = ExperimentConfig { trial_count: 3, ..ExperimentConfig::default() };
    assert_eq!(multi.column_name("Persona", 2), "Persona (trial 2)");
    assert_eq!(multi.trials().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn experiment_defaults() {
    let config = ExperimentConfig::default();
    assert_eq!(config.sample_size, 50);
    assert_eq!(config.trial_count, 1);
    assert_eq!(config.classification_max_tokens, 100);
    assert_eq!(config.artifact_max_tokens, 500);
    assert_eq!(config.code_max_tokens, 700);
    assert!((config.classification_temperature - 0.2).abs() < f32::EPSILON);
    assert!(config.generate_artifacts);
}

#[test]
fn yaml_config_overrides_and_orders_strategies() {
    let yaml = r#"
llm_api:
  provider: anthropic
  model: claude-test
experiment:
  sample_size: 10
  seed: 7
strategies:
  Zeta: "Zeta prompt: "
  Alpha: "Alpha prompt: "
"#;
    let config = HarnessConfig::from_yaml(yaml).unwrap();
    assert_eq!(config.llm_api.provider, Some(Provider::Anthropic));
    assert_eq!(config.llm_api.model.as_deref(), Some("claude-test"));
    assert_eq!(config.experiment.sample_size, 10);
    assert_eq!(config.experiment.seed, Some(7));
    // Unlisted fields keep their defaults
    assert_eq!(config.experiment.code_max_tokens, 700);

    let names: Vec<String> = config.catalog().names().map(str::to_string).collect();
    assert_eq!(names, vec!["Zeta", "Alpha"]);
}

#[test]
fn empty_yaml_uses_builtin_catalog() {
    let config = HarnessConfig::from_yaml("{}").unwrap();
    assert_eq!(config.catalog(), PromptCatalog::builtin());
    assert_eq!(config.experiment, ExperimentConfig::default());
}

#[test]
fn score_counts_confusion_and_errors() {
    let mut dataset = Dataset::from_pairs(vec![("a", "F"), ("b", "F"), ("c", "PE"), ("d", "US")]);
    dataset.reset_column("S");
    dataset.set_label(0, "S", Label::Functional);
    dataset.set_label(1, "S", Label::NonFunctional);
    dataset.set_label(2, "S", Label::NonFunctional);
    dataset.set_label(3, "S", Label::Error);

    let score = StrategyScore::from_column(&dataset, "S");
    assert_eq!(score.total, 4);
    assert_eq!(score.correct, 2);
    assert_eq!(score.errors, 1);
    assert_eq!(score.true_positive, 1);
    assert_eq!(score.false_negative, 1);
    assert_eq!(score.true_negative, 1);
    assert_eq!(score.false_positive, 0);
    assert!((score.accuracy() - 0.5).abs() < 1e-9);
    assert!((score.precision() - 1.0).abs() < 1e-9);
    assert!((score.recall() - 0.5).abs() < 1e-9);
}
