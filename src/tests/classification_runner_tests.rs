use tokio::test;

use super::ScriptedService;
use crate::implementations::classification_runner::{ ClassificationRunner, CLASSIFIER_SYSTEM_PROMPT };
use crate::implementations::completion_client::ServiceError;
use crate::models::common::{ Label, Role };
use crate::models::strategy::PromptCatalog;

const REQUIREMENT: &str = "The system shall allow users to reset their password.";

#[test]
async fn builds_system_and_user_messages() {
    let service = ScriptedService::fixed("F");
    let catalog = PromptCatalog::builtin();
    let persona = catalog.get("Persona").unwrap();
    let runner = ClassificationRunner::new(&service, 0.2, 100);

    let label = runner.classify(persona, REQUIREMENT).await;
    assert_eq!(label, Label::Functional);

    let requests = service.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.model, "scripted-model");
    assert_eq!(request.max_tokens, 100);
    assert!((request.temperature - 0.2).abs() < f32::EPSILON);
    assert_eq!(request.messages.len(), 2);
    assert_eq!(request.messages[0].role, Role::System);
    assert_eq!(request.messages[0].content, CLASSIFIER_SYSTEM_PROMPT);
    assert_eq!(request.messages[1].role, Role::User);
    assert_eq!(request.messages[1].content, format!("{}{}", persona.instruction_text, REQUIREMENT));
}

#[test]
async fn service_failure_becomes_error_label() {
    let service = ScriptedService::failing();
    let catalog = PromptCatalog::builtin();
    let runner = ClassificationRunner::new(&service, 0.2, 100);

    let attempt = runner.attempt(catalog.get("Template").unwrap(), REQUIREMENT).await;
    assert_eq!(attempt.label, Label::Error);
    assert!(matches!(attempt.response, Err(ServiceError::NetworkError(_))));
    // One call, no retry
    assert_eq!(service.call_count(), 1);
}

#[test]
async fn unparseable_response_becomes_error_label() {
    let service = ScriptedService::fixed("Functional");
    let catalog = PromptCatalog::builtin();
    let runner = ClassificationRunner::new(&service, 0.2, 100);

    let attempt = runner.attempt(catalog.get("Template").unwrap(), REQUIREMENT).await;
    assert_eq!(attempt.label, Label::Error);
    assert_eq!(attempt.response.unwrap(), "Functional");
}

#[test]
async fn fixed_response_is_deterministic() {
    let service = ScriptedService::fixed("This requirement is Non-Functional (NF) because...");
    let catalog = PromptCatalog::builtin();
    let strategy = catalog.get("Context Manager").unwrap();
    let runner = ClassificationRunner::new(&service, 0.2, 100);

    for _ in 0..5 {
        assert_eq!(runner.classify(strategy, REQUIREMENT).await, Label::NonFunctional);
    }
    assert_eq!(service.call_count(), 5);
}

#[test]
async fn http_error_is_recoverable() {
    let service = ScriptedService::new(|_| {
        Err(ServiceError::HttpError { status: 429, message: "rate limited".to_string() })
    });
    let catalog = PromptCatalog::builtin();
    let runner = ClassificationRunner::new(&service, 0.2, 100);

    assert_eq!(runner.classify(catalog.get("Persona").unwrap(), REQUIREMENT).await, Label::Error);
}
