use indexmap::IndexMap;
use serde::{ Deserialize, Serialize };

/// A named prompt-engineering pattern used as the instruction prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strategy {
    pub name: String,
    pub instruction_text: String,
}

impl Strategy {
    pub fn new(name: impl Into<String>, instruction_text: impl Into<String>) -> Self {
        Self { name: name.into(), instruction_text: instruction_text.into() }
    }

    /// The user prompt for a requirement: instruction followed directly by the text
    pub fn render(&self, requirement_text: &str) -> String {
        format!("{}{}", self.instruction_text, requirement_text)
    }
}

/// Ordered, immutable set of strategies.
///
/// Iteration follows insertion order. That order decides the column order of
/// the result table and which strategy gets the first chance to trigger
/// artifact generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IndexMap<String, String>", into = "IndexMap<String, String>")]
pub struct PromptCatalog {
    strategies: IndexMap<String, Strategy>,
}

impl PromptCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a strategy; a duplicate name replaces the template but keeps its position
    pub fn with_strategy(mut self, name: impl Into<String>, instruction_text: impl Into<String>) -> Self {
        let strategy = Strategy::new(name, instruction_text);
        self.strategies.insert(strategy.name.clone(), strategy);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Strategy> {
        self.strategies.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Strategy> {
        self.strategies.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.strategies.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// The five patterns the experiment ships with
    pub fn builtin() -> Self {
        Self::new()
            .with_strategy(
                "Cognitive Verifier",
                "Classify into functional (F) or non-functional (NF). Ask questions if needed.\n\nRequirement: "
            )
            .with_strategy(
                "Context Manager",
                "Classify into functional (F) or non-functional (NF). Explain your reasoning.\n\nRequirement: "
            )
            .with_strategy(
                "Persona",
                "Act as a requirements engineering expert. Classify into F or NF.\n\nRequirement: "
            )
            .with_strategy(
                "Question Refinement",
                "Classify into functional (F) or non-functional (NF). Suggest better versions if needed.\n\nRequirement: "
            )
            .with_strategy("Template", "Read the requirement and return only F or NF.\n\nRequirement: ")
    }
}

impl From<IndexMap<String, String>> for PromptCatalog {
    fn from(map: IndexMap<String, String>) -> Self {
        map.into_iter().fold(PromptCatalog::new(), |catalog, (name, text)| {
            catalog.with_strategy(name, text)
        })
    }
}

impl From<PromptCatalog> for IndexMap<String, String> {
    fn from(catalog: PromptCatalog) -> Self {
        catalog.strategies
            .into_iter()
            .map(|(name, s)| (name, s.instruction_text))
            .collect()
    }
}
