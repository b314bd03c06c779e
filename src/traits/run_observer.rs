use crate::models::artifact::ArtifactOutcome;
use crate::models::common::Label;

/// Hooks the experiment driver calls while it works through the sample.
///
/// All methods default to doing nothing.
pub trait RunObserver {
    /// A strategy/trial pass is about to start over `total` requirements
    fn on_pass_start(&mut self, _column: &str, _total: usize) {}

    /// Requirement `index` (zero-based) of the current pass has been classified
    fn on_classified(&mut self, _column: &str, _index: usize, _total: usize, _label: Label) {}

    /// The artifact pipeline did something other than skip
    fn on_artifact(&mut self, _outcome: &ArtifactOutcome) {}

    /// The current pass is complete
    fn on_pass_end(&mut self, _column: &str) {}
}

/// Observer that ignores every event
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
