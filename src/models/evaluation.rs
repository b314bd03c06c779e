use serde::Serialize;

use crate::models::common::Label;
use crate::models::requirement::Dataset;

/// How one result column scored against the derived ground truth
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StrategyScore {
    pub column: String,
    pub total: usize,
    pub correct: usize,
    pub errors: usize,
    /// Predicted F, truly F
    pub true_positive: usize,
    /// Predicted F, truly NF
    pub false_positive: usize,
    /// Predicted NF, truly NF
    pub true_negative: usize,
    /// Predicted NF, truly F
    pub false_negative: usize,
}

impl StrategyScore {
    pub fn from_column(dataset: &Dataset, column: &str) -> Self {
        let mut score = StrategyScore { column: column.to_string(), ..Default::default() };

        for record in &dataset.records {
            score.total += 1;
            match (record.result(column), record.true_label) {
                (Some(Label::Functional), Label::Functional) => score.true_positive += 1,
                (Some(Label::Functional), _) => score.false_positive += 1,
                (Some(Label::NonFunctional), Label::NonFunctional) => score.true_negative += 1,
                (Some(Label::NonFunctional), _) => score.false_negative += 1,
                // Unclassified cells count against the strategy like errors
                (Some(Label::Error), _) | (None, _) => score.errors += 1,
            }
        }
        score.correct = score.true_positive + score.true_negative;
        score
    }

    pub fn accuracy(&self) -> f64 {
        ratio(self.correct, self.total)
    }

    pub fn precision(&self) -> f64 {
        ratio(self.true_positive, self.true_positive + self.false_positive)
    }

    pub fn recall(&self) -> f64 {
        ratio(self.true_positive, self.true_positive + self.false_negative)
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 { 0.0 } else { (num as f64) / (den as f64) }
}

/// Score every result column of the dataset, in column order
pub fn score_columns(dataset: &Dataset) -> Vec<StrategyScore> {
    dataset
        .result_columns()
        .iter()
        .map(|column| StrategyScore::from_column(dataset, column))
        .collect()
}
