/*!
Scoring and narrative engine for an 80-item forced-choice questionnaire.

Each answer picks option `A` or `B` of a question. The questions are split in
four sections, each feeding one score model:

1. personality (Big Five), 30 questions in 5 groups of 6
2. career interests (RIASEC), 18 questions in 6 groups of 3
3. strengths, 20 questions counted as an A/B split
4. motivations, 12 questions counted as an A/B split

```
use quiz_scoring::{AnswerSet, BigFive, Choice, ScoringEngine};

let engine = ScoringEngine::standard()?;
let answers: AnswerSet = (1..=80).map(|id| (id, Choice::A)).collect();
let assessment = engine.assess(&answers);

assert_eq!(assessment.scores.big_five(BigFive::E), 6);
assert_eq!(assessment.reports.len(), 4);
# Ok::<(), quiz_scoring::ConfigurationError>(())
```

See the [manual] for the details of the scoring rules.
*/

mod aggregate;
mod bank;
mod bucket;
pub mod builder;
mod config;
pub mod manual;
mod narrative;

use log::debug;

pub use crate::aggregate::{aggregate, AnswerSet, AnswerSource};
pub use crate::bank::QuestionBank;
pub use crate::bucket::BucketLayout;
pub use crate::config::*;
pub use crate::narrative::{flatten, generate, rank_interests};

/// The immutable scoring configuration: a question bank and its validated layout.
///
/// It can only be built from a bank that satisfies the layout rules, so every
/// engine value is safe to score with. Build it once and share it by reference.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ScoringEngine {
    bank: QuestionBank,
    layout: BucketLayout,
}

impl ScoringEngine {
    pub fn new(bank: QuestionBank, rules: &LayoutRules) -> Result<ScoringEngine, ConfigurationError> {
        let layout = BucketLayout::build(&bank, rules)?;
        Ok(ScoringEngine { bank, layout })
    }

    /// The engine for the built-in 80-question bank.
    pub fn standard() -> Result<ScoringEngine, ConfigurationError> {
        ScoringEngine::new(QuestionBank::standard(), &LayoutRules::STANDARD)
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn layout(&self) -> &BucketLayout {
        &self.layout
    }

    pub fn score(&self, answers: &dyn AnswerSource) -> ScoreSheet {
        aggregate(&self.layout, answers)
    }

    /// Scores one submission and renders its reports.
    pub fn assess(&self, answers: &dyn AnswerSource) -> Assessment {
        let scores = self.score(answers);
        debug!(
            "assess: big five {:?}, interests {:?}, strengths {}/{}, motivations {}/{}",
            scores.big,
            scores.ria,
            scores.strengths.a,
            scores.strengths.b,
            scores.motivations.a,
            scores.motivations.b
        );
        let reports = generate(&scores);
        debug!("assess: {} reports", reports.len());
        Assessment { scores, reports }
    }

    /// Like [`ScoringEngine::assess`], also reporting the answers to ids
    /// the bank does not contain.
    pub fn assess_set(&self, answers: &AnswerSet) -> Assessment {
        let unknown = answers.unknown_ids(&self.layout);
        if !unknown.is_empty() {
            debug!("assess_set: ignoring answers to unknown questions {:?}", unknown);
        }
        self.assess(answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn standard_engine() {
        init();
        let engine = ScoringEngine::standard().unwrap();
        assert_eq!(engine.bank().len(), 80);
        assert_eq!(engine.layout().big_five_groups().len(), 5);
    }

    #[test]
    fn invalid_bank_blocks_scoring() {
        init();
        let mut qs = QuestionBank::standard().questions().to_vec();
        qs.truncate(40);
        let res = ScoringEngine::new(QuestionBank::new(qs), &LayoutRules::STANDARD);
        assert_eq!(
            res,
            Err(ConfigurationError::WrongQuestionCount {
                expected: 80,
                found: 40
            })
        );
    }

    #[test]
    fn all_a_assessment() {
        init();
        let engine = ScoringEngine::standard().unwrap();
        let answers: AnswerSet = (1..=80).map(|id| (id, Choice::A)).collect();
        let a = engine.assess_set(&answers);
        let big: Vec<u32> = a.scores.big.iter().map(|p| p.1).collect();
        let ria: Vec<u32> = a.scores.ria.iter().map(|p| p.1).collect();
        assert_eq!(big, vec![6; 5]);
        assert_eq!(ria, vec![3; 6]);
        assert_eq!(a.scores.strengths, SplitCount { a: 20, b: 0 });
        assert_eq!(a.scores.motivations, SplitCount { a: 12, b: 0 });

        let ranked = rank_interests(&a.scores);
        assert_eq!(ranked[0].0, Riasec::R);
        assert_eq!(ranked[1].0, Riasec::I);
        assert!(a.reports[2].segments[0].starts_with("Your strengths lean analytical"));
        assert!(a.reports[3].segments[0].starts_with("You are mostly driven by intrinsic"));
    }

    #[test]
    fn all_unanswered_assessment() {
        init();
        let engine = ScoringEngine::standard().unwrap();
        let a = engine.assess_set(&AnswerSet::new());
        assert!(a.scores.big.iter().all(|p| p.1 == 0));
        assert!(a.scores.ria.iter().all(|p| p.1 == 0));
        assert!(a.reports[2].segments[0].starts_with("Your strengths are balanced"));
        assert!(a.reports[3].segments[0].starts_with("Your motivation is balanced"));
        for seg in a.reports[0].segments.iter() {
            assert!(seg.contains("(0)"));
        }
    }

    #[test]
    fn resubmission_recomputes() {
        init();
        let engine = ScoringEngine::standard().unwrap();
        let mut answers = AnswerSet::new();
        answers.insert(1, Choice::A);
        let first = engine.assess(&answers);
        answers.insert(1, Choice::B);
        let second = engine.assess(&answers);
        assert_eq!(first.scores.big_five(BigFive::E), 1);
        assert_eq!(second.scores.big_five(BigFive::E), 0);
    }
}
