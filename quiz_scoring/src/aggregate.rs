use log::debug;
use std::collections::HashMap;

use crate::bucket::BucketLayout;
use crate::config::*;

/// Read access to the answers of one submission.
///
/// `None` means the question was left unanswered.
pub trait AnswerSource {
    fn get(&self, question_id: u32) -> Option<Choice>;
}

/// An in-memory answer source, one per submission.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct AnswerSet {
    answers: HashMap<u32, Choice>,
}

impl AnswerSet {
    pub fn new() -> AnswerSet {
        AnswerSet::default()
    }

    /// Records an answer, replacing any previous answer to the same question.
    pub fn insert(&mut self, question_id: u32, choice: Choice) {
        self.answers.insert(question_id, choice);
    }

    pub fn remove(&mut self, question_id: u32) {
        self.answers.remove(&question_id);
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// The ids that are not part of the layout. They do not contribute to any score.
    pub fn unknown_ids(&self, layout: &BucketLayout) -> Vec<u32> {
        let mut res: Vec<u32> = self
            .answers
            .keys()
            .filter(|id| !layout.contains(**id))
            .cloned()
            .collect();
        res.sort();
        res
    }
}

impl FromIterator<(u32, Choice)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (u32, Choice)>>(iter: I) -> Self {
        AnswerSet {
            answers: iter.into_iter().collect(),
        }
    }
}

impl AnswerSource for AnswerSet {
    fn get(&self, question_id: u32) -> Option<Choice> {
        self.answers.get(&question_id).cloned()
    }
}

impl AnswerSource for HashMap<u32, Choice> {
    fn get(&self, question_id: u32) -> Option<Choice> {
        HashMap::get(self, &question_id).cloned()
    }
}

/// Computes the score sheet of one submission.
///
/// Only the ids of the layout are looked up: answers to other ids are
/// ignored, and unanswered questions contribute nothing.
pub fn aggregate(layout: &BucketLayout, answers: &dyn AnswerSource) -> ScoreSheet {
    let count_a = |ids: &[u32]| -> u32 {
        ids.iter()
            .filter(|id| answers.get(**id) == Some(Choice::A))
            .count() as u32
    };

    let big: Vec<(BigFive, u32)> = layout
        .big_five_groups()
        .iter()
        .map(|(dim, ids)| (*dim, count_a(ids)))
        .collect();

    let ria: Vec<(Riasec, u32)> = layout
        .riasec_groups()
        .iter()
        .map(|(dim, ids)| (*dim, count_a(ids)))
        .collect();

    let strengths = split_count(layout.section_ids(Section::Strengths), answers);
    let motivations = split_count(layout.section_ids(Section::Motivations), answers);

    let sheet = ScoreSheet {
        big,
        ria,
        strengths,
        motivations,
    };
    debug!("aggregate: score sheet: {:?}", sheet);
    sheet
}

fn split_count(ids: &[u32], answers: &dyn AnswerSource) -> SplitCount {
    let mut res = SplitCount::default();
    for id in ids.iter() {
        match answers.get(*id) {
            Some(Choice::A) => res.a += 1,
            Some(Choice::B) => res.b += 1,
            None => {}
        }
    }
    res
}
