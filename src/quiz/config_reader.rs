use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::quiz::*;

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: u32,
    pub section: u8,
    #[serde(rename = "optionA")]
    pub option_a: String,
    #[serde(rename = "optionB")]
    pub option_b: String,
    pub dimension: Option<String>,
}

impl QuestionRecord {
    // The letters are shared between the two models, the section tells them apart.
    fn to_question(&self) -> QuizResult<Question> {
        let section = Section::from_number(self.section).context(UnknownSectionSnafu {
            id: self.id,
            section: self.section,
        })?;
        let dimension = match &self.dimension {
            None => None,
            Some(label) => {
                let l = label.trim();
                let dim = match section {
                    Section::Personality => BigFive::ALL
                        .iter()
                        .find(|d| d.letter() == l || d.name() == l)
                        .map(|d| Dimension::BigFive(*d)),
                    Section::Interests => Riasec::ALL
                        .iter()
                        .find(|d| d.letter() == l || d.name() == l)
                        .map(|d| Dimension::Riasec(*d)),
                    _ => None,
                };
                Some(dim.context(UnknownDimensionSnafu {
                    id: self.id,
                    label: label.clone(),
                    section: self.section,
                })?)
            }
        };
        Ok(Question {
            id: self.id,
            section,
            option_a: self.option_a.clone(),
            option_b: self.option_b.clone(),
            dimension,
        })
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBankConfig {
    pub questions: Vec<QuestionRecord>,
}

/// Reads a question bank. The layout is not checked here: this is done when
/// building the engine.
pub fn read_question_bank(path: &str) -> QuizResult<QuestionBank> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let config: QuestionBankConfig =
        serde_json::from_str(&contents).context(ParsingJsonSnafu {})?;
    debug!(
        "read_question_bank: {} questions read",
        config.questions.len()
    );
    let questions = config
        .questions
        .iter()
        .map(|q| q.to_question())
        .collect::<QuizResult<Vec<Question>>>()?;
    Ok(QuestionBank::new(questions))
}

pub fn read_summary(path: &str) -> QuizResult<JSValue> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let js: JSValue = serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {})?;
    Ok(js)
}
