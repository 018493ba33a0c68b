pub use crate::config::*;

use crate::aggregate::AnswerSet;
use crate::bank::QuestionBank;

/// A builder for assembling the answers of one respondent from raw labels.
///
/// Raw labels are what form exports contain: the letter of the option, the
/// literal text of the option, or nothing.
///
/// ```
/// use quiz_scoring::builder::Builder;
/// use quiz_scoring::{AnswerError, AnswerSource, Choice, QuestionBank};
///
/// let bank = QuestionBank::standard();
/// let mut builder = Builder::new(&bank);
///
/// builder.add_answer(1, "A")?;
/// builder.add_answer(2, "I need quiet time after a party")?;
/// builder.add_answer(3, "")?;
///
/// let answers = builder.build();
/// assert_eq!(answers.get(1), Some(Choice::A));
/// assert_eq!(answers.get(2), Some(Choice::B));
/// assert_eq!(answers.get(3), None);
/// # Ok::<(), AnswerError>(())
/// ```
pub struct Builder<'a> {
    bank: &'a QuestionBank,
    answers: AnswerSet,
}

impl<'a> Builder<'a> {
    pub fn new(bank: &'a QuestionBank) -> Builder<'a> {
        Builder {
            bank,
            answers: AnswerSet::new(),
        }
    }

    /// Adds the answer to one question.
    ///
    /// A blank label leaves the question unanswered. Labels are compared
    /// after trimming whitespace; letters are case-insensitive.
    pub fn add_answer(&mut self, question_id: u32, label: &str) -> Result<(), AnswerError> {
        let question = self
            .bank
            .get(question_id)
            .ok_or(AnswerError::UnknownQuestion(question_id))?;
        let l = label.trim();
        let choice = match l {
            "" => None,
            "A" | "a" => Some(Choice::A),
            "B" | "b" => Some(Choice::B),
            s if s == question.option_a.trim() => Some(Choice::A),
            s if s == question.option_b.trim() => Some(Choice::B),
            _ => {
                return Err(AnswerError::InvalidChoice {
                    question_id,
                    label: label.to_string(),
                })
            }
        };
        match choice {
            Some(c) => self.answers.insert(question_id, c),
            None => self.answers.remove(question_id),
        }
        Ok(())
    }

    pub fn add_choice(&mut self, question_id: u32, choice: Choice) -> Result<(), AnswerError> {
        if self.bank.get(question_id).is_none() {
            return Err(AnswerError::UnknownQuestion(question_id));
        }
        self.answers.insert(question_id, choice);
        Ok(())
    }

    pub fn build(self) -> AnswerSet {
        self.answers
    }
}
