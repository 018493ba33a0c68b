use log::{debug, info};
use std::collections::HashSet;

use crate::bank::QuestionBank;
use crate::config::*;

/// The partition of the question ids, computed once from a validated bank.
///
/// Sections 1 and 2 are further split into contiguous groups of equal size.
/// The group a question falls in is decided by its rank inside its section
/// (ids ascending), so the layout is only built after checking that the bank
/// has the expected shape.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct BucketLayout {
    sections: Vec<(Section, Vec<u32>)>,
    big_five: Vec<(BigFive, Vec<u32>)>,
    riasec: Vec<(Riasec, Vec<u32>)>,
}

impl BucketLayout {
    pub fn build(bank: &QuestionBank, rules: &LayoutRules) -> Result<BucketLayout, ConfigurationError> {
        let questions = bank.questions();
        if questions.len() != rules.total_questions {
            return Err(ConfigurationError::WrongQuestionCount {
                expected: rules.total_questions,
                found: questions.len(),
            });
        }

        let mut seen: HashSet<u32> = HashSet::new();
        for q in questions.iter() {
            if !seen.insert(q.id) {
                return Err(ConfigurationError::DuplicateQuestionId(q.id));
            }
        }
        if let Some(q) = questions
            .iter()
            .find(|q| q.id == 0 || q.id as usize > rules.total_questions)
        {
            return Err(ConfigurationError::QuestionIdOutOfRange(q.id));
        }

        let sections: Vec<(Section, Vec<u32>)> = Section::ALL
            .iter()
            .map(|s| (*s, bank.in_section(*s).map(|q| q.id).collect()))
            .collect();
        for (section, ids) in sections.iter() {
            let expected = rules.section_size(*section);
            if ids.len() != expected {
                return Err(ConfigurationError::WrongSectionSize {
                    section: *section,
                    expected,
                    found: ids.len(),
                });
            }
        }
        debug!(
            "BucketLayout::build: section sizes: {:?}",
            sections
                .iter()
                .map(|(s, ids)| (s.number(), ids.len()))
                .collect::<Vec<_>>()
        );

        let big_five = split_groups(
            Section::Personality,
            &sections[Section::Personality.index()].1,
            &BigFive::ALL,
        )?;
        let riasec = split_groups(
            Section::Interests,
            &sections[Section::Interests.index()].1,
            &Riasec::ALL,
        )?;

        for (dim, ids) in big_five.iter() {
            check_tags(bank, ids, Dimension::BigFive(*dim))?;
        }
        for (dim, ids) in riasec.iter() {
            check_tags(bank, ids, Dimension::Riasec(*dim))?;
        }
        for section in [Section::Strengths, Section::Motivations] {
            if let Some((id, found)) = bank
                .in_section(section)
                .find_map(|q| q.dimension.map(|d| (q.id, d)))
            {
                return Err(ConfigurationError::UnexpectedDimensionTag {
                    question_id: id,
                    found,
                });
            }
        }

        let layout = BucketLayout {
            sections,
            big_five,
            riasec,
        };
        info!(
            "Question layout: {} questions, {} personality groups of {}, {} interest groups of {}",
            rules.total_questions,
            layout.big_five.len(),
            layout.big_five.first().map(|g| g.1.len()).unwrap_or(0),
            layout.riasec.len(),
            layout.riasec.first().map(|g| g.1.len()).unwrap_or(0),
        );
        Ok(layout)
    }

    /// The ids of a section, by increasing id.
    pub fn section_ids(&self, section: Section) -> &[u32] {
        &self.sections[section.index()].1
    }

    pub fn big_five_groups(&self) -> &[(BigFive, Vec<u32>)] {
        &self.big_five
    }

    pub fn riasec_groups(&self) -> &[(Riasec, Vec<u32>)] {
        &self.riasec
    }

    /// The dimension a question counts for, if it belongs to section 1 or 2.
    pub fn dimension_of(&self, question_id: u32) -> Option<Dimension> {
        let big = self
            .big_five
            .iter()
            .find(|(_, ids)| ids.contains(&question_id))
            .map(|(d, _)| Dimension::BigFive(*d));
        big.or_else(|| {
            self.riasec
                .iter()
                .find(|(_, ids)| ids.contains(&question_id))
                .map(|(d, _)| Dimension::Riasec(*d))
        })
    }

    pub fn contains(&self, question_id: u32) -> bool {
        self.sections
            .iter()
            .any(|(_, ids)| ids.binary_search(&question_id).is_ok())
    }
}

fn split_groups<D: Copy>(
    section: Section,
    ids: &[u32],
    dims: &[D],
) -> Result<Vec<(D, Vec<u32>)>, ConfigurationError> {
    if ids.len() < dims.len() || ids.len() % dims.len() != 0 {
        return Err(ConfigurationError::UnevenDimensionGroups {
            section,
            size: ids.len(),
            groups: dims.len(),
        });
    }
    let group_size = ids.len() / dims.len();
    Ok(dims
        .iter()
        .cloned()
        .zip(ids.chunks(group_size).map(|c| c.to_vec()))
        .collect())
}

fn check_tags(bank: &QuestionBank, ids: &[u32], expected: Dimension) -> Result<(), ConfigurationError> {
    for id in ids.iter() {
        if let Some(found) = bank.get(*id).and_then(|q| q.dimension) {
            if found != expected {
                return Err(ConfigurationError::DimensionMismatch {
                    question_id: *id,
                    expected,
                    found,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u32, section: Section, dimension: Option<Dimension>) -> Question {
        Question {
            id,
            section,
            option_a: format!("a{}", id),
            option_b: format!("b{}", id),
            dimension,
        }
    }

    fn standard_questions() -> Vec<Question> {
        QuestionBank::standard().questions().to_vec()
    }

    #[test]
    fn standard_layout() {
        let layout = BucketLayout::build(&QuestionBank::standard(), &LayoutRules::STANDARD).unwrap();
        assert_eq!(layout.section_ids(Section::Personality).len(), 30);
        assert_eq!(layout.section_ids(Section::Interests).len(), 18);
        assert_eq!(layout.section_ids(Section::Strengths).len(), 20);
        assert_eq!(layout.section_ids(Section::Motivations).len(), 12);

        let big: Vec<(BigFive, Vec<u32>)> = layout.big_five_groups().to_vec();
        assert_eq!(big[0], (BigFive::E, vec![1, 2, 3, 4, 5, 6]));
        assert_eq!(big[4], (BigFive::O, vec![25, 26, 27, 28, 29, 30]));

        let ria: Vec<(Riasec, Vec<u32>)> = layout.riasec_groups().to_vec();
        assert_eq!(ria[0], (Riasec::R, vec![31, 32, 33]));
        assert_eq!(ria[5], (Riasec::C, vec![46, 47, 48]));

        assert_eq!(layout.section_ids(Section::Strengths).first(), Some(&49));
        assert_eq!(layout.section_ids(Section::Motivations).last(), Some(&80));
    }

    #[test]
    fn dimension_lookup() {
        let layout = BucketLayout::build(&QuestionBank::standard(), &LayoutRules::STANDARD).unwrap();
        assert_eq!(layout.dimension_of(7), Some(Dimension::BigFive(BigFive::A)));
        assert_eq!(layout.dimension_of(24), Some(Dimension::BigFive(BigFive::N)));
        assert_eq!(layout.dimension_of(40), Some(Dimension::Riasec(Riasec::S)));
        assert_eq!(layout.dimension_of(60), None);
        assert!(layout.contains(80));
        assert!(!layout.contains(81));
        assert!(!layout.contains(0));
    }

    #[test]
    fn wrong_total_count() {
        let mut qs = standard_questions();
        qs.pop();
        let res = BucketLayout::build(&QuestionBank::new(qs), &LayoutRules::STANDARD);
        assert_eq!(
            res,
            Err(ConfigurationError::WrongQuestionCount {
                expected: 80,
                found: 79
            })
        );
    }

    #[test]
    fn duplicate_id() {
        let mut qs = standard_questions();
        qs[79].id = 79;
        let res = BucketLayout::build(&QuestionBank::new(qs), &LayoutRules::STANDARD);
        assert_eq!(res, Err(ConfigurationError::DuplicateQuestionId(79)));
    }

    #[test]
    fn id_out_of_range() {
        let mut qs = standard_questions();
        qs[79].id = 81;
        let res = BucketLayout::build(&QuestionBank::new(qs), &LayoutRules::STANDARD);
        assert_eq!(res, Err(ConfigurationError::QuestionIdOutOfRange(81)));
    }

    #[test]
    fn wrong_section_size() {
        // Move the first strengths question into the interests section.
        let mut qs = standard_questions();
        qs[48].section = Section::Interests;
        let res = BucketLayout::build(&QuestionBank::new(qs), &LayoutRules::STANDARD);
        assert_eq!(
            res,
            Err(ConfigurationError::WrongSectionSize {
                section: Section::Interests,
                expected: 18,
                found: 19
            })
        );
    }

    #[test]
    fn uneven_groups() {
        let rules = LayoutRules {
            total_questions: 16,
            section_sizes: [7, 6, 2, 1],
        };
        let mut qs = Vec::new();
        for id in 1..=7 {
            qs.push(question(id, Section::Personality, None));
        }
        for id in 8..=13 {
            qs.push(question(id, Section::Interests, None));
        }
        qs.push(question(14, Section::Strengths, None));
        qs.push(question(15, Section::Strengths, None));
        qs.push(question(16, Section::Motivations, None));
        let res = BucketLayout::build(&QuestionBank::new(qs), &rules);
        assert_eq!(
            res,
            Err(ConfigurationError::UnevenDimensionGroups {
                section: Section::Personality,
                size: 7,
                groups: 5
            })
        );
    }

    #[test]
    fn reordered_tag_is_detected() {
        // An extraversion slot tagged as openness, as after reordering the fixture.
        let mut qs = standard_questions();
        qs[0].dimension = Some(Dimension::BigFive(BigFive::O));
        let res = BucketLayout::build(&QuestionBank::new(qs), &LayoutRules::STANDARD);
        assert_eq!(
            res,
            Err(ConfigurationError::DimensionMismatch {
                question_id: 1,
                expected: Dimension::BigFive(BigFive::E),
                found: Dimension::BigFive(BigFive::O),
            })
        );
    }

    #[test]
    fn tag_from_wrong_model() {
        let mut qs = standard_questions();
        qs[30].dimension = Some(Dimension::BigFive(BigFive::E));
        let res = BucketLayout::build(&QuestionBank::new(qs), &LayoutRules::STANDARD);
        assert!(matches!(
            res,
            Err(ConfigurationError::DimensionMismatch { question_id: 31, .. })
        ));
    }

    #[test]
    fn tag_outside_scored_dimensions() {
        let mut qs = standard_questions();
        qs[48].dimension = Some(Dimension::BigFive(BigFive::E));
        let res = BucketLayout::build(&QuestionBank::new(qs), &LayoutRules::STANDARD);
        assert_eq!(
            res,
            Err(ConfigurationError::UnexpectedDimensionTag {
                question_id: 49,
                found: Dimension::BigFive(BigFive::E),
            })
        );

        let mut qs = standard_questions();
        qs[79].dimension = Some(Dimension::Riasec(Riasec::C));
        let res = BucketLayout::build(&QuestionBank::new(qs), &LayoutRules::STANDARD);
        assert!(matches!(
            res,
            Err(ConfigurationError::UnexpectedDimensionTag { question_id: 80, .. })
        ));
    }

    #[test]
    fn small_alternative_fixture() {
        let rules = LayoutRules {
            total_questions: 26,
            section_sizes: [10, 12, 2, 2],
        };
        let mut qs = Vec::new();
        for id in 1..=10 {
            qs.push(question(id, Section::Personality, None));
        }
        for id in 11..=22 {
            qs.push(question(id, Section::Interests, None));
        }
        for id in 23..=24 {
            qs.push(question(id, Section::Strengths, None));
        }
        for id in 25..=26 {
            qs.push(question(id, Section::Motivations, None));
        }
        let layout = BucketLayout::build(&QuestionBank::new(qs), &rules).unwrap();
        assert_eq!(layout.big_five_groups()[1], (BigFive::A, vec![3, 4]));
        assert_eq!(layout.riasec_groups()[5], (Riasec::C, vec![21, 22]));
    }
}
