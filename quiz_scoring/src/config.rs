// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// One of the two options of a forced-choice question.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub enum Choice {
    A,
    B,
}

impl Choice {
    pub fn letter(&self) -> &'static str {
        match self {
            Choice::A => "A",
            Choice::B => "B",
        }
    }
}

/// The four question groups. Each one feeds exactly one score model.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub enum Section {
    Personality,
    Interests,
    Strengths,
    Motivations,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Personality,
        Section::Interests,
        Section::Strengths,
        Section::Motivations,
    ];

    /// The section number as printed on the questionnaire (1 to 4).
    pub fn number(&self) -> u8 {
        match self {
            Section::Personality => 1,
            Section::Interests => 2,
            Section::Strengths => 3,
            Section::Motivations => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<Section> {
        Section::ALL.iter().find(|s| s.number() == n).cloned()
    }

    pub(crate) fn index(&self) -> usize {
        (self.number() - 1) as usize
    }
}

/// The five personality traits, in canonical order.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub enum BigFive {
    E,
    A,
    C,
    N,
    O,
}

impl BigFive {
    pub const ALL: [BigFive; 5] = [BigFive::E, BigFive::A, BigFive::C, BigFive::N, BigFive::O];

    pub fn letter(&self) -> &'static str {
        match self {
            BigFive::E => "E",
            BigFive::A => "A",
            BigFive::C => "C",
            BigFive::N => "N",
            BigFive::O => "O",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BigFive::E => "Extraversion",
            BigFive::A => "Agreeableness",
            BigFive::C => "Conscientiousness",
            BigFive::N => "Neuroticism",
            BigFive::O => "Openness",
        }
    }
}

/// The six career-interest categories, in canonical order.
///
/// The declaration order matters: it breaks ties when ranking interests.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub enum Riasec {
    R,
    I,
    A,
    S,
    E,
    C,
}

impl Riasec {
    pub const ALL: [Riasec; 6] = [
        Riasec::R,
        Riasec::I,
        Riasec::A,
        Riasec::S,
        Riasec::E,
        Riasec::C,
    ];

    pub fn letter(&self) -> &'static str {
        match self {
            Riasec::R => "R",
            Riasec::I => "I",
            Riasec::A => "A",
            Riasec::S => "S",
            Riasec::E => "E",
            Riasec::C => "C",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Riasec::R => "Realistic",
            Riasec::I => "Investigative",
            Riasec::A => "Artistic",
            Riasec::S => "Social",
            Riasec::E => "Enterprising",
            Riasec::C => "Conventional",
        }
    }
}

/// The sub-dimension a question of section 1 or 2 contributes to.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Dimension {
    BigFive(BigFive),
    Riasec(Riasec),
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::BigFive(d) => write!(f, "{} ({})", d.letter(), d.name()),
            Dimension::Riasec(d) => write!(f, "{} ({})", d.letter(), d.name()),
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Question {
    pub id: u32,
    pub section: Section,
    pub option_a: String,
    pub option_b: String,
    /// Explicit dimension tag. When present, it must agree with the
    /// positional slot of the question inside its section.
    pub dimension: Option<Dimension>,
}

// ******** Output data structures *********

/// A pair of counts for the sections scored as a simple A/B split.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default)]
pub struct SplitCount {
    pub a: u32,
    pub b: u32,
}

impl SplitCount {
    /// Number of answered questions.
    pub fn answered(&self) -> u32 {
        self.a + self.b
    }
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ScoreSheet {
    /// Counts of A answers, in canonical order E, A, C, N, O.
    pub big: Vec<(BigFive, u32)>,
    /// Counts of A answers, in canonical order R, I, A, S, E, C.
    pub ria: Vec<(Riasec, u32)>,
    pub strengths: SplitCount,
    pub motivations: SplitCount,
}

impl ScoreSheet {
    pub fn big_five(&self, dim: BigFive) -> u32 {
        self.big
            .iter()
            .find(|(d, _)| *d == dim)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    pub fn interest(&self, dim: Riasec) -> u32 {
        self.ria
            .iter()
            .find(|(d, _)| *d == dim)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }
}

/// A categorical range used to select narrative text.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum Band {
    Low,
    Mid,
    High,
}

impl Band {
    pub fn from_count(count: u32) -> Band {
        match count {
            0..=1 => Band::Low,
            2..=3 => Band::Mid,
            _ => Band::High,
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash)]
pub enum ReportKind {
    BigFive,
    Riasec,
    Strengths,
    Motivations,
}

impl ReportKind {
    /// Stable identifier, used in the summaries.
    pub fn key(&self) -> &'static str {
        match self {
            ReportKind::BigFive => "bigFive",
            ReportKind::Riasec => "riasec",
            ReportKind::Strengths => "strengths",
            ReportKind::Motivations => "motivations",
        }
    }
}

/// One of the four narrative reports.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Report {
    pub kind: ReportKind,
    pub title: String,
    pub segments: Vec<String>,
}

/// The outcome of one submission.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Assessment {
    pub scores: ScoreSheet,
    pub reports: Vec<Report>,
}

/// Errors detected while validating the question bank. Any of them blocks scoring.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum ConfigurationError {
    WrongQuestionCount {
        expected: usize,
        found: usize,
    },
    DuplicateQuestionId(u32),
    QuestionIdOutOfRange(u32),
    WrongSectionSize {
        section: Section,
        expected: usize,
        found: usize,
    },
    UnevenDimensionGroups {
        section: Section,
        size: usize,
        groups: usize,
    },
    DimensionMismatch {
        question_id: u32,
        expected: Dimension,
        found: Dimension,
    },
    /// A strengths or motivations question carries a dimension tag.
    UnexpectedDimensionTag {
        question_id: u32,
        found: Dimension,
    },
}

impl Error for ConfigurationError {}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationError::WrongQuestionCount { expected, found } => {
                write!(f, "expected {} questions, found {}", expected, found)
            }
            ConfigurationError::DuplicateQuestionId(id) => {
                write!(f, "question id {} appears more than once", id)
            }
            ConfigurationError::QuestionIdOutOfRange(id) => {
                write!(f, "question id {} is out of range", id)
            }
            ConfigurationError::WrongSectionSize {
                section,
                expected,
                found,
            } => write!(
                f,
                "section {} should have {} questions, found {}",
                section.number(),
                expected,
                found
            ),
            ConfigurationError::UnevenDimensionGroups {
                section,
                size,
                groups,
            } => write!(
                f,
                "section {} has {} questions, which cannot be split into {} equal groups",
                section.number(),
                size,
                groups
            ),
            ConfigurationError::DimensionMismatch {
                question_id,
                expected,
                found,
            } => write!(
                f,
                "question {} is tagged {} but its position maps it to {}",
                question_id, found, expected
            ),
            ConfigurationError::UnexpectedDimensionTag { question_id, found } => write!(
                f,
                "question {} is tagged {} but its section has no dimensions",
                question_id, found
            ),
        }
    }
}

/// Errors raised while assembling an answer set from raw labels.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum AnswerError {
    UnknownQuestion(u32),
    InvalidChoice { question_id: u32, label: String },
}

impl Error for AnswerError {}

impl Display for AnswerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerError::UnknownQuestion(id) => write!(f, "no question with id {}", id),
            AnswerError::InvalidChoice { question_id, label } => write!(
                f,
                "question {}: {:?} is not a valid answer",
                question_id, label
            ),
        }
    }
}

// ********* Configuration **********

/// The fixed numbers the question bank must satisfy.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct LayoutRules {
    pub total_questions: usize,
    /// Expected number of items per section, indexed by section number - 1.
    pub section_sizes: [usize; 4],
}

impl LayoutRules {
    pub const STANDARD: LayoutRules = LayoutRules {
        total_questions: 80,
        section_sizes: [30, 18, 20, 12],
    };

    pub fn section_size(&self, section: Section) -> usize {
        self.section_sizes[section.index()]
    }
}
