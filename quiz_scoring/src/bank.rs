use crate::config::*;

/// The immutable list of questions.
///
/// Questions are kept sorted by id. The bank itself does not check the
/// layout invariants: this is done once by [`crate::bucket::BucketLayout::build`].
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(mut questions: Vec<Question>) -> QuestionBank {
        questions.sort_by_key(|q| q.id);
        QuestionBank { questions }
    }

    /// The standard 80-question bank.
    pub fn standard() -> QuestionBank {
        let questions = STANDARD_ITEMS
            .iter()
            .enumerate()
            .map(|(idx, (section, option_a, option_b, dimension))| Question {
                id: (idx + 1) as u32,
                section: *section,
                option_a: option_a.to_string(),
                option_b: option_b.to_string(),
                dimension: *dimension,
            })
            .collect();
        QuestionBank::new(questions)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, question_id: u32) -> Option<&Question> {
        self.questions
            .binary_search_by_key(&question_id, |q| q.id)
            .ok()
            .map(|idx| &self.questions[idx])
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The questions of a section, by increasing id.
    pub fn in_section(&self, section: Section) -> impl Iterator<Item = &Question> + '_ {
        self.questions.iter().filter(move |q| q.section == section)
    }
}

use Section::{Interests as S2, Motivations as S4, Personality as S1, Strengths as S3};

// Dimension tags, prefixed by the model: b for Big Five, r for RIASEC.
const BE: Option<Dimension> = Some(Dimension::BigFive(BigFive::E));
const BA: Option<Dimension> = Some(Dimension::BigFive(BigFive::A));
const BC: Option<Dimension> = Some(Dimension::BigFive(BigFive::C));
const BN: Option<Dimension> = Some(Dimension::BigFive(BigFive::N));
const BO: Option<Dimension> = Some(Dimension::BigFive(BigFive::O));
const RR: Option<Dimension> = Some(Dimension::Riasec(Riasec::R));
const RI: Option<Dimension> = Some(Dimension::Riasec(Riasec::I));
const RA: Option<Dimension> = Some(Dimension::Riasec(Riasec::A));
const RS: Option<Dimension> = Some(Dimension::Riasec(Riasec::S));
const RE: Option<Dimension> = Some(Dimension::Riasec(Riasec::E));
const RC: Option<Dimension> = Some(Dimension::Riasec(Riasec::C));

// Question ids are the 1-based positions in this table.
// Option A is always the pole that counts for the dimension.
// Strengths: A is an analytical strength, B an interpersonal one.
// Motivations: A is an intrinsic motive, B an extrinsic one.
#[rustfmt::skip]
const STANDARD_ITEMS: [(Section, &str, &str, Option<Dimension>); 80] = [
    // Extraversion
    (S1, "I start conversations with strangers", "I wait for others to approach me", BE),
    (S1, "I feel energized after a party", "I need quiet time after a party", BE),
    (S1, "I enjoy being the center of attention", "I prefer to stay in the background", BE),
    (S1, "I think out loud", "I think before I speak", BE),
    (S1, "I have a wide circle of acquaintances", "I have a few close friends", BE),
    (S1, "I seek out lively places", "I seek out calm places", BE),
    // Agreeableness
    (S1, "I trust people until proven wrong", "I am wary of people's intentions", BA),
    (S1, "I give in to avoid an argument", "I hold my ground in an argument", BA),
    (S1, "I go out of my way to help others", "I mostly look after my own affairs", BA),
    (S1, "I soften criticism to spare feelings", "I say exactly what I think", BA),
    (S1, "I forgive quickly", "I remember when I was wronged", BA),
    (S1, "I put the group's needs first", "I put my own goals first", BA),
    // Conscientiousness
    (S1, "I plan my week in advance", "I take each day as it comes", BC),
    (S1, "I finish tasks well before the deadline", "I work best close to the deadline", BC),
    (S1, "I keep my workspace tidy", "I tolerate a messy workspace", BC),
    (S1, "I follow a routine", "I improvise", BC),
    (S1, "I double-check my work", "I trust my first pass", BC),
    (S1, "I keep my promises even when it is costly", "I renegotiate when plans change", BC),
    // Neuroticism
    (S1, "I worry about things going wrong", "I assume things will work out", BN),
    (S1, "My mood changes often", "My mood is steady", BN),
    (S1, "I feel stressed under pressure", "I stay calm under pressure", BN),
    (S1, "I dwell on my mistakes", "I move on from my mistakes", BN),
    (S1, "I get irritated easily", "I rarely get irritated", BN),
    (S1, "I often feel insecure", "I usually feel confident", BN),
    // Openness
    (S1, "I love trying new foods", "I stick to dishes I know", BO),
    (S1, "I enjoy abstract ideas", "I prefer concrete facts", BO),
    (S1, "I am drawn to art and music", "I find art and music unremarkable", BO),
    (S1, "I question traditions", "I respect traditions", BO),
    (S1, "I daydream often", "I stay focused on the present", BO),
    (S1, "I like to travel somewhere unfamiliar", "I like to return to places I know", BO),
    // Realistic
    (S2, "Repairing an engine", "Reading about engines", RR),
    (S2, "Building furniture", "Buying furniture", RR),
    (S2, "Working outdoors with tools", "Working indoors at a desk", RR),
    // Investigative
    (S2, "Running a laboratory experiment", "Presenting the results", RI),
    (S2, "Solving a hard puzzle alone", "Solving it with a team", RI),
    (S2, "Researching why something happens", "Using it without asking why", RI),
    // Artistic
    (S2, "Writing a short story", "Proofreading a report", RA),
    (S2, "Designing a poster", "Distributing posters", RA),
    (S2, "Composing music", "Organizing a concert schedule", RA),
    // Social
    (S2, "Teaching a class", "Preparing the class materials", RS),
    (S2, "Counseling a friend in trouble", "Giving them practical resources", RS),
    (S2, "Volunteering at a shelter", "Donating to a shelter", RS),
    // Enterprising
    (S2, "Pitching an idea to investors", "Refining the idea in private", RE),
    (S2, "Leading a project team", "Being a specialist on the team", RE),
    (S2, "Negotiating a deal", "Drafting the contract", RE),
    // Conventional
    (S2, "Keeping accurate records", "Inventing a new process", RC),
    (S2, "Balancing a budget", "Brainstorming where to spend it", RC),
    (S2, "Organizing a filing system", "Redecorating the office", RC),
    // Strengths
    (S3, "Breaking a problem into parts", "Bringing people together around a problem", None),
    (S3, "Spotting errors in data", "Spotting tension in a meeting", None),
    (S3, "Planning the steps of a project", "Keeping the team motivated", None),
    (S3, "Learning a new tool quickly", "Learning names quickly", None),
    (S3, "Writing precise instructions", "Explaining things with stories", None),
    (S3, "Finding the root cause", "Finding common ground", None),
    (S3, "Working through long focused sessions", "Working through many short conversations", None),
    (S3, "Estimating costs", "Estimating how people will react", None),
    (S3, "Building a model or spreadsheet", "Building a network of contacts", None),
    (S3, "Making decisions from evidence", "Making decisions by consensus", None),
    (S3, "Improving a process", "Mentoring a colleague", None),
    (S3, "Debugging something broken", "Mediating a disagreement", None),
    (S3, "Setting measurable goals", "Setting a shared vision", None),
    (S3, "Reading technical documentation", "Reading the mood of a room", None),
    (S3, "Prioritizing a backlog", "Welcoming a newcomer", None),
    (S3, "Checking facts before acting", "Checking in with people before acting", None),
    (S3, "Optimizing for efficiency", "Optimizing for harmony", None),
    (S3, "Comparing options systematically", "Persuading others of an option", None),
    (S3, "Keeping track of details", "Keeping track of relationships", None),
    (S3, "Working independently", "Working in a group", None),
    // Motivations
    (S4, "Mastering a difficult skill", "Earning a higher salary", None),
    (S4, "Doing work that interests me", "Doing work that is well paid", None),
    (S4, "Having autonomy over my tasks", "Having a prestigious title", None),
    (S4, "Learning something new every week", "Having a secure position", None),
    (S4, "Creating something I am proud of", "Being praised for my work", None),
    (S4, "Solving problems that matter to me", "Solving problems that get noticed", None),
    (S4, "Growing as a person", "Getting promoted", None),
    (S4, "Contributing to a cause I believe in", "Receiving performance bonuses", None),
    (S4, "Enjoying the work itself", "Enjoying the benefits of the job", None),
    (S4, "Setting my own challenges", "Meeting targets set for me", None),
    (S4, "Curiosity", "Recognition", None),
    (S4, "A sense of purpose", "A sense of status", None),
];
