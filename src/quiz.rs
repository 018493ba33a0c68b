use log::{debug, info, warn};

use quiz_scoring::builder::Builder;
use quiz_scoring::*;
use snafu::{prelude::*, Snafu};

use std::fs;

use serde_json::json;
use serde_json::Map as JSMap;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;

mod config_reader;
mod io_common;
mod io_csv;
mod io_forms;
mod io_json;

use crate::quiz::config_reader::*;

#[derive(Debug, Snafu)]
pub enum QuizError {
    #[snafu(display("Error opening file {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("The spreadsheet {path} is empty"))]
    EmptyExcel { path: String },
    #[snafu(display("Worksheet {name} not found in {path}"))]
    MissingWorksheet { name: String, path: String },
    #[snafu(display(
        "The workbook {path} has {count} worksheets, the worksheet name must be provided"
    ))]
    AmbiguousWorksheet { path: String, count: usize },
    #[snafu(display("Unexpected cell type at line {lineno}: {content}"))]
    ExcelWrongCellType { lineno: u64, content: String },
    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Error opening CSV file {path}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Error reading CSV line {lineno}"))]
    CsvLineParse { source: csv::Error, lineno: usize },
    #[snafu(display("Invalid question bank: {source}"))]
    InvalidQuestionBank { source: ConfigurationError },
    #[snafu(display("Question {id}: unknown section {section}"))]
    UnknownSection { id: u32, section: u8 },
    #[snafu(display("Question {id}: unknown dimension {label} for section {section}"))]
    UnknownDimension { id: u32, label: String, section: u8 },
    #[snafu(display("Respondent {respondent}: {source}"))]
    InvalidAnswer {
        source: AnswerError,
        respondent: String,
    },
    #[snafu(display("Cannot guess the input type of {path}, use --input-type"))]
    UnknownInputType { path: String },
    #[snafu(display("Respondent {respondent} not found in the input"))]
    MissingRespondent { respondent: String },
    #[snafu(display("Error writing {path}"))]
    WritingSummary {
        source: std::io::Error,
        path: String,
    },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type QuizResult<T> = Result<T, QuizError>;

/// The answers of one respondent, as parsed by the readers.
/// This is before matching the labels against the question options.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ParsedResponse {
    pub id: Option<String>,
    pub answers: Vec<(u32, String)>,
}

fn assessment_to_json(respondent: &str, a: &Assessment) -> JSValue {
    let mut big: JSMap<String, JSValue> = JSMap::new();
    for (dim, count) in a.scores.big.iter() {
        big.insert(dim.letter().to_string(), json!(count));
    }
    let mut ria: JSMap<String, JSValue> = JSMap::new();
    for (dim, count) in a.scores.ria.iter() {
        ria.insert(dim.letter().to_string(), json!(count));
    }
    let reports: Vec<JSValue> = a
        .reports
        .iter()
        .map(|r| {
            json!({
                "report": r.kind.key(),
                "title": r.title,
                "segments": r.segments,
            })
        })
        .collect();
    json!({
        "respondent": respondent,
        "scores": {
            "big": big,
            "ria": ria,
            "str": {"A": a.scores.strengths.a, "B": a.scores.strengths.b},
            "mot": {"A": a.scores.motivations.a, "B": a.scores.motivations.b},
        },
        "reports": reports,
    })
}

fn print_assessment(respondent: &str, a: &Assessment) {
    println!("=== {}", respondent);
    for report in a.reports.iter() {
        println!("{}", report.title);
        for segment in report.segments.iter() {
            println!("  {}", segment);
        }
    }
    println!();
}

fn load_engine(questions_path: &Option<String>) -> QuizResult<ScoringEngine> {
    let bank = match questions_path {
        Some(p) => {
            info!("Reading questions from {:?}", p);
            read_question_bank(p)?
        }
        None => QuestionBank::standard(),
    };
    ScoringEngine::new(bank, &LayoutRules::STANDARD).context(InvalidQuestionBankSnafu {})
}

fn read_responses(
    path: &str,
    input_type: &str,
    excel_worksheet_name: &Option<String>,
) -> QuizResult<Vec<ParsedResponse>> {
    info!("Attempting to read {} file {:?}", input_type, path);
    match input_type {
        "json" => io_json::read_json_responses(path),
        "csv" => io_csv::read_csv_responses(path),
        "xlsx" => io_forms::read_forms_responses(path, excel_worksheet_name),
        x => whatever!("Input type {:?} not supported", x),
    }
}

// Questions that do not exist are skipped, as the engine would ignore them anyway.
fn validate_response(pr: &ParsedResponse, respondent: &str, engine: &ScoringEngine) -> QuizResult<AnswerSet> {
    let mut builder = Builder::new(engine.bank());
    for (question_id, label) in pr.answers.iter() {
        if !engine.layout().contains(*question_id) {
            warn!(
                "validate_response: respondent {}: skipping unknown question {}",
                respondent, question_id
            );
            continue;
        }
        builder
            .add_answer(*question_id, label)
            .context(InvalidAnswerSnafu { respondent })?;
    }
    Ok(builder.build())
}

fn check_reference(reference: &JSValue, computed: &JSValue) -> QuizResult<()> {
    if reference == computed {
        return Ok(());
    }
    warn!("Found differences with the reference summary");
    let pretty_ref = serde_json::to_string_pretty(reference).context(ParsingJsonSnafu {})?;
    let pretty_computed = serde_json::to_string_pretty(computed).context(ParsingJsonSnafu {})?;
    print_diff(pretty_ref.as_str(), pretty_computed.as_str(), "\n");
    whatever!("Difference detected between computed summary and reference summary")
}

/// Scores every respondent of the input file and returns the JSON summary.
pub fn run_scoring(args: &Args) -> QuizResult<JSValue> {
    let engine = load_engine(&args.questions)?;

    let input_type = match &args.input_type {
        Some(x) => x.clone(),
        None => io_common::guess_input_type(&args.input)
            .context(UnknownInputTypeSnafu {
                path: args.input.clone(),
            })?
            .to_string(),
    };

    let parsed = read_responses(&args.input, &input_type, &args.excel_worksheet_name)?;
    debug!("run_scoring: {} responses read", parsed.len());

    let default_id = io_common::make_default_id(&args.input);
    let mut respondents: Vec<(String, &ParsedResponse)> = parsed
        .iter()
        .enumerate()
        .map(|(idx, pr)| (pr.id.clone().unwrap_or_else(|| default_id(idx + 1)), pr))
        .collect();

    if let Some(selected) = &args.respondent {
        respondents.retain(|(id, _)| id == selected);
        if respondents.is_empty() {
            return MissingRespondentSnafu {
                respondent: selected.clone(),
            }
            .fail();
        }
    }

    let mut results: Vec<JSValue> = Vec::new();
    for (respondent, pr) in respondents.iter() {
        let answers = validate_response(pr, respondent, &engine)?;
        info!(
            "Respondent {}: {} answered questions",
            respondent,
            answers.len()
        );
        let assessment = engine.assess_set(&answers);
        print_assessment(respondent, &assessment);
        results.push(assessment_to_json(respondent, &assessment));
    }

    let summary = json!({ "results": results });

    // An empty path disables the output, as when the flag is missing.
    if let Some(out) = args.out.as_ref().filter(|o| !o.trim().is_empty()) {
        let pretty = serde_json::to_string_pretty(&summary).context(ParsingJsonSnafu {})?;
        if out == "stdout" {
            println!("{}", pretty);
        } else {
            info!("Writing summary to {:?}", out);
            fs::write(out, pretty).context(WritingSummarySnafu { path: out.clone() })?;
        }
    }

    // The reference summary, if provided for comparison
    if let Some(reference_path) = &args.reference {
        let reference = read_summary(reference_path)?;
        check_reference(&reference, &summary)?;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_dir() -> String {
        format!("{}/testdata", env!("CARGO_MANIFEST_DIR"))
    }

    fn test_args(input: String) -> Args {
        Args {
            input,
            input_type: None,
            questions: None,
            out: None,
            reference: None,
            excel_worksheet_name: None,
            respondent: None,
            verbose: false,
        }
    }

    fn test_wrapper(test_name: &str, extension: &str) {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut args = test_args(format!(
            "{}/{}/{}_responses.{}",
            test_dir(),
            test_name,
            test_name,
            extension
        ));
        args.reference = Some(format!(
            "{}/{}/{}_expected_summary.json",
            test_dir(),
            test_name,
            test_name
        ));
        if let Err(e) = run_scoring(&args) {
            panic!("test {} failed: {}", test_name, e);
        }
    }

    #[test]
    fn all_a_test() {
        test_wrapper("all_a", "json");
    }

    #[test]
    fn blank_and_mixed_csv_test() {
        test_wrapper("blank_and_mixed", "csv");
    }

    #[test]
    fn option_texts_json_test() {
        test_wrapper("option_texts", "json");
    }

    #[test]
    fn forms_export_test() {
        test_wrapper("forms_export", "xlsx");
    }

    #[test]
    fn worksheet_selection() {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut args = test_args(format!(
            "{}/two_sheets/two_sheets_responses.xlsx",
            test_dir()
        ));
        assert!(matches!(
            run_scoring(&args),
            Err(QuizError::AmbiguousWorksheet { count: 2, .. })
        ));

        args.excel_worksheet_name = Some("Responses".to_string());
        match run_scoring(&args) {
            Err(QuizError::MissingWorksheet { name, .. }) => assert_eq!(name, "Responses"),
            x => panic!("unexpected result {:?}", x),
        }

        args.excel_worksheet_name = Some("Answers".to_string());
        args.reference = Some(format!(
            "{}/two_sheets/two_sheets_expected_summary.json",
            test_dir()
        ));
        run_scoring(&args).unwrap();
    }

    #[test]
    fn empty_out_writes_nothing() {
        let mut args = test_args(format!("{}/all_a/all_a_responses.json", test_dir()));
        args.out = Some("".to_string());
        assert!(run_scoring(&args).is_ok());
    }

    #[test]
    fn select_one_respondent() {
        let mut args = test_args(format!(
            "{}/blank_and_mixed/blank_and_mixed_responses.csv",
            test_dir()
        ));
        args.respondent = Some("bob".to_string());
        let summary = run_scoring(&args).unwrap();
        let results = summary["results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0]["respondent"], json!("bob"));

        args.respondent = Some("nobody".to_string());
        assert!(matches!(
            run_scoring(&args),
            Err(QuizError::MissingRespondent { .. })
        ));
    }

    #[test]
    fn custom_question_bank() {
        let mut args = test_args(format!("{}/all_a/all_a_responses.json", test_dir()));
        args.questions = Some(format!("{}/questions/standard_questions.json", test_dir()));
        args.reference = Some(format!("{}/all_a/all_a_expected_summary.json", test_dir()));
        run_scoring(&args).unwrap();
    }

    #[test]
    fn reordered_question_bank_is_rejected() {
        let mut args = test_args(format!("{}/all_a/all_a_responses.json", test_dir()));
        args.questions = Some(format!("{}/questions/mistagged_questions.json", test_dir()));
        assert!(matches!(
            run_scoring(&args),
            Err(QuizError::InvalidQuestionBank {
                source: ConfigurationError::DimensionMismatch { .. }
            })
        ));
    }

    #[test]
    fn invalid_label_is_reported() {
        let mut args = test_args(format!("{}/invalid/invalid_responses.json", test_dir()));
        args.input_type = Some("json".to_string());
        match run_scoring(&args) {
            Err(QuizError::InvalidAnswer { source, respondent }) => {
                assert_eq!(respondent, "carol");
                assert_eq!(
                    source,
                    AnswerError::InvalidChoice {
                        question_id: 3,
                        label: "maybe".to_string()
                    }
                );
            }
            x => panic!("unexpected result {:?}", x),
        }
    }

    #[test]
    fn unknown_input_type() {
        let args = test_args("answers.txt".to_string());
        assert!(matches!(
            run_scoring(&args),
            Err(QuizError::UnknownInputType { .. })
        ));
    }

    #[test]
    fn reference_mismatch() {
        let a = json!({"results": [{"respondent": "x"}]});
        let b = json!({"results": [{"respondent": "y"}]});
        assert!(check_reference(&a, &a).is_ok());
        assert!(check_reference(&a, &b).is_err());
    }
}
