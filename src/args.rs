use clap::Parser;

/// Scores the answers to the 80-question personality and interest questionnaire.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) The file containing the answers. Each respondent in the file is scored separately.
    #[clap(short, long, value_parser)]
    pub input: String,

    /// (json, csv or xlsx) The type of the input. If not provided, it is deduced from the extension of the input file.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// (file path, optional) A JSON file describing the questions, replacing the built-in questions.
    /// It must follow the same layout: 80 questions in sections of 30, 18, 20 and 12.
    #[clap(short, long, value_parser)]
    pub questions: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the summary of the scores and reports will be written
    /// in JSON format to the given location. An empty value writes nothing.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference file containing the expected summary in JSON format. If provided, quizscore will
    /// check that the computed summary matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// When using an Excel file, indicates the name of the worksheet to use.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// (respondent id) If specified, only this respondent is scored.
    #[clap(long, value_parser)]
    pub respondent: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
