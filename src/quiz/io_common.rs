use log::warn;
use std::path::Path;

pub fn simplify_file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

/// Ids given to respondents that do not have one: the file name and the line number.
pub fn make_default_id(path: &str) -> impl Fn(usize) -> String {
    let simplified_file_name = simplify_file_name(path);
    move |lineno| format!("{}-{:08}", simplified_file_name, lineno)
}

pub fn guess_input_type(path: &str) -> Option<&'static str> {
    let ext = Path::new(path).extension()?.to_str()?.to_lowercase();
    match ext.as_str() {
        "json" => Some("json"),
        "csv" => Some("csv"),
        "xlsx" => Some("xlsx"),
        _ => None,
    }
}

/// Reads the question id named by a column header.
///
/// Accepted forms: `12`, `Q12`, `q12`, `12. Some text`, `Q12) Some text`.
pub fn question_id_from_header(header: &str) -> Option<u32> {
    let h = header.trim();
    let h = h.strip_prefix(|c: char| c == 'Q' || c == 'q').unwrap_or(h);
    let digits: String = h.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let rest = &h[digits.len()..];
    if rest.is_empty() || rest.starts_with(|c: char| matches!(c, '.' | ')' | ':' | ' ')) {
        digits.parse::<u32>().ok()
    } else {
        None
    }
}

/// Maps each column naming a question to its question id.
/// The first column holds the respondent ids and is never a question.
pub fn question_columns(header: &[Option<String>]) -> Vec<(usize, u32)> {
    if let Some(qid) = header
        .first()
        .and_then(|h| h.as_deref())
        .and_then(question_id_from_header)
    {
        warn!(
            "question_columns: the first column names question {} but holds the respondent ids, its answers are not scored",
            qid
        );
    }
    header
        .iter()
        .enumerate()
        .skip(1)
        .filter_map(|(idx, name)| {
            name.as_deref()
                .and_then(question_id_from_header)
                .map(|qid| (idx, qid))
        })
        .collect()
}
