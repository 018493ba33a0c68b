// Primitives for reading CSV files.

use log::debug;

use crate::quiz::{
    io_common::{make_default_id, question_columns},
    *,
};

pub fn read_csv_responses(path: &str) -> QuizResult<Vec<ParsedResponse>> {
    let default_id = make_default_id(path);

    let rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .context(CsvOpenSnafu { path })?;
    let mut records = rdr.into_records();

    let header: Vec<Option<String>> = match records.next() {
        Some(line_r) => line_r
            .context(CsvLineParseSnafu { lineno: 1usize })?
            .iter()
            .map(|s| Some(s.to_string()))
            .collect(),
        None => return Ok(Vec::new()),
    };
    let columns = question_columns(&header);
    debug!("read_csv_responses: question columns: {:?}", columns);

    let mut res: Vec<ParsedResponse> = Vec::new();
    // The header is line 1.
    for (idx, line_r) in records.enumerate() {
        let lineno = idx + 2;
        let line = line_r.context(CsvLineParseSnafu { lineno })?;
        let id = match line.get(0).map(|s| s.trim()) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => default_id(lineno),
        };
        let answers: Vec<(u32, String)> = columns
            .iter()
            .map(|(col, qid)| (*qid, line.get(*col).unwrap_or("").to_string()))
            .collect();
        debug!("read_csv_responses: lineno: {:?} id: {:?}", lineno, id);
        res.push(ParsedResponse {
            id: Some(id),
            answers,
        });
    }
    Ok(res)
}
