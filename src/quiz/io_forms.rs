// Primitives for reading the Excel exports of Microsoft Forms and Google Forms.

use calamine::{open_workbook, DataType, Reader, Xlsx};
use log::debug;

use crate::quiz::{
    io_common::{make_default_id, question_columns},
    *,
};

pub fn read_forms_responses(
    path: &str,
    excel_worksheet_name: &Option<String>,
) -> QuizResult<Vec<ParsedResponse>> {
    let default_id = make_default_id(path);

    let wrange = get_range(path, excel_worksheet_name)?;

    let mut iter = wrange.rows();
    let header = iter.next().context(EmptyExcelSnafu { path })?;
    debug!("read_forms_responses: header: {:?}", header);
    let header_names: Vec<Option<String>> = header.iter().map(cell_to_label).collect();
    let columns = question_columns(&header_names);
    debug!("read_forms_responses: question columns: {:?}", columns);

    let mut res: Vec<ParsedResponse> = Vec::new();
    for (idx, row) in iter.enumerate() {
        // The header is line 1.
        let lineno = idx + 2;
        debug!("read_forms_responses: lineno: {:?} row: {:?}", lineno, row);

        let id = match row.first().and_then(cell_to_label) {
            Some(s) if !s.trim().is_empty() => s.trim().to_string(),
            _ => default_id(lineno),
        };

        let mut answers: Vec<(u32, String)> = Vec::new();
        for (col, qid) in columns.iter() {
            let label = match row.get(*col) {
                Some(DataType::String(s)) => s.clone(),
                Some(DataType::Empty) | None => "".to_string(),
                Some(x) => {
                    return ExcelWrongCellTypeSnafu {
                        lineno: lineno as u64,
                        content: format!("{:?} IN {:?}", x, row),
                    }
                    .fail();
                }
            };
            answers.push((*qid, label));
        }
        res.push(ParsedResponse {
            id: Some(id),
            answers,
        });
    }
    Ok(res)
}

// Headers and ids may be stored as numbers by the spreadsheet.
fn cell_to_label(cell: &DataType) -> Option<String> {
    match cell {
        DataType::String(s) => Some(s.clone()),
        DataType::Int(i) => Some(i.to_string()),
        DataType::Float(f) if f.fract() == 0.0 => Some(format!("{}", *f as i64)),
        _ => None,
    }
}

fn get_range(path: &str, excel_worksheet_name: &Option<String>) -> QuizResult<calamine::Range<DataType>> {
    debug!(
        "get_range: path: {:?} worksheet: {:?}",
        path, excel_worksheet_name
    );
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu { path })?;

    // A worksheet name was provided, use it.
    if let Some(worksheet_name) = excel_worksheet_name {
        let wrange = workbook
            .worksheet_range(worksheet_name)
            .context(MissingWorksheetSnafu {
                name: worksheet_name.clone(),
                path,
            })?
            .context(OpeningExcelSnafu { path })?;
        Ok(wrange)
    } else {
        let all_worksheets = workbook.worksheets();
        match all_worksheets.as_slice() {
            [] => EmptyExcelSnafu { path }.fail(),
            [(worksheet_name, wrange)] => {
                debug!("get_range: using worksheet {:?}", worksheet_name);
                Ok(wrange.clone())
            }
            _ => AmbiguousWorksheetSnafu {
                path,
                count: all_worksheets.len(),
            }
            .fail(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_labels() {
        assert_eq!(cell_to_label(&DataType::String("Q1".to_string())), Some("Q1".to_string()));
        assert_eq!(cell_to_label(&DataType::Int(12)), Some("12".to_string()));
        assert_eq!(cell_to_label(&DataType::Float(7.0)), Some("7".to_string()));
        assert_eq!(cell_to_label(&DataType::Float(7.5)), None);
        assert_eq!(cell_to_label(&DataType::Empty), None);
    }

    #[test]
    fn missing_file() {
        let res = read_forms_responses("/nonexistent/answers.xlsx", &None);
        assert!(matches!(res, Err(QuizError::OpeningExcel { .. })));
    }
}
