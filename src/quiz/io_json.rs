// Primitives for reading JSON answer files.

use log::{debug, warn};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;

use crate::quiz::{io_common::question_id_from_header, *};

#[derive(Debug, Clone, Deserialize)]
struct RespondentRecord {
    id: Option<String>,
    answers: BTreeMap<String, Option<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ResponseFile {
    Many {
        respondents: Vec<RespondentRecord>,
    },
    Single(BTreeMap<String, Option<String>>),
}

pub fn read_json_responses(path: &str) -> QuizResult<Vec<ParsedResponse>> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let file: ResponseFile = serde_json::from_str(&contents).context(ParsingJsonSnafu {})?;
    let res = match file {
        ResponseFile::Many { respondents } => respondents
            .into_iter()
            .map(|r| ParsedResponse {
                id: r.id,
                answers: parse_answers(&r.answers),
            })
            .collect(),
        ResponseFile::Single(answers) => vec![ParsedResponse {
            id: None,
            answers: parse_answers(&answers),
        }],
    };
    debug!("read_json_responses: {:?}", res);
    Ok(res)
}

// A null answer is the same as a blank one.
// Keys naming the same question (`1` and `Q1`) keep the first one in key order.
fn parse_answers(answers: &BTreeMap<String, Option<String>>) -> Vec<(u32, String)> {
    let mut res: Vec<(u32, String)> = Vec::new();
    for (key, label) in answers.iter() {
        let qid = match question_id_from_header(key) {
            Some(qid) => qid,
            None => {
                warn!("parse_answers: skipping key {:?}: not a question id", key);
                continue;
            }
        };
        if res.iter().any(|(id, _)| *id == qid) {
            warn!(
                "parse_answers: skipping key {:?}: question {} already answered",
                key, qid
            );
            continue;
        }
        res.push((qid, label.clone().unwrap_or_default()));
    }
    res.sort_by_key(|p| p.0);
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_and_many() {
        let single: ResponseFile =
            serde_json::from_str(r#"{"2": "B", "1": "A", "3": null, "note": "x"}"#).unwrap();
        match single {
            ResponseFile::Single(m) => assert_eq!(
                parse_answers(&m),
                vec![
                    (1, "A".to_string()),
                    (2, "B".to_string()),
                    (3, "".to_string())
                ]
            ),
            x => panic!("wrong shape {:?}", x),
        }

        let many: ResponseFile = serde_json::from_str(
            r#"{"respondents": [{"id": "r1", "answers": {"Q10": "A"}}, {"answers": {}}]}"#,
        )
        .unwrap();
        match many {
            ResponseFile::Many { respondents } => {
                assert_eq!(respondents.len(), 2);
                assert_eq!(respondents[0].id, Some("r1".to_string()));
                assert_eq!(
                    parse_answers(&respondents[0].answers),
                    vec![(10, "A".to_string())]
                );
                assert_eq!(respondents[1].id, None);
            }
            x => panic!("wrong shape {:?}", x),
        }
    }

    #[test]
    fn duplicate_question_keys() {
        let mut m: BTreeMap<String, Option<String>> = BTreeMap::new();
        m.insert("1".to_string(), Some("A".to_string()));
        m.insert("Q1".to_string(), None);
        m.insert("q2".to_string(), Some("B".to_string()));
        m.insert("2".to_string(), Some("A".to_string()));
        assert_eq!(
            parse_answers(&m),
            vec![(1, "A".to_string()), (2, "A".to_string())]
        );
    }
}
