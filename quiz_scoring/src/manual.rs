/*!

This is the long-form manual for `quiz_scoring` and `quizscore`.

## The questionnaire

The questionnaire has 80 forced-choice questions. Every question offers two
options, `A` and `B`, and the respondent picks one of them or skips the
question. Questions are numbered from 1 to 80 and grouped in four sections:

| Section | Ids      | Model        | Scoring                                  |
|---------|----------|--------------|------------------------------------------|
| 1       | 1 to 30  | Big Five     | 5 groups of 6, count of `A` per group    |
| 2       | 31 to 48 | RIASEC       | 6 groups of 3, count of `A` per group    |
| 3       | 49 to 68 | Strengths    | total of `A` and total of `B`            |
| 4       | 69 to 80 | Motivations  | total of `A` and total of `B`            |

The groups of a section follow each other in a fixed order: `E, A, C, N, O`
for the Big Five (Extraversion, Agreeableness, Conscientiousness,
Neuroticism, Openness) and `R, I, A, S, E, C` for RIASEC (Realistic,
Investigative, Artistic, Social, Enterprising, Conventional). The group of a
question is given by its rank inside its section. Each built-in question also
carries the name of its group, and the two must agree: the question bank is
checked when the engine is built, and any mismatch stops the program before
anything is scored.

For strengths, `A` is the analytical option and `B` the interpersonal one. For
motivations, `A` is the intrinsic motive and `B` the extrinsic one.

Skipped questions count for nothing. Answers to question ids that do not exist
are ignored.

## Reports

* **Big Five**: each count is placed in a band: low (0 or 1), mid (2 or 3),
  high (4 and more), and the text for that trait and band is printed with the
  count.
* **RIASEC**: the six counts are sorted from highest to lowest. Equal counts
  keep the order `R, I, A, S, E, C`. The two first areas are named, followed by
  a description of the first one.
* **Strengths** and **Motivations**: one text depending on whether `A` was
  chosen more often, less often, or as often as `B`.

## Input formats

The following formats are supported by `quizscore`:
* `json`
* `csv`
* `xlsx` (exports from Microsoft Forms and Google Forms)

The format is guessed from the file extension, or set with `--input-type`.

### `json`

Either the answers of a single respondent:

```json
{"1": "A", "2": "B", "3": ""}
```

or a list of respondents:

```json
{"respondents": [{"id": "alice", "answers": {"1": "A", "2": "B"}}]}
```

When two keys name the same question (`1` and `Q1`), the first one in key
order is kept and the other is skipped with a warning.

### `csv` and `xlsx`

The first row is a header. The first column holds the respondent id, and every
other column names a question: `12`, `Q12` or `12. Some text` are all read as
question 12. Columns that do not name a question (a timestamp, an email) are
skipped. Each cell holds `A`, `B`, the text of one of the two options, or
nothing.

With Excel files, `--excel-worksheet-name` selects the worksheet. It may be
omitted when the workbook has a single worksheet.

## Question bank

`--questions` replaces the built-in questions with a JSON file:

```json
{"questions": [{"id": 1, "section": 1, "optionA": "...", "optionB": "...", "dimension": "E"}]}
```

The file must still describe 80 questions with the section sizes above.
`dimension` is only allowed in sections 1 and 2, and must match the position
of the question in its section.

## Output

The reports are printed on the standard output. With `--out`, a JSON summary
of all the respondents is written to the given file (or to the standard output
with `--out stdout`); an empty value writes nothing. With `--reference`, the summary is compared to a
previously stored one, and the program fails if they differ.

*/
