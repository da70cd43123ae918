//! Prompt list loader.
//!
//! A prompt list is a CSV file with a header row. The columns `Prompt` and
//! `Answer 1` through `Answer 4` are required (matched case-insensitively,
//! in any order); other columns are ignored. Row order decides id order.
//!
//! ```text
//! Prompt,Answer 1,Answer 2,Answer 3,Answer 4
//! Name something you bring to the beach,Towel,Sunscreen,Umbrella,Cooler
//! ```

use std::io::Read;
use std::path::Path;

use feud_core::{GameConfig, PromptDraft};

use crate::error::LoadError;
use crate::loaders::{LoadResult, read_file, source_name};

const PROMPT_COLUMN: &str = "Prompt";
const ANSWER_COLUMNS: [&str; GameConfig::ANSWER_COUNT] =
    ["Answer 1", "Answer 2", "Answer 3", "Answer 4"];

/// Loader for CSV prompt lists.
pub struct PromptLoader;

impl PromptLoader {
    /// Load a prompt list from a CSV file.
    pub fn load(path: &Path) -> LoadResult<Vec<PromptDraft>> {
        let content = read_file(path)?;
        Self::parse(&source_name(path), content.as_bytes())
    }

    /// Parse CSV prompt rows from any reader.
    ///
    /// Rows whose cells are all blank are skipped. A row with blank prompt
    /// text or fewer than four non-blank answers fails the whole source.
    pub fn parse(name: &str, input: impl Read) -> LoadResult<Vec<PromptDraft>> {
        let csv_error = |source| LoadError::Csv {
            source_name: name.to_string(),
            source,
        };

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(input);

        let headers = reader.headers().map_err(csv_error)?.clone();
        let column = |wanted: &'static str| {
            headers
                .iter()
                .position(|header| header.eq_ignore_ascii_case(wanted))
                .ok_or_else(|| LoadError::MissingColumn {
                    source_name: name.to_string(),
                    column: wanted,
                })
        };
        let prompt_column = column(PROMPT_COLUMN)?;
        let mut answer_columns = [0usize; GameConfig::ANSWER_COUNT];
        for (slot, wanted) in answer_columns.iter_mut().zip(ANSWER_COLUMNS) {
            *slot = column(wanted)?;
        }

        let mut drafts = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(csv_error)?;
            // header is line 1
            let row = record
                .position()
                .map(|pos| pos.line() as usize)
                .unwrap_or(index + 2);

            let cell = |column: usize| record.get(column).unwrap_or("");
            let text = cell(prompt_column);
            let answers = answer_columns.map(|column| cell(column).to_string());

            if text.is_empty() && answers.iter().all(String::is_empty) {
                continue;
            }
            if text.is_empty() {
                return Err(LoadError::BlankPrompt {
                    source_name: name.to_string(),
                    row,
                });
            }
            let found = answers.iter().filter(|answer| !answer.is_empty()).count();
            if found != GameConfig::ANSWER_COUNT {
                return Err(LoadError::WrongAnswerCount {
                    source_name: name.to_string(),
                    row,
                    found,
                });
            }

            drafts.push(PromptDraft::new(text, answers));
        }

        if drafts.is_empty() {
            return Err(LoadError::EmptySource {
                source_name: name.to_string(),
            });
        }
        tracing::debug!(source = name, prompts = drafts.len(), "parsed prompt list");
        Ok(drafts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Prompt,Answer 1,Answer 2,Answer 3,Answer 4\n";

    #[test]
    fn parses_rows_in_order() {
        let csv = format!("{HEADER}First?,a,b,c,d\n Second? , e ,f,g,h\n");
        let drafts = PromptLoader::parse("Classic", csv.as_bytes()).unwrap();
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].text, "First?");
        assert_eq!(drafts[1].text, "Second?");
        assert_eq!(drafts[1].answers, ["e", "f", "g", "h"].map(String::from));
    }

    #[test]
    fn columns_may_be_reordered_and_extended() {
        let csv = "Answer 4,Notes,answer 1,Answer 2,PROMPT,Answer 3\n4,ignored,1,2,Q,3\n";
        let drafts = PromptLoader::parse("Mixed", csv.as_bytes()).unwrap();
        assert_eq!(drafts[0].text, "Q");
        assert_eq!(drafts[0].answers, ["1", "2", "3", "4"].map(String::from));
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "Prompt,Answer 1,Answer 2,Answer 3\nQ,a,b,c\n";
        let err = PromptLoader::parse("Short", csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingColumn {
                column: "Answer 4",
                ..
            }
        ));
    }

    #[test]
    fn blank_answer_counts_as_missing() {
        let csv = format!("{HEADER}Q1,a,b,c,d\nQ2,a,,c,d\n");
        let err = PromptLoader::parse("Holes", csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::WrongAnswerCount {
                row: 3,
                found: 3,
                ..
            }
        ));
    }

    #[test]
    fn short_row_counts_as_missing_answers() {
        let csv = format!("{HEADER}Q1,a,b\n");
        let err = PromptLoader::parse("Short", csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::WrongAnswerCount { found: 2, .. }));
    }

    #[test]
    fn blank_prompt_text_is_rejected() {
        let csv = format!("{HEADER} ,a,b,c,d\n");
        let err = PromptLoader::parse("Blank", csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::BlankPrompt { row: 2, .. }));
    }

    #[test]
    fn blank_rows_are_skipped_but_empty_source_fails() {
        let csv = format!("{HEADER},,,,\nQ,a,b,c,d\n,,,,\n");
        assert_eq!(PromptLoader::parse("Gaps", csv.as_bytes()).unwrap().len(), 1);

        let err = PromptLoader::parse("Nothing", HEADER.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::EmptySource { .. }));
    }
}
