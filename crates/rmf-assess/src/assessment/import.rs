use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::Answer;

/// Reads `Question ID,Score` answer sheets exported from spreadsheets. A
/// blank score cell marks the question unanswered.
pub struct AnswerSheetImporter;

impl AnswerSheetImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Answer>, AnswerImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Answer>, AnswerImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut answers = Vec::new();
        for record in csv_reader.deserialize::<AnswerRow>() {
            let row = record?;
            let score = match row.score {
                None => 0,
                Some(value) if value <= 5 => value,
                Some(value) => {
                    return Err(AnswerImportError::ScoreOutOfRange {
                        question_id: row.question_id,
                        score: value,
                    })
                }
            };
            answers.push(Answer {
                question_id: row.question_id,
                score,
            });
        }

        Ok(answers)
    }
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    #[serde(rename = "Question ID")]
    question_id: String,
    #[serde(rename = "Score", default, deserialize_with = "empty_as_none")]
    score: Option<u8>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<u8>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnswerImportError {
    #[error("failed to read answer sheet: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid answer sheet data: {0}")]
    Csv(#[from] csv::Error),
    #[error("score {score} for question '{question_id}' is outside 0-5")]
    ScoreOutOfRange { question_id: String, score: u8 },
}
