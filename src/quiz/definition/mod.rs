use anyhow::*;
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub mod problem;


pub use problem::{Problem, RawProblem};

#[derive(Debug)]
pub struct QuizDefinition {
    problems: Vec<Problem>,
}

impl QuizDefinition {
    pub fn open(source: &Path) -> Result<QuizDefinition> {
        let file = File::open(source)?;
        Self::read(file)
    }

    pub fn read(source: impl Read) -> Result<QuizDefinition> {
        let mut problems = Vec::new();

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(source);
        for (index, record) in csv_reader.records().enumerate() {
            let record = record?;
            // Rows may carry extra trailing fields; only the first two matter.
            let record: StringRecord = record.iter().take(2).collect();
            let raw_problem: RawProblem = record
                .deserialize(None)
                .with_context(|| format!("Malformed problem on row {}", index + 1))?;
            problems.push(raw_problem.into());
        }

        Ok(QuizDefinition { problems })
    }

    pub fn get_problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn into_problems(self) -> Vec<Problem> {
        self.problems
    }
}
