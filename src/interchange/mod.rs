use serde_json::Error as SerdeJsonError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum InterchangeError {
    Io(io::Error),
    Csv(csv::Error),
    Serialization(SerdeJsonError),
    InvalidData(String),
}

impl fmt::Display for InterchangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterchangeError::Io(err) => write!(f, "io error: {err}"),
            InterchangeError::Csv(err) => write!(f, "csv error: {err}"),
            InterchangeError::Serialization(err) => write!(f, "serialization error: {err}"),
            InterchangeError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for InterchangeError {}

impl From<io::Error> for InterchangeError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for InterchangeError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<SerdeJsonError> for InterchangeError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

pub type InterchangeResult<T> = Result<T, InterchangeError>;

pub mod boq;
pub mod msp;
pub mod snapshot;

pub use boq::{import_tasks_from_csv, import_tasks_from_reader};
pub use msp::{ExportedTask, parse_project_plan_xml, project_plan_xml, save_project_plan_xml};
pub use snapshot::{PlanSnapshot, load_plan_from_json, save_plan_to_json};
