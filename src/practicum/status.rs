//! The verdict catalog and the notification template.

use crate::practicum::{
    error::{PracticumError, SchemaError},
    models::Homework,
};

/// The closed set of review statuses the API may report.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Look up a wire status code in the catalog.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Human-readable verdict for the status.
    #[must_use]
    pub const fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// Render the notification text for one homework entry.
///
/// Pure and deterministic: equal entries render to equal strings, which is
/// what the de-duplication in the poll loop relies on.
pub fn render(homework: &Homework) -> Result<String, PracticumError> {
    let name = homework
        .homework_name
        .as_deref()
        .ok_or(SchemaError::MissingFields("`homework_name` is missing"))?;
    let code = homework
        .status
        .as_deref()
        .ok_or(SchemaError::MissingFields("`status` is missing"))?;
    let status = HomeworkStatus::from_code(code)
        .ok_or_else(|| PracticumError::UnknownStatus(code.to_string()))?;
    Ok(format!(r#"Изменился статус проверки работы "{name}". {}"#, status.verdict()))
}
