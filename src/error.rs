use thiserror::Error;

use crate::core::ChartMode;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unrecognized chart mode: {0:?}")]
    UnrecognizedMode(String),

    #[error("{0} charts require a second subject")]
    MissingSecondSubject(ChartMode),

    #[error("composite charts require two constituent subjects")]
    MissingCompositeSubjects,

    #[error("unrecognized theme identifier: {0:?}")]
    UnknownTheme(String),

    #[error("all elemental totals are zero; upstream point data is degenerate")]
    DegenerateElementTotals,

    #[error("active point {0:?} is missing from the subject data")]
    MissingPoint(String),

    #[error("aspect references point {0:?} outside the active point set")]
    UnknownAspectPoint(String),

    #[error("template record is missing required field {0:?}")]
    MissingTemplateField(&'static str),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
