use thiserror::Error;

use crate::models::tooth::ToothKey;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("tooth position {0} is outside 1..=8")]
    PositionOutOfRange(u8),

    #[error("unknown quadrant code: {0}")]
    UnknownQuadrant(String),

    #[error("invalid tooth key: {0}")]
    InvalidToothKey(String),

    #[error("unknown condition code: {0}")]
    UnknownCondition(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("tooth {0} appears more than once")]
    DuplicateTooth(ToothKey),

    #[error("chart updated at {updated_at} before it was opened at {opened_at}")]
    UpdatedBeforeOpened {
        opened_at: jiff::Timestamp,
        updated_at: jiff::Timestamp,
    },
}
