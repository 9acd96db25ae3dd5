use thiserror::Error;

#[derive(Error, Debug)]
pub enum EphemError {
    #[error("Invalid epoch, expected \"YYYY-MM-DD HH:MM:SS\": {0}")]
    InvalidEpoch(String),

    #[error("Calendar conversion is not valid for negative julian days: {0}")]
    NegativeJulianDay(f64),

    #[error("Unknown body: {0}")]
    UnknownBody(String),

    #[error("Unknown reference frame: {0}")]
    UnknownFrame(String),
}

impl PartialEq for EphemError {
    fn eq(&self, other: &Self) -> bool {
        use EphemError::*;
        match (self, other) {
            (InvalidEpoch(a), InvalidEpoch(b)) => a == b,
            (UnknownBody(a), UnknownBody(b)) => a == b,
            (UnknownFrame(a), UnknownFrame(b)) => a == b,
            (NegativeJulianDay(a), NegativeJulianDay(b)) => a.to_bits() == b.to_bits(),

            _ => false,
        }
    }
}
