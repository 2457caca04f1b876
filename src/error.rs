use thiserror::Error;

/// Chronotest error types
///
/// These cover configuration and directive problems detected before a test
/// body runs. Failures raised by the test body itself are never wrapped in
/// this type; they propagate through the runners unchanged.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unparsable time value: {input:?}")]
    UnparsableTime { input: String },

    #[error("global time is not configured")]
    GlobalTimeNotConfigured,

    #[error("metadata key `{key}` does not carry a time value")]
    InvalidDirective { key: &'static str },
}

impl Error {
    pub fn unparsable(input: impl Into<String>) -> Self {
        Self::UnparsableTime {
            input: input.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparsable_display_includes_input() {
        let err = Error::unparsable("not-a-time");
        assert!(err.to_string().contains("not-a-time"));
    }
}
