use thiserror::Error;

/// Failures while wiring up a scene: bad configuration or a host page
/// that lacks the elements the scene expects.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// A hover target element required by the scene is absent from the page.
    #[error("missing hover target element `#{id}`")]
    MissingHoverTarget { id: String },

    /// The JSON configuration could not be parsed.
    #[error("invalid scene config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// A configuration field parsed but holds an unusable value.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ConfigurationError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue { field, reason: reason.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = ConfigurationError::MissingHoverTarget { id: "planet-3".into() };
        assert_eq!(err.to_string(), "missing hover target element `#planet-3`");

        let err = ConfigurationError::invalid("star_count", "must be positive");
        assert_eq!(err.to_string(), "invalid value for `star_count`: must be positive");
    }

    #[test]
    fn json_errors_convert() {
        let parse: Result<u32, _> = serde_json::from_str("{");
        let err: ConfigurationError = parse.unwrap_err().into();
        assert!(matches!(err, ConfigurationError::InvalidConfig(_)));
    }
}
