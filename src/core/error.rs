use thiserror::Error;

/// Caller errors raised while extracting call arguments. These are returned
/// to the peer as error-flagged results or invalid-params responses; they
/// never terminate the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Parameter '{0}' cannot be null")]
    NullParameter(&'static str),
    #[error("Parameter '{0}' cannot be empty")]
    EmptyParameter(&'static str),
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_displays_missing_parameter() {
        let e = ArgumentError::MissingParameter("city");
        assert_eq!(e.to_string(), "Missing required parameter: city");
    }

    #[test]
    fn it_displays_null_and_empty() {
        assert_eq!(
            ArgumentError::NullParameter("city").to_string(),
            "Parameter 'city' cannot be null"
        );
        assert_eq!(
            ArgumentError::EmptyParameter("city").to_string(),
            "Parameter 'city' cannot be empty"
        );
    }

    #[test]
    fn it_displays_missing_argument() {
        let e = ArgumentError::MissingArgument("location");
        assert_eq!(e.to_string(), "Missing required argument: location");
    }
}
