use thiserror::Error;

use crate::config::ConfigError;
use crate::model::RecordError;
use crate::palette::ColorError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error(transparent)]
    Color(#[from] ColorError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;

    #[test]
    fn layer_errors_convert() {
        let config = AnalysisConfig {
            recommended_threshold: -1.0,
            ..AnalysisConfig::default()
        };
        let err: Error = config.validate().unwrap_err().into();
        assert!(matches!(err, Error::Config(ConfigError::InvalidThreshold { .. })));
        assert_eq!(
            err.to_string(),
            "recommended threshold must be within [0, 100], got -1"
        );
    }
}
