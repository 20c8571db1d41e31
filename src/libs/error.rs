use std::fmt;

use crate::libs::sample::SampleType;

/// Contract violations raised while assembling tracks.
///
/// Suppressed records are not errors and never show up here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A catalog entry points at an individual missing from the lookup table
    MissingIndividual {
        sample_type: SampleType,
        individual: String,
    },
    /// A sample record with an empty `filePath`
    EmptyFilePath {
        sample_type: SampleType,
        individual: String,
    },
    /// An individual stored under a key other than its own `individualGuid`
    GuidMismatch {
        key: String,
        individual_guid: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::MissingIndividual {
                sample_type,
                individual,
            } => write!(
                f,
                "Unknown individual {} in the {} samples",
                individual, sample_type
            ),
            EngineError::EmptyFilePath {
                sample_type,
                individual,
            } => write!(
                f,
                "Empty file path in the {} sample of individual {}",
                sample_type, individual
            ),
            EngineError::GuidMismatch {
                key,
                individual_guid,
            } => write!(
                f,
                "Individual listed as {} carries individualGuid {}",
                key, individual_guid
            ),
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::MissingIndividual {
            sample_type: SampleType::Alignment,
            individual: "I000001_na19675".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown individual I000001_na19675 in the alignment samples"
        );

        let err = EngineError::EmptyFilePath {
            sample_type: SampleType::CopyNumberBatch,
            individual: "I000002_na19678".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Empty file path in the copy-number-batch sample of individual I000002_na19678"
        );

        let err = EngineError::GuidMismatch {
            key: "I000001_na19675".to_string(),
            individual_guid: "I000002_na19678".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Individual listed as I000001_na19675 carries individualGuid I000002_na19678"
        );
    }
}
