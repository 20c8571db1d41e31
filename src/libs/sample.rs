use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sample records of one family, keyed by type, then by individual guid.
/// Both levels keep the order they were supplied in.
pub type SampleCatalog = IndexMap<SampleType, IndexMap<String, SampleRecord>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SampleType {
    #[serde(alias = "bam", alias = "cram")]
    Alignment,
    #[serde(alias = "wig", alias = "bigWig")]
    Coverage,
    #[serde(alias = "junctions", alias = "spliceJunctions")]
    SpliceJunction,
    #[serde(alias = "gcnv")]
    CopyNumberBatch,
}

impl SampleType {
    pub const ALL: [SampleType; 4] = [
        SampleType::Alignment,
        SampleType::Coverage,
        SampleType::SpliceJunction,
        SampleType::CopyNumberBatch,
    ];

    /// Types listed under "DNA Tracks", in display order
    pub const DNA: [SampleType; 2] = [SampleType::Alignment, SampleType::CopyNumberBatch];

    /// Types listed under "RNA Tracks", in display order
    pub const RNA: [SampleType; 2] = [SampleType::SpliceJunction, SampleType::Coverage];

    pub fn as_str(&self) -> &'static str {
        match self {
            SampleType::Alignment => "alignment",
            SampleType::Coverage => "coverage",
            SampleType::SpliceJunction => "splice-junction",
            SampleType::CopyNumberBatch => "copy-number-batch",
        }
    }

    pub fn is_rna(&self) -> bool {
        matches!(self, SampleType::Coverage | SampleType::SpliceJunction)
    }

    /// Types enabled when reads of this type are opened.
    /// Junctions are always shown together with coverage.
    ///
    /// ```
    /// # use igvtracks::libs::sample::SampleType;
    /// assert_eq!(
    ///     SampleType::SpliceJunction.show_reads_types(),
    ///     vec![SampleType::SpliceJunction, SampleType::Coverage]
    /// );
    /// assert_eq!(SampleType::Alignment.show_reads_types(), vec![SampleType::Alignment]);
    /// ```
    pub fn show_reads_types(&self) -> Vec<SampleType> {
        match self {
            SampleType::SpliceJunction => vec![SampleType::SpliceJunction, SampleType::Coverage],
            other => vec![*other],
        }
    }
}

impl fmt::Display for SampleType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SampleType {
    type Err = anyhow::Error;

    /// ```
    /// # use igvtracks::libs::sample::SampleType;
    /// assert_eq!("gcnv".parse::<SampleType>().unwrap(), SampleType::CopyNumberBatch);
    /// assert_eq!("splice-junction".parse::<SampleType>().unwrap(), SampleType::SpliceJunction);
    /// assert!("vcf".parse::<SampleType>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alignment" | "bam" | "cram" => Ok(SampleType::Alignment),
            "coverage" | "wig" | "bigWig" => Ok(SampleType::Coverage),
            "splice-junction" | "junctions" | "spliceJunctions" => Ok(SampleType::SpliceJunction),
            "copy-number-batch" | "gcnv" => Ok(SampleType::CopyNumberBatch),
            _ => Err(anyhow::anyhow!("Unknown sample type: {}", s)),
        }
    }
}

/// One sequencing product of one individual
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleRecord {
    pub file_path: String,
    #[serde(default)]
    pub sample_id: Option<String>,
    pub project_guid: String,
}

impl SampleRecord {
    pub fn new(file_path: &str, project_guid: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            sample_id: None,
            project_guid: project_guid.to_string(),
        }
    }

    pub fn with_sample_id(mut self, sample_id: &str) -> Self {
        self.sample_id = Some(sample_id.to_string());
        self
    }

    /// Url of the file as served by the track endpoint
    ///
    /// ```
    /// # use igvtracks::libs::sample::SampleRecord;
    /// let record = SampleRecord::new("gs://bucket/NA19675 (1).cram", "R0001_1kg");
    /// assert_eq!(
    ///     record.url(),
    ///     "/api/project/R0001_1kg/igv_track/gs%3A%2F%2Fbucket%2FNA19675%20(1).cram"
    /// );
    /// ```
    pub fn url(&self) -> String {
        format!(
            "/api/project/{}/igv_track/{}",
            self.project_guid,
            encode_uri_component(&self.file_path)
        )
    }
}

/// Percent-encodes everything outside `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
pub fn encode_uri_component(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(byte as char),
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("/readviz/NA19675.bam"), "%2Freadviz%2FNA19675.bam");
        assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
        // multi-byte characters are encoded per utf-8 byte
        assert_eq!(encode_uri_component("é"), "%C3%A9");
    }

    #[test]
    fn test_catalog_keeps_input_order() {
        let json = r#"{
            "splice-junction": {"I2": {"filePath": "gs://rna/I2.junctions.bed.gz", "projectGuid": "R1"}},
            "gcnv": {
                "I3": {"filePath": "gs://cnv/batch_1.bed.gz", "sampleId": "S3", "projectGuid": "R1"},
                "I1": {"filePath": "gs://cnv/batch_1.bed.gz", "projectGuid": "R1"}
            }
        }"#;
        let catalog: SampleCatalog = serde_json::from_str(json).unwrap();

        let types: Vec<SampleType> = catalog.keys().copied().collect();
        assert_eq!(types, vec![SampleType::SpliceJunction, SampleType::CopyNumberBatch]);

        let gcnv = &catalog[&SampleType::CopyNumberBatch];
        assert_eq!(gcnv.keys().collect::<Vec<_>>(), vec!["I3", "I1"]);
        assert_eq!(gcnv["I3"].sample_id.as_deref(), Some("S3"));
        assert_eq!(gcnv["I1"].sample_id, None);
    }

    #[test]
    fn test_serialized_names() {
        let json = serde_json::to_string(&SampleType::CopyNumberBatch).unwrap();
        assert_eq!(json, "\"copy-number-batch\"");
        for t in SampleType::ALL {
            assert_eq!(t.to_string().parse::<SampleType>().unwrap(), t);
        }
    }
}
