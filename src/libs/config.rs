use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::libs::assemble::AssemblyPolicy;
use crate::libs::individual::Affected;
use crate::libs::sample::SampleType;
use crate::libs::track::TrackOptions;

/// Renderer type and default options of one sample type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeProfile {
    pub track_type: String,
    #[serde(default)]
    pub options: TrackOptions,
}

impl TypeProfile {
    fn new(track_type: &str, options: TrackOptions) -> Self {
        Self {
            track_type: track_type.to_string(),
            options,
        }
    }
}

/// Highlight colors of batch members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub affected: String,
    pub unaffected: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            affected: "red".to_string(),
            unaffected: "blue".to_string(),
        }
    }
}

impl Palette {
    pub fn color(&self, affected: Affected) -> &str {
        if affected.is_affected() {
            &self.affected
        } else {
            &self.unaffected
        }
    }
}

/// Fixed per-type rendering option sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackProfiles {
    pub types: IndexMap<SampleType, TypeProfile>,
    /// Applied to CRAMs outside object storage
    pub cram_proxy: TrackOptions,
    /// Applied to every non-CRAM alignment
    pub bam: TrackOptions,
    /// Url prefixes that mark object storage
    pub cloud_schemes: Vec<String>,
    pub palette: Palette,
}

impl Default for TrackProfiles {
    fn default() -> Self {
        let mut types = IndexMap::new();
        types.insert(
            SampleType::Alignment,
            TypeProfile::new(
                "alignment",
                TrackOptions {
                    show_soft_clips: Some(true),
                    ..Default::default()
                },
            ),
        );
        types.insert(
            SampleType::Coverage,
            TypeProfile::new(
                "wig",
                TrackOptions {
                    format: Some("bigwig".to_string()),
                    height: Some(170),
                    autoscale: Some(true),
                    ..Default::default()
                },
            ),
        );
        types.insert(
            SampleType::SpliceJunction,
            TypeProfile::new(
                "spliceJunctions",
                TrackOptions {
                    format: Some("bed".to_string()),
                    height: Some(170),
                    ..Default::default()
                },
            ),
        );
        types.insert(
            SampleType::CopyNumberBatch,
            TypeProfile::new(
                "gcnv",
                TrackOptions {
                    format: Some("gcnv".to_string()),
                    height: Some(200),
                    ..Default::default()
                },
            ),
        );

        Self {
            types,
            cram_proxy: TrackOptions {
                source_type: Some("pysam".to_string()),
                ..Default::default()
            },
            bam: TrackOptions {
                indexed: Some(false),
                ..Default::default()
            },
            cloud_schemes: vec!["gs://".to_string()],
            palette: Palette::default(),
        }
    }
}

impl TrackProfiles {
    /// Renderer type and options for a sample type.
    /// Types missing from the table render under their own name with no options.
    pub fn profile(&self, sample_type: SampleType) -> TypeProfile {
        match self.types.get(&sample_type) {
            Some(profile) => profile.clone(),
            None => TypeProfile::new(sample_type.as_str(), TrackOptions::default()),
        }
    }
}

/// Options passed straight to the browser widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrowserOptions {
    pub min_track_height: u32,
    pub load_default_tracks: bool,
    pub show_center_guide: bool,
    pub show_cursor_tracking_guide: bool,
    pub show_karyo: bool,
    /// Scroll and zoom to the locus whenever it changes
    pub auto_locus: bool,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            min_track_height: 100,
            load_default_tracks: false,
            show_center_guide: true,
            show_cursor_tracking_guide: true,
            show_karyo: false,
            auto_locus: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub profiles: TrackProfiles,
    pub policy: AssemblyPolicy,
    pub browser: BrowserOptions,
}

impl Config {
    /// Reads a JSON config; absent fields keep their defaults
    pub fn from_path(path: &str) -> anyhow::Result<Self> {
        let config: Config = crate::read_json(path)?;
        log::debug!("Loaded config from {}", path);
        Ok(config)
    }
}
