use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::libs::individual::{Affected, Individual, Sex};

//----------------------------
// TrackLabel
//----------------------------
/// Header of a track row.
///
/// Individual labels stay structured; formatting the pedigree glyph is up to
/// whoever renders them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrackLabel {
    Individual {
        sex: Sex,
        affected: Affected,
        #[serde(rename = "displayName")]
        display_name: String,
    },
    Text(String),
}

impl TrackLabel {
    pub fn for_individual(individual: &Individual) -> Self {
        TrackLabel::Individual {
            sex: individual.sex,
            affected: individual.affected,
            display_name: individual.display_name().to_string(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            TrackLabel::Individual { display_name, .. } => display_name,
            TrackLabel::Text(text) => text,
        }
    }
}

impl fmt::Display for TrackLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

//----------------------------
// TrackOptions
//----------------------------
/// Rendering options understood by the browser widget. Unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoscale: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_soft_clips: Option<bool>,
}

impl TrackOptions {
    /// Options of `other` win where set
    ///
    /// ```
    /// # use igvtracks::libs::track::TrackOptions;
    /// let base = TrackOptions { height: Some(170), format: Some("bigwig".into()), ..Default::default() };
    /// let over = TrackOptions { format: Some("cram".into()), ..Default::default() };
    /// let merged = base.overlay(&over);
    /// assert_eq!(merged.height, Some(170));
    /// assert_eq!(merged.format.as_deref(), Some("cram"));
    /// ```
    pub fn overlay(&self, other: &TrackOptions) -> TrackOptions {
        TrackOptions {
            format: other.format.clone().or_else(|| self.format.clone()),
            height: other.height.or(self.height),
            autoscale: other.autoscale.or(self.autoscale),
            color: other.color.clone().or_else(|| self.color.clone()),
            source_type: other.source_type.clone().or_else(|| self.source_type.clone()),
            indexed: other.indexed.or(self.indexed),
            show_soft_clips: other.show_soft_clips.or(self.show_soft_clips),
        }
    }
}

//----------------------------
// Descriptors
//----------------------------
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleTrack {
    #[serde(rename = "type")]
    pub track_type: String,
    pub url: String,
    #[serde(rename = "indexURL", default, skip_serializing_if = "Option::is_none")]
    pub index_url: Option<String>,
    pub name: TrackLabel,
    #[serde(flatten)]
    pub options: TrackOptions,
}

impl SimpleTrack {
    /// Sets the index to the track url plus `suffix`
    pub fn index_with(&mut self, suffix: &str) {
        self.index_url = Some(format!("{}{}", self.url, suffix));
    }
}

/// Several tracks drawn on one row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedTrack {
    pub name: TrackLabel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub tracks: Vec<SimpleTrack>,
}

impl MergedTrack {
    /// Junctions drawn over their coverage; named after the junction track
    pub fn coverage_with_junctions(
        coverage: SimpleTrack,
        junction: SimpleTrack,
        height: Option<u32>,
    ) -> Self {
        Self {
            name: junction.name.clone(),
            height,
            tracks: vec![coverage, junction],
        }
    }
}

/// A call set shared by several individuals, collapsed to one row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchTrack {
    #[serde(flatten)]
    pub track: SimpleTrack,
    #[serde(rename = "highlightSamples")]
    pub highlight_samples: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TrackDescriptor {
    Simple(SimpleTrack),
    Merged(MergedTrack),
    Batch(BatchTrack),
}

impl TrackDescriptor {
    pub fn name(&self) -> &TrackLabel {
        match self {
            TrackDescriptor::Simple(track) => &track.name,
            TrackDescriptor::Merged(merged) => &merged.name,
            TrackDescriptor::Batch(batch) => &batch.track.name,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TrackDescriptor::Simple(_) => "simple",
            TrackDescriptor::Merged(_) => "merged",
            TrackDescriptor::Batch(_) => "batch",
        }
    }
}

//----------------------------
// AlignmentFormat
//----------------------------
/// How an alignment file is handed to the browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentFormat {
    /// CRAM read directly from object storage, `.crai` next to it
    Cram,
    /// CRAM streamed through the proxy
    CramProxy,
    Bam,
}

impl AlignmentFormat {
    /// ```
    /// # use igvtracks::libs::track::AlignmentFormat;
    /// let schemes = vec!["gs://".to_string()];
    /// assert_eq!(AlignmentFormat::select("gs://bucket/a.cram", &schemes), AlignmentFormat::Cram);
    /// assert_eq!(AlignmentFormat::select("/readviz/a.cram", &schemes), AlignmentFormat::CramProxy);
    /// assert_eq!(AlignmentFormat::select("gs://bucket/a.bam", &schemes), AlignmentFormat::Bam);
    /// ```
    pub fn select(file_path: &str, cloud_schemes: &[String]) -> Self {
        if file_path.ends_with(".cram") {
            if cloud_schemes.iter().any(|s| file_path.starts_with(s.as_str())) {
                AlignmentFormat::Cram
            } else {
                AlignmentFormat::CramProxy
            }
        } else {
            AlignmentFormat::Bam
        }
    }
}
