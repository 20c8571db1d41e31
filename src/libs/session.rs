use serde::{Deserialize, Serialize};

use crate::libs::assemble::TrackAssembler;
use crate::libs::config::{BrowserOptions, Config};
use crate::libs::error::EngineError;
use crate::libs::individual::IndividualsById;
use crate::libs::locus::{resolve_locus, GenomeBuild, Variant};
use crate::libs::sample::{SampleCatalog, SampleType};
use crate::libs::selection::retain_references;
use crate::libs::track::TrackDescriptor;

/// Everything known about one family's sequencing files
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyBundle {
    pub family_guid: String,
    #[serde(default)]
    pub family_id: Option<String>,
    /// Build of the project the family belongs to
    pub genome_version: GenomeBuild,
    pub individuals: IndividualsById,
    #[serde(default)]
    pub samples: SampleCatalog,
    #[serde(default)]
    pub references: Vec<TrackDescriptor>,
    #[serde(default)]
    pub variant: Option<Variant>,
}

impl FamilyBundle {
    pub fn family_label(&self) -> &str {
        self.family_id.as_deref().unwrap_or(&self.family_guid)
    }

    /// All types with samples, in catalog order
    pub fn sample_types(&self) -> Vec<SampleType> {
        self.samples.keys().copied().collect()
    }
}

/// What the browser widget is initialised with
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IgvSession {
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locus: Option<String>,
    pub tracks: Vec<TrackDescriptor>,
    #[serde(flatten)]
    pub options: BrowserOptions,
}

impl IgvSession {
    pub fn compose(
        bundle: &FamilyBundle,
        enabled: &[SampleType],
        config: &Config,
    ) -> Result<Self, EngineError> {
        let assembler = TrackAssembler::new(config.profiles.clone(), config.policy.clone());
        let references = retain_references(enabled, &bundle.references);
        let tracks = assembler.assemble(&bundle.samples, &bundle.individuals, enabled, &references)?;

        let locus = bundle
            .variant
            .as_ref()
            .map(|variant| resolve_locus(variant, bundle.genome_version).to_string());

        Ok(Self {
            reference: bundle.genome_version.reference_id().to_string(),
            locus,
            tracks,
            options: config.browser.clone(),
        })
    }
}
