//! Turns a family's sample catalog into browser track descriptors.
//!
//! Each enabled type is resolved record by record; a record resolves to one
//! descriptor or to nothing when another descriptor already covers it:
//!
//! * splice junctions absorb the coverage of the same individual into a
//!   merged row,
//! * copy-number records sharing a file collapse into one batch row, emitted
//!   by the member whose guid sorts first.

use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::libs::config::TrackProfiles;
use crate::libs::error::EngineError;
use crate::libs::individual::{Individual, IndividualsById};
use crate::libs::sample::{SampleCatalog, SampleRecord, SampleType};
use crate::libs::track::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssemblyPolicy {
    /// When set, an individual's coverage is dropped as soon as a junction
    /// record exists for them, whether or not junctions are enabled.
    /// When unset, coverage is dropped only when it is merged into an
    /// enabled junction row.
    pub suppress_coverage_if_junction_record_exists: bool,
}

impl Default for AssemblyPolicy {
    fn default() -> Self {
        Self {
            suppress_coverage_if_junction_record_exists: false,
        }
    }
}

/// Copy-number batches of a catalog: file path -> member guids, sorted
type Batches<'a> = IndexMap<&'a str, Vec<&'a str>>;

pub struct TrackAssembler {
    profiles: TrackProfiles,
    policy: AssemblyPolicy,
}

impl Default for TrackAssembler {
    fn default() -> Self {
        Self::new(TrackProfiles::default(), AssemblyPolicy::default())
    }
}

impl TrackAssembler {
    pub fn new(profiles: TrackProfiles, policy: AssemblyPolicy) -> Self {
        Self { profiles, policy }
    }

    pub fn profiles(&self) -> &TrackProfiles {
        &self.profiles
    }

    pub fn policy(&self) -> &AssemblyPolicy {
        &self.policy
    }

    /// Reference tracks first, then one descriptor per enabled record in
    /// catalog order, minus suppressed ones.
    pub fn assemble(
        &self,
        catalog: &SampleCatalog,
        individuals: &IndividualsById,
        enabled: &[SampleType],
        references: &[TrackDescriptor],
    ) -> Result<Vec<TrackDescriptor>, EngineError> {
        let batches = batches_of(catalog);
        let ctx = Context {
            catalog,
            individuals,
            enabled,
            batches: &batches,
        };

        let mut tracks: Vec<TrackDescriptor> = references.to_vec();
        for (sample_type, samples) in catalog {
            if !enabled.contains(sample_type) {
                continue;
            }

            let before = tracks.len();
            for (guid, sample) in samples {
                if let Some(track) = self.resolve(&ctx, *sample_type, guid, sample)? {
                    tracks.push(track);
                }
            }
            log::debug!(
                "{}: {} records, {} tracks",
                sample_type,
                samples.len(),
                tracks.len() - before
            );
        }

        for sample_type in enabled {
            if !catalog.contains_key(sample_type) {
                log::trace!("{}: no samples in catalog", sample_type);
            }
        }

        Ok(tracks)
    }

    fn resolve(
        &self,
        ctx: &Context,
        sample_type: SampleType,
        guid: &str,
        sample: &SampleRecord,
    ) -> Result<Option<TrackDescriptor>, EngineError> {
        let individual = ctx.individual(sample_type, guid)?;
        let mut track = self.base_track(sample_type, sample, individual)?;

        let resolved = match sample_type {
            SampleType::Alignment => {
                match AlignmentFormat::select(&sample.file_path, &self.profiles.cloud_schemes) {
                    AlignmentFormat::Cram => {
                        track.options.format = Some("cram".to_string());
                        track.index_with(".crai");
                    }
                    AlignmentFormat::CramProxy => {
                        track.options = track.options.overlay(&self.profiles.cram_proxy);
                    }
                    AlignmentFormat::Bam => {
                        track.options = track.options.overlay(&self.profiles.bam);
                    }
                }
                Some(TrackDescriptor::Simple(track))
            }
            SampleType::SpliceJunction => {
                track.index_with(".tbi");
                match ctx.enabled_sample(SampleType::Coverage, guid) {
                    Some(coverage) => {
                        let coverage = self.base_track(SampleType::Coverage, coverage, individual)?;
                        let height = track.options.height;
                        Some(TrackDescriptor::Merged(
                            MergedTrack::coverage_with_junctions(coverage, track, height),
                        ))
                    }
                    None => Some(TrackDescriptor::Simple(track)),
                }
            }
            SampleType::Coverage => {
                let junction = if self.policy.suppress_coverage_if_junction_record_exists {
                    ctx.sample(SampleType::SpliceJunction, guid)
                } else {
                    ctx.enabled_sample(SampleType::SpliceJunction, guid)
                };
                match junction {
                    Some(_) => None,
                    None => Some(TrackDescriptor::Simple(track)),
                }
            }
            SampleType::CopyNumberBatch => self.resolve_batch(ctx, track, guid, sample)?,
        };

        Ok(resolved)
    }

    fn resolve_batch(
        &self,
        ctx: &Context,
        mut track: SimpleTrack,
        guid: &str,
        sample: &SampleRecord,
    ) -> Result<Option<TrackDescriptor>, EngineError> {
        let members = match ctx.batches.get(sample.file_path.as_str()) {
            Some(members) => members,
            None => return Ok(None),
        };
        if members.first() != Some(&guid) {
            return Ok(None);
        }

        let samples = &ctx.catalog[&SampleType::CopyNumberBatch];
        let mut highlight_samples = IndexMap::new();
        let mut names = vec![];
        for member in members {
            let individual = ctx.individual(SampleType::CopyNumberBatch, member)?;
            let label = match samples[*member].sample_id.as_deref() {
                Some(sample_id) if !sample_id.is_empty() => sample_id.to_string(),
                _ => individual.individual_id.clone(),
            };
            highlight_samples.insert(
                label,
                self.profiles.palette.color(individual.affected).to_string(),
            );
            names.push(individual.display_name());
        }

        track.index_with(".tbi");
        if members.len() > 1 {
            track.name = TrackLabel::Text(names.iter().join(", "));
        }

        Ok(Some(TrackDescriptor::Batch(BatchTrack {
            track,
            highlight_samples,
        })))
    }

    /// Url, label and type options shared by every record of a type
    fn base_track(
        &self,
        sample_type: SampleType,
        sample: &SampleRecord,
        individual: &Individual,
    ) -> Result<SimpleTrack, EngineError> {
        if sample.file_path.is_empty() {
            return Err(EngineError::EmptyFilePath {
                sample_type,
                individual: individual.individual_guid.clone(),
            });
        }

        let profile = self.profiles.profile(sample_type);
        Ok(SimpleTrack {
            track_type: profile.track_type,
            url: sample.url(),
            index_url: None,
            name: TrackLabel::for_individual(individual),
            options: profile.options,
        })
    }
}

/// Tracks of the enabled types with the default profiles and policy
///
/// ```
/// # use igvtracks::libs::assemble::assemble_tracks;
/// # use igvtracks::libs::individual::*;
/// # use igvtracks::libs::sample::*;
/// let mut individuals = IndividualsById::new();
/// individuals.insert(
///     "I1".to_string(),
///     Individual::new("I1", "NA19675", Sex::Male, Affected::Affected),
/// );
/// let mut catalog = SampleCatalog::new();
/// catalog.entry(SampleType::Alignment).or_default().insert(
///     "I1".to_string(),
///     SampleRecord::new("gs://bucket/NA19675.cram", "R1"),
/// );
///
/// let tracks = assemble_tracks(&catalog, &individuals, &[SampleType::Alignment], &[]).unwrap();
/// assert_eq!(tracks.len(), 1);
/// assert!(assemble_tracks(&catalog, &individuals, &[], &[]).unwrap().is_empty());
/// ```
pub fn assemble_tracks(
    catalog: &SampleCatalog,
    individuals: &IndividualsById,
    enabled: &[SampleType],
    references: &[TrackDescriptor],
) -> Result<Vec<TrackDescriptor>, EngineError> {
    TrackAssembler::default().assemble(catalog, individuals, enabled, references)
}

struct Context<'a> {
    catalog: &'a SampleCatalog,
    individuals: &'a IndividualsById,
    enabled: &'a [SampleType],
    batches: &'a Batches<'a>,
}

impl<'a> Context<'a> {
    fn individual(&self, sample_type: SampleType, guid: &str) -> Result<&'a Individual, EngineError> {
        let individual = self
            .individuals
            .get(guid)
            .ok_or_else(|| EngineError::MissingIndividual {
                sample_type,
                individual: guid.to_string(),
            })?;
        if individual.individual_guid != guid {
            return Err(EngineError::GuidMismatch {
                key: guid.to_string(),
                individual_guid: individual.individual_guid.clone(),
            });
        }
        Ok(individual)
    }

    fn sample(&self, sample_type: SampleType, guid: &str) -> Option<&'a SampleRecord> {
        self.catalog.get(&sample_type).and_then(|samples| samples.get(guid))
    }

    fn enabled_sample(&self, sample_type: SampleType, guid: &str) -> Option<&'a SampleRecord> {
        if self.enabled.contains(&sample_type) {
            self.sample(sample_type, guid)
        } else {
            None
        }
    }
}

fn batches_of(catalog: &SampleCatalog) -> Batches {
    let mut batches: Batches = IndexMap::new();
    if let Some(samples) = catalog.get(&SampleType::CopyNumberBatch) {
        for (guid, sample) in samples {
            batches
                .entry(sample.file_path.as_str())
                .or_default()
                .push(guid.as_str());
        }
    }
    for members in batches.values_mut() {
        members.sort_unstable();
    }
    batches
}
