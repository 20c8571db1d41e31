use indexmap::IndexMap;

use crate::libs::sample::{SampleCatalog, SampleType};
use crate::libs::track::TrackDescriptor;

/// Sample types a family can show, split into DNA and RNA options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableTypes {
    pub dna: Vec<SampleType>,
    pub rna: Vec<SampleType>,
}

impl AvailableTypes {
    /// Whether the type checkboxes are worth showing at all
    pub fn needs_selector(&self) -> bool {
        self.dna.len() > 1 || !self.rna.is_empty()
    }
}

/// Types present in the catalog, in the fixed DNA and RNA display orders
pub fn available_types(catalog: &SampleCatalog) -> AvailableTypes {
    let present = |types: &[SampleType]| -> Vec<SampleType> {
        types
            .iter()
            .filter(|t| catalog.get(*t).map_or(false, |samples| !samples.is_empty()))
            .copied()
            .collect()
    };

    AvailableTypes {
        dna: present(&SampleType::DNA),
        rna: present(&SampleType::RNA),
    }
}

/// RNA reference tracks only make sense next to RNA samples
pub fn retain_references(
    enabled: &[SampleType],
    references: &[TrackDescriptor],
) -> Vec<TrackDescriptor> {
    if enabled.iter().any(|t| t.is_rna()) {
        references.to_vec()
    } else {
        vec![]
    }
}

/// Sample type -> families having samples of that type.
/// Types and families keep the order they are first seen in.
pub fn families_by_type<'a, I>(families: I) -> IndexMap<SampleType, Vec<&'a str>>
where
    I: IntoIterator<Item = (&'a str, &'a SampleCatalog)>,
{
    let mut by_type: IndexMap<SampleType, Vec<&'a str>> = IndexMap::new();
    for (family, catalog) in families {
        for sample_type in catalog.keys() {
            by_type.entry(*sample_type).or_default().push(family);
        }
    }
    by_type
}
