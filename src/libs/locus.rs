use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Half-width of the smallest window shown around a variant
pub const MIN_LOCUS_RANGE_SIZE: u64 = 100;

lazy_static! {
    static ref VARIANT_ID: Regex =
        Regex::new(r"^(?:chr)?([0-9XYMT]+)-(\d+)-([ACGTN]+)-([ACGTN*]+)$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenomeBuild {
    #[serde(rename = "37", alias = "GRCh37", alias = "hg19")]
    GRCh37,
    #[serde(rename = "38", alias = "GRCh38", alias = "hg38")]
    GRCh38,
}

impl GenomeBuild {
    /// Reference genome id understood by the browser
    pub fn reference_id(&self) -> &'static str {
        match self {
            GenomeBuild::GRCh37 => "hg19",
            GenomeBuild::GRCh38 => "hg38",
        }
    }
}

impl fmt::Display for GenomeBuild {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenomeBuild::GRCh37 => write!(f, "GRCh37"),
            GenomeBuild::GRCh38 => write!(f, "GRCh38"),
        }
    }
}

impl FromStr for GenomeBuild {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "37" | "GRCh37" | "hg19" => Ok(GenomeBuild::GRCh37),
            "38" | "GRCh38" | "hg38" => Ok(GenomeBuild::GRCh38),
            _ => Err(anyhow::anyhow!("Unknown genome build: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub chrom: String,
    pub pos: u64,
    #[serde(default)]
    pub end: Option<u64>,
    #[serde(default)]
    pub ref_allele: String,
    #[serde(default)]
    pub alt_allele: String,
    pub genome_version: GenomeBuild,
    #[serde(default)]
    pub lifted_over_chrom: Option<String>,
    #[serde(default)]
    pub lifted_over_pos: Option<u64>,
    #[serde(default)]
    pub lifted_over_genome_version: Option<GenomeBuild>,
}

impl Variant {
    pub fn new(chrom: &str, pos: u64, genome_version: GenomeBuild) -> Self {
        Self {
            chrom: chrom.to_string(),
            pos,
            end: None,
            ref_allele: String::new(),
            alt_allele: String::new(),
            genome_version,
            lifted_over_chrom: None,
            lifted_over_pos: None,
            lifted_over_genome_version: None,
        }
    }

    /// Parses `CHROM-POS-REF-ALT`
    ///
    /// ```
    /// # use igvtracks::libs::locus::*;
    /// let variant = Variant::from_id("chr1-248367227-TC-T", GenomeBuild::GRCh37).unwrap();
    /// assert_eq!(variant.chrom, "1");
    /// assert_eq!(variant.pos, 248367227);
    /// assert_eq!(variant.ref_allele, "TC");
    /// assert_eq!(variant.alt_allele, "T");
    ///
    /// assert!(Variant::from_id("1:248367227", GenomeBuild::GRCh37).is_err());
    /// ```
    pub fn from_id(id: &str, genome_version: GenomeBuild) -> anyhow::Result<Self> {
        let caps = VARIANT_ID
            .captures(id)
            .ok_or_else(|| anyhow::anyhow!("Malformed variant id: {}", id))?;

        let mut variant = Variant::new(&caps[1], caps[2].parse()?, genome_version);
        variant.ref_allele = caps[3].to_string();
        variant.alt_allele = caps[4].to_string();
        Ok(variant)
    }

    pub fn with_liftover(mut self, chrom: &str, pos: u64, build: GenomeBuild) -> Self {
        self.lifted_over_chrom = Some(chrom.to_string());
        self.lifted_over_pos = Some(pos);
        self.lifted_over_genome_version = Some(build);
        self
    }

    /// Chromosome and position to show in a project on `build`.
    ///
    /// Lifted coordinates are used only when the builds differ and the
    /// liftover targets `build`; otherwise the native ones.
    pub fn position_on(&self, build: GenomeBuild) -> (&str, u64) {
        if self.genome_version != build {
            let targets_build = self
                .lifted_over_genome_version
                .map_or(true, |lifted| lifted == build);
            if let (Some(pos), true) = (self.lifted_over_pos, targets_build) {
                let chrom = self.lifted_over_chrom.as_deref().unwrap_or(&self.chrom);
                return (chrom, pos);
            }
        }
        (self.chrom.as_str(), self.pos)
    }

    /// Length of the call, zero for point variants
    pub fn size(&self) -> u64 {
        match self.end {
            Some(end) if end > self.pos => end - self.pos,
            _ => 0,
        }
    }
}

/// A chromosome window, both ends inclusive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locus {
    pub chrom: String,
    pub start: u64,
    pub end: u64,
}

impl Locus {
    pub fn width(&self) -> u64 {
        self.end - self.start
    }
}

impl fmt::Display for Locus {
    /// ```
    /// # use igvtracks::libs::locus::Locus;
    /// let locus = Locus { chrom: "1".to_string(), start: 900, end: 1100 };
    /// assert_eq!(locus.to_string(), "chr1:900-1100");
    /// let locus = Locus { chrom: "chrX".to_string(), start: 1, end: 2 };
    /// assert_eq!(locus.to_string(), "chrX:1-2");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.chrom.starts_with("chr") {
            write!(f, "{}:{}-{}", self.chrom, self.start, self.end)
        } else {
            write!(f, "chr{}:{}-{}", self.chrom, self.start, self.end)
        }
    }
}

/// The window a browser should show for `variant` in a project on `project_build`.
///
/// The window pads `[pos, pos + size]` by a third of the size on each side,
/// never less than `MIN_LOCUS_RANGE_SIZE`. A window clamped at the start of
/// the chromosome is shifted right instead of shrinking.
///
/// ```
/// # use igvtracks::libs::locus::*;
/// let variant = Variant::new("1", 1000, GenomeBuild::GRCh38);
/// let locus = resolve_locus(&variant, GenomeBuild::GRCh38);
/// assert_eq!(locus.to_string(), "chr1:900-1100");
/// ```
pub fn resolve_locus(variant: &Variant, project_build: GenomeBuild) -> Locus {
    let (chrom, pos) = variant.position_on(project_build);
    let size = variant.size();
    let radius = std::cmp::max(size / 3, MIN_LOCUS_RANGE_SIZE);

    let start = pos.saturating_sub(radius);
    let end = start
        .saturating_add(size)
        .saturating_add(radius.saturating_mul(2));

    Locus {
        chrom: chrom.to_string(),
        start,
        end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_variant_window() {
        let variant = Variant::new("2", 179_415_000, GenomeBuild::GRCh37);
        let locus = resolve_locus(&variant, GenomeBuild::GRCh37);
        assert_eq!(locus.chrom, "2");
        assert_eq!(locus.start, 179_414_900);
        assert_eq!(locus.end, 179_415_100);
        assert_eq!(locus.width(), 2 * MIN_LOCUS_RANGE_SIZE);
    }

    #[test]
    fn test_sized_variant_window() {
        // small deletion: radius stays at the minimum
        let mut variant = Variant::new("1", 10_000, GenomeBuild::GRCh38);
        variant.end = Some(10_030);
        let locus = resolve_locus(&variant, GenomeBuild::GRCh38);
        assert_eq!((locus.start, locus.end), (9_900, 10_130));

        // CNV: radius grows with a third of the size
        variant.end = Some(16_000);
        let locus = resolve_locus(&variant, GenomeBuild::GRCh38);
        assert_eq!((locus.start, locus.end), (8_000, 18_000));
        assert!(locus.start <= variant.pos && locus.end >= 16_000);

        // an end before the start counts as a point
        variant.end = Some(9_000);
        let locus = resolve_locus(&variant, GenomeBuild::GRCh38);
        assert_eq!((locus.start, locus.end), (9_900, 10_100));
    }

    #[test]
    fn test_liftover_substitution() {
        let variant = Variant::new("1", 10_000, GenomeBuild::GRCh37).with_liftover(
            "2",
            500,
            GenomeBuild::GRCh38,
        );
        let locus = resolve_locus(&variant, GenomeBuild::GRCh38);
        assert_eq!(locus.chrom, "2");
        assert_eq!((locus.start, locus.end), (400, 600));

        // same build: native coordinates
        let locus = resolve_locus(&variant, GenomeBuild::GRCh37);
        assert_eq!(locus.chrom, "1");
        assert_eq!((locus.start, locus.end), (9_900, 10_100));
    }

    #[test]
    fn test_liftover_fallbacks() {
        // no liftover at all
        let variant = Variant::new("7", 5_000, GenomeBuild::GRCh37);
        let locus = resolve_locus(&variant, GenomeBuild::GRCh38);
        assert_eq!(locus.chrom, "7");
        assert_eq!(locus.start, 4_900);

        // lifted position only, chromosome kept
        let mut variant = Variant::new("7", 5_000, GenomeBuild::GRCh37);
        variant.lifted_over_pos = Some(7_000);
        assert_eq!(variant.position_on(GenomeBuild::GRCh38), ("7", 7_000));

        // liftover into a build other than the project's
        let variant = Variant::new("7", 5_000, GenomeBuild::GRCh38).with_liftover(
            "7",
            3_000,
            GenomeBuild::GRCh38,
        );
        assert_eq!(variant.position_on(GenomeBuild::GRCh37), ("7", 5_000));
    }

    #[test]
    fn test_window_near_chromosome_start() {
        let variant = Variant::new("MT", 40, GenomeBuild::GRCh38);
        let locus = resolve_locus(&variant, GenomeBuild::GRCh38);
        assert_eq!((locus.start, locus.end), (0, 200));
        assert_eq!(locus.to_string(), "chrMT:0-200");
        assert!(locus.width() >= 2 * MIN_LOCUS_RANGE_SIZE);

        // sized variant at the very start keeps size + 2 * radius
        let mut variant = Variant::new("1", 0, GenomeBuild::GRCh38);
        variant.end = Some(900);
        let locus = resolve_locus(&variant, GenomeBuild::GRCh38);
        assert_eq!((locus.start, locus.end), (0, 1_500));
    }

    #[test]
    fn test_window_near_coordinate_limit() {
        let variant = Variant::new("1", u64::MAX - 10, GenomeBuild::GRCh38);
        let locus = resolve_locus(&variant, GenomeBuild::GRCh38);
        assert_eq!(locus.start, u64::MAX - 110);
        assert_eq!(locus.end, u64::MAX);

        let mut variant = Variant::new("1", u64::MAX - 10, GenomeBuild::GRCh38);
        variant.end = Some(u64::MAX);
        let locus = resolve_locus(&variant, GenomeBuild::GRCh38);
        assert_eq!(locus.end, u64::MAX);
    }

    #[test]
    fn test_variant_json() {
        let json = r#"{
            "chrom": "1",
            "pos": 248367227,
            "end": 248367228,
            "refAllele": "TC",
            "altAllele": "T",
            "genomeVersion": "37",
            "liftedOverChrom": "1",
            "liftedOverPos": 248203925,
            "liftedOverGenomeVersion": "GRCh38"
        }"#;
        let variant: Variant = serde_json::from_str(json).unwrap();
        assert_eq!(variant.genome_version, GenomeBuild::GRCh37);
        assert_eq!(variant.lifted_over_genome_version, Some(GenomeBuild::GRCh38));
        assert_eq!(variant.size(), 1);
        assert_eq!(variant.position_on(GenomeBuild::GRCh38), ("1", 248203925));
    }

    #[test]
    fn test_genome_build() {
        assert_eq!("hg19".parse::<GenomeBuild>().unwrap(), GenomeBuild::GRCh37);
        assert_eq!("38".parse::<GenomeBuild>().unwrap().reference_id(), "hg38");
        assert!("GRCm39".parse::<GenomeBuild>().is_err());
        assert_eq!(GenomeBuild::GRCh37.to_string(), "GRCh37");
    }
}
