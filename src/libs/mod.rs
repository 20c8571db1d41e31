pub mod assemble;
pub mod config;
pub mod error;
pub mod individual;
pub mod io;
pub mod locus;
pub mod sample;
pub mod selection;
pub mod session;
pub mod track;

pub use assemble::{assemble_tracks, AssemblyPolicy, TrackAssembler};
pub use error::EngineError;
pub use locus::{resolve_locus, GenomeBuild, Locus, Variant, MIN_LOCUS_RANGE_SIZE};
