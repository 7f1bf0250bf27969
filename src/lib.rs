#![doc = include_str!("../README.md")]

/// The canonical amino acid alphabet and its code and name tables.
pub mod aminoacid;
/// Contains the composition analysis of sequences.
pub mod analysis;
/// Contains the metabolic fate classification and its membership tables.
pub mod fate;

/// A subset of the types that are envisioned to be used the most, importing
/// this is a good starting point for working with the crate
pub mod prelude {
    pub use crate::aminoacid::AminoAcid;
    pub use crate::analysis::{
        AminoAcidCount, FateCounts, SequenceAnalysis, SequenceError, analyze_sequence,
    };
    pub use crate::fate::MetabolicFate;
}
