//! The metabolic fate classification of the canonical amino acids.

use serde::{Deserialize, Serialize};

use crate::aminoacid::AminoAcid;

/// The metabolic fate of an amino acid, determined by the degradation products
/// of its carbon skeleton. The three groups partition the canonical alphabet.
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize, Deserialize,
)]
pub enum MetabolicFate {
    /// Convertible to glucose via gluconeogenesis
    #[default]
    Glucogenic,
    /// Convertible to both glucose and ketone bodies
    Amphibolic,
    /// Convertible only to ketone bodies
    Ketogenic,
}

/// The error for a string that does not name a metabolic fate group.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NotAMetabolicFate;

impl std::fmt::Display for NotAMetabolicFate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Not a metabolic fate group")
    }
}

impl std::error::Error for NotAMetabolicFate {}

impl MetabolicFate {
    /// All three classification groups
    pub const ALL: &'static [Self] = &[Self::Glucogenic, Self::Amphibolic, Self::Ketogenic];

    /// A one line description of what this fate means for the carbon skeleton
    pub const fn description(self) -> &'static str {
        match self {
            Self::Glucogenic => "Convertible to glucose via gluconeogenesis",
            Self::Amphibolic => "Convertible to both glucose and ketone bodies",
            Self::Ketogenic => "Convertible only to ketone bodies",
        }
    }
}

impl std::fmt::Display for MetabolicFate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Glucogenic => "Glucogenic",
                Self::Amphibolic => "Amphibolic",
                Self::Ketogenic => "Ketogenic",
            }
        )
    }
}

impl std::str::FromStr for MetabolicFate {
    type Err = NotAMetabolicFate;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "glucogenic" => Ok(Self::Glucogenic),
            "amphibolic" => Ok(Self::Amphibolic),
            "ketogenic" => Ok(Self::Ketogenic),
            _ => Err(NotAMetabolicFate),
        }
    }
}

/// Amino acids whose carbon skeleton can enter both gluconeogenesis and
/// ketogenesis (F, I, T, W, Y)
pub const AMPHIBOLIC: &[AminoAcid] = &[
    AminoAcid::Phenylalanine,
    AminoAcid::Isoleucine,
    AminoAcid::Threonine,
    AminoAcid::Tryptophan,
    AminoAcid::Tyrosine,
];

/// Amino acids that are exclusively ketogenic (L, K)
pub const KETOGENIC: &[AminoAcid] = &[AminoAcid::Leucine, AminoAcid::Lysine];

/// The remaining 13 canonical amino acids, all glucogenic
pub const GLUCOGENIC: &[AminoAcid] = &[
    AminoAcid::Alanine,
    AminoAcid::Arginine,
    AminoAcid::Asparagine,
    AminoAcid::AsparticAcid,
    AminoAcid::Cysteine,
    AminoAcid::Glutamine,
    AminoAcid::GlutamicAcid,
    AminoAcid::Glycine,
    AminoAcid::Histidine,
    AminoAcid::Methionine,
    AminoAcid::Proline,
    AminoAcid::Serine,
    AminoAcid::Valine,
];

impl AminoAcid {
    /// Get the metabolic fate of this amino acid
    pub const fn metabolic_fate(self) -> MetabolicFate {
        match self {
            Self::Phenylalanine
            | Self::Isoleucine
            | Self::Threonine
            | Self::Tryptophan
            | Self::Tyrosine => MetabolicFate::Amphibolic,
            Self::Leucine | Self::Lysine => MetabolicFate::Ketogenic,
            _ => MetabolicFate::Glucogenic,
        }
    }
}
