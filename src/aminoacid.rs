//! The canonical amino acid alphabet and its code and name tables.

use serde::{Deserialize, Serialize, de::Error as _};

/// One of the 20 canonical amino acids.
///
/// The discriminants start at 0 so occurrence tallies can be kept in a plain
/// array indexed by `amino_acid as usize`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub enum AminoAcid {
    /// Ala, A
    #[default]
    Alanine = 0,
    /// Arg, R
    Arginine,
    /// Asn, N
    Asparagine,
    /// Asp, D
    AsparticAcid,
    /// Cys, C
    Cysteine,
    /// Gln, Q
    Glutamine,
    /// Glu, E
    GlutamicAcid,
    /// Gly, G
    Glycine,
    /// His, H
    Histidine,
    /// Ile, I
    Isoleucine,
    /// Leu, L
    Leucine,
    /// Lys, K
    Lysine,
    /// Met, M
    Methionine,
    /// Phe, F
    Phenylalanine,
    /// Pro, P
    Proline,
    /// Ser, S
    Serine,
    /// Thr, T
    Threonine,
    /// Trp, W
    Tryptophan,
    /// Tyr, Y
    Tyrosine,
    /// Val, V
    Valine,
}

/// The error for a character or string that is not a canonical amino acid code.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NotAnAminoAcid;

impl std::fmt::Display for NotAnAminoAcid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Not a canonical amino acid code")
    }
}

impl std::error::Error for NotAnAminoAcid {}

impl AminoAcid {
    /// The total number of canonical amino acids
    pub const TOTAL_NUMBER: usize = Self::Valine as usize + 1;

    /// All 20 canonical amino acids
    pub const CANONICAL_AMINO_ACIDS: &'static [Self] = &[
        Self::Alanine,
        Self::Arginine,
        Self::Asparagine,
        Self::AsparticAcid,
        Self::Cysteine,
        Self::Glutamine,
        Self::GlutamicAcid,
        Self::Glycine,
        Self::Histidine,
        Self::Isoleucine,
        Self::Leucine,
        Self::Lysine,
        Self::Methionine,
        Self::Phenylalanine,
        Self::Proline,
        Self::Serine,
        Self::Threonine,
        Self::Tryptophan,
        Self::Tyrosine,
        Self::Valine,
    ];

    /// Get the single letter representation of the amino acid
    pub const fn one_letter_code(self) -> char {
        match self {
            Self::Alanine => 'A',
            Self::Arginine => 'R',
            Self::Asparagine => 'N',
            Self::AsparticAcid => 'D',
            Self::Cysteine => 'C',
            Self::Glutamine => 'Q',
            Self::GlutamicAcid => 'E',
            Self::Glycine => 'G',
            Self::Histidine => 'H',
            Self::Isoleucine => 'I',
            Self::Leucine => 'L',
            Self::Lysine => 'K',
            Self::Methionine => 'M',
            Self::Phenylalanine => 'F',
            Self::Proline => 'P',
            Self::Serine => 'S',
            Self::Threonine => 'T',
            Self::Tryptophan => 'W',
            Self::Tyrosine => 'Y',
            Self::Valine => 'V',
        }
    }

    /// Get the 3 letter code for the amino acid
    pub const fn three_letter_code(self) -> &'static str {
        match self {
            Self::Alanine => "Ala",
            Self::Arginine => "Arg",
            Self::Asparagine => "Asn",
            Self::AsparticAcid => "Asp",
            Self::Cysteine => "Cys",
            Self::Glutamine => "Gln",
            Self::GlutamicAcid => "Glu",
            Self::Glycine => "Gly",
            Self::Histidine => "His",
            Self::Isoleucine => "Ile",
            Self::Leucine => "Leu",
            Self::Lysine => "Lys",
            Self::Methionine => "Met",
            Self::Phenylalanine => "Phe",
            Self::Proline => "Pro",
            Self::Serine => "Ser",
            Self::Threonine => "Thr",
            Self::Tryptophan => "Trp",
            Self::Tyrosine => "Tyr",
            Self::Valine => "Val",
        }
    }

    /// Get the full name for the amino acid
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alanine => "Alanine",
            Self::Arginine => "Arginine",
            Self::Asparagine => "Asparagine",
            Self::AsparticAcid => "Aspartic acid",
            Self::Cysteine => "Cysteine",
            Self::Glutamine => "Glutamine",
            Self::GlutamicAcid => "Glutamic acid",
            Self::Glycine => "Glycine",
            Self::Histidine => "Histidine",
            Self::Isoleucine => "Isoleucine",
            Self::Leucine => "Leucine",
            Self::Lysine => "Lysine",
            Self::Methionine => "Methionine",
            Self::Phenylalanine => "Phenylalanine",
            Self::Proline => "Proline",
            Self::Serine => "Serine",
            Self::Threonine => "Threonine",
            Self::Tryptophan => "Tryptophan",
            Self::Tyrosine => "Tyrosine",
            Self::Valine => "Valine",
        }
    }
}

impl std::fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.one_letter_code())
    }
}

impl std::str::FromStr for AminoAcid {
    type Err = NotAnAminoAcid;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl TryFrom<&str> for AminoAcid {
    type Error = NotAnAminoAcid;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => ch.try_into(),
            _ => Err(NotAnAminoAcid),
        }
    }
}

impl TryFrom<char> for AminoAcid {
    type Error = NotAnAminoAcid;
    fn try_from(value: char) -> Result<Self, Self::Error> {
        if value.is_ascii() {
            let num = value as u8;
            num.try_into()
        } else {
            Err(NotAnAminoAcid)
        }
    }
}

impl TryFrom<&u8> for AminoAcid {
    type Error = NotAnAminoAcid;
    fn try_from(value: &u8) -> Result<Self, Self::Error> {
        match value {
            b'A' | b'a' => Ok(Self::Alanine),
            b'C' | b'c' => Ok(Self::Cysteine),
            b'D' | b'd' => Ok(Self::AsparticAcid),
            b'E' | b'e' => Ok(Self::GlutamicAcid),
            b'F' | b'f' => Ok(Self::Phenylalanine),
            b'G' | b'g' => Ok(Self::Glycine),
            b'H' | b'h' => Ok(Self::Histidine),
            b'I' | b'i' => Ok(Self::Isoleucine),
            b'K' | b'k' => Ok(Self::Lysine),
            b'L' | b'l' => Ok(Self::Leucine),
            b'M' | b'm' => Ok(Self::Methionine),
            b'N' | b'n' => Ok(Self::Asparagine),
            b'P' | b'p' => Ok(Self::Proline),
            b'Q' | b'q' => Ok(Self::Glutamine),
            b'R' | b'r' => Ok(Self::Arginine),
            b'S' | b's' => Ok(Self::Serine),
            b'T' | b't' => Ok(Self::Threonine),
            b'V' | b'v' => Ok(Self::Valine),
            b'W' | b'w' => Ok(Self::Tryptophan),
            b'Y' | b'y' => Ok(Self::Tyrosine),
            _ => Err(NotAnAminoAcid),
        }
    }
}

impl TryFrom<u8> for AminoAcid {
    type Error = NotAnAminoAcid;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from(&value)
    }
}

impl Serialize for AminoAcid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AminoAcid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.as_str()
            .try_into()
            .map_err(|_| D::Error::custom(format!("'{code}' is not a canonical amino acid code")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_aa() {
        assert_eq!(AminoAcid::try_from('V'), Ok(AminoAcid::Valine));
        assert_eq!(AminoAcid::try_from('c'), Ok(AminoAcid::Cysteine));
        assert_eq!(AminoAcid::try_from(b'r'), Ok(AminoAcid::Arginine));
        assert_eq!("w".parse(), Ok(AminoAcid::Tryptophan));
        assert_eq!(AminoAcid::try_from('🦀'), Err(NotAnAminoAcid));
        assert_eq!(AminoAcid::try_from('B'), Err(NotAnAminoAcid));
        assert_eq!(AminoAcid::try_from("AA"), Err(NotAnAminoAcid));
        assert_eq!(AminoAcid::try_from(""), Err(NotAnAminoAcid));
    }

    #[test]
    fn alphabet_is_total() {
        assert_eq!(
            AminoAcid::CANONICAL_AMINO_ACIDS.len(),
            AminoAcid::TOTAL_NUMBER
        );
        for (index, aa) in AminoAcid::CANONICAL_AMINO_ACIDS.iter().enumerate() {
            assert_eq!(*aa as usize, index);
            assert_eq!(AminoAcid::try_from(aa.one_letter_code()), Ok(*aa));
            assert!(!aa.name().is_empty());
            assert_eq!(aa.three_letter_code().len(), 3);
        }
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<char> = AminoAcid::CANONICAL_AMINO_ACIDS
            .iter()
            .map(|aa| aa.one_letter_code())
            .collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), AminoAcid::TOTAL_NUMBER);
    }
}
