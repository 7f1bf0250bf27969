//! Composition analysis of amino acid sequences.

use std::borrow::Cow;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::aminoacid::AminoAcid;
use crate::fate::MetabolicFate;

/// The ways a sequence can fail analysis. Both are reported inside the
/// returned [`SequenceAnalysis`], [`analyze_sequence`] itself never fails.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SequenceError {
    /// The input contained no characters after normalisation
    EmptyInput,
    /// The input contained characters outside the canonical alphabet,
    /// deduplicated in order of first appearance
    InvalidCharacters(Vec<char>),
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Please enter a valid amino acid sequence"),
            Self::InvalidCharacters(characters) => write!(
                f,
                "Invalid amino acid codes found: {}",
                characters.iter().join(", ")
            ),
        }
    }
}

impl std::error::Error for SequenceError {}

/// Per occurrence totals for the three classification groups.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FateCounts {
    /// The number of glucogenic residues
    pub glucogenic: usize,
    /// The number of amphibolic residues
    pub amphibolic: usize,
    /// The number of ketogenic residues
    pub ketogenic: usize,
}

impl FateCounts {
    /// The total number of residues counted over all three groups
    pub const fn total(self) -> usize {
        self.glucogenic + self.amphibolic + self.ketogenic
    }

    /// Get the count for a single group
    pub const fn count(self, fate: MetabolicFate) -> usize {
        match fate {
            MetabolicFate::Glucogenic => self.glucogenic,
            MetabolicFate::Amphibolic => self.amphibolic,
            MetabolicFate::Ketogenic => self.ketogenic,
        }
    }

    /// The group holding a strict majority over both others. Any tie for the
    /// lead falls back to [`MetabolicFate::Glucogenic`], even when Glucogenic
    /// is not itself tied for the lead.
    pub const fn dominant(self) -> MetabolicFate {
        if self.amphibolic > self.glucogenic && self.amphibolic > self.ketogenic {
            MetabolicFate::Amphibolic
        } else if self.ketogenic > self.glucogenic && self.ketogenic > self.amphibolic {
            MetabolicFate::Ketogenic
        } else {
            MetabolicFate::Glucogenic
        }
    }

    fn tally(&mut self, fate: MetabolicFate) {
        match fate {
            MetabolicFate::Glucogenic => self.glucogenic += 1,
            MetabolicFate::Amphibolic => self.amphibolic += 1,
            MetabolicFate::Ketogenic => self.ketogenic += 1,
        }
    }
}

/// The tally for one distinct amino acid in an analysed sequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AminoAcidCount {
    /// The one letter code
    pub code: AminoAcid,
    /// The full name, for display
    pub name: Cow<'static, str>,
    /// The number of occurrences, at least 1
    pub count: usize,
    /// count / total × 100, unrounded (rounding is a presentation concern)
    pub percentage: f64,
    /// The fixed classification of the code
    pub classification: MetabolicFate,
}

/// The outcome of analysing one sequence. The serialized form uses the
/// camelCase field names consumed by the rendering layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceAnalysis {
    /// The number of residues in the normalised sequence
    pub total_count: usize,
    /// One entry per distinct code, sorted by count descending with ties kept
    /// in order of first appearance
    pub amino_acids: Vec<AminoAcidCount>,
    /// Per occurrence totals for the three classification groups
    pub group_counts: FateCounts,
    /// The group holding a strict majority, Glucogenic on any tie
    pub dominant_group: MetabolicFate,
    /// Whether the input passed validation, check this before consuming the
    /// count fields
    pub is_valid: bool,
    /// Set if and only if `is_valid` is false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<SequenceError>,
}

impl SequenceAnalysis {
    /// The placeholder analysis for input that failed validation, all counts
    /// zero and the dominant group at its Glucogenic default
    fn invalid(error: SequenceError) -> Self {
        Self {
            total_count: 0,
            amino_acids: Vec::new(),
            group_counts: FateCounts::default(),
            dominant_group: MetabolicFate::default(),
            is_valid: false,
            error: Some(error),
        }
    }

    /// Get this analysis as a standard result
    /// # Errors
    /// If the analysed input was empty or contained invalid characters.
    pub fn as_result(&self) -> Result<&Self, &SequenceError> {
        match &self.error {
            Some(error) => Err(error),
            None => Ok(self),
        }
    }
}

impl std::fmt::Display for SequenceAnalysis {
    /// Render a compact text summary, one row per distinct code. Percentages
    /// are rounded to one decimal here and only here.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(error) = &self.error {
            return write!(f, "{error}");
        }
        writeln!(
            f,
            "{} residues, dominant group: {}",
            self.total_count, self.dominant_group
        )?;
        for aa in &self.amino_acids {
            writeln!(
                f,
                "{} {:<13} {:>5} {:>5.1}% {}",
                aa.code, aa.name, aa.count, aa.percentage, aa.classification
            )?;
        }
        Ok(())
    }
}

/// Analyse the composition and metabolic fate of an amino acid sequence.
///
/// The input is Unicode uppercased and stripped of all whitespace before
/// validation, so case and layout never matter. Equal count entries are kept
/// in order of first appearance in the normalised sequence.
///
/// This is a pure function: no I/O, deterministic, and it never panics. Both
/// failure conditions (empty input, characters outside the canonical
/// alphabet) are carried inside the returned value.
pub fn analyze_sequence(sequence: &str) -> SequenceAnalysis {
    let normalized: Vec<char> = sequence
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if normalized.is_empty() {
        return SequenceAnalysis::invalid(SequenceError::EmptyInput);
    }

    let mut residues = Vec::with_capacity(normalized.len());
    let mut invalid = Vec::new();
    for c in &normalized {
        match AminoAcid::try_from(*c) {
            Ok(amino_acid) => residues.push(amino_acid),
            Err(_) => invalid.push(*c),
        }
    }
    if !invalid.is_empty() {
        return SequenceAnalysis::invalid(SequenceError::InvalidCharacters(
            invalid.into_iter().unique().collect(),
        ));
    }

    let total_count = residues.len();
    let mut counts = [0_usize; AminoAcid::TOTAL_NUMBER];
    let mut first_seen = Vec::new();
    let mut group_counts = FateCounts::default();
    for amino_acid in residues {
        if counts[amino_acid as usize] == 0 {
            first_seen.push(amino_acid);
        }
        counts[amino_acid as usize] += 1;
        group_counts.tally(amino_acid.metabolic_fate());
    }

    let mut amino_acids: Vec<AminoAcidCount> = first_seen
        .into_iter()
        .map(|amino_acid| AminoAcidCount {
            code: amino_acid,
            name: Cow::Borrowed(amino_acid.name()),
            count: counts[amino_acid as usize],
            percentage: (counts[amino_acid as usize] as f64 / total_count as f64) * 100.0,
            classification: amino_acid.metabolic_fate(),
        })
        .collect();
    // Stable sort, so equal counts stay in first seen order
    amino_acids.sort_by(|a, b| b.count.cmp(&a.count));

    SequenceAnalysis {
        total_count,
        amino_acids,
        group_counts,
        dominant_group: group_counts.dominant(),
        is_valid: true,
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        for input in ["", "   ", "\t\n \r\n"] {
            let analysis = analyze_sequence(input);
            assert!(!analysis.is_valid);
            assert_eq!(analysis.error, Some(SequenceError::EmptyInput));
            assert_eq!(
                analysis.to_string(),
                "Please enter a valid amino acid sequence"
            );
            assert_eq!(analysis.total_count, 0);
            assert!(analysis.amino_acids.is_empty());
            assert_eq!(analysis.dominant_group, MetabolicFate::Glucogenic);
        }
    }

    #[test]
    fn invalid_characters() {
        let analysis = analyze_sequence("xyz");
        assert!(!analysis.is_valid);
        assert_eq!(
            analysis.error,
            Some(SequenceError::InvalidCharacters(vec!['X', 'Y', 'Z']))
        );
        assert_eq!(
            analysis.to_string(),
            "Invalid amino acid codes found: X, Y, Z"
        );
        assert!(analysis.as_result().is_err());
    }

    #[test]
    fn invalid_characters_deduplicated_in_first_seen_order() {
        let analysis = analyze_sequence("A1B2A1B2");
        assert_eq!(
            analysis.error,
            Some(SequenceError::InvalidCharacters(vec!['1', 'B', '2']))
        );
        assert_eq!(analysis.total_count, 0);
    }

    #[test]
    fn full_alphabet() {
        let analysis = analyze_sequence("ARNDCEQGHILKMFPSTWYV");
        assert!(analysis.is_valid);
        assert!(analysis.as_result().is_ok());
        assert_eq!(analysis.total_count, 20);
        assert_eq!(analysis.amino_acids.len(), 20);
        assert!(analysis.amino_acids.iter().all(|aa| aa.count == 1));
        assert_eq!(
            analysis.group_counts,
            FateCounts {
                glucogenic: 13,
                amphibolic: 5,
                ketogenic: 2,
            }
        );
        assert_eq!(analysis.group_counts.total(), 20);
        assert_eq!(analysis.dominant_group, MetabolicFate::Glucogenic);
    }

    #[test]
    fn single_residue_repeated() {
        let analysis = analyze_sequence("aaa");
        assert!(analysis.is_valid);
        assert_eq!(analysis.total_count, 3);
        assert_eq!(analysis.amino_acids.len(), 1);
        let entry = &analysis.amino_acids[0];
        assert_eq!(entry.code, AminoAcid::Alanine);
        assert_eq!(entry.name, "Alanine");
        assert_eq!(entry.count, 3);
        assert!((entry.percentage - 100.0).abs() < f64::EPSILON);
        assert_eq!(entry.classification, MetabolicFate::Glucogenic);
        assert_eq!(analysis.dominant_group, MetabolicFate::Glucogenic);
    }

    #[test]
    fn whitespace_and_case_insensitive() {
        let analysis = analyze_sequence("ll kk");
        assert!(analysis.is_valid);
        assert_eq!(analysis.total_count, 4);
        assert_eq!(
            analysis.group_counts,
            FateCounts {
                glucogenic: 0,
                amphibolic: 0,
                ketogenic: 4,
            }
        );
        assert_eq!(analysis.dominant_group, MetabolicFate::Ketogenic);
        assert_eq!(analysis, analyze_sequence("LLKK"));
    }

    #[test]
    fn unicode_uppercasing_expands() {
        // Matches the behaviour of full Unicode uppercasing: ß becomes SS
        let analysis = analyze_sequence("ß");
        assert!(analysis.is_valid);
        assert_eq!(analysis.total_count, 2);
        assert_eq!(analysis.amino_acids[0].code, AminoAcid::Serine);
        assert_eq!(analysis.amino_acids[0].count, 2);
    }

    #[test]
    fn sorted_by_count_descending() {
        let analysis = analyze_sequence("TTTGA");
        let order: Vec<(AminoAcid, usize)> = analysis
            .amino_acids
            .iter()
            .map(|aa| (aa.code, aa.count))
            .collect();
        assert_eq!(
            order,
            vec![
                (AminoAcid::Threonine, 3),
                (AminoAcid::Glycine, 1),
                (AminoAcid::Alanine, 1),
            ]
        );
    }

    #[test]
    fn equal_counts_keep_first_seen_order() {
        let analysis = analyze_sequence("GAAG");
        let order: Vec<AminoAcid> = analysis.amino_acids.iter().map(|aa| aa.code).collect();
        assert_eq!(order, vec![AminoAcid::Glycine, AminoAcid::Alanine]);
    }

    #[test]
    fn dominant_group_strict_majority() {
        assert_eq!(
            analyze_sequence("FFFA").dominant_group,
            MetabolicFate::Amphibolic
        );
        assert_eq!(
            analyze_sequence("LLLF").dominant_group,
            MetabolicFate::Ketogenic
        );
    }

    #[test]
    fn dominant_group_ties_default_to_glucogenic() {
        // Glucogenic not even present, but ties still fall back to it
        assert_eq!(
            analyze_sequence("FFLL").dominant_group,
            MetabolicFate::Glucogenic
        );
        assert_eq!(
            analyze_sequence("AF").dominant_group,
            MetabolicFate::Glucogenic
        );
        assert_eq!(
            analyze_sequence("AFL").dominant_group,
            MetabolicFate::Glucogenic
        );
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let analysis = analyze_sequence("MVLSPADKTNVKAAWGKVGA");
        let sum: f64 = analysis.amino_acids.iter().map(|aa| aa.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
        let counted: usize = analysis.amino_acids.iter().map(|aa| aa.count).sum();
        assert_eq!(counted, analysis.total_count);
    }
}
