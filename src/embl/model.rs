use crate::common::ShortString;
use crate::record::SeqRecord;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// An EMBL, SwissProt or TrEMBL flat file record.
pub struct EmblRecord {
    // ID
    pub entry_name: ShortString,
    pub molecule_type: ShortString,
    pub sequence_length: usize,
    // AC
    pub ids: Vec<ShortString>, // minOccurs = 1
    // DT
    pub date: ShortString,
    // OS / OC
    pub organism: String,
    pub organism_classification: String,
    // SQ
    pub sequence: String,
    pub text: String,
}

impl EmblRecord {
    /// The lower-cased taxonomic lineage of the first source organism.
    pub fn organism_classification(&self) -> &str {
        &self.organism_classification
    }

    /// The residues of the `SQ` block, without spacing.
    pub fn residues(&self) -> impl Iterator<Item = char> + '_ {
        self.sequence.chars().filter(char::is_ascii_alphabetic)
    }
}

impl SeqRecord for EmblRecord {
    fn ids(&self) -> &[ShortString] {
        &self.ids
    }

    fn organism(&self) -> &str {
        &self.organism
    }

    fn molecule_type(&self) -> &str {
        &self.molecule_type
    }

    fn date(&self) -> &str {
        &self.date
    }

    fn sequence(&self) -> &str {
        &self.sequence
    }

    fn sequence_length(&self) -> usize {
        self.sequence_length
    }

    fn text(&self) -> &str {
        &self.text
    }
}
