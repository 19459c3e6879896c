use super::Vocabulary;
use crate::embl::EmblRecord;
use crate::error::Error;
use crate::record::SeqRecord;

#[derive(Debug, Clone, Copy)]
/// An organism interrogator for SwissProt, TrEMBL and EMBL records.
pub struct SwissProtInterrogator<'v> {
    vocabulary: &'v Vocabulary,
}

impl SwissProtInterrogator<'static> {
    /// Create an interrogator using the built-in SwissProt vocabulary.
    pub fn new() -> Self {
        Self::with_vocabulary(Vocabulary::swissprot())
    }
}

impl Default for SwissProtInterrogator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'v> SwissProtInterrogator<'v> {
    /// Create an interrogator using a custom vocabulary.
    pub fn with_vocabulary(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &'v Vocabulary {
        self.vocabulary
    }

    /// Check whether the `OS` lines of `record` name the organism of `token`.
    pub fn is_organism<R: SeqRecord + ?Sized>(&self, record: &R, token: &str) -> Result<bool, Error> {
        self.vocabulary.matches(record.organism(), token)
    }

    /// Check whether the `OC` lines of `record` contain the lineage of `token`.
    pub fn is_organism_classification(
        &self,
        record: &EmblRecord,
        token: &str,
    ) -> Result<bool, Error> {
        self.vocabulary
            .matches(record.organism_classification(), token)
    }
}

#[cfg(test)]
mod tests {

    use std::io::Cursor;

    use super::*;

    fn records() -> Vec<EmblRecord> {
        let txt = std::fs::read_to_string("tests/swissprot.dat").unwrap();
        crate::embl::parse(Cursor::new(txt))
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn is_organism() {
        let records = records();
        let interrogator = SwissProtInterrogator::new();
        // human
        assert!(!interrogator.is_organism(&records[0], "mouse").unwrap());
        assert!(interrogator.is_organism(&records[0], "human").unwrap());
        // mouse
        assert!(interrogator.is_organism(&records[1], "mouse").unwrap());
        assert!(!interrogator.is_organism(&records[1], "rat").unwrap());
        // the lineage is not part of the organism field
        assert!(!interrogator.is_organism(&records[1], "rodent").unwrap());
    }

    #[test]
    fn is_organism_classification() {
        let records = records();
        let interrogator = SwissProtInterrogator::new();
        assert!(interrogator.is_organism_classification(&records[1], "rodent").unwrap());
        assert!(!interrogator.is_organism_classification(&records[0], "rodent").unwrap());
        assert!(interrogator.is_organism_classification(&records[0], "cat").is_err());
    }

    #[test]
    fn generic_records() {
        let record = crate::record::Record::from(records().remove(1));
        let interrogator = SwissProtInterrogator::default();
        assert!(interrogator.is_organism(&record, "MOUSE").unwrap());
    }
}
