//! Organism queries over decoded records.
//!
//! An interrogator answers whether a record comes from a given organism,
//! using a controlled vocabulary which maps a token (`mouse`, `rat`,
//! `rodent`, `human`) to the text expected in the organism field of the
//! record. GenBank and SwissProt records do not describe organisms the same
//! way, so each database family has its own vocabulary.

mod genbank;
mod swissprot;

use std::iter::FromIterator;

use fnv::FnvHashMap;
use lazy_static::lazy_static;

use crate::error::Error;

pub use self::genbank::GenBankInterrogator;
pub use self::swissprot::SwissProtInterrogator;

lazy_static! {
    static ref GENBANK: Vocabulary = Vocabulary::from_iter(vec![
        ("mouse", "Muridae; Murinae; Mus"),
        ("rat", "Rattus"),
        ("rodent", "Rodentia"),
        ("human", "sapiens"),
    ]);
    static ref SWISSPROT: Vocabulary = Vocabulary::from_iter(vec![
        ("mouse", "Mus musculus"),
        ("rat", "Rattus"),
        ("rodent", "Rodentia;"),
        ("human", "sapiens"),
    ]);
}

// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// A controlled vocabulary of organism tokens.
///
/// Tokens and match strings are stored lower-cased, so that lookups are
/// case-insensitive and match strings can be compared with the lower-cased
/// organism fields of decoded records.
///
/// # Example
/// ```rust
/// use seqrecord::interrogator::Vocabulary;
///
/// let mut vocabulary = Vocabulary::new();
/// vocabulary.insert("Zebrafish", "Danio rerio");
/// assert_eq!(vocabulary.get("zebrafish").unwrap(), "danio rerio");
/// assert!(vocabulary.get("mouse").is_err());
/// ```
pub struct Vocabulary {
    terms: FnvHashMap<String, String>,
}

impl Vocabulary {
    /// Create a new empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in vocabulary for GenBank records.
    pub fn genbank() -> &'static Self {
        &GENBANK
    }

    /// The built-in vocabulary for SwissProt and EMBL records.
    pub fn swissprot() -> &'static Self {
        &SWISSPROT
    }

    /// Add a token to the vocabulary, replacing any previous definition.
    pub fn insert<T, M>(&mut self, token: T, match_string: M)
    where
        T: AsRef<str>,
        M: AsRef<str>,
    {
        self.terms.insert(
            token.as_ref().to_lowercase(),
            match_string.as_ref().to_lowercase(),
        );
    }

    /// Get the match string associated with `token`.
    pub fn get(&self, token: &str) -> Result<&str, Error> {
        self.terms
            .get(&token.to_lowercase())
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownVocabulary(token.to_string()))
    }

    /// Check whether `text` contains the match string of `token`.
    pub fn matches(&self, text: &str, token: &str) -> Result<bool, Error> {
        self.get(token).map(|m| text.contains(m))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<T: AsRef<str>, M: AsRef<str>> FromIterator<(T, M)> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = (T, M)>>(iter: I) -> Self {
        let mut vocabulary = Self::new();
        for (token, match_string) in iter {
            vocabulary.insert(token, match_string);
        }
        vocabulary
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn builtin_vocabularies() {
        let genbank = Vocabulary::genbank();
        assert_eq!(genbank.len(), 4);
        assert_eq!(genbank.get("mouse").unwrap(), "muridae; murinae; mus");
        assert_eq!(genbank.get("rodent").unwrap(), "rodentia");

        let swissprot = Vocabulary::swissprot();
        assert_eq!(swissprot.len(), 4);
        assert_eq!(swissprot.get("mouse").unwrap(), "mus musculus");
        assert_eq!(swissprot.get("rodent").unwrap(), "rodentia;");
    }

    #[test]
    fn case_insensitive_tokens() {
        assert_eq!(Vocabulary::genbank().get("Human").unwrap(), "sapiens");
        assert_eq!(Vocabulary::swissprot().get("RAT").unwrap(), "rattus");
    }

    #[test]
    fn unknown_token() {
        match Vocabulary::genbank().get("zebrafish") {
            Err(Error::UnknownVocabulary(token)) => assert_eq!(token, "zebrafish"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
