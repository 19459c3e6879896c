use std::ops::Range;
use std::str::FromStr;

use crate::common::ShortString;
use crate::error::Error;
use crate::error::InvalidValue;
use crate::parser::utils::fixed_column;
use crate::parser::utils::parse_length;

// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A revision of the GenBank flat file `LOCUS` line layout.
pub enum Revision {
    /// The layout used before NCBI-GenBank release 126.0.
    Legacy,
    /// The layout used since NCBI-GenBank release 126.0.
    Current,
}

impl Default for Revision {
    fn default() -> Self {
        Revision::Current
    }
}

impl FromStr for Revision {
    type Err = InvalidValue;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legacy" => Ok(Revision::Legacy),
            "current" => Ok(Revision::Current),
            other => Err(InvalidValue::from(other)),
        }
    }
}

// ---------------------------------------------------------------------------

/// The byte columns of the fields of a GenBank `LOCUS` line.
///
/// Ranges are 0-based and half-open. Fields extending past the end of a
/// line are clipped, but the sequence length is always required.
///
/// # Example
/// ```rust
/// use seqrecord::genbank::LocusLayout;
/// use seqrecord::genbank::Revision;
///
/// let layout = LocusLayout::for_revision(Revision::Legacy);
/// assert_eq!(layout.length, 22..29);
/// assert_eq!(LocusLayout::default(), LocusLayout::for_revision(Revision::Current));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocusLayout {
    pub length: Range<usize>,
    pub molecule_type: Range<usize>,
    pub division: Range<usize>,
    pub date: Range<usize>,
}

impl LocusLayout {
    /// Get the layout of the given format revision.
    pub fn for_revision(revision: Revision) -> Self {
        match revision {
            Revision::Legacy => Self {
                length: 22..29,
                molecule_type: 36..41,
                division: 52..55,
                date: 62..73,
            },
            Revision::Current => Self {
                length: 29..40,
                molecule_type: 47..53,
                division: 64..67,
                date: 68..79,
            },
        }
    }

    /// Extract the fields of a `LOCUS` line.
    pub fn parse(&self, line: &str, line_number: usize) -> Result<Locus, Error> {
        let length = fixed_column(line, &self.length, "sequence length", line_number)?;
        Ok(Locus {
            length: parse_length(length, line_number)?,
            molecule_type: fixed_column(line, &self.molecule_type, "molecule type", line_number)?
                .into(),
            division: fixed_column(line, &self.division, "division", line_number)?.into(),
            date: fixed_column(line, &self.date, "date", line_number)?.into(),
        })
    }
}

impl Default for LocusLayout {
    fn default() -> Self {
        Self::for_revision(Revision::default())
    }
}

impl From<Revision> for LocusLayout {
    fn from(revision: Revision) -> Self {
        Self::for_revision(revision)
    }
}

// ---------------------------------------------------------------------------

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// The fields of a `LOCUS` line.
pub struct Locus {
    pub length: usize,
    pub molecule_type: ShortString,
    pub division: ShortString,
    pub date: ShortString,
}

#[cfg(test)]
mod tests {

    use super::*;

    const CURRENT: &str =
        "LOCUS       AC002397                 120 bp    DNA     linear   PRI 15-MAR-1991";
    const LEGACY: &str =
        "LOCUS       AC002397      120 bp    DNA             PRI       15-MAR-1991";

    #[test]
    fn parse_current() {
        let locus = LocusLayout::default().parse(CURRENT, 1).unwrap();
        assert_eq!(locus.length, 120);
        assert_eq!(locus.molecule_type.as_str(), "DNA");
        assert_eq!(locus.division.as_str(), "PRI");
        assert_eq!(locus.date.as_str(), "15-MAR-1991");
    }

    #[test]
    fn parse_legacy() {
        let locus = LocusLayout::for_revision(Revision::Legacy)
            .parse(LEGACY, 1)
            .unwrap();
        assert_eq!(locus.length, 120);
        assert_eq!(locus.molecule_type.as_str(), "DNA");
        assert_eq!(locus.division.as_str(), "PRI");
        assert_eq!(locus.date.as_str(), "15-MAR-1991");
    }

    #[test]
    fn parse_wrong_revision() {
        let err = LocusLayout::for_revision(Revision::Legacy)
            .parse(CURRENT, 7)
            .unwrap_err();
        match err {
            Error::MalformedField("sequence length", 7, _) => (),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn parse_missing_length() {
        let err = LocusLayout::default().parse("LOCUS       AC002397", 1).unwrap_err();
        match err {
            Error::MalformedField("sequence length", 1, _) => (),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn revision_from_str() {
        assert_eq!(Revision::from_str("legacy").unwrap(), Revision::Legacy);
        assert!(Revision::from_str("r126").is_err());
    }
}
