//! Format-independent view over decoded records.

use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::str::FromStr;

use chrono::format::ParseError;

use crate::common::date::Date;
use crate::common::ShortString;
use crate::embl::EmblRecord;
use crate::error::InvalidValue;
use crate::fasta::FastaRecord;
use crate::genbank::GenBankRecord;
use crate::gbfasta::GenBankFastaRecord;

// ---------------------------------------------------------------------------

/// The fields shared by every flat-file sequence record.
///
/// Formats that do not carry a given field return an empty string (or `0`
/// for the sequence length) rather than failing.
pub trait SeqRecord {
    /// All identifiers of the record, the primary one first.
    fn ids(&self) -> &[ShortString];

    /// The identifier and version number, e.g. `AC002397.1`.
    fn version(&self) -> &str {
        ""
    }

    /// The lower-cased organism name(s).
    fn organism(&self) -> &str {
        ""
    }

    /// The sequence type, e.g. `mRNA`, `DNA` or `PRT`.
    fn molecule_type(&self) -> &str {
        ""
    }

    /// The databank division code.
    fn division(&self) -> &str {
        ""
    }

    /// The raw date of the last annotation update.
    fn date(&self) -> &str {
        ""
    }

    /// The sequence block, as accumulated by the decoder.
    fn sequence(&self) -> &str;

    /// The number of residues in the sequence.
    fn sequence_length(&self) -> usize;

    /// The verbatim text of the record.
    fn text(&self) -> &str;

    /// The primary identifier of the record.
    fn primary_id(&self) -> &str {
        self.ids().first().map(|id| id.as_str()).unwrap_or_default()
    }

    /// The secondary identifiers (aliases) of the record.
    fn secondary_ids(&self) -> &[ShortString] {
        self.ids().get(1..).unwrap_or_default()
    }

    /// The version number, i.e. the part of `version` after the first `.`.
    fn version_number(&self) -> &str {
        let version = self.version();
        match version.find('.') {
            Some(i) => &version[i + 1..],
            None => "",
        }
    }

    /// Interpret the raw `date` field as a calendar date.
    fn parse_date(&self) -> Result<Option<Date>, ParseError> {
        match self.date().trim() {
            "" => Ok(None),
            s => s.parse().map(Some),
        }
    }
}

// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The flat-file formats supported by the crate.
pub enum Format {
    GenBank,
    Embl,
    Fasta,
    GenBankFasta,
}

impl Format {
    /// The line prefix starting a record of this format.
    pub fn start_marker(&self) -> &'static str {
        match self {
            Format::GenBank => "LOCUS",
            Format::Embl => "ID",
            Format::Fasta | Format::GenBankFasta => ">",
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(match self {
            Format::GenBank => "GenBank",
            Format::Embl => "EMBL",
            Format::Fasta => "FASTA",
            Format::GenBankFasta => "GenBank-FASTA",
        })
    }
}

impl FromStr for Format {
    type Err = InvalidValue;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "genbank" | "gb" => Ok(Format::GenBank),
            "embl" | "swissprot" | "sp" | "trembl" => Ok(Format::Embl),
            "fasta" | "fa" => Ok(Format::Fasta),
            "gbfasta" | "genbank-fasta" => Ok(Format::GenBankFasta),
            _ => Err(InvalidValue::from(s)),
        }
    }
}

// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
/// A record of any supported format, tagged with its format.
pub enum Record {
    GenBank(GenBankRecord),
    Embl(EmblRecord),
    Fasta(FastaRecord),
    GenBankFasta(GenBankFastaRecord),
}

impl Record {
    /// The format this record was decoded from.
    pub fn format(&self) -> Format {
        match self {
            Record::GenBank(_) => Format::GenBank,
            Record::Embl(_) => Format::Embl,
            Record::Fasta(_) => Format::Fasta,
            Record::GenBankFasta(_) => Format::GenBankFasta,
        }
    }

    fn inner(&self) -> &dyn SeqRecord {
        match self {
            Record::GenBank(r) => r,
            Record::Embl(r) => r,
            Record::Fasta(r) => r,
            Record::GenBankFasta(r) => r,
        }
    }
}

impl SeqRecord for Record {
    fn ids(&self) -> &[ShortString] {
        self.inner().ids()
    }

    fn version(&self) -> &str {
        self.inner().version()
    }

    fn organism(&self) -> &str {
        self.inner().organism()
    }

    fn molecule_type(&self) -> &str {
        self.inner().molecule_type()
    }

    fn division(&self) -> &str {
        self.inner().division()
    }

    fn date(&self) -> &str {
        self.inner().date()
    }

    fn sequence(&self) -> &str {
        self.inner().sequence()
    }

    fn sequence_length(&self) -> usize {
        self.inner().sequence_length()
    }

    fn text(&self) -> &str {
        self.inner().text()
    }
}

impl From<GenBankRecord> for Record {
    fn from(r: GenBankRecord) -> Self {
        Record::GenBank(r)
    }
}

impl From<EmblRecord> for Record {
    fn from(r: EmblRecord) -> Self {
        Record::Embl(r)
    }
}

impl From<FastaRecord> for Record {
    fn from(r: FastaRecord) -> Self {
        Record::Fasta(r)
    }
}

impl From<GenBankFastaRecord> for Record {
    fn from(r: GenBankFastaRecord) -> Self {
        Record::GenBankFasta(r)
    }
}
