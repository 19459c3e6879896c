//! *Rust data structures and decoders for flat-file sequence records.*
//!
//! This crate reads the text-based record formats used by the major
//! sequence databanks: [GenBank], [EMBL] (including the [SwissProt] and
//! TrEMBL protein databases) and FASTA, including the FASTA files exported
//! by GenBank with NCBI composite identifiers.
//!
//! [GenBank]: https://www.ncbi.nlm.nih.gov/genbank/
//! [EMBL]: https://www.ebi.ac.uk/ena/browser/
//! [SwissProt]: https://www.uniprot.org/
//!
//!
//! # 🔌 Usage
//!
//! Each format has its own module with a `parse` function, which can be used
//! to obtain an iterator over the records of a file. Records of every format
//! implement the [`SeqRecord`] trait, which gives access to their
//! identifiers, organism, sequence and verbatim text.
//!
//! ```rust
//! extern crate seqrecord;
//!
//! use seqrecord::SeqRecord;
//!
//! let f = std::fs::File::open("tests/genbank.gb")
//!    .map(std::io::BufReader::new)
//!    .unwrap();
//!
//! for r in seqrecord::genbank::parse(f) {
//!    let record = r.unwrap();
//!    println!("{} ({} bp)", record.primary_id(), record.sequence_length());
//! }
//! ```
//!
//! Any [`BufRead`] implementor can be used as an input. When the format is
//! only known at runtime, the [`Format`] enum can be parsed from a string and
//! given to [`parser::decode_next`], which returns format-tagged [`Record`]
//! values.
//!
//! ## 📦 Decoding Gzip
//!
//! Databank releases are usually distributed Gzip-compressed. Use
//! [`flate2::read::GzDecoder`] or [`libflate::gzip::Decoder`] to decode the
//! input stream, and then simply wrap it in a [`BufferedReader`].
//!
//! ## 🐭 Organism queries
//!
//! The [`interrogator`] module checks whether a record comes from a given
//! organism, using a controlled vocabulary of tokens (`mouse`, `rat`,
//! `rodent`, `human`):
//!
//! ```rust
//! use seqrecord::interrogator::GenBankInterrogator;
//!
//! let f = std::fs::File::open("tests/genbank.gb")
//!    .map(std::io::BufReader::new)
//!    .unwrap();
//!
//! let interrogator = GenBankInterrogator::new();
//! let mice = seqrecord::genbank::parse(f)
//!     .map(Result::unwrap)
//!     .filter(|r| interrogator.is_organism(r, "mouse").unwrap())
//!     .count();
//! assert_eq!(mice, 1);
//! ```
//!
//!
//! # 📝 Features
//!
//! ## `smartstring`
//!
//! _**enabled** by default_.
//!
//! Store short identifiers and header fields in a [`SmartString`], which
//! avoids an allocation for strings of up to 23 bytes.
//!
//!
//! # 📜 Logging
//!
//! Decoders report skipped preamble lines and inconsistent declared lengths
//! through the [`log`] facade; no logger is installed by the crate.
//!
//!
//! [`SeqRecord`]: ./record/trait.SeqRecord.html
//! [`Record`]: ./record/enum.Record.html
//! [`Format`]: ./record/enum.Format.html
//! [`parser::decode_next`]: ./parser/fn.decode_next.html
//! [`interrogator`]: ./interrogator/index.html
//! [`BufRead`]: https://doc.rust-lang.org/std/io/trait.BufRead.html
//! [`flate2::read::GzDecoder`]: https://docs.rs/flate2/latest/flate2/read/struct.GzDecoder.html
//! [`libflate::gzip::Decoder`]: https://docs.rs/libflate/latest/libflate/gzip/struct.Decoder.html
//! [`BufferedReader`]: https://doc.rust-lang.org/std/io/struct.BufReader.html
//! [`SmartString`]: https://docs.rs/smartstring/
//! [`log`]: https://docs.rs/log/

extern crate chrono;
extern crate fnv;
extern crate lazy_static;
extern crate log;
extern crate memchr;
extern crate regex;
#[cfg(feature = "smartstring")]
extern crate smartstring;
extern crate thiserror;

pub mod common;
pub mod embl;
pub mod error;
pub mod fasta;
pub mod gbfasta;
pub mod genbank;
pub mod interrogator;
pub mod parser;
pub mod record;

#[doc(inline)]
pub use self::error::Error;
#[doc(inline)]
pub use self::record::Format;
#[doc(inline)]
pub use self::record::Record;
#[doc(inline)]
pub use self::record::SeqRecord;
