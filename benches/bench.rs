#![feature(test)]

extern crate seqrecord;
extern crate test;

use std::io::BufRead;
use std::io::Cursor;

use seqrecord::fasta::FastaRecord;
use test::Bencher;

/// Concatenate `n` copies of a fixture file.
fn fixture(path: &str, n: usize) -> String {
    std::fs::read_to_string(path).unwrap().repeat(n)
}

#[bench]
fn bench_read(b: &mut Bencher) {
    let txt = fixture("tests/genbank.gb", 500);
    b.iter(|| {
        Cursor::new(&txt)
            .lines()
            .collect::<Result<Vec<String>, _>>()
            .unwrap();
    });
    b.bytes = txt.as_bytes().len() as u64;
}

#[bench]
fn bench_genbank_parser(b: &mut Bencher) {
    let txt = fixture("tests/genbank.gb", 500);
    b.iter(|| {
        for record in seqrecord::genbank::parse(Cursor::new(&txt)) {
            record.unwrap();
        }
    });
    b.bytes = txt.as_bytes().len() as u64;
}

#[bench]
fn bench_embl_parser(b: &mut Bencher) {
    let txt = fixture("tests/swissprot.dat", 500);
    b.iter(|| {
        for record in seqrecord::embl::parse(Cursor::new(&txt)) {
            record.unwrap();
        }
    });
    b.bytes = txt.as_bytes().len() as u64;
}

#[bench]
fn bench_fasta_parser(b: &mut Bencher) {
    let sequence = "ACGT".repeat(2500);
    let txt = (0..200)
        .map(|i| FastaRecord::from_parts(format!("seq{}", i), "benchmark", sequence.as_str()).text)
        .collect::<String>();
    b.iter(|| {
        for record in seqrecord::fasta::parse(Cursor::new(&txt)) {
            record.unwrap();
        }
    });
    b.bytes = txt.as_bytes().len() as u64;
}
