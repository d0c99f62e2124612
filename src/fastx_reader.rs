// FASTA/FASTQ read loading with automatic gzip detection.
//
// The format is chosen by file suffix; gzip is layered on by a trailing
// `.gz`. Quality strings are not kept, only names and bases.

use std::fs::File;
use std::io::{self, Read as IoRead};
use std::path::Path;

use bio::io::{fasta, fastq};
use flate2::read::GzDecoder;

use crate::sequence::Read;

const FASTA_SUFFIXES: [&str; 4] = [".fa", ".fa.gz", ".fasta", ".fasta.gz"];
const FASTQ_SUFFIXES: [&str; 4] = [".fq", ".fq.gz", ".fastq", ".fastq.gz"];

enum Format {
    Fasta,
    Fastq,
}

fn detect_format(path: &Path) -> io::Result<Format> {
    let name = path.to_string_lossy();
    if FASTA_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
        return Ok(Format::Fasta);
    }
    if FASTQ_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
        return Ok(Format::Fastq);
    }
    Err(io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("unsupported file suffix: {}", name),
    ))
}

fn open_raw(path: &Path) -> io::Result<Box<dyn IoRead>> {
    let file = File::open(path)?;
    if path.to_string_lossy().ends_with(".gz") {
        Ok(Box::new(GzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}

/// Loads all reads from `path`, packed 2-bit. Ids are left at 0; the
/// pipeline assigns them after sorting.
pub fn load_reads(path: &Path) -> io::Result<Vec<Read>> {
    let format = detect_format(path)?;
    let reader = open_raw(path)?;

    let mut dst = Vec::new();
    match format {
        Format::Fasta => {
            for record in fasta::Reader::new(reader).records() {
                let record =
                    record.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                dst.push(Read::new(record.id().to_string(), record.seq()));
            }
        }
        Format::Fastq => {
            for record in fastq::Reader::new(reader).records() {
                let record =
                    record.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                dst.push(Read::new(record.id().to_string(), record.seq()));
            }
        }
    }
    Ok(dst)
}
