pub mod fasta;
pub mod msf;
pub mod report;
pub mod writer;
