use anyhow::{anyhow, Context, Result};
use std::io::BufRead;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub desc: Option<String>,
    pub seq: Vec<u8>,
}

pub struct FastaReader<R: BufRead> {
    reader: R,
    buf: String,
    done: bool,
    peek_header: Option<String>,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            done: false,
            peek_header: None,
        }
    }

    pub fn next_record(&mut self) -> Result<Option<FastaRecord>> {
        if self.done {
            return Ok(None);
        }

        let header = match self.peek_header.take() {
            Some(h) => h,
            None => match self.next_header()? {
                Some(h) => h,
                None => return Ok(None),
            },
        };

        let mut parts = header.splitn(2, char::is_whitespace);
        let id = parts.next().unwrap_or("").to_string();
        let desc = parts
            .next()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        // residues up to the next header; protein letters are kept verbatim apart from case
        let mut seq: Vec<u8> = Vec::new();
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                self.done = true;
                break;
            }
            if let Some(h) = self.buf.strip_prefix('>') {
                self.peek_header = Some(h.trim().to_string());
                break;
            }
            seq.extend(
                self.buf
                    .bytes()
                    .filter(|b| !b.is_ascii_whitespace())
                    .map(|b| b.to_ascii_uppercase()),
            );
        }

        Ok(Some(FastaRecord { id, desc, seq }))
    }

    fn next_header(&mut self) -> Result<Option<String>> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                self.done = true;
                return Ok(None);
            }
            if let Some(h) = self.buf.strip_prefix('>') {
                return Ok(Some(h.trim().to_string()));
            }
        }
    }
}

/// 读取 FASTA 文件中的第一条序列（每个输入文件只含一条蛋白序列）
pub fn read_first_record<P: AsRef<Path>>(path: P) -> Result<FastaRecord> {
    let path = path.as_ref();
    let fh = std::fs::File::open(path)
        .with_context(|| format!("cannot open FASTA '{}'", path.display()))?;
    let mut reader = FastaReader::new(std::io::BufReader::new(fh));
    let rec = reader
        .next_record()
        .with_context(|| format!("cannot read FASTA '{}'", path.display()))?
        .ok_or_else(|| anyhow!("FASTA file '{}' contains no sequences", path.display()))?;
    if rec.seq.is_empty() {
        anyhow::bail!("FASTA file '{}': record '{}' is empty", path.display(), rec.id);
    }
    Ok(rec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_protein_records() {
        let data = b">sp|P69905|HBA_HUMAN Hemoglobin alpha\nMvLSPADK\nTNVKAAW\n>q2\nGHAGEY\n";
        let mut r = FastaReader::new(Cursor::new(&data[..]));

        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.id, "sp|P69905|HBA_HUMAN");
        assert_eq!(r1.desc.as_deref(), Some("Hemoglobin alpha"));
        assert_eq!(r1.seq, b"MVLSPADKTNVKAAW");

        let r2 = r.next_record().unwrap().unwrap();
        assert_eq!(r2.id, "q2");
        assert_eq!(r2.desc, None);
        assert_eq!(r2.seq, b"GHAGEY");

        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn parse_fasta_with_crlf_and_whitespace() {
        let data = b">p1 desc\r\nMK v l\r\n aa\r\n>p2 \r\n W W \r\n";
        let mut r = FastaReader::new(Cursor::new(&data[..]));

        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.id, "p1");
        assert_eq!(r1.seq, b"MKVLAA");

        let r2 = r.next_record().unwrap().unwrap();
        assert_eq!(r2.id, "p2");
        assert_eq!(r2.desc, None);
        assert_eq!(r2.seq, b"WW");

        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn parse_fasta_with_leading_empty_lines() {
        let data = b"\n\n>p1\nMKV\n";
        let mut r = FastaReader::new(Cursor::new(&data[..]));
        let r1 = r.next_record().unwrap().unwrap();
        assert_eq!(r1.id, "p1");
        assert_eq!(r1.seq, b"MKV");
        assert!(r.next_record().unwrap().is_none());
    }

    #[test]
    fn read_first_record_missing_file() {
        let err = read_first_record("/nonexistent/dir/none.fa").unwrap_err();
        assert!(err.to_string().contains("none.fa"));
    }
}
