//! CSV reader construction over byte streams that may carry a UTF-8 byte
//! order mark.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::Result;

const UTF8_BOM: [u8; 3] = [0xef, 0xbb, 0xbf];

pub fn from_path(path: &Path) -> Result<csv::Reader<impl Read>> {
    let file = File::open(path)?;
    Ok(from_reader(file)?)
}

pub fn from_reader<R: Read>(rdr: R) -> io::Result<csv::Reader<impl Read>> {
    Ok(csv::Reader::from_reader(skip_bom(rdr)?))
}

/// Peeks at the first bytes of `rdr`. A byte order mark is consumed; anything
/// else is replayed in front of the remaining stream. Inputs shorter than the
/// mark are not an error.
pub fn skip_bom<R: Read>(mut rdr: R) -> io::Result<impl Read> {
    let mut preamble = [0u8; 3];
    let mut n = 0;
    while n < preamble.len() {
        match rdr.read(&mut preamble[n..]) {
            Ok(0) => break,
            Ok(m) => n += m,
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    let replay = if preamble[..n] == UTF8_BOM {
        Vec::new()
    } else {
        preamble[..n].to_vec()
    };
    Ok(io::Cursor::new(replay).chain(rdr))
}
