//! Binary snapshot of the tagger tables.
//!
//! Parsing the text lexicon is slow for a full corpus, so the tables can be
//! converted once ("installed") into a compact binary file that loads in a
//! fraction of the time.
//!
//! Layout:
//!
//! ```text
//! +-------+-------------+--------------------------+
//! | magic | version u32 | bincode(Tables)          |
//! | ETAG  | little-end. |                          |
//! +-------+-------------+--------------------------+
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use log::info;

use crate::error::{Result, TaggerError};
use crate::lexicon::{SNAPSHOT_FILE, Tables};

const MAGIC: &[u8; 4] = b"ETAG";
const VERSION: u32 = 1;

/// Serialize `tables` into `writer`.
pub fn write<W: Write>(tables: &Tables, mut writer: W) -> Result<()> {
    writer.write_all(MAGIC)?;
    writer.write_u32::<LittleEndian>(VERSION)?;
    bincode::serialize_into(&mut writer, tables)?;
    writer.flush()?;
    Ok(())
}

/// Deserialize tables previously written with [`write`].
pub fn read<R: Read>(mut reader: R) -> Result<Tables> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    if &magic != MAGIC {
        return Err(TaggerError::snapshot("not an engtag snapshot (bad magic)"));
    }
    let version = reader.read_u32::<LittleEndian>()?;
    if version != VERSION {
        return Err(TaggerError::snapshot(format!(
            "unsupported snapshot version {version} (expected {VERSION})"
        )));
    }
    Ok(bincode::deserialize_from(reader)?)
}

pub fn write_file<P: AsRef<Path>>(tables: &Tables, path: P) -> Result<()> {
    write(tables, BufWriter::new(File::create(path)?))
}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Tables> {
    read(BufReader::new(File::open(path)?))
}

/// Rebuild the snapshot for the text tables in `source_dir`.
///
/// The snapshot is written to `output` when given, otherwise next to the
/// text files. Returns the loaded tables.
pub fn install<P: AsRef<Path>>(source_dir: P, output: Option<&Path>) -> Result<Tables> {
    let source_dir = source_dir.as_ref();
    let tables = Tables::load(source_dir)?;
    let target = match output {
        Some(path) => path.to_path_buf(),
        None => source_dir.join(SNAPSHOT_FILE),
    };
    write_file(&tables, &target)?;
    info!("wrote tagger snapshot to {}", target.display());
    Ok(tables)
}
