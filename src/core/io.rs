//! Compressed file I/O
//!
//! Inputs are opened with transparent decompression; outputs are always
//! gzip streams wrapped around a buffered file.

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read};
use std::path::Path;

/// Default buffer size for readers and writers (128KB)
pub const DEFAULT_BUFFER_SIZE: usize = 128 * 1024;

/// Compression format of an input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionFormat {
    /// Plain text (uncompressed)
    Plain,
    /// Gzip compressed (.gz)
    Gzip,
    /// Bzip2 compressed (.bz2)
    Bzip2,
}

/// Gzip member header
const GZIP_MAGIC: &[u8] = &[0x1f, 0x8b];

/// Bzip2 stream header ("BZh")
const BZIP2_MAGIC: &[u8] = b"BZh";

/// Compression of a cut-site file: `.gz`/`.bz2` extensions win, otherwise
/// the leading bytes decide
pub fn detect_compression(path: &Path) -> io::Result<CompressionFormat> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("gz") => return Ok(CompressionFormat::Gzip),
        Some("bz2") => return Ok(CompressionFormat::Bzip2),
        _ => {}
    }

    let mut head = Vec::with_capacity(BZIP2_MAGIC.len());
    File::open(path)?
        .take(BZIP2_MAGIC.len() as u64)
        .read_to_end(&mut head)?;

    Ok(if head.starts_with(GZIP_MAGIC) {
        CompressionFormat::Gzip
    } else if head.starts_with(BZIP2_MAGIC) {
        CompressionFormat::Bzip2
    } else {
        CompressionFormat::Plain
    })
}

/// Open an input file for buffered reading, decompressing as needed
pub fn open_input<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let format = detect_compression(path)?;
    let file = File::open(path)?;

    log::debug!("opening {} as {:?}", path.display(), format);

    let reader: Box<dyn BufRead> = match format {
        CompressionFormat::Gzip => Box::new(BufReader::with_capacity(
            DEFAULT_BUFFER_SIZE,
            MultiGzDecoder::new(file),
        )),
        CompressionFormat::Bzip2 => Box::new(BufReader::with_capacity(
            DEFAULT_BUFFER_SIZE,
            bzip2::read::MultiBzDecoder::new(file),
        )),
        CompressionFormat::Plain => Box::new(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file)),
    };
    Ok(reader)
}

/// Gzip writer over a buffered file
pub type GzFileWriter = GzEncoder<BufWriter<File>>;

/// Create (truncate) a gzip-compressed output file
///
/// Call [`finish_gz`] once writing is done; dropping the writer also closes
/// the stream but swallows any error from the final flush.
pub fn create_gz_writer<P: AsRef<Path>>(path: P) -> io::Result<GzFileWriter> {
    let file = File::create(path.as_ref())?;
    Ok(GzEncoder::new(
        BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file),
        Compression::default(),
    ))
}

/// Write the gzip trailer and flush the underlying file
pub fn finish_gz(writer: GzFileWriter) -> io::Result<()> {
    let mut inner = writer.finish()?;
    io::Write::flush(&mut inner)
}

/// Reads BED lines as raw bytes into one reused buffer
///
/// Line terminators (`\n`, `\r\n`) are stripped; an empty slice is a blank
/// line, `None` is end of input.
pub struct ByteLineIterator<R: BufRead> {
    reader: R,
    line: Vec<u8>,
}

impl<R: BufRead> ByteLineIterator<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::with_capacity(256),
        }
    }

    pub fn next_line(&mut self) -> Option<io::Result<&[u8]>> {
        self.line.clear();
        match self.reader.read_until(b'\n', &mut self.line) {
            Ok(0) => None,
            Ok(_) => {
                let len = self
                    .line
                    .iter()
                    .rposition(|&b| b != b'\n' && b != b'\r')
                    .map_or(0, |i| i + 1);
                Some(Ok(&self.line[..len]))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
