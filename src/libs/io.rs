use anyhow::Context;
use std::io::{BufRead, BufReader, BufWriter, Write};

/// Opens a file, `stdin`, or a gzipped file for reading
///
/// ```
/// use std::io::BufRead;
/// let reader = igvtracks::reader("tests/igv/trio.json").unwrap();
/// assert!(reader.lines().count() > 10);
///
/// assert!(igvtracks::reader("tests/igv/missing.json").is_err());
/// ```
pub fn reader(input: &str) -> anyhow::Result<Box<dyn BufRead>> {
    let reader: Box<dyn BufRead> = if input == "stdin" {
        Box::new(BufReader::new(std::io::stdin()))
    } else {
        let path = std::path::Path::new(input);
        let file = std::fs::File::open(path)
            .with_context(|| format!("could not open {}", path.display()))?;

        if path.extension() == Some(std::ffi::OsStr::new("gz")) {
            Box::new(BufReader::new(flate2::read::MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        }
    };

    Ok(reader)
}

pub fn writer(output: &str) -> anyhow::Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = if output == "stdout" {
        Box::new(BufWriter::new(std::io::stdout()))
    } else {
        let file = std::fs::File::create(output)
            .with_context(|| format!("could not create {}", output))?;
        Box::new(BufWriter::new(file))
    };

    Ok(writer)
}

/// Reads a JSON document from a file, `stdin`, or a gzipped file
pub fn read_json<T: serde::de::DeserializeOwned>(input: &str) -> anyhow::Result<T> {
    let reader = reader(input)?;
    let value = serde_json::from_reader(reader).with_context(|| format!("invalid JSON in {}", input))?;
    Ok(value)
}
