// crates/countrysearch-core/src/loader/common_io.rs
use crate::error::{Result, SearchError};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

pub fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the path
/// ends in `.gz`. Returns a generic Reader so the caller doesn't care about
/// the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        SearchError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    wrap_stream(BufReader::new(file), is_gzip_path(path))
}

pub(crate) fn wrap_stream<R: Read + 'static>(reader: R, gzip: bool) -> Result<Box<dyn Read>> {
    if !gzip {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(SearchError::Io(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "gzip datasets require the `compact` feature",
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dataset;
    use std::io::Cursor;

    #[test]
    fn detects_gz_extension() {
        assert!(is_gzip_path(Path::new("data/countries.json.gz")));
        assert!(is_gzip_path(Path::new("COUNTRIES.JSON.GZ")));
        assert!(!is_gzip_path(Path::new("countries.json")));
    }

    #[test]
    fn plain_stream_passes_through() {
        let json = br#"{"countries":[{"country":"Chile","capital":"Santiago"}]}"#.to_vec();
        let reader = wrap_stream(Cursor::new(json), false).unwrap();
        let ds = Dataset::from_reader(reader).unwrap();
        assert_eq!(ds.countries()[0].capital(), Some("Santiago"));
    }

    #[cfg(feature = "compact")]
    #[test]
    fn gzip_stream_is_decoded() {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;

        let json = br#"{"countries":[{"country":"Norway","capital":"Oslo"}]}"#;
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(json).unwrap();
        let gz = enc.finish().unwrap();

        let reader = wrap_stream(Cursor::new(gz), true).unwrap();
        let ds = Dataset::from_reader(reader).unwrap();
        assert_eq!(ds.countries()[0].name(), "Norway");
    }
}
