//! JSON persistence of serialisable state, such as a [LegSnapshot](crate::leg::LegSnapshot).

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{from_reader, to_writer_pretty};

/// Reads a JSON-encoded type from a given file `path`.
pub fn read_json<D: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<D> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    from_reader(BufReader::new(file)).with_context(|| format!("cannot decode {}", path.display()))
}

/// JSON-encodes the `value` in pretty-printed form and writes it to a given `path`.
pub fn write_json(path: impl AsRef<Path>, value: &impl Serialize) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    to_writer_pretty(BufWriter::new(file), value)
        .with_context(|| format!("cannot encode {}", path.display()))
}

pub trait ReadJsonFile<D> {
    fn read_json_file(path: impl AsRef<Path>) -> anyhow::Result<D>;
}

impl<D: DeserializeOwned> ReadJsonFile<D> for D {
    fn read_json_file(path: impl AsRef<Path>) -> anyhow::Result<D> {
        read_json(path)
    }
}

pub trait WriteJsonFile<S: Serialize> {
    fn write_json_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()>;
}

impl<S: Serialize> WriteJsonFile<S> for S {
    fn write_json_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        write_json(path, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::Marker;
    use std::env;
    use std::fs;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        env::temp_dir().join(format!("caravan-{}-{name}", std::process::id()))
    }

    #[test]
    fn write_then_read() {
        let path = scratch_path("markers.json");
        let markers = vec![Marker::new('r'), Marker::new('b')];
        markers.write_json_file(&path).unwrap();
        let encoded = fs::read_to_string(&path).unwrap();
        assert!(encoded.contains("\"r\""));
        let decoded = Vec::<Marker>::read_json_file(&path).unwrap();
        assert_eq!(markers, decoded);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn read_missing_file() {
        let path = scratch_path("missing.json");
        let err = read_json::<Vec<Marker>>(&path).unwrap_err();
        assert!(err.to_string().starts_with("cannot open"), "{err}");
    }

    #[test]
    fn read_malformed_file() {
        let path = scratch_path("malformed.json");
        fs::write(&path, "[\"rb\"]").unwrap();
        let err = read_json::<Vec<Marker>>(&path).unwrap_err();
        assert!(err.to_string().starts_with("cannot decode"), "{err}");
        fs::remove_file(&path).unwrap();
    }
}
