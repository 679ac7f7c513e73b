//! Where the GTFS files come from
//!
//! A source is a set of named text files. The reading engine only lists the names and
//! opens them one at a time, so a directory, a zip archive and in-memory texts all look the same.
use crate::Error;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::{Path, PathBuf};

/// Logical name of a file: its name, lowercased, without the `.txt` extension
///
/// Returns `None` for files that are not `.txt`
pub fn logical_name(file_name: &str) -> Option<String> {
    let lower = file_name.to_lowercase();
    lower.strip_suffix(".txt").map(|s| s.to_owned())
}

/// A collection of named text files
pub trait GtfsSource {
    /// Logical names of the available files
    fn names(&self) -> Vec<String>;

    /// Opens the file with the given logical name (case insensitive)
    ///
    /// Returns `Ok(None)` if the source has no such file
    fn open(&mut self, name: &str) -> Result<Option<Box<dyn Read + '_>>, Error>;
}

/// Files of a local directory
#[derive(Debug)]
pub struct DirectorySource {
    files: Vec<(String, PathBuf)>,
}

impl DirectorySource {
    /// Lists the `.txt` files of the directory. They are opened only when read
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(path.as_ref())? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if let Some(name) = path
                .file_name()
                .and_then(|f| f.to_str())
                .and_then(logical_name)
            {
                files.push((name, path));
            }
        }
        files.sort();
        Ok(Self { files })
    }
}

impl GtfsSource for DirectorySource {
    fn names(&self) -> Vec<String> {
        self.files.iter().map(|(name, _)| name.clone()).collect()
    }

    fn open(&mut self, name: &str) -> Result<Option<Box<dyn Read + '_>>, Error> {
        let path = match self.files.iter().find(|(n, _)| n.eq_ignore_ascii_case(name)) {
            Some((_, path)) => path,
            None => return Ok(None),
        };
        let file = File::open(path).map_err(|e| Error::NamedFileIO {
            file_name: path.display().to_string(),
            source: Box::new(e),
        })?;
        let reader: Box<dyn Read + '_> = Box::new(file);
        Ok(Some(reader))
    }
}

/// Files of a zip archive
///
/// Files in sub-directories of the archive are found by their file name.
pub struct ZipSource<R: Read + Seek> {
    archive: zip::ZipArchive<R>,
    mapping: HashMap<String, usize>,
    files: Vec<String>,
    sha256: String,
}

impl ZipSource<std::io::BufReader<File>> {
    /// Opens a zip archive from the disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path.as_ref()).map_err(|e| Error::NamedFileIO {
            file_name: path.as_ref().display().to_string(),
            source: Box::new(e),
        })?;
        Self::new(std::io::BufReader::new(file))
    }
}

impl<R: Read + Seek> ZipSource<R> {
    /// Reads the index of the archive and computes its fingerprint
    pub fn new(mut reader: R) -> Result<Self, Error> {
        let mut hasher = Sha256::new();
        std::io::copy(&mut reader, &mut hasher)?;
        let sha256 = format!("{:x}", hasher.finalize());
        reader.rewind()?;

        let mut archive = zip::ZipArchive::new(reader)?;
        let mut mapping = HashMap::new();
        let mut files = Vec::new();
        for i in 0..archive.len() {
            let archive_file = archive.by_index(i)?;
            let entry_name = archive_file.name().to_owned();
            files.push(entry_name.clone());
            if archive_file.is_dir() || entry_name.starts_with("__MACOSX") {
                continue;
            }
            let logical = Path::new(&entry_name)
                .file_name()
                .and_then(|f| f.to_str())
                .and_then(logical_name);
            if let Some(logical) = logical {
                mapping.entry(logical).or_insert(i);
            }
        }
        Ok(Self {
            archive,
            mapping,
            files,
            sha256,
        })
    }

    /// Hex encoded sha256 of the whole archive
    pub fn sha256(&self) -> &str {
        &self.sha256
    }

    /// Every entry of the archive, including the ones that are not GTFS files
    pub fn files(&self) -> &[String] {
        &self.files
    }
}

impl<R: Read + Seek> GtfsSource for ZipSource<R> {
    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.mapping.keys().cloned().collect();
        names.sort();
        names
    }

    fn open(&mut self, name: &str) -> Result<Option<Box<dyn Read + '_>>, Error> {
        let index = match self.mapping.get(&name.to_lowercase()) {
            Some(i) => *i,
            None => return Ok(None),
        };
        let file = self
            .archive
            .by_index(index)
            .map_err(|e| Error::NamedFileIO {
                file_name: name.to_owned(),
                source: Box::new(e),
            })?;
        let reader: Box<dyn Read + '_> = Box::new(file);
        Ok(Some(reader))
    }
}

/// Files held in memory, mostly useful for tests
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    files: Vec<(String, Vec<u8>)>,
}

impl MemorySource {
    /// Creates an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file, `name` being either `stops` or `stops.txt`
    pub fn add<N: AsRef<str>, C: Into<Vec<u8>>>(&mut self, name: N, content: C) {
        let name = name.as_ref();
        let logical = logical_name(name).unwrap_or_else(|| name.to_lowercase());
        self.files.retain(|(n, _)| n != &logical);
        self.files.push((logical, content.into()));
    }

    /// Adds a file, can be chained
    pub fn with<N: AsRef<str>, C: Into<Vec<u8>>>(mut self, name: N, content: C) -> Self {
        self.add(name, content);
        self
    }
}

impl GtfsSource for MemorySource {
    fn names(&self) -> Vec<String> {
        self.files.iter().map(|(name, _)| name.clone()).collect()
    }

    fn open(&mut self, name: &str) -> Result<Option<Box<dyn Read + '_>>, Error> {
        Ok(self
            .files
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, content)| {
                let reader: Box<dyn Read + '_> = Box::new(Cursor::new(content.as_slice()));
                reader
            }))
    }
}
