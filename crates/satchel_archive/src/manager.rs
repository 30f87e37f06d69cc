//! File manager operations.

use crate::config::FileManagerConfig;
use crate::error::{ArchiveError, ArchiveResult};
use crate::summary::{ArchiveSummary, SummaryBuilder};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// File manager over one base directory.
///
/// Every operation resolves its file names beneath the configured base path
/// and re-reads the configuration, so one manager can serve many independent
/// operations. Uploads and renders are gated by the extension allow-list;
/// structural operations (copy, move, delete) are not.
#[derive(Debug)]
pub struct FileManager {
    config: FileManagerConfig,
}

impl FileManager {
    /// Creates a manager over the configured base directory, creating the
    /// directory if needed.
    pub fn new(config: FileManagerConfig) -> ArchiveResult<Self> {
        fs::create_dir_all(&config.base_path)?;
        Ok(Self { config })
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &FileManagerConfig {
        &self.config
    }

    /// Resolves a managed name beneath the base path.
    ///
    /// Rejects absolute paths and any `..` component.
    fn resolve(&self, name: &str) -> ArchiveResult<PathBuf> {
        if name.is_empty() {
            return Err(ArchiveError::invalid_path("empty file name"));
        }
        let relative = Path::new(name);
        if relative.is_absolute() {
            return Err(ArchiveError::invalid_path(format!(
                "absolute path not allowed: {name}"
            )));
        }
        for component in relative.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                _ => {
                    return Err(ArchiveError::invalid_path(format!(
                        "path escapes base directory: {name}"
                    )))
                }
            }
        }
        Ok(self.config.base_path.join(relative))
    }

    fn existing(&self, name: &str) -> ArchiveResult<PathBuf> {
        let path = self.resolve(name)?;
        if !path.exists() {
            return Err(ArchiveError::not_found(path));
        }
        Ok(path)
    }

    fn extension_of(path: &Path) -> String {
        path.extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default()
    }

    fn validate_type<'a>(&'a self, path: &Path) -> ArchiveResult<&'a str> {
        let extension = Self::extension_of(path);
        self.config
            .mime_for(&extension)
            .ok_or(ArchiveError::DisallowedType { extension })
    }

    fn validate_size(&self, path: &Path) -> ArchiveResult<u64> {
        let size = fs::metadata(path)?.len();
        if size > self.config.max_file_size {
            return Err(ArchiveError::TooLarge {
                size,
                limit: self.config.max_file_size,
            });
        }
        Ok(size)
    }

    /// Copies `source` into the managed directory.
    ///
    /// The extension must be on the allow-list and the file within the size
    /// limit. `dest_name` defaults to the source file name. Returns the
    /// stored path.
    pub fn upload(&self, source: &Path, dest_name: Option<&str>) -> ArchiveResult<PathBuf> {
        if !source.exists() {
            return Err(ArchiveError::not_found(source));
        }
        self.validate_type(source)?;
        self.validate_size(source)?;

        let name = match dest_name {
            Some(name) => name.to_string(),
            None => source
                .file_name()
                .ok_or_else(|| ArchiveError::invalid_path("source has no file name"))?
                .to_string_lossy()
                .into_owned(),
        };
        let dest = self.resolve(&name)?;
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, &dest)?;
        debug!(source = %source.display(), dest = %dest.display(), "uploaded file");
        Ok(dest)
    }

    /// Uploads `source` under a collision-free name (`stem-{uuid}.ext`).
    pub fn upload_unique(&self, source: &Path) -> ArchiveResult<PathBuf> {
        let stem = source
            .file_stem()
            .ok_or_else(|| ArchiveError::invalid_path("source has no file name"))?
            .to_string_lossy();
        let extension = Self::extension_of(source);
        let unique = if extension.is_empty() {
            format!("{stem}-{}", uuid::Uuid::new_v4())
        } else {
            format!("{stem}-{}.{extension}", uuid::Uuid::new_v4())
        };
        self.upload(source, Some(&unique))
    }

    /// Copies a managed file to a new managed name. Returns bytes copied.
    pub fn copy_file(&self, from: &str, to: &str) -> ArchiveResult<u64> {
        let src = self.existing(from)?;
        let dest = self.resolve(to)?;
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(fs::copy(src, dest)?)
    }

    /// Moves a managed file under a managed directory, keeping its name.
    pub fn move_file(&self, from: &str, to_dir: &str) -> ArchiveResult<PathBuf> {
        let src = self.existing(from)?;
        let file_name = src
            .file_name()
            .ok_or_else(|| ArchiveError::invalid_path("source has no file name"))?
            .to_string_lossy()
            .into_owned();
        let dest_dir = self.resolve(to_dir)?;
        fs::create_dir_all(&dest_dir)?;
        let dest = dest_dir.join(file_name);
        fs::rename(src, &dest)?;
        Ok(dest)
    }

    /// Renames a managed file.
    pub fn rename_file(&self, from: &str, to: &str) -> ArchiveResult<PathBuf> {
        let src = self.existing(from)?;
        let dest = self.resolve(to)?;
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::rename(src, &dest)?;
        Ok(dest)
    }

    /// Deletes a managed file.
    pub fn delete_file(&self, name: &str) -> ArchiveResult<()> {
        let path = self.existing(name)?;
        fs::remove_file(path)?;
        Ok(())
    }

    /// Streams a managed file into `writer` in configured-size chunks.
    ///
    /// Returns the number of bytes written. The file handle is scoped to
    /// this call.
    pub fn fetch(&self, name: &str, writer: &mut dyn Write) -> ArchiveResult<u64> {
        let path = self.existing(name)?;
        let mut file = File::open(path)?;
        let mut buffer = vec![0u8; self.config.chunk_size.max(1)];
        let mut total = 0u64;
        loop {
            let read = file.read(&mut buffer)?;
            if read == 0 {
                break;
            }
            writer.write_all(&buffer[..read])?;
            total += read as u64;
        }
        Ok(total)
    }

    /// Returns a managed file's contents and resolved MIME type.
    ///
    /// Gated by the allow-list, like uploads.
    pub fn render(&self, name: &str) -> ArchiveResult<(Vec<u8>, String)> {
        let path = self.existing(name)?;
        let mime = self.validate_type(&path)?.to_string();
        Ok((fs::read(path)?, mime))
    }

    /// Gzip-compresses a managed file next to itself. Returns the `.gz` path.
    pub fn compress(&self, name: &str) -> ArchiveResult<PathBuf> {
        let src = self.existing(name)?;
        let dest = PathBuf::from(format!("{}.gz", src.display()));

        let mut input = File::open(&src)?;
        let mut encoder = GzEncoder::new(File::create(&dest)?, Compression::default());
        io::copy(&mut input, &mut encoder)?;
        encoder.finish()?;
        debug!(path = %dest.display(), "compressed file");
        Ok(dest)
    }

    /// Reverses [`compress`](Self::compress). The name must end in `.gz`.
    pub fn decompress(&self, name: &str) -> ArchiveResult<PathBuf> {
        let Some(stripped) = name.strip_suffix(".gz") else {
            return Err(ArchiveError::invalid_path(format!(
                "not a .gz file: {name}"
            )));
        };
        let src = self.existing(name)?;
        let dest = self.resolve(stripped)?;

        let mut decoder = GzDecoder::new(File::open(&src)?);
        let mut output = File::create(&dest)?;
        io::copy(&mut decoder, &mut output)?;
        Ok(dest)
    }

    /// Builds a ZIP of the named managed files, stored at `out_name`.
    ///
    /// Every input lands at the archive root under its file name.
    pub fn zip_files(&self, names: &[&str], out_name: &str) -> ArchiveResult<PathBuf> {
        let out = self.resolve(out_name)?;
        let file = File::create(&out)?;
        self.write_zip(names, file)?;
        debug!(path = %out.display(), entries = names.len(), "wrote zip");
        Ok(out)
    }

    /// Builds a ZIP of the named managed files and returns the binary data.
    ///
    /// The archive is staged through a temporary file that is removed when
    /// this call returns.
    pub fn zip_data(&self, names: &[&str]) -> ArchiveResult<Vec<u8>> {
        let staging = tempfile::tempfile()?;
        let mut staging = self.write_zip(names, staging)?;

        staging.seek(SeekFrom::Start(0))?;
        let mut data = Vec::new();
        staging.read_to_end(&mut data)?;
        // Dropping the handle removes the staging file.
        Ok(data)
    }

    fn write_zip<W: Write + Seek>(&self, names: &[&str], writer: W) -> ArchiveResult<W> {
        let mut zip = ZipWriter::new(writer);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for name in names {
            let path = self.existing(name)?;
            let entry_name = path
                .file_name()
                .ok_or_else(|| ArchiveError::invalid_path("input has no file name"))?
                .to_string_lossy()
                .into_owned();
            zip.start_file(entry_name, options)?;
            let mut input = File::open(&path)?;
            io::copy(&mut input, &mut zip)?;
        }

        Ok(zip.finish()?)
    }

    /// Extracts a managed ZIP into a managed directory.
    ///
    /// Entries that would escape the destination (zip-slip) are rejected.
    /// Returns the number of entries written.
    pub fn unzip(&self, name: &str, dest_dir: &str) -> ArchiveResult<usize> {
        let src = self.existing(name)?;
        let dest = self.resolve(dest_dir)?;
        fs::create_dir_all(&dest)?;

        let mut archive = ZipArchive::new(File::open(&src)?)?;
        let mut extracted = 0usize;
        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;
            let Some(relative) = entry.enclosed_name() else {
                return Err(ArchiveError::invalid_path(format!(
                    "zip entry escapes destination: {}",
                    entry.name()
                )));
            };
            let target = dest.join(relative);
            if entry.is_dir() {
                fs::create_dir_all(&target)?;
            } else {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                let mut output = File::create(&target)?;
                io::copy(&mut entry, &mut output)?;
                extracted += 1;
            }
        }
        debug!(path = %src.display(), extracted, "extracted zip");
        Ok(extracted)
    }

    /// Reads a managed archive into an [`ArchiveSummary`].
    ///
    /// ZIP, tar, and gzipped tar are supported; the format is chosen by file
    /// name. `wanted` lists archive paths whose contents should be returned
    /// in memory.
    pub fn read_archive(&self, name: &str, wanted: &[&str]) -> ArchiveResult<ArchiveSummary> {
        let path = self.existing(name)?;
        let lower = name.to_ascii_lowercase();

        if lower.ends_with(".zip") {
            self.read_zip(&path, wanted)
        } else if lower.ends_with(".tar.gz") || lower.ends_with(".tgz") {
            let decoder = GzDecoder::new(File::open(&path)?);
            self.read_tar(decoder, wanted)
        } else if lower.ends_with(".tar") {
            self.read_tar(File::open(&path)?, wanted)
        } else {
            Err(ArchiveError::unsupported_archive(format!(
                "cannot list {name}; expected .zip, .tar, .tar.gz, or .tgz"
            )))
        }
    }

    fn read_zip(&self, path: &Path, wanted: &[&str]) -> ArchiveResult<ArchiveSummary> {
        let mut archive = ZipArchive::new(File::open(path)?)?;
        let mut builder = SummaryBuilder::new();

        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;
            let entry_name = entry.name().to_string();
            if entry.is_dir() {
                builder.add_dir(&entry_name);
            } else {
                let contents = if Self::is_wanted(&entry_name, wanted) {
                    let mut data = Vec::new();
                    entry.read_to_end(&mut data)?;
                    Some(data)
                } else {
                    None
                };
                builder.add_file(&entry_name, contents);
            }
        }
        Ok(builder.finish())
    }

    fn read_tar<R: Read>(&self, reader: R, wanted: &[&str]) -> ArchiveResult<ArchiveSummary> {
        let mut archive = tar::Archive::new(reader);
        let mut builder = SummaryBuilder::new();

        for entry in archive.entries()? {
            let mut entry = entry?;
            let entry_name = entry.path()?.to_string_lossy().into_owned();
            if entry.header().entry_type().is_dir() {
                builder.add_dir(&entry_name);
            } else {
                let contents = if Self::is_wanted(&entry_name, wanted) {
                    let mut data = Vec::new();
                    entry.read_to_end(&mut data)?;
                    Some(data)
                } else {
                    None
                };
                builder.add_file(&entry_name, contents);
            }
        }
        Ok(builder.finish())
    }

    fn is_wanted(entry_name: &str, wanted: &[&str]) -> bool {
        let trimmed = entry_name.trim_matches('/');
        wanted.iter().any(|w| w.trim_matches('/') == trimmed)
    }
}
