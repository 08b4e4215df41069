//! File uploads
//!
//! An `Uploader` checks an incoming file against its limits (size, allowed
//! extensions, existing files), moves it into the upload directory and can
//! write a recompressed image copy. The image codec sits behind
//! `ImageCompressor`; `CopyCompressor` accepts any non-empty file and writes
//! the bytes unchanged.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const BYTES_PER_MB: u64 = 1024 * 1024;
pub const DEFAULT_QUALITY: u8 = 60;
pub const COMPRESSED_DIR: &str = "compressed";
/// Message reported for a stored file
pub const UPLOAD_OK: &str = "File Uploaded successfully";

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("File Too Large.")]
    TooLarge { size: u64, limit: u64 },
    #[error("Unsupported File Format Provided")]
    UnsupportedFormat { extension: String },
    #[error("File Already Exists")]
    AlreadyExists { path: PathBuf },
    #[error("Invalid File Provided")]
    InvalidFile,
    #[error("Sorry, there was an error uploading the file: {0}")]
    Io(#[from] io::Error),
}

impl UploadError {
    /// True when the file was turned away before anything was written.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

/// A file waiting to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingFile {
    /// Name the file was submitted under
    pub name: String,
    /// Where the file sits until it is moved
    pub temp_path: PathBuf,
    pub size: u64,
}

impl IncomingFile {
    pub fn new(name: impl Into<String>, temp_path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            name: name.into(),
            temp_path: temp_path.into(),
            size,
        }
    }

    /// Describe a file on disk, named after its last path component.
    pub fn from_path(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let size = fs::metadata(&path)?.len();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self { name, temp_path: path, size })
    }

    /// Lowercased extension of the submitted name, empty when there is none.
    #[must_use]
    pub fn extension(&self) -> String {
        Path::new(&self.name)
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default()
    }
}

pub trait ImageCompressor {
    /// Whether `path` holds something this compressor can store.
    fn is_valid(&self, path: &Path) -> bool;

    /// Write a recompressed copy of `source` to `destination`. The two may
    /// be the same path.
    fn compress(&self, source: &Path, destination: &Path, quality: u8) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CopyCompressor;

impl ImageCompressor for CopyCompressor {
    fn is_valid(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok_and(|m| m.is_file() && m.len() > 0)
    }

    fn compress(&self, source: &Path, destination: &Path, _quality: u8) -> io::Result<()> {
        if source != destination {
            fs::copy(source, destination)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Uploader<C: ImageCompressor = CopyCompressor> {
    directory: PathBuf,
    compressed_directory: PathBuf,
    file_name: String,
    /// Bytes, 0 for unlimited
    max_size: u64,
    formats: Vec<String>,
    replace: bool,
    compress: bool,
    quality: u8,
    keep_original: bool,
    compressor: C,
}

impl Default for Uploader<CopyCompressor> {
    fn default() -> Self {
        Self::with_compressor(CopyCompressor)
    }
}

impl Uploader<CopyCompressor> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: ImageCompressor> Uploader<C> {
    pub fn with_compressor(compressor: C) -> Self {
        let directory = PathBuf::from(".");
        Self {
            compressed_directory: directory.join(COMPRESSED_DIR),
            directory,
            file_name: String::new(),
            max_size: 0,
            formats: Vec::new(),
            replace: false,
            compress: false,
            quality: DEFAULT_QUALITY,
            keep_original: true,
            compressor,
        }
    }

    /// Target directory. Blank means the working directory. Also resets the
    /// compressed directory to `<directory>/compressed`.
    pub fn set_directory(&mut self, directory: impl AsRef<Path>) -> &mut Self {
        let directory = directory.as_ref();
        self.directory = if directory.as_os_str().to_string_lossy().trim().is_empty() {
            PathBuf::from(".")
        } else {
            directory.to_path_buf()
        };
        self.compressed_directory = self.directory.join(COMPRESSED_DIR);
        self
    }

    /// Blank means `<directory>/compressed`.
    pub fn set_compressed_directory(&mut self, directory: impl AsRef<Path>) -> &mut Self {
        let directory = directory.as_ref();
        self.compressed_directory = if directory.as_os_str().to_string_lossy().trim().is_empty() {
            self.directory.join(COMPRESSED_DIR)
        } else {
            directory.to_path_buf()
        };
        self
    }

    /// Name to store the file under. Blank uses the submitted name.
    pub fn set_file_name(&mut self, file_name: impl Into<String>) -> &mut Self {
        self.file_name = file_name.into();
        self
    }

    /// Size limit in megabytes, 0 for unlimited.
    pub fn set_max_size(&mut self, megabytes: u64) -> &mut Self {
        self.max_size = megabytes.saturating_mul(BYTES_PER_MB);
        self
    }

    /// Accepted extensions, without the dot. Empty accepts everything.
    pub fn set_file_formats<I, S>(&mut self, formats: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.formats = formats
            .into_iter()
            .map(|f| f.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|f| !f.is_empty())
            .collect();
        self
    }

    /// Replace an existing file of the same name instead of refusing.
    pub fn set_replace_file(&mut self, replace: bool) -> &mut Self {
        self.replace = replace;
        self
    }

    /// Enable recompression. A quality outside 1..=99 keeps the current
    /// one. With `keep_original` the compressed copy goes to the compressed
    /// directory; otherwise it overwrites the stored file.
    pub fn compress_image(&mut self, enabled: bool, quality: u8, keep_original: bool) -> &mut Self {
        self.compress = enabled;
        if (1..100).contains(&quality) {
            self.quality = quality;
        }
        self.keep_original = keep_original;
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn compressed_directory(&self) -> &Path {
        &self.compressed_directory
    }

    pub const fn quality(&self) -> u8 {
        self.quality
    }

    /// Where the stored file lives.
    pub fn file_link(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    /// Where the compressed image lives, `None` when compression is off.
    pub fn compressed_image_link(&self) -> Option<PathBuf> {
        if !self.compress {
            return None;
        }
        if self.keep_original {
            Some(self.compressed_directory.join(&self.file_name))
        } else {
            Some(self.file_link())
        }
    }

    /// Validate `file` and move it into the upload directory.
    ///
    /// Checks run in order: size, extension, existing file, content. A
    /// rejected file is left where it was.
    pub fn upload(&mut self, file: &IncomingFile) -> Result<PathBuf, UploadError> {
        if self.max_size > 0 && file.size > self.max_size {
            debug!(size = file.size, limit = self.max_size, "upload too large");
            return Err(UploadError::TooLarge { size: file.size, limit: self.max_size });
        }

        if self.file_name.trim().is_empty() {
            self.file_name.clone_from(&file.name);
        }
        // Only the last component, so a name cannot leave the directory
        self.file_name = Path::new(&self.file_name)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or(UploadError::InvalidFile)?;

        let extension = file.extension();
        if !self.formats.is_empty() && !self.formats.contains(&extension) {
            debug!(extension = %extension, "upload format not accepted");
            return Err(UploadError::UnsupportedFormat { extension });
        }

        let target = self.file_link();
        if target.exists() {
            if self.replace {
                fs::remove_file(&target)?;
            } else {
                return Err(UploadError::AlreadyExists { path: target });
            }
        }

        if !self.compressor.is_valid(&file.temp_path) {
            return Err(UploadError::InvalidFile);
        }

        fs::create_dir_all(&self.directory)?;
        move_file(&file.temp_path, &target)?;

        if self.compress {
            let destination = if self.keep_original {
                fs::create_dir_all(&self.compressed_directory)?;
                self.compressed_directory.join(&self.file_name)
            } else {
                target.clone()
            };
            self.compressor.compress(&target, &destination, self.quality)?;
        }

        info!(path = %target.display(), "file uploaded");
        Ok(target)
    }
}

// rename fails across filesystems; fall back to copy + remove
fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    if fs::rename(from, to).is_ok() {
        return Ok(());
    }
    fs::copy(from, to)?;
    fs::remove_file(from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn incoming(dir: &Path, name: &str, contents: &[u8]) -> IncomingFile {
        let path = dir.join(format!("tmp_{name}"));
        fs::write(&path, contents).unwrap();
        IncomingFile::new(name, path, contents.len() as u64)
    }

    fn uploader(dir: &Path) -> Uploader {
        let mut up = Uploader::new();
        up.set_directory(dir.join("files"));
        up
    }

    #[test]
    fn test_upload_moves_file() {
        let tmp = tempfile::tempdir().unwrap();
        let file = incoming(tmp.path(), "Photo.JPG", b"jpeg bytes");

        let mut up = uploader(tmp.path());
        let stored = up.upload(&file).unwrap();

        assert_eq!(stored, tmp.path().join("files").join("Photo.JPG"));
        assert_eq!(up.file_name(), "Photo.JPG");
        assert_eq!(up.file_link(), stored);
        assert_eq!(fs::read(&stored).unwrap(), b"jpeg bytes");
        assert!(!file.temp_path.exists());
        assert_eq!(up.compressed_image_link(), None);
    }

    #[test]
    fn test_configured_name_wins() {
        let tmp = tempfile::tempdir().unwrap();
        let file = incoming(tmp.path(), "a.png", b"png");

        let mut up = uploader(tmp.path());
        up.set_file_name("avatar_7.png");
        let stored = up.upload(&file).unwrap();
        assert!(stored.ends_with("avatar_7.png"));
    }

    #[test]
    fn test_name_cannot_leave_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let file = incoming(tmp.path(), "x.txt", b"x");

        let mut up = uploader(tmp.path());
        up.set_file_name("../../escape.txt");
        let stored = up.upload(&file).unwrap();
        assert_eq!(stored, tmp.path().join("files").join("escape.txt"));
    }

    #[test]
    fn test_size_limit() {
        let tmp = tempfile::tempdir().unwrap();
        let big = IncomingFile::new("big.bin", tmp.path().join("nope"), 2 * BYTES_PER_MB + 1);

        let mut up = uploader(tmp.path());
        up.set_max_size(2);
        let err = up.upload(&big).unwrap_err();
        assert_eq!(err.to_string(), "File Too Large.");
        assert!(err.is_rejection());

        // 0 is unlimited
        let file = incoming(tmp.path(), "big.bin", b"0123");
        let mut up = uploader(tmp.path());
        up.set_max_size(0);
        assert!(up.upload(&IncomingFile { size: u64::MAX, ..file }).is_ok());
    }

    #[test]
    fn test_format_filter_is_case_insensitive() {
        let tmp = tempfile::tempdir().unwrap();
        let mut up = uploader(tmp.path());
        up.set_file_formats([".PNG", "jpg"]);

        let err = up.upload(&incoming(tmp.path(), "doc.pdf", b"pdf")).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported File Format Provided");
        assert!(matches!(err, UploadError::UnsupportedFormat { ref extension } if extension == "pdf"));

        let mut up = uploader(tmp.path());
        up.set_file_formats(["png"]);
        assert!(up.upload(&incoming(tmp.path(), "shot.PnG", b"png")).is_ok());
    }

    #[test]
    fn test_existing_file_rejected_or_replaced() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("files")).unwrap();
        fs::write(tmp.path().join("files").join("same.txt"), b"old").unwrap();

        let file = incoming(tmp.path(), "same.txt", b"new");
        let mut up = uploader(tmp.path());
        let err = up.upload(&file).unwrap_err();
        assert_eq!(err.to_string(), "File Already Exists");
        assert!(file.temp_path.exists());

        let mut up = uploader(tmp.path());
        up.set_replace_file(true);
        let stored = up.upload(&file).unwrap();
        assert_eq!(fs::read(stored).unwrap(), b"new");
    }

    #[test]
    fn test_empty_file_is_invalid() {
        let tmp = tempfile::tempdir().unwrap();
        let mut up = uploader(tmp.path());
        let err = up.upload(&incoming(tmp.path(), "empty.png", b"")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid File Provided");
        assert!(!tmp.path().join("files").join("empty.png").exists());
    }

    #[test]
    fn test_directory_defaults() {
        let mut up = Uploader::new();
        assert_eq!(up.directory(), Path::new("."));
        assert_eq!(up.compressed_directory(), Path::new("./compressed"));

        up.set_directory("uploads");
        assert_eq!(up.compressed_directory(), Path::new("uploads/compressed"));
        up.set_compressed_directory("thumbs");
        assert_eq!(up.compressed_directory(), Path::new("thumbs"));
        up.set_compressed_directory(" ");
        assert_eq!(up.compressed_directory(), Path::new("uploads/compressed"));
        up.set_directory("");
        assert_eq!(up.directory(), Path::new("."));
    }

    #[derive(Default)]
    struct RecordingCompressor {
        calls: RefCell<Vec<(PathBuf, PathBuf, u8)>>,
    }

    impl ImageCompressor for RecordingCompressor {
        fn is_valid(&self, path: &Path) -> bool {
            path.exists()
        }

        fn compress(&self, source: &Path, destination: &Path, quality: u8) -> io::Result<()> {
            self.calls
                .borrow_mut()
                .push((source.to_path_buf(), destination.to_path_buf(), quality));
            CopyCompressor.compress(source, destination, quality)
        }
    }

    #[test]
    fn test_compression_keeps_original() {
        let tmp = tempfile::tempdir().unwrap();
        let file = incoming(tmp.path(), "pic.jpg", b"raw");

        let mut up = Uploader::with_compressor(RecordingCompressor::default());
        up.set_directory(tmp.path().join("files"));
        up.compress_image(true, 150, true);
        assert_eq!(up.quality(), DEFAULT_QUALITY);

        let stored = up.upload(&file).unwrap();
        let compressed = tmp.path().join("files").join(COMPRESSED_DIR).join("pic.jpg");
        assert_eq!(up.compressed_image_link(), Some(compressed.clone()));
        assert!(compressed.exists());
        assert_eq!(
            up.compressor.calls.borrow().as_slice(),
            [(stored, compressed, DEFAULT_QUALITY)]
        );
    }

    #[test]
    fn test_compression_in_place() {
        let tmp = tempfile::tempdir().unwrap();
        let file = incoming(tmp.path(), "pic.jpg", b"raw");

        let mut up = Uploader::with_compressor(RecordingCompressor::default());
        up.set_directory(tmp.path().join("files"));
        up.compress_image(true, 30, false);

        let stored = up.upload(&file).unwrap();
        assert_eq!(up.compressed_image_link(), Some(stored.clone()));
        assert!(!tmp.path().join("files").join(COMPRESSED_DIR).exists());
        assert_eq!(up.compressor.calls.borrow().as_slice(), [(stored.clone(), stored, 30)]);
    }

    #[test]
    fn test_incoming_from_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("Report.CSV");
        fs::write(&path, b"a,b\n").unwrap();

        let file = IncomingFile::from_path(&path).unwrap();
        assert_eq!(file.name, "Report.CSV");
        assert_eq!(file.size, 4);
        assert_eq!(file.extension(), "csv");
        assert!(IncomingFile::from_path(tmp.path().join("missing")).is_err());
    }
}
