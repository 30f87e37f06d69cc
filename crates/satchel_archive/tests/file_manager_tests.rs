//! End-to-end tests for the file manager and archive reading.

use satchel_archive::{ArchiveError, FileManager, FileManagerConfig};
use std::fs::{self, File};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn manager_at(base: &Path) -> FileManager {
    FileManager::new(FileManagerConfig::new(base)).unwrap()
}

fn write_source(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn upload_copies_into_base() {
    let outside = tempdir().unwrap();
    let base = tempdir().unwrap();
    let manager = manager_at(base.path());

    let source = write_source(outside.path(), "note.txt", b"hello");
    let stored = manager.upload(&source, None).unwrap();

    assert_eq!(stored, base.path().join("note.txt"));
    assert_eq!(fs::read(stored).unwrap(), b"hello");
    // The source is copied, not moved.
    assert!(source.exists());
}

#[test]
fn upload_rejects_disallowed_extension() {
    let outside = tempdir().unwrap();
    let base = tempdir().unwrap();
    let manager = manager_at(base.path());

    let source = write_source(outside.path(), "tool.exe", b"MZ");
    let result = manager.upload(&source, None);
    assert!(matches!(result, Err(ArchiveError::DisallowedType { .. })));
}

#[test]
fn upload_rejects_oversized_file() {
    let outside = tempdir().unwrap();
    let base = tempdir().unwrap();
    let manager =
        FileManager::new(FileManagerConfig::new(base.path()).max_file_size(4)).unwrap();

    let source = write_source(outside.path(), "big.txt", b"more than four bytes");
    let result = manager.upload(&source, None);
    assert!(matches!(result, Err(ArchiveError::TooLarge { .. })));
}

#[test]
fn upload_unique_avoids_collisions() {
    let outside = tempdir().unwrap();
    let base = tempdir().unwrap();
    let manager = manager_at(base.path());

    let source = write_source(outside.path(), "report.pdf", b"%PDF");
    let first = manager.upload_unique(&source).unwrap();
    let second = manager.upload_unique(&source).unwrap();

    assert_ne!(first, second);
    assert!(first
        .file_name()
        .unwrap()
        .to_string_lossy()
        .starts_with("report-"));
    assert_eq!(first.extension().unwrap(), "pdf");
}

#[test]
fn copy_move_rename_delete_cycle() {
    let base = tempdir().unwrap();
    let manager = manager_at(base.path());
    write_source(base.path(), "a.txt", b"data");

    manager.copy_file("a.txt", "b.txt").unwrap();
    assert!(base.path().join("b.txt").exists());

    let moved = manager.move_file("b.txt", "archive").unwrap();
    assert_eq!(moved, base.path().join("archive").join("b.txt"));
    assert!(!base.path().join("b.txt").exists());

    let renamed = manager.rename_file("archive/b.txt", "archive/c.txt").unwrap();
    assert!(renamed.exists());

    manager.delete_file("archive/c.txt").unwrap();
    assert!(!renamed.exists());
}

#[test]
fn delete_missing_file_fails() {
    let base = tempdir().unwrap();
    let manager = manager_at(base.path());
    let result = manager.delete_file("ghost.txt");
    assert!(matches!(result, Err(ArchiveError::NotFound { .. })));
}

#[test]
fn path_traversal_is_rejected() {
    let base = tempdir().unwrap();
    let manager = manager_at(base.path());
    write_source(base.path(), "a.txt", b"data");

    let result = manager.delete_file("../outside.txt");
    assert!(matches!(result, Err(ArchiveError::InvalidPath { .. })));

    let result = manager.copy_file("a.txt", "/etc/passwd");
    assert!(matches!(result, Err(ArchiveError::InvalidPath { .. })));

    let result = manager.copy_file("a.txt", "../escape.txt");
    assert!(matches!(result, Err(ArchiveError::InvalidPath { .. })));
}

#[test]
fn fetch_streams_whole_file_in_chunks() {
    let base = tempdir().unwrap();
    let manager =
        FileManager::new(FileManagerConfig::new(base.path()).chunk_size(3)).unwrap();

    let payload = b"stream me in small pieces".to_vec();
    write_source(base.path(), "stream.txt", &payload);

    let mut out = Vec::new();
    let written = manager.fetch("stream.txt", &mut out).unwrap();
    assert_eq!(written, payload.len() as u64);
    assert_eq!(out, payload);
}

#[test]
fn render_returns_contents_and_mime() {
    let base = tempdir().unwrap();
    let manager = manager_at(base.path());
    write_source(base.path(), "page.html", b"<html></html>");

    let (contents, mime) = manager.render("page.html").unwrap();
    assert_eq!(contents, b"<html></html>");
    assert_eq!(mime, "text/html");
}

#[test]
fn compress_and_decompress_round_trip() {
    let base = tempdir().unwrap();
    let manager = manager_at(base.path());
    let payload = b"compress this payload, please".to_vec();
    write_source(base.path(), "data.txt", &payload);

    let gz = manager.compress("data.txt").unwrap();
    assert!(gz.to_string_lossy().ends_with("data.txt.gz"));
    assert!(gz.exists());

    fs::remove_file(base.path().join("data.txt")).unwrap();
    let restored = manager.decompress("data.txt.gz").unwrap();
    assert_eq!(fs::read(restored).unwrap(), payload);
}

#[test]
fn decompress_requires_gz_suffix() {
    let base = tempdir().unwrap();
    let manager = manager_at(base.path());
    let result = manager.decompress("plain.txt");
    assert!(matches!(result, Err(ArchiveError::InvalidPath { .. })));
}

#[test]
fn zip_data_contains_inputs_at_archive_root() {
    let base = tempdir().unwrap();
    let manager = manager_at(base.path());
    write_source(base.path(), "a.txt", b"alpha");
    write_source(base.path(), "b.txt", b"beta");

    let data = manager.zip_data(&["a.txt", "b.txt"]).unwrap();
    assert!(!data.is_empty());

    let mut archive = zip::ZipArchive::new(Cursor::new(data)).unwrap();
    let names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    assert_eq!(names, vec!["a.txt", "b.txt"]);

    use std::io::Read;
    let mut contents = String::new();
    archive
        .by_name("a.txt")
        .unwrap()
        .read_to_string(&mut contents)
        .unwrap();
    assert_eq!(contents, "alpha");
}

#[test]
fn zip_files_then_unzip_round_trip() {
    let base = tempdir().unwrap();
    let manager = manager_at(base.path());
    write_source(base.path(), "one.txt", b"1");
    write_source(base.path(), "two.txt", b"2");

    let out = manager.zip_files(&["one.txt", "two.txt"], "bundle.zip").unwrap();
    assert!(out.exists());

    let extracted = manager.unzip("bundle.zip", "restored").unwrap();
    assert_eq!(extracted, 2);
    assert_eq!(fs::read(base.path().join("restored/one.txt")).unwrap(), b"1");
    assert_eq!(fs::read(base.path().join("restored/two.txt")).unwrap(), b"2");
}

#[test]
fn zip_missing_input_fails() {
    let base = tempdir().unwrap();
    let manager = manager_at(base.path());
    let result = manager.zip_data(&["nope.txt"]);
    assert!(matches!(result, Err(ArchiveError::NotFound { .. })));
}

#[test]
fn read_archive_summarizes_zip() {
    let base = tempdir().unwrap();
    let manager = manager_at(base.path());

    // Build a zip with a nested entry by hand.
    let file = File::create(base.path().join("tree.zip")).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    use std::io::Write;
    writer.start_file("root.txt", options).unwrap();
    writer.write_all(b"root").unwrap();
    writer.start_file("docs/inner.txt", options).unwrap();
    writer.write_all(b"inner").unwrap();
    writer.finish().unwrap();

    let summary = manager.read_archive("tree.zip", &["docs/inner.txt"]).unwrap();
    assert_eq!(summary.file_count, 2);
    assert_eq!(summary.child_file_names, vec!["root.txt"]);
    assert_eq!(summary.dir_names, vec!["docs"]);
    assert_eq!(summary.child_dir_names, vec!["docs"]);
    assert!(summary.contains_file);
    assert_eq!(summary.file_contents["docs/inner.txt"], b"inner");
    assert!(!summary.file_contents.contains_key("root.txt"));
}

#[test]
fn read_archive_summarizes_tar_gz() {
    let base = tempdir().unwrap();
    let manager = manager_at(base.path());

    // Build a small .tar.gz fixture.
    let file = File::create(base.path().join("tree.tar.gz")).unwrap();
    let encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
    let mut builder = tar::Builder::new(encoder);

    let mut header = tar::Header::new_gnu();
    header.set_size(5);
    header.set_mode(0o644);
    header.set_cksum();
    builder
        .append_data(&mut header, "notes/today.txt", &b"hello"[..])
        .unwrap();

    let mut header = tar::Header::new_gnu();
    header.set_size(3);
    header.set_mode(0o644);
    header.set_cksum();
    builder.append_data(&mut header, "top.txt", &b"top"[..]).unwrap();

    builder.into_inner().unwrap().finish().unwrap();

    let summary = manager
        .read_archive("tree.tar.gz", &["notes/today.txt"])
        .unwrap();
    assert_eq!(summary.file_count, 2);
    assert_eq!(summary.dir_names, vec!["notes"]);
    assert_eq!(summary.child_file_names, vec!["top.txt"]);
    assert_eq!(summary.file_contents["notes/today.txt"], b"hello");
}

#[test]
fn read_archive_rejects_unknown_format() {
    let base = tempdir().unwrap();
    let manager = manager_at(base.path());
    write_source(base.path(), "data.bin", b"??");

    let result = manager.read_archive("data.bin", &[]);
    assert!(matches!(
        result,
        Err(ArchiveError::UnsupportedArchive { .. })
    ));
}
