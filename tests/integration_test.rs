use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use backup_picker::{Error, FileItem, FileItemCollection, SelectionOptions};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

fn write_archive(path: &Path, entries: &[(&str, &[u8])]) {
    let mut zip = ZipWriter::new(File::create(path).unwrap());
    let options = SimpleFileOptions::default();
    for (name, data) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(data).unwrap();
    }
    zip.finish().unwrap();
}

fn names(items: &[FileItem]) -> Vec<String> {
    items.iter().map(|item| item.name().to_string()).collect()
}

#[test]
fn directory_scan_with_include_filter() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("x.log"), vec![b'x'; 50]).unwrap();
    fs::write(temp.path().join("y.txt"), vec![b'y'; 20]).unwrap();

    let options = SelectionOptions::new(temp.path()).extension_filters(".txt");
    let mut collection = FileItemCollection::new();
    let items: Vec<FileItem> = collection
        .add_range(&options)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(names(&items), vec!["y.txt"]);
    assert_eq!(collection.total_size(), 20);
    assert_eq!(items[0].path(), temp.path().join("y.txt"));
}

#[test]
fn total_size_tracks_every_change() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("photos").join("2024");
    fs::create_dir_all(&nested).unwrap();
    fs::write(temp.path().join("a.txt"), vec![0; 11]).unwrap();
    fs::write(nested.join("b.jpg"), vec![0; 13]).unwrap();
    fs::write(nested.join("c.jpg"), vec![0; 17]).unwrap();

    let options = SelectionOptions::new(temp.path()).include_subfolders(true);
    let mut collection = FileItemCollection::new();
    for item in collection.add_range(&options).unwrap() {
        item.unwrap();
    }
    let sum: u64 = collection.iter().map(FileItem::size).sum();
    assert_eq!(collection.total_size(), sum);
    assert_eq!(collection.len(), 3);

    let removed = collection.remove_at(0);
    assert_eq!(collection.total_size(), sum - removed.size());

    collection.clear();
    assert!(collection.is_empty());
    assert_eq!(collection.total_size(), 0);
}

#[test]
fn archive_scan_respects_folder_structure_and_limits() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("backup.zip");
    write_archive(
        &archive,
        &[
            ("a.txt", b"alpha"),
            ("folder/b.txt", b"beta"),
            ("c.TXT", b"gamma!"),
            ("d.md", b"delta"),
        ],
    );

    let mut collection = FileItemCollection::new();
    let flat = SelectionOptions::new(&archive).archive_root(true);
    let items: Vec<FileItem> = collection
        .add_range(&flat)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(names(&items), vec!["a.txt", "c.TXT", "d.md"]);

    collection.clear();
    let limited = SelectionOptions::new(&archive)
        .archive_root(true)
        .include_subfolders(true)
        .extension_filters(".txt")
        .file_size_limit(5)
        .file_count_limit(2);
    let items: Vec<FileItem> = collection
        .add_range(&limited)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(names(&items), vec!["a.txt", "b.txt"]);
    assert_eq!(collection.total_size(), 9);
    assert_eq!(items[1].read_content().unwrap(), b"beta");
}

#[test]
fn misconfigured_roots_fail_before_any_item() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("plain.txt");
    fs::write(&file, b"not a directory").unwrap();

    let mut collection = FileItemCollection::new();
    assert!(matches!(
        collection.add_range(&SelectionOptions::new(&file)),
        Err(Error::Io(_))
    ));
    assert!(matches!(
        collection.add_range(&SelectionOptions::new(&file).archive_root(true)),
        Err(Error::Archive(_))
    ));
    assert!(matches!(
        collection.add_range(&SelectionOptions::new(temp.path()).archive_root(true)),
        Err(Error::InvalidRoot { .. })
    ));
    assert!(collection.is_empty());
}
