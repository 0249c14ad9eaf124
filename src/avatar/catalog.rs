//! Directory scanning for pre-built avatar assets.
//!
//! Layout is `{root}/{category}/{file}`. Listings are deduplicated and put in
//! natural order so `2.png` sorts before `10.png`; pool selection indexes into
//! that order, so it must stay stable between scans.

use std::{
    cmp::Ordering,
    collections::BTreeMap,
    fs, io,
    path::Path,
};

pub const PNG_EXTENSIONS: &[&str] = &[".png"];
pub const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg"];

enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

fn chunks(s: &str) -> Vec<Chunk<'_>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_digits = None;

    for (i, c) in s.char_indices() {
        let is_digit = c.is_ascii_digit();
        match in_digits {
            Some(prev) if prev != is_digit => {
                out.push(chunk(&s[start..i], prev));
                start = i;
            }
            _ => {}
        }
        in_digits = Some(is_digit);
    }

    if let Some(prev) = in_digits {
        out.push(chunk(&s[start..], prev));
    }

    out
}

fn chunk(s: &str, digits: bool) -> Chunk<'_> {
    if digits {
        Chunk::Digits(s)
    } else {
        Chunk::Text(s)
    }
}

fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Numeric-aware, case-insensitive ordering with a byte-order tiebreak.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let left = chunks(a);
    let right = chunks(b);

    for (l, r) in left.iter().zip(right.iter()) {
        let ord = match (l, r) {
            (Chunk::Digits(l), Chunk::Digits(r)) => compare_digits(l, r),
            (Chunk::Digits(_), Chunk::Text(_)) => Ordering::Less,
            (Chunk::Text(_), Chunk::Digits(_)) => Ordering::Greater,
            (Chunk::Text(l), Chunk::Text(r)) => l.to_lowercase().cmp(&r.to_lowercase()),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }

    left.len().cmp(&right.len()).then_with(|| a.cmp(b))
}

fn has_extension(name: &str, extensions: &[&str]) -> bool {
    let lower = name.to_lowercase();
    extensions.iter().any(|ext| lower.ends_with(ext))
}

/// Files in `dir` whose name ends with one of `extensions`.
pub fn scan_category(dir: &Path, extensions: &[&str]) -> io::Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(String::from) else {
            tracing::warn!(path = ?entry.path(), "skipping non UTF-8 file name");
            continue;
        };
        if has_extension(&name, extensions) {
            files.push(name);
        }
    }

    files.sort_by(|a, b| natural_cmp(a, b));
    files.dedup();

    Ok(files)
}

/// Every visible category directory under `root` with its file listing.
/// Empty categories are kept.
pub fn scan_catalog(root: &Path, extensions: &[&str]) -> io::Result<BTreeMap<String, Vec<String>>> {
    let mut categories = BTreeMap::new();

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(String::from) else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }

        let files = scan_category(&entry.path(), extensions)?;
        categories.insert(name, files);
    }

    Ok(categories)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut names: Vec<&str>) -> Vec<&str> {
        names.sort_by(|a, b| natural_cmp(a, b));
        names
    }

    #[test]
    fn test_natural_order() {
        assert_eq!(
            sorted(vec!["10.png", "2.png", "1.png", "20.png", "3.png"]),
            ["1.png", "2.png", "3.png", "10.png", "20.png"]
        );
    }

    #[test]
    fn test_natural_order_mixed_names() {
        assert_eq!(
            sorted(vec!["b2.png", "B10.png", "a.png", "b1.png", "007.png"]),
            ["007.png", "a.png", "b1.png", "b2.png", "B10.png"]
        );
    }

    #[test]
    fn test_order_is_total() {
        assert_eq!(natural_cmp("A.png", "a.png"), "A.png".cmp("a.png"));
        assert_eq!(natural_cmp("01.png", "1.png"), "01.png".cmp("1.png"));
        assert_eq!(natural_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_scan_category_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["10.png", "2.PNG", "1.png", "notes.txt", "3.jpg"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let png = scan_category(dir.path(), PNG_EXTENSIONS).unwrap();
        assert_eq!(png, ["1.png", "2.PNG", "10.png"]);

        let images = scan_category(dir.path(), IMAGE_EXTENSIONS).unwrap();
        assert_eq!(images, ["1.png", "2.PNG", "3.jpg", "10.png"]);
    }

    #[test]
    fn test_scan_catalog_skips_hidden_and_files() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("voxel")).unwrap();
        fs::create_dir(root.path().join("pixel")).unwrap();
        fs::create_dir(root.path().join(".cache")).unwrap();
        fs::write(root.path().join("voxel/1.png"), b"").unwrap();
        fs::write(root.path().join(".cache/1.png"), b"").unwrap();
        fs::write(root.path().join("avatars.json"), b"{}").unwrap();

        let catalog = scan_catalog(root.path(), PNG_EXTENSIONS).unwrap();

        assert_eq!(catalog.keys().collect::<Vec<_>>(), ["pixel", "voxel"]);
        assert_eq!(catalog["voxel"], ["1.png"]);
        assert!(catalog["pixel"].is_empty());
    }

    #[test]
    fn test_scan_missing_directory_fails() {
        let root = tempfile::tempdir().unwrap();

        assert!(scan_category(&root.path().join("missing"), PNG_EXTENSIONS).is_err());
    }
}
