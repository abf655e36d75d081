use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

use base64::Engine;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;

pub fn recursively_remove_empty_dirs_of_contents<P: AsRef<Path>>(path: P) -> io::Result<()> {
    fn recursively_remove_empty_dirs<P: AsRef<Path>>(path: P) -> io::Result<bool> {
        let mut keep = false;
        for entry in fs::read_dir(&path)? {
            let entry = entry?;
            let path = entry.path();

            if entry.file_type()?.is_dir() {
                keep |= recursively_remove_empty_dirs(path)?;
            } else {
                keep = true;
            }
        }
        if !keep {
            fs::remove_dir(&path)?;
        }
        Ok(keep)
    }

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let path = entry.path();

        if entry.file_type()?.is_dir() {
            recursively_remove_empty_dirs(path)?;
        }
    }
    Ok(())
}

// TODO: wait for `slice_concat_ext` stabilization.
pub fn join<T: Clone>(slice: &[T], sep: &T) -> Vec<T> {
    let mut iter = slice.iter();
    let first = match iter.next() {
        Some(first) => first,
        None => return vec![],
    };
    let size = slice.len() * 2 - 1;
    let mut result = Vec::with_capacity(size);
    result.extend_from_slice(std::slice::from_ref(first));

    for v in iter {
        result.push(sep.clone());
        result.extend_from_slice(std::slice::from_ref(v))
    }
    result
}

pub fn checksum(b: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD_NO_PAD.encode(md5::compute(b).0)
}

pub fn progress_bar(name: &str, count: usize, start: Instant) -> ProgressBar {
    let style = ProgressStyle::default_bar()
        .template("{msg} {wide_bar} {pos}/{len} {eta}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    ProgressBar::new(count as u64)
        .with_message(name.to_owned())
        .with_style(style)
        .with_elapsed(start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_interleaves() {
        assert_eq!(join(&[1, 2, 3], &0), [1, 0, 2, 0, 3]);
        assert_eq!(join(&[7], &0), [7]);
        assert!(join::<i32>(&[], &0).is_empty());
    }

    #[test]
    fn checksum_is_stable() {
        assert_eq!(checksum(b"abc"), checksum(b"abc"));
        assert_ne!(checksum(b"abc"), checksum(b"abd"));
        assert!(!checksum(b"").ends_with('='));
    }

    #[test]
    fn prunes_empty_dirs() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::create_dir_all(dir.path().join("c")).unwrap();
        fs::write(dir.path().join("c/file.txt"), "x").unwrap();
        recursively_remove_empty_dirs_of_contents(dir.path()).unwrap();
        assert!(!dir.path().join("a").exists());
        assert!(dir.path().join("c/file.txt").exists());
        assert!(dir.path().exists());
    }
}
