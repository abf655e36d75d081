use crate::{
    output::Output,
    site::Site,
    util::{checksum, progress_bar, recursively_remove_empty_dirs_of_contents},
};
use anyhow::{anyhow, Context};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use std::{
    fs,
    path::Path,
    sync::atomic::{AtomicUsize, Ordering},
    time::Instant,
};
use wax::Glob;

/// Extended attribute holding the checksum of what was last written.
const HASH_ATTRIBUTE: &str = "coursepagehash";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub written: usize,
    pub reused: usize,
    pub removed: usize,
}

pub fn build(start: Instant, site: &Site, output: &Output) -> anyhow::Result<BuildSummary> {
    let root = Path::new(&site.config.output);
    fs::create_dir_all(root).with_context(|| format!("couldn't create {}", root.display()))?;

    let removed = remove_obsolete(root, output)?;
    recursively_remove_empty_dirs_of_contents(root)
        .with_context(|| format!("couldn't prune {}", root.display()))?;

    let progress = progress_bar("Saving website...", output.len(), start);
    let reused = AtomicUsize::new(0);

    output
        .par_iter()
        .try_for_each(|(public_path, contents)| -> anyhow::Result<()> {
            let path = site.config.subdirectory(public_path);
            let new_hash = checksum(contents);

            // The attribute survives in-place edits, so it only counts if the
            // bytes on disk still hash to it.
            let old_hash = fsquirrel::get(&path, HASH_ATTRIBUTE).ok().flatten();
            let on_disk = fs::read(&path).ok().map(|bytes| checksum(&bytes));
            if on_disk.as_deref() == Some(new_hash.as_str()) {
                if old_hash.as_deref() != Some(new_hash.as_bytes()) {
                    if let Err(e) = fsquirrel::set(&path, HASH_ATTRIBUTE, new_hash.as_bytes()) {
                        tracing::debug!("couldn't tag {}: {e}", path.display());
                    }
                }
                tracing::debug!("reusing {public_path}");
                reused.fetch_add(1, Ordering::Relaxed);
                progress.inc(1);
                return Ok(());
            }

            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("couldn't create {}", dir.display()))?;
            }
            let _ = fsquirrel::remove(&path, HASH_ATTRIBUTE);
            fs::write(&path, contents)
                .with_context(|| format!("couldn't write {}", path.display()))?;
            if let Err(e) = fsquirrel::set(&path, HASH_ATTRIBUTE, new_hash.as_bytes()) {
                tracing::debug!("couldn't tag {}: {e}", path.display());
            }
            tracing::debug!("wrote {public_path}");

            progress.inc(1);
            Ok(())
        })?;

    progress.finish_and_clear();

    let reused = reused.load(Ordering::Relaxed);
    let summary = BuildSummary {
        written: output.len() - reused,
        reused,
        removed,
    };

    tracing::info!(
        "({:.1}s) Saved website to {}, writing {} and reusing {} files, removed {} obsolete files",
        start.elapsed().as_secs_f32(),
        site.config.output,
        summary.written,
        summary.reused,
        summary.removed,
    );

    Ok(summary)
}

fn remove_obsolete(root: &Path, output: &Output) -> anyhow::Result<usize> {
    let mut removals = 0usize;
    let glob = Glob::new("**").map_err(|e| anyhow!("invalid glob: {e}"))?;
    for file in glob.walk(root) {
        let file = file.map_err(|e| anyhow!("couldn't walk {}: {e}", root.display()))?;
        if !file.file_type().is_file() {
            continue;
        }
        let path = format!("/{}", file.matched().complete());
        if !output.contains_key(&path) {
            tracing::debug!("removing obsolete {path}");
            fs::remove_file(file.path())
                .with_context(|| format!("couldn't remove {}", file.path().display()))?;
            removals += 1;
        }
    }
    Ok(removals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn site_in(dir: &Path) -> Site {
        Site::new(SiteConfig {
            output: dir.join("public").to_string_lossy().into_owned(),
            ..SiteConfig::default()
        })
    }

    #[test]
    fn writes_every_file() {
        let dir = tempfile::tempdir().unwrap();
        let site = site_in(dir.path());
        let output = site.output().unwrap();

        let summary = build(Instant::now(), &site, &output).unwrap();
        assert_eq!(summary.removed, 0);
        assert_eq!(summary.written + summary.reused, output.len());

        for (path, contents) in &output {
            assert_eq!(&fs::read(site.config.subdirectory(path)).unwrap(), contents);
        }
    }

    #[test]
    fn removes_obsolete_files() {
        let dir = tempfile::tempdir().unwrap();
        let site = site_in(dir.path());
        let stale = site.config.subdirectory("/old/page.html");
        fs::create_dir_all(stale.parent().unwrap()).unwrap();
        fs::write(&stale, "stale").unwrap();

        let output = site.output().unwrap();
        let summary = build(Instant::now(), &site, &output).unwrap();
        assert_eq!(summary.removed, 1);
        assert!(!stale.exists());
        assert!(!site.config.subdirectory("/old").exists());
    }

    #[test]
    fn rebuild_overwrites_changes() {
        let dir = tempfile::tempdir().unwrap();
        let site = site_in(dir.path());
        let output = site.output().unwrap();
        build(Instant::now(), &site, &output).unwrap();

        let index = site.config.subdirectory("/index.html");
        fs::write(&index, "edited").unwrap();
        build(Instant::now(), &site, &output).unwrap();
        assert_eq!(&fs::read(&index).unwrap(), &output["/index.html"]);
    }

    #[test]
    fn rebuild_repairs_same_length_edit() {
        let dir = tempfile::tempdir().unwrap();
        let site = site_in(dir.path());
        let output = site.output().unwrap();
        build(Instant::now(), &site, &output).unwrap();

        let index = site.config.subdirectory("/index.html");
        let mut edited = fs::read(&index).unwrap();
        edited[0] = b'X';
        fs::write(&index, &edited).unwrap();

        let summary = build(Instant::now(), &site, &output).unwrap();
        assert_eq!(summary.written, 1);
        assert_eq!(summary.reused, output.len() - 1);
        assert_eq!(&fs::read(&index).unwrap(), &output["/index.html"]);
    }
}
