use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Expands glob patterns into the regular files they match, in pattern order.
pub fn paths(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let glob = glob::glob(pattern)
            .with_context(|| format!("Cannot read glob pattern {}", pattern))?;

        let mut matched = 0;
        for entry in glob {
            let path = entry.context("Cannot get path")?;

            let metadata = std::fs::symlink_metadata(&path)
                .with_context(|| format!("Cannot read metadata of {}", path.display()))?;

            if metadata.is_file() {
                log::debug!("matched file: {}", path.display());
                files.push(path);
                matched += 1;
            }
        }

        if matched == 0 {
            log::warn!("pattern {} does not match any file", pattern);
        }
    }

    if !patterns.is_empty() && files.is_empty() {
        bail!("None of the file patterns {:?} match a file", patterns);
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempdir::TempDir;

    fn fixtures() -> Result<TempDir> {
        let dir = TempDir::new("files")?;
        fs::create_dir_all(dir.path().join("data/foo"))?;
        File::create(dir.path().join("data/body.txt"))?;
        File::create(dir.path().join("data/foo/bar.txt"))?;
        Ok(dir)
    }

    #[test]
    fn should_resolve_files_given_a_set_of_paths() -> Result<()> {
        let dir = fixtures()?;
        let pattern = format!("{}/data/**/*", dir.path().display());

        let files = paths(&[pattern])?;

        assert_eq!(
            files,
            vec![
                dir.path().join("data/body.txt"),
                dir.path().join("data/foo/bar.txt"),
            ]
        );

        dir.close()?;
        Ok(())
    }

    #[test]
    fn should_keep_pattern_order() -> Result<()> {
        let dir = fixtures()?;
        let patterns = vec![
            format!("{}/data/foo/*.txt", dir.path().display()),
            format!("{}/data/*.txt", dir.path().display()),
        ];

        let files = paths(&patterns)?;

        assert_eq!(
            files,
            vec![
                dir.path().join("data/foo/bar.txt"),
                dir.path().join("data/body.txt"),
            ]
        );

        dir.close()?;
        Ok(())
    }

    #[test]
    fn should_return_nothing_without_patterns() -> Result<()> {
        assert!(paths(&[])?.is_empty());
        Ok(())
    }

    #[test]
    fn should_fail_when_no_pattern_matches() -> Result<()> {
        let dir = fixtures()?;
        let pattern = format!("{}/data/*.zip", dir.path().display());

        assert!(paths(&[pattern]).is_err());

        dir.close()?;
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn should_skip_symlinks() -> Result<()> {
        let dir = fixtures()?;
        std::os::unix::fs::symlink(
            dir.path().join("data/body.txt"),
            dir.path().join("data/link.txt"),
        )?;
        let pattern = format!("{}/data/*.txt", dir.path().display());

        let files = paths(&[pattern])?;

        assert_eq!(files, vec![dir.path().join("data/body.txt")]);

        dir.close()?;
        Ok(())
    }

    #[test]
    fn should_fail_on_invalid_pattern() {
        assert!(paths(&["[".to_owned()]).is_err());
    }
}
