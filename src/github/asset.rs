use super::mime::mime_or_default;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// A local file ready to be attached to a release.
#[derive(Debug, Clone)]
pub struct Asset {
    pub name: String,
    pub mime: &'static str,
    pub size: u64,
    pub content: Vec<u8>,
}

impl Asset {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .with_context(|| format!("Cannot get the file name of {}", path.display()))?
            .to_owned();

        let size = tokio::fs::metadata(path)
            .await
            .with_context(|| format!("Cannot read metadata of {}", path.display()))?
            .len();

        let content = tokio::fs::read(path)
            .await
            .with_context(|| format!("Cannot read {}", path.display()))?;

        Ok(Asset {
            name,
            mime: mime_or_default(path),
            size,
            content,
        })
    }
}

/// A release asset as stored by GitHub.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadedAsset {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub browser_download_url: String,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs::File, io::Write};
    use tempdir::TempDir;

    #[tokio::test]
    async fn should_derive_asset_info_from_a_path() -> Result<()> {
        let dir = TempDir::new("asset")?;
        let path = dir.path().join("foo").join("bar.txt");
        std::fs::create_dir_all(path.parent().unwrap())?;
        File::create(&path)?.write_all(b"release me")?;

        let asset = Asset::load(&path).await?;

        assert_eq!(asset.name, "bar.txt");
        assert_eq!(asset.mime, "text/plain");
        assert_eq!(asset.size, 10);
        assert_eq!(String::from_utf8(asset.content)?, "release me");

        dir.close()?;
        Ok(())
    }

    #[tokio::test]
    async fn should_fail_for_missing_file() {
        let result = Asset::load("does/not/exist.txt").await;

        assert!(result.is_err());
    }
}
