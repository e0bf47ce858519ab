use crate::github::{github_client::DEFAULT_API_URL, repository::Repository, tag::Tag};
use anyhow::{Context, Result};
use std::{collections::HashMap, ffi::OsString, path::Path};

/// Action inputs and runner context, read once from the environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub github_ref: String,
    pub github_repository: String,
    pub event_name: String,
    pub api_url: String,
    pub token: Option<String>,
    pub name: Option<String>,
    pub body: Option<String>,
    pub body_path: Option<String>,
    pub files: Vec<String>,
    pub draft: bool,
    pub prerelease: bool,
    pub update_draft_flag: bool,
    pub update_draft_mode: bool,
    pub debug: bool,
}

impl Config {
    pub fn load() -> Config {
        Config::from_env(utf8_vars(std::env::vars_os()))
    }

    pub fn from_env<I, K, V>(vars: I) -> Config
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let env: HashMap<String, String> = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        let value = |key: &str| env.get(key).cloned().unwrap_or_default();
        let non_empty = |key: &str| env.get(key).filter(|value| !value.is_empty()).cloned();
        let flag = |key: &str| env.get(key).map(String::as_str) == Some("true");

        Config {
            github_ref: value("GITHUB_REF"),
            github_repository: value("GITHUB_REPOSITORY"),
            event_name: value("GITHUB_EVENT_NAME"),
            api_url: non_empty("GITHUB_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_owned()),
            token: non_empty("INPUT_GITHUB_TOKEN").or_else(|| non_empty("GITHUB_TOKEN")),
            name: non_empty("INPUT_NAME"),
            body: non_empty("INPUT_BODY"),
            body_path: non_empty("INPUT_BODY_PATH"),
            files: parse_input_files(&value("INPUT_FILES")),
            draft: flag("INPUT_DRAFT"),
            prerelease: flag("INPUT_PRERELEASE"),
            update_draft_flag: flag("INPUT_UPDATE_DRAFT_FLAG"),
            update_draft_mode: flag("INPUT_UPDATE_DRAFT_MODE"),
            debug: env.get("RUNNER_DEBUG").map(String::as_str) == Some("1"),
        }
    }

    pub fn tag(&self) -> Tag {
        Tag::from_ref(&self.github_ref)
    }

    pub fn repository(&self) -> Result<Repository> {
        self.github_repository
            .parse()
            .context("GITHUB_REPOSITORY is not a valid repository")
    }

    pub fn token(&self) -> Result<&str> {
        self.token
            .as_deref()
            .context("A GitHub token is required, set GITHUB_TOKEN or the github_token input")
    }

    /// Explicit release name, falling back to the tag.
    pub fn release_name(&self, tag: &Tag) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| tag.value().to_owned())
    }

    /// Inline body first, then the content of the body file, if any.
    pub fn release_body(&self) -> Result<Option<String>> {
        if let Some(body) = &self.body {
            return Ok(Some(body.to_owned()));
        }

        match &self.body_path {
            Some(path) => {
                let body = std::fs::read_to_string(Path::new(path))
                    .with_context(|| format!("Cannot read the release body file {}", path))?;
                Ok(Some(body))
            }
            None => Ok(None),
        }
    }

    pub fn log_level(&self) -> log::Level {
        if self.debug {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }
}

/// Splits a list of file patterns on newlines and commas, dropping blanks.
pub fn parse_input_files(files: &str) -> Vec<String> {
    files
        .lines()
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|pattern| !pattern.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Drops variables whose name or value is not valid unicode.
fn utf8_vars<I>(vars: I) -> impl Iterator<Item = (String, String)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
}
