use crate::{
    config::Config,
    github::tag::{is_tag, Tag},
};

const PUSH_EVENT: &str = "push";

/// Runs only on pushes of version tags such as `v1`, `1.2` or `v1.2.3.4`.
pub fn is_target_event(config: &Config) -> bool {
    config.event_name == PUSH_EVENT
        && is_tag(&config.github_ref)
        && is_semantic_versioning_tag(&config.tag())
}

/// Dot separated numbers after an optional `v`; every part must be non-empty.
pub fn is_semantic_versioning_tag(tag: &Tag) -> bool {
    tag.strip_v_prefix()
        .split('.')
        .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(event_name: &str, github_ref: &str) -> Config {
        Config::from_env([("GITHUB_EVENT_NAME", event_name), ("GITHUB_REF", github_ref)])
    }

    #[test]
    fn should_accept_push_of_version_tag() {
        assert!(is_target_event(&config("push", "refs/tags/v1.2.3")));
        assert!(is_target_event(&config("push", "refs/tags/1.2.3")));
    }

    #[test]
    fn should_accept_version_tags_with_any_number_of_parts() {
        assert!(is_target_event(&config("push", "refs/tags/v1")));
        assert!(is_target_event(&config("push", "refs/tags/v1.0")));
        assert!(is_target_event(&config("push", "refs/tags/1.2.3.4")));
        assert!(is_target_event(&config("push", "refs/tags/V1.2")));
    }

    #[test]
    fn should_reject_malformed_version_tags() {
        assert!(!is_semantic_versioning_tag(&Tag::new("v")));
        assert!(!is_semantic_versioning_tag(&Tag::new("")));
        assert!(!is_semantic_versioning_tag(&Tag::new("1.")));
        assert!(!is_semantic_versioning_tag(&Tag::new("1..2")));
        assert!(!is_semantic_versioning_tag(&Tag::new("v1.2.3-rc.1")));
        assert!(!is_semantic_versioning_tag(&Tag::new("vv1")));
    }

    #[test]
    fn should_reject_push_of_branch() {
        assert!(!is_target_event(&config("push", "refs/heads/master")));
    }

    #[test]
    fn should_reject_non_version_tag() {
        assert!(!is_target_event(&config("push", "refs/tags/latest")));
    }

    #[test]
    fn should_reject_other_events() {
        assert!(!is_target_event(&config("pull_request", "refs/tags/v1.2.3")));
        assert!(!is_target_event(&config("release", "refs/tags/v1.2.3")));
    }
}
