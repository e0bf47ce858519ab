const TAG_REF_PREFIX: &str = "refs/tags/";

pub fn is_tag(git_ref: &str) -> bool {
    git_ref.starts_with(TAG_REF_PREFIX)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Builds a tag from a fully qualified git ref, `refs/tags/v1.0.0` becomes `v1.0.0`.
    /// Refs without the tag prefix are kept as they are.
    pub fn from_ref(git_ref: &str) -> Self {
        Tag::new(git_ref.strip_prefix(TAG_REF_PREFIX).unwrap_or(git_ref))
    }

    pub fn value(&self) -> &str {
        &self.name
    }

    /// Strip the leading 'v' (or 'V') from the tag name if it exists
    pub fn strip_v_prefix(&self) -> &str {
        self.name
            .strip_prefix(['v', 'V'])
            .unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_detect_tag_refs() {
        assert!(is_tag("refs/tags/foo"));
    }

    #[test]
    fn should_reject_other_kinds_of_refs() {
        assert!(!is_tag("refs/heads/master"));
        assert!(!is_tag(""));
    }

    #[test]
    fn should_create_tag_from_ref() {
        let tag = Tag::from_ref("refs/tags/v1.2.3");

        assert_eq!(tag.value(), "v1.2.3");
    }

    #[test]
    fn should_keep_ref_without_tag_prefix() {
        let tag = Tag::from_ref("v1.2.3");

        assert_eq!(tag.value(), "v1.2.3");
    }

    #[test]
    fn should_strip_v_prefix() {
        let tag = Tag::new("v1.0.0");

        assert_eq!(tag.strip_v_prefix(), "1.0.0");
    }

    #[test]
    fn should_return_the_same_value_when_strip_with_no_v() {
        let tag = Tag::new("1.0.0");

        assert_eq!(tag.strip_v_prefix(), "1.0.0");
    }

    #[test]
    fn should_strip_uppercase_v_prefix() {
        let tag = Tag::new("V2.1");

        assert_eq!(tag.strip_v_prefix(), "2.1");
    }
}
