/// Labels attached to a merge request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LabelSet {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// String form of the whole collection, e.g. `["bump::minor", "backend"]`
    pub fn representation(&self) -> String {
        format!("{:?}", self.labels)
    }

    /// Case-sensitive substring test against [`LabelSet::representation`].
    ///
    /// A token can match inside a longer label: `no-bump::major-needed`
    /// mentions `bump::major`.
    pub fn mentions(&self, token: &str) -> bool {
        !token.is_empty() && self.representation().contains(token)
    }
}

impl<S: Into<String>> FromIterator<S> for LabelSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        LabelSet::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_representation() {
        let labels = LabelSet::new(["bump::minor", "backend"]);
        assert_eq!(labels.representation(), r#"["bump::minor", "backend"]"#);
    }

    #[test]
    fn test_mentions_exact_label() {
        let labels = LabelSet::new(["bump::major"]);
        assert!(labels.mentions("bump::major"));
        assert!(!labels.mentions("bump::minor"));
    }

    #[test]
    fn test_mentions_is_case_sensitive() {
        let labels = LabelSet::new(["Bump::Major"]);
        assert!(!labels.mentions("bump::major"));
    }

    #[test]
    fn test_mentions_matches_inside_longer_label() {
        let labels = LabelSet::new(["no-bump::major-needed"]);
        assert!(labels.mentions("bump::major"));
    }

    #[test]
    fn test_empty_set() {
        let labels = LabelSet::default();
        assert!(!labels.mentions("bump::major"));
        assert_eq!(labels.representation(), "[]");
    }

    #[test]
    fn test_collect() {
        let labels: LabelSet = vec!["a".to_string(), "b".to_string()].into_iter().collect();
        assert_eq!(labels, LabelSet::new(["a", "b"]));
    }
}
