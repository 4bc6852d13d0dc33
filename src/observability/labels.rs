use metrics::{IntoLabels, Label, SharedString};

/// Tags attached to every metric a rule emits, e.g. the institution whose
/// consumer units are being edited.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Labels(Vec<Label>);

pub const NO_LABEL: Labels = Labels(vec![]);

impl Labels {
    pub fn new<K, V>(labels: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<SharedString>,
        V: Into<SharedString>,
    {
        Labels(
            labels
                .into_iter()
                .map(|(key, value)| Label::new(key, value))
                .collect(),
        )
    }

    /// A copy of these labels with `key=value` appended
    pub fn with(&self, key: impl Into<SharedString>, value: impl Into<SharedString>) -> Labels {
        let mut tags = Vec::with_capacity(self.0.len() + 1);
        tags.extend(self.0.iter().cloned());
        tags.push(Label::new(key, value));
        Labels(tags)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}

#[cfg(test)]
mod test {
    use crate::observability::labels::{Labels, NO_LABEL};
    use metrics::{IntoLabels, Label};

    #[test]
    fn test_with_keeps_the_original() {
        let institution = Labels::new([("institution", "ufsc")]);

        let with_outcome = institution.with("outcome", "valid");
        assert_eq!(
            with_outcome.into_labels(),
            vec![
                Label::new("institution", "ufsc"),
                Label::new("outcome", "valid")
            ]
        );

        let with_reason = institution.with("reason", "future_date");
        let label_list = with_reason.into_labels();
        assert!(label_list.contains(&Label::new("institution", "ufsc")));
        assert!(!label_list.contains(&Label::new("outcome", "valid")));
        assert!(label_list.contains(&Label::new("reason", "future_date")));
    }

    #[test]
    fn test_owned_values() {
        let unit = format!("unit-{}", 42);
        let labels = Labels::new(vec![("consumer_unit".to_string(), unit)]);
        assert_eq!(
            labels.into_labels(),
            vec![Label::new("consumer_unit", "unit-42")]
        );
    }

    #[test]
    fn test_no_label() {
        assert_eq!(Labels::default(), NO_LABEL);
        assert!(NO_LABEL.into_labels().is_empty());
        assert_eq!(
            NO_LABEL.with("k", "v").into_labels(),
            vec![Label::new("k", "v")]
        );
    }
}
