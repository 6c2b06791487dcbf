//! Option lists offered by the relationship forms.

use admin_console_shared::EntityId;

/// A single entry of a multi-select.
///
/// Selections resolve by `label`: two entities sharing a display name are
/// indistinguishable once linked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Id of the entity behind the option, when the option comes from a collection.
    pub value: Option<EntityId>,
    /// The display name that ends up stored in the membership list.
    pub label: String,
}

/// The options a relationship form may choose from.
///
/// An empty list means there is nothing to submit; the front end disables the
/// form rather than treating it as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectOptions {
    pub options: Vec<SelectOption>,
}

impl SelectOptions {
    /// Build options from `(id, label)` pairs.
    pub fn from_entities<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (EntityId, S)>,
        S: Into<String>,
    {
        Self {
            options: entries
                .into_iter()
                .map(|(id, label)| SelectOption {
                    value: Some(id),
                    label: label.into(),
                })
                .collect(),
        }
    }

    /// Build options from bare labels (e.g. current group members).
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: labels
                .into_iter()
                .map(|label| SelectOption {
                    value: None,
                    label: label.into(),
                })
                .collect(),
        }
    }

    /// Whether the form may be submitted.
    pub fn can_submit(&self) -> bool {
        !self.options.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// The option labels, in display order.
    pub fn labels(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.label.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_options_cannot_submit() {
        let options = SelectOptions::default();
        assert!(!options.can_submit());
        assert!(options.is_empty());
    }

    #[test]
    fn test_from_entities_keeps_order() {
        let options = SelectOptions::from_entities([(2, "user2"), (1, "Arun")]);
        assert!(options.can_submit());
        assert_eq!(options.labels(), vec!["user2", "Arun"]);
        assert_eq!(options.options[0].value, Some(2));
    }

    #[test]
    fn test_from_labels_has_no_values() {
        let options = SelectOptions::from_labels(["Arun"]);
        assert_eq!(options.len(), 1);
        assert_eq!(options.options[0].value, None);
    }
}
