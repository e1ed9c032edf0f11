/// Label attributed to messages whose author has no usable display name.
pub const ANONYMOUS_LABEL: &str = "Anonyme";

/// The currently signed-in user, as reported by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl Identity {
    /// Label used to attribute outgoing messages: display name, then contact
    /// email, then the fixed fallback.
    pub fn display_label(&self) -> &str {
        non_empty(self.display_name.as_deref())
            .or_else(|| non_empty(self.email.as_deref()))
            .unwrap_or(ANONYMOUS_LABEL)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(display_name: Option<&str>, email: Option<&str>) -> Identity {
        Identity {
            id: "u-1".to_owned(),
            display_name: display_name.map(str::to_owned),
            email: email.map(str::to_owned),
        }
    }

    #[test]
    fn prefers_display_name_over_email() {
        let me = identity(Some("Camille"), Some("camille@example.com"));

        assert_eq!(me.display_label(), "Camille");
    }

    #[test]
    fn falls_back_to_email_when_name_is_missing() {
        let me = identity(None, Some("camille@example.com"));

        assert_eq!(me.display_label(), "camille@example.com");
    }

    #[test]
    fn falls_back_to_anonymous_when_nothing_is_set() {
        let me = identity(None, None);

        assert_eq!(me.display_label(), ANONYMOUS_LABEL);
    }

    #[test]
    fn blank_name_counts_as_missing() {
        let me = identity(Some("   "), Some("camille@example.com"));

        assert_eq!(me.display_label(), "camille@example.com");
    }
}
