//! Detail modal state machine: `Closed` and `Open`.

/// Modal visibility plus the content it currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        title: String,
        body: String,
    },
}

impl ModalState {
    /// Opens the modal with the given content; re-opening replaces content.
    pub fn open(&mut self, title: impl Into<String>, body: impl Into<String>) {
        *self = Self::Open {
            title: title.into(),
            body: body.into(),
        };
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::ModalState;

    #[test]
    fn reopen_replaces_content() {
        let mut modal = ModalState::default();
        modal.open("a", "1");
        modal.open("b", "2");
        assert_eq!(
            modal,
            ModalState::Open {
                title: "b".to_string(),
                body: "2".to_string()
            }
        );
        modal.close();
        assert!(!modal.is_open());
    }
}
