use super::value_objects::ComponentId;
use serde::Serialize;

/// Domain entity - static description of one architecture component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
    pub title: &'static str,
    pub description: &'static str,
    /// Named implementations, absent for components without variants.
    pub sub_components: Option<&'static [&'static str]>,
    pub key_features: &'static [&'static str],
}

/// Outcome of a [`Selection::select`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Selection moved from `from` (possibly nothing) to a different id.
    Changed { from: Option<ComponentId> },
    /// The id was already selected; nothing changed.
    Unchanged,
}

/// Domain entity - which card, if any, is expanded.
///
/// Starts empty and only ever moves between identifiers: there is no
/// transition back to "nothing selected".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<ComponentId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<ComponentId> {
        self.current
    }

    pub fn is_selected(&self, id: ComponentId) -> bool {
        self.current == Some(id)
    }

    pub fn select(&mut self, id: ComponentId) -> Transition {
        if self.current == Some(id) {
            return Transition::Unchanged;
        }
        let from = self.current.replace(id);
        Transition::Changed { from }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let selection = Selection::new();
        assert_eq!(selection.current(), None);
        assert!(!selection.is_selected(ComponentId::Detector));
    }

    #[test]
    fn select_moves_between_ids() {
        let mut selection = Selection::new();
        assert_eq!(selection.select(ComponentId::Momentum), Transition::Changed { from: None });
        assert_eq!(
            selection.select(ComponentId::Strategy),
            Transition::Changed { from: Some(ComponentId::Momentum) }
        );
        assert_eq!(selection.current(), Some(ComponentId::Strategy));
        assert!(!selection.is_selected(ComponentId::Momentum));
    }

    #[test]
    fn reselect_keeps_selection() {
        let mut selection = Selection::new();
        selection.select(ComponentId::Detector);
        assert_eq!(selection.select(ComponentId::Detector), Transition::Unchanged);
        assert_eq!(selection.current(), Some(ComponentId::Detector));
    }
}
