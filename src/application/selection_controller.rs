use leptos::*;

use crate::domain::{
    architecture::{ComponentId, ComponentRole, Selection, Transition},
    logging::{LogComponent, LogLevel, get_logger},
};

/// Reactive owner of the diagram's [`Selection`].
///
/// One controller per mounted diagram. It is `Copy`, so every card's click
/// handler can hold it; the click handler is the only writer.
#[derive(Clone, Copy)]
pub struct SelectionController {
    state: RwSignal<Selection>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self { state: create_rw_signal(Selection::new()) }
    }

    /// Current selection (tracked).
    pub fn current(&self) -> Option<ComponentId> {
        self.state.with(|s| s.current())
    }

    /// Whether `id` is the expanded card (tracked).
    pub fn is_selected(&self, id: ComponentId) -> bool {
        self.state.with(|s| s.is_selected(id))
    }

    /// Expand `id`, collapsing whatever was expanded before.
    pub fn select(&self, id: ComponentId) {
        let mut next = self.state.get_untracked();
        match next.select(id) {
            Transition::Changed { from } => {
                self.state.set(next);
                get_logger().log_with_metadata(
                    LogLevel::Debug,
                    LogComponent::Application("Selection"),
                    "card selected",
                    &format!("{} -> {}", from.map_or("none", |f| f.key()), id.key()),
                );
            }
            Transition::Unchanged => {
                crate::log_trace!(LogComponent::Application("Selection"), "{} already selected", id);
            }
        }
    }

    /// CSS classes for the card of `id` under the current selection (tracked).
    pub fn card_class(&self, id: ComponentId) -> String {
        card_class(id, self.current())
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}

/// CSS classes for a card: role background plus emphasis outline when selected.
pub fn card_class(id: ComponentId, selected: Option<ComponentId>) -> String {
    let role = match id.role() {
        ComponentRole::Main => "card--main",
        ComponentRole::Secondary => "card--secondary",
    };
    if selected == Some(id) {
        format!("card component-card {role} card--selected")
    } else {
        format!("card component-card {role}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_card_gets_outline() {
        assert_eq!(
            card_class(ComponentId::Momentum, Some(ComponentId::Momentum)),
            "card component-card card--secondary card--selected"
        );
        assert_eq!(card_class(ComponentId::Detector, None), "card component-card card--main");
    }

    #[test]
    fn unchanged_reselect_does_not_notify() {
        let runtime = create_runtime();
        let controller = SelectionController::new();
        controller.select(ComponentId::Strategy);

        let runs = create_rw_signal(0usize);
        create_effect(move |_| {
            controller.current();
            runs.update_untracked(|n| *n += 1);
        });
        let before = runs.get_untracked();
        controller.select(ComponentId::Strategy);
        assert_eq!(runs.get_untracked(), before);
        assert_eq!(controller.current(), Some(ComponentId::Strategy));
        runtime.dispose();
    }
}
