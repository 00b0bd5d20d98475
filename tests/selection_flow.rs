use leptos::*;
use orderblock_architecture::application::{SelectionController, card_class};
use orderblock_architecture::domain::architecture::{ComponentId, DiagramLayout};
use strum::IntoEnumIterator;

fn expanded_cards(controller: &SelectionController) -> Vec<ComponentId> {
    DiagramLayout::standard().cards().filter(|id| controller.is_selected(*id)).collect()
}

#[test]
fn nothing_expanded_on_mount() {
    let runtime = create_runtime();
    let controller = SelectionController::new();
    assert_eq!(controller.current(), None);
    assert!(expanded_cards(&controller).is_empty());
    runtime.dispose();
}

#[test]
fn selecting_each_card_expands_only_that_card() {
    let runtime = create_runtime();
    let controller = SelectionController::new();
    for id in ComponentId::iter() {
        controller.select(id);
        assert_eq!(controller.current(), Some(id));
        assert_eq!(expanded_cards(&controller), [id]);
    }
    runtime.dispose();
}

#[test]
fn clicking_selected_card_again_keeps_it_open() {
    let runtime = create_runtime();
    let controller = SelectionController::new();
    controller.select(ComponentId::MarketStructure);
    controller.select(ComponentId::MarketStructure);
    assert_eq!(controller.current(), Some(ComponentId::MarketStructure));
    runtime.dispose();
}

#[test]
fn momentum_scenario_hides_other_features() {
    let runtime = create_runtime();
    let controller = SelectionController::new();
    controller.select(ComponentId::Detector);
    controller.select(ComponentId::Momentum);
    assert_eq!(expanded_cards(&controller), [ComponentId::Momentum]);
    assert!(!controller.is_selected(ComponentId::Detector));
    runtime.dispose();
}

#[test]
fn only_detector_has_main_styling_for_every_selection() {
    let selections = std::iter::once(None).chain(ComponentId::iter().map(Some));
    for selected in selections {
        let main: Vec<ComponentId> = ComponentId::iter()
            .filter(|id| card_class(*id, selected).contains("card--main"))
            .collect();
        assert_eq!(main, [ComponentId::Detector], "selected={selected:?}");

        let outlined: Vec<ComponentId> = ComponentId::iter()
            .filter(|id| card_class(*id, selected).contains("card--selected"))
            .collect();
        assert_eq!(outlined, selected.into_iter().collect::<Vec<_>>());
    }
}

#[test]
fn controller_class_tracks_selection() {
    let runtime = create_runtime();
    let controller = SelectionController::new();
    let strategy_class = Signal::derive(move || controller.card_class(ComponentId::Strategy));
    assert!(!strategy_class.get().contains("card--selected"));
    controller.select(ComponentId::Strategy);
    assert!(strategy_class.get().contains("card--selected"));
    controller.select(ComponentId::Momentum);
    assert!(!strategy_class.get().contains("card--selected"));
    runtime.dispose();
}
