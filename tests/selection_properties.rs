use orderblock_architecture::domain::architecture::{ComponentId, Selection, Transition};
use quickcheck_macros::quickcheck;
use strum::{EnumCount, IntoEnumIterator};

fn pick(raw: u8) -> ComponentId {
    ComponentId::iter().nth(raw as usize % ComponentId::COUNT).unwrap()
}

#[quickcheck]
fn last_click_wins(clicks: Vec<u8>) -> bool {
    let mut selection = Selection::new();
    for &raw in &clicks {
        selection.select(pick(raw));
    }
    selection.current() == clicks.last().map(|&raw| pick(raw))
}

#[quickcheck]
fn at_most_one_card_expanded(clicks: Vec<u8>) -> bool {
    let mut selection = Selection::new();
    clicks.iter().all(|&raw| {
        selection.select(pick(raw));
        ComponentId::iter().filter(|id| selection.is_selected(*id)).count() == 1
    })
}

#[quickcheck]
fn never_returns_to_none(first: u8, rest: Vec<u8>) -> bool {
    let mut selection = Selection::new();
    selection.select(pick(first));
    rest.iter().all(|&raw| {
        selection.select(pick(raw));
        selection.current().is_some()
    })
}

#[quickcheck]
fn reselect_is_unchanged(clicks: Vec<u8>) -> bool {
    let mut selection = Selection::new();
    clicks.iter().all(|&raw| {
        let id = pick(raw);
        selection.select(id);
        selection.select(id) == Transition::Unchanged
    })
}
