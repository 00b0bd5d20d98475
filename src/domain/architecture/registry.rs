use super::entities::ComponentDescriptor;
use super::value_objects::{ComponentId, ComponentRole};
use strum::IntoEnumIterator;

static DETECTOR: ComponentDescriptor = ComponentDescriptor {
    title: "OrderBlock Detector (Main)",
    description: "Core indicator managing the detection pipeline",
    sub_components: Some(&["Market Structure", "Momentum", "Order Block Strategy"]),
    key_features: &[
        "Manages detection workflow",
        "Integrates all components",
        "Handles visualization",
        "Real-time analysis",
    ],
};

static MARKET_STRUCTURE: ComponentDescriptor = ComponentDescriptor {
    title: "Market Structure Analysis",
    description: "Analyzes market structure context",
    sub_components: Some(&["Range Based", "Swing Based", "ATR Based"]),
    key_features: &[
        "Structure classification",
        "Trend identification",
        "Volatility analysis",
        "Pattern recognition",
    ],
};

static MOMENTUM: ComponentDescriptor = ComponentDescriptor {
    title: "Momentum Detection",
    description: "Identifies significant momentum moves",
    sub_components: None,
    key_features: &[
        "Impulse detection",
        "Volume confirmation",
        "Movement validation",
        "Reversal identification",
    ],
};

static STRATEGY: ComponentDescriptor = ComponentDescriptor {
    title: "Order Block Strategies",
    description: "Pluggable detection strategies",
    sub_components: Some(&["Volume-Impulse", "Simple Volume", "Structural"]),
    key_features: &[
        "Strategy interface",
        "Configurable parameters",
        "Scoring system",
        "Quality metrics",
    ],
};

/// Descriptor for `id`. Exhaustive, so a missing entry fails to compile.
pub fn descriptor(id: ComponentId) -> &'static ComponentDescriptor {
    match id {
        ComponentId::Detector => &DETECTOR,
        ComponentId::MarketStructure => &MARKET_STRUCTURE,
        ComponentId::Momentum => &MOMENTUM,
        ComponentId::Strategy => &STRATEGY,
    }
}

/// All descriptors in display order.
pub fn descriptors() -> impl Iterator<Item = (ComponentId, &'static ComponentDescriptor)> {
    ComponentId::iter().map(|id| (id, descriptor(id)))
}

/// Ids with the given role, in display order.
pub fn components_with_role(role: ComponentRole) -> Vec<ComponentId> {
    ComponentId::iter().filter(|id| id.role() == role).collect()
}

/// Card placement: one main card above a row of secondary cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramLayout {
    pub main: ComponentId,
    pub secondary: Vec<ComponentId>,
}

impl DiagramLayout {
    pub fn standard() -> Self {
        Self {
            main: ComponentId::Detector,
            secondary: components_with_role(ComponentRole::Secondary),
        }
    }

    /// Every card, top to bottom then left to right.
    pub fn cards(&self) -> impl Iterator<Item = ComponentId> + '_ {
        std::iter::once(self.main).chain(self.secondary.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_follows_display_order() {
        let ids: Vec<ComponentId> = descriptors().map(|(id, _)| id).collect();
        assert_eq!(
            ids,
            [
                ComponentId::Detector,
                ComponentId::MarketStructure,
                ComponentId::Momentum,
                ComponentId::Strategy
            ]
        );
    }

    #[test]
    fn only_momentum_lacks_sub_components() {
        for (id, d) in descriptors() {
            assert_eq!(d.sub_components.is_none(), id == ComponentId::Momentum, "{id}");
            assert_eq!(d.key_features.len(), 4, "{id}");
        }
    }

    #[test]
    fn standard_layout_has_one_main_three_secondary() {
        let layout = DiagramLayout::standard();
        assert_eq!(layout.main, ComponentId::Detector);
        assert_eq!(
            layout.secondary,
            [ComponentId::MarketStructure, ComponentId::Momentum, ComponentId::Strategy]
        );
        assert_eq!(layout.cards().count(), 4);
    }
}
