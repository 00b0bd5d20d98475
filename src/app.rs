use leptos::*;

use crate::{
    application::SelectionController,
    domain::{
        architecture::{ComponentDescriptor, ComponentId, DiagramLayout, Icon, descriptor},
        logging::LogComponent,
    },
};

const STYLES: &str = r#"
.architecture {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    padding: 24px;
    max-width: 72rem;
    margin: 0 auto;
    color: #111827;
}

.architecture-title {
    font-size: 1.5rem;
    font-weight: 700;
    text-align: center;
    margin-bottom: 24px;
}

.main-row {
    display: grid;
    grid-template-columns: 1fr;
    gap: 24px;
    margin-bottom: 24px;
}

.connector-wrap {
    position: relative;
}

.connector {
    position: absolute;
    left: 50%;
    transform: translateX(-50%);
    width: 1px;
    height: 2rem;
    background: #d1d5db;
}

.secondary-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 24px;
}

@media (min-width: 768px) {
    .secondary-grid {
        grid-template-columns: repeat(3, minmax(0, 1fr));
    }
}

.card {
    border-radius: 8px;
    border: 1px solid #e5e7eb;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
}

.component-card {
    cursor: pointer;
    transition: all 150ms ease;
}

.card--main {
    background: #eff6ff;
}

.card--secondary {
    background: #ffffff;
}

.card--selected {
    box-shadow: 0 0 0 2px #3b82f6;
}

.card-header {
    padding: 16px;
    border-bottom: 1px solid #e5e7eb;
}

.card-title {
    font-size: 1.125rem;
    font-weight: 600;
    margin: 0;
}

.card-title-row {
    display: flex;
    align-items: center;
    gap: 8px;
}

.card-content {
    padding: 16px;
}

.card-description {
    font-size: 0.875rem;
    color: #4b5563;
    margin: 0 0 16px;
}

.section-label {
    font-size: 0.875rem;
    font-weight: 600;
    margin: 0 0 8px;
}

.sub-components {
    margin-bottom: 16px;
}

.key-features {
    margin-top: 16px;
    padding-top: 16px;
    border-top: 1px solid #e5e7eb;
}

.bullet-list {
    list-style: none;
    padding: 0;
    margin: 0;
    font-size: 0.875rem;
}

.bullet-row {
    display: flex;
    align-items: center;
    gap: 8px;
    margin-top: 4px;
}
"#;

/// Clickable bordered surface.
#[component]
pub fn Card(
    #[prop(into)] class: Signal<String>,
    #[prop(into)] on_click: Callback<ev::MouseEvent>,
    #[prop(optional)] data_component: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=move || class.get()
            data-component=data_component
            on:click=move |ev| on_click.call(ev)
        >
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(children: Children) -> impl IntoView {
    view! { <div class="card-header">{children()}</div> }
}

#[component]
pub fn CardTitle(children: Children) -> impl IntoView {
    view! { <h3 class="card-title">{children()}</h3> }
}

#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! { <div class="card-content">{children()}</div> }
}

/// Inline stroke icon.
#[component]
pub fn IconGlyph(icon: Icon, #[prop(default = 20)] size: u32) -> impl IntoView {
    view! {
        <svg
            class=format!("icon icon-{}", icon.as_ref())
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon.paths().iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}

#[component]
fn SubComponentList(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="sub-components">
            <p class="section-label">"Implementations:"</p>
            <ul class="bullet-list">
                {items
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="bullet-row">
                                <IconGlyph icon=Icon::Circle size=16/>
                                {*item}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn KeyFeatureList(items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="key-features">
            <p class="section-label">"Key Features:"</p>
            <ul class="bullet-list">
                {items
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="bullet-row">
                                <IconGlyph icon=Icon::ChevronRight size=16/>
                                {*item}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// One architecture card. Key features render only while this card is selected.
#[component]
fn ComponentCard(id: ComponentId, controller: SelectionController) -> impl IntoView {
    let data: &'static ComponentDescriptor = descriptor(id);
    let class = Signal::derive(move || controller.card_class(id));

    view! {
        <Card
            class=class
            on_click=move |_: ev::MouseEvent| controller.select(id)
            data_component=id.key()
        >
            <CardHeader>
                <CardTitle>
                    <div class="card-title-row">
                        <IconGlyph icon=id.icon()/>
                        {data.title}
                    </div>
                </CardTitle>
            </CardHeader>
            <CardContent>
                <p class="card-description">{data.description}</p>
                {data.sub_components.map(|items| view! { <SubComponentList items=items/> })}
                <Show when=move || controller.is_selected(id)>
                    <KeyFeatureList items=data.key_features/>
                </Show>
            </CardContent>
        </Card>
    }
}

/// 🧭 Architecture diagram: main detector card, connector, three secondary cards.
#[component]
pub fn ArchitectureVisualization() -> impl IntoView {
    let controller = SelectionController::new();
    let layout = DiagramLayout::standard();

    crate::log_info!(
        LogComponent::Presentation("Architecture"),
        "diagram mounted with {} cards",
        layout.cards().count()
    );
    on_cleanup(|| {
        crate::log_debug!(LogComponent::Presentation("Architecture"), "diagram unmounted");
    });

    let main = layout.main;
    let secondary = layout.secondary;

    view! {
        <div class="architecture">
            <h2 class="architecture-title">"OrderBlock Detector Architecture"</h2>

            <div class="main-row">
                <ComponentCard id=main controller=controller/>
            </div>

            <div class="connector-wrap">
                <div class="connector"></div>
            </div>

            <div class="secondary-grid">
                {secondary
                    .into_iter()
                    .map(|id| view! { <ComponentCard id=id controller=controller/> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// 🦀 Root component: stylesheet plus the diagram.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>{STYLES}</style>
        <ArchitectureVisualization/>
    }
}
