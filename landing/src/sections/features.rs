//! Pinned feature showcase: the section is several viewports tall and its
//! sticky content crossfades between features as the page scrolls.

use komodo::LandingConfig;
use komodo::scroll::{ShowcaseProgress, ShowcaseUpdate, feature_anchor};
use komodo::showcase::{FEATURES, Feature, highlight_title, is_success_line};
use leptos::{html, prelude::*};

use super::TerminalDots;
use crate::dom::{self, EventListenerGuard};

#[component]
pub fn FeatureShowcase() -> impl IntoView {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let count = FEATURES.len();

    let controller = StoredValue::new(ShowcaseProgress::new(count));
    let (active, set_active) = signal(0_usize);
    let (feature_progress, set_feature_progress) = signal(0.0_f64);

    let section_ref = NodeRef::<html::Section>::new();
    let scroll_guard = StoredValue::new_local(None::<EventListenerGuard>);

    let sync = move || {
        let Some(section) = section_ref.get_untracked() else {
            return;
        };
        let Some(geometry) = dom::section_geometry(&section) else {
            return;
        };
        match controller.try_update_value(|c| c.on_scroll(geometry)) {
            Some(ShowcaseUpdate::ActiveChanged { to, .. }) => set_active.set(to),
            Some(ShowcaseUpdate::Progressed) => {}
            Some(ShowcaseUpdate::Skipped) | None => return,
        }
        set_feature_progress.set(controller.with_value(ShowcaseProgress::feature_progress));
    };

    Effect::new(move |_| {
        if section_ref.get().is_none() {
            return;
        }
        scroll_guard.set_value(EventListenerGuard::window("scroll", true, move |_| sync()));
        sync();
    });

    // Tabs jump to the middle of their feature's scroll band.
    let jump_to = move |index: usize| {
        let Some(section) = section_ref.get_untracked() else {
            return;
        };
        let (Some(geometry), Some(y)) = (dom::section_geometry(&section), dom::scroll_y()) else {
            return;
        };
        dom::scroll_page_to(y + geometry.scroll_delta_to(feature_anchor(index, count)));
    };

    view! {
        <section
            id="features"
            class="showcase"
            node_ref=section_ref
            style:height=config.showcase.section_height(count)
        >
            <div class="showcase-sticky">
                <div class="showcase-header container">
                    <p class="section-eyebrow">"[01] FEATURES"</p>
                    <h2 class="section-title">
                        "How it works: " <span class="accent">"Intent + Hardware"</span>
                    </h2>
                </div>

                <div class="showcase-tabs container">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| {
                            view! {
                                <button
                                    class="showcase-tab"
                                    class:active=move || active.get() == index
                                    on:click=move |_| jump_to(index)
                                >
                                    {feature.tab}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="showcase-progress">
                    <div
                        class="showcase-progress-bar"
                        style:width=move || format!("{:.1}%", feature_progress.get() * 100.0)
                    ></div>
                </div>

                <div class="showcase-grid">
                    <div class="showcase-demo">
                        <div class="demo-terminal">
                            <div class="terminal-header">
                                <TerminalDots />
                                <span class="terminal-title">"komodo"</span>
                            </div>
                            <div class="demo-terminal-body">
                                {FEATURES
                                    .iter()
                                    .enumerate()
                                    .map(|(index, feature)| {
                                        let visible = Signal::derive(move || active.get() == index);
                                        view! { <DemoPanel feature=*feature visible=visible /> }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        {FEATURES
                            .iter()
                            .enumerate()
                            .map(|(index, feature)| {
                                let visible = Signal::derive(move || active.get() == index);
                                view! { <HighlightChips feature=*feature visible=visible /> }
                            })
                            .collect_view()}
                    </div>

                    <div class="showcase-copy">
                        {FEATURES
                            .iter()
                            .enumerate()
                            .map(|(index, feature)| {
                                let visible = Signal::derive(move || active.get() == index);
                                view! { <FeatureCopy feature=*feature visible=visible /> }
                            })
                            .collect_view()}
                        <div class="showcase-dots">
                            {(0..count)
                                .map(|index| {
                                    view! {
                                        <div
                                            class="showcase-dot"
                                            class:active=move || active.get() == index
                                        ></div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn fade(visible: Signal<bool>) -> impl Fn() -> &'static str {
    move || if visible.get() { "opacity: 1;" } else { "opacity: 0; pointer-events: none;" }
}

#[component]
fn DemoPanel(feature: Feature, visible: Signal<bool>) -> impl IntoView {
    view! {
        <div class="demo-panel" data-feature=feature.id style=fade(visible) aria-hidden=move || (!visible.get()).to_string()>
            <div class="terminal-line">
                <span class="terminal-prompt">"~$"</span>
                <span class="terminal-command">{feature.demo.command}</span>
            </div>
            <div class="demo-output">
                {feature
                    .demo
                    .output
                    .iter()
                    .map(|line| view! { <div class="demo-line" class:accent=is_success_line(line)>{*line}</div> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn HighlightChips(feature: Feature, visible: Signal<bool>) -> impl IntoView {
    view! {
        <div class="demo-highlights" style=fade(visible)>
            {feature
                .highlights
                .iter()
                .map(|highlight| {
                    view! {
                        <div class=format!("chip {}", highlight.tone.class())>
                            <div class="chip-label">{highlight.label}</div>
                            <div class="chip-value">{highlight.value}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn FeatureCopy(feature: Feature, visible: Signal<bool>) -> impl IntoView {
    view! {
        <div id=feature.anchor() class="feature-copy" class:active=move || visible.get() style=fade(visible)>
            <div class="feature-badge">{feature.badge}</div>
            <h3 class="feature-title">
                {highlight_title(feature.title)
                    .into_iter()
                    .map(|(word, hit)| view! { <span class:accent=hit>{word}</span> " " })
                    .collect_view()}
            </h3>
            <p class="feature-description">{feature.description}</p>
            <div class="feature-actions">
                <a href="#hero" class="btn btn-primary">"Get Started"</a>
                <a href="#what-is" class="btn btn-secondary">"Learn More"</a>
            </div>
        </div>
    }
}
