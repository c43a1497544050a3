use std::rc::Rc;

use yew::prelude::*;
use web_sys::{window, Element};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Sections below the hero that fade in as they scroll into view.
pub const REVEAL_SECTIONS: usize = 5;
/// A section is revealed once its top edge is above this fraction of the viewport.
const REVEAL_THRESHOLD: f64 = 0.85;
/// How far the hero copy drifts down while fading out, in px.
const HERO_PARALLAX_PX: f64 = 120.0;

pub struct Feature {
    pub icon: &'static str,
    pub accent: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const WHY_FEATURES: [Feature; 3] = [
    Feature {
        icon: "🎙",
        accent: "pink",
        title: "Natural Conversations",
        description: "Use voice or chat to instantly query your data.",
    },
    Feature {
        icon: "📊",
        accent: "blue",
        title: "Automatic Metrics",
        description: "Omnituple intuitively understands and defines your business KPIs.",
    },
    Feature {
        icon: "🧠",
        accent: "orange",
        title: "Immediate Insights",
        description: "Answers include clear visuals and comprehensive, context-aware explanations.",
    },
];

const RESEARCH_FEATURES: [Feature; 3] = [
    Feature {
        icon: "🔍",
        accent: "pink",
        title: "Pattern Recognition",
        description: "Identifies patterns, correlations, and anomalies in your internal data and aligns them with external context.",
    },
    Feature {
        icon: "📖",
        accent: "blue",
        title: "Traceable Sources",
        description: "References data sources clearly, offering fully traceable citations and narratives.",
    },
    Feature {
        icon: "📈",
        accent: "orange",
        title: "Actionable Insights",
        description: "Provides clear, actionable recommendations based on a comprehensive understanding of your data landscape.",
    },
];

const AI_FEATURES: [Feature; 3] = [
    Feature {
        icon: "🤖",
        accent: "pink",
        title: "Advanced LLM Support",
        description: "Supports 40+ Large Language Models (LLMs) including GPT-4, LLaMA, Claude, and more.",
    },
    Feature {
        icon: "💬",
        accent: "blue",
        title: "Voice Interaction",
        description: "Integrated Speech-to-Text (STT) and Text-to-Speech (TTS) models ensure seamless voice-to-voice interactions.",
    },
    Feature {
        icon: "⚙",
        accent: "orange",
        title: "Dynamic Architecture",
        description: "Dynamic agentic architecture understands context, explores deeper analysis, and proactively surfaces insights you didn't even know to ask for.",
    },
];

const DATA_SOURCES: [Feature; 2] = [
    Feature {
        icon: "🗄",
        accent: "blue",
        title: "Databases",
        description: "PostgreSQL, BigQuery, Snowflake, Redshift",
    },
    Feature {
        icon: "📄",
        accent: "pink",
        title: "Files & Storage",
        description: "CSV, Excel, cloud storage like AWS S3, Azure Blob, Google Cloud Storage",
    },
];

const SECURITY_POINTS: [(&str, &str); 3] = [
    ("🔒", "Enterprise-grade security standards"),
    ("☁", "Your data, your cloud. Completely secure"),
    ("🛡", "Customizable security & compliance"),
];

/// 0.0 at the top of the page, 1.0 once a full viewport has been scrolled.
pub fn hero_fade(scroll_y: f64, viewport_height: f64) -> f64 {
    if viewport_height <= 0.0 {
        return 0.0;
    }
    (scroll_y / viewport_height).clamp(0.0, 1.0)
}

/// `section_top` is the section's top edge relative to the viewport.
pub fn is_revealed(section_top: f64, viewport_height: f64) -> bool {
    section_top < viewport_height * REVEAL_THRESHOLD
}

/// One reading of the window taken from the scroll listener.
pub struct ScrollSample {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub section_tops: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub revealed: [bool; REVEAL_SECTIONS],
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            scroll_y: 0.0,
            viewport_height: 0.0,
            revealed: [false; REVEAL_SECTIONS],
        }
    }
}

impl ScrollState {
    /// Folds a new sample in. Revealed sections stay revealed.
    pub fn apply(&self, sample: &ScrollSample) -> Self {
        let mut revealed = self.revealed;
        for (slot, top) in revealed.iter_mut().zip(sample.section_tops.iter()) {
            if let Some(top) = top {
                *slot = *slot || is_revealed(*top, sample.viewport_height);
            }
        }
        Self {
            scroll_y: sample.scroll_y,
            viewport_height: sample.viewport_height,
            revealed,
        }
    }

    pub fn hero_fade(&self) -> f64 {
        hero_fade(self.scroll_y, self.viewport_height)
    }
}

impl Reducible for ScrollState {
    type Action = ScrollSample;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(&action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

fn take_sample(section_refs: &[NodeRef]) -> Option<ScrollSample> {
    let window = window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let section_tops = section_refs
        .iter()
        .map(|node| node.cast::<Element>().map(|el| el.get_bounding_client_rect().top()))
        .collect();
    Some(ScrollSample {
        scroll_y,
        viewport_height,
        section_tops,
    })
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub is_dark: bool,
    pub on_book: Callback<()>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let scroll = use_reducer(ScrollState::default);
    let section_refs = use_memo(
        |_| (0..REVEAL_SECTIONS).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        (),
    );

    {
        let scroll = scroll.dispatcher();
        let section_refs = section_refs.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            // sections already in view on load
            if let Some(sample) = take_sample(&section_refs) {
                scroll.dispatch(sample);
            }

            let scroll_callback = Closure::wrap(Box::new(move || {
                if let Some(sample) = take_sample(&section_refs) {
                    scroll.dispatch(sample);
                }
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                let _ = window.add_event_listener_with_callback("resize", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                    let _ = window.remove_event_listener_with_callback("resize", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let theme = if props.is_dark { "dark" } else { "light" };
    let fade = scroll.hero_fade();
    let hero_style = format!(
        "opacity: {:.3}; transform: translateY({:.1}px);",
        1.0 - fade,
        fade * HERO_PARALLAX_PX
    );
    let book = {
        let on_book = props.on_book.clone();
        Callback::from(move |_: MouseEvent| on_book.emit(()))
    };
    let reveal = |index: usize| {
        classes!("reveal", scroll.revealed[index].then(|| "visible"))
    };
    let logo = if props.is_dark { "/logos/logo-dark.png" } else { "/logos/logo-light.png" };

    html! {
        <div class={classes!("landing", theme)}>
            <style>{LANDING_CSS}</style>

            <header class="hero">
                <div class="hero-glow"></div>
                <div class="hero-content" style={hero_style}>
                    <img class="hero-logo" src={logo} alt="Omnituple Logo" />
                    <h1 class="gradient-text">
                        {"Ask Your Data Anything"}
                        <br />
                        {"Answers That Speak Volumes"}
                    </h1>
                    <p class="lead">
                        {"Forget complex dashboards and endless queries. Just ask in voice or chat and Omnituple instantly delivers actionable insights backed by deep, contextual research."}
                    </p>
                    <div class="hero-actions">
                        <button class="book-button" onclick={book.clone()}>
                            <span class="pulse">{"🎙"}</span>
                            {"Book Your Live Voice Demo"}
                            <span class="chevron">{"›"}</span>
                        </button>
                        <button class="ghost-button">
                            {"▶ Watch How It Works"}
                        </button>
                    </div>
                </div>
            </header>

            <section ref={section_refs[0].clone()} class={classes!(reveal(0), "band")}>
                <div class="container">
                    <h2>{"Why Omnituple?"}</h2>
                    <p class="lead">
                        {"Omnituple makes data analysis effortless and immediate. Speak naturally, ask questions directly, and receive instant insights. No technical expertise required."}
                    </p>
                    <div class="grid three">
                        { for WHY_FEATURES.iter().map(feature_card) }
                    </div>
                </div>
            </section>

            <section ref={section_refs[1].clone()} class={reveal(1)}>
                <div class="container">
                    <h2>{"Deep Research Built In"}</h2>
                    <p class="lead">{"Insights That Go Beyond Your Data"}</p>
                    <div class="grid three">
                        { for RESEARCH_FEATURES.iter().map(feature_card) }
                    </div>
                </div>
            </section>

            <section ref={section_refs[2].clone()} class={classes!(reveal(2), "band")}>
                <div class="container">
                    <h2>{"Connect Your Data Effortlessly"}</h2>
                    <div class="grid two">
                        <div class="sources">
                            { for DATA_SOURCES.iter().map(source_row) }
                            <p class="muted">
                                {"Just plug in your data once, and start asking questions right away. Omnituple handles schema recognition and metric definition automatically."}
                            </p>
                        </div>
                        <div class="deploy-card">
                            <h3>{"Deploy Securely in Your Cloud"}</h3>
                            <ul>
                                { for SECURITY_POINTS.iter().map(|(icon, text)| html! {
                                    <li><span class="icon">{*icon}</span><span>{*text}</span></li>
                                }) }
                            </ul>
                        </div>
                    </div>
                </div>
            </section>

            <section ref={section_refs[3].clone()} class={classes!(reveal(3), "band")}>
                <div class="container">
                    <h2>{"Intelligent, Versatile, Agentic"}</h2>
                    <div class="grid three">
                        { for AI_FEATURES.iter().map(feature_card) }
                    </div>
                </div>
            </section>

            <section ref={section_refs[4].clone()} class={classes!(reveal(4), "band", "cta")}>
                <div class="container">
                    <h2>{"Ready to make data analysis effortless?"}</h2>
                    <button class="book-button" onclick={book}>
                        <span class="pulse">{"🎙"}</span>
                        {"Book Your Voice Demo Now"}
                        <span class="chevron">{"›"}</span>
                    </button>
                </div>
            </section>
        </div>
    }
}

fn feature_card(feature: &Feature) -> Html {
    html! {
        <div class="card">
            <div class={classes!("icon", feature.accent)}>{feature.icon}</div>
            <h3>{feature.title}</h3>
            <p class="muted">{feature.description}</p>
        </div>
    }
}

fn source_row(source: &Feature) -> Html {
    html! {
        <div class="source-row">
            <span class={classes!("icon", source.accent)}>{source.icon}</span>
            <div>
                <h3>{source.title}</h3>
                <p class="muted">{source.description}</p>
            </div>
        </div>
    }
}

const LANDING_CSS: &str = r#"
.landing { min-height: 100vh; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif; }
.landing.dark { background: linear-gradient(to bottom, #020617, #0f172a); color: #fff; }
.landing.light { background: linear-gradient(to bottom, #f9fafb, #fff); color: #0f172a; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 1rem; }
.hero { position: relative; min-height: 100vh; display: flex; align-items: center; justify-content: center; overflow: hidden; text-align: center; }
.hero-glow { position: absolute; inset: 0; background: linear-gradient(90deg, #FF1B6B40, #45CAFF40, #FF4B2B40); opacity: 0.2; }
.hero-content { position: relative; z-index: 1; padding: 5rem 1rem; will-change: opacity, transform; }
.hero-logo { height: 5rem; width: auto; margin-bottom: 4rem; }
.gradient-text { font-size: clamp(2.5rem, 6vw, 4.5rem); font-weight: 700; margin-bottom: 1.5rem; background: linear-gradient(90deg, #FF1B6B, #45CAFF, #FF4B2B); -webkit-background-clip: text; background-clip: text; color: transparent; }
.lead { font-size: 1.25rem; max-width: 48rem; margin: 0 auto 3rem; text-align: center; }
.dark .lead { color: #d1d5db; }
.light .lead { color: #4b5563; }
.dark .muted { color: #9ca3af; }
.light .muted { color: #4b5563; }
.hero-actions { display: flex; flex-wrap: wrap; gap: 1.5rem; justify-content: center; align-items: center; }
.book-button { display: inline-flex; align-items: center; gap: 0.5rem; padding: 1rem 2rem; border: none; border-radius: 9999px; color: #fff; font-size: 1rem; cursor: pointer; background: linear-gradient(90deg, #FF1B6B, #FF4B2B); transition: transform 0.2s; }
.book-button:hover { transform: scale(1.05); }
.book-button .chevron { transition: transform 0.2s; }
.book-button:hover .chevron { transform: translateX(4px); }
.pulse { animation: pulse 2s ease-in-out infinite; }
@keyframes pulse { 50% { opacity: 0.5; } }
.ghost-button { background: none; border: none; cursor: pointer; font-size: 1rem; color: inherit; opacity: 0.8; }
.ghost-button:hover { opacity: 1; }
section { padding: 5rem 0; }
section h2 { font-size: 2.25rem; font-weight: 700; text-align: center; margin-bottom: 1.5rem; }
.dark .band { background: rgba(15, 23, 42, 0.5); }
.light .band { background: #f9fafb; }
.cta { text-align: center; }
.grid { display: grid; gap: 2rem; margin-top: 3rem; }
.grid.three { grid-template-columns: repeat(3, 1fr); }
.grid.two { grid-template-columns: repeat(2, 1fr); gap: 3rem; }
.card, .source-row, .deploy-card { padding: 2rem; border-radius: 1rem; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); transition: background 0.2s; }
.dark .card, .dark .source-row, .dark .deploy-card { background: rgba(30, 41, 59, 0.5); }
.light .card, .light .source-row, .light .deploy-card { background: #fff; }
.card:hover .icon { transform: scale(1.1); }
.icon { display: inline-block; font-size: 2rem; margin-bottom: 1rem; transition: transform 0.2s; }
.source-row { display: flex; gap: 1rem; align-items: flex-start; margin-bottom: 1.5rem; }
.deploy-card ul { list-style: none; padding: 0; }
.deploy-card li { display: flex; gap: 0.75rem; align-items: center; margin-bottom: 1rem; }
.deploy-card .icon { font-size: 1.25rem; margin: 0; }
.reveal { opacity: 0; transform: translateY(40px); transition: opacity 0.8s ease-out, transform 0.8s ease-out; }
.reveal.visible { opacity: 1; transform: none; }
@media (max-width: 768px) {
    .grid.three, .grid.two { grid-template-columns: 1fr; }
}
"#;
