use leptos::prelude::*;

const BEFORE: &str = r#"pip install torch torchvision \
  --index-url https://download.\
  pytorch.org/whl/cu121
pip install transformers
pip install accelerate
# Hope versions are compatible..."#;

const AFTER: &str = r#"komodo "train an AI model"

# Komodo detects your GPU,
# installs optimized packages,
# creates virtual environment,
# and handles all dependencies."#;

#[component]
pub fn WhatIs() -> impl IntoView {
    view! {
        <section id="what-is" class="what-is">
            <div class="container narrow">
                <h2 class="section-title">
                    "What is " <span class="accent">"Komodo"</span> "?"
                </h2>
                <p class="section-lead">
                    "Komodo is an intelligent development environment setup tool that lets you describe "
                    "what you want to build in " <span class="accent">"natural language"</span>
                    ", rather than having to know specific package names, versions, or configuration details. "
                    "It's like having an expert DevOps engineer who automatically configures your project "
                    "based on your hardware and goals."
                </p>

                <div class="comparison-grid">
                    <ComparisonCard label="Instead of this..." tone="warning" body=BEFORE />
                    <ComparisonCard label="You simply say..." tone="accent" body=AFTER />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ComparisonCard(label: &'static str, tone: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="comparison-card">
            <p class=format!("comparison-label {tone}")>{label}</p>
            <pre class="comparison-body">{body}</pre>
        </div>
    }
}
