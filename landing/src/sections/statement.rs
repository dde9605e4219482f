use leptos::prelude::*;

#[component]
pub fn Statement() -> impl IntoView {
    view! {
        <section class="statement">
            <div class="container">
                <p class="statement-line">"AI has Revolutionized Programming"</p>
                <p class="statement-line accent">"Why are Dependencies stuck in 2018?"</p>
            </div>
        </section>
    }
}
