use leptos::prelude::*;

use super::VERSION;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-title">"komodo"</span>
                    <span class="footer-version">{VERSION}</span>
                </div>
                <div class="footer-links">
                    <a href="#hero" class="footer-link">"Terminal"</a>
                    <a href="#what-is" class="footer-link">"What is Komodo?"</a>
                    <a href="#features" class="footer-link">"Features"</a>
                </div>
                <p class="footer-copyright">"Developed with 🦎 by The Komodo Team (c)2025"</p>
            </div>
        </footer>
    }
}
