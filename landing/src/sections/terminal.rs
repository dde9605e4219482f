//! Interactive Komodo terminal rendered inside the hero.

use komodo::terminal::{HistoryDirection, LogEntry};
use komodo::{LandingConfig, Resolution};
use leptos::{ev, html, prelude::*};
use tracing::info;

use super::VERSION;

#[component]
pub fn TerminalDots() -> impl IntoView {
    view! {
        <div class="terminal-dots">
            <div class="terminal-dot red"></div>
            <div class="terminal-dot yellow"></div>
            <div class="terminal-dot green"></div>
        </div>
    }
}

#[component]
pub fn KomodoTerminal() -> impl IntoView {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let terminal = RwSignal::new(config.terminal.terminal());
    let auto_scroll = StoredValue::new(config.terminal.auto_scroll());

    let output_ref = NodeRef::<html::Div>::new();
    let input_ref = NodeRef::<html::Input>::new();

    let log = Memo::new(move |_| terminal.with(|t| t.log().to_vec()));
    let pending = Memo::new(move |_| terminal.with(|t| t.pending().to_string()));

    // Keep the newest entry in view, unless the reader scrolled up.
    Effect::new(move |_| {
        log.track();
        if !auto_scroll.with_value(|policy| policy.follows_output()) {
            return;
        }
        request_animation_frame(move || {
            if let Some(output) = output_ref.get_untracked() {
                output.set_scroll_top(output.scroll_height());
            }
        });
    });

    let on_output_scroll = move |_: ev::Event| {
        let Some(output) = output_ref.get_untracked() else {
            return;
        };
        auto_scroll.update_value(|policy| {
            policy.observe(
                f64::from(output.scroll_height()),
                f64::from(output.scroll_top()),
                f64::from(output.client_height()),
            )
        });
    };

    let focus_input = move |_: ev::MouseEvent| {
        if let Some(input) = input_ref.get_untracked() {
            let _ = input.focus();
        }
    };

    let on_keydown = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            if let Some(Resolution::Clear) = terminal.try_update(|t| t.submit_pending()) {
                info!("terminal cleared");
            }
        }
        "ArrowUp" => {
            ev.prevent_default();
            terminal.update(|t| t.navigate_history(HistoryDirection::Older));
        }
        "ArrowDown" => {
            ev.prevent_default();
            terminal.update(|t| t.navigate_history(HistoryDirection::Newer));
        }
        _ => {}
    };

    view! {
        <div class="komodo-terminal">
            <div class="terminal-header">
                <TerminalDots />
                <span class="terminal-title">"komodo-terminal"</span>
                <span class="terminal-status">
                    <span class="accent">"●"</span>
                    " READY"
                </span>
            </div>
            <div
                class="terminal-body"
                node_ref=output_ref
                on:scroll=on_output_scroll
                on:click=focus_input
            >
                {move || {
                    log.get()
                        .into_iter()
                        .map(|entry| view! { <Entry entry=entry /> })
                        .collect_view()
                }}
                <div class="terminal-line terminal-input-line">
                    <span class="terminal-prompt">"~$"</span>
                    <input
                        node_ref=input_ref
                        type="text"
                        class="terminal-input"
                        aria-label="Komodo command"
                        autocomplete="off"
                        spellcheck="false"
                        prop:value=move || pending.get()
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            terminal.update(|t| t.set_pending(text));
                        }
                        on:keydown=on_keydown
                    />
                </div>
            </div>
            <div class="terminal-footer">
                <span>
                    "Type " <span class="accent">"komodo"</span> " for help • Use ↑/↓ for history"
                </span>
                <span>"clear to reset"</span>
            </div>
        </div>
    }
}

/// One log entry. The welcome entry gets a title instead of a prompt line.
#[component]
fn Entry(entry: LogEntry) -> impl IntoView {
    let LogEntry {
        command,
        output,
        is_welcome,
    } = entry;

    let heading = if is_welcome {
        view! {
            <div class="terminal-welcome">
                <span class="terminal-wordmark">"KOMODO"</span>
                <span class="terminal-version">{VERSION}</span>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="terminal-line">
                <span class="terminal-prompt">"~$"</span>
                <span class="terminal-command">{command}</span>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="terminal-entry">
            {heading}
            <div class="terminal-output">{output}</div>
        </div>
    }
}
