//! Greeting for developers who open the console.

use js_sys::{Array, Object, Reflect};
use komodo::commands::StaticCommand;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use super::{KOMODO_ART, LINE_COLORS, VERSION};

#[component]
#[allow(clippy::unused_unit)]
pub fn ConsoleBanner() -> impl IntoView {
    Effect::new(move || {
        print_wordmark();
        print_tips();
        setup_console_api();
    });

    view! {}
}

/// Wordmark in a single `console.log` call, one `%c` style per line.
fn print_wordmark() {
    let mut format = String::new();
    let mut styles = Vec::with_capacity(LINE_COLORS.len());
    for (line, color) in KOMODO_ART.lines().zip(LINE_COLORS) {
        format.push_str("%c");
        format.push_str(line);
        format.push('\n');
        styles.push(format!(
            "color: {color}; font-family: monospace; font-weight: bold; line-height: 1.2;"
        ));
    }

    let args = Array::new();
    args.push(&JsValue::from_str(&format));
    for style in &styles {
        args.push(&JsValue::from_str(style));
    }
    web_sys::console::log(&args);

    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c  Describe it. Komodo installs it.  {VERSION}")),
        &JsValue::from_str("color: #98d998; font-family: monospace;"),
    );
    web_sys::console::log_1(&JsValue::from_str(""));
}

fn print_tips() {
    web_sys::console::log_2(
        &JsValue::from_str("%c=== TRY IN THE HERO TERMINAL ==="),
        &JsValue::from_str("color: #ffcc00; font-weight: bold;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%c(o_o) komodo install \"train a vision model\""),
        &JsValue::from_str("color: #ffcc00;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%c(^_^) komodo create \"a fastapi backend\""),
        &JsValue::from_str("color: #88ffff;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%c(>_<) ↑/↓ walks your history, clear wipes the screen"),
        &JsValue::from_str("color: #ff88ff;"),
    );
    web_sys::console::log_1(&JsValue::from_str(""));
    web_sys::console::log_2(
        &JsValue::from_str("%c(._.) or type: komodo.commands()"),
        &JsValue::from_str("color: #555; font-size: 9px;"),
    );
}

/// Exposes `window.komodo.commands()`, listing every exact command the
/// terminal answers.
fn setup_console_api() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let api = Object::new();

    let commands_fn = Closure::wrap(Box::new(|| {
        web_sys::console::log_2(
            &JsValue::from_str("%c=== KOMODO COMMANDS ==="),
            &JsValue::from_str("color: #98d998; font-weight: bold; font-size: 14px;"),
        );
        for command in StaticCommand::ALL {
            web_sys::console::log_2(
                &JsValue::from_str(&format!("%c  {}", command.key())),
                &JsValue::from_str("color: #98d998; font-family: monospace;"),
            );
        }
        web_sys::console::log_2(
            &JsValue::from_str("%c  clear"),
            &JsValue::from_str("color: #888; font-family: monospace;"),
        );
    }) as Box<dyn Fn()>);

    let _ = Reflect::set(&api, &JsValue::from_str("commands"), commands_fn.as_ref());
    commands_fn.forget();

    let _ = Reflect::set(&window, &JsValue::from_str("komodo"), &api);
}
