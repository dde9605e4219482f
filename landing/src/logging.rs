//! `tracing` output for the browser console.
//!
//! Events are formatted into one line and sent to `console.log` (or the
//! matching `warn`/`error`/`debug` method) with a `%c` styled level tag.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use wasm_bindgen::JsValue;

/// Installs the global subscriber. A second call only warns.
pub fn init(level: Level) {
    let installed = tracing_subscriber::registry()
        .with(LevelFilter::from_level(level))
        .with(ConsoleLayer)
        .try_init();

    if installed.is_err() {
        web_sys::console::warn_1(&JsValue::from_str(
            "[komodo] tracing subscriber already installed",
        ));
    }
}

struct ConsoleLayer;

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let level = *meta.level();

        let mut fields = FieldCollector::default();
        event.record(&mut fields);

        let line = JsValue::from_str(&format!(
            "%c{level:<5}%c {}: {}{}",
            meta.target(),
            fields.message,
            fields.rest
        ));
        let tag = JsValue::from_str(level_style(level));
        let body = JsValue::from_str("color: inherit; font-weight: normal;");

        if level == Level::ERROR {
            web_sys::console::error_3(&line, &tag, &body);
        } else if level == Level::WARN {
            web_sys::console::warn_3(&line, &tag, &body);
        } else if level == Level::INFO {
            web_sys::console::log_3(&line, &tag, &body);
        } else {
            web_sys::console::debug_3(&line, &tag, &body);
        }
    }
}

fn level_style(level: Level) -> &'static str {
    if level == Level::ERROR {
        "color: #ff6b6b; font-weight: bold;"
    } else if level == Level::WARN {
        "color: #ffcc00; font-weight: bold;"
    } else if level == Level::INFO {
        "color: #98d998; font-weight: bold;"
    } else {
        "color: #888; font-weight: bold;"
    }
}

#[derive(Default)]
struct FieldCollector {
    message: String,
    rest: String,
}

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.rest, " {}={value}", field.name());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            let _ = write!(self.rest, " {}={value:?}", field.name());
        }
    }
}
