//! Simulates a command host prompting for a numeric argument.
//!
//! The host re-parses `set volume <number>` after every keystroke. For each
//! prefix of the argument it asks the decimal grammar whether to render a
//! completed value, keep showing the `<percent>` placeholder, or drop the
//! candidate altogether.
//!
//! Run with
//!
//! ```bash
//! RUST_LOG=trace cargo run -p decimal-grammar --example command_line -- 42.5
//! ```

use decimal_grammar::{Decimal, DecimalOptions, Suggestion};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let typed = std::env::args().nth(1).unwrap_or_else(|| "42.5".into());
    let grammar = Decimal::new(
        DecimalOptions::default()
            .with_min(0.0)
            .with_max(100.0)
            .with_label("percent"),
    );

    for (prefix, _) in grammar.keystrokes(&typed) {
        match grammar.suggest(prefix) {
            Some(Suggestion::Match { text, value }) => {
                println!("set volume {text:<8} -> {value}");
            }
            Some(Suggestion::Placeholder { label }) => {
                println!("set volume {prefix}<{label}>");
            }
            None => {
                println!("set volume {prefix:<8} (no match)");
                break;
            }
        }
    }
}
