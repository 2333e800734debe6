use crossterm::style::Stylize;
use is_terminal::IsTerminal;

use crate::config::ConfigWarning;
use crate::render::Diagnostic;
use crate::ui::theme;

/// Per-invocation output capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
    pub verbose: u8,
}

impl UiContext {
    /// Detect capabilities from the ambient terminal.
    pub fn detect(verbose: u8) -> Self {
        Self::detect_impl(
            |key| std::env::var(key).ok(),
            std::io::stderr().is_terminal(),
            verbose,
        )
    }

    fn detect_impl(get_env: impl Fn(&str) -> Option<String>, is_tty: bool, verbose: u8) -> Self {
        let term = get_env("TERM").unwrap_or_default();
        let term_is_dumb = term.eq_ignore_ascii_case("dumb");
        let no_color = get_env("NO_COLOR").is_some();

        Self {
            color: is_tty && !term_is_dumb && !no_color,
            unicode: !term_is_dumb && unicode_locale(&get_env),
            verbose,
        }
    }

    fn icon(&self, ok: bool) -> String {
        let (unicode, ascii, color) = if ok {
            (
                theme::icons::SUCCESS,
                theme::icons_ascii::SUCCESS,
                theme::colors::SUCCESS,
            )
        } else {
            (
                theme::icons::ERROR,
                theme::icons_ascii::ERROR,
                theme::colors::ERROR,
            )
        };

        let s = if self.unicode { unicode } else { ascii };
        if self.color {
            s.with(color).to_string()
        } else {
            s.to_string()
        }
    }

    /// One pass/fail line of a check report.
    pub fn status_line(&self, ok: bool, label: &str, detail: &str) {
        if detail.is_empty() {
            println!("  {} {}", self.icon(ok), label);
        } else {
            println!("  {} {} {}", self.icon(ok), label, detail);
        }
    }

    /// Render a fallback diagnostic to stderr.
    pub fn print_diagnostic(&self, diagnostic: &Diagnostic) {
        let warning = if self.unicode {
            theme::icons::WARNING
        } else {
            theme::icons_ascii::WARNING
        };

        if self.color {
            eprintln!(
                "{} {}",
                warning.with(theme::colors::WARNING),
                diagnostic.title.as_str().bold()
            );
        } else {
            eprintln!("{} {}", warning, diagnostic.title);
        }
        eprintln!();
        eprintln!("{}", diagnostic.body);
    }
}

/// Warn about unrecognized keys in the config file. A typo like
/// `prot = 4000` must not be swallowed while the default quietly wins.
pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        eprintln!(
            "⚠ Unknown config key '{}' in {}",
            w.key,
            w.file.display()
        );
    }
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    for key in KEYS {
        if let Some(val) = get_env(key) {
            let v = val.to_lowercase();
            return v.contains("utf-8") || v.contains("utf8");
        }
    }
    // Modern default unless the terminal told us otherwise.
    true
}
