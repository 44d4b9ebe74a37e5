use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use super::traits::Renderer;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, OutputFormat, ViewMode,
};
use crate::presentation::views::style;

pub struct ConsoleRenderer {
    format: OutputFormat,
    mode: ViewMode,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, mode: ViewMode) -> Self {
        Self { format, mode }
    }

    /// Write the result to `out`. JSON ignores the view mode and always dumps
    /// the full view model.
    pub fn write_to<T>(&self, out: &mut dyn Write, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        if self.format == OutputFormat::Json {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        if let Some(badge) = &result.badge
            && self.mode != ViewMode::Minimal
        {
            writeln!(out, "{} {}", badge.icon(), style::bold(&badge.label))?;
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.mode))?;

        if !result.suggestions.is_empty() && self.mode != ViewMode::Minimal {
            writeln!(out, "\n{}", style::tips_heading("💡 Tips:"))?;
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    write!(out, ": {}", style::command(cmd))?;
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out, &result)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{Guidance, StatusBadge};
    use std::fmt;

    #[derive(Serialize)]
    struct Greeting {
        name: &'static str,
    }

    struct GreetingView<'a>(&'a Greeting);

    impl fmt::Display for GreetingView<'_> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            writeln!(f, "hello {}", self.0.name)
        }
    }

    impl CreateView for Greeting {
        fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
            Box::new(GreetingView(self))
        }
    }

    fn result() -> CommandResultViewModel<Greeting> {
        CommandResultViewModel::new(Greeting { name: "ana" })
            .with_badge(StatusBadge::success("Done"))
            .with_suggestion(Guidance::new("Try").with_command("medidata patient list"))
    }

    fn render(format: OutputFormat, mode: ViewMode) -> String {
        let mut buf = Vec::new();
        ConsoleRenderer::new(format, mode)
            .write_to(&mut buf, &result())
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_output_has_badge_content_and_tips() {
        let text = render(OutputFormat::Text, ViewMode::Standard);
        assert!(text.starts_with("✅ Done\n\nhello ana\n"));
        assert!(text.contains("💡 Tips:"));
        assert!(text.contains("  • Try: medidata patient list"));
    }

    #[test]
    fn test_minimal_output_is_content_only() {
        assert_eq!(render(OutputFormat::Text, ViewMode::Minimal), "hello ana\n");
    }

    #[test]
    fn test_json_output_is_full_envelope() {
        let json: serde_json::Value =
            serde_json::from_str(&render(OutputFormat::Json, ViewMode::Minimal)).unwrap();
        assert_eq!(json["badge"]["level"], "success");
        assert_eq!(json["content"]["name"], "ana");
        assert_eq!(json["suggestions"][0]["command"], "medidata patient list");
    }
}
