use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::core::StatusClass;
use crate::error::AppError;
use crate::theme::Palette;
use crate::utils::Timezone;
use crate::utils::date::PLACEHOLDER;

#[derive(Debug, Clone, Copy)]
pub(crate) struct NumberFormat {
    group_sep: char,
    decimal_sep: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            group_sep: ',',
            decimal_sep: '.',
        }
    }
}

impl NumberFormat {
    pub(crate) fn from_locale(locale: Option<&str>) -> Result<Self, AppError> {
        let trimmed = locale.map(str::trim).unwrap_or_default();
        if trimmed.is_empty() {
            return Ok(NumberFormat::default());
        }
        let language = trimmed
            .split(['-', '_'])
            .next()
            .unwrap_or(trimmed)
            .to_ascii_lowercase();

        match language.as_str() {
            "en" | "zh" | "ja" => Ok(NumberFormat::default()),
            "de" | "es" | "it" => Ok(NumberFormat {
                group_sep: '.',
                decimal_sep: ',',
            }),
            "fr" | "ru" => Ok(NumberFormat {
                group_sep: ' ',
                decimal_sep: ',',
            }),
            _ => Err(AppError::UnsupportedLocale {
                input: trimmed.to_string(),
            }),
        }
    }
}

/// Everything a table printer needs to know about presentation
#[derive(Debug, Clone, Copy)]
pub(crate) struct TableStyle<'a> {
    pub(crate) use_color: bool,
    pub(crate) compact: bool,
    pub(crate) number_format: NumberFormat,
    pub(crate) timezone: Timezone,
    pub(crate) palette: Palette,
    pub(crate) footer: Option<&'a str>,
}

impl TableStyle<'_> {
    fn color(&self, color: Color) -> Option<Color> {
        self.use_color.then_some(color)
    }

    pub(super) fn header(&self, text: &str) -> Cell {
        styled_cell(text, self.color(self.palette.accent), true)
    }

    pub(super) fn status(&self, status: &str) -> Cell {
        let class = StatusClass::of(status);
        let text = if status.is_empty() { PLACEHOLDER } else { status };
        styled_cell(text, self.color(self.palette.status(class)), class == StatusClass::Failed)
    }

    pub(super) fn count(&self, n: i64, color: Option<Color>) -> Cell {
        right_cell(
            &format_number(n, self.number_format),
            color.and_then(|c| self.color(c)),
            false,
        )
    }

    pub(super) fn muted(&self, text: &str) -> Cell {
        styled_cell(text, self.color(self.palette.muted), false)
    }

    /// Recent-run markers, each colored by its status
    pub(super) fn strip(&self, statuses: &[String]) -> String {
        statuses
            .iter()
            .map(|status| {
                let class = StatusClass::of(status);
                let marker = class.marker();
                if self.use_color {
                    format!("{}{}\x1b[0m", ansi_fg(self.palette.status(class)), marker)
                } else {
                    marker.to_string()
                }
            })
            .collect()
    }

    pub(super) fn print_footer(&self) {
        if let Some(footer) = self.footer.map(str::trim).filter(|f| !f.is_empty()) {
            println!("  {footer}\n");
        }
    }
}

pub(super) fn format_number(n: i64, format: NumberFormat) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(format.group_sep);
        }
        grouped.push(c);
    }
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Percentage with one decimal, or the placeholder when undefined
pub(super) fn format_percent(value: Option<f64>, format: NumberFormat) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let s = format!("{v:.1}%");
            if format.decimal_sep == '.' {
                s
            } else {
                s.replace('.', &format.decimal_sep.to_string())
            }
        }
        _ => PLACEHOLDER.to_string(),
    }
}

pub(super) fn styled_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    let mut cell = Cell::new(text);
    if let Some(c) = color {
        cell = cell.fg(c);
    }
    if bold {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn right_cell(text: &str, color: Option<Color>, bold: bool) -> Cell {
    styled_cell(text, color, bold).set_alignment(CellAlignment::Right)
}

/// Table with the standard preset and a single-line header separator
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
    table
}

fn ansi_fg(color: Color) -> &'static str {
    match color {
        Color::Red => "\x1b[91m",
        Color::DarkRed => "\x1b[31m",
        Color::Green => "\x1b[92m",
        Color::DarkGreen => "\x1b[32m",
        Color::Yellow => "\x1b[93m",
        Color::DarkYellow => "\x1b[33m",
        Color::Blue => "\x1b[94m",
        Color::DarkBlue => "\x1b[34m",
        Color::Cyan => "\x1b[96m",
        Color::DarkCyan => "\x1b[36m",
        Color::Grey => "\x1b[37m",
        Color::DarkGrey => "\x1b[90m",
        _ => "\x1b[39m",
    }
}

/// Serialize for printing; serialization of plain values cannot fail in
/// practice, but an empty array is printed if it does.
pub(super) fn to_pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Failed to serialize JSON output: {}", e);
        "[]".to_string()
    })
}

#[cfg(test)]
pub(super) mod tests {
    use super::*;
    use crate::theme::Theme;

    pub(crate) fn plain_style() -> TableStyle<'static> {
        TableStyle {
            use_color: false,
            compact: false,
            number_format: NumberFormat::default(),
            timezone: Timezone::Named(chrono_tz::UTC),
            palette: Theme::Dark.palette(),
            footer: None,
        }
    }

    #[test]
    fn format_number_groups() {
        let fmt = NumberFormat::default();
        assert_eq!(format_number(0, fmt), "0");
        assert_eq!(format_number(999, fmt), "999");
        assert_eq!(format_number(1000, fmt), "1,000");
        assert_eq!(format_number(1_234_567, fmt), "1,234,567");
        assert_eq!(format_number(-1234, fmt), "-1,234");
    }

    #[test]
    fn locale_separators() {
        let de = NumberFormat::from_locale(Some("de-DE")).unwrap();
        assert_eq!(format_number(12_345, de), "12.345");
        let fr = NumberFormat::from_locale(Some("fr")).unwrap();
        assert_eq!(format_number(12_345, fr), "12 345");
        assert_eq!(format_percent(Some(87.5), fr), "87,5%");
    }

    #[test]
    fn unsupported_locale_is_error() {
        let err = NumberFormat::from_locale(Some("xx")).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported locale: xx");
        assert!(NumberFormat::from_locale(Some("  ")).is_ok());
    }

    #[test]
    fn percent_placeholder() {
        let fmt = NumberFormat::default();
        assert_eq!(format_percent(None, fmt), "—");
        assert_eq!(format_percent(Some(f64::NAN), fmt), "—");
        assert_eq!(format_percent(Some(100.0), fmt), "100.0%");
        assert_eq!(format_percent(Some(66.666), fmt), "66.7%");
    }

    #[test]
    fn missing_status_and_rate_share_placeholder() {
        let style = plain_style();
        assert_eq!(style.status("").content(), PLACEHOLDER);
        assert_eq!(style.status("failed").content(), "failed");
        assert_eq!(format_percent(None, style.number_format), PLACEHOLDER);
    }

    #[test]
    fn strip_without_color_is_plain_markers() {
        let statuses = vec![
            "success".to_string(),
            "failed".to_string(),
            "running".to_string(),
        ];
        assert_eq!(plain_style().strip(&statuses), "✓✗•");
    }

    #[test]
    fn strip_with_color_wraps_markers() {
        let style = TableStyle {
            use_color: true,
            ..plain_style()
        };
        let strip = style.strip(&["failed".to_string()]);
        assert!(strip.starts_with("\x1b[91m"));
        assert!(strip.ends_with("\x1b[0m"));
    }
}
