//! SVG stat-card rendering for the age breakdown, in a dark and a light
//! theme. Pure string building: the card is a function of the calculation
//! results and the theme, nothing else.

use crate::age::AgeBreakdown;
use crate::stats::VitalStats;
use crate::zodiac::ZodiacSign;

const START_Y: i32 = 30;
const LINE_HEIGHT: i32 = 20;
const LEFT_PADDING: f32 = 15.0;
const RIGHT_PADDING: f32 = 30.0;
const CHAR_WIDTH: f32 = 9.6;
const MIN_CARD_CHARS: usize = 36;

#[derive(Clone, Copy)]
pub enum Theme {
    Dark,
    Light,
}

pub struct ThemeColors {
    pub bg: &'static str,
    pub text: &'static str,
    pub key: &'static str,
    pub value: &'static str,
    pub cc: &'static str,
}

impl Theme {
    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors {
                bg: "#161b22",
                text: "#c9d1d9",
                key: "#ffa657",
                value: "#a5d6ff",
                cc: "#616e7f",
            },
            Theme::Light => ThemeColors {
                bg: "#ffffff",
                text: "#24292f",
                key: "#d73a49",
                value: "#0366d6",
                cc: "#6a737d",
            },
        }
    }
}

// Utilities for building SVG content

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Groups digits in threes, e.g. 1248825600 -> "1,248,825,600".
fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn build_stat_row(key: &str, value: &str, align_width: usize) -> (String, String, String) {
    let key_part = format!("{key}: ");
    let base_len = key_part.len() + value.len();
    let available = align_width.saturating_sub(base_len);

    let dots = match available {
        0 => "".to_string(),
        1 => " ".to_string(),
        2 => ". ".to_string(),
        n => ".".repeat(n),
    };

    (key_part, dots, value.to_string())
}

fn build_header_line(label: &str, align_width: usize) -> String {
    let base = format!("{label} ");
    let dash_count = align_width.saturating_sub(base.len()) + 2;
    format!("{base}{}", "-".repeat(dash_count))
}

enum Line {
    Header(String),
    Blank,
    Stat { key: String, value: String },
}

/// Card content, top to bottom. The vital-statistics section (zodiac
/// included) only appears when the caller opted into it.
fn card_lines(
    age: &AgeBreakdown,
    zodiac: ZodiacSign,
    vitals: Option<&VitalStats>,
) -> Vec<Line> {
    let stat = |key: &str, value: String| Line::Stat {
        key: key.to_string(),
        value,
    };

    let mut lines = vec![
        Line::Header("Age".to_string()),
        stat("Years", age.years.to_string()),
        stat("Months", age.months.to_string()),
        stat("Days", age.days.to_string()),
        stat("Hours", age.hours.to_string()),
        stat("Minutes", age.minutes.to_string()),
        stat("Seconds", age.seconds.to_string()),
    ];

    if let Some(vitals) = vitals {
        lines.push(Line::Blank);
        lines.push(Line::Header("Vital Statistics".to_string()));
        lines.push(stat("Zodiac", zodiac.to_string()));
        lines.push(stat("Heartbeats", group_digits(vitals.heartbeats)));
        lines.push(stat("Breaths", group_digits(vitals.breaths)));
        lines.push(stat(
            "Life Progress",
            format!("{}%", vitals.life_progress_pct),
        ));
    }

    lines
}

/// Main SVG generation function
pub fn generate_svg(
    age: &AgeBreakdown,
    zodiac: ZodiacSign,
    vitals: Option<&VitalStats>,
    theme: Theme,
) -> String {
    let colors = theme.colors();
    let lines = card_lines(age, zodiac, vitals);

    let mut align_width = lines
        .iter()
        .map(|line| match line {
            Line::Stat { key, value } => key.len() + 2 + value.len(),
            Line::Header(label) => label.len() + 2,
            Line::Blank => 0,
        })
        .max()
        .unwrap_or(0);
    align_width = align_width.max(MIN_CARD_CHARS);

    let mut tspans = String::new();
    for (i, line) in lines.iter().enumerate() {
        let y = START_Y + (i as i32) * LINE_HEIGHT;

        match line {
            Line::Blank => {}
            Line::Header(label) => {
                tspans.push_str(&format!(
                    r#"<tspan x="{LEFT_PADDING}" y="{y}">{}</tspan>
"#,
                    escape_xml(&build_header_line(label, align_width))
                ));
            }
            Line::Stat { key, value } => {
                let (key_part, dots, value_part) = build_stat_row(key, value, align_width);
                tspans.push_str(&format!(
                    r#"<tspan x="{LEFT_PADDING}" y="{y}" class="cc">. </tspan>
<tspan class="key">{}</tspan><tspan class="cc">{}</tspan><tspan class="value">{}</tspan>
"#,
                    escape_xml(&key_part),
                    escape_xml(&dots),
                    escape_xml(&value_part)
                ));
            }
        }
    }

    let w = LEFT_PADDING + (align_width as f32) * CHAR_WIDTH + RIGHT_PADDING;
    let h = lines.len() as f32 * LINE_HEIGHT as f32 + START_Y as f32 + 30.0;

    format!(
        r#"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{w}px" height="{h}px"
     font-family="ConsolasFallback,Consolas,monospace"
     font-size="16px">

<style>
.key   {{ fill: {key}; }}
.value {{ fill: {value}; }}
.cc    {{ fill: {cc}; }}
</style>

<rect width="{w}px" height="{h}px" fill="{bg}" rx="15"/>

<text fill="{text}" xml:space="preserve">
{tspans}
</text>

</svg>
"#,
        w = w,
        h = h,
        bg = colors.bg,
        text = colors.text,
        key = colors.key,
        value = colors.value,
        cc = colors.cc,
        tspans = tspans
    )
}
