//! Rendered patch note fragments
//!
//! Every fragment kind has a fixed template. Builders fill the template at
//! creation time, so a `Fragment` is already the rendered unit: it carries the
//! final text plus whatever the markup projection needs.

use maud::{html, Markup, PreEscaped};

use super::linkify::InlineSpan;

/// Sentence wrapped around the metadata content
pub const METADATA_SUFFIX: &str = " 업데이트 내용을 안내해 드립니다. 아래 패치노트를 확인해 주세요.";

/// Appended after `{content} {version}` in the title heading
pub const TITLE_SUFFIX: &str = " 업데이트";

/// Leading spacing markers in front of a category heading
pub const CATEGORY_INDENT: &str = "\u{a0}\u{a0}";

/// Width of the struck-through spacer under the title, in non-breaking spaces
pub const TITLE_RULE_WIDTH: usize = 60;

/// Fixed image width in pixels
pub const IMAGE_WIDTH: u32 = 600;

/// Fixed image corner radius in pixels
pub const IMAGE_CORNER_RADIUS: u8 = 12;

/// Blank lines emitted before the closing messages
pub const CLOSING_BLANK_LINES: usize = 7;

/// Closing messages, in output order
pub const CLOSING_MESSAGES: [&str; 2] = [
    "항상 저희 게임을 사랑해 주시는 모든 분들께 진심으로 감사드립니다.",
    "앞으로도 더 쾌적한 게임 환경과 좋은 콘텐츠로 보답하겠습니다.",
];

/// Icon shown in front of a content line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconKind {
    #[default]
    Plus,
    Minus,
    Check,
}

impl IconKind {
    pub const ALL: [IconKind; 3] = [IconKind::Plus, IconKind::Minus, IconKind::Check];

    /// Glyph drawn for this icon
    pub fn glyph(self) -> &'static str {
        match self {
            IconKind::Plus => "➕",
            IconKind::Minus => "➖",
            IconKind::Check => "✔",
        }
    }

    /// Selector label
    pub fn label(self) -> &'static str {
        match self {
            IconKind::Plus => "plus",
            IconKind::Minus => "minus",
            IconKind::Check => "check",
        }
    }
}

/// One rendered unit of a patch note
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Descriptive block at the top of the note
    Metadata { text: String },

    /// Empty line
    LineBreak,

    /// Large bold heading
    Title { heading: String },

    /// Strikethrough spacer heading under the title
    TitleRule,

    /// Bold, indented sub-heading
    Category { text: String },

    /// Icon in a color followed by text
    ContentLine {
        icon: IconKind,
        color: String,
        text: String,
    },

    /// Small-font paragraph, first URL linkified
    Description { spans: Vec<InlineSpan> },

    /// Image with fixed width and rounded corners
    Image { alt: String, src: String },

    /// Quoted block
    Quote { text: String },

    /// Cells in the order they were supplied
    Table { cells: Vec<String> },

    /// Centered closing message
    Closing { text: String },
}

impl Fragment {
    /// Short kind name, used for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Fragment::Metadata { .. } => "metadata",
            Fragment::LineBreak => "line-break",
            Fragment::Title { .. } => "title",
            Fragment::TitleRule => "title-rule",
            Fragment::Category { .. } => "category",
            Fragment::ContentLine { .. } => "content-line",
            Fragment::Description { .. } => "description",
            Fragment::Image { .. } => "image",
            Fragment::Quote { .. } => "quote",
            Fragment::Table { .. } => "table",
            Fragment::Closing { .. } => "closing",
        }
    }

    /// Plain text as the reader sees it
    pub fn text(&self) -> String {
        match self {
            Fragment::Metadata { text }
            | Fragment::Category { text }
            | Fragment::Quote { text }
            | Fragment::Closing { text } => text.clone(),
            Fragment::Title { heading } => heading.clone(),
            Fragment::ContentLine { icon, text, .. } => format!("{} {}", icon.glyph(), text),
            Fragment::Description { spans } => spans.iter().map(InlineSpan::as_str).collect(),
            Fragment::Image { alt, .. } => alt.clone(),
            Fragment::Table { cells } => cells.join("\t"),
            Fragment::LineBreak => String::new(),
            Fragment::TitleRule => "\u{a0}".repeat(TITLE_RULE_WIDTH),
        }
    }

    /// HTML markup with inline style directives
    pub fn to_html(&self) -> String {
        self.render().into_string()
    }

    fn render(&self) -> Markup {
        match self {
            Fragment::Metadata { text } => html! {
                p style="color: #888888;" { (text) }
            },
            Fragment::LineBreak => html! { br; },
            Fragment::Title { heading } => html! {
                h1 style="font-size: 32px; font-weight: bold;" { (heading) }
            },
            Fragment::TitleRule => html! {
                h2 style="text-decoration: line-through; color: #cccccc;" {
                    (PreEscaped("&nbsp;".repeat(TITLE_RULE_WIDTH)))
                }
            },
            Fragment::Category { text } => html! {
                h3 { b { (text) } }
            },
            Fragment::ContentLine { icon, color, text } => html! {
                p {
                    span style=(format!("color: {color};")) { (icon.glyph()) }
                    " " (text)
                }
            },
            Fragment::Description { spans } => html! {
                p style="font-size: 13px;" {
                    @for span in spans {
                        @match span {
                            InlineSpan::Text(text) => { (text) }
                            InlineSpan::Link { url } => {
                                a href=(url) target="_blank" rel="noopener noreferrer" { (url) }
                            }
                        }
                    }
                }
            },
            Fragment::Image { alt, src } => html! {
                img alt=(alt) src=(src)
                    style=(format!("width: {IMAGE_WIDTH}px; border-radius: {IMAGE_CORNER_RADIUS}px;"));
            },
            Fragment::Quote { text } => html! {
                blockquote { (text) }
            },
            Fragment::Table { cells } => html! {
                table { tbody { tr {
                    @for cell in cells { td { (cell) } }
                } } }
            },
            Fragment::Closing { text } => html! {
                p style="text-align: center;" { (text) }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_text_is_escaped() {
        let fragment = Fragment::Quote {
            text: "<b>\"a\" & b</b>".to_string(),
        };
        assert_eq!(
            fragment.to_html(),
            "<blockquote>&lt;b&gt;&quot;a&quot; &amp; b&lt;/b&gt;</blockquote>"
        );
    }

    #[test]
    fn test_metadata_markup() {
        let fragment = Fragment::Metadata {
            text: "겨울 시즌 안내".to_string(),
        };
        assert_eq!(fragment.to_html(), "<p style=\"color: #888888;\">겨울 시즌 안내</p>");
    }

    #[test]
    fn test_line_break_markup() {
        assert_eq!(Fragment::LineBreak.to_html(), "<br>");
    }

    #[test]
    fn test_title_markup() {
        let fragment = Fragment::Title {
            heading: "1.2.3 패치 v2 업데이트".to_string(),
        };
        assert_eq!(
            fragment.to_html(),
            "<h1 style=\"font-size: 32px; font-weight: bold;\">1.2.3 패치 v2 업데이트</h1>"
        );
    }

    #[test]
    fn test_title_rule_markup() {
        let expected = format!(
            "<h2 style=\"text-decoration: line-through; color: #cccccc;\">{}</h2>",
            "&nbsp;".repeat(60)
        );
        assert_eq!(Fragment::TitleRule.to_html(), expected);
    }

    #[test]
    fn test_category_markup() {
        let fragment = Fragment::Category {
            text: "\u{a0}\u{a0}밸런스".to_string(),
        };
        assert_eq!(fragment.to_html(), "<h3><b>\u{a0}\u{a0}밸런스</b></h3>");
    }

    #[test]
    fn test_quote_markup() {
        let fragment = Fragment::Quote {
            text: "개발자 코멘트".to_string(),
        };
        assert_eq!(fragment.to_html(), "<blockquote>개발자 코멘트</blockquote>");
    }

    #[test]
    fn test_closing_markup_is_centered() {
        let fragment = Fragment::Closing {
            text: CLOSING_MESSAGES[1].to_string(),
        };
        assert_eq!(
            fragment.to_html(),
            "<p style=\"text-align: center;\">앞으로도 더 쾌적한 게임 환경과 좋은 콘텐츠로 보답하겠습니다.</p>"
        );
    }

    #[test]
    fn test_description_without_url_has_no_link() {
        let fragment = Fragment::Description {
            spans: crate::core::linkify::linkify("점검 시간이 연장되었습니다."),
        };
        let html = fragment.to_html();
        assert_eq!(html, "<p style=\"font-size: 13px;\">점검 시간이 연장되었습니다.</p>");
        assert!(!html.contains("<a"));
    }

    #[test]
    fn test_content_line_markup() {
        let fragment = Fragment::ContentLine {
            icon: IconKind::Check,
            color: "#22c55e".to_string(),
            text: "버그 수정".to_string(),
        };
        assert_eq!(
            fragment.to_html(),
            "<p><span style=\"color: #22c55e;\">✔</span> 버그 수정</p>"
        );
        assert_eq!(fragment.text(), "✔ 버그 수정");
    }

    #[test]
    fn test_description_markup_links_url() {
        let fragment = Fragment::Description {
            spans: vec![
                InlineSpan::Text("공지: ".to_string()),
                InlineSpan::Link {
                    url: "https://example.com/a?b=1&c=2".to_string(),
                },
            ],
        };
        let html = fragment.to_html();
        assert!(html.starts_with("<p style=\"font-size: 13px;\">공지: <a href="));
        assert!(html.contains("href=\"https://example.com/a?b=1&amp;c=2\""));
    }

    #[test]
    fn test_image_markup_uses_fixed_style() {
        let fragment = Fragment::Image {
            alt: "신규 맵".to_string(),
            src: "https://cdn.example.com/map.png".to_string(),
        };
        let html = fragment.to_html();
        assert_eq!(
            html,
            "<img alt=\"신규 맵\" src=\"https://cdn.example.com/map.png\" style=\"width: 600px; border-radius: 12px;\">"
        );
    }

    #[test]
    fn test_empty_table_markup() {
        let fragment = Fragment::Table { cells: Vec::new() };
        assert_eq!(fragment.to_html(), "<table><tbody><tr></tr></tbody></table>");
    }

    #[test]
    fn test_icon_labels() {
        let labels: Vec<_> = IconKind::ALL.iter().map(|icon| icon.label()).collect();
        assert_eq!(labels, vec!["plus", "minus", "check"]);
    }
}
