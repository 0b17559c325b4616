//! Patch note builder
//!
//! Accumulates rendered fragments in submission order. After every operation
//! the registered update handler receives the whole document.

use super::fragment::{
    Fragment, IconKind, CATEGORY_INDENT, CLOSING_BLANK_LINES, CLOSING_MESSAGES, METADATA_SUFFIX,
    TITLE_SUFFIX,
};
use super::linkify::linkify;

/// Callback invoked with the full document after each append
pub type UpdateHandler = Box<dyn FnMut(&[Fragment])>;

/// Append-only patch note document with one operation per fragment kind
#[derive(Default)]
pub struct PatchNoteBuilder {
    /// Fragments in output order
    fragments: Vec<Fragment>,
    /// Update handler
    on_update: Option<UpdateHandler>,
}

impl std::fmt::Debug for PatchNoteBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatchNoteBuilder")
            .field("fragments", &self.fragments)
            .field("has_handler", &self.on_update.is_some())
            .finish()
    }
}

impl PatchNoteBuilder {
    /// Create an empty builder without a handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder that reports to `handler`
    pub fn with_handler(handler: impl FnMut(&[Fragment]) + 'static) -> Self {
        Self {
            fragments: Vec::new(),
            on_update: Some(Box::new(handler)),
        }
    }

    /// Register the update handler, replacing any previous one
    #[allow(dead_code)]
    pub fn set_handler(&mut self, handler: impl FnMut(&[Fragment]) + 'static) {
        self.on_update = Some(Box::new(handler));
    }

    /// The document so far
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Append the fragments of one operation and notify once
    fn append<const N: usize>(&mut self, operation: &'static str, new: [Fragment; N]) {
        self.fragments.extend(new);
        tracing::debug!(
            "Appended {} fragment(s) for {}, document has {}",
            N,
            operation,
            self.fragments.len()
        );

        if let Some(handler) = self.on_update.as_mut() {
            handler(&self.fragments);
        }
    }

    /// Descriptive block followed by a blank line
    pub fn metadata(&mut self, content: &str) {
        self.append("metadata", [
            Fragment::Metadata {
                text: format!("{content}{METADATA_SUFFIX}"),
            },
            Fragment::LineBreak,
        ]);
    }

    pub fn line_break(&mut self) {
        self.append("line-break", [Fragment::LineBreak]);
    }

    /// `"{content} {version} 업데이트"` heading followed by the spacer rule
    pub fn title(&mut self, content: &str, version: &str) {
        self.append("title", [
            Fragment::Title {
                heading: format!("{content} {version}{TITLE_SUFFIX}"),
            },
            Fragment::TitleRule,
        ]);
    }

    pub fn category(&mut self, content: &str) {
        self.append("category", [Fragment::Category {
            text: format!("{CATEGORY_INDENT}{content}"),
        }]);
    }

    pub fn content_line(&mut self, icon: IconKind, color: &str, content: &str) {
        self.append("content-line", [Fragment::ContentLine {
            icon,
            color: color.to_string(),
            text: content.to_string(),
        }]);
    }

    /// Small paragraph; only the first URL becomes a link
    pub fn description(&mut self, content: &str) {
        self.append("description", [Fragment::Description {
            spans: linkify(content),
        }]);
    }

    pub fn image(&mut self, alt: &str, src: &str) {
        self.append("image", [Fragment::Image {
            alt: alt.to_string(),
            src: src.to_string(),
        }]);
    }

    pub fn quote(&mut self, content: &str) {
        self.append("quote", [Fragment::Quote {
            text: content.to_string(),
        }]);
    }

    /// One fragment holding the cells in order, even when there are none
    pub fn table<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.append("table", [Fragment::Table {
            cells: cells.into_iter().map(Into::into).collect(),
        }]);
    }

    /// Blank lines and the closing messages
    pub fn finish(&mut self) {
        let [first, second] = CLOSING_MESSAGES;
        let mut tail: [Fragment; CLOSING_BLANK_LINES + 2] =
            std::array::from_fn(|_| Fragment::LineBreak);
        tail[CLOSING_BLANK_LINES] = Fragment::Closing {
            text: first.to_string(),
        };
        tail[CLOSING_BLANK_LINES + 1] = Fragment::Closing {
            text: second.to_string(),
        };
        self.append("final", tail);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::core::linkify::InlineSpan;

    fn recording_builder() -> (PatchNoteBuilder, Rc<RefCell<Vec<Vec<Fragment>>>>) {
        let snapshots = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&snapshots);
        let builder = PatchNoteBuilder::with_handler(move |fragments| {
            sink.borrow_mut().push(fragments.to_vec());
        });
        (builder, snapshots)
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured_logs(run: impl FnOnce()) -> String {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, run);
        let bytes = logs.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_append_logs_operation_name() {
        let output = captured_logs(|| {
            let mut builder = PatchNoteBuilder::new();
            builder.finish();
            builder.metadata("겨울 시즌");
        });

        assert!(output.contains("Appended 9 fragment(s) for final, document has 9"));
        assert!(output.contains("Appended 2 fragment(s) for metadata, document has 11"));
        assert!(!output.contains("for line-break"));
    }

    #[test]
    fn test_fragment_counts_per_kind() {
        let mut builder = PatchNoteBuilder::new();

        builder.metadata("겨울 시즌");
        assert_eq!(builder.len(), 2);
        builder.line_break();
        assert_eq!(builder.len(), 3);
        builder.title("1.2.3 패치", "v2");
        assert_eq!(builder.len(), 5);
        builder.category("신규 콘텐츠");
        assert_eq!(builder.len(), 6);
        builder.content_line(IconKind::Plus, "#3b82f6", "신규 던전 추가");
        assert_eq!(builder.len(), 7);
        builder.description("안내 https://example.com");
        assert_eq!(builder.len(), 8);
        builder.image("던전 입구", "https://cdn.example.com/a.png");
        assert_eq!(builder.len(), 9);
        builder.quote("개발자 코멘트");
        assert_eq!(builder.len(), 10);
        builder.table(["a", "b"]);
        assert_eq!(builder.len(), 11);
        builder.finish();
        assert_eq!(builder.len(), 20);
    }

    #[test]
    fn test_title_scenario() {
        let mut builder = PatchNoteBuilder::new();
        builder.title("1.2.3 패치", "v2");

        assert_eq!(builder.len(), 2);
        assert!(builder.fragments()[0].text().contains("1.2.3 패치 v2 업데이트"));
        assert_eq!(builder.fragments()[1], Fragment::TitleRule);
    }

    #[test]
    fn test_finish_on_empty_document() {
        let mut builder = PatchNoteBuilder::new();
        builder.finish();

        let fragments = builder.fragments();
        assert_eq!(fragments.len(), 9);
        assert!(fragments[..7].iter().all(|f| *f == Fragment::LineBreak));
        assert_eq!(fragments[7].text(), CLOSING_MESSAGES[0]);
        assert_eq!(
            fragments[8].text(),
            "앞으로도 더 쾌적한 게임 환경과 좋은 콘텐츠로 보답하겠습니다."
        );
    }

    #[test]
    fn test_metadata_template() {
        let mut builder = PatchNoteBuilder::new();
        builder.metadata("3월 정기 점검");

        assert_eq!(
            builder.fragments()[0].text(),
            "3월 정기 점검 업데이트 내용을 안내해 드립니다. 아래 패치노트를 확인해 주세요."
        );
        assert_eq!(builder.fragments()[1], Fragment::LineBreak);
    }

    #[test]
    fn test_category_is_indented() {
        let mut builder = PatchNoteBuilder::new();
        builder.category("밸런스");
        assert_eq!(builder.fragments()[0].text(), "\u{a0}\u{a0}밸런스");
    }

    #[test]
    fn test_table_keeps_cell_order() {
        let mut builder = PatchNoteBuilder::new();
        builder.table(vec!["a".to_string(), "b".to_string(), "c".to_string()]);

        assert_eq!(
            builder.fragments()[0],
            Fragment::Table {
                cells: vec!["a".to_string(), "b".to_string(), "c".to_string()]
            }
        );
    }

    #[test]
    fn test_empty_table_still_appends() {
        let mut builder = PatchNoteBuilder::new();
        builder.table(Vec::<String>::new());

        assert_eq!(builder.len(), 1);
        assert_eq!(builder.fragments()[0], Fragment::Table { cells: Vec::new() });
    }

    #[test]
    fn test_empty_inputs_are_accepted() {
        let mut builder = PatchNoteBuilder::new();
        builder.title("", "");
        builder.image("", "");
        builder.description("");

        assert_eq!(builder.len(), 4);
        assert_eq!(builder.fragments()[0].text(), "  업데이트");
        assert_eq!(builder.fragments()[3], Fragment::Description { spans: Vec::new() });
    }

    #[test]
    fn test_description_links_first_url() {
        let mut builder = PatchNoteBuilder::new();
        builder.description("a http://one.example b http://two.example");

        let Fragment::Description { spans } = &builder.fragments()[0] else {
            panic!("expected description");
        };
        assert_eq!(spans.len(), 3);
        assert_eq!(
            spans[1],
            InlineSpan::Link {
                url: "http://one.example".to_string()
            }
        );
        assert_eq!(spans[2], InlineSpan::Text(" b http://two.example".to_string()));
    }

    #[test]
    fn test_handler_sees_growing_prefix() {
        let (mut builder, snapshots) = recording_builder();
        builder.title("봄 업데이트", "1.0");
        builder.category("신규");
        builder.line_break();
        builder.finish();

        let snapshots = snapshots.borrow();
        assert_eq!(snapshots.len(), 4);
        assert_eq!(
            snapshots.iter().map(Vec::len).collect::<Vec<_>>(),
            vec![2, 3, 4, 13]
        );
        for pair in snapshots.windows(2) {
            assert!(pair[1].starts_with(&pair[0]));
        }
        assert_eq!(snapshots.last().map(Vec::as_slice), Some(builder.fragments()));
    }

    #[test]
    fn test_append_order_is_call_order() {
        let mut builder = PatchNoteBuilder::new();
        builder.quote("첫째");
        builder.line_break();
        builder.quote("둘째");

        let kinds: Vec<_> = builder.fragments().iter().map(Fragment::kind).collect();
        assert_eq!(kinds, vec!["quote", "line-break", "quote"]);
        assert_eq!(builder.fragments()[2].text(), "둘째");
    }

    #[test]
    fn test_set_handler_replaces_previous() {
        let (mut builder, first) = recording_builder();
        builder.line_break();

        let second = Rc::new(RefCell::new(0usize));
        let counter = Rc::clone(&second);
        builder.set_handler(move |fragments| *counter.borrow_mut() = fragments.len());
        builder.line_break();

        assert_eq!(first.borrow().len(), 1);
        assert_eq!(*second.borrow(), 2);
    }
}
