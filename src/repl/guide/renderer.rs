//! # Style Guide Renderer
//!
//! Converts the semi-structured style guide text into a flat sequence of
//! display blocks. The pass is line oriented and never looks back: each line
//! is classified on its own and the only carried state is whether a bullet
//! list is currently open.

use super::inline::InlineText;

/// Paragraph lines starting with one of these (case-insensitive) are shown as labels
pub const LABEL_PREFIXES: [&str; 4] = ["Examples:", "Instead of:", "Use:", "Rule:"];

/// Deepest nesting level a list item can have
pub const MAX_LIST_DEPTH: usize = 2;

/// Presentation hint for paragraphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphStyle {
    Plain,
    /// Emphasised lead-in such as "Examples:" or "Rule:"
    Label,
}

/// One structured unit of rendered output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayBlock {
    Heading(InlineText),
    Paragraph {
        text: InlineText,
        style: ParagraphStyle,
    },
    /// Opens a bullet list; always followed by a matching `ListEnd`
    ListStart,
    ListItem {
        depth: usize,
        text: InlineText,
    },
    ListEnd,
    Separator,
}

/// Classification of a single source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    Separator,
    Heading(&'a str),
    ListItem { depth: usize, text: &'a str },
    Paragraph { text: &'a str, style: ParagraphStyle },
}

/// Map the number of leading whitespace characters of a bullet line to a depth
pub fn list_depth(indent: usize) -> usize {
    match indent {
        0..=1 => 0,
        2..=3 => 1,
        _ => MAX_LIST_DEPTH,
    }
}

/// Classify one untrimmed source line
pub fn classify_line(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    if trimmed == "---" {
        return LineKind::Separator;
    }

    if let Some(heading) = heading_text(trimmed) {
        return LineKind::Heading(heading);
    }

    if let Some(item) = trimmed.strip_prefix("* ") {
        let indent = line.chars().take_while(|c| c.is_whitespace()).count();
        return LineKind::ListItem {
            depth: list_depth(indent),
            text: item.trim(),
        };
    }

    let style = if is_label_line(trimmed) {
        ParagraphStyle::Label
    } else {
        ParagraphStyle::Plain
    };

    LineKind::Paragraph {
        text: trimmed,
        style,
    }
}

/// The whole trimmed line must be `**...**` with no other asterisk inside
fn heading_text(trimmed: &str) -> Option<&str> {
    let inner = trimmed.strip_prefix("**")?.strip_suffix("**")?;
    if inner.is_empty() || inner.contains('*') {
        return None;
    }
    Some(inner)
}

fn is_label_line(trimmed: &str) -> bool {
    LABEL_PREFIXES.iter().any(|label| {
        trimmed
            .get(..label.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(label))
    })
}

/// Accumulates blocks while tracking the open list
#[derive(Debug, Default)]
struct BlockBuilder {
    blocks: Vec<DisplayBlock>,
    in_list: bool,
}

impl BlockBuilder {
    fn push_line(&mut self, line: &str) {
        match classify_line(line) {
            LineKind::Blank => self.close_list(),
            LineKind::Separator => {
                self.close_list();
                self.blocks.push(DisplayBlock::Separator);
            }
            LineKind::Heading(text) => {
                self.close_list();
                self.blocks.push(DisplayBlock::Heading(InlineText::parse(text)));
            }
            LineKind::ListItem { depth, text } => {
                self.open_list();
                self.blocks.push(DisplayBlock::ListItem {
                    depth,
                    text: InlineText::parse(text),
                });
            }
            LineKind::Paragraph { text, style } => {
                self.close_list();
                self.blocks.push(DisplayBlock::Paragraph {
                    text: InlineText::parse(text),
                    style,
                });
            }
        }
    }

    fn open_list(&mut self) {
        if !self.in_list {
            self.blocks.push(DisplayBlock::ListStart);
            self.in_list = true;
        }
    }

    fn close_list(&mut self) {
        if self.in_list {
            self.blocks.push(DisplayBlock::ListEnd);
            self.in_list = false;
        }
    }

    fn finish(mut self) -> Vec<DisplayBlock> {
        self.close_list();
        self.blocks
    }
}

/// Render a document into display blocks. Total over any input.
pub fn render(document: &str) -> Vec<DisplayBlock> {
    let mut builder = BlockBuilder::default();
    for line in document.lines() {
        builder.push_line(line);
    }
    let blocks = builder.finish();
    tracing::trace!("Rendered {} display blocks", blocks.len());
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::guide::inline::InlineSpan;
    use crate::repl::guide::STYLE_GUIDE_CONTENT;

    fn assert_lists_balanced(blocks: &[DisplayBlock]) {
        let mut open = false;
        for block in blocks {
            match block {
                DisplayBlock::ListStart => {
                    assert!(!open, "nested ListStart in {blocks:?}");
                    open = true;
                }
                DisplayBlock::ListEnd => {
                    assert!(open, "ListEnd without ListStart in {blocks:?}");
                    open = false;
                }
                DisplayBlock::ListItem { .. } => {
                    assert!(open, "ListItem outside a list in {blocks:?}")
                }
                _ => assert!(!open, "non-list block inside a list in {blocks:?}"),
            }
        }
        assert!(!open, "unterminated list in {blocks:?}");
    }

    #[test]
    fn heading_line_should_produce_single_heading() {
        let blocks = render("**Heading**");
        assert_eq!(
            blocks,
            vec![DisplayBlock::Heading(InlineText::plain("Heading"))]
        );
    }

    #[test]
    fn partial_bold_line_should_be_paragraph_with_inline_emphasis() {
        let blocks = render("Some **bold** text");
        assert_eq!(blocks.len(), 1);
        match &blocks[0] {
            DisplayBlock::Paragraph { text, style } => {
                assert_eq!(*style, ParagraphStyle::Plain);
                assert_eq!(
                    text.spans(),
                    &[
                        InlineSpan::Plain("Some ".to_string()),
                        InlineSpan::Strong("bold".to_string()),
                        InlineSpan::Plain(" text".to_string()),
                    ]
                );
            }
            other => panic!("Expected paragraph, got {other:?}"),
        }
    }

    #[test]
    fn heading_with_trailing_text_should_not_be_heading() {
        let blocks = render("**Expert** advice");
        assert!(matches!(blocks[0], DisplayBlock::Paragraph { .. }));
    }

    #[test]
    fn heading_with_inner_asterisk_should_not_be_heading() {
        let blocks = render("**a** and **b**");
        assert!(matches!(blocks[0], DisplayBlock::Paragraph { .. }));
        let blocks = render("**a*b**");
        assert!(matches!(blocks[0], DisplayBlock::Paragraph { .. }));
    }

    #[test]
    fn short_asterisk_runs_should_degrade_to_paragraphs() {
        for line in ["*", "**", "***", "****"] {
            let blocks = render(line);
            assert_eq!(blocks.len(), 1, "line {line:?}");
            assert!(
                matches!(blocks[0], DisplayBlock::Paragraph { .. }),
                "line {line:?} gave {blocks:?}"
            );
        }
    }

    #[test]
    fn list_depth_should_follow_leading_spaces() {
        let cases = [
            ("* item", 0),
            (" * item", 0),
            ("  * item", 1),
            ("   * item", 1),
            ("    * nested item", 2),
            ("        * very nested", 2),
        ];
        for (line, expected) in cases {
            let blocks = render(line);
            assert_eq!(blocks.len(), 3, "line {line:?}");
            match &blocks[1] {
                DisplayBlock::ListItem { depth, .. } => assert_eq!(*depth, expected, "{line:?}"),
                other => panic!("Expected list item for {line:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn list_item_text_should_be_trimmed_and_formatted() {
        let blocks = render("*   Use **Title Case** here  ");
        match &blocks[1] {
            DisplayBlock::ListItem { depth, text } => {
                assert_eq!(*depth, 0);
                assert_eq!(text.plain_text(), "Use Title Case here");
                assert!(text.has_emphasis());
            }
            other => panic!("Expected list item, got {other:?}"),
        }
    }

    #[test]
    fn consecutive_items_should_share_one_list() {
        let blocks = render("* one\n* two\n  * three");
        assert_eq!(blocks.first(), Some(&DisplayBlock::ListStart));
        assert_eq!(blocks.last(), Some(&DisplayBlock::ListEnd));
        assert_eq!(blocks.len(), 5);
    }

    #[test]
    fn list_should_close_before_separator_heading_paragraph_and_blank() {
        let doc = "* a\n---\n* b\n**Head**\n* c\nText\n* d\n\n* e";
        let blocks = render(doc);
        assert_lists_balanced(&blocks);
        let starts = blocks
            .iter()
            .filter(|b| **b == DisplayBlock::ListStart)
            .count();
        assert_eq!(starts, 5);
    }

    #[test]
    fn trailing_open_list_should_be_closed_at_end_of_input() {
        let blocks = render("Intro\n* last item");
        assert_eq!(blocks.last(), Some(&DisplayBlock::ListEnd));
    }

    #[test]
    fn separator_should_match_only_exact_dashes() {
        assert_eq!(render("  ---  "), vec![DisplayBlock::Separator]);
        assert!(matches!(
            render("----")[0],
            DisplayBlock::Paragraph { .. }
        ));
    }

    #[test]
    fn label_lines_should_be_tagged_case_insensitively() {
        for line in ["Examples:", "instead of:", "USE: this", "Rule:"] {
            match &render(line)[0] {
                DisplayBlock::Paragraph { style, .. } => {
                    assert_eq!(*style, ParagraphStyle::Label, "line {line:?}")
                }
                other => panic!("Expected paragraph, got {other:?}"),
            }
        }
        match &render("Examples (internal and external):")[0] {
            DisplayBlock::Paragraph { style, .. } => assert_eq!(*style, ParagraphStyle::Plain),
            other => panic!("Expected paragraph, got {other:?}"),
        }
    }

    #[test]
    fn blank_lines_should_produce_no_blocks() {
        assert!(render("").is_empty());
        assert!(render("\n   \n\t\n").is_empty());
    }

    #[test]
    fn crlf_input_should_classify_like_lf() {
        assert_eq!(render("**Head**\r\n* item\r\n"), render("**Head**\n* item\n"));
    }

    #[test]
    fn render_should_be_total_and_balanced_over_awkward_inputs() {
        let inputs = [
            "* ",
            "*\t item",
            "  * a\n---\n  * b",
            "**\n* x\n**",
            "* **unterminated\n* ok**",
            "\u{a0}\u{a0}* non-breaking indent",
            "* é\n    * 日本語\n**Ünïcode**",
            "---\n---\n\n",
        ];
        for input in inputs {
            assert_lists_balanced(&render(input));
        }
    }

    #[test]
    fn style_guide_should_render_expected_structure() {
        let blocks = render(STYLE_GUIDE_CONTENT);
        assert_lists_balanced(&blocks);

        let headings: Vec<String> = blocks
            .iter()
            .filter_map(|b| match b {
                DisplayBlock::Heading(text) => Some(text.plain_text()),
                _ => None,
            })
            .collect();
        assert_eq!(
            headings.first().map(String::as_str),
            Some("Video Lower Thirds – Names and Titles Formatting Guide")
        );
        assert!(headings.contains(&"US dollar amounts".to_string()));
        assert_eq!(headings.last().map(String::as_str), Some("Degrees"));

        let separators = blocks
            .iter()
            .filter(|b| **b == DisplayBlock::Separator)
            .count();
        assert_eq!(separators, 6);

        assert!(blocks.iter().any(|b| matches!(
            b,
            DisplayBlock::Paragraph {
                style: ParagraphStyle::Label,
                ..
            }
        )));
    }
}
