use super::*;
use ntest::test_case;
use pretty_assertions::assert_eq;

#[test_case("$$\n x^2 \n$$", "<math>x^2</math>\n")]
#[test_case("$$ x^2 $$", "<math>x^2</math>\n")]
#[test_case("$$x$$\n", "<math>x</math>\n")]
#[test_case("$$\na\nb\n$$\n", "<math>a\nb</math>\n")]
#[test_case("$$ a\nb\nc $$", "<math>a\nb\nc</math>\n")]
#[test_case("  $$\n  x\n  $$\n", "<math>x</math>\n")]
#[test_case("$$\na < b\n$$\n", "<math>a &lt; b</math>\n")]
#[test_case("$$\n$$\n", "<math></math>\n")]
#[test_case(
    "text\n$$\nx\n$$\n",
    "<p>text</p>\n<math>x</math>\n"
)]
#[test_case(
    "$$\nx\n$$\nafter\n",
    "<math>x</math>\n<p>after</p>\n"
)]
fn math_block_html(markdown: &str, html: &str) {
    html_opts!([], markdown, &math_markup(html, "display"));
}

/// The math blocks of `input`, in document order.
fn blocks(input: &str) -> Vec<MathBlock> {
    let root = parse_document(input, &Options::default());
    find_all::<MathBlock>(&root).into_iter().cloned().collect()
}

#[test]
fn multi_line_node() {
    let root = parse_document("$$\n x^2 \n$$", &Options::default());
    assert_eq!(root.children.len(), 1);

    let math = root.children[0].cast::<MathBlock>().unwrap();
    assert_eq!(math.content, "x^2");
    assert_eq!(math.markup, "$$");
    assert_eq!(math.map, LineSpan { start: 0, end: 3 });
    assert_eq!(math.map.len(), 3);
    assert_eq!(math.rendered, None);
}

#[test]
fn single_line_node() {
    let math = blocks("$$ x^2 $$");
    assert_eq!(math.len(), 1);
    assert_eq!(math[0].content, "x^2");
    assert_eq!(math[0].map, LineSpan { start: 0, end: 1 });
}

#[test]
fn map_after_paragraph() {
    let root = parse_document("para\n\n$$\nx\n$$\n", &Options::default());
    assert_eq!(root.children.len(), 2);
    let math = root.children[1].cast::<MathBlock>().unwrap();
    assert_eq!(math.map, LineSpan { start: 2, end: 5 });
}

#[test]
fn unterminated_runs_to_end() {
    let math = blocks("$$\na\n\nb\n");
    assert_eq!(math.len(), 1);
    assert_eq!(math[0].content, "a\n\nb");
    assert_eq!(math[0].map, LineSpan { start: 0, end: 4 });
}

#[test]
fn relative_indentation_survives() {
    let math = blocks("$$\n  a\n    b\n$$");
    assert_eq!(math[0].content, "a\n  b");

    let math = blocks("$$\n\\begin{cases}\n  1 & x \\\\\n  0\n\\end{cases}\n$$\n");
    assert_eq!(math[0].content, "\\begin{cases}\n  1 & x \\\\\n  0\n\\end{cases}");
}

#[test]
fn first_and_last_partial_lines() {
    let math = blocks("$$ a\n  b\nc $$\n");
    assert_eq!(math[0].content, "a\n  b\nc");
}

#[test]
fn in_blockquote() {
    html(
        "> $$\n> x\n> $$\n",
        &math_markup(
            "<blockquote>\n<math>x</math>\n</blockquote>\n",
            "display",
        ),
    );
}

#[test]
fn unterminated_in_blockquote() {
    html(
        "> $$\n> x\n\nafter\n",
        &math_markup(
            "<blockquote>\n<math>x</math>\n</blockquote>\n<p>after</p>\n",
            "display",
        ),
    );
}

#[test]
fn interrupts_blockquote_laziness() {
    html(
        "> a\n$$\nx\n$$\n",
        &math_markup(
            "<blockquote>\n<p>a</p>\n</blockquote>\n<math>x</math>\n",
            "display",
        ),
    );
}

#[test]
fn in_list_item() {
    html(
        "- $$\n  x\n  $$\n- y\n",
        &math_markup(
            concat!(
                "<ul>\n",
                "<li>\n",
                "<math>x</math>\n",
                "</li>\n",
                "<li>y</li>\n",
                "</ul>\n"
            ),
            "display",
        ),
    );
}

#[test]
fn ends_at_dedent() {
    html(
        "- $$\n  x\ny\n",
        &math_markup(
            concat!(
                "<ul>\n",
                "<li>\n",
                "<math>x</math>\n",
                "</li>\n",
                "</ul>\n",
                "<p>y</p>\n"
            ),
            "display",
        ),
    );

    let math = blocks("- $$\n  x\ny\n");
    assert_eq!(math.len(), 1);
    assert_eq!(math[0].content, "x");
    assert_eq!(math[0].map, LineSpan { start: 0, end: 2 });
}

#[test]
fn tab_indent_is_measured_in_columns() {
    // A tab reaches column 4, past the list item's content column.
    let math = blocks("- $$\n\tx\n  $$\n");
    assert_eq!(math.len(), 1);
    assert_eq!(math[0].content, "x");
    assert_eq!(math[0].map, LineSpan { start: 0, end: 3 });
}

#[test]
fn disabled() {
    html_opts!(
        [extension.math_block = false, extension.math_inline = false],
        "$$\nx\n$$\n",
        "<p>$$\nx\n$$</p>\n"
    );
}

#[test]
fn disabled_block_keeps_inline_literal() {
    // `$$` is never an inline delimiter.
    html_opts!(
        [extension.math_block = false],
        "$$x$$\n",
        "<p>$$x$$</p>\n"
    );
}

#[test]
fn block_end_next_line() {
    assert_eq!(BlockEnd::Closed { line: 2 }.next_line(), 3);
    assert_eq!(BlockEnd::Unterminated { line: 2 }.next_line(), 2);
}
