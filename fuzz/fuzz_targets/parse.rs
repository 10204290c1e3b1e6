#![no_main]

use libfuzzer_sys::fuzz_target;

use dollarmath::markdown_it::Node;
use dollarmath::{parse_document, MathBlock, MathInline};

// Math node content never carries surrounding whitespace.
fn check(node: &Node) {
    if let Some(math) = node.cast::<MathBlock>() {
        assert_eq!(math.content, math.content.trim());
        assert!(math.map.start < math.map.end);
    }
    if let Some(math) = node.cast::<MathInline>() {
        assert_eq!(math.content, math.content.trim());
    }
    for child in &node.children {
        check(child);
    }
}

fuzz_target!(|s: &str| {
    check(&parse_document(s, &Default::default()));
});
