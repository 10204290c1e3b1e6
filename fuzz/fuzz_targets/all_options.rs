#![no_main]

use libfuzzer_sys::fuzz_target;

use dollarmath::{markdown_to_html, Options};

fuzz_target!(|input: (&str, Options)| {
    let (s, options) = input;
    markdown_to_html(s, &options);
});
