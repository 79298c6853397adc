use super::tokenizer::tokenize;
use super::types::Book;

/// Tokenizes and paginates raw book bytes into a [`Book`].
///
/// The input is decoded as UTF-8 (invalid sequences are replaced), then fed
/// through the tokenizer in bounded calls of `page_size` words until it is
/// exhausted. The collected words are sliced into contiguous runs of
/// `page_size` and each run is joined with single spaces.
///
/// `page_count` is `word_count / page_size` rounded up: when the word count
/// is an exact multiple of `page_size` there is no empty trailing page, and
/// empty input yields zero pages.
pub fn paginate(raw: &[u8], content_type: &str, page_size: usize) -> Book {
    assert!(page_size > 0, "page_size must be positive");

    let text = String::from_utf8_lossy(raw);
    let mut words: Vec<String> = Vec::new();

    let mut rest: &str = &text;
    while !rest.is_empty() {
        let step = tokenize(rest, page_size);
        words.extend(step.words);
        rest = &rest[step.consumed..];
    }

    let word_count = words.len();
    let page_count = word_count.div_ceil(page_size);

    let pages: Vec<String> = words.chunks(page_size).map(|run| run.join(" ")).collect();
    debug_assert_eq!(pages.len(), page_count);

    Book {
        content_type: content_type.to_string(),
        word_count,
        page_count,
        pages,
    }
}
