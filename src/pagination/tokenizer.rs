use super::{MAX_WORDS, MAX_WORD_LEN};

/// Result of one bounded tokenizer invocation.
///
/// `consumed` is the number of bytes of the input that were scanned; the
/// caller resumes with `&text[consumed..]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizeStep {
    pub words: Vec<String>,
    pub consumed: usize,
}

/// Scans `text` into at most `max_words` words (capped at [`MAX_WORDS`] per
/// invocation).
///
/// A word ends at any Unicode whitespace character (the whitespace itself is
/// not part of the word). A carriage return ends the word *and* the call;
/// an immediately following line feed is consumed with it, so CRLF counts as
/// one boundary. Runs of whitespace emit no empty words. Words are capped at
/// [`MAX_WORD_LEN`] code points: excess code points up to the next boundary
/// are dropped.
///
/// Pure function over its inputs. An unterminated buffer at end of input is
/// flushed as a final word if non-empty.
pub fn tokenize(text: &str, max_words: usize) -> TokenizeStep {
    let max_words = max_words.min(MAX_WORDS);
    let mut words = Vec::new();
    let mut buffer = String::new();
    let mut buffer_len = 0usize;
    let mut consumed = 0usize;

    if max_words == 0 {
        return TokenizeStep { words, consumed };
    }

    let mut chars = text.char_indices().peekable();
    while let Some((pos, ch)) = chars.next() {
        if ch == '\r' {
            consumed = pos + ch.len_utf8();
            // CRLF is a single boundary.
            if let Some(&(lf_pos, '\n')) = chars.peek() {
                consumed = lf_pos + 1;
            }
            if !buffer.is_empty() {
                words.push(std::mem::take(&mut buffer));
            }
            return TokenizeStep { words, consumed };
        }

        if ch.is_whitespace() {
            consumed = pos + ch.len_utf8();
            if !buffer.is_empty() {
                words.push(std::mem::take(&mut buffer));
                buffer_len = 0;
                if words.len() == max_words {
                    return TokenizeStep { words, consumed };
                }
            }
            continue;
        }

        if buffer_len < MAX_WORD_LEN {
            buffer.push(ch);
            buffer_len += 1;
        }
        consumed = pos + ch.len_utf8();
    }

    if !buffer.is_empty() {
        words.push(buffer);
    }
    TokenizeStep { words, consumed }
}
