//! Small single-line edit-buffer helpers shared by the edit handlers.
//! Cursors are byte offsets kept on char boundaries.

pub(super) fn prev_boundary(buf: &str, cursor: usize) -> usize {
    let mut pos = cursor;
    while pos > 0 {
        pos -= 1;
        if buf.is_char_boundary(pos) {
            break;
        }
    }
    pos
}

pub(super) fn next_boundary(buf: &str, cursor: usize) -> usize {
    let mut pos = cursor;
    while pos < buf.len() {
        pos += 1;
        if buf.is_char_boundary(pos) {
            break;
        }
    }
    pos
}

pub(super) fn insert_char(buf: &mut String, cursor: &mut usize, c: char) {
    buf.insert(*cursor, c);
    *cursor += c.len_utf8();
}

pub(super) fn backspace(buf: &mut String, cursor: &mut usize) {
    if *cursor == 0 {
        return;
    }
    let prev = prev_boundary(buf, *cursor);
    buf.drain(prev..*cursor);
    *cursor = prev;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace_multibyte() {
        let mut buf = String::new();
        let mut cursor = 0;
        for c in "ab\u{e9}c".chars() {
            insert_char(&mut buf, &mut cursor, c);
        }
        assert_eq!(buf, "ab\u{e9}c");
        assert_eq!(cursor, buf.len());

        backspace(&mut buf, &mut cursor);
        backspace(&mut buf, &mut cursor);
        assert_eq!(buf, "ab");
        assert_eq!(cursor, 2);
    }

    #[test]
    fn boundaries_step_over_chars() {
        let buf = "a\u{e9}b";
        assert_eq!(next_boundary(buf, 1), 3);
        assert_eq!(prev_boundary(buf, 3), 1);
        assert_eq!(prev_boundary(buf, 0), 0);
        assert_eq!(next_boundary(buf, buf.len()), buf.len());
    }
}
