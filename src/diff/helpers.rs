//! Helper functions for diff parsing.

use regex::Regex;
use std::sync::LazyLock;

static HUNK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -\d+(?:,\d+)? \+(\d+)(?:,\d+)? @@").expect("hunk header regex is valid")
});

/// Null device used by git for the missing side of an added or deleted file.
pub(super) const DEV_NULL: &str = "/dev/null";

/// Parse a hunk header line and return the new-side start line.
///
/// Format: "@@ -old_start[,old_len] +new_start[,new_len] @@ [context]"
pub(super) fn parse_hunk_header(line: &str) -> Option<usize> {
    let caps = HUNK_HEADER.captures(line)?;
    caps.get(1)?.as_str().parse().ok()
}

/// Parse the path carried by a "+++ " line (marker already stripped).
///
/// Handles:
/// - "b/path/to/file" (git revision prefix)
/// - "/dev/null" (deleted file, returns None)
/// - "path\t2024-01-01 10:00:00" (plain `diff -u` timestamps)
/// - "\"b/caf\\303\\251.md\"" (git-quoted paths)
pub(super) fn parse_new_file_path(rest: &str) -> Option<String> {
    let raw = rest.split('\t').next().unwrap_or(rest);
    let path = unquote(raw);
    let path = path.strip_prefix("b/").unwrap_or(&path);

    if path == DEV_NULL {
        None
    } else {
        Some(path.to_string())
    }
}

/// Undo git's C-style quoting of unusual paths.
///
/// Unquoted input is returned as-is. Octal escapes are decoded as raw bytes
/// so multi-byte UTF-8 names survive.
fn unquote(raw: &str) -> String {
    let Some(inner) = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
    else {
        return raw.to_string();
    };

    let mut out: Vec<u8> = Vec::with_capacity(inner.len());
    let bytes = inner.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'\\' || i + 1 >= bytes.len() {
            out.push(bytes[i]);
            i += 1;
            continue;
        }

        let next = bytes[i + 1];
        match next {
            b'n' => out.push(b'\n'),
            b't' => out.push(b'\t'),
            b'r' => out.push(b'\r'),
            b'a' => out.push(0x07),
            b'b' => out.push(0x08),
            b'f' => out.push(0x0c),
            b'v' => out.push(0x0b),
            b'0'..=b'7' => {
                let digits: Vec<u8> = bytes[i + 1..]
                    .iter()
                    .take(3)
                    .take_while(|b| (b'0'..=b'7').contains(*b))
                    .copied()
                    .collect();
                let value = digits
                    .iter()
                    .fold(0u32, |acc, d| acc * 8 + u32::from(d - b'0'));
                match u8::try_from(value) {
                    Ok(byte) => out.push(byte),
                    // Not a byte: keep the escape as written
                    Err(_) => out.extend_from_slice(&bytes[i..i + 1 + digits.len()]),
                }
                i += 1 + digits.len();
                continue;
            }
            other => out.push(other),
        }
        i += 2;
    }

    String::from_utf8_lossy(&out).into_owned()
}
