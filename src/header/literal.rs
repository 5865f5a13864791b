//! Rendering raw file bytes as adjacent C string literals
//!
//! Each source line becomes one quoted fragment. Only `"` is escaped; every
//! other byte, backslashes included, is copied through as-is. A line that
//! ended with a newline gets a `\n` escape inside its fragment, so an
//! unterminated last line stays unterminated in the compiled string.

use std::io::{self, Write};

/// One quoted string literal, covering a single source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// The literal including its surrounding quotes
    pub quoted: Vec<u8>,
    /// Whether the source line ended with a newline
    pub terminated: bool,
}

/// Split `contents` into quoted literal fragments, one per line.
///
/// Empty input yields a single `""` fragment so the initializer is never
/// empty.
pub fn render_fragments(contents: &[u8]) -> Vec<Fragment> {
    if contents.is_empty() {
        return vec![Fragment {
            quoted: b"\"\"".to_vec(),
            terminated: false,
        }];
    }

    contents
        .split_inclusive(|&b| b == b'\n')
        .map(render_line)
        .collect()
}

fn render_line(line: &[u8]) -> Fragment {
    let (body, terminated) = match line.strip_suffix(b"\n") {
        Some(body) => (body, true),
        None => (line, false),
    };

    let mut quoted = Vec::with_capacity(body.len() + 4);
    quoted.push(b'"');
    for &b in body {
        if b == b'"' {
            quoted.push(b'\\');
        }
        quoted.push(b);
    }
    if terminated {
        quoted.extend_from_slice(b"\\n");
    }
    quoted.push(b'"');

    Fragment { quoted, terminated }
}

/// Write the initializer for one array: fragments followed by `;`.
///
/// Newline-terminated fragments each sit on their own line; an unterminated
/// final fragment is closed by the `;` directly.
pub fn write_literal<W: Write>(out: &mut W, contents: &[u8]) -> io::Result<()> {
    for fragment in render_fragments(contents) {
        out.write_all(&fragment.quoted)?;
        if fragment.terminated {
            out.write_all(b"\n")?;
        }
    }
    out.write_all(b";\n")
}
