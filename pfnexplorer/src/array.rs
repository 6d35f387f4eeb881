//! Export a font as a C array, for embedding in firmware.

use std::io::Write;

const BYTES_PER_LINE: usize = 16;

/// Write `bytes` as a `const unsigned char` array named `name`, followed by
/// a `<name>_len` constant holding its length.
pub fn write_c_array(out: &mut impl Write, name: &str, bytes: &[u8]) -> std::io::Result<()> {
    writeln!(out, "const unsigned char {name}[] = {{")?;
    for line in bytes.chunks(BYTES_PER_LINE) {
        write!(out, "   ")?;
        for byte in line {
            write!(out, " 0x{byte:02x},")?;
        }
        writeln!(out)?;
    }
    writeln!(out, "}};")?;
    writeln!(out, "const unsigned int {name}_len = {};", bytes.len())
}

/// Whether `name` can be used as a C identifier.
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
