//! Inspect PFN bitmap fonts.
//!
//! Lists the blocks of a font, prints glyphs as pixel art, previews text and
//! exports the font as a C array for embedding in firmware.

use pfn_render::Font;
use read_pfn::FontRef;

mod array;
mod canvas;
mod print;
mod query;

use canvas::Canvas;
use print::PrettyPrinter;
use query::CodepointArg;

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = flags::Args::from_env().map_err(|e| Error(e.to_string()))?;
    let bytes = std::fs::read(&args.input)
        .map_err(|e| Error(format!("failed to read '{}': {e}", args.input.display())))?;

    if let Some(name) = &args.array {
        // exporting doesn't require the font to parse
        return export_array(name, &bytes);
    }

    let font = FontRef::new(&bytes).map_err(Error::new)?;
    let stdout = std::io::stdout();
    let mut locked = stdout.lock();
    let mut printer = PrettyPrinter::new(&mut locked);

    if let Some(CodepointArg(codepoint)) = args.glyph {
        let glyph = font
            .resolve(codepoint)
            .ok_or_else(|| Error(format!("no glyph for {codepoint} and no '?' fallback")))?;
        if glyph.codepoint() != codepoint {
            log::info!("{codepoint} is missing, showing {}", glyph.codepoint());
        }
        return printer.print_glyph(&glyph).map_err(Error::new);
    }

    if let Some(text) = &args.text {
        return preview_text(&mut printer, &font, text);
    }

    // listing is the default
    printer.print_font(&font).map_err(Error::new)
}

fn preview_text(printer: &mut PrettyPrinter, font: &FontRef, text: &str) -> Result<(), Error> {
    printer
        .print_canvas(&render_text(font, text))
        .map_err(Error::new)
}

/// Draw `text` onto a canvas exactly wide enough to hold it.
fn render_text(font: &FontRef, text: &str) -> Canvas {
    let measure = Font::from_parts(font.clone(), None::<Canvas>);
    let width = measure.text_width(text.as_bytes()).max(0) as usize;
    let canvas = Canvas::new(width, font.max_height() as usize);
    let mut font = Font::from_parts(font.clone(), Some(canvas));
    let advance = font.draw_str(text, 0, 0);
    log::debug!("rendered '{}' with advance {advance}", text.escape_default());
    // the painter was supplied above, so this is always `Some`
    font.into_painter().unwrap_or_else(|| Canvas::new(0, 0))
}

fn export_array(name: &str, bytes: &[u8]) -> Result<(), Error> {
    let stdout = std::io::stdout();
    let mut locked = stdout.lock();
    write_array(&mut locked, name, bytes)
}

fn write_array(out: &mut impl std::io::Write, name: &str, bytes: &[u8]) -> Result<(), Error> {
    if !array::is_c_identifier(name) {
        return Err(Error(format!(
            "'{}' is not a valid C identifier",
            name.escape_default()
        )));
    }
    if let Err(e) = FontRef::new(bytes) {
        log::warn!("exporting data that does not parse as a font: {e}");
    }
    array::write_c_array(out, name, bytes).map_err(Error::new)
}

#[derive(Debug, Clone)]
struct Error(String);

impl Error {
    fn new(t: impl std::fmt::Display) -> Self {
        Self(t.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for Error {}

mod flags {
    use super::CodepointArg;
    use std::path::PathBuf;

    xflags::xflags! {
        /// Inspect a PFN bitmap font
        cmd args {
            required input: PathBuf
            /// List the header and blocks (the default)
            optional -l, --list
            /// Print the glyph for a codepoint (U+XXXX, 0xXX, decimal or a character)
            optional -g, --glyph glyph: CodepointArg
            /// Render a line of text
            optional -t, --text text: String
            /// Export the file as a C array with the given name
            optional -a, --array array: String
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pfn_test_data::fonts;
    use pretty_assertions::assert_eq;

    #[test]
    fn preview_canvas_fits_text() {
        let buf = fonts::mixed();
        let font = FontRef::new(&buf).unwrap();
        let canvas = render_text(&font, "Hiあ");
        assert_eq!((canvas.width(), canvas.height()), (8 + 8 + 16, 16));
    }

    #[test]
    fn preview_draws_glyphs() {
        let buf = fonts::simple_8x8();
        let font = FontRef::new(&buf).unwrap();
        let canvas = render_text(&font, "AB");
        assert_eq!(canvas.width(), 16);
        assert!(canvas.get(3, 0));
        assert!(canvas.get(9, 0));
        assert!(!canvas.get(0, 0));
    }

    #[test]
    fn preview_of_unresolvable_text_is_empty() {
        let buf = fonts::two_blocks();
        let font = FontRef::new(&buf).unwrap();
        let canvas = render_text(&font, "ZZ");
        assert_eq!((canvas.width(), canvas.height()), (0, 16));
    }

    #[test]
    fn export_rejects_bad_identifier() {
        let buf = fonts::simple_8x8();
        let mut out = Vec::new();
        let err = write_array(&mut out, "my-font", &buf).unwrap_err();
        assert_eq!(err.to_string(), "'my-font' is not a valid C identifier");
        assert!(out.is_empty());
    }

    #[test]
    fn export_writes_any_bytes() {
        let buf = fonts::simple_8x8();
        let mut out = Vec::new();
        write_array(&mut out, "simple_font", &buf).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("const unsigned char simple_font[] = {\n"));
        assert!(text.ends_with(&format!("const unsigned int simple_font_len = {};\n", buf.len())));

        // data that isn't a font is still exported
        let mut out = Vec::new();
        write_array(&mut out, "junk", b"not a font").unwrap();
        assert!(String::from_utf8(out).unwrap().contains("junk_len = 10;"));
    }
}
