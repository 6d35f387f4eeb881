#![no_main]
use libfuzzer_sys::fuzz_target;
use pfn_render::{Font, GlyphBitmap};

// the first byte is the length of the text; the font follows the text
fn split_input(data: &[u8]) -> Option<(&[u8], &[u8])> {
    let (len, rest) = data.split_first()?;
    let len = (*len as usize).min(rest.len());
    Some(rest.split_at(len))
}

fuzz_target!(|data: &[u8]| {
    let Some((text, font_data)) = split_input(data) else {
        return;
    };
    let painter = |glyph: &GlyphBitmap<'_>, _x: i32, _y: i32| {
        assert!(glyph.data().len() <= glyph.words().len() * 4);
    };
    if let Ok(mut font) = Font::with_painter(font_data, painter) {
        let width = font.text_width(text);
        assert_eq!(font.draw_string(text, 0, 0), width);
    }
});
