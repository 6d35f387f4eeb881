#![no_main]
use std::error::Error;

use libfuzzer_sys::fuzz_target;
use read_pfn::FontRef;

fn do_resolve_things(data: &[u8]) -> Result<(), Box<dyn Error>> {
    let font = FontRef::new(data)?;
    let mut scratch = vec![0u8; font.max_bitmap_len()];

    // we don't care about the result, just that we don't panic, hang, etc
    for block in font.blocks() {
        let _ = block.codepoint_range();
        for glyph in block.glyphs() {
            let _ = font.resolve(glyph.codepoint());
            glyph.copy_bitmap_to(&mut scratch)?;
            let _ = glyph.pixel(glyph.width() as u32, 0);
        }
    }
    for cp in [0u32, 0x20, 0x3F, 0x41, 0xFFFF, 0x10FFFF, u32::MAX] {
        let _ = font.resolve(cp);
    }

    Ok(())
}

fuzz_target!(|data: &[u8]| {
    let _ = do_resolve_things(data);
});
