//! pretty printing implementation

use std::io::Write;

use ansi_term::{Color, Style};
use read_pfn::{Block, FontRef, GlyphRef};

use crate::canvas::Canvas;

const SET: &str = "██";
const UNSET: &str = "··";

pub struct PrettyPrinter<'a> {
    is_tty: bool,
    writer: &'a mut (dyn std::io::Write + 'a),
}

impl std::io::Write for PrettyPrinter<'_> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

impl<'a> PrettyPrinter<'a> {
    pub fn new(writer: &'a mut (dyn std::io::Write + 'a)) -> Self {
        PrettyPrinter {
            is_tty: atty::is(atty::Stream::Stdout),
            writer,
        }
    }

    #[cfg(test)]
    fn plain(writer: &'a mut (dyn std::io::Write + 'a)) -> Self {
        PrettyPrinter {
            is_tty: false,
            writer,
        }
    }

    fn print_with_style(
        &mut self,
        style: Style,
        f: impl FnOnce(&mut PrettyPrinter) -> std::io::Result<()>,
    ) -> std::io::Result<()> {
        if !self.is_tty {
            return f(self);
        }
        write!(self, "{}", style.prefix())?;
        f(self)?;
        write!(self, "{}", style.suffix())
    }

    pub fn print_font(&mut self, font: &FontRef) -> std::io::Result<()> {
        self.print_with_style(Color::Cyan.bold(), |this| {
            write!(this, "{}", String::from_utf8_lossy(font.name()))
        })?;
        writeln!(
            self,
            " (version {}, {} bytes)",
            font.version(),
            font.data().len()
        )?;
        let index = font.block_index();
        writeln!(
            self,
            "{} blocks, {} glyphs, max glyph {}x{}",
            index.num_blocks, index.num_glyphs, index.max_width, index.max_height
        )?;
        writeln!(self)?;
        writeln!(self, "  #  Offset   Size  CP  Attr  Glyphs  Range")?;
        writeln!(self, "-----------------------------------------------------")?;
        for (i, block) in font.blocks().enumerate() {
            self.print_block(i, &block)?;
        }
        Ok(())
    }

    fn print_block(&mut self, index: usize, block: &Block) -> std::io::Result<()> {
        write!(
            self,
            "{index:>3}  0x{:05X} {:>2}x{:<3} {:>2}  0x{:02X}  {:>6}  ",
            block.offset(),
            block.width(),
            block.height(),
            block.codepoint_size().byte_len(),
            block.attribute(),
            block.num_glyphs(),
        )?;
        match block.codepoint_range() {
            Some(range) => writeln!(self, "{}..={}", range.start(), range.end()),
            None => self.print_with_style(Color::Fixed(243).italic(), |this| {
                writeln!(this, "empty")
            }),
        }
    }

    pub fn print_glyph(&mut self, glyph: &GlyphRef) -> std::io::Result<()> {
        self.print_with_style(Color::Yellow.into(), |this| {
            write!(this, "{}", glyph.codepoint())
        })?;
        write!(self, " {}x{}", glyph.width(), glyph.height())?;
        if let Some(c) = glyph.codepoint().to_char().filter(|c| !c.is_control()) {
            write!(self, " '{c}'")?;
        }
        writeln!(self)?;
        for y in 0..glyph.height() as u32 {
            for x in 0..glyph.width() as u32 {
                self.print_pixel(glyph.pixel(x, y))?;
            }
            writeln!(self)?;
        }
        Ok(())
    }

    pub fn print_canvas(&mut self, canvas: &Canvas) -> std::io::Result<()> {
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                self.print_pixel(canvas.get(x, y))?;
            }
            writeln!(self)?;
        }
        Ok(())
    }

    fn print_pixel(&mut self, set: bool) -> std::io::Result<()> {
        if set {
            self.write_all(SET.as_bytes())
        } else {
            self.print_with_style(Color::Fixed(238).into(), |this| {
                this.write_all(UNSET.as_bytes())
            })
        }
    }
}
