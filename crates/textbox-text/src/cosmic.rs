use cosmic_text::{Attrs, Buffer, FontSystem, Metrics, Shaping};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;

use crate::FontMetrics;

static FONT_SYSTEM: OnceCell<Mutex<FontSystem>> = OnceCell::new();

fn font_system() -> &'static Mutex<FontSystem> {
    FONT_SYSTEM.get_or_init(|| {
        log::debug!("loading system fonts");
        Mutex::new(FontSystem::new())
    })
}

/// Shaped measurement through cosmic-text, using the system font database.
///
/// The `FontSystem` is shared process-wide and created on first use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CosmicMetrics {
    px: f32,
    line_height: f32,
}

impl CosmicMetrics {
    pub fn new(px: f32) -> Self {
        Self {
            px,
            line_height: (px * 1.3).ceil(),
        }
    }
}

impl FontMetrics for CosmicMetrics {
    fn font_size(&self) -> f32 {
        self.px
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }

    fn text_width(&self, text: &str) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let mut fs = font_system().lock();
        let mut buf = Buffer::new(&mut fs, Metrics::new(self.px, self.line_height));
        {
            let mut b = buf.borrow_with(&mut fs);
            b.set_size(None, None);
            b.set_text(text, &Attrs::new(), Shaping::Advanced, None);
            b.shape_until_scroll(true);
        }

        let width = buf
            .layout_runs()
            .map(|run| run.line_w)
            .fold(0.0f32, f32::max);
        if width == 0.0 {
            log::warn!("no glyphs shaped for {} bytes of text", text.len());
        }
        width
    }
}
