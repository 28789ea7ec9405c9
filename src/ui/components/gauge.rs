use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols,
    widgets::Widget,
};

/// Single-ratio progress bar with eighth-block resolution at the head.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CustomGauge {
    ratio: f64,
    use_unicode: bool,
    played_style: Style,
    remaining_style: Style,
}

impl CustomGauge {
    /// Out-of-range and non-finite ratios are clamped into `[0, 1]`.
    pub fn ratio(mut self, ratio: f64) -> Self {
        self.ratio = if ratio.is_finite() {
            ratio.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self
    }

    pub const fn use_unicode(mut self, use_unicode: bool) -> Self {
        self.use_unicode = use_unicode;
        self
    }

    pub fn played_style<S: Into<Style>>(mut self, style: S) -> Self {
        self.played_style = style.into();
        self
    }

    pub fn remaining_style<S: Into<Style>>(mut self, style: S) -> Self {
        self.remaining_style = style.into();
        self
    }
}

fn get_unicode_block(frac: f64) -> &'static str {
    match (frac * 8.0).round() as u16 {
        0 => " ",
        1 => symbols::block::ONE_EIGHTH,
        2 => symbols::block::ONE_QUARTER,
        3 => symbols::block::THREE_EIGHTHS,
        4 => symbols::block::HALF,
        5 => symbols::block::FIVE_EIGHTHS,
        6 => symbols::block::THREE_QUARTERS,
        7 => symbols::block::SEVEN_EIGHTHS,
        _ => symbols::block::FULL,
    }
}

impl Widget for CustomGauge {
    fn render(self, inner: Rect, buf: &mut Buffer) {
        if inner.is_empty() {
            return;
        }

        let played_pos = inner.width as f64 * self.ratio;

        for y in inner.top()..inner.bottom() {
            for x in inner.left()..inner.right() {
                let pos = (x - inner.left()) as f64;

                let (symbol, style) = if pos < played_pos {
                    let symbol = if self.use_unicode && pos + 1.0 > played_pos {
                        get_unicode_block(played_pos - pos)
                    } else {
                        symbols::block::FULL
                    };
                    (symbol, self.played_style)
                } else if self.use_unicode {
                    (symbols::line::HORIZONTAL, self.remaining_style)
                } else {
                    (symbols::block::FULL, self.remaining_style)
                };

                buf[(x, y)].set_symbol(symbol).set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_proportionally() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        CustomGauge::default().ratio(0.5).render(area, &mut buf);

        let full = (0..10)
            .filter(|&x| buf[(x, 0)].symbol() == symbols::block::FULL)
            .count();
        assert_eq!(full, 10);

        let mut buf = Buffer::empty(area);
        CustomGauge::default()
            .ratio(0.5)
            .use_unicode(true)
            .render(area, &mut buf);
        let full = (0..10)
            .filter(|&x| buf[(x, 0)].symbol() == symbols::block::FULL)
            .count();
        assert_eq!(full, 5);
    }

    #[test]
    fn ratio_is_clamped() {
        assert_eq!(CustomGauge::default().ratio(1.5).ratio, 1.0);
        assert_eq!(CustomGauge::default().ratio(f64::NAN).ratio, 0.0);
    }
}
