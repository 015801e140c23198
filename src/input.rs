// Pure pointer math for the DOM front-end. No web_sys here so the host-side
// tests can include this file directly.

/// Bounding box of the track element in client pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl TrackRect {
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Pointer position as a percentage along the track axis.
///
/// Horizontal tracks measure from the left edge, vertical tracks from the
/// bottom edge. The result is not clamped; the engine clamps coordinates.
/// A zero-sized track yields NaN, which the engine ignores.
#[inline]
pub fn track_percent(rect: &TrackRect, client_x: f64, client_y: f64, horizontal: bool) -> f64 {
    if horizontal {
        if rect.width <= 0.0 {
            return f64::NAN;
        }
        (client_x - rect.left) / rect.width * 100.0
    } else {
        if rect.height <= 0.0 {
            return f64::NAN;
        }
        (rect.bottom() - client_y) / rect.height * 100.0
    }
}

/// Index stored in a `data-id` or `data-mark` attribute.
#[inline]
pub fn parse_index_attr(raw: &str) -> Option<usize> {
    raw.trim().parse().ok()
}

/// Inline style placing an element at `percent` along the axis.
pub fn position_style(percent: f64, horizontal: bool) -> String {
    if horizontal {
        format!("left: {:.4}%", percent)
    } else {
        format!("bottom: {:.4}%", percent)
    }
}

/// Inline style for the progress bar spanning `from..to` percent.
pub fn span_style(from: f64, to: f64, horizontal: bool) -> String {
    let len = (to - from).max(0.0);
    if horizontal {
        format!("left: {:.4}%; width: {:.4}%", from, len)
    } else {
        format!("bottom: {:.4}%; height: {:.4}%", from, len)
    }
}

/// Tooltip and scale label text: integers without a fractional part,
/// everything else with at most four decimals and no trailing zeros.
pub fn format_value(v: f64) -> String {
    if v.fract() == 0.0 {
        return format!("{}", v as i64);
    }
    let s = format!("{:.4}", v);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
