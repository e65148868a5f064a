use crate::{
    config::model::EffectConfig,
    foundation::{core::Size, error::Recovery, math::clamp_dimension},
};

/// Size used when neither the config nor a measurement provides one.
pub const FALLBACK_SIZE: Size = Size::new(300.0, 80.0);

/// Something whose box can be measured synchronously.
pub trait ResizeSource {
    /// Current box size in px. May be degenerate; the observer clamps it.
    fn measure(&self) -> Size;
}

impl ResizeSource for Size {
    fn measure(&self) -> Size {
        *self
    }
}

/// Clamp both dimensions to at least 1 px.
pub fn clamp_size(width: f64, height: f64) -> Size {
    Size::new(clamp_dimension(width), clamp_dimension(height))
}

/// Tracks the container box for the lifetime of one mounted effect.
///
/// The first size is read synchronously on [`SizeObserver::attach`]. Later
/// notifications are coalesced: only the most recent one survives until the consumer
/// calls [`SizeObserver::take_change`].
#[derive(Clone, Debug, PartialEq)]
pub struct SizeObserver {
    current: Size,
    pending: Option<Size>,
    connected: bool,
}

impl SizeObserver {
    /// Start observing `source`.
    pub fn attach<S>(source: &S) -> Self
    where
        S: ResizeSource + ?Sized,
    {
        let measured = source.measure();
        Self {
            current: clamp_size(measured.width, measured.height),
            pending: None,
            connected: true,
        }
    }

    /// Record a resize notification. Ignored once disconnected.
    pub fn notify(&mut self, width: f64, height: f64) -> bool {
        if !self.connected {
            return false;
        }
        self.pending = Some(clamp_size(width, height));
        true
    }

    /// Consume the latest pending size if it differs from the current one.
    pub fn take_change(&mut self) -> Option<Size> {
        let next = self.pending.take()?;
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(next)
    }

    /// Last published size.
    pub fn current(&self) -> Size {
        self.current
    }

    /// Whether notifications are still accepted.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Stop observing. Returns `true` only on the first call.
    pub fn disconnect(&mut self) -> bool {
        let was = self.connected;
        self.connected = false;
        self.pending = None;
        was
    }
}

/// Geometry a displacement map should be built for.
///
/// Per dimension: the config value if set, else the measured value, else
/// [`FALLBACK_SIZE`]. A configured zero or NaN counts as unset. Unset config fields and
/// degenerate values are reported as [`Recovery`] entries; the returned size is always
/// at least 1x1.
pub fn effective_size(config: &EffectConfig, measured: Option<Size>) -> (Size, Vec<Recovery>) {
    let mut recoveries = Vec::new();

    let mut pick = |field: &'static str, configured: Option<f64>, measured: Option<f64>, fallback: f64| {
        match configured {
            Some(v) if v != 0.0 && !v.is_nan() => v,
            _ => {
                let substituted = measured.unwrap_or(fallback);
                recoveries.push(Recovery::ConfigurationGap { field, substituted });
                substituted
            }
        }
    };

    let width = pick("width", config.width, measured.map(|s| s.width), FALLBACK_SIZE.width);
    let height = pick(
        "height",
        config.height,
        measured.map(|s| s.height),
        FALLBACK_SIZE.height,
    );

    let size = clamp_size(width, height);
    if size.width != width || size.height != height {
        recoveries.push(Recovery::DegenerateGeometry { width, height });
    }
    (size, recoveries)
}

#[cfg(test)]
#[path = "../../tests/unit/observe/size.rs"]
mod tests;
