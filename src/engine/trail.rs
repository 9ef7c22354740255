use crate::config::FadeConfig;
use crate::foundation::core::{Lerp, Rgb};

/// One fade overlay: redraw `history[..keep]` in `color`, covering the
/// older portion of the base trail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeOverlay {
    /// Number of leading history points the overlay spans.
    pub keep: usize,
    pub color: Rgb,
}

/// Plan the per-frame fade overlays for a trail of `history_len` points.
///
/// Overlay `i` truncates `fade_length * (i + 1)` points off the end and is
/// colored `lerp(young, old, i / fade_steps)`. Each successive overlay is
/// strictly shorter than the previous, so drawing them in order leaves the
/// newest samples in the base color and grades the rest toward `old`.
///
/// The result is transient: it is rebuilt from scratch every frame and the
/// driver owns disposal of the previous frame's drawables.
pub fn plan_overlays(history_len: usize, fade: &FadeConfig) -> Vec<FadeOverlay> {
    let mut overlays = Vec::with_capacity(fade.steps);
    for i in 0..fade.steps {
        let cut = fade.length * (i + 1);
        if history_len <= cut {
            break;
        }
        let t = (i as f64) / (fade.steps as f64);
        overlays.push(FadeOverlay {
            keep: history_len - cut,
            color: Rgb::lerp(&fade.young, &fade.old, t),
        });
    }
    overlays
}
