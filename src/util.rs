// Small helpers shared by the model and the view

/// Uniform source in `[0, 1)`; injected so game rules run without a browser.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// `Math.random()` from the host page.
#[derive(Default, Debug, Clone, Copy)]
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Picks an index in `0..len` from a uniform sample.
pub fn pick_index(sample: f64, len: usize) -> usize {
    ((sample * len as f64).floor() as usize).min(len.saturating_sub(1))
}
