use std::collections::VecDeque;

/// Moving average filter.
///
/// Every retained sample carries the same weight, so a stale reading is
/// fully forgotten after `window_size` further pushes.
#[derive(Debug, Clone)]
pub struct MovingAverageFilter {
    window_size: usize,
    history: VecDeque<f64>,
}

impl MovingAverageFilter {
    /// Create a filter averaging the last `window_size` angles
    ///
    /// # Panics
    ///
    /// Panics if `window_size` is zero
    #[must_use]
    pub fn new(window_size: usize) -> Self {
        assert!(window_size > 0, "Window size must be greater than 0");
        Self {
            window_size,
            history: VecDeque::with_capacity(window_size),
        }
    }

    /// Add a raw angle and return the mean of the current window
    pub fn push(&mut self, raw: f64) -> f64 {
        if self.history.len() >= self.window_size {
            self.history.pop_front();
        }
        self.history.push_back(raw);

        self.mean()
    }

    /// Mean of the current window, `None` before the first push
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        if self.history.is_empty() {
            None
        } else {
            Some(self.mean())
        }
    }

    /// Forget all history
    pub fn reset(&mut self) {
        self.history.clear();
    }

    #[must_use]
    pub const fn window_size(&self) -> usize {
        self.window_size
    }

    /// Number of angles currently held
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Retained angles, oldest first
    pub fn history(&self) -> impl Iterator<Item = f64> + '_ {
        self.history.iter().copied()
    }

    #[allow(clippy::cast_precision_loss)] // Window sizes are tiny
    fn mean(&self) -> f64 {
        self.history.iter().sum::<f64>() / self.history.len() as f64
    }
}
