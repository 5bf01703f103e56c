//! Repeating timer with explicit cancellation

/// Fires every `delay_ms` of advanced time until cancelled
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatingTimer {
    delay_ms: f32,
    elapsed_ms: f32,
    cancelled: bool,
}

impl RepeatingTimer {
    pub fn new(delay_ms: f32) -> Self {
        Self {
            delay_ms,
            elapsed_ms: 0.0,
            cancelled: false,
        }
    }

    /// A timer that never fires
    pub fn disarmed() -> Self {
        Self {
            cancelled: true,
            ..Self::new(0.0)
        }
    }

    /// Advance by `dt_ms`; true if the timer fired.
    ///
    /// Fires at most once per call, carrying the remainder forward.
    pub fn advance(&mut self, dt_ms: f32) -> bool {
        if self.cancelled {
            return false;
        }
        self.elapsed_ms += dt_ms;
        if self.elapsed_ms >= self.delay_ms {
            self.elapsed_ms -= self.delay_ms;
            true
        } else {
            false
        }
    }

    /// Stop firing. Returns false if it was already cancelled.
    pub fn cancel(&mut self) -> bool {
        !std::mem::replace(&mut self.cancelled, true)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_every_interval() {
        let mut timer = RepeatingTimer::new(2000.0);
        let fires = (0..99).filter(|_| timer.advance(20.0)).count();
        assert_eq!(fires, 0);
        assert!(timer.advance(20.0));
        let fires = (0..500).filter(|_| timer.advance(20.0)).count();
        assert_eq!(fires, 5);
    }

    #[test]
    fn test_at_most_once_per_advance() {
        let mut timer = RepeatingTimer::new(100.0);
        assert!(timer.advance(350.0));
        assert!(timer.advance(0.0));
        assert!(timer.advance(0.0));
        assert!(!timer.advance(0.0));
    }

    #[test]
    fn test_cancel() {
        let mut timer = RepeatingTimer::new(100.0);
        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert!(!timer.advance(1000.0));
        assert!(RepeatingTimer::disarmed().is_cancelled());
    }
}
