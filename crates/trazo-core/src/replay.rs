//! Trace replay pacing
//!
//! Engines compute their full trace eagerly; the `Ticker` replays any
//! recorded sequence strictly in order at a caller-controlled pace.
//! Interruption is cooperative through a shared flag, checked between
//! items, so a cancelled replay stops cleanly and the computed trace is
//! left untouched.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::error::{Result, TrazoError};

/// Replays a recorded sequence with a fixed delay between items.
#[derive(Debug, Clone, Default)]
pub struct Ticker {
    delay: Duration,
    interrupt: Option<Arc<AtomicBool>>,
}

impl Ticker {
    pub fn new(delay: Duration) -> Self {
        Ticker {
            delay,
            interrupt: None,
        }
    }

    /// Attach a cooperative interruption flag; when it becomes true the
    /// replay stops before the next item with `TrazoError::Interrupted`.
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = Some(flag);
        self
    }

    /// Feed `items` to `sink` in recorded order, sleeping the configured
    /// delay between items. A zero delay degenerates to immediate
    /// sequential emission.
    pub fn play<T, F>(&self, items: &[T], mut sink: F) -> Result<()>
    where
        F: FnMut(&T),
    {
        for (index, item) in items.iter().enumerate() {
            if self.interrupted() {
                return Err(TrazoError::Interrupted);
            }
            sink(item);
            if index + 1 < items.len() && !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }
        Ok(())
    }

    fn interrupted(&self) -> bool {
        self.interrupt
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plays_items_in_recorded_order() {
        let ticker = Ticker::new(Duration::ZERO);
        let mut seen = Vec::new();
        ticker
            .play(&["a", "b", "c"], |item| seen.push(*item))
            .unwrap();
        assert_eq!(seen, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_sequence_is_a_no_op() {
        let ticker = Ticker::new(Duration::ZERO);
        let mut count = 0;
        ticker.play::<&str, _>(&[], |_| count += 1).unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_interrupt_stops_before_the_next_item() {
        let flag = Arc::new(AtomicBool::new(false));
        let ticker = Ticker::new(Duration::ZERO).with_interrupt(Arc::clone(&flag));

        let mut seen = Vec::new();
        let result = ticker.play(&[1, 2, 3], |item| {
            seen.push(*item);
            // Simulate Ctrl-C arriving while the first item renders
            flag.store(true, Ordering::SeqCst);
        });

        assert!(matches!(result, Err(TrazoError::Interrupted)));
        assert_eq!(seen, vec![1]);
    }
}
