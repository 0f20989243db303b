pub mod error;
pub mod stack;

pub use error::EmptyStackError;
pub use stack::{ArenaStack, ListStack, Stack};


///////////////////////////////////////////////////////////////////////////////
//// Utilities
///////////////////////////////////////////////////////////////////////////////


#[cfg(test)]
mod utilities {
  use std::cell::Cell;
  use std::rc::Rc;
  use std::time::Duration;

  pub fn duration_to_ns(d: Duration) -> f64 {
    (d.as_secs() as f64) * 1_000_000_000.0 +
      (d.subsec_nanos() as f64)
  }

  pub fn secs_to_duration(t: f64) -> Duration {
    Duration::new(
      t as u64,
      ((t - ((t as u64) as f64)) * 1_000_000_000.0) as u32)
  }

  pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
      .with_max_level(tracing::Level::TRACE)
      .with_test_writer()
      .try_init();
  }

  /// An element that counts its own drops into a shared cell.
  #[derive(Clone)]
  pub struct Tracked {
    drops: Rc<Cell<usize>>,
  }

  impl Tracked {
    pub fn new(drops: &Rc<Cell<usize>>) -> Self {
      Self {
        drops: drops.clone(),
      }
    }
  }

  impl Drop for Tracked {
    fn drop(&mut self) {
      self.drops.set(self.drops.get() + 1);
    }
  }
}


///////////////////////////////////////////////////////////////////////////////
//// Stack Tests
///////////////////////////////////////////////////////////////////////////////



///////////////////////////////////////////////////////////////////////////////
//// Property Tests
///////////////////////////////////////////////////////////////////////////////
