//! Re-entrancy and depth bookkeeping for recursive construction.

use crate::error::{Error, Result};
use std::cell::RefCell;

thread_local! {
  // The identifiers currently being constructed on this thread, outermost first,
  // tagged with the address of the container doing the work.
  static RESOLVING_STACK: RefCell<Vec<(usize, Frame, String)>> = const { RefCell::new(Vec::new()) };
}

/// What kind of producer a stack entry stands for.
///
/// A factory bound under an identifier may construct the class of the same name;
/// only a repeat of the same kind and identifier is a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Frame {
  Binding,
  Class,
  Function,
}

/// An RAII guard around one nested construction.
///
/// Entering pushes the identifier onto the thread-local resolution stack and fails
/// if the same container is already constructing it further up the stack, or if
/// the stack for that container is already `max_depth` deep. Dropping the guard
/// pops the entry again, including on the error path.
pub(crate) struct ResolutionGuard {
  owner: usize,
}

impl ResolutionGuard {
  pub(crate) fn enter(owner: usize, frame: Frame, id: &str, max_depth: usize) -> Result<Self> {
    RESOLVING_STACK.with(|stack| {
      let mut stack = stack.borrow_mut();
      let mut depth = 0;
      for (entry_owner, entry_frame, entry_id) in stack.iter() {
        if *entry_owner != owner {
          continue;
        }
        if *entry_frame == frame && entry_id == id {
          return Err(Error::CircularDependency(id.to_owned()));
        }
        depth += 1;
      }
      if depth >= max_depth {
        return Err(Error::DepthExceeded { depth: max_depth });
      }
      stack.push((owner, frame, id.to_owned()));
      Ok(())
    })?;
    Ok(Self { owner })
  }
}

impl Drop for ResolutionGuard {
  fn drop(&mut self) {
    RESOLVING_STACK.with(|stack| {
      let mut stack = stack.borrow_mut();
      if let Some(index) = stack.iter().rposition(|(owner, _, _)| *owner == self.owner) {
        stack.remove(index);
      }
    });
  }
}
