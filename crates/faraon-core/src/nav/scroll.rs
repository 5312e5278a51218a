//! Body scroll lock for the mobile drawer.
//!
//! The page scroll flag is a page-global resource, so it is modeled as
//! a capability the header owns for its lifetime: a [`ScrollLock`]
//! acquired at mount and dropped at unmount. Drop restores scrolling,
//! which covers the unmount-while-open path; leaving the page
//! permanently unscrollable is a resource leak, not a cosmetic bug.

/// Whatever actually toggles page scrolling.
///
/// The desktop app implements this over `document.body.style.overflow`;
/// tests use a recording mock.
pub trait ScrollSurface {
    fn set_locked(&self, locked: bool);
}

/// Tracks the drawer-open flag onto a [`ScrollSurface`], releasing the
/// lock on drop no matter how the owner goes away.
#[derive(Debug)]
pub struct ScrollLock<S: ScrollSurface> {
    surface: S,
    locked: bool,
}

impl<S: ScrollSurface> ScrollLock<S> {
    /// Start unlocked; nothing is written to the surface until the
    /// first transition.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            locked: false,
        }
    }

    /// Follow the drawer state. Only transitions touch the surface;
    /// repeated updates with the same value are no-ops.
    pub fn update(&mut self, drawer_open: bool) {
        if drawer_open != self.locked {
            self.locked = drawer_open;
            self.surface.set_locked(drawer_open);
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

impl<S: ScrollSurface> Drop for ScrollLock<S> {
    fn drop(&mut self) {
        if self.locked {
            self.surface.set_locked(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every write so tests can assert both the final state and
    /// that no redundant writes happened.
    #[derive(Clone, Default)]
    struct MockSurface {
        writes: Rc<RefCell<Vec<bool>>>,
    }

    impl ScrollSurface for MockSurface {
        fn set_locked(&self, locked: bool) {
            self.writes.borrow_mut().push(locked);
        }
    }

    #[test]
    fn lock_then_unlock() {
        let surface = MockSurface::default();
        let mut lock = ScrollLock::new(surface.clone());

        lock.update(true);
        assert!(lock.is_locked());
        lock.update(false);
        assert!(!lock.is_locked());

        assert_eq!(*surface.writes.borrow(), vec![true, false]);
    }

    #[test]
    fn repeated_updates_do_not_rewrite() {
        let surface = MockSurface::default();
        let mut lock = ScrollLock::new(surface.clone());

        lock.update(true);
        lock.update(true);
        lock.update(true);

        assert_eq!(*surface.writes.borrow(), vec![true]);
    }

    #[test]
    fn drop_while_locked_restores_scrolling() {
        let surface = MockSurface::default();
        {
            let mut lock = ScrollLock::new(surface.clone());
            lock.update(true);
        }
        // Unmount while the drawer was open: the final write must be an
        // unlock.
        assert_eq!(*surface.writes.borrow(), vec![true, false]);
    }

    #[test]
    fn drop_while_unlocked_writes_nothing() {
        let surface = MockSurface::default();
        {
            let _lock = ScrollLock::new(surface.clone());
        }
        assert!(surface.writes.borrow().is_empty());
    }
}
