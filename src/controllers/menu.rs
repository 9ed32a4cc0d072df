/// Something whose scrolling can be switched off, normally the page body.
pub trait ScrollSurface {
    fn set_scroll_locked(&self, locked: bool);
}

/// Holds page scrolling disabled for as long as it is alive.
pub struct ScrollLock<S: ScrollSurface> {
    surface: S,
}

impl<S: ScrollSurface> ScrollLock<S> {
    pub fn acquire(surface: S) -> Self {
        surface.set_scroll_locked(true);
        Self { surface }
    }
}

impl<S: ScrollSurface> Drop for ScrollLock<S> {
    fn drop(&mut self) {
        self.surface.set_scroll_locked(false);
    }
}

/// Open/closed state of the mobile navigation overlay.
///
/// While open the gate owns a [`ScrollLock`]; closing, selecting an entry or
/// dropping the gate all release it.
pub struct MenuGate<S: ScrollSurface + Clone> {
    surface: S,
    lock: Option<ScrollLock<S>>,
}

impl<S: ScrollSurface + Clone> MenuGate<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            lock: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.lock.is_some()
    }

    pub fn open(&mut self) {
        if self.lock.is_none() {
            self.lock = Some(ScrollLock::acquire(self.surface.clone()));
        }
    }

    pub fn close(&mut self) {
        self.lock = None;
    }

    pub fn toggle(&mut self) -> bool {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
        self.is_open()
    }

    /// Picking a navigation entry closes the overlay and hands the index back.
    pub fn select(&mut self, index: usize) -> usize {
        self.close();
        index
    }
}
