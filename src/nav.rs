//! Navigation state machine - focused screen index and menu page
//!
//! The menu shows `PAGE_SIZE` entries at a time. Advancing and retreating
//! wrap around the registry, and the page follows the focused index so the
//! focused entry is always visible on the current page.

/// Number of menu entries per page.
pub const PAGE_SIZE: usize = 13;

/// `(focused_index, page)` pair for one active terminal.
///
/// Invariant whenever the registry is non-empty:
/// `page * PAGE_SIZE <= focused < (page + 1) * PAGE_SIZE` and `focused < n`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    focused: usize,
    page: usize,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Move selection down by one, given `n` registered screens.
    ///
    /// Wrapping past the last index lands on index 0, page 0. No-op when
    /// `n == 0`.
    pub fn advance(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        self.focused = (self.focused + 1) % n;
        if self.focused == 0 {
            self.page = 0;
        } else if self.focused >= (self.page + 1) * PAGE_SIZE {
            self.page += 1;
        }
    }

    /// Move selection up by one, given `n` registered screens.
    ///
    /// Wrapping past index 0 lands on index `n - 1` on the last non-empty
    /// page, `(n - 1) / PAGE_SIZE`. No-op when `n == 0`.
    pub fn retreat(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        if self.focused == 0 {
            self.focused = n - 1;
            self.page = (n - 1) / PAGE_SIZE;
        } else {
            self.focused -= 1;
            if self.focused < self.page * PAGE_SIZE {
                self.page -= 1;
            }
        }
    }

    /// Re-establish the invariant after the registry shrank underneath us
    /// (unregistration). Focus stays put when still in range.
    pub fn clamp(&mut self, n: usize) {
        if n == 0 {
            *self = Self::default();
            return;
        }
        if self.focused >= n {
            self.focused = n - 1;
        }
        self.page = self.focused / PAGE_SIZE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invariant_holds(nav: &NavState, n: usize) -> bool {
        nav.focused() < n
            && nav.page() * PAGE_SIZE <= nav.focused()
            && nav.focused() < (nav.page() + 1) * PAGE_SIZE
    }

    #[test]
    fn test_advance_crosses_page_boundary() {
        // 15 screens, focused on the last entry of page 0
        let mut nav = NavState::new();
        for _ in 0..12 {
            nav.advance(15);
        }
        assert_eq!((nav.focused(), nav.page()), (12, 0));
        nav.advance(15);
        assert_eq!((nav.focused(), nav.page()), (13, 1));
    }

    #[test]
    fn test_advance_wraps_to_first_page() {
        let mut nav = NavState::new();
        for _ in 0..14 {
            nav.advance(15);
        }
        assert_eq!((nav.focused(), nav.page()), (14, 1));
        nav.advance(15);
        assert_eq!((nav.focused(), nav.page()), (0, 0));
    }

    #[test]
    fn test_retreat_wraps_to_last_page() {
        let mut nav = NavState::new();
        nav.retreat(15);
        assert_eq!((nav.focused(), nav.page()), (14, 1));
    }

    #[test]
    fn test_retreat_wrap_clamps_on_exact_multiple() {
        // n == PAGE_SIZE: the last entry lives on page 0, not an empty page 1
        let mut nav = NavState::new();
        nav.retreat(13);
        assert_eq!((nav.focused(), nav.page()), (12, 0));

        let mut nav = NavState::new();
        nav.retreat(26);
        assert_eq!((nav.focused(), nav.page()), (25, 1));
    }

    #[test]
    fn test_retreat_crosses_page_boundary() {
        let mut nav = NavState::new();
        for _ in 0..13 {
            nav.advance(15);
        }
        assert_eq!((nav.focused(), nav.page()), (13, 1));
        nav.retreat(15);
        assert_eq!((nav.focused(), nav.page()), (12, 0));
    }

    #[test]
    fn test_empty_registry_is_noop() {
        let mut nav = NavState::new();
        nav.advance(0);
        nav.retreat(0);
        assert_eq!((nav.focused(), nav.page()), (0, 0));
    }

    #[test]
    fn test_invariant_under_random_walk() {
        // Deterministic pseudo-random walk over a range of registry sizes
        for n in 1..40 {
            let mut nav = NavState::new();
            let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
            for _ in 0..500 {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                if seed & 1 == 0 {
                    nav.advance(n);
                } else {
                    nav.retreat(n);
                }
                assert!(invariant_holds(&nav, n), "n={n} nav={nav:?}");
            }
        }
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut nav = NavState::new();
        for _ in 0..14 {
            nav.advance(15);
        }
        nav.clamp(5);
        assert_eq!((nav.focused(), nav.page()), (4, 0));
        nav.clamp(0);
        assert_eq!((nav.focused(), nav.page()), (0, 0));
    }
}
