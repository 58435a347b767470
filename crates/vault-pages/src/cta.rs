// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Timed call-to-action overlay for game detail pages.
//!
//! The overlay starts hidden (`aria-hidden="true"`) and reveals itself once
//! the configured delay has elapsed, unless the visitor dismissed it for
//! this game on an earlier visit. Time is host-injected milliseconds — the
//! page script drives [`CtaOverlay::poll`] from its own timer, so the state
//! machine stays clock-free and testable.
//!
//! Dismissal persistence lives with the caller: on dismiss, hosts write the
//! per-game marker key (`vault.cta.<slug>`) through the storage port and
//! feed it back via [`CtaOverlay::arm`] on the next visit.

/// Overlay state machine.
#[derive(Debug, Clone)]
pub struct CtaOverlay {
    delay_ms: i64,
    armed_at_ms: Option<i64>,
    visible: bool,
    dismissed: bool,
}

impl CtaOverlay {
    /// Delay before the overlay reveals itself.
    pub const DEFAULT_DELAY_MS: i64 = 12_000;

    /// New overlay with the given reveal delay. Nothing happens until
    /// [`arm`](Self::arm) is called.
    #[must_use]
    pub fn new(delay_ms: i64) -> Self {
        Self {
            delay_ms: delay_ms.max(0),
            armed_at_ms: None,
            visible: false,
            dismissed: false,
        }
    }

    /// Start the timer at `now_ms`. `already_dismissed` carries the stored
    /// per-game marker; a dismissed overlay never arms.
    pub fn arm(&mut self, now_ms: i64, already_dismissed: bool) {
        self.dismissed = already_dismissed;
        if !already_dismissed {
            self.armed_at_ms = Some(now_ms);
        }
    }

    /// Advance the timer. Returns true exactly once, on the tick where the
    /// delay elapses and the overlay should be revealed.
    pub fn poll(&mut self, now_ms: i64) -> bool {
        if self.dismissed || self.visible {
            return false;
        }
        let Some(armed_at) = self.armed_at_ms else {
            return false;
        };
        if now_ms.saturating_sub(armed_at) >= self.delay_ms {
            self.visible = true;
            return true;
        }
        false
    }

    /// Hide the overlay and mark it dismissed for this session. Callers
    /// persist the marker so later visits skip the overlay entirely.
    pub fn dismiss(&mut self) {
        self.visible = false;
        self.dismissed = true;
    }

    /// Whether the overlay is currently shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Value for the overlay's `aria-hidden` attribute.
    #[must_use]
    pub fn aria_hidden(&self) -> &'static str {
        if self.visible {
            "false"
        } else {
            "true"
        }
    }
}

impl Default for CtaOverlay {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY_MS)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // ── 1. reveals once after the delay ─────────────────────────────────
    #[test]
    fn reveals_after_delay() {
        let mut overlay = CtaOverlay::new(1_000);
        overlay.arm(10_000, false);
        assert!(!overlay.poll(10_500));
        assert_eq!(overlay.aria_hidden(), "true");
        assert!(overlay.poll(11_000));
        assert_eq!(overlay.aria_hidden(), "false");
        // Only the revealing tick reports a transition.
        assert!(!overlay.poll(11_500));
        assert!(overlay.is_visible());
    }

    // ── 2. stored dismissal suppresses the overlay ──────────────────────
    #[test]
    fn stored_dismissal_suppresses() {
        let mut overlay = CtaOverlay::new(1_000);
        overlay.arm(0, true);
        assert!(!overlay.poll(100_000));
        assert_eq!(overlay.aria_hidden(), "true");
    }

    // ── 3. dismiss hides and stays hidden ───────────────────────────────
    #[test]
    fn dismiss_hides() {
        let mut overlay = CtaOverlay::new(0);
        overlay.arm(5, false);
        assert!(overlay.poll(5));
        overlay.dismiss();
        assert_eq!(overlay.aria_hidden(), "true");
        assert!(!overlay.poll(50_000));
    }

    // ── 4. unarmed overlay never fires ──────────────────────────────────
    #[test]
    fn unarmed_never_fires() {
        let mut overlay = CtaOverlay::new(0);
        assert!(!overlay.poll(i64::MAX));
    }

    // ── 5. negative delays clamp to immediate ───────────────────────────
    #[test]
    fn negative_delay_clamps() {
        let mut overlay = CtaOverlay::new(-50);
        overlay.arm(100, false);
        assert!(overlay.poll(100));
    }
}
