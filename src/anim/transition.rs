//! A single scalar tween sampled against the frame clock.
//!
//! `Transition` is the declarative primitive behind hover ramps and the
//! navbar underline: state holders keep one per animated property and
//! retarget it when the desired value changes, instead of issuing
//! imperative animation commands.

use crate::anim::ease::Ease;

#[derive(Debug, Clone, Copy)]
pub struct Transition {
    from: f32,
    to: f32,
    start: f32,
    duration: f32,
    ease: Ease,
}

impl Transition {
    /// A settled transition holding `value`.
    pub fn idle(value: f32) -> Self {
        Transition {
            from: value,
            to: value,
            start: 0.0,
            duration: 0.0,
            ease: Ease::Linear,
        }
    }

    /// Retarget: start a new tween from the currently sampled value toward
    /// `target`. Retargeting mid-flight picks up from wherever the old
    /// tween was, so reversals are smooth.
    #[must_use]
    pub fn retarget(&self, target: f32, now: f32, duration: f32, ease: Ease) -> Self {
        Transition {
            from: self.value(now),
            to: target,
            start: now,
            duration,
            ease,
        }
    }

    pub fn value(&self, now: f32) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = ((now - self.start) / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * self.ease.apply(t)
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn settled(&self, now: f32) -> bool {
        self.duration <= 0.0 || now >= self.start + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_holds_value() {
        let t = Transition::idle(0.25);
        assert_eq!(t.value(0.0), 0.25);
        assert_eq!(t.value(100.0), 0.25);
        assert!(t.settled(0.0));
    }

    #[test]
    fn test_retarget_reaches_target() {
        let t = Transition::idle(0.0).retarget(1.0, 10.0, 0.5, Ease::Linear);
        assert_eq!(t.value(10.0), 0.0);
        assert!((t.value(10.25) - 0.5).abs() < 1e-6);
        assert_eq!(t.value(10.5), 1.0);
        assert!(!t.settled(10.4));
        assert!(t.settled(10.5));
    }

    #[test]
    fn test_mid_flight_reversal_is_continuous() {
        let up = Transition::idle(0.0).retarget(1.0, 0.0, 1.0, Ease::Linear);
        let down = up.retarget(0.0, 0.5, 1.0, Ease::Linear);
        // reversal starts from the half-way value, not from 1.0
        assert!((down.value(0.5) - 0.5).abs() < 1e-6);
        assert_eq!(down.value(1.5), 0.0);
    }
}
