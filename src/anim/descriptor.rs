//! # Animation Descriptors
//!
//! Declarative records of what to animate: a target (or ordered group of
//! targets), a from-state, a to-state, a trigger, and timing. Views build
//! an ordered descriptor list at mount via [`Sequence`] and hand it to the
//! [`TriggerBinder`](crate::anim::binder::TriggerBinder); nothing here
//! touches the terminal.

use crate::anim::ease::Ease;

/// Identifies one animation target slot within the currently mounted view.
/// Each view declares its slots as constants; ids only need to be unique
/// within one mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u16);

/// An interpolable style snapshot. `dx`/`dy` are offsets in terminal cells
/// from the target's resting position, `opacity` maps onto color fading,
/// `scale` onto emphasis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleState {
    pub opacity: f32,
    pub dx: f32,
    pub dy: f32,
    pub scale: f32,
}

impl StyleState {
    /// Resting state: fully visible, in place.
    pub const VISIBLE: StyleState = StyleState {
        opacity: 1.0,
        dx: 0.0,
        dy: 0.0,
        scale: 1.0,
    };

    pub fn hidden() -> Self {
        StyleState {
            opacity: 0.0,
            ..Self::VISIBLE
        }
    }

    pub fn with_dx(mut self, dx: f32) -> Self {
        self.dx = dx;
        self
    }

    pub fn with_dy(mut self, dy: f32) -> Self {
        self.dy = dy;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn lerp(from: StyleState, to: StyleState, t: f32) -> StyleState {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        StyleState {
            opacity: mix(from.opacity, to.opacity),
            dx: mix(from.dx, to.dx),
            dy: mix(from.dy, to.dy),
            scale: mix(from.scale, to.scale),
        }
    }
}

/// When a descriptor starts interpolating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// Fires at mount, in declared order, honoring `Timing::delay`.
    OnMount,
    /// Fires the first time the target's top edge rises above the given
    /// fraction of the viewport height (0.7 ≈ "top 70%"). Latched: fires
    /// at most once per mount.
    OnScrollIntoView { threshold: f32 },
}

/// Seconds-based timing. `delay` is relative to the trigger instant;
/// `stagger` spaces the members of a grouped target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub duration: f32,
    pub delay: f32,
    pub ease: Ease,
    pub stagger: f32,
}

impl Default for Timing {
    fn default() -> Self {
        Timing {
            duration: 0.5,
            delay: 0.0,
            ease: Ease::OutCubic,
            stagger: 0.0,
        }
    }
}

/// One declarative animation: targets, endpoint states, trigger, timing.
/// A group target lists its members in order; the Nth member starts
/// `stagger × N` after the group's base start time.
#[derive(Debug, Clone)]
pub struct AnimationDescriptor {
    pub targets: Vec<TargetId>,
    pub from: StyleState,
    pub to: StyleState,
    pub trigger: Trigger,
    pub timing: Timing,
}

impl AnimationDescriptor {
    pub fn from_to(target: TargetId, from: StyleState, to: StyleState) -> Self {
        AnimationDescriptor {
            targets: vec![target],
            from,
            to,
            trigger: Trigger::OnMount,
            timing: Timing::default(),
        }
    }

    pub fn group(targets: Vec<TargetId>, from: StyleState, to: StyleState) -> Self {
        AnimationDescriptor {
            targets,
            from,
            to,
            trigger: Trigger::OnMount,
            timing: Timing::default(),
        }
    }

    pub fn on_scroll(mut self, threshold: f32) -> Self {
        self.trigger = Trigger::OnScrollIntoView { threshold };
        self
    }

    pub fn duration(mut self, duration: f32) -> Self {
        self.timing.duration = duration;
        self
    }

    pub fn delay(mut self, delay: f32) -> Self {
        self.timing.delay = delay;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.timing.ease = ease;
        self
    }

    pub fn stagger(mut self, stagger: f32) -> Self {
        self.timing.stagger = stagger;
        self
    }

    /// Total time from trigger to the last member settling.
    pub fn span(&self) -> f32 {
        let members = self.targets.len().saturating_sub(1) as f32;
        self.timing.delay + self.timing.stagger * members + self.timing.duration
    }
}

/// Orders on-mount descriptors into a timeline: each step starts when the
/// previous one ends, like the source's heading → subtitle → call-to-action
/// staging. `then_offset` shifts a step's start by a signed amount so it
/// can overlap its predecessor.
#[derive(Default)]
pub struct Sequence {
    head: f32,
    descriptors: Vec<AnimationDescriptor>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(self, descriptor: AnimationDescriptor) -> Self {
        self.then_offset(0.0, descriptor)
    }

    pub fn then_offset(mut self, offset: f32, mut descriptor: AnimationDescriptor) -> Self {
        let start = (self.head + offset).max(0.0);
        descriptor.timing.delay += start;
        // span() is relative to the trigger instant and already includes
        // the (now absolute) delay, so it is the step's end time.
        self.head = descriptor.span();
        self.descriptors.push(descriptor);
        self
    }

    /// Append a descriptor without advancing the timeline head (its delay
    /// is kept absolute). Used for one-off late effects like the name tint.
    pub fn also(mut self, descriptor: AnimationDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    pub fn build(self) -> Vec<AnimationDescriptor> {
        self.descriptors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let from = StyleState::hidden().with_dy(3.0);
        let to = StyleState::VISIBLE;
        assert_eq!(StyleState::lerp(from, to, 0.0), from);
        assert_eq!(StyleState::lerp(from, to, 1.0), to);
        let mid = StyleState::lerp(from, to, 0.5);
        assert!((mid.opacity - 0.5).abs() < 1e-6);
        assert!((mid.dy - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_span_covers_stagger_tail() {
        let d = AnimationDescriptor::group(
            vec![TargetId(1), TargetId(2), TargetId(3)],
            StyleState::hidden(),
            StyleState::VISIBLE,
        )
        .duration(0.6)
        .stagger(0.15);
        // last member starts at 0.3, runs 0.6
        assert!((d.span() - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_sequence_steps_run_back_to_back() {
        let a = AnimationDescriptor::from_to(
            TargetId(1),
            StyleState::hidden(),
            StyleState::VISIBLE,
        )
        .duration(0.5);
        let b = AnimationDescriptor::from_to(
            TargetId(2),
            StyleState::hidden(),
            StyleState::VISIBLE,
        )
        .duration(0.8);
        let list = Sequence::new().then(a).then(b).build();
        assert_eq!(list[0].timing.delay, 0.0);
        assert!((list[1].timing.delay - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_sequence_negative_offset_overlaps_previous_step() {
        let a = AnimationDescriptor::from_to(
            TargetId(1),
            StyleState::hidden(),
            StyleState::VISIBLE,
        )
        .duration(1.0);
        let b = AnimationDescriptor::from_to(
            TargetId(2),
            StyleState::hidden(),
            StyleState::VISIBLE,
        )
        .duration(1.0);
        let list = Sequence::new().then(a).then_offset(-1.0, b).build();
        // second step starts a full second early, i.e. together with the first
        assert!((list[1].timing.delay - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_sequence_offset_never_goes_negative() {
        let a = AnimationDescriptor::from_to(
            TargetId(1),
            StyleState::hidden(),
            StyleState::VISIBLE,
        )
        .duration(0.2);
        let list = Sequence::new().then_offset(-5.0, a).build();
        assert_eq!(list[0].timing.delay, 0.0);
    }
}
