//! # Trigger Binder
//!
//! Owns every animation bound for the currently mounted view: entrance
//! descriptors (on-mount and scroll-triggered) and hover bindings. The
//! binder is the view's binding set — built once per mount from an
//! immutable descriptor list, dropped wholesale on unmount. Unmounting
//! cancels pending scroll triggers and detaches hover bindings through the
//! same handle that attached them, so no binding outlives its view.
//!
//! Sampling is pull-based: every frame the renderer asks
//! [`TriggerBinder::style`] for a target's interpolated [`StyleState`].
//! Descriptors that haven't fired answer with their from-state; a target
//! the binder knows nothing about answers with the resting state, which is
//! also what makes an absent or empty target silently inert.

use std::collections::HashMap;

use log::debug;

use crate::anim::descriptor::{AnimationDescriptor, StyleState, TargetId, Trigger};
use crate::anim::ease::Ease;
use crate::anim::transition::Transition;

#[derive(Debug, Clone, Copy)]
enum Phase {
    /// Start time is known (on-mount, or a fired scroll trigger).
    Scheduled { start: f32 },
    /// Waiting for the target's top edge to cross the viewport threshold.
    /// `lag` is the delay + stagger offset applied once it fires.
    Armed { threshold: f32, lag: f32 },
    /// Jumped straight to the to-state (reduced motion).
    Done,
}

#[derive(Debug)]
struct BoundAnimation {
    target: TargetId,
    from: StyleState,
    to: StyleState,
    duration: f32,
    ease: Ease,
    phase: Phase,
}

impl BoundAnimation {
    fn style(&self, now: f32) -> StyleState {
        match self.phase {
            Phase::Done => self.to,
            Phase::Armed { .. } => self.from,
            Phase::Scheduled { start } => {
                if now < start {
                    self.from
                } else if self.duration <= 0.0 {
                    self.to
                } else {
                    let t = (now - start) / self.duration;
                    StyleState::lerp(self.from, self.to, self.ease.apply(t))
                }
            }
        }
    }

    /// True while this binding still changes between frames.
    fn in_flight(&self, now: f32) -> bool {
        match self.phase {
            Phase::Done | Phase::Armed { .. } => false,
            Phase::Scheduled { start } => now < start + self.duration,
        }
    }
}

/// Declares that a target reacts to pointer hover: entering ramps its
/// hover level toward 1 over `duration`, leaving ramps back to 0.
#[derive(Debug, Clone, Copy)]
pub struct HoverSpec {
    pub target: TargetId,
    pub duration: f32,
}

impl HoverSpec {
    pub fn new(target: TargetId) -> Self {
        // The source used a fixed 0.3s for every hover tween.
        HoverSpec {
            target,
            duration: 0.3,
        }
    }
}

#[derive(Debug)]
struct HoverBinding {
    target: TargetId,
    duration: f32,
    hovered: bool,
    level: Transition,
}

/// Per-mount binding set. See the module docs.
#[derive(Debug, Default)]
pub struct TriggerBinder {
    anims: Vec<BoundAnimation>,
    hovers: Vec<HoverBinding>,
}

impl TriggerBinder {
    /// An empty binder: every target samples as resting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the binding set for a freshly mounted view.
    ///
    /// Grouped targets are expanded here: the Nth member starts
    /// `stagger × N` after the group base. A descriptor with an empty
    /// target list is a no-op, never an error. With `reduced_motion` all
    /// bindings settle immediately at their to-state.
    pub fn mount(
        descriptors: Vec<AnimationDescriptor>,
        hover_specs: Vec<HoverSpec>,
        now: f32,
        reduced_motion: bool,
    ) -> Self {
        let mut anims = Vec::new();
        for d in descriptors {
            if d.targets.is_empty() {
                debug!("descriptor with empty target group skipped");
                continue;
            }
            for (i, target) in d.targets.iter().enumerate() {
                let lag = d.timing.delay + d.timing.stagger * i as f32;
                let phase = if reduced_motion {
                    Phase::Done
                } else {
                    match d.trigger {
                        Trigger::OnMount => Phase::Scheduled { start: now + lag },
                        Trigger::OnScrollIntoView { threshold } => {
                            Phase::Armed { threshold, lag }
                        }
                    }
                };
                anims.push(BoundAnimation {
                    target: *target,
                    from: d.from,
                    to: d.to,
                    duration: d.timing.duration,
                    ease: d.timing.ease,
                    phase,
                });
            }
        }

        let hovers = hover_specs
            .into_iter()
            .map(|spec| HoverBinding {
                target: spec.target,
                duration: spec.duration,
                hovered: false,
                level: Transition::idle(0.0),
            })
            .collect();

        debug!("mounted {} animation bindings", anims.len());
        TriggerBinder { anims, hovers }
    }

    /// Drop every binding: pending scroll triggers are cancelled and hover
    /// bindings detached. Idempotent.
    pub fn unmount(&mut self) {
        self.anims.clear();
        self.hovers.clear();
    }

    /// Total live bindings (animations + hovers). Zero after unmount.
    pub fn binding_count(&self) -> usize {
        self.anims.len() + self.hovers.len()
    }

    /// Evaluate armed scroll triggers against the current viewport.
    ///
    /// `positions` maps targets to their top row in content coordinates
    /// (from the view's layout cache). A trigger fires when that row rises
    /// above `scroll_y + viewport_height × threshold`; targets without a
    /// position stay armed. Firing latches: scrolling back does not rewind.
    /// Triggers crossing on the same frame fire in document order.
    pub fn observe_scroll(
        &mut self,
        positions: &HashMap<TargetId, u16>,
        scroll_y: u16,
        viewport_height: u16,
        now: f32,
    ) {
        let mut firing: Vec<usize> = Vec::new();
        for (i, anim) in self.anims.iter().enumerate() {
            if let Phase::Armed { threshold, .. } = anim.phase
                && let Some(&top) = positions.get(&anim.target)
            {
                let fire_line = scroll_y as f32 + viewport_height as f32 * threshold;
                if (top as f32) < fire_line {
                    firing.push(i);
                }
            }
        }
        firing.sort_by_key(|&i| positions.get(&self.anims[i].target).copied());
        for i in firing {
            let anim = &mut self.anims[i];
            if let Phase::Armed { lag, .. } = anim.phase {
                debug!("scroll trigger fired for {:?}", anim.target);
                anim.phase = Phase::Scheduled { start: now + lag };
            }
        }
    }

    /// The interpolated style for a target at `now`. Bindings that share a
    /// target compose: opacities and scales multiply, offsets add. Unbound
    /// targets rest at [`StyleState::VISIBLE`].
    pub fn style(&self, target: TargetId, now: f32) -> StyleState {
        let mut out = StyleState::VISIBLE;
        for anim in self.anims.iter().filter(|a| a.target == target) {
            let s = anim.style(now);
            out.opacity *= s.opacity;
            out.scale *= s.scale;
            out.dx += s.dx;
            out.dy += s.dy;
        }
        out
    }

    /// Update hover bindings for a pointer that is over `target` (or over
    /// nothing). Enter/leave transitions are retargeted, never replaced by
    /// fresh callbacks — the binding that attached is the one that ramps
    /// back down.
    pub fn set_hovered(&mut self, target: Option<TargetId>, now: f32) {
        for binding in &mut self.hovers {
            let should = target == Some(binding.target);
            if should != binding.hovered {
                binding.hovered = should;
                let to = if should { 1.0 } else { 0.0 };
                binding.level =
                    binding
                        .level
                        .retarget(to, now, binding.duration, Ease::OutQuad);
            }
        }
    }

    /// Hover level for a target, 0 (resting) to 1 (fully hovered).
    pub fn hover_level(&self, target: TargetId, now: f32) -> f32 {
        self.hovers
            .iter()
            .find(|b| b.target == target)
            .map(|b| b.level.value(now))
            .unwrap_or(0.0)
    }

    /// True while any binding still changes between frames; drives the
    /// event loop's fast-redraw mode.
    pub fn animating(&self, now: f32) -> bool {
        self.anims.iter().any(|a| a.in_flight(now))
            || self.hovers.iter().any(|b| !b.level.settled(now))
    }

    /// Start offsets (relative to mount) of every scheduled binding, in
    /// binding order. Armed triggers are excluded.
    pub fn scheduled_starts(&self, mount_time: f32) -> Vec<(TargetId, f32)> {
        self.anims
            .iter()
            .filter_map(|a| match a.phase {
                Phase::Scheduled { start } => Some((a.target, start - mount_time)),
                _ => None,
            })
            .collect()
    }
}
