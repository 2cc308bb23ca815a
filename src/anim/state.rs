//! Per-attribute animation playback
//!
//! A `PathState` walks a [`Path`] in discrete frame steps. It is advanced
//! exactly once per frame by its owner via [`PathState::animate`].
//!
//! Repeat counter semantics:
//! - `counter < 0`: loop forever
//! - `counter > 0`: loop, decrementing on every wrap
//! - `counter == 0`: final pass; stops on the last step and reports
//!   completion once

use super::path::{wrap_ratio, Path, PathError, PathValue};

/// Default number of steps for a freshly created state (one second at 60 fps).
pub const DEFAULT_STEPS: u32 = 60;

/// Repeat counter value meaning "loop forever".
pub const REPEAT_FOREVER: i32 = -1;

/// How a sampled path value is written into its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssignMode {
    /// Overwrite the target with the sampled value.
    #[default]
    DirectValue,
    /// Copy the components into the existing vector target in place.
    VectorUpdate,
}

/// Playback state of one path bound to one target.
#[derive(Debug, Clone, PartialEq)]
pub struct PathState {
    path: Path,
    mode: AssignMode,
    /// Remaining repeats (see module docs)
    pub counter: i32,
    ratio: f32,
    step: u32,
    steps: u32,
    finished: bool,
}

impl PathState {
    /// Fresh state at step 0, looping forever over `DEFAULT_STEPS`.
    pub fn new(path: Path, mode: AssignMode) -> Self {
        Self {
            path,
            mode,
            counter: REPEAT_FOREVER,
            ratio: 0.0,
            step: 0,
            steps: DEFAULT_STEPS,
            finished: false,
        }
    }

    /// The path being played.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// How sampled values are written into the target.
    pub fn mode(&self) -> AssignMode {
        self.mode
    }

    /// Current step, in `0..steps`.
    pub fn step(&self) -> u32 {
        self.step
    }

    /// Steps per traversal.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Progress along the path in [0, 1].
    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    /// Jumps to `value`, wrapped into [0, 1).
    pub fn set_ratio(&mut self, value: f32) {
        self.ratio = value.rem_euclid(1.0);
    }

    /// Arc length matching the current ratio.
    pub fn length(&self) -> f32 {
        self.path.get_length(self.ratio)
    }

    /// Sets the ratio from an arc length along the path.
    pub fn set_length(&mut self, value: f32) {
        self.ratio = self.path.get_ratio(value);
    }

    /// Value of the path at the current ratio.
    pub fn position(&self) -> Result<PathValue, PathError> {
        self.path.get_position(wrap_ratio(self.ratio))
    }

    /// False once a finite animation has consumed its last step.
    pub fn is_animating(&self) -> bool {
        !self.finished
    }

    /// Restarts playback over `frame_rate * seconds` steps (at least one).
    pub fn set_animation(&mut self, frame_rate: u32, seconds: f32, repeats: i32) {
        let steps = (frame_rate as f32 * seconds).round();
        self.steps = if steps >= 1.0 { steps as u32 } else { 1 };
        self.counter = repeats;
        self.step = 0;
        self.ratio = 0.0;
        self.finished = false;
    }

    /// Advances one frame. Returns `true` exactly once, on the frame a
    /// finite animation reaches its last step.
    pub fn animate(&mut self) -> bool {
        let last = self.steps.saturating_sub(1);
        let mut completed = false;

        if self.counter == 0 {
            self.step = (self.step + 1).min(last);
            if self.step == last && !self.finished {
                self.finished = true;
                completed = true;
            }
        } else {
            let next = self.step + 1;
            if next >= self.steps {
                self.step = 0;
                if self.counter > 0 {
                    self.counter -= 1;
                }
            } else {
                self.step = next;
            }
        }

        self.ratio = if last == 0 {
            0.0
        } else {
            self.step as f32 / last as f32
        };
        completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::path::Path1d;

    fn state(steps: u32, repeats: i32) -> PathState {
        let mut s = PathState::new(Path1d::new(vec![0.0, 10.0], false).into(), AssignMode::DirectValue);
        s.set_animation(steps, 1.0, repeats);
        s
    }

    #[test]
    fn test_infinite_loop_never_completes() {
        let mut s = state(60, REPEAT_FOREVER);
        for _ in 0..10_000 {
            assert!(!s.animate());
            assert!(s.step() < s.steps());
        }
        assert!(s.is_animating());
    }

    #[test]
    fn test_one_shot_completes_once_on_last_step() {
        let steps = 10;
        let mut s = state(steps, 0);
        for i in 1..steps {
            let done = s.animate();
            assert_eq!(done, i == steps - 1, "invocation {}", i);
        }
        assert_eq!(s.ratio(), 1.0);
        assert!(!s.is_animating());

        for _ in 0..20 {
            assert!(!s.animate());
            assert_eq!(s.ratio(), 1.0);
            assert_eq!(s.step(), steps - 1);
        }
    }

    #[test]
    fn test_finite_repeats_then_final_pass() {
        let mut s = state(4, 2);
        let mut frames = 0;
        loop {
            frames += 1;
            if s.animate() {
                break;
            }
            assert!(frames < 100);
        }
        // Two wrapping passes of 4 steps, then 3 steps to the clamp
        assert_eq!(frames, 4 + 4 + 3);
        assert_eq!(s.counter, 0);
    }

    #[test]
    fn test_single_step_holds_ratio_zero() {
        let mut s = state(1, REPEAT_FOREVER);
        for _ in 0..5 {
            s.animate();
            assert_eq!(s.ratio(), 0.0);
            assert_eq!(s.step(), 0);
        }

        let mut once = state(1, 0);
        assert!(once.animate());
        assert!(!once.animate());
        assert_eq!(once.ratio(), 0.0);
    }

    #[test]
    fn test_zero_duration_clamps_to_one_step() {
        let s = state(0, 0);
        assert_eq!(s.steps(), 1);
    }

    #[test]
    fn test_ratio_follows_step() {
        let mut s = state(5, REPEAT_FOREVER);
        s.animate();
        assert_eq!(s.ratio(), 0.25);
        s.animate();
        assert_eq!(s.ratio(), 0.5);
        assert_eq!(s.position().unwrap(), PathValue::Scalar(5.0));
    }

    #[test]
    fn test_length_and_ratio_setters() {
        let mut s = state(60, REPEAT_FOREVER);
        s.set_length(2.5);
        assert_eq!(s.ratio(), 0.25);
        assert_eq!(s.length(), 2.5);
        s.set_ratio(1.75);
        assert_eq!(s.ratio(), 0.75);
    }
}
