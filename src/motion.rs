//! Time based animation primitives.
//!
//! Everything in here is a pure function of elapsed seconds: a component
//! samples its animation with the clock value it was handed for the current
//! frame and never keeps animation state of its own. Restarting the clock
//! restarts the animation.

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
        }
    }
}

fn bezier_component(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(p1: f64, p2: f64, s: f64) -> f64 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Solves x(s) = t for the curve parameter and returns y(s).
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let mut s = t;
    for _ in 0..8 {
        let err = bezier_component(x1, x2, s) - t;
        if err.abs() < 1e-7 {
            return bezier_component(y1, y2, s);
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    // Newton stalled on a flat stretch, bisect instead.
    let (mut lo, mut hi) = (0.0, 1.0);
    s = t;
    for _ in 0..32 {
        let x = bezier_component(x1, x2, s);
        if (x - t).abs() < 1e-7 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier_component(y1, y2, s)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Repeat {
    Once,
    Forever,
}

/// Start offset, duration, easing and repeat policy of one animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub delay: f64,
    pub duration: f64,
    pub ease: Ease,
    pub repeat: Repeat,
}

impl Transition {
    pub const fn once(duration: f64, ease: Ease) -> Self {
        Self {
            delay: 0.0,
            duration,
            ease,
            repeat: Repeat::Once,
        }
    }

    pub const fn forever(duration: f64, ease: Ease) -> Self {
        Self {
            delay: 0.0,
            duration,
            ease,
            repeat: Repeat::Forever,
        }
    }

    pub const fn delayed(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Linear progress through the current cycle, in `[0, 1]`.
    pub fn progress(&self, elapsed: f64) -> f64 {
        let local = elapsed - self.delay;
        if local <= 0.0 {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        match self.repeat {
            Repeat::Once => (local / self.duration).min(1.0),
            Repeat::Forever => (local % self.duration) / self.duration,
        }
    }

    pub fn eased(&self, elapsed: f64) -> f64 {
        self.ease.apply(self.progress(elapsed))
    }

    pub fn is_finished(&self, elapsed: f64) -> bool {
        match self.repeat {
            Repeat::Once => elapsed >= self.delay + self.duration,
            Repeat::Forever => false,
        }
    }
}

/// Evenly spaced keyframe values with `ease` applied inside every segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframes {
    pub values: &'static [f64],
    pub ease: Ease,
}

impl Keyframes {
    pub const fn new(values: &'static [f64], ease: Ease) -> Self {
        Self { values, ease }
    }

    /// Samples the track at `progress` in `[0, 1]`.
    pub fn sample(&self, progress: f64) -> f64 {
        match self.values {
            [] => 0.0,
            [only] => *only,
            values => {
                let segments = values.len() - 1;
                let pos = progress.clamp(0.0, 1.0) * segments as f64;
                let idx = (pos.floor() as usize).min(segments - 1);
                let local = self.ease.apply(pos - idx as f64);
                f64::lerp(&values[idx], &values[idx + 1], local)
            }
        }
    }

    pub fn sample_at(&self, transition: &Transition, elapsed: f64) -> f64 {
        self.sample(transition.progress(elapsed))
    }
}

/// Visual state of a revealed element: opacity plus a 2D offset and scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    pub fn to_style(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translate3d({:.2}px, {:.2}px, 0) scale({:.4});",
            self.opacity, self.x, self.y, self.scale
        )
    }
}

impl Lerp for Pose {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            opacity: f64::lerp(&a.opacity, &b.opacity, t),
            x: f64::lerp(&a.x, &b.x, t),
            y: f64::lerp(&a.y, &b.y, t),
            scale: f64::lerp(&a.scale, &b.scale, t),
        }
    }
}

/// One-shot entrance: from a hidden pose to [`Pose::REST`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reveal {
    pub from: Pose,
    pub transition: Transition,
}

impl Reveal {
    /// Fade in while rising 30px.
    pub const fn fade_up(delay: f64) -> Self {
        Self {
            from: Pose {
                opacity: 0.0,
                x: 0.0,
                y: 30.0,
                scale: 1.0,
            },
            transition: Transition::once(0.8, Ease::EaseOut).delayed(delay),
        }
    }

    /// Fade in while growing from half size.
    pub const fn pop(delay: f64) -> Self {
        Self {
            from: Pose {
                opacity: 0.0,
                x: 0.0,
                y: 0.0,
                scale: 0.5,
            },
            transition: Transition::once(0.6, Ease::EaseOut).delayed(delay),
        }
    }

    /// Fade in while sliding horizontally from `x`.
    pub const fn slide_from(x: f64) -> Self {
        Self {
            from: Pose {
                opacity: 0.0,
                x,
                y: 0.0,
                scale: 1.0,
            },
            transition: Transition::once(0.8, Ease::EaseOut),
        }
    }

    /// `since_trigger` is `None` until the reveal has fired.
    pub fn pose_at(&self, since_trigger: Option<f64>) -> Pose {
        match since_trigger {
            None => self.from,
            Some(t) => Pose::lerp(&self.from, &Pose::REST, self.transition.eased(t)),
        }
    }

    pub fn is_settled(&self, since_trigger: f64) -> bool {
        self.transition.is_finished(since_trigger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 3] = [Ease::Linear, Ease::EaseOut, Ease::EaseInOut];

    #[test]
    fn endpoints_are_stable() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
            assert_eq!(ease.apply(-3.0), 0.0);
            assert_eq!(ease.apply(4.0), 1.0);
        }
    }

    #[test]
    fn monotonic_spot_check() {
        for ease in ALL {
            let a = ease.apply(0.25);
            let b = ease.apply(0.5);
            let c = ease.apply(0.75);
            assert!(a < b, "{:?}", ease);
            assert!(b < c, "{:?}", ease);
        }
    }

    #[test]
    fn ease_out_front_loads_motion() {
        for t in [0.1, 0.3, 0.5, 0.7, 0.9] {
            assert!(Ease::EaseOut.apply(t) > Ease::Linear.apply(t), "t = {}", t);
        }
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let mid = Ease::EaseInOut.apply(0.5);
        assert!((mid - 0.5).abs() < 1e-6);
        let a = Ease::EaseInOut.apply(0.2);
        let b = Ease::EaseInOut.apply(0.8);
        assert!((a + b - 1.0).abs() < 1e-6);
    }

    #[test]
    fn once_clamps_and_finishes() {
        let t = Transition::once(2.0, Ease::Linear).delayed(1.0);
        assert_eq!(t.progress(0.0), 0.0);
        assert_eq!(t.progress(1.0), 0.0);
        assert_eq!(t.progress(2.0), 0.5);
        assert_eq!(t.progress(10.0), 1.0);
        assert!(!t.is_finished(2.9));
        assert!(t.is_finished(3.0));
    }

    #[test]
    fn forever_wraps() {
        let t = Transition::forever(4.0, Ease::Linear);
        assert_eq!(t.progress(1.0), 0.25);
        assert_eq!(t.progress(5.0), 0.25);
        assert!(!t.is_finished(1.0e6));
    }

    #[test]
    fn keyframes_hit_each_key() {
        let track = Keyframes::new(&[0.0, 100.0, -50.0, 0.0], Ease::EaseInOut);
        assert_eq!(track.sample(0.0), 0.0);
        assert!((track.sample(1.0 / 3.0) - 100.0).abs() < 1e-9);
        assert!((track.sample(2.0 / 3.0) + 50.0).abs() < 1e-9);
        assert_eq!(track.sample(1.0), 0.0);
    }

    #[test]
    fn keyframes_loop_with_transition() {
        let track = Keyframes::new(&[0.0, 10.0, 0.0], Ease::Linear);
        let t = Transition::forever(2.0, Ease::Linear);
        assert!((track.sample_at(&t, 0.5) - 5.0).abs() < 1e-9);
        assert!((track.sample_at(&t, 2.5) - 5.0).abs() < 1e-9);
        assert!((track.sample_at(&t, 1.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn reveal_runs_from_hidden_to_rest() {
        let reveal = Reveal::fade_up(0.2);
        assert_eq!(reveal.pose_at(None), reveal.from);
        assert_eq!(reveal.pose_at(Some(0.1)), reveal.from);
        assert_eq!(reveal.pose_at(Some(1.0)), Pose::REST);
        assert!(reveal.is_settled(1.5));
        assert!(!reveal.is_settled(0.5));

        let mid = reveal.pose_at(Some(0.6));
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert!(mid.y > 0.0 && mid.y < 30.0);
    }

    #[test]
    fn pose_style_renders_transform() {
        let style = Reveal::slide_from(-50.0).pose_at(None).to_style();
        assert_eq!(
            style,
            "opacity: 0.000; transform: translate3d(-50.00px, 0.00px, 0) scale(1.0000);"
        );
    }
}
