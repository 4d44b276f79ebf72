use yew::prelude::*;

use crate::hooks::use_frame_clock;
use crate::motion::{Ease, Keyframes, Transition};

/// One soft-focus colour disc drifting on its own loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Blob {
    /// CSS placement inside the background layer.
    pub anchor: &'static str,
    pub size_px: u32,
    pub color: &'static str,
    pub blur_px: u32,
    pub x: Keyframes,
    pub y: Keyframes,
    pub scale: Keyframes,
    pub transition: Transition,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlobFrame {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

pub const BLOBS: [Blob; 3] = [
    Blob {
        anchor: "top: 0; left: 25%;",
        size_px: 800,
        color: "rgba(99, 102, 241, 0.3)",
        blur_px: 60,
        x: Keyframes::new(&[0.0, 100.0, -50.0, 0.0], Ease::EaseInOut),
        y: Keyframes::new(&[0.0, -100.0, 50.0, 0.0], Ease::EaseInOut),
        scale: Keyframes::new(&[1.0, 1.2, 0.9, 1.0], Ease::EaseInOut),
        transition: Transition::forever(20.0, Ease::Linear),
    },
    Blob {
        anchor: "top: 33.333%; right: 25%;",
        size_px: 600,
        color: "rgba(139, 92, 246, 0.3)",
        blur_px: 60,
        x: Keyframes::new(&[0.0, -80.0, 60.0, 0.0], Ease::EaseInOut),
        y: Keyframes::new(&[0.0, 80.0, -40.0, 0.0], Ease::EaseInOut),
        scale: Keyframes::new(&[1.0, 0.9, 1.1, 1.0], Ease::EaseInOut),
        transition: Transition::forever(15.0, Ease::Linear),
    },
    Blob {
        anchor: "bottom: 0; left: 50%;",
        size_px: 700,
        color: "rgba(168, 85, 247, 0.2)",
        blur_px: 80,
        x: Keyframes::new(&[0.0, 60.0, -80.0, 0.0], Ease::EaseInOut),
        y: Keyframes::new(&[0.0, -60.0, 40.0, 0.0], Ease::EaseInOut),
        scale: Keyframes::new(&[1.0, 1.1, 0.95, 1.0], Ease::EaseInOut),
        transition: Transition::forever(18.0, Ease::Linear),
    },
];

impl Blob {
    pub fn frame(&self, elapsed: f64) -> BlobFrame {
        BlobFrame {
            x: self.x.sample_at(&self.transition, elapsed),
            y: self.y.sample_at(&self.transition, elapsed),
            scale: self.scale.sample_at(&self.transition, elapsed),
        }
    }

    pub fn style(&self, elapsed: f64) -> String {
        let frame = self.frame(elapsed);
        format!(
            "{} width: {size}px; height: {size}px; \
             background: radial-gradient(circle, {} 0%, transparent 70%); \
             filter: blur({}px); \
             transform: translate3d({:.2}px, {:.2}px, 0) scale({:.4});",
            self.anchor,
            self.color,
            self.blur_px,
            frame.x,
            frame.y,
            frame.scale,
            size = self.size_px,
        )
    }
}

#[function_component(AuroraBackground)]
pub fn aurora_background() -> Html {
    let elapsed = use_frame_clock(true);

    html! {
        <div class="aurora" aria-hidden="true">
            { for BLOBS.iter().map(|blob| html! {
                <div class="aurora__blob" style={blob.style(elapsed)}></div>
            }) }
            <style>
                {r#"
                .aurora {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                }

                .aurora__blob {
                    position: absolute;
                    border-radius: 9999px;
                    will-change: transform;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn blobs_start_at_rest() {
        for blob in BLOBS {
            assert_eq!(blob.frame(0.0), BlobFrame { x: 0.0, y: 0.0, scale: 1.0 });
        }
    }

    #[test]
    fn each_blob_loops_on_its_own_period() {
        let durations: Vec<f64> = BLOBS.iter().map(|b| b.transition.duration).collect();
        assert_eq!(durations, vec![20.0, 15.0, 18.0]);

        for blob in BLOBS {
            let period = blob.transition.duration;
            for t in [1.0, 4.2, 9.9] {
                let a = blob.frame(t);
                let b = blob.frame(t + 3.0 * period);
                assert!(close(a.x, b.x) && close(a.y, b.y) && close(a.scale, b.scale));
            }
        }
    }

    #[test]
    fn first_blob_reaches_its_second_keyframe() {
        let blob = BLOBS[0];
        let frame = blob.frame(20.0 / 3.0);
        assert!((frame.x - 100.0).abs() < 1e-6);
        assert!((frame.y + 100.0).abs() < 1e-6);
        assert!((frame.scale - 1.2).abs() < 1e-6);
    }

    #[test]
    fn style_carries_placement_and_transform() {
        let style = BLOBS[2].style(0.0);
        assert!(style.starts_with("bottom: 0; left: 50%;"));
        assert!(style.contains("width: 700px; height: 700px;"));
        assert!(style.contains("blur(80px)"));
        assert!(style.ends_with("translate3d(0.00px, 0.00px, 0) scale(1.0000);"));
    }
}
