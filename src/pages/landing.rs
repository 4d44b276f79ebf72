use yew::prelude::*;

use crate::components::aurora::AuroraBackground;
use crate::components::chessboard::ChessBoard3D;
use crate::components::cta_button::CtaButton;
use crate::components::reveal::RevealBlock;
use crate::hooks::use_frame_clock;
use crate::motion::{Ease, Keyframes, Reveal, Transition};

struct Feature {
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    delay: f64,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "Spaced Repetition",
        description: "Scientific learning algorithm that optimizes memory retention",
        icon: "🧠",
        delay: 0.0,
    },
    Feature {
        title: "Opening Trainer",
        description: "Build a bulletproof opening repertoire with interactive training",
        icon: "♟️",
        delay: 0.2,
    },
    Feature {
        title: "Tactical Puzzles",
        description: "Sharpen your calculation skills with AI-curated puzzle sets",
        icon: "⚡",
        delay: 0.4,
    },
];

struct Stat {
    number: &'static str,
    label: &'static str,
}

const STATS: [Stat; 3] = [
    Stat { number: "1M+", label: "Positions Trained" },
    Stat { number: "50K+", label: "Active Learners" },
    Stat { number: "95%", label: "Retention Rate" },
];

struct Step {
    step: &'static str,
    title: &'static str,
    description: &'static str,
    gradient: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        step: "01",
        title: "Choose Your Repertoire",
        description: "Select openings and tactical themes you want to master",
        gradient: "linear-gradient(90deg, #6366f1, #a855f7)",
    },
    Step {
        step: "02",
        title: "Train Daily",
        description: "Practice positions with intelligent spaced repetition",
        gradient: "linear-gradient(90deg, #a855f7, #ec4899)",
    },
    Step {
        step: "03",
        title: "Track Progress",
        description: "Watch your retention rate soar with detailed analytics",
        gradient: "linear-gradient(90deg, #ec4899, #ef4444)",
    },
];

/// Stat figures pop in one after another, a tenth of a second apart.
fn stat_reveal(index: usize) -> Reveal {
    Reveal::pop(index as f64 * 0.1)
}

/// Steps alternate sides: even ones slide in from the left.
fn step_reveal(index: usize) -> Reveal {
    Reveal::slide_from(if index % 2 == 0 { -50.0 } else { 50.0 })
}

const SCROLL_HINT_BOB: Keyframes = Keyframes::new(&[0.0, 10.0, 0.0], Ease::EaseInOut);
const SCROLL_HINT_LOOP: Transition = Transition::forever(2.0, Ease::Linear);

#[function_component(ScrollHint)]
fn scroll_hint() -> Html {
    let elapsed = use_frame_clock(true);
    let offset = SCROLL_HINT_BOB.sample_at(&SCROLL_HINT_LOOP, elapsed);

    html! {
        <div class="scroll-hint" style={format!("transform: translate3d(-50%, {:.2}px, 0);", offset)}>
            <svg
                class="scroll-hint__icon"
                fill="none"
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                viewBox="0 0 24 24"
                stroke="currentColor"
            >
                <path d="M19 14l-7 7m0 0l-7-7m7 7V3" />
            </svg>
        </div>
    }
}

#[function_component(HeroSection)]
fn hero_section() -> Html {
    html! {
        <section class="hero">
            <AuroraBackground />

            <div class="hero__board">
                <div class="hero__board-frame">
                    <ChessBoard3D />
                </div>
            </div>

            <div class="hero__content">
                <RevealBlock reveal={Reveal::fade_up(0.0)} on_mount={true}>
                    <h1 class="hero__title gradient-text">{"Master Chess Openings & Tactics"}</h1>
                </RevealBlock>
                <RevealBlock reveal={Reveal::fade_up(0.2)} on_mount={true}>
                    <p class="hero__tagline">{"Smarter, Faster, Forever."}</p>
                    <p class="hero__subtitle">
                        {"AI-powered spaced repetition that helps you remember every move."}
                    </p>
                </RevealBlock>
                <RevealBlock reveal={Reveal::fade_up(0.4)} on_mount={true}>
                    <CtaButton label="Start Training Now" />
                </RevealBlock>
            </div>

            <ScrollHint />
        </section>
    }
}

#[function_component(FeaturesSection)]
fn features_section() -> Html {
    html! {
        <section class="features">
            <div class="container">
                <RevealBlock reveal={Reveal::fade_up(0.0)} class="section-header">
                    <h2 class="section-title gradient-text">{"AI-Powered Learning"}</h2>
                    <p class="section-subtitle">
                        {"Our intelligent system adapts to your learning pace, ensuring you master every position"}
                    </p>
                </RevealBlock>

                <div class="features__grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <RevealBlock reveal={Reveal::fade_up(feature.delay)}>
                            <div class="glass-card feature-card">
                                <div class="feature-card__icon">{feature.icon}</div>
                                <h3 class="feature-card__title">{feature.title}</h3>
                                <p class="feature-card__text">{feature.description}</p>
                                <div class="feature-card__bar"></div>
                            </div>
                        </RevealBlock>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(StatsSection)]
fn stats_section() -> Html {
    html! {
        <section class="stats">
            <div class="container">
                <div class="glass-card glow-effect stats__panel">
                    { for STATS.iter().enumerate().map(|(index, stat)| html! {
                        <RevealBlock reveal={stat_reveal(index)} class="stat">
                            <div class="stat__number gradient-text">{stat.number}</div>
                            <div class="stat__label">{stat.label}</div>
                        </RevealBlock>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(HowItWorksSection)]
fn how_it_works_section() -> Html {
    html! {
        <section class="how-it-works">
            <div class="container">
                <RevealBlock reveal={Reveal::fade_up(0.0)} class="section-header">
                    <h2 class="section-title gradient-text">{"How It Works"}</h2>
                    <p class="section-subtitle">{"Three simple steps to chess mastery"}</p>
                </RevealBlock>

                <div class="steps">
                    { for STEPS.iter().enumerate().map(|(index, step)| html! {
                        <RevealBlock
                            reveal={step_reveal(index)}
                            class={classes!("step", (index % 2 == 1).then_some("step--reversed"))}
                        >
                            <div class="step__number-wrap">
                                <div class="step__number" style={format!("background-image: {};", step.gradient)}>
                                    {step.step}
                                </div>
                            </div>
                            <div class="glass-card step__card">
                                <h3 class="step__title">{step.title}</h3>
                                <p class="step__text">{step.description}</p>
                            </div>
                        </RevealBlock>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(CallToActionSection)]
fn call_to_action_section() -> Html {
    html! {
        <section class="closing-cta">
            <div class="container container--narrow">
                <RevealBlock reveal={Reveal::fade_up(0.0)} class="glass-card glow-effect closing-cta__card">
                    <h2 class="section-title gradient-text">{"Ready to Level Up?"}</h2>
                    <p class="closing-cta__text">{"Join thousands of players improving their chess every day"}</p>
                    <CtaButton label="Get Started Free" large={true} />
                </RevealBlock>
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <main class="landing">
            <HeroSection />
            <FeaturesSection />
            <StatsSection />
            <HowItWorksSection />
            <CallToActionSection />

            <footer class="footer">
                <p>{"© 2024 Chess Trainer AI. Master every move."}</p>
            </footer>

            <style>
                {r#"
                * {
                    box-sizing: border-box;
                }

                body {
                    margin: 0;
                    background: #0a0a0f;
                    font-family: 'Inter', system-ui, -apple-system, sans-serif;
                }

                .landing {
                    position: relative;
                    width: 100%;
                    background: #0a0a0f;
                    color: #ffffff;
                    overflow-x: hidden;
                }

                .container {
                    max-width: 80rem;
                    margin: 0 auto;
                }

                .container--narrow {
                    max-width: 64rem;
                    text-align: center;
                }

                .gradient-text {
                    background: linear-gradient(90deg, #818cf8, #c084fc, #f472b6);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .glass-card {
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 24px;
                    backdrop-filter: blur(16px);
                    -webkit-backdrop-filter: blur(16px);
                }

                .glow-effect {
                    box-shadow: 0 0 80px rgba(139, 92, 246, 0.25);
                }

                /* Hero */
                .hero {
                    position: relative;
                    height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }

                .hero__board {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .hero__board-frame {
                    width: 100%;
                    height: 100%;
                    max-width: 42rem;
                    max-height: 600px;
                }

                .chessboard-canvas {
                    display: block;
                    width: 100%;
                    height: 100%;
                    cursor: grab;
                    touch-action: pan-y;
                }

                .chessboard-canvas:active {
                    cursor: grabbing;
                }

                .hero__content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                    padding: 0 1.5rem;
                    max-width: 64rem;
                    pointer-events: none;
                }

                .hero__content .cta-button {
                    pointer-events: auto;
                }

                .hero__title {
                    font-size: 3.75rem;
                    font-weight: 700;
                    line-height: 1.05;
                    margin: 0 0 1.5rem;
                }

                .hero__tagline {
                    font-size: 1.5rem;
                    color: #d1d5db;
                    margin: 0 0 1rem;
                }

                .hero__subtitle {
                    font-size: 1.25rem;
                    color: #9ca3af;
                    margin: 0 0 3rem;
                }

                .scroll-hint {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 50%;
                    color: #9ca3af;
                }

                .scroll-hint__icon {
                    width: 2rem;
                    height: 2rem;
                }

                /* Buttons */
                .cta-button {
                    position: relative;
                    padding: 1.25rem 3rem;
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #ffffff;
                    background: linear-gradient(90deg, #4f46e5, #9333ea);
                    border: none;
                    border-radius: 9999px;
                    overflow: hidden;
                    cursor: pointer;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .cta-button--large {
                    padding: 1.5rem 4rem;
                    font-size: 1.5rem;
                }

                .cta-button:hover {
                    transform: scale(1.05);
                    box-shadow: 0 25px 50px rgba(168, 85, 247, 0.5);
                }

                .cta-button__label {
                    position: relative;
                    z-index: 1;
                }

                .cta-button__glow {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(90deg, #9333ea, #db2777);
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }

                .cta-button:hover .cta-button__glow {
                    opacity: 1;
                }

                /* Sections */
                .features,
                .how-it-works {
                    position: relative;
                    min-height: 100vh;
                    padding: 8rem 1.5rem;
                }

                .stats,
                .closing-cta {
                    position: relative;
                    padding: 8rem 1.5rem;
                }

                .section-header {
                    text-align: center;
                    margin-bottom: 5rem;
                }

                .section-title {
                    font-size: 3rem;
                    font-weight: 700;
                    margin: 0 0 1.5rem;
                }

                .section-subtitle {
                    font-size: 1.25rem;
                    color: #9ca3af;
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .features__grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }

                .feature-card {
                    padding: 2rem;
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }

                .feature-card:hover {
                    transform: translateY(-10px) scale(1.05);
                }

                .feature-card__icon {
                    font-size: 3.75rem;
                    margin-bottom: 1.5rem;
                }

                .feature-card:hover .feature-card__icon {
                    animation: float 3s ease-in-out infinite;
                }

                @keyframes float {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-10px); }
                }

                .feature-card__title {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin: 0 0 1rem;
                }

                .feature-card__text {
                    font-size: 1.125rem;
                    color: #9ca3af;
                    margin: 0;
                }

                .feature-card__bar {
                    margin-top: 1.5rem;
                    height: 4px;
                    width: 0;
                    background: linear-gradient(90deg, #6366f1, #a855f7);
                    transition: width 0.5s ease;
                }

                .feature-card:hover .feature-card__bar {
                    width: 100%;
                }

                .stats__panel {
                    padding: 4rem;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    text-align: center;
                }

                .stat__number {
                    font-size: 3.75rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .stat__label {
                    font-size: 1.25rem;
                    color: #9ca3af;
                }

                .steps {
                    display: flex;
                    flex-direction: column;
                    gap: 8rem;
                }

                .step {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 3rem;
                }

                .step__number-wrap,
                .step__card {
                    flex: 1;
                }

                .step__number {
                    font-size: 6rem;
                    font-weight: 700;
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                    opacity: 0.2;
                }

                .step__card {
                    padding: 3rem;
                }

                .step__title {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin: 0 0 1.5rem;
                }

                .step__text {
                    font-size: 1.25rem;
                    color: #9ca3af;
                    margin: 0;
                }

                .closing-cta__card {
                    padding: 4rem;
                }

                .closing-cta__text {
                    font-size: 1.5rem;
                    color: #d1d5db;
                    margin: 0 0 3rem;
                }

                .footer {
                    position: relative;
                    padding: 3rem 1.5rem;
                    border-top: 1px solid #1f2937;
                    text-align: center;
                    color: #6b7280;
                }

                @media (min-width: 768px) {
                    .hero__title {
                        font-size: 6rem;
                    }

                    .hero__tagline {
                        font-size: 1.875rem;
                    }

                    .hero__subtitle {
                        font-size: 1.5rem;
                    }

                    .section-title {
                        font-size: 3.75rem;
                    }

                    .features__grid,
                    .stats__panel {
                        grid-template-columns: repeat(3, 1fr);
                    }

                    .stat__number {
                        font-size: 4.5rem;
                    }

                    .step {
                        flex-direction: row;
                    }

                    .step--reversed {
                        flex-direction: row-reverse;
                    }

                    .step__number {
                        font-size: 8rem;
                    }

                    .step__title {
                        font-size: 2.25rem;
                    }
                }
                "#}
            </style>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_cards_stagger_by_a_fifth_of_a_second() {
        let delays: Vec<f64> = FEATURES.iter().map(|f| f.delay).collect();
        assert_eq!(delays, vec![0.0, 0.2, 0.4]);
    }

    #[test]
    fn steps_alternate_sides() {
        assert_eq!(step_reveal(0).from.x, -50.0);
        assert_eq!(step_reveal(1).from.x, 50.0);
        assert_eq!(step_reveal(2).from.x, -50.0);
    }

    #[test]
    fn scroll_hint_bobs_every_two_seconds() {
        assert_eq!(SCROLL_HINT_BOB.sample_at(&SCROLL_HINT_LOOP, 0.0), 0.0);
        assert!((SCROLL_HINT_BOB.sample_at(&SCROLL_HINT_LOOP, 1.0) - 10.0).abs() < 1e-9);
        assert!((SCROLL_HINT_BOB.sample_at(&SCROLL_HINT_LOOP, 3.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn copy_tables_are_complete() {
        assert!(STATS.iter().map(|s| s.number).eq(["1M+", "50K+", "95%"]));
        assert!(STEPS.iter().map(|s| s.step).eq(["01", "02", "03"]));
        assert!(FEATURES
            .iter()
            .map(|f| f.title)
            .eq(["Spaced Repetition", "Opening Trainer", "Tactical Puzzles"]));
    }

    #[test]
    fn stats_pop_a_tenth_of_a_second_apart() {
        for (index, expected) in [0.0, 0.1, 0.2].into_iter().enumerate() {
            let reveal = stat_reveal(index);
            assert!((reveal.transition.delay - expected).abs() < 1e-12);
            assert_eq!(reveal.transition.duration, 0.6);
            assert_eq!(reveal.from.scale, 0.5);
        }
    }
}
