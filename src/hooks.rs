use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

use crate::error::{LandingError, LandingResult};

/// Turns `requestAnimationFrame` timestamps into seconds since the first
/// frame of the loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    origin: Option<f64>,
}

impl FrameClock {
    pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
        let origin = *self.origin.get_or_insert(timestamp_ms);
        ((timestamp_ms - origin) / 1000.0).max(0.0)
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

#[derive(Default)]
struct LoopState {
    alive: Cell<bool>,
    in_frame: Cell<bool>,
    pending: Cell<Option<i32>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

/// A running `requestAnimationFrame` loop. Dropping it cancels the pending
/// frame and releases the callback.
pub struct FrameLoop {
    window: Window,
    state: Rc<LoopState>,
}

impl FrameLoop {
    pub fn start<F>(mut on_frame: F) -> LandingResult<Self>
    where
        F: FnMut(f64) + 'static,
    {
        let window = web_sys::window().ok_or(LandingError::NoWindow)?;
        let state = Rc::new(LoopState::default());
        state.alive.set(true);

        let closure = {
            let window = window.clone();
            let state = state.clone();
            let mut clock = FrameClock::default();
            Closure::wrap(Box::new(move |timestamp: f64| {
                state.in_frame.set(true);
                on_frame(clock.tick(timestamp));
                state.in_frame.set(false);

                if !state.alive.get() {
                    return;
                }
                if let Some(cb) = state.callback.borrow().as_ref() {
                    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        Ok(id) => state.pending.set(Some(id)),
                        Err(err) => {
                            state.pending.set(None);
                            log::warn!("frame loop stopped: {}", LandingError::from(err));
                        }
                    }
                }
            }) as Box<dyn FnMut(f64)>)
        };

        let id = window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        state.pending.set(Some(id));
        *state.callback.borrow_mut() = Some(closure);

        Ok(Self { window, state })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.state.alive.set(false);
        if let Some(id) = self.state.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }

        // The callback owns a handle to its own slot, so it has to be taken
        // out to be freed. It must not be freed while it is running.
        release_slot(
            self.state.callback.clone(),
            self.state.in_frame.get(),
            |release| {
                Timeout::new(0, release).forget();
            },
        );
    }
}

/// Empties `slot`, or hands the emptying to `defer` when its value is
/// still on the call stack.
fn release_slot<T: 'static>(
    slot: Rc<RefCell<Option<T>>>,
    in_use: bool,
    defer: impl FnOnce(Box<dyn FnOnce()>),
) {
    if in_use {
        defer(Box::new(move || {
            slot.borrow_mut().take();
        }));
    } else {
        slot.borrow_mut().take();
    }
}

/// Seconds since the frame loop started. The loop runs while `running` is
/// true and restarts from zero when it is switched back on. The value is
/// kept after the loop stops.
#[hook]
pub fn use_frame_clock(running: bool) -> f64 {
    let elapsed = use_state(|| 0.0_f64);

    {
        let elapsed = elapsed.setter();
        use_effect_with_deps(
            move |running| {
                let frame_loop = if *running {
                    match FrameLoop::start(move |seconds| elapsed.set(seconds)) {
                        Ok(frame_loop) => Some(frame_loop),
                        Err(err) => {
                            log::warn!("animation disabled: {}", err);
                            None
                        }
                    }
                } else {
                    None
                };
                move || drop(frame_loop)
            },
            running,
        );
    }

    *elapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_starts_at_zero_on_first_frame() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(12_345.0), 0.0);
        assert_eq!(clock.tick(13_345.0), 1.0);
        assert_eq!(clock.tick(14_845.0), 2.5);
    }

    #[test]
    fn clock_never_runs_backwards_past_origin() {
        let mut clock = FrameClock::default();
        clock.tick(500.0);
        assert_eq!(clock.tick(100.0), 0.0);
    }

    #[test]
    fn idle_slot_is_released_at_once() {
        let slot = Rc::new(RefCell::new(Some(7_u32)));
        let mut deferred = false;
        release_slot(slot.clone(), false, |_| deferred = true);
        assert!(slot.borrow().is_none());
        assert!(!deferred);
    }

    #[test]
    fn running_slot_is_released_later() {
        let slot = Rc::new(RefCell::new(Some(7_u32)));
        let mut queued: Option<Box<dyn FnOnce()>> = None;
        release_slot(slot.clone(), true, |release| queued = Some(release));
        assert_eq!(*slot.borrow(), Some(7));

        let release = queued.take().unwrap();
        release();
        assert!(slot.borrow().is_none());
    }

    #[test]
    fn fresh_clock_restarts() {
        let mut first = FrameClock::default();
        first.tick(0.0);
        first.tick(9_000.0);
        let mut second = FrameClock::default();
        assert_eq!(second.tick(9_000.0), 0.0);
    }
}
