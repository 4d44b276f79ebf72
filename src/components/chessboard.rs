use web_sys::{Element, HtmlCanvasElement, PointerEvent};
use yew::prelude::*;

use crate::chessboard::{paint, raster, BoardScene, OrbitCamera, Rotation};
use crate::config;
use crate::error::{LandingError, LandingResult};
use crate::hooks::use_frame_clock;

fn pixel_ratio() -> f64 {
    web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .clamp(1.0, config::MAX_PIXEL_RATIO)
}

fn draw(
    canvas_ref: &NodeRef,
    scene: &BoardScene,
    rotation: Rotation,
    camera: &OrbitCamera,
) -> LandingResult<()> {
    let canvas = canvas_ref
        .cast::<HtmlCanvasElement>()
        .ok_or(LandingError::CanvasNotMounted)?;
    let ratio = pixel_ratio();
    let (width, height) = paint::fit_to_element(&canvas, ratio);
    if width == 0.0 || height == 0.0 {
        return Ok(());
    }

    let ctx = paint::context_2d(&canvas)?;
    let polygons = raster::rasterize(scene, rotation, &camera.view(width, height));
    paint::paint(&ctx, &polygons, width, height, ratio)
}

/// Slowly swaying 3D board for the hero. Drag to orbit.
#[function_component(ChessBoard3D)]
pub fn chess_board_3d() -> Html {
    let canvas_ref = use_node_ref();
    let board = use_mut_ref(BoardScene::build);
    let camera = use_mut_ref(OrbitCamera::default);
    let drag_from = use_mut_ref(|| None::<(i32, i32)>);
    let failed = use_state(|| false);
    let elapsed = use_frame_clock(!*failed);

    {
        use_effect_with_deps(
            |_| {
                log::debug!("chessboard mounted");
                || log::debug!("chessboard unmounted")
            },
            (),
        );
    }

    {
        let canvas_ref = canvas_ref.clone();
        let board = board.clone();
        let camera = camera.clone();
        let failed = failed.clone();
        use_effect(move || {
            if !*failed {
                let mut board = board.borrow_mut();
                let (scene, handle) = &mut *board;
                handle.on_frame(elapsed);
                if let Err(err) = draw(&canvas_ref, scene, handle.rotation(), &camera.borrow()) {
                    log::warn!("chessboard not painted: {}", err);
                    failed.set(true);
                }
            }
            || ()
        });
    }

    let on_pointer_down = {
        let drag_from = drag_from.clone();
        Callback::from(move |e: PointerEvent| {
            if let Some(target) = e.target_dyn_into::<Element>() {
                let _ = target.set_pointer_capture(e.pointer_id());
            }
            *drag_from.borrow_mut() = Some((e.client_x(), e.client_y()));
        })
    };

    let on_pointer_move = {
        let drag_from = drag_from.clone();
        let camera = camera.clone();
        let canvas_ref = canvas_ref.clone();
        Callback::from(move |e: PointerEvent| {
            let mut drag_from = drag_from.borrow_mut();
            let Some((x0, y0)) = *drag_from else {
                return;
            };
            let height = canvas_ref
                .cast::<HtmlCanvasElement>()
                .map(|c| f64::from(c.client_height()))
                .unwrap_or(0.0);
            let (x, y) = (e.client_x(), e.client_y());
            camera
                .borrow_mut()
                .drag(f64::from(x - x0), f64::from(y - y0), height);
            *drag_from = Some((x, y));
        })
    };

    let on_pointer_end = {
        let drag_from = drag_from.clone();
        Callback::from(move |_: PointerEvent| {
            *drag_from.borrow_mut() = None;
        })
    };

    html! {
        <canvas
            ref={canvas_ref}
            class="chessboard-canvas"
            aria-label="Rotating 3D chessboard"
            onpointerdown={on_pointer_down}
            onpointermove={on_pointer_move}
            onpointerup={on_pointer_end.clone()}
            onpointercancel={on_pointer_end.clone()}
            onpointerleave={on_pointer_end}
        />
    }
}
