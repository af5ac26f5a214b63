use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{error, info};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};
use yew::prelude::*;

use super::session::Session;
use crate::error::{GameError, Result};
use crate::layout::Point;
use crate::render::{Images, draw_frame};

#[function_component(GameView)]
pub fn game_view() -> Html {
    let canvas_ref = use_node_ref();
    let session = use_mut_ref(Session::start);

    // Main mount effect (listeners, frame loop, autosave)
    {
        let canvas_ref = canvas_ref.clone();
        let session = session.clone();
        use_effect_with((), move |_| {
            let mounted = match canvas_ref.cast::<HtmlCanvasElement>() {
                Some(canvas) => match Mounted::attach(canvas, session) {
                    Ok(m) => Some(m),
                    Err(e) => {
                        error!("could not start game: {}", e);
                        None
                    }
                },
                None => {
                    error!("canvas_ref not attached to a canvas element");
                    None
                }
            };
            move || {
                if let Some(m) = mounted {
                    m.detach();
                }
            }
        });
    }

    html! {
        <canvas ref={canvas_ref} id="game-canvas" style="display:block; width:100%; height:100%;"></canvas>
    }
}

fn fit_canvas(window: &Window, canvas: &HtmlCanvasElement) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0);
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height.max(0.0) as u32);
}

fn canvas_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
    (canvas.width() as f64, canvas.height() as f64)
}

type FrameCell = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Live browser hooks; dropped on unmount.
struct Mounted {
    window: Window,
    canvas: HtmlCanvasElement,
    frame: FrameCell,
    raf_id: Rc<Cell<Option<i32>>>,
    autosave_id: i32,
    autosave_cb: Closure<dyn FnMut()>,
    mousemove_cb: Closure<dyn FnMut(MouseEvent)>,
    click_cb: Closure<dyn FnMut(MouseEvent)>,
    resize_cb: Closure<dyn FnMut(web_sys::Event)>,
}

impl Mounted {
    fn attach(canvas: HtmlCanvasElement, session: Rc<RefCell<Session>>) -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| GameError::Dom("no window".into()))?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(GameError::dom)?
            .ok_or_else(|| GameError::Dom("no 2d context".into()))?
            .dyn_into()
            .map_err(|_| GameError::Dom("2d context has unexpected type".into()))?;
        let images = Images::load()?;
        fit_canvas(&window, &canvas);

        // RAF loop
        let frame: FrameCell = Rc::new(RefCell::new(None));
        let raf_id = Rc::new(Cell::new(None));
        {
            let frame_loop = frame.clone();
            let raf_id_loop = raf_id.clone();
            let window_loop = window.clone();
            let canvas = canvas.clone();
            let session = session.clone();
            *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                {
                    let mut s = session.borrow_mut();
                    let shake = s.frame();
                    let (w, h) = canvas_size(&canvas);
                    let layout = s.game.layout(w, h);
                    draw_frame(&ctx, &s.game, &layout, &images, shake);
                    s.frame_drawn();
                }
                if let Some(cb) = frame_loop.borrow().as_ref() {
                    raf_id_loop.set(window_loop.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
                }
            }) as Box<dyn FnMut()>));
        }
        if let Some(cb) = frame.borrow().as_ref() {
            raf_id.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        }

        // Autosave interval
        let autosave_cb = {
            let session = session.clone();
            Closure::wrap(Box::new(move || session.borrow().save()) as Box<dyn FnMut()>)
        };
        let autosave_ms = session.borrow().game.cfg.autosave_ms;
        let autosave_id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                autosave_cb.as_ref().unchecked_ref(),
                autosave_ms,
            )
            .map_err(GameError::dom)?;

        let mousemove_cb = {
            let session = session.clone();
            let canvas_mv = canvas.clone();
            Closure::wrap(Box::new(move |e: MouseEvent| {
                let mut s = session.borrow_mut();
                let (w, h) = canvas_size(&canvas_mv);
                let layout = s.game.layout(w, h);
                let p = Point::new(e.offset_x() as f64, e.offset_y() as f64);
                let cursor = if s.game.pointer_move(p, &layout) { "pointer" } else { "default" };
                let _ = canvas_mv.style().set_property("cursor", cursor);
            }) as Box<dyn FnMut(_)>)
        };
        canvas
            .add_event_listener_with_callback("mousemove", mousemove_cb.as_ref().unchecked_ref())
            .map_err(GameError::dom)?;

        let click_cb = {
            let session = session.clone();
            let canvas_ck = canvas.clone();
            Closure::wrap(Box::new(move |e: MouseEvent| {
                let mut s = session.borrow_mut();
                let (w, h) = canvas_size(&canvas_ck);
                let layout = s.game.layout(w, h);
                let p = Point::new(e.offset_x() as f64, e.offset_y() as f64);
                s.click(p, &layout);
            }) as Box<dyn FnMut(_)>)
        };
        canvas
            .add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref())
            .map_err(GameError::dom)?;

        let resize_cb = {
            let window_rs = window.clone();
            let canvas_rs = canvas.clone();
            Closure::wrap(Box::new(move |_e: web_sys::Event| {
                fit_canvas(&window_rs, &canvas_rs);
            }) as Box<dyn FnMut(_)>)
        };
        window
            .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
            .map_err(GameError::dom)?;

        info!("game mounted");
        Ok(Self {
            window,
            canvas,
            frame,
            raf_id,
            autosave_id,
            autosave_cb,
            mousemove_cb,
            click_cb,
            resize_cb,
        })
    }

    fn detach(self) {
        let _ = self.canvas.remove_event_listener_with_callback(
            "mousemove",
            self.mousemove_cb.as_ref().unchecked_ref(),
        );
        let _ = self
            .canvas
            .remove_event_listener_with_callback("click", self.click_cb.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.resize_cb.as_ref().unchecked_ref());
        self.window.clear_interval_with_handle(self.autosave_id);
        if let Some(id) = self.raf_id.get() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // break the self-referencing frame closure
        self.frame.borrow_mut().take();
        let _keep_alive = &self.autosave_cb;
    }
}
