//! DOM listeners that feed an [`InputState`].

use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::{JsCast, prelude::Closure};
use web_sys::{KeyboardEvent, MouseEvent};

use super::InputState;
use crate::error::{CoffeeError, Result};
use crate::rendering::canvas::{CanvasSurface, pointer_position};

/// Listens for `keydown`/`keyup` on the document and `mousemove` on the
/// surface's canvas. The listeners live for the rest of the page.
pub fn bind(input: &Rc<RefCell<InputState>>, surface: &CanvasSurface) -> Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| CoffeeError::Surface("no document available".to_string()))?;

    let keys = Rc::clone(input);
    let on_key_down = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        keys.borrow_mut().key_down(&event.key());
    });
    document.add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())?;
    on_key_down.forget();

    let keys = Rc::clone(input);
    let on_key_up = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        keys.borrow_mut().key_up(&event.key());
    });
    document.add_event_listener_with_callback("keyup", on_key_up.as_ref().unchecked_ref())?;
    on_key_up.forget();

    let pointer = Rc::clone(input);
    let canvas = surface.canvas().clone();
    let on_mouse_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let position = pointer_position(&canvas, &event);
        pointer.borrow_mut().pointer_moved(position);
    });
    surface
        .canvas()
        .add_event_listener_with_callback("mousemove", on_mouse_move.as_ref().unchecked_ref())?;
    on_mouse_move.forget();

    log::debug!("input listeners attached");
    Ok(())
}
