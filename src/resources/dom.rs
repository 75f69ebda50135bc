//! Loads images and audio as detached DOM elements.

use js_sys::Promise;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAudioElement, HtmlImageElement, HtmlMediaElement};

use super::{AudioHandle, ResourceLoader};
use crate::error::Result;

#[derive(Default)]
pub struct DomLoader;

impl ResourceLoader for DomLoader {
    type Image = HtmlImageElement;
    type Audio = HtmlAudioElement;

    fn load_image(&mut self, src: &str) -> Result<HtmlImageElement> {
        let image = HtmlImageElement::new()?;
        image.set_src(src);
        log::debug!("loading image {src}");
        Ok(image)
    }

    fn load_audio(&mut self, src: &str) -> Result<HtmlAudioElement> {
        let audio = HtmlAudioElement::new_with_src(src)?;
        audio.set_preload("auto");
        log::debug!("loading audio {src}");
        Ok(audio)
    }
}

impl AudioHandle for HtmlAudioElement {
    fn play(&self) -> Result<()> {
        let promise: Promise = HtmlMediaElement::play(self)?;
        // playback can be refused later, e.g. before any user gesture
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("audio playback failed: {e:?}");
            }
        });
        Ok(())
    }

    fn pause(&self) -> Result<()> {
        HtmlMediaElement::pause(self)?;
        Ok(())
    }
}
