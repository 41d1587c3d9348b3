//! Asynchronous background-image decoding.
//!
//! The only asynchronous operation in the editor: turning a user-selected
//! file into a decoded [`HtmlImageElement`]. The file is exposed to the
//! browser through a temporary object URL wrapped in an RAII guard, so the
//! URL is revoked no matter how the load settles (success, decode failure,
//! or an early return). Completion is delivered exactly once through a
//! oneshot channel bridged from the element's `onload`/`onerror` handlers.
//!
//! A decode failure never installs anything; callers leave their prior
//! background untouched.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, File, HtmlImageElement, Url};

/// Failure modes of a background-image load.
#[derive(Debug, Error)]
pub enum ImageError {
    /// The selected file is not decodable as an image.
    #[error("selected file could not be decoded as an image")]
    Decode,
    /// The browser refused to create the image element or object URL.
    #[error("browser image resources were unavailable")]
    ResourceUnavailable,
    /// The load settled without ever delivering a completion event.
    #[error("image load was dropped before it completed")]
    Interrupted,
}

/// Temporary object URL, revoked on drop.
struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    fn for_file(file: &File) -> Result<Self, ImageError> {
        match Url::create_object_url_with_blob(file) {
            Ok(url) => Ok(Self { url }),
            Err(_) => Err(ImageError::ResourceUnavailable),
        }
    }

    fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if Url::revoke_object_url(&self.url).is_err() {
            log::warn!("failed to revoke background image object URL");
        }
    }
}

type Settled = Result<(), ()>;

/// Decode a user-selected file into an image element usable as a paint
/// source.
///
/// One-shot: resolves exactly once, with the temporary object URL released
/// on both outcomes. A later upload naturally supersedes an earlier one;
/// whichever load completes last is the one its caller installs.
///
/// # Errors
///
/// [`ImageError::Decode`] when the file is not an image (logged, so the
/// failure is observable); [`ImageError::ResourceUnavailable`] when the
/// browser cannot supply the element or URL; [`ImageError::Interrupted`]
/// when the load settles without a completion event.
pub async fn load_background_image(file: &File) -> Result<HtmlImageElement, ImageError> {
    let url = ObjectUrl::for_file(file)?;
    let image = match HtmlImageElement::new() {
        Ok(image) => image,
        Err(_) => return Err(ImageError::ResourceUnavailable),
    };

    let (sender, receiver) = oneshot::channel::<Settled>();
    let sender = Rc::new(RefCell::new(Some(sender)));

    // Handlers must be attached before the src assignment starts the load.
    let onload = settle_once(&sender, Ok(()));
    let onerror = settle_once(&sender, Err(()));
    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    image.set_src(url.as_str());

    let outcome = receiver.await;

    image.set_onload(None);
    image.set_onerror(None);
    drop(url);

    match outcome {
        Ok(Ok(())) => Ok(image),
        Ok(Err(())) => {
            log::error!("failed to decode background image");
            Err(ImageError::Decode)
        }
        Err(oneshot::Canceled) => Err(ImageError::Interrupted),
    }
}

/// Build an event handler that settles the shared oneshot sender with
/// `outcome`. Whichever of the two handlers fires first wins; the other
/// finds the sender already taken.
fn settle_once(sender: &Rc<RefCell<Option<oneshot::Sender<Settled>>>>, outcome: Settled) -> Closure<dyn FnMut(Event)> {
    let sender = Rc::clone(sender);
    Closure::wrap(Box::new(move |_event: Event| {
        if let Some(tx) = sender.borrow_mut().take() {
            if tx.send(outcome).is_err() {
                log::debug!("background image load settled after its caller went away");
            }
        }
    }) as Box<dyn FnMut(Event)>)
}
