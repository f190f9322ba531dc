//! Object URLs for locally selected photos.
//!
//! Every URL handed out by a [`PreviewSource`] is wrapped in a [`Preview`] guard
//! which gives it back when dropped, so a preview is released exactly once no
//! matter which wizard transition discards it.

use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;
use web_sys::{File, Url};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not preview photo: {0}")]
pub struct PreviewError(pub String);

pub trait PreviewSource {
    type Photo: Clone;

    fn create_preview(&self, photo: &Self::Photo) -> Result<String, PreviewError>;
    fn release_preview(&self, url: &str);
}

pub struct Preview<S: PreviewSource> {
    url: String,
    source: Rc<S>,
}

impl<S: PreviewSource> Preview<S> {
    pub fn acquire(source: &Rc<S>, photo: &S::Photo) -> Result<Self, PreviewError> {
        let url = source.create_preview(photo)?;
        Ok(Self {
            url,
            source: Rc::clone(source),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl<S: PreviewSource> Drop for Preview<S> {
    fn drop(&mut self) {
        self.source.release_preview(&self.url);
    }
}

impl<S: PreviewSource> std::fmt::Debug for Preview<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preview").field("url", &self.url).finish()
    }
}

/// `URL.createObjectURL` / `URL.revokeObjectURL` over the picked `File`.
#[derive(Debug, Default)]
pub struct BrowserPreviews;

impl PreviewSource for BrowserPreviews {
    type Photo = File;

    fn create_preview(&self, photo: &File) -> Result<String, PreviewError> {
        let url = Url::create_object_url_with_blob(photo)
            .map_err(|e| PreviewError(e.as_string().unwrap_or_else(|| format!("{:?}", e))))?;
        debug!("Created preview {} for {}", url, photo.name());
        Ok(url)
    }

    fn release_preview(&self, url: &str) {
        if let Err(e) = Url::revoke_object_url(url) {
            warn!("Failed to revoke {}: {:?}", url, e);
        }
    }
}

#[cfg(test)]
pub mod fake {
    use super::{PreviewError, PreviewSource};
    use std::cell::{Cell, RefCell};

    /// Hands out `blob:fake/N` URLs and remembers what was released.
    #[derive(Debug, Default)]
    pub struct FakePreviews {
        next: Cell<u32>,
        created: RefCell<Vec<String>>,
        released: RefCell<Vec<String>>,
        pub fail: Cell<bool>,
    }

    impl FakePreviews {
        pub fn created(&self) -> Vec<String> {
            self.created.borrow().clone()
        }

        pub fn released(&self) -> Vec<String> {
            self.released.borrow().clone()
        }

        pub fn live(&self) -> usize {
            self.created.borrow().len() - self.released.borrow().len()
        }
    }

    impl PreviewSource for FakePreviews {
        type Photo = String;

        fn create_preview(&self, photo: &String) -> Result<String, PreviewError> {
            if self.fail.get() {
                return Err(PreviewError(format!("{} is unreadable", photo)));
            }
            let n = self.next.get();
            self.next.set(n + 1);
            let url = format!("blob:fake/{}", n);
            self.created.borrow_mut().push(url.clone());
            Ok(url)
        }

        fn release_preview(&self, url: &str) {
            assert!(
                !self.released.borrow().iter().any(|u| u == url),
                "{} released twice",
                url
            );
            self.released.borrow_mut().push(url.to_string());
        }
    }
}
