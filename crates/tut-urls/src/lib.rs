//! # tut-urls
//!
//! Named route table for the tutorials catalogue.
//!
//! Pages are addressed by symbolic name. [`UrlConf::reverse`] turns a name
//! (plus arguments) into a path; [`UrlConf::resolve`] matches a path back to
//! its name. Request handling is not part of this crate.
//!
//! ```
//! let urls = tut_urls::app_urls().unwrap();
//! assert_eq!(urls.reverse(tut_urls::names::HOME).unwrap(), "/");
//! ```

mod conf;
mod error;
mod pattern;

pub use conf::{ResolvedRoute, RouteInfo, UrlConf};
pub use error::UrlError;

/// Route names registered by [`app_urls`].
pub mod names {
    pub const HOME: &str = "home";
    pub const TUTORIAL_LIST: &str = "tutorial-list";
    pub const TUTORIAL_DETAIL: &str = "tutorial-detail";
}

/// The application's route table.
///
/// # Errors
///
/// Only fails if the built-in patterns are malformed or overlap.
pub fn app_urls() -> Result<UrlConf, UrlError> {
    UrlConf::new()
        .path("/", names::HOME)?
        .path("/tutorials/", names::TUTORIAL_LIST)?
        .path("/tutorials/{id}/", names::TUTORIAL_DETAIL)
}
