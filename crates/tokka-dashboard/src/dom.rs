//! DOM contract
//!
//! Element ids shared by the markup and the logic, and the little the
//! controller needs from a rendered route card. Everything else reaches
//! the page through Leptos views.

use thiserror::Error;

/// Element identifiers shared between the markup and the logic
pub mod ids {
    pub const SERVER_STATUS: &str = "server-status";
    pub const SERVER_INFO: &str = "server-info";
    pub const PLUGINS_LIST: &str = "plugins-list";
    pub const ROUTES_LIST: &str = "routes-list";
    pub const ROUTE_FILTER: &str = "route-filter";
    pub const METHOD_FILTER: &str = "method-filter";
    pub const CONFIG_EDITOR: &str = "config-editor";
    pub const CONFIG_STATUS: &str = "config-status";
    pub const VALIDATE_CONFIG: &str = "validate-config";
    pub const REVERT_CONFIG: &str = "revert-config";
    pub const REFRESH: &str = "refresh";
    pub const VERSION_TAG: &str = "version-tag";
    pub const CONFIG_VERSION: &str = "config-version";
    pub const GATEWAY_INFO: &str = "gateway-info";
    pub const PAGE_ERROR: &str = "page-error";
}

/// A view could not reach its part of the page
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl RenderError {
    pub(crate) fn js(err: wasm_bindgen::JsValue) -> Self {
        RenderError::Dom(format!("{:?}", err))
    }
}

/// Details section of a rendered route card
pub trait CardElement {
    /// Natural height of the content, hidden overflow included
    fn content_height(&self) -> Result<u32, RenderError>;

    /// Fix `max-height` at `px` and flush layout, so the next style change
    /// animates from there
    fn pin_height(&self, px: u32) -> Result<(), RenderError>;
}

impl CardElement for web_sys::HtmlElement {
    fn content_height(&self) -> Result<u32, RenderError> {
        Ok(u32::try_from(self.scroll_height()).unwrap_or(0))
    }

    fn pin_height(&self, px: u32) -> Result<(), RenderError> {
        self.style()
            .set_property("max-height", &format!("{}px", px))
            .map_err(RenderError::js)?;
        // Reading layout forces the pinned height to apply first
        let _ = self.offset_height();
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    /// Card details with a fixed height that records pins
    #[derive(Debug, Default)]
    pub struct FakeCard {
        pub height: u32,
        pub detached: bool,
        pub reject_pin: bool,
        pub pins: RefCell<Vec<u32>>,
    }

    impl FakeCard {
        pub fn with_height(height: u32) -> Self {
            Self {
                height,
                ..Default::default()
            }
        }
    }

    impl CardElement for FakeCard {
        fn content_height(&self) -> Result<u32, RenderError> {
            if self.detached {
                return Err(RenderError::MissingElement("route-details".to_string()));
            }
            Ok(self.height)
        }

        fn pin_height(&self, px: u32) -> Result<(), RenderError> {
            if self.reject_pin {
                return Err(RenderError::Dom("style is read-only".to_string()));
            }
            self.pins.borrow_mut().push(px);
            Ok(())
        }
    }
}
