//! Client-side navigation for the eCFR agency browser.
//!
//! Maps URL-like paths to displayable views over an in-memory navigation
//! history: the history lives entirely inside the process and never reads
//! or writes any host-document location. The route table is a fixed,
//! ordered list of descriptors built once at startup; resolution is a pure
//! matching function over that table, independent of any rendering layer.
//!
//! The router is generic over the view type, so the two application views
//! (a summary page and an agency-detail page parameterized by agency name)
//! are supplied by the caller as opaque constructors:
//!
//! ```
//! use ecfr_nav::{Param, agency_router};
//!
//! #[derive(Debug, PartialEq)]
//! enum View {
//! 	Summary,
//! 	AgencyDetails(String),
//! }
//!
//! let router = agency_router(
//! 	|| View::Summary,
//! 	|Param(name): Param<String>| View::AgencyDetails(name),
//! )
//! .unwrap();
//!
//! router.push("/agency/Acme").unwrap();
//! assert_eq!(router.current_view(), Some(View::AgencyDetails("Acme".into())));
//! ```

pub mod error;
pub mod handler;
pub mod history;
pub mod params;
pub mod pattern;
pub mod router;
pub mod routes;

pub use error::{ParamError, PatternError, RouterError};
pub use handler::ViewHandler;
pub use history::MemoryHistory;
pub use params::{FromParams, Param, RouteParams};
pub use pattern::PathPattern;
pub use router::{Route, RouteMatch, Router};
pub use routes::{AGENCY_ROUTE, agency_router};
