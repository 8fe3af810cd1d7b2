#![forbid(unsafe_code)]

pub mod actions;
pub mod context;
pub mod routes;
pub mod vm;

pub use actions::{ActionError, LessonAction};
pub use context::{AppContext, UiApp};
pub use routes::{NavigationError, PageKind, Route, RouteQuery};
