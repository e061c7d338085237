//! Page glue that sits beside the animation core: mock sign-in and navigation state.

pub mod auth;
pub mod nav;
