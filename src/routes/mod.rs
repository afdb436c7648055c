pub mod route;

pub use route::{app, configure};
