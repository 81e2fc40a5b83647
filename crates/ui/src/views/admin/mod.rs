mod dashboard;
mod questions;
mod users;
mod view;

pub use view::AdminView;
