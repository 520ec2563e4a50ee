//! Browser front-end for running Advent of Code solutions, either
//! in-browser through the solver worker or via the hosted API.

pub mod capabilities;
pub mod controls;
pub mod persisted;
pub mod solver_bridge;

mod app;

pub use app::App;

pub fn run() {
    yew::Renderer::<App>::new().render();
}
