//! Built-in [`Presenter`](crate::api::Presenter) implementations.

mod fanout;
mod json_lines;
mod logging;
mod recording;

pub use fanout::FanoutPresenter;
pub use json_lines::JsonLinesPresenter;
pub use logging::TracingPresenter;
pub use recording::RecordingPresenter;
