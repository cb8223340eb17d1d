//! Explicit conversions between entities and transfer shapes.
//!
//! Every flat record converts to and from its `…Response` shape by copying
//! same-named fields. Nothing is renamed or derived.

mod administrator;
mod garden;
mod task;
mod task_history;
mod user;
mod weather_data;
