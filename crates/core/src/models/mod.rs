//! Domain entities and their transfer shapes.
//!
//! Each flat record `E` has a paired `EResponse` with identical fields and a
//! `NewE` input without the store-assigned `id`/timestamp. The
//! [`Administrator`] identity record only has a one-way public view.

pub mod administrator;
pub mod garden;
pub mod task;
pub mod task_history;
pub mod user;
pub mod weather_data;

pub use administrator::{Administrator, AdministratorResponse, NewAdministrator};
pub use garden::{Garden, GardenResponse, NewGarden};
pub use task::{NewTask, Task, TaskResponse};
pub use task_history::{NewTaskHistory, TaskHistory, TaskHistoryResponse};
pub use user::{NewUser, User, UserResponse};
pub use weather_data::{NewWeatherData, WeatherData, WeatherDataResponse};
