pub mod refresh;
pub mod schedules;
pub mod services;
