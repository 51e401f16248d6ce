// Calendar Engine Library
// Date grid, keyboard navigation, event management and overlap layout

pub mod models;
pub mod services;
pub mod utils;
