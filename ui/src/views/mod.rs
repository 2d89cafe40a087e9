mod home;
pub use home::{HomeScreen, HomeServices};

mod lesson;
pub use lesson::LessonScreen;

mod map;
pub use map::MapScreen;
