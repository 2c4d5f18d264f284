mod loader;
mod model;
mod render;
mod validator;

pub use loader::{load_maze_from_file, load_maze_from_str};

// Minimal, intentional surface area: re-export only what maze users need.
pub use model::{Direction, Item, Room, RoomRef, link};
pub use render::describe_room;
pub use validator::{ValidationError, validate_maze};
