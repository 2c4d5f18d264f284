//! Room graph of the DiaDia text adventure: rooms linked by cardinal
//! directions, items lying in them, and the maze that knows where the player
//! starts, stands and wins.

pub mod error;
pub mod maze;
pub mod world;

pub use error::MazeError;
pub use maze::Maze;
pub use world::{
    Direction, Item, Room, RoomRef, ValidationError, describe_room, link, load_maze_from_file,
    load_maze_from_str, validate_maze,
};
