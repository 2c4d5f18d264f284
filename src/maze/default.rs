use std::rc::Rc;

use tracing::debug;

use super::Maze;
use crate::world::{Direction, Item, Room, RoomRef, link};

/// The hardcoded maze every new game starts from.
///
/// Several passages are one-way on purpose: the Biblioteca only leads back
/// south, and the Aula N11 cannot be left to the south.
pub(super) fn build() -> Maze {
    let atrio = Room::shared("Atrio");
    let aula_n11 = Room::shared("Aula N11");
    let aula_n10 = Room::shared("Aula N10");
    let laboratorio = Room::shared("Laboratorio Campus");
    let biblioteca = Room::shared("Biblioteca");

    let mut maze = Maze::empty();
    for room in [&atrio, &aula_n11, &aula_n10, &laboratorio, &biblioteca] {
        maze.add_room(Rc::clone(room));
    }

    link(&atrio, Direction::North, &biblioteca);
    link(&atrio, Direction::East, &aula_n11);
    link(&atrio, Direction::South, &aula_n10);
    link(&atrio, Direction::West, &laboratorio);
    link(&aula_n11, Direction::East, &laboratorio);
    link(&aula_n11, Direction::West, &atrio);
    link(&aula_n10, Direction::North, &atrio);
    link(&aula_n10, Direction::East, &aula_n11);
    link(&aula_n10, Direction::West, &laboratorio);
    link(&laboratorio, Direction::East, &atrio);
    link(&laboratorio, Direction::West, &aula_n11);
    link(&biblioteca, Direction::South, &atrio);

    place(&maze, &aula_n10, Item::new("lanterna", 3));
    place(&maze, &atrio, Item::new("osso", 1));

    maze.entry_room = Some(Rc::clone(&atrio));
    maze.current_room = Some(atrio);
    maze.winning_room = Some(biblioteca);

    debug!(rooms = maze.len(), "default maze built");
    maze
}

// Items go to whatever room the maze resolves the name to.
fn place(maze: &Maze, room: &RoomRef, item: Item) {
    let target = maze.find_room(&room.borrow());
    if let Some(target) = target {
        target.borrow_mut().add_item(item);
    }
}
