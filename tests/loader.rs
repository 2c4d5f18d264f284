use std::io::Write;
use std::path::Path;
use std::rc::Rc;

use diadia_maze::{Direction, Maze, MazeError, load_maze_from_file, validate_maze};

fn shipped_maze_path() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("public/diadia.toml")
}

fn exits(maze: &Maze) -> Vec<(String, Vec<(Direction, String)>)> {
    maze.rooms()
        .iter()
        .map(|r| {
            let room = r.borrow();
            let exits = room
                .directions()
                .map(|d| (d, room.adjacent(d).unwrap().borrow().name().to_string()))
                .collect();
            (room.name().to_string(), exits)
        })
        .collect()
}

#[test]
fn shipped_file_matches_the_default_maze() {
    let loaded = load_maze_from_file(&shipped_maze_path()).unwrap();
    let built = Maze::new();

    assert_eq!(exits(&loaded), exits(&built));
    for (l, b) in loaded.rooms().iter().zip(built.rooms()) {
        assert_eq!(l.borrow().items(), b.borrow().items());
    }
    assert_eq!(
        loaded.current_room().unwrap().borrow().name(),
        built.current_room().unwrap().borrow().name()
    );
    assert_eq!(
        loaded.winning_room().unwrap().borrow().name(),
        built.winning_room().unwrap().borrow().name()
    );
    assert!(validate_maze(&loaded).is_empty());
}

#[test]
fn loaded_rooms_are_the_maze_members() {
    let maze = load_maze_from_file(&shipped_maze_path()).unwrap();
    let winning = maze.winning_room().unwrap();
    let found = maze.find_room_by_name("Biblioteca").unwrap();
    assert!(Rc::ptr_eq(&winning, &found));
}

#[test]
fn loads_from_a_temporary_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        [maze]
        entry = "Cella"

        [[room]]
        name = "Cella"
        [[room.exit]]
        direction = "sud"
        target = "Cella"
        "#
    )
    .unwrap();

    let maze = load_maze_from_file(file.path()).unwrap();
    let cella = maze.current_room().unwrap();
    let south = cella.borrow().adjacent(Direction::South).unwrap();
    assert!(Rc::ptr_eq(&south, &cella));
    assert!(maze.winning_room().is_none());
}

#[test]
fn invalid_file_surfaces_the_reason() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        [maze]
        entry = "Cella"
        winning = "Uscita"
        [[room]]
        name = "Cella"
        "#
    )
    .unwrap();

    let err = load_maze_from_file(file.path()).unwrap_err();
    assert!(matches!(&err, MazeError::Invalid(_)));
    assert_eq!(
        err.to_string(),
        "invalid maze: maze.winning 'Uscita' not found among rooms"
    );
}
