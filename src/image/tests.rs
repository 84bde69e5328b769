use super::{file_name, render, save, CANVAS_SIZE, CELL_SIZE};
use crate::{
    basis::{Color, BACKGROUND},
    digest::derive,
    grid::{Pattern, GRID_SIZE},
};
use ::image::Rgb;
use rand::{distributions::Alphanumeric, prelude::*};

fn hello_world() -> (Pattern, Color) {
    let digest = derive("hello world");
    (
        Pattern::from_digest(&digest).unwrap(),
        Color::from_digest(&digest).unwrap(),
    )
}

#[test]
fn canvas_size() {
    for text in ["", "a", "Thy bones are marrowless, thy blood is cold."] {
        let digest = derive(text);
        let image = render(
            &Pattern::from_digest(&digest).unwrap(),
            Color::from_digest(&digest).unwrap(),
        );
        assert_eq!(image.dimensions(), (CANVAS_SIZE, CANVAS_SIZE));
        assert_eq!(image.dimensions(), (250, 250));
    }
}

fn assert_cells_filled(pattern: &Pattern, color: Color) {
    let image = render(pattern, color);

    for pos in pattern.grid().all_pos() {
        let expected: Rgb<u8> = (if pattern[pos] { color } else { BACKGROUND }).into();
        let left = pos.x() as u32 * CELL_SIZE;
        let top = pos.y() as u32 * CELL_SIZE;
        for y in top..top + CELL_SIZE {
            for x in left..left + CELL_SIZE {
                assert_eq!(image.get_pixel(x, y), &expected, "pixel ({}, {})", x, y);
            }
        }
    }
}

#[test]
fn cells_are_filled() {
    let (pattern, color) = hello_world();
    assert_cells_filled(&pattern, color);
}

#[test]
fn cells_are_filled_for_random_text() {
    // fixed rng for stabilize test results
    let mut rng = StdRng::seed_from_u64(0);
    let mut on_columns = [false; GRID_SIZE as usize];
    let mut off_columns = [false; GRID_SIZE as usize];

    for _ in 0..16 {
        let len = rng.gen_range(1..32);
        let text: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect();
        let digest = derive(&text);
        let pattern = Pattern::from_digest(&digest).unwrap();

        for pos in pattern.grid().all_pos() {
            if pattern[pos] {
                on_columns[pos.x() as usize] = true;
            } else {
                off_columns[pos.x() as usize] = true;
            }
        }

        assert_cells_filled(&pattern, Color::from_digest(&digest).unwrap());
    }

    assert!(on_columns.iter().all(|&c| c), "{:?}", on_columns);
    assert!(off_columns.iter().all(|&c| c), "{:?}", off_columns);
}

#[test]
fn row_maps_to_y() {
    // row 0 of "hello world" is ..#.. and row 1 is #####
    let (pattern, color) = hello_world();
    let image = render(&pattern, color);

    assert_eq!(Color::from(*image.get_pixel(0, 0)), BACKGROUND);
    assert_eq!(Color::from(*image.get_pixel(100, 0)), color);
    assert_eq!(Color::from(*image.get_pixel(0, 50)), color);
    assert_eq!(Color::from(*image.get_pixel(249, 99)), color);
    assert_eq!(Color::from(*image.get_pixel(249, 100)), BACKGROUND);
}

#[test]
fn deterministic() {
    let (pattern, color) = hello_world();
    assert_eq!(
        render(&pattern, color).into_raw(),
        render(&pattern, color).into_raw()
    );
}

#[test]
fn file_name_replaces_spaces() {
    assert_eq!(file_name("hello world"), "hello-world.png");
    assert_eq!(file_name("a  b"), "a--b.png");
    assert_eq!(file_name("bill.gates@microsoft.com"), "bill.gates@microsoft.com.png");
}

#[test]
fn save_creates_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("nested").join("out");
    let (pattern, color) = hello_world();
    let image = render(&pattern, color);

    let path = save(&image, &dir, "hello world").unwrap();
    assert_eq!(path, dir.join("hello-world.png"));

    let loaded = ::image::open(&path).unwrap().to_rgb8();
    assert_eq!(loaded.into_raw(), image.into_raw());
}
