use grid::{Action, GridTopology};

const SIZES: [(usize, usize); 6] = [(1, 1), (1, 7), (7, 1), (5, 5), (6, 6), (9, 4)];

#[test]
fn coords_and_index_are_a_bijection() {
    for (w, h) in SIZES {
        let grid = GridTopology::new(w, h).unwrap();
        for cell in 0..grid.cell_count() {
            let (x, y) = grid.index_to_coords(cell);
            assert!(x < w && y < h, "{cell} mapped outside {grid}");
            assert_eq!(grid.coords_to_index(x, y), cell);
        }
    }
}

#[test]
fn moving_off_an_edge_clamps_instead_of_wrapping() {
    for (w, h) in SIZES {
        let grid = GridTopology::new(w, h).unwrap();
        for cell in 0..grid.cell_count() {
            let (x, y) = grid.index_to_coords(cell);
            if x == 0 {
                assert_eq!(grid.apply(cell, Action::Left), cell);
            }
            if x == w - 1 {
                assert_eq!(grid.apply(cell, Action::Right), cell);
            }
            if y == 0 {
                assert_eq!(grid.apply(cell, Action::Down), cell);
            }
            if y == h - 1 {
                assert_eq!(grid.apply(cell, Action::Up), cell);
            }
        }
    }
}

#[test]
fn interior_moves_change_exactly_one_axis() {
    let grid = GridTopology::new(5, 5).unwrap();
    let centre = grid.coords_to_index(2, 2);
    assert_eq!(grid.index_to_coords(grid.apply(centre, Action::Up)), (2, 3));
    assert_eq!(grid.index_to_coords(grid.apply(centre, Action::Down)), (2, 1));
    assert_eq!(grid.index_to_coords(grid.apply(centre, Action::Right)), (3, 2));
    assert_eq!(grid.index_to_coords(grid.apply(centre, Action::Left)), (1, 2));
}

#[test]
fn every_move_stays_inside_the_grid() {
    let grid = GridTopology::new(9, 4).unwrap();
    for cell in 0..grid.cell_count() {
        for action in Action::ALL {
            assert!(grid.contains(grid.apply(cell, action)));
        }
    }
}
