use proptest::prelude::*;
use termglow::art::{
    compute_digest, compute_digest_with, render_grid, Cell, Digest, GridSize, HashAlgorithm,
    COLOR_PALETTE, GLYPH_PALETTE,
};
use termglow::theme::NamedColor;

#[test]
fn hand_computed_two_by_one_grid() {
    let grid = render_grid(&Digest::from_hex("d41d8cd9").unwrap(), GridSize::new(2, 1).unwrap());
    assert_eq!(
        grid.cells(),
        &[
            Cell {
                glyph: '░',
                color: NamedColor::Magenta
            },
            Cell {
                glyph: ' ',
                color: NamedColor::Green
            },
        ]
    );
}

#[test]
fn digests_are_32_hex_chars_for_both_algorithms() {
    for algorithm in [HashAlgorithm::Blake3, HashAlgorithm::Sha256, HashAlgorithm::Md5] {
        let digest = compute_digest_with(algorithm, b"termglow");
        assert_eq!(digest.len(), 32);
        assert!(digest.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }
}

#[test]
fn algorithms_produce_different_art() {
    let size = GridSize::default();
    let blake = render_grid(&compute_digest_with(HashAlgorithm::Blake3, b"x"), size);
    let sha = render_grid(&compute_digest_with(HashAlgorithm::Sha256, b"x"), size);
    assert_ne!(blake, sha);
}

proptest! {
    #[test]
    fn same_bytes_same_art(bytes in proptest::collection::vec(any::<u8>(), 0..512),
                           width in 1usize..64, height in 1usize..32) {
        let size = GridSize::new(width, height).unwrap();
        let first = render_grid(&compute_digest(&bytes), size);
        let second = render_grid(&compute_digest(&bytes), size);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn grid_has_requested_shape(bytes in proptest::collection::vec(any::<u8>(), 0..128),
                                width in 1usize..64, height in 1usize..32) {
        let grid = render_grid(&compute_digest(&bytes), GridSize::new(width, height).unwrap());
        prop_assert_eq!(grid.height(), height);
        prop_assert_eq!(grid.rows().count(), height);
        prop_assert!(grid.rows().all(|row| row.len() == width));
        let plain = grid.to_plain_string();
        prop_assert!(plain.lines().all(|line| line.chars().count() == width));
    }

    #[test]
    fn cells_come_from_the_palettes(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
        let grid = render_grid(&compute_digest(&bytes), GridSize::default());
        for cell in grid.cells() {
            prop_assert!(GLYPH_PALETTE.contains(cell.glyph));
            prop_assert!(COLOR_PALETTE.contains(cell.color));
        }
    }

    #[test]
    fn any_hex_digest_fills_the_grid(text in "[0-9a-fA-F]{0,40}",
                                     width in 1usize..16, height in 1usize..8) {
        let grid = render_grid(&Digest::from_hex(text).unwrap(), GridSize::new(width, height).unwrap());
        prop_assert_eq!(grid.cells().len(), width * height);
    }

    #[test]
    fn non_hex_text_is_not_a_digest(text in "[0-9a-f]{0,8}[g-zé ][0-9a-f]{0,8}") {
        prop_assert!(Digest::from_hex(text).is_err());
    }

    #[test]
    fn changing_one_byte_changes_the_digest(bytes in proptest::collection::vec(any::<u8>(), 1..256),
                                            index in any::<prop::sample::Index>()) {
        let mut changed = bytes.clone();
        let i = index.index(changed.len());
        changed[i] = changed[i].wrapping_add(1);
        prop_assert_ne!(compute_digest(&bytes), compute_digest(&changed));
    }
}
