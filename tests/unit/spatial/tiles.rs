//! Tests for placeholder and padding tile generation

#[cfg(test)]
mod tests {
    use tilesheet360::io::configuration::{PADDING_PIXEL, PLACEHOLDER_CROSS, PLACEHOLDER_FILL};
    use tilesheet360::spatial::tiles::{TileSize, padding, placeholder};

    // Tests the cross pattern of a 32x32 placeholder at corners and center
    // Verified by swapping fill and cross colors
    #[test]
    fn test_placeholder_32_pattern() {
        let tile = placeholder(TileSize::square(32));

        assert_eq!(tile.dimensions(), (32, 32));
        for (x, y) in [(0, 0), (31, 0), (0, 31), (31, 31), (16, 16), (15, 16)] {
            assert_eq!(tile.get_pixel(x, y).0, PLACEHOLDER_CROSS, "({x}, {y})");
        }
        for (x, y) in [(16, 0), (0, 16), (31, 16), (16, 31), (8, 20)] {
            assert_eq!(tile.get_pixel(x, y).0, PLACEHOLDER_FILL, "({x}, {y})");
        }
    }

    // Tests each diagonal is exactly two pixels wide at 32 across every row
    // Verified by widening the band to both sides of the diagonal
    #[test]
    fn test_placeholder_thickness_scales() {
        let large = placeholder(TileSize::square(32));
        let cross_in_row = |y: u32| -> Vec<u32> {
            (0..32)
                .filter(|&x| large.get_pixel(x, y).0 == PLACEHOLDER_CROSS)
                .collect()
        };
        assert_eq!(cross_in_row(10), vec![9, 10, 20, 21]);
        assert_eq!(cross_in_row(4), vec![3, 4, 26, 27]);
        assert_eq!(cross_in_row(0), vec![0, 30, 31]);
        assert_eq!(large.get_pixel(1, 0).0, PLACEHOLDER_FILL);

        let small = placeholder(TileSize::square(16));
        assert_eq!(small.get_pixel(0, 0).0, PLACEHOLDER_CROSS);
        assert_eq!(small.get_pixel(1, 0).0, PLACEHOLDER_FILL);
        let single: Vec<u32> = (0..16)
            .filter(|&x| small.get_pixel(x, 5).0 == PLACEHOLDER_CROSS)
            .collect();
        assert_eq!(single, vec![5, 10]);
    }

    // Tests tiny tiles still get a one pixel cross
    // Verified by removing the minimum thickness clamp
    #[test]
    fn test_placeholder_minimum_thickness() {
        let tile = placeholder(TileSize::square(4));

        let cross = tile
            .pixels()
            .filter(|pixel| pixel.0 == PLACEHOLDER_CROSS)
            .count();
        assert_eq!(cross, 8);
        assert_eq!(tile.get_pixel(1, 1).0, PLACEHOLDER_CROSS);
        assert_eq!(tile.get_pixel(2, 1).0, PLACEHOLDER_CROSS);
        assert_eq!(tile.get_pixel(1, 0).0, PLACEHOLDER_FILL);
    }

    // Tests non-square placeholders keep the cross anchored at the corners
    // Verified by measuring both diagonals against the width only
    #[test]
    fn test_placeholder_non_square_corners() {
        let size = TileSize {
            width: 32,
            height: 16,
        };
        let tile = placeholder(size);

        assert_eq!(tile.dimensions(), (32, 16));
        for (x, y) in [(0, 0), (31, 0), (0, 15), (31, 15)] {
            assert_eq!(tile.get_pixel(x, y).0, PLACEHOLDER_CROSS, "({x}, {y})");
        }
        assert_eq!(tile.get_pixel(16, 0).0, PLACEHOLDER_FILL);
        // the shallow diagonals stay connected: one pixel per column
        for x in 0..32 {
            let column = (0..16)
                .filter(|&y| tile.get_pixel(x, y).0 == PLACEHOLDER_CROSS)
                .count();
            assert!(column >= 1, "column {x}");
        }
    }

    // Tests padding tiles are fully transparent
    // Verified by filling padding with the placeholder color
    #[test]
    fn test_padding_is_transparent() {
        let tile = padding(TileSize::square(8));

        assert_eq!(tile.dimensions(), (8, 8));
        assert!(tile.pixels().all(|pixel| pixel.0 == PADDING_PIXEL));
        assert_eq!(PADDING_PIXEL[3], 0);
    }

    // Tests size helpers
    // Verified by reporting zero-width sizes as non-empty
    #[test]
    fn test_tile_size_helpers() {
        assert!(TileSize { width: 0, height: 4 }.is_empty());
        assert!(!TileSize::square(1).is_empty());
        assert_eq!(TileSize::of(&padding(TileSize::square(3))), TileSize::square(3));
    }
}
