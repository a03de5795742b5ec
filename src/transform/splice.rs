//! Applying an insertion plan to a tile grid

use crate::io::configuration::StatueMode;
use crate::io::error::{Result, format_error, index_error};
use crate::spatial::tiles::{Tile, placeholder};
use crate::spatial::TileGrid;
use crate::transform::derive::{derive_darkened_floor, derive_scroll_appearances, derive_statue};
use crate::transform::plan::{Insertion, InsertionPlan, Relocation, Rule, StatueBlock};

/// Convert a 3.4.3 sheet grid into the layout described by `plan`
///
/// Tiles beyond the plan's source layout are row padding and are dropped.
///
/// # Errors
///
/// Returns a format error if the grid holds fewer tiles than the layout, or an
/// index error if the plan references a position outside the grid
pub fn convert(grid: &TileGrid, plan: &InsertionPlan, statues: StatueMode) -> Result<TileGrid> {
    if grid.len() < plan.source_tiles {
        return Err(format_error(
            "tile count",
            &format!("at least {}", plan.source_tiles),
            &grid.len(),
        ));
    }
    let dropped = grid.len() - plan.source_tiles;
    if dropped > 0 {
        log::warn!("ignoring {dropped} tiles after the last glyph of the source layout");
    }

    let mut source = grid.tiles().get(..plan.source_tiles).unwrap_or_default().to_vec();
    relocate(&mut source, &plan.relocations)?;
    let source = TileGrid::from_tiles(source, grid.tile_size(), grid.tiles_per_row())?;

    let spliced = splice(&source, plan)?;
    let statue_tiles = statue_block(&spliced, &source, plan.statues, statues)?;

    let mut tiles = spliced.into_tiles();
    tiles.reserve_exact(plan.output_len().saturating_sub(tiles.len()));
    tiles.extend(statue_tiles);
    debug_assert_eq!(tiles.len(), plan.output_len());
    TileGrid::from_tiles(tiles, grid.tile_size(), grid.tiles_per_row())
}

/// Move tiles in place, one relocation after another
///
/// # Errors
///
/// Returns an index error if either end of a relocation is outside `tiles`
pub fn relocate(tiles: &mut Vec<Tile>, relocations: &[Relocation]) -> Result<()> {
    for relocation in relocations {
        if relocation.from >= tiles.len() {
            return Err(index_error("relocation", relocation.from, tiles.len()));
        }
        if relocation.to >= tiles.len() {
            return Err(index_error("relocation", relocation.to, tiles.len()));
        }
        let tile = tiles.remove(relocation.from);
        tiles.insert(relocation.to, tile);
        log::trace!("moved tile {} to {}", relocation.from, relocation.to);
    }
    Ok(())
}

/// Insert the plan's new tiles into `grid`
///
/// Insertions are applied in ascending source order; each one lands after all
/// tiles inserted before it, so its output position is its source position
/// plus the number of tiles already inserted.
///
/// # Errors
///
/// Returns an index error if an insertion position or a tile it derives from
/// lies outside the grid
pub fn splice(grid: &TileGrid, plan: &InsertionPlan) -> Result<TileGrid> {
    let source = grid.tiles();
    let mut tiles = Vec::with_capacity(plan.spliced_len().max(source.len()));
    let mut cursor = 0;

    for insertion in plan.ordered_insertions() {
        let copied = source
            .get(cursor..insertion.before)
            .ok_or_else(|| index_error("insertion", insertion.before, source.len()))?;
        tiles.extend_from_slice(copied);
        cursor = insertion.before;

        let inserted = produce(grid, insertion)?;
        log::debug!(
            "inserting {} tiles at {} (source position {})",
            inserted.len(),
            tiles.len(),
            insertion.before
        );
        tiles.extend(inserted);
    }
    tiles.extend_from_slice(source.get(cursor..).unwrap_or_default());

    TileGrid::from_tiles(tiles, grid.tile_size(), grid.tiles_per_row())
}

fn produce(grid: &TileGrid, insertion: Insertion) -> Result<Vec<Tile>> {
    match insertion.rule {
        Rule::Placeholder { count } => Ok(vec![placeholder(grid.tile_size()); count]),
        Rule::Darkened { source } => {
            let floor = grid
                .get(source)
                .ok_or_else(|| index_error("floor darkening", source, grid.len()))?;
            Ok(vec![derive_darkened_floor(floor)])
        }
        Rule::ScrollAppearances { first, count } => {
            let existing = grid
                .tiles()
                .get(first..first + count)
                .ok_or_else(|| {
                    index_error("scroll appearances", first + count.saturating_sub(1), grid.len())
                })?;
            let mut appearances = derive_scroll_appearances(existing)?;
            Ok(appearances.split_off(count))
        }
    }
}

/// Statues for the first monsters of the converted layout
///
/// `converted` supplies the monsters in their new order, `source` the floor
/// and generic statue glyphs.
///
/// # Errors
///
/// Returns an index error if the block reaches beyond either grid
pub fn statue_block(
    converted: &TileGrid,
    source: &TileGrid,
    block: StatueBlock,
    mode: StatueMode,
) -> Result<Vec<Tile>> {
    let monsters = converted
        .tiles()
        .get(..block.monsters)
        .ok_or_else(|| {
            index_error(
                "statue generation",
                block.monsters.saturating_sub(1),
                converted.len(),
            )
        })?;

    match mode {
        StatueMode::Derived => {
            let floor = source
                .get(block.floor)
                .ok_or_else(|| index_error("statue generation", block.floor, source.len()))?;
            Ok(monsters
                .iter()
                .map(|monster| derive_statue(monster, floor))
                .collect())
        }
        StatueMode::Generic => {
            let statue = source
                .get(block.generic)
                .ok_or_else(|| index_error("statue generation", block.generic, source.len()))?;
            Ok(vec![statue.clone(); monsters.len()])
        }
    }
}
