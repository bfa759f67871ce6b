/// Cell assignment module

use std::collections::HashMap;
use crate::types::{
    AxialCoord, CellAssignment, ColorPoolItem, ForcedTile, LabelPoolItem, PixelPoint, Terrain,
};

/// Read-once cursor over a shuffled pool
///
/// Advances by one per `take` and never past the end; an exhausted pool
/// simply yields `None`.
struct PoolCursor<'a, T> {
    items: &'a [T],
    next: usize,
}

impl<'a, T> PoolCursor<'a, T> {
    fn new(items: &'a [T]) -> Self {
        PoolCursor { items, next: 0 }
    }

    fn take(&mut self) -> Option<&'a T> {
        let item = self.items.get(self.next)?;
        self.next += 1;
        Some(item)
    }
}

/// Everything the assigner consumes for one generation run
pub struct LayoutInput<'a> {
    pub coords: &'a [AxialCoord],
    pub centers: &'a [PixelPoint],
    pub labels: &'a [LabelPoolItem],
    pub colors: &'a [ColorPoolItem],
    pub forced: &'a [ForcedTile],
    /// Sea-bordering variants turn the horizontal tips into water
    pub coastal_auto_water: bool,
    pub tip_tolerance: f64,
}

/// Mark cells whose pixel-x matches the board's minimum or maximum x
///
/// **Learning Point**: The comparison runs on floating point x with a
/// tolerance rather than on integer coordinates, since several cells of
/// one column can share the extreme x value. Every qualifying cell is marked.
pub fn find_tip_cells(centers: &[PixelPoint], tolerance: f64) -> Vec<bool> {
    let (min_x, max_x) = centers.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), c| {
        (lo.min(c.x), hi.max(c.x))
    });

    centers
        .iter()
        .map(|c| (c.x - min_x).abs() < tolerance || (c.x - max_x).abs() < tolerance)
        .collect()
}

/// Resolve a terrain and optional label for every cell, in lattice order
///
/// Resolution per cell:
/// 1. forced tile at the coordinate: its terrain, a label only if it allows one
/// 2. coastal tip cell: water, never labelled, colour pool untouched
/// 3. otherwise the next colour item (`Unassigned` once exhausted), labelled
///    when the item allows it
///
/// Labels are handed out while any remain; running dry just stops labelling.
pub fn assign_cells(input: &LayoutInput<'_>) -> Vec<CellAssignment> {
    let forced: HashMap<AxialCoord, &ForcedTile> =
        input.forced.iter().map(|tile| (tile.coord, tile)).collect();
    let tips = if input.coastal_auto_water {
        find_tip_cells(input.centers, input.tip_tolerance)
    } else {
        vec![false; input.centers.len()]
    };

    let mut labels = PoolCursor::new(input.labels);
    let mut colors = PoolCursor::new(input.colors);

    input
        .coords
        .iter()
        .zip(input.centers)
        .zip(tips)
        .map(|((&coord, &center), is_tip)| {
            let (terrain, can_label) = if let Some(tile) = forced.get(&coord) {
                (tile.terrain, tile.allow_label)
            } else if is_tip {
                (Terrain::Water, false)
            } else {
                match colors.take() {
                    Some(item) => (item.terrain, item.can_assign),
                    None => (Terrain::Unassigned, false),
                }
            };

            let label = if can_label {
                labels.take().map(|item| item.text.clone())
            } else {
                None
            };

            CellAssignment { coord, center, terrain, label }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex_utils::{build_lattice, lattice_centers, SideLengths};

    fn labels(n: usize) -> Vec<LabelPoolItem> {
        (0..n).map(|i| LabelPoolItem { text: (i + 2).to_string() }).collect()
    }

    fn colors(terrain: Terrain, n: usize, can_assign: bool) -> Vec<ColorPoolItem> {
        vec![ColorPoolItem { terrain, can_assign }; n]
    }

    fn board(sides: SideLengths) -> (Vec<AxialCoord>, Vec<PixelPoint>) {
        let coords = build_lattice(sides);
        let centers = lattice_centers(&coords, 40.0);
        (coords, centers)
    }

    #[test]
    fn every_cell_assigned_once_in_order() {
        let (coords, centers) = board(SideLengths::new(3, 3, 3));
        let label_pool = labels(18);
        let color_pool = colors(Terrain::Forest, 19, true);
        let cells = assign_cells(&LayoutInput {
            coords: &coords,
            centers: &centers,
            labels: &label_pool,
            colors: &color_pool,
            forced: &[],
            coastal_auto_water: false,
            tip_tolerance: 0.1,
        });

        assert_eq!(cells.len(), coords.len());
        for (cell, coord) in cells.iter().zip(&coords) {
            assert_eq!(cell.coord, *coord);
        }
        // 19 assignable cells, only 18 labels
        assert_eq!(cells.iter().filter(|c| c.label.is_some()).count(), 18);
        assert!(cells.last().is_some_and(|c| c.label.is_none()));
    }

    #[test]
    fn forced_tiles_override_pool() {
        let (coords, centers) = board(SideLengths::new(3, 3, 3));
        let forced = [
            ForcedTile::water(0, 0),
            ForcedTile {
                coord: AxialCoord::new(1, 0),
                terrain: Terrain::Gold,
                allow_label: true,
            },
        ];
        let label_pool = labels(30);
        let color_pool = colors(Terrain::Hills, 19, true);
        let cells = assign_cells(&LayoutInput {
            coords: &coords,
            centers: &centers,
            labels: &label_pool,
            colors: &color_pool,
            forced: &forced,
            coastal_auto_water: false,
            tip_tolerance: 0.1,
        });

        let at = |q, r| cells.iter().find(|c| c.coord == AxialCoord::new(q, r)).cloned();
        let water = at(0, 0).expect("center cell");
        assert_eq!(water.terrain, Terrain::Water);
        assert_eq!(water.label, None);
        let gold = at(1, 0).expect("forced gold cell");
        assert_eq!(gold.terrain, Terrain::Gold);
        assert!(gold.label.is_some());
        assert_eq!(cells.iter().filter(|c| c.terrain == Terrain::Hills).count(), 17);
    }

    #[test]
    fn labelled_forced_tiles_stop_when_labels_run_out() {
        let coords = [AxialCoord::new(0, 0), AxialCoord::new(1, 0), AxialCoord::new(2, 0)];
        let centers = lattice_centers(&coords, 40.0);
        let gold = |q| ForcedTile {
            coord: AxialCoord::new(q, 0),
            terrain: Terrain::Gold,
            allow_label: true,
        };
        let forced = [gold(0), gold(1)];
        let label_pool = vec![LabelPoolItem { text: "5".to_string() }];
        let color_pool = colors(Terrain::Forest, 1, true);
        let cells = assign_cells(&LayoutInput {
            coords: &coords,
            centers: &centers,
            labels: &label_pool,
            colors: &color_pool,
            forced: &forced,
            coastal_auto_water: false,
            tip_tolerance: 0.1,
        });

        let resolved: Vec<(Terrain, Option<&str>)> = cells
            .iter()
            .map(|c| (c.terrain, c.label.as_deref()))
            .collect();
        assert_eq!(
            resolved,
            vec![
                (Terrain::Gold, Some("5")),
                (Terrain::Gold, None),
                (Terrain::Forest, None),
            ]
        );
    }

    #[test]
    fn exhausted_color_pool_falls_back_to_unassigned() {
        let (coords, centers) = board(SideLengths::new(2, 2, 2));
        let label_pool = labels(7);
        let color_pool = colors(Terrain::Wheat, 3, true);
        let cells = assign_cells(&LayoutInput {
            coords: &coords,
            centers: &centers,
            labels: &label_pool,
            colors: &color_pool,
            forced: &[],
            coastal_auto_water: false,
            tip_tolerance: 0.1,
        });

        assert_eq!(cells.len(), 7);
        assert_eq!(cells.iter().filter(|c| c.terrain == Terrain::Wheat).count(), 3);
        let fallback: Vec<_> = cells.iter().filter(|c| c.terrain == Terrain::Unassigned).collect();
        assert_eq!(fallback.len(), 4);
        assert!(fallback.iter().all(|c| c.label.is_none()));
        assert_eq!(cells.iter().filter(|c| c.label.is_some()).count(), 3);
    }

    #[test]
    fn coastal_tips_become_water_without_consuming_colors() {
        let (coords, centers) = board(SideLengths::new(4, 5, 4));
        let label_pool = labels(100);
        let color_pool = colors(Terrain::Pasture, 42, true);
        let cells = assign_cells(&LayoutInput {
            coords: &coords,
            centers: &centers,
            labels: &label_pool,
            colors: &color_pool,
            forced: &[],
            coastal_auto_water: true,
            tip_tolerance: 0.1,
        });

        let water: Vec<AxialCoord> = cells
            .iter()
            .filter(|c| c.terrain == Terrain::Water)
            .map(|c| c.coord)
            .collect();
        assert_eq!(water, vec![AxialCoord::new(-3, 0), AxialCoord::new(4, 0)]);
        // 44 cells - 2 tips = exactly the 42 colours, no fallback needed
        assert!(cells.iter().all(|c| c.terrain != Terrain::Unassigned));
        assert_eq!(cells.iter().filter(|c| c.label.is_some()).count(), 42);
    }

    #[test]
    fn forced_tile_wins_over_tip() {
        let (coords, centers) = board(SideLengths::new(3, 3, 3));
        let forced = [ForcedTile {
            coord: AxialCoord::new(-2, 0),
            terrain: Terrain::Mountain,
            allow_label: false,
        }];
        let color_pool = colors(Terrain::Forest, 19, false);
        let cells = assign_cells(&LayoutInput {
            coords: &coords,
            centers: &centers,
            labels: &[],
            colors: &color_pool,
            forced: &forced,
            coastal_auto_water: true,
            tip_tolerance: 0.1,
        });

        assert_eq!(cells[0].terrain, Terrain::Mountain);
        assert_eq!(cells.iter().filter(|c| c.terrain == Terrain::Water).count(), 1);
    }

    #[test]
    fn unique_extremes_mark_two_tips() {
        let (_, centers) = board(SideLengths::new(3, 3, 3));
        let tips = find_tip_cells(&centers, 0.1);
        assert_eq!(tips.iter().filter(|&&t| t).count(), 2);
    }

    #[test]
    fn shared_extremes_mark_every_match() {
        let centers = [
            PixelPoint { x: 0.0, y: 0.0 },
            PixelPoint { x: 0.05, y: 60.0 },
            PixelPoint { x: 30.0, y: 30.0 },
            PixelPoint { x: 60.0, y: 0.0 },
            PixelPoint { x: 60.0, y: 120.0 },
        ];
        assert_eq!(find_tip_cells(&centers, 0.1), vec![true, true, false, true, true]);
    }

    #[test]
    fn no_tips_for_empty_board() {
        assert!(find_tip_cells(&[], 0.1).is_empty());
    }
}
