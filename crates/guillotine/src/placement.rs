//! Best-fit placement search over free sub-sheets.
//!
//! For one panel, scans a sheet's free regions smallest-area first and
//! returns the first (region, orientation) pair that passes both the size
//! check and grain validation. Smallest-fits-first reserves large regions
//! for large panels still to come; once a placement is chosen there is no
//! backtracking.

use beamnest_core::{
    GrainDirection, NestConfig, Panel, RotationConstraint, SubSheet, SubSheetId,
};

use crate::grain::resolve_grain;

/// A placement accepted by the search. The caller consumes the chosen
/// sub-sheet and runs the cut engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementFit {
    /// The free region the panel goes into.
    pub sub_sheet: SubSheetId,
    /// Final placed width.
    pub width: f64,
    /// Final placed height.
    pub height: f64,
    /// Whether the panel was rotated by 90 degrees.
    pub rotated: bool,
    /// Resolved grain axis.
    pub grain: GrainDirection,
}

/// Searches the free regions of `sheet_index` for a spot for `panel`.
///
/// Regions are tried in ascending order of area; for each, the unrotated
/// orientation is tried first, then the rotated one if the panel allows it.
/// The first accepted orientation wins.
pub fn find_placement(
    panel: &Panel,
    sheet_index: usize,
    free: &[SubSheet],
    sheet_grain: GrainDirection,
) -> Option<PlacementFit> {
    let mut candidates: Vec<&SubSheet> = free
        .iter()
        .filter(|s| s.sheet_index == sheet_index)
        .collect();
    // Stable sort keeps creation order among equal-area regions, so runs
    // are deterministic.
    candidates.sort_by(|a, b| a.area().total_cmp(&b.area()));

    for sub in candidates {
        if let Some(fit) = try_orientation(panel, sub, false, sheet_grain) {
            return Some(fit);
        }
        if panel.rotation == RotationConstraint::Rotation90Allowed {
            if let Some(fit) = try_orientation(panel, sub, true, sheet_grain) {
                return Some(fit);
            }
        }
    }

    None
}

/// Checks whether `panel` could be placed anywhere on an untouched sheet.
///
/// Used to decide if opening a new sheet can help a panel that failed on
/// the current one; an impossible panel never costs a fresh sheet.
pub fn fits_empty_sheet(panel: &Panel, config: &NestConfig) -> bool {
    let probe = SubSheet {
        id: 0,
        x: 0.0,
        y: 0.0,
        width: config.sheet_width,
        height: config.sheet_height,
        level: 0,
        parent_cut: None,
        sheet_index: 0,
    };

    try_orientation(panel, &probe, false, config.sheet_grain).is_some()
        || (panel.rotation == RotationConstraint::Rotation90Allowed
            && try_orientation(panel, &probe, true, config.sheet_grain).is_some())
}

fn try_orientation(
    panel: &Panel,
    sub: &SubSheet,
    rotated: bool,
    sheet_grain: GrainDirection,
) -> Option<PlacementFit> {
    let (width, height) = if rotated {
        (panel.height, panel.width)
    } else {
        (panel.width, panel.height)
    };

    if !sub.fits(width, height) {
        return None;
    }
    let grain = resolve_grain(panel, rotated, sheet_grain)?;

    Some(PlacementFit {
        sub_sheet: sub.id,
        width,
        height,
        rotated,
        grain,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use beamnest_core::GrainConstraint;

    fn region(id: SubSheetId, w: f64, h: f64, sheet_index: usize) -> SubSheet {
        SubSheet {
            id,
            x: 0.0,
            y: 0.0,
            width: w,
            height: h,
            level: 0,
            parent_cut: None,
            sheet_index,
        }
    }

    #[test]
    fn test_smallest_region_wins() {
        let free = vec![
            region(0, 100.0, 100.0, 0),
            region(1, 20.0, 10.0, 0),
            region(2, 50.0, 50.0, 0),
        ];
        let panel = Panel::new(0, 15.0, 8.0).with_grain(GrainConstraint::FixedHorizontal);

        let fit = find_placement(&panel, 0, &free, GrainDirection::Horizontal).unwrap();
        assert_eq!(fit.sub_sheet, 1);
        assert!(!fit.rotated);
    }

    #[test]
    fn test_other_sheets_ignored() {
        let free = vec![region(0, 100.0, 100.0, 1)];
        let panel = Panel::new(0, 10.0, 10.0);

        assert!(find_placement(&panel, 0, &free, GrainDirection::Horizontal).is_none());
    }

    #[test]
    fn test_rotation_fallback() {
        // Panel only fits rotated; MatchSheet on a horizontal sheet also
        // requires the rotated (wide) orientation.
        let free = vec![region(0, 1200.0, 700.0, 0)];
        let panel = Panel::new(0, 600.0, 1000.0);

        let fit = find_placement(&panel, 0, &free, GrainDirection::Horizontal).unwrap();
        assert!(fit.rotated);
        assert_eq!(fit.width, 1000.0);
        assert_eq!(fit.height, 600.0);
        assert_eq!(fit.grain, GrainDirection::Horizontal);
    }

    #[test]
    fn test_no_rotation_constraint_respected() {
        let free = vec![region(0, 1200.0, 700.0, 0)];
        let panel = Panel::new(0, 600.0, 1000.0).with_rotation(RotationConstraint::NoRotation);

        assert!(find_placement(&panel, 0, &free, GrainDirection::Horizontal).is_none());
    }

    #[test]
    fn test_exact_fit_accepted() {
        let free = vec![region(0, 600.0, 400.0, 0)];
        let panel = Panel::new(0, 600.0, 400.0).with_grain(GrainConstraint::FixedHorizontal);

        assert!(find_placement(&panel, 0, &free, GrainDirection::Horizontal).is_some());
    }

    #[test]
    fn test_fits_empty_sheet() {
        let config = NestConfig::new(1000.0, 500.0).with_kerf(0.0);

        // Too large in both orientations
        let huge = Panel::new(0, 2000.0, 1000.0);
        assert!(!fits_empty_sheet(&huge, &config));

        // Fits as-is
        let ok = Panel::new(1, 900.0, 400.0);
        assert!(fits_empty_sheet(&ok, &config));

        // Grain-impossible without rotation
        let tall = Panel::new(2, 800.0, 600.0)
            .with_rotation(RotationConstraint::NoRotation)
            .with_grain(GrainConstraint::FixedVertical);
        assert!(!fits_empty_sheet(&tall, &config));
    }
}
