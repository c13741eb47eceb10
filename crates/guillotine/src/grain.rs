//! Grain-direction validation for candidate orientations.

use beamnest_core::{GrainConstraint, GrainDirection, Panel};

/// Decides whether placing `panel` (rotated or not) satisfies its grain
/// constraint, and resolves the final grain axis if it does.
///
/// A candidate orientation is classified horizontal when its effective
/// width is at least its effective height; the `>=` makes a square panel
/// always horizontal, a documented tie-break.
///
/// Returns `None` when the orientation is rejected. Rejection is an
/// ordinary search outcome, not an error.
pub fn resolve_grain(
    panel: &Panel,
    rotated: bool,
    sheet_grain: GrainDirection,
) -> Option<GrainDirection> {
    let is_horizontal = if rotated {
        panel.height >= panel.width
    } else {
        panel.width >= panel.height
    };

    match panel.grain {
        GrainConstraint::MatchSheet => {
            let wants_horizontal = sheet_grain == GrainDirection::Horizontal;
            (is_horizontal == wants_horizontal).then_some(sheet_grain)
        }
        GrainConstraint::FixedHorizontal => is_horizontal.then_some(GrainDirection::Horizontal),
        GrainConstraint::FixedVertical => (!is_horizontal).then_some(GrainDirection::Vertical),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(w: f64, h: f64, grain: GrainConstraint) -> Panel {
        Panel::new(0, w, h).with_grain(grain)
    }

    #[test]
    fn test_match_sheet_horizontal() {
        let wide = panel(2.0, 1.0, GrainConstraint::MatchSheet);
        assert_eq!(
            resolve_grain(&wide, false, GrainDirection::Horizontal),
            Some(GrainDirection::Horizontal)
        );
        // Same panel against a vertical sheet is rejected unrotated...
        assert_eq!(resolve_grain(&wide, false, GrainDirection::Vertical), None);
        // ...but accepted once rotated (tall orientation)
        assert_eq!(
            resolve_grain(&wide, true, GrainDirection::Vertical),
            Some(GrainDirection::Vertical)
        );
    }

    #[test]
    fn test_match_sheet_rejects_tall_on_horizontal_sheet() {
        let tall = panel(1.0, 2.0, GrainConstraint::MatchSheet);
        assert_eq!(resolve_grain(&tall, false, GrainDirection::Horizontal), None);
        assert_eq!(
            resolve_grain(&tall, true, GrainDirection::Horizontal),
            Some(GrainDirection::Horizontal)
        );
    }

    #[test]
    fn test_fixed_horizontal() {
        let wide = panel(3.0, 1.0, GrainConstraint::FixedHorizontal);
        assert_eq!(
            resolve_grain(&wide, false, GrainDirection::Vertical),
            Some(GrainDirection::Horizontal)
        );
        assert_eq!(resolve_grain(&wide, true, GrainDirection::Vertical), None);
    }

    #[test]
    fn test_fixed_vertical() {
        let wide = panel(3.0, 1.0, GrainConstraint::FixedVertical);
        assert_eq!(resolve_grain(&wide, false, GrainDirection::Horizontal), None);
        assert_eq!(
            resolve_grain(&wide, true, GrainDirection::Horizontal),
            Some(GrainDirection::Vertical)
        );
    }

    #[test]
    fn test_square_panel_classified_horizontal() {
        let square = panel(1.0, 1.0, GrainConstraint::FixedHorizontal);
        // Horizontal in both orientations, by the >= tie-break
        assert!(resolve_grain(&square, false, GrainDirection::Horizontal).is_some());
        assert!(resolve_grain(&square, true, GrainDirection::Horizontal).is_some());

        let square = panel(1.0, 1.0, GrainConstraint::FixedVertical);
        assert!(resolve_grain(&square, false, GrainDirection::Horizontal).is_none());
        assert!(resolve_grain(&square, true, GrainDirection::Horizontal).is_none());
    }
}
