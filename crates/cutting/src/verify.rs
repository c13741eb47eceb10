//! Partition-invariant verification for run results.
//!
//! Checks the geometric and accounting properties a correct run must
//! satisfy: placed panels stay in bounds and never overlap, rotation
//! preserves area, every cut spans the full dimension of the region it
//! divides, and per sheet the placed, free and kerf areas add back up to
//! the sheet area. Intended for tests and for callers that want a
//! defense-in-depth check before sending a result to a saw.

use beamnest_core::{CutLine, CutOrientation, Error, NestConfig, NestResult, Panel, Result};

const EPSILON: f64 = 1e-6;

/// Verifies the partition invariants of `result` against `config`.
///
/// Returns [`Error::InvariantViolation`] describing the first violated
/// property.
pub fn verify_partition(result: &NestResult, config: &NestConfig) -> Result<()> {
    verify_in_bounds(result, config)?;
    verify_no_overlap(result)?;
    verify_area_preservation(result)?;
    verify_cut_spans(result)?;
    verify_material_conservation(result, config)?;
    Ok(())
}

/// Verifies that every input panel ended up in exactly one of the placed
/// or failed lists.
pub fn verify_panel_accounting(result: &NestResult, panels: &[Panel]) -> Result<()> {
    let accounted = result.placed_count() + result.failed_count();
    if accounted != panels.len() {
        return Err(Error::InvariantViolation(format!(
            "{} panels in, {} accounted for ({} placed, {} failed)",
            panels.len(),
            accounted,
            result.placed_count(),
            result.failed_count()
        )));
    }
    Ok(())
}

fn verify_in_bounds(result: &NestResult, config: &NestConfig) -> Result<()> {
    for placed in &result.placed {
        let inside = placed.x >= 0.0
            && placed.y >= 0.0
            && placed.x + placed.width <= config.sheet_width + EPSILON
            && placed.y + placed.height <= config.sheet_height + EPSILON;
        if !inside {
            return Err(Error::InvariantViolation(format!(
                "panel {} at ({:.6}, {:.6}) size {:.6} x {:.6} leaves the sheet",
                placed.panel.id, placed.x, placed.y, placed.width, placed.height
            )));
        }
    }
    Ok(())
}

fn verify_no_overlap(result: &NestResult) -> Result<()> {
    for (i, a) in result.placed.iter().enumerate() {
        for b in &result.placed[i + 1..] {
            if a.overlaps(b) {
                return Err(Error::InvariantViolation(format!(
                    "panels {} and {} overlap on sheet {}",
                    a.panel.id, b.panel.id, a.sheet_index
                )));
            }
        }
    }
    for (i, a) in result.free.iter().enumerate() {
        for b in &result.free[i + 1..] {
            if a.overlaps(b) {
                return Err(Error::InvariantViolation(format!(
                    "free sub-sheets {} and {} overlap on sheet {}",
                    a.id, b.id, a.sheet_index
                )));
            }
        }
    }
    Ok(())
}

fn verify_area_preservation(result: &NestResult) -> Result<()> {
    for placed in &result.placed {
        if (placed.area() - placed.panel.area()).abs() > EPSILON {
            return Err(Error::InvariantViolation(format!(
                "panel {} area changed from {:.9} to {:.9}",
                placed.panel.id,
                placed.panel.area(),
                placed.area()
            )));
        }
    }
    Ok(())
}

/// Every first cut of a sub-sheet spans the region's full width or height;
/// a second cut spans exactly the strip left between the region's edge and
/// the first cut line. Anything else is not executable on a beam saw.
fn verify_cut_spans(result: &NestResult) -> Result<()> {
    for cut in &result.cuts {
        let source = result.sub_sheet(cut.source).ok_or_else(|| {
            Error::InvariantViolation(format!(
                "cut {} references unknown sub-sheet {}",
                cut.id, cut.source
            ))
        })?;

        let siblings: Vec<&CutLine> = result
            .cuts
            .iter()
            .filter(|c| c.source == cut.source)
            .collect();
        let is_first = siblings[0].id == cut.id;

        let (expected_start, expected_end) = if is_first {
            match cut.orientation {
                CutOrientation::Horizontal => (source.x, source.x + source.width),
                CutOrientation::Vertical => (source.y, source.y + source.height),
            }
        } else {
            // The second cut divides the strip between the region's edge
            // and the first cut line.
            let first = siblings[0];
            if first.orientation == cut.orientation {
                return Err(Error::InvariantViolation(format!(
                    "cuts {} and {} on sub-sheet {} share an orientation",
                    first.id, cut.id, cut.source
                )));
            }
            match cut.orientation {
                CutOrientation::Horizontal => (source.x, first.position),
                CutOrientation::Vertical => (source.y, first.position),
            }
        };

        if (cut.start - expected_start).abs() > EPSILON || (cut.end - expected_end).abs() > EPSILON
        {
            return Err(Error::InvariantViolation(format!(
                "cut {} spans {:.6}..{:.6}, expected {:.6}..{:.6} on sub-sheet {}",
                cut.id, cut.start, cut.end, expected_start, expected_end, cut.source
            )));
        }
    }
    Ok(())
}

fn verify_material_conservation(result: &NestResult, config: &NestConfig) -> Result<()> {
    // Degenerate slivers below the geometric tolerance are dropped rather
    // than kept as free regions, so conservation holds to a small
    // area-proportional tolerance.
    let tolerance = (config.sheet_area() * 1e-5).max(1e-9);

    for sheet_index in 0..result.sheet_count {
        let placed: f64 = result.panels_on_sheet(sheet_index).map(|p| p.area()).sum();
        let free: f64 = result.free_on_sheet(sheet_index).map(|s| s.area()).sum();
        let kerf: f64 = result
            .cuts_on_sheet(sheet_index)
            .map(|c| c.kerf_area())
            .sum();

        let total = placed + free + kerf;
        if (total - config.sheet_area()).abs() > tolerance {
            return Err(Error::InvariantViolation(format!(
                "sheet {} accounts for {:.6} of {:.6} ({:.6} placed, {:.6} free, {:.6} kerf)",
                sheet_index,
                total,
                config.sheet_area(),
                placed,
                free,
                kerf
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use beamnest_guillotine::GuillotineNester;

    fn run(config: &NestConfig, panels: &[Panel]) -> NestResult {
        GuillotineNester::new(config.clone())
            .unwrap()
            .nest(panels)
            .unwrap()
    }

    #[test]
    fn test_clean_run_verifies() {
        let config = NestConfig::new(2440.0, 1220.0).with_kerf(5.0);
        let panels = vec![
            Panel::new(0, 1000.0, 600.0),
            Panel::new(1, 800.0, 400.0),
            Panel::new(2, 600.0, 300.0),
            Panel::new(3, 450.0, 450.0),
        ];
        let result = run(&config, &panels);

        verify_partition(&result, &config).unwrap();
        verify_panel_accounting(&result, &panels).unwrap();
    }

    #[test]
    fn test_detects_overlap() {
        let config = NestConfig::new(2440.0, 1220.0);
        let panels = vec![Panel::new(0, 500.0, 300.0)];
        let mut result = run(&config, &panels);

        // Duplicate the placement to force an overlap
        let duplicate = result.placed[0].clone();
        result.placed.push(duplicate);
        assert!(verify_partition(&result, &config).is_err());
    }

    #[test]
    fn test_detects_out_of_bounds() {
        let config = NestConfig::new(2440.0, 1220.0);
        let panels = vec![Panel::new(0, 500.0, 300.0)];
        let mut result = run(&config, &panels);

        result.placed[0].x = 2400.0; // 2400 + 500 > 2440
        assert!(verify_partition(&result, &config).is_err());
    }

    #[test]
    fn test_detects_short_cut_span() {
        let config = NestConfig::new(2440.0, 1220.0).with_kerf(5.0);
        let panels = vec![Panel::new(0, 1000.0, 600.0)];
        let mut result = run(&config, &panels);

        // Shorten the first cut so it stops at the panel edge
        result.cuts[0].end = result.cuts[0].start + 100.0;
        assert!(verify_partition(&result, &config).is_err());
    }

    #[test]
    fn test_detects_lost_panel() {
        let config = NestConfig::new(2440.0, 1220.0);
        let panels = vec![Panel::new(0, 500.0, 300.0), Panel::new(1, 400.0, 200.0)];
        let mut result = run(&config, &panels);

        result.placed.pop(); // silently drop one
        assert!(verify_panel_accounting(&result, &panels).is_err());
    }

    #[test]
    fn test_conservation_with_zero_kerf() {
        let config = NestConfig::new(1000.0, 500.0).with_kerf(0.0);
        let panels = vec![Panel::new(0, 600.0, 400.0), Panel::new(1, 300.0, 100.0)];
        let result = run(&config, &panels);

        verify_partition(&result, &config).unwrap();
    }
}
