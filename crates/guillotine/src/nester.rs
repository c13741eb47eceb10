//! Beam-saw nesting run orchestration.

use std::time::Instant;

use beamnest_core::{
    CutLine, CutOperation, CutOrientation, Error, NestConfig, NestResult, Panel, PlacedPanel,
    Result, SortStrategy, SubSheet,
};

use crate::engine::{CutEngine, IdGen, EPSILON};
use crate::placement::{find_placement, fits_empty_sheet, PlacementFit};

/// Greedy guillotine nesting solver for rectangular panels on stock sheets.
///
/// Placement is strictly sequential: each panel's outcome depends on the
/// free regions left by every prior panel, so a run is single-threaded by
/// design. Output is deterministic for identical inputs and configuration.
#[derive(Debug, Clone)]
pub struct GuillotineNester {
    config: NestConfig,
}

impl GuillotineNester {
    /// Creates a nester, rejecting invalid configurations before any
    /// placement work starts.
    pub fn new(config: NestConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates a nester with the default configuration.
    pub fn default_config() -> Self {
        Self {
            config: NestConfig::default(),
        }
    }

    /// Returns the run configuration.
    pub fn config(&self) -> &NestConfig {
        &self.config
    }

    /// Runs the nesting algorithm over `panels`.
    ///
    /// Panels are sorted per the configured strategy and attempted one by
    /// one: first against the current sheet's free regions, then — only if
    /// the panel could fit an untouched sheet at all — against a newly
    /// opened sheet. Panels that fit nowhere are recorded as failed and the
    /// run continues; every input panel ends up either placed or failed.
    ///
    /// An empty input is a valid no-op that still opens one sheet.
    pub fn nest(&self, panels: &[Panel]) -> Result<NestResult> {
        let start = Instant::now();

        for panel in panels {
            panel.validate()?;
        }

        let ordered = sort_panels(panels, self.config.sort_strategy);
        let mut state = RunState::new(&self.config);
        state.open_sheet();

        for panel in &ordered {
            if state.try_place(panel)? {
                continue;
            }

            // The fresh-sheet attempt is evaluated against a hypothetical
            // untouched sheet first, so an impossible panel never costs a
            // real sheet.
            if fits_empty_sheet(panel, &self.config) {
                state.open_sheet();
                if state.try_place(panel)? {
                    continue;
                }
            }

            log::warn!(
                "panel {} ({:.3} x {:.3}) cannot be placed on a {:.3} x {:.3} sheet",
                panel.id,
                panel.width,
                panel.height,
                self.config.sheet_width,
                self.config.sheet_height
            );
            state.failed.push(panel.clone());
        }

        Ok(state.into_result(start.elapsed().as_millis() as u64))
    }
}

/// Sorts panels per the selected strategy. All comparators are stable, so
/// equal panels keep their input order.
fn sort_panels(panels: &[Panel], strategy: SortStrategy) -> Vec<Panel> {
    let mut ordered = panels.to_vec();
    match strategy {
        SortStrategy::LargestFirst => {
            ordered.sort_by(|a, b| b.max_dimension().total_cmp(&a.max_dimension()));
        }
        SortStrategy::SmallestFirst => {
            ordered.sort_by(|a, b| a.max_dimension().total_cmp(&b.max_dimension()));
        }
        SortStrategy::AreaDescending => {
            ordered.sort_by(|a, b| b.area().total_cmp(&a.area()));
        }
        SortStrategy::AreaAscending => {
            ordered.sort_by(|a, b| a.area().total_cmp(&b.area()));
        }
    }
    ordered
}

/// Mutable state of one run, owned by `nest` for the call's lifetime and
/// never shared or reused across calls.
struct RunState<'a> {
    config: &'a NestConfig,
    engine: CutEngine,
    ids: IdGen,
    free: Vec<SubSheet>,
    arena: Vec<SubSheet>,
    placed: Vec<PlacedPanel>,
    failed: Vec<Panel>,
    cuts: Vec<CutLine>,
    operations: Vec<CutOperation>,
    current_sheet: usize,
}

impl<'a> RunState<'a> {
    fn new(config: &'a NestConfig) -> Self {
        Self {
            config,
            engine: CutEngine::new(config.kerf, config.preferred_cut),
            ids: IdGen::new(),
            free: Vec::new(),
            arena: Vec::new(),
            placed: Vec::new(),
            failed: Vec::new(),
            cuts: Vec::new(),
            operations: Vec::new(),
            current_sheet: 0,
        }
    }

    /// Opens a new stock sheet and makes it the current one. The counter
    /// only advances when the run already holds free regions or placements,
    /// so the first allocation is sheet 0.
    fn open_sheet(&mut self) {
        if !self.free.is_empty() || !self.placed.is_empty() {
            self.current_sheet += 1;
        }
        let sheet = SubSheet {
            id: self.ids.sub_id(),
            x: 0.0,
            y: 0.0,
            width: self.config.sheet_width,
            height: self.config.sheet_height,
            level: 0,
            parent_cut: None,
            sheet_index: self.current_sheet,
        };
        self.arena.push(sheet);
        self.free.push(sheet);
        log::debug!(
            "opened sheet {} ({:.3} x {:.3})",
            self.current_sheet,
            sheet.width,
            sheet.height
        );
    }

    /// Attempts to place `panel` on the current sheet. Returns Ok(false)
    /// when no free region accepts it.
    fn try_place(&mut self, panel: &Panel) -> Result<bool> {
        match find_placement(panel, self.current_sheet, &self.free, self.config.sheet_grain) {
            Some(fit) => {
                self.place(panel, fit)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Consumes the chosen sub-sheet, records the placement and applies the
    /// guillotine cuts.
    fn place(&mut self, panel: &Panel, fit: PlacementFit) -> Result<()> {
        let index = self
            .free
            .iter()
            .position(|s| s.id == fit.sub_sheet)
            .ok_or_else(|| {
                Error::Internal(format!(
                    "placement references sub-sheet {} not in the free set",
                    fit.sub_sheet
                ))
            })?;
        let sub = self.free.remove(index);

        // Geometrically unreachable given a correct cut engine; a trigger
        // means the partitioning logic is broken, so the run aborts rather
        // than clamping.
        if sub.x + fit.width > self.config.sheet_width + EPSILON
            || sub.y + fit.height > self.config.sheet_height + EPSILON
        {
            return Err(Error::Internal(format!(
                "placement of panel {} at ({:.6}, {:.6}) exceeds sheet bounds",
                panel.id, sub.x, sub.y
            )));
        }

        self.placed.push(PlacedPanel {
            panel: panel.clone(),
            x: sub.x,
            y: sub.y,
            width: fit.width,
            height: fit.height,
            rotation_degrees: if fit.rotated { 90 } else { 0 },
            grain: fit.grain,
            sheet_index: sub.sheet_index,
        });

        for piece in self.engine.cut(&sub, fit.width, fit.height, &mut self.ids) {
            self.operations.push(CutOperation {
                sequence: self.operations.len() as u32,
                cut: piece.cut.id,
                description: describe_cut(&piece.cut, &piece.child),
                resulting: piece.child.id,
            });
            self.cuts.push(piece.cut);
            self.arena.push(piece.child);
            self.free.push(piece.child);
        }

        Ok(())
    }

    fn into_result(self, computation_time_ms: u64) -> NestResult {
        NestResult {
            placed: self.placed,
            failed: self.failed,
            free: self.free,
            sub_sheets: self.arena,
            cuts: self.cuts,
            operations: self.operations,
            sheet_count: self.current_sheet + 1,
            computation_time_ms,
        }
    }
}

fn describe_cut(cut: &CutLine, child: &SubSheet) -> String {
    match cut.orientation {
        CutOrientation::Horizontal => format!(
            "horizontal cut at y={:.3}, x {:.3}..{:.3}, sheet {} (frees {:.3} x {:.3})",
            cut.position, cut.start, cut.end, cut.sheet_index, child.width, child.height
        ),
        CutOrientation::Vertical => format!(
            "vertical cut at x={:.3}, y {:.3}..{:.3}, sheet {} (frees {:.3} x {:.3})",
            cut.position, cut.start, cut.end, cut.sheet_index, child.width, child.height
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_rejects_bad_config() {
        assert!(GuillotineNester::new(NestConfig::new(0.0, 100.0)).is_err());
        assert!(GuillotineNester::new(NestConfig::new(100.0, 100.0).with_kerf(-1.0)).is_err());
        assert!(GuillotineNester::new(NestConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_input_allocates_one_sheet() {
        let nester = GuillotineNester::default_config();
        let result = nester.nest(&[]).unwrap();

        assert_eq!(result.sheet_count, 1);
        assert_eq!(result.free.len(), 1);
        assert_eq!(result.free[0].width, 2440.0);
        assert!(result.placed.is_empty());
        assert!(result.failed.is_empty());
    }

    #[test]
    fn test_invalid_panel_rejected() {
        let nester = GuillotineNester::default_config();
        assert!(nester.nest(&[Panel::new(0, -1.0, 10.0)]).is_err());
    }

    #[test]
    fn test_sort_strategies() {
        let panels = vec![
            Panel::new(0, 10.0, 10.0), // area 100, max dim 10
            Panel::new(1, 50.0, 1.0),  // area 50, max dim 50
            Panel::new(2, 20.0, 20.0), // area 400, max dim 20
        ];

        let ids = |v: &[Panel]| v.iter().map(|p| p.id).collect::<Vec<_>>();

        assert_eq!(
            ids(&sort_panels(&panels, SortStrategy::AreaDescending)),
            vec![2, 0, 1]
        );
        assert_eq!(
            ids(&sort_panels(&panels, SortStrategy::AreaAscending)),
            vec![1, 0, 2]
        );
        assert_eq!(
            ids(&sort_panels(&panels, SortStrategy::LargestFirst)),
            vec![1, 2, 0]
        );
        assert_eq!(
            ids(&sort_panels(&panels, SortStrategy::SmallestFirst)),
            vec![0, 2, 1]
        );
    }

    #[test]
    fn test_sort_is_stable() {
        let a = Panel::new(0, 10.0, 10.0);
        let b = Panel::new(1, 10.0, 10.0);
        let ordered = sort_panels(&[a, b], SortStrategy::AreaDescending);
        assert_eq!(ordered[0].id, 0);
        assert_eq!(ordered[1].id, 1);
    }

    #[test]
    fn test_failed_panel_does_not_open_sheet() {
        let config = NestConfig::new(1000.0, 500.0).with_kerf(0.0);
        let nester = GuillotineNester::new(config).unwrap();

        let result = nester.nest(&[Panel::new(0, 2000.0, 1000.0)]).unwrap();
        assert_eq!(result.placed_count(), 0);
        assert_eq!(result.failed_count(), 1);
        assert_eq!(result.sheet_count, 1);
    }

    #[test]
    fn test_second_sheet_opened_when_needed() {
        // Two panels that each nearly fill a sheet
        let config = NestConfig::new(1000.0, 500.0).with_kerf(5.0);
        let nester = GuillotineNester::new(config).unwrap();

        let panels = vec![Panel::new(0, 990.0, 490.0), Panel::new(1, 990.0, 490.0)];
        let result = nester.nest(&panels).unwrap();

        assert_eq!(result.placed_count(), 2);
        assert_eq!(result.sheet_count, 2);
        assert_eq!(result.placed[0].sheet_index, 0);
        assert_eq!(result.placed[1].sheet_index, 1);
    }

    #[test]
    fn test_cut_operations_sequence_monotone() {
        let nester = GuillotineNester::default_config();
        let panels = vec![
            Panel::new(0, 1000.0, 600.0),
            Panel::new(1, 800.0, 400.0),
            Panel::new(2, 300.0, 200.0),
        ];
        let result = nester.nest(&panels).unwrap();

        assert_eq!(result.operations.len(), result.cuts.len());
        for (i, op) in result.operations.iter().enumerate() {
            assert_eq!(op.sequence, i as u32);
            assert_eq!(result.cuts[i].id, op.cut);
        }
    }

    #[test]
    fn test_determinism() {
        let nester = GuillotineNester::default_config();
        let panels: Vec<Panel> = (0..20)
            .map(|i| Panel::new(i, 100.0 + 13.0 * i as f64, 80.0 + 7.0 * i as f64))
            .collect();

        let a = nester.nest(&panels).unwrap();
        let b = nester.nest(&panels).unwrap();

        assert_eq!(a.placed, b.placed);
        assert_eq!(a.cuts, b.cuts);
        assert_eq!(a.sheet_count, b.sheet_count);
    }
}
