use crate::grid::{calculate_grid_size, GridGeometry};
use dash_config::{GridConfig, Size, WidgetSpec};
use dash_core::{IconCell, LabelCell, RenderedKind, RenderedWidget};
use dash_system::split_command;
use tracing::warn;

/// Everything the dashboard window draws, built once at startup.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub specs:    Vec<WidgetSpec>,
    pub grid:     GridConfig,
    pub geometry: GridGeometry,
    /// One entry per spec, in configuration order.
    pub widgets:  Vec<RenderedWidget>,
}

impl DashboardState {
    /// Size the grid for `specs` and create one cell per entry.
    pub fn build(specs: Vec<WidgetSpec>, grid: GridConfig) -> Self {
        let sizes: Vec<Size> = specs.iter().map(WidgetSpec::size).collect();
        let geometry = calculate_grid_size(&sizes, &grid);

        let widgets = specs
            .iter()
            .enumerate()
            .map(|(index, spec)| render(index, spec, &geometry))
            .collect();

        Self {
            specs,
            grid,
            geometry,
            widgets,
        }
    }

    /// Cells laid out in `row`, left to right.
    pub fn row(&self, row: usize) -> &[RenderedWidget] {
        let start = (row * self.geometry.max_columns).min(self.widgets.len());
        let end = (start + self.geometry.max_columns).min(self.widgets.len());
        &self.widgets[start..end]
    }
}

fn render(index: usize, spec: &WidgetSpec, geometry: &GridGeometry) -> RenderedWidget {
    let (row, col) = geometry.cell_of(index);
    let cell = geometry.cell_size(row, col);

    let kind = match spec {
        WidgetSpec::Icon(icon) => {
            if !icon.icon_path.exists() {
                warn!("Failed to load image from {}", icon.icon_path.display());
            }
            RenderedKind::Icon(IconCell {
                icon_path: icon.icon_path.clone(),
                argv:      split_command(&icon.command),
                tooltip:   icon.tooltip.clone(),
            })
        }
        WidgetSpec::Label(label) => RenderedKind::Label(LabelCell::new(label.text.clone())),
    };

    RenderedWidget {
        index,
        row,
        col,
        width: cell.width,
        height: cell.height,
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dash_config::{IconSpec, LabelSpec};
    use std::path::PathBuf;

    fn icon(w: u32, h: u32, command: &str) -> WidgetSpec {
        WidgetSpec::Icon(IconSpec {
            size:      Size::new(w, h),
            icon_path: PathBuf::from("/nonexistent/icon.png"),
            command:   command.to_string(),
            tooltip:   String::new(),
        })
    }

    fn label(w: u32, h: u32, text: &str) -> WidgetSpec {
        WidgetSpec::Label(LabelSpec { size: Size::new(w, h), text: text.to_string() })
    }

    #[test]
    fn cells_take_column_width_and_row_height() {
        let state = DashboardState::build(
            vec![icon(80, 80, ""), icon(100, 60, ""), icon(90, 90, ""), icon(70, 70, "")],
            GridConfig::default(),
        );

        let extents: Vec<(usize, usize, u32, u32)> = state
            .widgets
            .iter()
            .map(|w| (w.row, w.col, w.width, w.height))
            .collect();
        assert_eq!(
            extents,
            vec![(0, 0, 80, 90), (0, 1, 100, 90), (0, 2, 90, 90), (1, 0, 80, 70)]
        );
    }

    #[test]
    fn widgets_keep_configuration_order_and_kind() {
        let state = DashboardState::build(
            vec![label(10, 10, "a"), icon(10, 10, "kitty -e htop"), label(10, 10, "b")],
            GridConfig::default(),
        );

        assert_eq!(state.widgets.len(), 3);
        assert!(state.widgets.iter().enumerate().all(|(i, w)| w.index == i));
        assert!(state.widgets[0].is_label());
        assert_eq!(
            state.widgets[1].as_icon().map(|icon| icon.argv.clone()),
            Some(vec!["kitty".to_string(), "-e".to_string(), "htop".to_string()])
        );
        match &state.widgets[2].kind {
            RenderedKind::Label(cell) => assert_eq!(cell.original_text, "b"),
            other => panic!("expected label, got {other:?}"),
        }
    }

    #[test]
    fn rows_slice_the_widget_list() {
        let specs = (0..5).map(|i| label(10, 10, &i.to_string())).collect();
        let state = DashboardState::build(specs, GridConfig::default());

        assert_eq!(state.row(0).len(), 3);
        assert_eq!(state.row(1).len(), 2);
        assert!(state.row(2).is_empty());
        assert_eq!(state.row(1)[0].index, 3);
    }

    #[test]
    fn empty_dashboard_builds() {
        let state = DashboardState::build(Vec::new(), GridConfig::default());
        assert!(state.widgets.is_empty());
        assert_eq!(state.geometry.window_width, 20);
        assert!(state.row(0).is_empty());
    }
}
