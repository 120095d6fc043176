//! Writes the latest host metrics into the dashboard's label cells.

use dash_core::{RenderedWidget, StatSample};

/// Number of stat strings produced per tick.
pub const STAT_SLOTS: usize = 5;

const UNAVAILABLE: &str = "N/A";

/// Display strings for one sample, in slot order: CPU, RAM, battery, then
/// two fixed placeholders.
pub fn format_stats(sample: &StatSample) -> [String; STAT_SLOTS] {
    let battery = match sample.battery_percent {
        Some(pct) => format!("{pct:.0}"),
        None      => UNAVAILABLE.to_string(),
    };

    [
        format!("🧠 {:.0}%", sample.cpu_percent),
        format!("📦 {:.0}%", sample.ram_percent),
        format!("🔋 {battery}%"),
        format!("🌐 {UNAVAILABLE}"),
        format!("💾 {UNAVAILABLE}"),
    ]
}

/// Assign stat strings to label cells in layout order.
///
/// The i-th label receives slot i; labels past the last slot get their
/// configured text back.  Icons are skipped.
pub fn publish(widgets: &mut [RenderedWidget], sample: &StatSample) {
    let stats = format_stats(sample);

    for (i, label) in widgets
        .iter_mut()
        .filter_map(RenderedWidget::as_label_mut)
        .enumerate()
    {
        match stats.get(i) {
            Some(text) => label.set_text(text),
            None       => label.restore(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dash_core::{IconCell, LabelCell, RenderedKind};
    use std::path::PathBuf;

    fn cell(index: usize, kind: RenderedKind) -> RenderedWidget {
        RenderedWidget { index, row: index / 3, col: index % 3, width: 80, height: 80, kind }
    }

    fn label(index: usize, text: &str) -> RenderedWidget {
        cell(index, RenderedKind::Label(LabelCell::new(text)))
    }

    fn icon(index: usize) -> RenderedWidget {
        cell(index, RenderedKind::Icon(IconCell {
            icon_path: PathBuf::from("/icons/term.png"),
            argv:      vec!["kitty".into()],
            tooltip:   "Terminal".into(),
        }))
    }

    fn texts(widgets: &[RenderedWidget]) -> Vec<String> {
        widgets
            .iter()
            .filter_map(|w| match &w.kind {
                RenderedKind::Label(l) => Some(l.text.clone()),
                RenderedKind::Icon(_)  => None,
            })
            .collect()
    }

    const NO_BATTERY: StatSample = StatSample {
        cpu_percent:     42.0,
        ram_percent:     77.0,
        battery_percent: None,
    };

    #[test]
    fn formats_five_slots() {
        let stats = format_stats(&StatSample::new(12.4, 50.6, Some(99.0)));
        assert_eq!(stats, ["🧠 12%", "📦 51%", "🔋 99%", "🌐 N/A", "💾 N/A"]);
    }

    #[test]
    fn missing_battery_renders_na() {
        assert_eq!(format_stats(&NO_BATTERY)[2], "🔋 N/A%");
    }

    #[test]
    fn three_labels_get_the_first_three_slots() {
        let mut widgets = vec![label(0, "a"), label(1, "b"), label(2, "c")];
        publish(&mut widgets, &NO_BATTERY);
        assert_eq!(texts(&widgets), ["🧠 42%", "📦 77%", "🔋 N/A%"]);
    }

    #[test]
    fn icons_are_skipped_and_untouched() {
        let mut widgets = vec![icon(0), label(1, "a"), icon(2), label(3, "b")];
        let icons_before: Vec<_> = widgets.iter().filter(|w| !w.is_label()).cloned().collect();

        publish(&mut widgets, &NO_BATTERY);

        assert_eq!(texts(&widgets), ["🧠 42%", "📦 77%"]);
        let icons_after: Vec<_> = widgets.iter().filter(|w| !w.is_label()).cloned().collect();
        assert_eq!(icons_before, icons_after);
    }

    #[test]
    fn labels_past_the_last_slot_keep_their_text() {
        let mut widgets: Vec<_> = (0..7).map(|i| label(i, &format!("static {i}"))).collect();
        widgets[5].as_label_mut().unwrap().set_text("stale");

        publish(&mut widgets, &NO_BATTERY);

        assert_eq!(
            texts(&widgets),
            ["🧠 42%", "📦 77%", "🔋 N/A%", "🌐 N/A", "💾 N/A", "static 5", "static 6"]
        );
    }

    #[test]
    fn fourth_label_gets_the_network_placeholder() {
        let mut widgets = vec![label(0, "a"), icon(1), label(2, "b"), label(3, "c"), label(4, "d")];
        publish(&mut widgets, &NO_BATTERY);
        assert_eq!(texts(&widgets)[3], "🌐 N/A");
    }

    #[test]
    fn publishing_is_idempotent() {
        let mut widgets = vec![label(0, "a"), icon(1), label(2, "b"), label(3, "c")];

        publish(&mut widgets, &NO_BATTERY);
        let first = widgets.clone();
        publish(&mut widgets, &NO_BATTERY);

        assert_eq!(first, widgets);
    }

    #[test]
    fn no_labels_is_a_no_op() {
        let mut widgets = vec![icon(0), icon(1)];
        publish(&mut widgets, &NO_BATTERY);
        assert!(texts(&widgets).is_empty());
    }
}
