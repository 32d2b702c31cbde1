//! Inspector for saved view state.
//!
//! Reports, per view, whether a snapshot exists and which stored properties
//! no longer match the live view.

use husk_core::{
    BUTTON_STATE, ControlState, IMAGE_STATE, SnapshotState, TEXT_STATE, VIEW_STATE, ViewId,
    ViewNode, ViewTree,
};

#[derive(Clone, Debug, PartialEq)]
pub struct ViewReport {
    pub id: ViewId,
    pub kind: &'static str,
    pub state: SnapshotState,
    /// Properties whose live value differs from the snapshot.
    pub drift: Vec<&'static str>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Metrics {
    pub saved: usize,
    pub pristine: usize,
    pub drifted: usize,
    pub pending_transitions: usize,
}

pub fn report(tree: &ViewTree, view: &ViewNode) -> ViewReport {
    let id = view.id();
    let store = tree.store();
    let mut drift = Vec::new();

    if let Some(base) = store.get(id, &VIEW_STATE) {
        if base.corner_radius != view.corner_radius {
            drift.push("corner_radius");
        }
        if base.clip_to_bounds != view.clip_to_bounds {
            drift.push("clip_to_bounds");
        }
        if base.user_interaction_enabled != view.user_interaction_enabled {
            drift.push("user_interaction_enabled");
        }
        if base.background_color != view.background_color {
            drift.push("background_color");
        }
        if base.hidden != view.hidden {
            drift.push("hidden");
        }
    }
    if let Some(text) = store.get(id, &TEXT_STATE)
        && Some(text.text_color) != view.text_color()
    {
        drift.push("text_color");
    }
    if let Some(image) = store.get(id, &IMAGE_STATE)
        && image.image.as_ref() != view.image()
    {
        drift.push("image");
    }
    if let Some(button) = store.get(id, &BUTTON_STATE)
        && button.title.as_deref() != view.title(ControlState::NORMAL)
    {
        drift.push("title");
    }

    ViewReport {
        id,
        kind: view.kind().name(),
        state: tree.snapshot_state(id),
        drift,
    }
}

pub struct Inspector {
    pub enabled: bool,
    frame_count: u64,
    pub metrics: Option<Metrics>,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inspector {
    pub fn new() -> Self {
        Self {
            enabled: false,
            frame_count: 0,
            metrics: None,
        }
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    pub fn inspect(&self, tree: &ViewTree) -> Vec<ViewReport> {
        tree.iter().map(|view| report(tree, view)).collect()
    }

    /// Refreshes metrics and returns a one-line summary while enabled.
    pub fn frame(&mut self, tree: &ViewTree) -> Option<String> {
        if !self.enabled {
            return None;
        }
        self.frame_count += 1;

        let reports = self.inspect(tree);
        let saved = reports
            .iter()
            .filter(|r| r.state == SnapshotState::Saved)
            .count();
        let metrics = Metrics {
            saved,
            pristine: reports.len() - saved,
            drifted: reports.iter().filter(|r| !r.drift.is_empty()).count(),
            pending_transitions: tree.pending_transitions(),
        };

        for r in reports.iter().filter(|r| !r.drift.is_empty()) {
            log::debug!(
                "inspector: {:?} ({}) drifted: {}",
                r.id,
                r.kind,
                r.drift.join(", ")
            );
        }

        let line = [
            format!("frame: {}", self.frame_count),
            format!("saved: {}", metrics.saved),
            format!("pristine: {}", metrics.pristine),
            format!("drifted: {}", metrics.drifted),
            format!("pending: {}", metrics.pending_transitions),
        ]
        .join("  |  ");
        self.metrics = Some(metrics);
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use husk_core::{Color, ImageHandle, Manual, Recoverable, ViewKind};

    #[test]
    fn test_pristine_view_reports_no_drift() {
        let mut tree = ViewTree::new();
        let id = tree.insert(ViewKind::Plain);

        let r = report(&tree, tree.get(id).unwrap());
        assert_eq!(r.state, SnapshotState::Pristine);
        assert_eq!(r.kind, "view");
        assert!(r.drift.is_empty());
    }

    #[test]
    fn test_drift_lists_changed_properties() {
        let mut tree = ViewTree::new();
        let label = tree.insert(ViewKind::label("hi", Color::BLACK));
        let image = tree.insert(ViewKind::Image(Some(ImageHandle::new("a"))));
        tree.save_view_state(label);
        tree.save_view_state(image);

        {
            let v = tree.get_mut(label).unwrap();
            v.background_color = Color::WHITE;
            v.set_text_color(Color::CLEAR).unwrap();
        }
        tree.get_mut(image).unwrap().set_image(None).unwrap();

        let r = report(&tree, tree.get(label).unwrap());
        assert_eq!(r.state, SnapshotState::Saved);
        assert_eq!(r.drift, vec!["background_color", "text_color"]);

        let r = report(&tree, tree.get(image).unwrap());
        assert_eq!(r.drift, vec!["image"]);
    }

    #[test]
    fn test_frame_summary_only_when_enabled() {
        let mut tree = ViewTree::with_scheduler(Manual::default());
        let a = tree.insert(ViewKind::button("Go"));
        tree.insert(ViewKind::Plain);
        tree.save_view_state(a);
        tree.get_mut(a).unwrap().corner_radius = 4.0;
        tree.recover_view_state(a, false);

        let mut inspector = Inspector::new();
        assert_eq!(inspector.frame(&tree), None);

        inspector.toggle();
        let line = inspector.frame(&tree).unwrap();
        assert_eq!(
            line,
            "frame: 1  |  saved: 1  |  pristine: 1  |  drifted: 1  |  pending: 2"
        );
        assert_eq!(
            inspector.metrics,
            Some(Metrics {
                saved: 1,
                pristine: 1,
                drifted: 1,
                pending_transitions: 2,
            })
        );
    }
}
