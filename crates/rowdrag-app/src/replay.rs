//! Run a scenario against the headless host and collect what happened.

use rowdrag_common::{
    ElementInfo, EventBus, Notification, PointerSample, PressTarget, ReorderError, RowId, TableId,
};
use rowdrag_config::{RowReorderConfig, RowReorderInit};
use rowdrag_engine::headless::{
    HeadlessSurface, MemoryRow, MemoryTable, RecordingSubmitter, SubmitCall,
};
use rowdrag_engine::surface::WindowMetrics;
use rowdrag_engine::{
    CommitPath, DragInput, HostTable, Listeners, Outcome, Registry, Surface, Verdict,
};
use serde::Serialize;
use tokio::sync::broadcast::error::TryRecvError;
use tracing::{debug, info, warn};

use crate::scenario::{Scenario, Step};

const BUS_CAPACITY: usize = 1024;

#[derive(Debug, Serialize)]
pub struct Report {
    pub attached: bool,
    pub config: Option<RowReorderConfig>,
    pub outcomes: Vec<Outcome>,
    pub notifications: Vec<Notification>,
    pub submissions: Vec<SubmitCall>,
    /// Rows in final display order.
    pub rows: Vec<MemoryRow>,
    pub draws: usize,
}

impl Report {
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self)
            .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize report: {e}\"}}"))
    }
}

fn sample(x: f64, y: f64, touch: bool) -> PointerSample {
    if touch {
        PointerSample::touch(x, y)
    } else {
        PointerSample::mouse(x, y)
    }
}

fn build_surface(scenario: &Scenario) -> HeadlessSurface {
    let layout = &scenario.table;
    let client_width = if layout.horizontal_overflow {
        layout.window_width - 15.0
    } else {
        layout.window_width
    };
    let surface = HeadlessSurface::new()
        .with_origin(layout.origin)
        .with_header_height(layout.header_height)
        .with_width(layout.width)
        .with_document_height(layout.document_height)
        .with_window(WindowMetrics {
            height: layout.window_height,
            width: layout.window_width,
            scroll_top: 0.0,
            inner_width: layout.window_width,
            client_width,
        });
    match layout.container {
        Some(area) => surface.with_container(area),
        None => surface,
    }
}

fn input_for(step: &Step, rows: &[RowId], columns: usize) -> Result<Option<DragInput>, ReorderError> {
    let input = match step {
        Step::Down {
            row,
            x,
            y,
            touch,
            path,
        } => {
            let handle = rows.get(*row).copied().ok_or_else(|| {
                ReorderError::Scenario(format!("step presses row {row} but there are {}", rows.len()))
            })?;
            let path = path
                .clone()
                .unwrap_or_else(|| vec![ElementInfo::new("td").at(0, columns.max(1))]);
            DragInput::PointerDown {
                sample: sample(*x, *y, *touch),
                target: PressTarget::new(handle, path),
            }
        }
        Step::Move { x, y, touch } => DragInput::PointerMove(sample(*x, *y, *touch)),
        Step::Up { x, y, touch } => DragInput::PointerUp(sample(*x, *y, *touch)),
        Step::Key { key } => DragInput::KeyUp(key.clone()),
        Step::Tick { .. } | Step::Submission { .. } => return Ok(None),
    };
    Ok(Some(input))
}

pub fn run(scenario: &Scenario, host_defaults: Option<&RowReorderInit>) -> Result<Report, ReorderError> {
    let bus = EventBus::new(BUS_CAPACITY);
    let mut rx = bus.subscribe();

    let mut table =
        MemoryTable::new(scenario.table.columns.clone()).with_listeners(Listeners::with_bus(bus));
    table.set_sort(scenario.table.sort.clone());
    if scenario.veto {
        table
            .listeners_mut()
            .on(Notification::ROW_REORDER, |_| Verdict::Veto);
    }

    let mut surface = build_surface(scenario);
    let rows: Vec<RowId> = scenario
        .rows
        .iter()
        .map(|entry| {
            let row = table.push_row(entry.key.clone(), entry.data.clone());
            surface.add_row(row, entry.height);
            row
        })
        .collect();

    let (commit, log) = if scenario.editor {
        let submitter = RecordingSubmitter::new();
        let log = submitter.log();
        (CommitPath::Delegated(Box::new(submitter)), Some(log))
    } else {
        (CommitPath::Direct, None)
    };

    let id = TableId::named("scenario");
    let mut registry = Registry::new();
    let attached =
        registry.attach_from_init(id.clone(), Some(&scenario.row_reorder), host_defaults, commit)?;
    info!(table = %id, attached, rows = rows.len(), steps = scenario.steps.len(), "replaying scenario");

    let mut outcomes = Vec::new();
    if let Some(controller) = registry.get_mut(&id) {
        let columns = scenario.table.columns.len();
        for (index, step) in scenario.steps.iter().enumerate() {
            let draws = table.draw_count();
            match step {
                Step::Tick { count } => {
                    for _ in 0..*count {
                        outcomes.push(controller.handle(DragInput::AutoscrollTick, &mut table, &mut surface));
                    }
                }
                Step::Submission { outcome } => {
                    outcomes.push(controller.finish_submission(*outcome, &mut table));
                }
                _ => {
                    if let Some(input) = input_for(step, &rows, columns)? {
                        outcomes.push(controller.handle(input, &mut table, &mut surface));
                    }
                }
            }
            if table.draw_count() != draws {
                surface.show_order(&table.rows());
            }
            debug!(step = index, outcome = ?outcomes.last(), "step replayed");
        }
    } else {
        warn!(table = %id, "row reorder not attached, steps skipped");
    }

    let mut notifications = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(notification) => notifications.push(notification),
            Err(TryRecvError::Lagged(skipped)) => {
                warn!(skipped, "notification log overflowed");
            }
            Err(_) => break,
        }
    }

    Ok(Report {
        attached,
        config: registry.get(&id).map(|c| c.config().clone()),
        outcomes,
        notifications,
        submissions: log.as_ref().map(|l| l.borrow().clone()).unwrap_or_default(),
        rows: table.snapshot(),
        draws: table.draw_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowdrag_engine::SubmitOutcome;
    use serde_json::json;

    fn scenario(extra: serde_json::Value, steps: serde_json::Value) -> Scenario {
        let mut doc = json!({
            "rows": [
                { "key": "r1", "data": [10, "alpha"] },
                { "key": "r2", "data": [20, "bravo"] },
                { "key": "r3", "data": [30, "charlie"] }
            ],
            "steps": steps,
        });
        if let (Some(doc), Some(extra)) = (doc.as_object_mut(), extra.as_object()) {
            for (k, v) in extra {
                doc.insert(k.clone(), v.clone());
            }
        }
        serde_json::from_value(doc).unwrap()
    }

    fn drag_first_to_end() -> serde_json::Value {
        json!([
            { "step": "down", "row": 0, "x": 10, "y": 155 },
            { "step": "move", "x": 10, "y": 225 },
            { "step": "up", "x": 10, "y": 225 }
        ])
    }

    fn keys(report: &Report) -> Vec<String> {
        report.rows.iter().filter_map(|r| r.key.clone()).collect()
    }

    #[test]
    fn basic_reorder_commits() {
        let report = run(&scenario(json!({}), drag_first_to_end()), None).unwrap();
        assert!(report.attached);
        assert_eq!(keys(&report), vec!["r2", "r3", "r1"]);
        let seqs: Vec<_> = report.rows.iter().map(|r| r.data[0].clone()).collect();
        assert_eq!(seqs, vec![json!(10), json!(20), json!(30)]);
        assert_eq!(report.draws, 1);
        assert_eq!(
            report.outcomes.last(),
            Some(&Outcome::Committed { changed: 3 })
        );

        let names: Vec<_> = report.notifications.iter().map(Notification::name).collect();
        assert_eq!(
            names,
            vec!["pre-row-reorder", "row-reorder-changed", "row-reorder", "row-reordered"]
        );
    }

    #[test]
    fn veto_leaves_rows_alone() {
        let report = run(&scenario(json!({ "veto": true }), drag_first_to_end()), None).unwrap();
        assert_eq!(keys(&report), vec!["r1", "r2", "r3"]);
        assert_eq!(report.rows[0].data[0], json!(10));
        assert_eq!(
            report.notifications.last().map(Notification::name),
            Some("row-reorder-canceled")
        );
    }

    #[test]
    fn editor_round_trip() {
        let mut steps = drag_first_to_end();
        if let Some(list) = steps.as_array_mut() {
            list.push(json!({ "step": "submission", "outcome": "success" }));
        }
        let report = run(&scenario(json!({ "editor": true }), steps), None).unwrap();
        assert_eq!(report.submissions.len(), 3);
        assert_eq!(report.submissions[2], SubmitCall::Submit);
        assert_eq!(
            report.outcomes[2],
            Outcome::Submitting { changed: 3 }
        );
        assert_eq!(report.outcomes[3], Outcome::Committed { changed: 3 });
        assert_eq!(keys(&report), vec!["r2", "r3", "r1"]);
    }

    #[test]
    fn failed_submission_reverts() {
        let mut steps = drag_first_to_end();
        if let Some(list) = steps.as_array_mut() {
            list.push(json!({ "step": "submission", "outcome": "failure" }));
        }
        let report = run(&scenario(json!({ "editor": true }), steps), None).unwrap();
        assert_eq!(
            report.outcomes.last(),
            Some(&Outcome::Reverted {
                outcome: SubmitOutcome::Failure
            })
        );
        assert_eq!(keys(&report), vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn disabled_init_skips_everything() {
        let report = run(
            &scenario(json!({ "row_reorder": false }), drag_first_to_end()),
            None,
        )
        .unwrap();
        assert!(!report.attached);
        assert!(report.config.is_none());
        assert!(report.outcomes.is_empty());
        assert!(report.notifications.is_empty());
    }

    #[test]
    fn host_defaults_are_layered_under_instance_options() {
        let defaults = RowReorderInit::Options(rowdrag_config::PartialRowReorderConfig {
            cancelable: Some(true),
            update: Some(false),
            ..Default::default()
        });
        let report = run(
            &scenario(json!({ "row_reorder": { "update": true } }), drag_first_to_end()),
            Some(&defaults),
        )
        .unwrap();
        let config = report.config.unwrap();
        assert!(config.cancelable);
        assert!(config.update);
    }

    #[test]
    fn escape_cancels_cancelable_drag() {
        let steps = json!([
            { "step": "down", "row": 0, "x": 10, "y": 155 },
            { "step": "move", "x": 10, "y": 225 },
            { "step": "key", "key": "escape" },
            { "step": "up", "x": 10, "y": 225 }
        ]);
        let report = run(
            &scenario(json!({ "row_reorder": { "cancelable": true } }), steps),
            None,
        )
        .unwrap();
        assert_eq!(report.outcomes[2], Outcome::Canceled { start_index: 0 });
        assert_eq!(report.outcomes[3], Outcome::Ignored);
        assert_eq!(keys(&report), vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn ticks_expand_to_autoscroll_inputs() {
        let steps = json!([
            { "step": "down", "row": 0, "x": 10, "y": 155 },
            { "step": "move", "x": 10, "y": 790 },
            { "step": "tick", "count": 3 }
        ]);
        let report = run(&scenario(json!({}), steps), None).unwrap();
        assert_eq!(report.outcomes.len(), 5);
        assert!(report.outcomes[2..].iter().all(|o| *o == Outcome::Scrolled));
    }

    #[test]
    fn pressing_unknown_row_is_an_error() {
        let steps = json!([{ "step": "down", "row": 7, "x": 10, "y": 155 }]);
        let err = run(&scenario(json!({}), steps), None).unwrap_err();
        assert!(matches!(err, ReorderError::Scenario(_)));
    }
}
