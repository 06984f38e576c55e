//! Pointer-up, cancellation and the submission round-trip.

use rowdrag_common::{Notification, PointerSample, ReorderContext, ReorderPayload, TableId};
use rowdrag_config::RowReorderConfig;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::commit;
use crate::host::{CommitPath, HostTable, SubmitOutcome};
use crate::notify;
use crate::session::DragSession;
use crate::surface::Surface;

use super::motion::restore_start_position;
use super::teardown;
use super::{DragState, Outcome, RowReorder};

impl RowReorder {
    pub(super) fn pointer_up<H, S>(
        &mut self,
        sample: PointerSample,
        table: &mut H,
        surface: &mut S,
    ) -> Outcome
    where
        H: HostTable + ?Sized,
        S: Surface + ?Sized,
    {
        let Some(mut session) = self.take_session() else {
            return Outcome::Ignored;
        };
        if !session.drop_allowed {
            return self.cancel(session, table, surface);
        }

        let diff = commit::compute_diff(
            &session.start_order,
            session.order.as_slice(),
            table,
            &self.config.data_src,
        );
        let payload = ReorderPayload {
            diff: diff.records,
            context: ReorderContext {
                data_src: self.config.data_src.clone(),
                nodes: diff.nodes,
                values: diff.values,
                trigger_row: session.row,
                original_event: sample,
            },
        };

        let verdicts = table.trigger(&Notification::RowReorder(payload.clone()));
        if notify::vetoed(&verdicts) {
            info!(table = %self.table, session = %session.id, "drop vetoed by listener");
            return self.cancel(session, table, surface);
        }

        teardown::finish(&mut session, surface);

        let changed = payload.diff.len();
        if changed == 0 {
            debug!(table = %self.table, session = %session.id, "drop without changes");
            return Outcome::Committed { changed };
        }

        if let CommitPath::Delegated(submitter) = &mut self.commit {
            self.config.enable = false;
            submitter.edit(
                &payload.context.nodes,
                &submission_options(&self.config.form_options),
            );
            submitter.multi_set(&self.config.data_src, &payload.context.values);
            submitter.submit();
            info!(
                table = %self.table,
                session = %session.id,
                changed,
                "drop handed to editor"
            );
            self.state = DragState::AwaitingSubmission(payload);
            return Outcome::Submitting { changed };
        }

        apply_update(&self.table, &self.config, &payload, table);
        info!(table = %self.table, session = %session.id, changed, "drop committed");
        Outcome::Committed { changed }
    }

    /// Put the row back where it started, tear the drag down and report the
    /// cancellation.
    pub(super) fn cancel<H, S>(
        &mut self,
        mut session: Box<DragSession>,
        table: &mut H,
        surface: &mut S,
    ) -> Outcome
    where
        H: HostTable + ?Sized,
        S: Surface + ?Sized,
    {
        restore_start_position(&self.table, &mut session, table, surface);
        teardown::finish(&mut session, surface);

        let start_index = session.start_row_index;
        info!(table = %self.table, session = %session.id, start_index, "row drag canceled");
        table.trigger(&Notification::RowReorderCanceled { start_index });
        Outcome::Canceled { start_index }
    }

    /// Report the editor's result for the drop handed over on release.
    pub fn finish_submission<H: HostTable + ?Sized>(
        &mut self,
        outcome: SubmitOutcome,
        table: &mut H,
    ) -> Outcome {
        let Some(payload) = self.take_pending() else {
            warn!(table = %self.table, ?outcome, "submission result without a pending drop");
            return Outcome::Ignored;
        };
        self.config.enable = true;

        match outcome {
            SubmitOutcome::Success => {
                apply_update(&self.table, &self.config, &payload, table);
                info!(table = %self.table, changed = payload.diff.len(), "submission applied");
                Outcome::Committed {
                    changed: payload.diff.len(),
                }
            }
            SubmitOutcome::Failure | SubmitOutcome::Cancelled => {
                table.draw(false);
                info!(table = %self.table, ?outcome, "submission not applied, redrawing");
                Outcome::Reverted { outcome }
            }
        }
    }
}

/// `{"submit": "changed"}` overlaid with the configured form options.
fn submission_options(form_options: &Value) -> Value {
    let mut options = json!({ "submit": "changed" });
    if let (Some(base), Some(extra)) = (options.as_object_mut(), form_options.as_object()) {
        for (key, value) in extra {
            base.insert(key.clone(), value.clone());
        }
    }
    options
}

fn apply_update<H: HostTable + ?Sized>(
    table_id: &TableId,
    config: &RowReorderConfig,
    payload: &ReorderPayload,
    table: &mut H,
) {
    if !config.update {
        debug!(table = %table_id, "update disabled, leaving row data untouched");
        return;
    }
    let written = commit::apply_diff(table, &config.data_src, &payload.diff);
    debug!(table = %table_id, written, "row data updated");
    table.trigger(&Notification::RowReordered(payload.clone()));
    table.draw(false);
}
