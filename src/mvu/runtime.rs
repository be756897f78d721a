use super::correction::{CorrectionModel, Msg, run_effect, update};

/// Feeds one message through `update` and drains the effects it schedules.
pub fn dispatch(model: &mut CorrectionModel, msg: Msg) {
    let mut effects = update(model, msg);
    while let Some(effect) = effects.pop() {
        if let Some(next) = run_effect(effect, model) {
            effects.extend(update(model, next));
        }
    }
}

/// Runs a whole session: every message in order. Returns whether the round ended up committed.
pub fn run_session(model: &mut CorrectionModel, msgs: impl IntoIterator<Item = Msg>) -> bool {
    for msg in msgs {
        dispatch(model, msg);
    }
    model.committed.is_some()
}
