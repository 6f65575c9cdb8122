use super::*;
use crate::services::ports::render::RenderError;
use crate::services::ports::SessionConfig;
use crate::session::state::{
    PreviewViewState, RenderOutcome, PLACEHOLDER_MESSAGE, RENDERING_MESSAGE,
};
use crate::session::{Action, Effect};

fn new_store() -> Store {
    Store::new(SessionConfig::default())
}

fn new_store_with_max_len(max_len: usize) -> Store {
    Store::new(SessionConfig {
        max_len,
        ..SessionConfig::default()
    })
}

fn schedule_jobs(effects: &[Effect]) -> Vec<u64> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::ScheduleRender { job } => Some(*job),
            _ => None,
        })
        .collect()
}

fn invoked_markdown(effects: &[Effect]) -> Vec<(u64, String)> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::InvokeRender { job, markdown } => Some((*job, markdown.clone())),
            _ => None,
        })
        .collect()
}

fn notifications(effects: &[Effect]) -> Vec<String> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::Notify(msg) => Some(msg.clone()),
            _ => None,
        })
        .collect()
}

/// Drives one full edit → timer → render cycle.
fn render_cycle(store: &mut Store, text: &str, result: Result<String, RenderError>) {
    store.dispatch(Action::SetText(text.to_string()));
    let job = store.current_job();
    store.dispatch(Action::DebounceElapsed { job });
    store.dispatch(Action::RenderFinished { job, result });
}

#[test]
fn test_set_text_goes_pending_and_schedules() {
    let mut store = new_store();

    let result = store.dispatch(Action::SetText("# Hello".to_string()));

    assert!(result.state_changed);
    assert_eq!(store.state().text, "# Hello");
    assert_eq!(store.state().outcome, RenderOutcome::Pending);
    assert_eq!(schedule_jobs(&result.effects), vec![store.current_job()]);
}

#[test]
fn test_set_text_truncates_to_max_len() {
    let mut store = new_store_with_max_len(5);

    let result = store.dispatch(Action::SetText("abcdefgh".to_string()));

    assert_eq!(store.state().text, "abcde");
    assert!(result
        .effects
        .iter()
        .any(|e| matches!(e, Effect::WarnTruncated { dropped: 3 })));
}

#[test]
fn test_set_text_truncates_characters_not_bytes() {
    let mut store = new_store_with_max_len(4);

    store.dispatch(Action::SetText("日本語テキスト".to_string()));

    assert_eq!(store.state().text, "日本語テ");
    assert_eq!(store.state().text.chars().count(), 4);
}

#[test]
fn test_set_text_under_limit_emits_no_warning() {
    let mut store = new_store_with_max_len(100);

    let result = store.dispatch(Action::SetText("short".to_string()));

    assert!(!result
        .effects
        .iter()
        .any(|e| matches!(e, Effect::WarnTruncated { .. })));
}

#[test]
fn test_clear_returns_to_idle_without_scheduling() {
    let mut store = new_store();
    store.dispatch(Action::SetText("# Hello".to_string()));

    let result = store.dispatch(Action::Clear);

    assert!(result.state_changed);
    assert!(result.effects.is_empty());
    assert!(store.state().text.is_empty());
    assert_eq!(store.state().outcome, RenderOutcome::Idle);
    assert_eq!(
        store.state().preview(),
        PreviewViewState::Message(PLACEHOLDER_MESSAGE)
    );
    assert!(!store.state().save_enabled());
    assert!(!store.state().copy_enabled());
}

#[test]
fn test_clear_on_fresh_session_changes_nothing() {
    let mut store = new_store();
    let result = store.dispatch(Action::Clear);
    assert!(!result.state_changed);
}

#[test]
fn test_superseded_timer_is_dropped() {
    let mut store = new_store();

    store.dispatch(Action::SetText("A".to_string()));
    let stale_job = store.current_job();
    store.dispatch(Action::SetText("B".to_string()));
    let live_job = store.current_job();

    let stale = store.dispatch(Action::DebounceElapsed { job: stale_job });
    assert!(!stale.state_changed);
    assert!(stale.effects.is_empty());
    assert_eq!(store.state().outcome, RenderOutcome::Pending);

    let live = store.dispatch(Action::DebounceElapsed { job: live_job });
    assert_eq!(store.state().outcome, RenderOutcome::Rendering);
    assert_eq!(
        invoked_markdown(&live.effects),
        vec![(live_job, "B".to_string())]
    );
}

#[test]
fn test_rendering_shows_progress_message() {
    let mut store = new_store();
    store.dispatch(Action::SetText("# Hello".to_string()));
    let job = store.current_job();

    store.dispatch(Action::DebounceElapsed { job });

    assert_eq!(
        store.state().preview(),
        PreviewViewState::Message(RENDERING_MESSAGE)
    );
}

#[test]
fn test_render_success_path() {
    let mut store = new_store();

    render_cycle(&mut store, "# Hello", Ok("<h1>Hello</h1>".to_string()));

    assert_eq!(
        store.state().outcome,
        RenderOutcome::Succeeded("<h1>Hello</h1>".to_string())
    );
    assert_eq!(
        store.state().preview(),
        PreviewViewState::Rendered("<h1>Hello</h1>".to_string())
    );
    assert!(store.state().save_enabled());
    assert!(store.state().copy_enabled());
}

#[test]
fn test_render_failure_then_recovery() {
    let mut store = new_store();

    render_cycle(&mut store, "x", Err(RenderError::new("boom")));
    assert_eq!(
        store.state().preview(),
        PreviewViewState::Error("boom".to_string())
    );
    assert!(!store.state().copy_enabled());

    render_cycle(&mut store, "y", Ok("<p>y</p>".to_string()));
    assert_eq!(
        store.state().preview(),
        PreviewViewState::Rendered("<p>y</p>".to_string())
    );
}

#[test]
fn test_stale_render_result_never_overwrites() {
    let mut store = new_store();

    store.dispatch(Action::SetText("A".to_string()));
    let job_a = store.current_job();
    store.dispatch(Action::DebounceElapsed { job: job_a });
    assert_eq!(store.state().outcome, RenderOutcome::Rendering);

    // Edit arrives while A is still in flight.
    store.dispatch(Action::SetText("B".to_string()));
    let job_b = store.current_job();

    // A's result eventually lands and must be ignored.
    let stale = store.dispatch(Action::RenderFinished {
        job: job_a,
        result: Ok("<p>A</p>".to_string()),
    });
    assert!(!stale.state_changed);
    assert_eq!(store.state().outcome, RenderOutcome::Pending);

    store.dispatch(Action::DebounceElapsed { job: job_b });
    store.dispatch(Action::RenderFinished {
        job: job_b,
        result: Ok("<p>B</p>".to_string()),
    });
    assert_eq!(
        store.state().preview(),
        PreviewViewState::Rendered("<p>B</p>".to_string())
    );
}

#[test]
fn test_clear_while_rendering_discards_result() {
    let mut store = new_store();
    store.dispatch(Action::SetText("A".to_string()));
    let job = store.current_job();
    store.dispatch(Action::DebounceElapsed { job });

    store.dispatch(Action::Clear);
    let result = store.dispatch(Action::RenderFinished {
        job,
        result: Ok("<p>A</p>".to_string()),
    });

    assert!(!result.state_changed);
    assert_eq!(store.state().outcome, RenderOutcome::Idle);
}

#[test]
fn test_blank_text_skips_renderer() {
    let mut store = new_store();
    store.dispatch(Action::SetText("   ".to_string()));
    let job = store.current_job();

    let result = store.dispatch(Action::DebounceElapsed { job });

    assert!(result.effects.is_empty());
    assert_eq!(store.state().outcome, RenderOutcome::Idle);
    assert_eq!(
        store.state().preview(),
        PreviewViewState::Message(PLACEHOLDER_MESSAGE)
    );
}

#[test]
fn test_save_with_blank_text_notifies() {
    let mut store = new_store();

    let result = store.dispatch(Action::Save);

    assert_eq!(
        notifications(&result.effects),
        vec!["No markdown content to save.".to_string()]
    );
    assert!(!result
        .effects
        .iter()
        .any(|e| matches!(e, Effect::ExportMarkdown { .. })));
}

#[test]
fn test_save_with_content_exports() {
    let mut store = new_store();
    store.dispatch(Action::SetText("# Doc".to_string()));

    let result = store.dispatch(Action::Save);

    assert!(result.effects.iter().any(
        |e| matches!(e, Effect::ExportMarkdown { content } if content == "# Doc")
    ));
}

#[test]
fn test_copy_without_rendered_html_notifies() {
    let mut store = new_store();
    store.dispatch(Action::SetText("# Doc".to_string()));

    let result = store.dispatch(Action::CopyHtml);

    assert_eq!(
        notifications(&result.effects),
        vec!["No rendered HTML to copy.".to_string()]
    );
}

#[test]
fn test_copy_with_rendered_html_sets_clipboard() {
    let mut store = new_store();
    render_cycle(&mut store, "# Doc", Ok("<h1>Doc</h1>".to_string()));

    let result = store.dispatch(Action::CopyHtml);

    assert!(result
        .effects
        .iter()
        .any(|e| matches!(e, Effect::SetClipboardText(html) if html == "<h1>Doc</h1>")));
    assert_eq!(
        notifications(&result.effects),
        vec!["HTML copied to clipboard".to_string()]
    );
}

#[test]
fn test_load_from_file_reuses_set_text_pipeline() {
    let mut store = new_store_with_max_len(3);

    let result = store.dispatch(Action::LoadFromFile("abcdef".to_string()));

    assert_eq!(store.state().text, "abc");
    assert_eq!(store.state().outcome, RenderOutcome::Pending);
    assert_eq!(schedule_jobs(&result.effects).len(), 1);
}
