use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use mdpad::services::adapters::{
    ClipboardService, ConsoleNotifier, DownloadExporter, PulldownRenderer, TokioExecutor,
};
use mdpad::logging;
use mdpad::services::ports::SessionConfig;
use mdpad::session::{PreviewViewState, SessionController, DEFAULT_MARKDOWN};

/// Line-oriented driver around the session core. Each input line is an edit;
/// `:commands` map to the session actions. The real view layer this stands in
/// for is a pure projection of `SessionController::state`.
fn main() -> io::Result<()> {
    let _logging = logging::init();

    let config = SessionConfig::default();
    let settle = Duration::from_millis(config.debounce_ms + 100);

    let executor = Arc::new(TokioExecutor::new()?);
    let mut session = SessionController::new(
        config,
        executor,
        Arc::new(PulldownRenderer::new()),
        Arc::new(ConsoleNotifier),
        Arc::new(DownloadExporter::current_dir()?),
        Box::new(ClipboardService::new()),
    );

    println!("mdpad - type markdown lines, :help for commands, :q to quit");

    // Seed the welcome document through the normal edit pipeline.
    session.set_text(DEFAULT_MARKDOWN);

    let stdin = io::stdin();
    let mut buffer = DEFAULT_MARKDOWN.to_string();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            ":q" | ":quit" => break,
            ":help" => {
                println!(":clear  empty the buffer");
                println!(":save   export the markdown as document.md");
                println!(":copy   copy the rendered HTML to the clipboard");
                println!(":open <path>  load a markdown file");
                continue;
            }
            ":clear" => {
                session.clear();
            }
            ":save" => {
                session.save();
            }
            ":copy" => {
                session.copy_html();
            }
            cmd if cmd.starts_with(":open ") => {
                session.load_markdown_file(PathBuf::from(cmd[":open ".len()..].trim()));
            }
            _ => {
                if !buffer.is_empty() {
                    buffer.push('\n');
                }
                buffer.push_str(&line);
                session.set_text(buffer.clone());
            }
        }

        // Give the debounce timer and the render job time to settle, then
        // fold their results back in on this thread.
        std::thread::sleep(settle);
        session.pump();
        buffer = session.state().text.clone();

        match session.preview() {
            PreviewViewState::Message(message) => println!("[preview] {}", message),
            PreviewViewState::Rendered(html) => println!("[preview]\n{}", html),
            PreviewViewState::Error(message) => println!("[preview error] {}", message),
        }
    }

    Ok(())
}
