use std::io::{self, Stdout, Write, stdout};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use console::{measure_text_width, style, truncate_str};
use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::event::{self, Event};
use crossterm::queue;
use crossterm::terminal::{self, Clear, ClearType};
use newfile_app::{PickerEvents, PickerSurface};
use newfile_domain::{IconKind, Notice, PickerEvent, SuggestionItem};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use crate::{InputLine, NoticeBoard, RawModeGuard};

/// How often the reader thread checks whether the session is still open.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

type TerminalEvent = io::Result<Event>;

/// State shared by the picker surface and its input.
struct Screen {
    prompt: String,
    input: InputLine,
    items: Vec<SuggestionItem>,
    notices: Arc<NoticeBoard>,
    visible: bool,
    guard: Option<RawModeGuard>,
    /// Lines below the input line drawn by the last render.
    drawn_below: u16,
    out: Stdout,
}

impl Screen {
    /// Applies a terminal event to the input line. An edit clears the
    /// notices shown so far, since they were about the previous value.
    fn handle(&mut self, event: &Event) -> Option<PickerEvent> {
        let picker_event = self.input.apply(event);
        if let Some(PickerEvent::ValueChanged(_)) = picker_event {
            self.notices.drain();
        }
        // Echo the edit before the suggestion is recomputed.
        self.render();
        picker_event
    }

    /// Rendering is best effort: failures are logged and the session goes on.
    fn render(&mut self) {
        if !self.visible {
            return;
        }
        if let Err(error) = self.draw() {
            tracing::warn!(%error, "Failed to render picker");
        }
    }

    fn draw(&mut self) -> io::Result<()> {
        let width = terminal::size().map(|(w, _)| w as usize).unwrap_or(80);
        let lines = render_lines(
            &self.prompt,
            &self.input.value(),
            &self.items,
            self.notices.latest().as_ref(),
        );

        self.clear_block()?;
        for (index, line) in lines.iter().enumerate() {
            if index > 0 {
                queue!(self.out, crossterm::style::Print("\r\n"))?;
            }
            let line = truncate_str(line, width.saturating_sub(1), "…");
            queue!(self.out, crossterm::style::Print(line))?;
        }

        self.drawn_below = lines.len().saturating_sub(1) as u16;
        if self.drawn_below > 0 {
            queue!(self.out, MoveUp(self.drawn_below))?;
        }
        let column = measure_text_width(&format!("{} ", self.prompt))
            + measure_text_width(&self.input.before_cursor());
        queue!(self.out, MoveToColumn(column.min(u16::MAX as usize) as u16))?;
        self.out.flush()
    }

    /// Clears from the input line down, leaving the cursor at its start.
    fn clear_block(&mut self) -> io::Result<()> {
        queue!(self.out, MoveToColumn(0), Clear(ClearType::FromCursorDown))
    }

    fn hide(&mut self) {
        if !self.visible {
            return;
        }
        self.visible = false;
        if let Err(error) = self.clear_block().and_then(|_| self.out.flush()) {
            tracing::warn!(%error, "Failed to clear picker");
        }
        self.guard = None;
    }
}

fn lock(screen: &Mutex<Screen>) -> MutexGuard<'_, Screen> {
    screen.lock().unwrap_or_else(|e| e.into_inner())
}

/// Input box with a single suggestion, drawn inline below the cursor.
pub struct TerminalPicker {
    screen: Arc<Mutex<Screen>>,
    reader: Option<UnboundedSender<TerminalEvent>>,
}

/// Keyboard side of a [`TerminalPicker`]. Terminal events are read on a
/// background thread, so waiting for the next one can be abandoned at any
/// time without losing input.
pub struct TerminalInput {
    screen: Arc<Mutex<Screen>>,
    events: UnboundedReceiver<TerminalEvent>,
}

impl TerminalPicker {
    pub fn new(prompt: impl Into<String>, notices: Arc<NoticeBoard>) -> (Self, TerminalInput) {
        let screen = Arc::new(Mutex::new(Screen {
            prompt: prompt.into(),
            input: InputLine::new(),
            items: Vec::new(),
            notices,
            visible: false,
            guard: None,
            drawn_below: 0,
            out: stdout(),
        }));
        let (tx, rx) = unbounded_channel();

        let picker = Self { screen: screen.clone(), reader: Some(tx) };
        let input = TerminalInput { screen, events: rx };
        (picker, input)
    }

    fn screen(&self) -> MutexGuard<'_, Screen> {
        lock(&self.screen)
    }
}

/// Forwards terminal events until the receiving [`TerminalInput`] is gone.
fn spawn_reader(tx: UnboundedSender<TerminalEvent>) {
    thread::spawn(move || {
        while !tx.is_closed() {
            match event::poll(POLL_INTERVAL) {
                Ok(false) => {}
                Ok(true) => {
                    if tx.send(event::read()).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    let _ = tx.send(Err(error));
                    break;
                }
            }
        }
    });
}

/// Lines of the picker: the input, the suggestion with its detail and the
/// latest notice, if any.
fn render_lines(
    prompt: &str,
    value: &str,
    items: &[SuggestionItem],
    notice: Option<&Notice>,
) -> Vec<String> {
    let mut lines = vec![format!("{} {value}", style(prompt).bold().cyan())];

    for item in items {
        let icon = match item.icon {
            IconKind::None => style("·").dim(),
            IconKind::File => style("+").green(),
            IconKind::Directory => style("▸").blue(),
        };
        lines.push(format!("  {icon} {}", style(&item.label).bold()));
        lines.push(format!("    {}", style(&item.detail).dim()));
    }

    if let Some(notice) = notice {
        lines.push(format!("  {}", NoticeBoard::format(notice)));
    }
    lines
}

impl PickerSurface for TerminalPicker {
    fn set_items(&mut self, items: Vec<SuggestionItem>) {
        let mut screen = self.screen();
        screen.items = items;
        screen.render();
    }

    fn show(&mut self) {
        {
            let mut screen = self.screen();
            if screen.visible {
                return;
            }
            match RawModeGuard::new() {
                Ok(guard) => screen.guard = Some(guard),
                Err(error) => tracing::error!(%error, "Failed to enter raw mode"),
            }
            screen.visible = true;
            screen.render();
        }
        if let Some(tx) = self.reader.take() {
            spawn_reader(tx);
        }
    }

    fn hide(&mut self) {
        self.screen().hide();
    }

    fn dispose(&mut self) {
        let mut screen = self.screen();
        screen.hide();
        screen.items.clear();
    }
}

impl Drop for TerminalPicker {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[async_trait::async_trait]
impl PickerEvents for TerminalInput {
    async fn next_event(&mut self) -> anyhow::Result<Option<PickerEvent>> {
        loop {
            let visible = lock(&self.screen).visible;
            if !visible {
                return Ok(None);
            }
            // Notices may have arrived since the last render.
            lock(&self.screen).render();

            let Some(event) = self.events.recv().await else {
                return Ok(None);
            };
            let event = event?;
            if let Event::Resize(_, _) = event {
                continue;
            }
            let picker_event = lock(&self.screen).handle(&event);
            if picker_event.is_some() {
                return Ok(picker_event);
            }
        }
    }
}
