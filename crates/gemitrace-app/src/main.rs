use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event as CEvent, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};

use gemitrace_audit::{
    prompt::{self, AUDIT_WINDOW},
    AuditBackend, AuditError, AuditRequester, GeminiClient,
};
use gemitrace_core::{
    bus::EventBus,
    command::{self, CommandContext, CommandOutput, CommandRegistry},
    console::Console,
    event::AppEvent,
    logging::{self, LogBuffer, LogEntry, LogLevel},
    state::AppState,
};
use gemitrace_stream::{event::TelemetryEvent, generator::EventGenerator, state::StreamState};
use gemitrace_ui::{
    audit_panel::render_audit_panel,
    cards::render_stats_cards,
    chart::render_trend_chart,
    chrome::{render_footer, render_header},
    console::render_console,
    layout::dashboard_layout,
    stream::render_event_stream,
};

/// Wall-clock interval between generated telemetry events.
const FEED_INTERVAL: Duration = Duration::from_millis(4000);

/// Audit backend that resolves the API credential at request time, so a
/// missing key fails the audit call rather than startup.
struct EnvBackend;

impl AuditBackend for EnvBackend {
    fn analyze(&self, events: &[TelemetryEvent]) -> Result<String, AuditError> {
        let client = GeminiClient::from_env()?;
        let prompt = prompt::build_prompt(events);
        client.generate(&prompt)
    }
}

struct App {
    state: AppState,
    stream: StreamState,
    generator: EventGenerator,
    rng: StdRng,
    audit: AuditRequester,
    bus: EventBus,
    log_buffer: LogBuffer,
    console: Console,
    commands: CommandRegistry,
}

impl App {
    fn new(log_buffer: LogBuffer) -> Self {
        let generator = EventGenerator::new();
        let mut rng = StdRng::from_entropy();
        let stream = StreamState::seeded(&generator, &mut rng);
        tracing::info!(seeded = stream.len(), "telemetry buffer seeded");

        Self {
            state: AppState::new(),
            stream,
            generator,
            rng,
            audit: AuditRequester::new(),
            bus: EventBus::new(),
            log_buffer,
            console: Console::default(),
            commands: command::builtin_registry(),
        }
    }

    /// Drain new entries from the shared log buffer into the console.
    fn sync_logs(&mut self) {
        if let Ok(mut buf) = self.log_buffer.lock() {
            for entry in buf.drain(..) {
                self.console.push_log(entry);
            }
        }
    }

    /// Start an audit over the newest events unless one is already running.
    fn trigger_audit(&mut self) {
        let snapshot = self.stream.snapshot_newest(AUDIT_WINDOW);
        if self.audit.trigger(EnvBackend, snapshot) {
            tracing::info!(
                events = AUDIT_WINDOW.min(self.stream.len()),
                "compliance audit dispatched"
            );
            self.bus.publish(AppEvent::AuditStarted);
        } else {
            tracing::warn!("audit already in flight; trigger ignored");
        }
    }

    /// Execute a console command and handle the output. Returns true when
    /// the app should quit.
    fn dispatch_command(&mut self, input: &str) -> bool {
        if input.trim().is_empty() {
            return false;
        }

        // Echo the command itself
        self.console.push_log(LogEntry {
            level: LogLevel::Info,
            target: "console".into(),
            message: format!("> {}", input),
        });

        let trimmed = input.trim();

        // Special-case "help" with no args to list all commands from the registry
        if trimmed == "help" || trimmed == "?" {
            let lines: Vec<String> = self
                .commands
                .commands()
                .iter()
                .map(|cmd| {
                    let aliases = cmd.aliases();
                    if aliases.is_empty() {
                        format!("  {:12} {}", cmd.usage(), cmd.description())
                    } else {
                        format!(
                            "  {:12} {} (aliases: {})",
                            cmd.usage(),
                            cmd.description(),
                            aliases.join(", ")
                        )
                    }
                })
                .collect();
            for line in lines {
                self.console.push_log(LogEntry {
                    level: LogLevel::Info,
                    target: "help".into(),
                    message: line,
                });
            }
            return false;
        }

        let output = {
            let mut ctx = CommandContext {
                console: &mut self.console,
                stream: &self.stream,
                feed_interval: FEED_INTERVAL,
                started_at: self.state.started_at,
            };
            self.commands.execute(trimmed, &mut ctx)
        };

        match output {
            CommandOutput::Lines(lines) => {
                for line in lines {
                    self.console.push_log(LogEntry {
                        level: LogLevel::Info,
                        target: "console".into(),
                        message: line,
                    });
                }
                false
            }
            CommandOutput::TriggerAudit => {
                self.trigger_audit();
                false
            }
            CommandOutput::Quit => true,
        }
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<()> {
    let log_buffer = logging::init();
    tracing::info!("GemiTrace starting up");

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, log_buffer);
    restore_terminal(terminal)?;
    res
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, log_buffer: LogBuffer) -> Result<()> {
    let mut app = App::new(log_buffer);
    let poll_timeout = Duration::from_millis(16);
    let mut last_feed = Instant::now();

    loop {
        // ── Sync logs from tracing into console ──
        app.sync_logs();

        // ── Render ──
        terminal.draw(|f| {
            let rects = dashboard_layout(f.area());

            render_header(f, rects.header, &app.state.status_line);
            render_stats_cards(f, rects.cards, app.stream.stats());
            render_trend_chart(f, rects.chart, app.stream.trend());
            render_event_stream(f, rects.stream, app.stream.events());
            render_audit_panel(f, rects.sidebar, app.audit.status());

            let secs_to_next = FEED_INTERVAL.saturating_sub(last_feed.elapsed()).as_secs();
            render_footer(f, rects.footer, app.stream.len(), secs_to_next);

            // Console overlay on top
            render_console(f, f.area(), &app.console);
        })?;

        // ── Poll → Publish ──
        if event::poll(poll_timeout)? {
            match event::read()? {
                CEvent::Key(key) => {
                    // Tilde always toggles the console
                    if key.code == KeyCode::Char('`') || key.code == KeyCode::Char('~') {
                        app.console.toggle();
                    } else if app.console.is_visible() {
                        // Console captures all keys when open
                        match key.code {
                            KeyCode::Enter => {
                                let input = app.console.submit_input();
                                if app.dispatch_command(&input) {
                                    return Ok(());
                                }
                            }
                            KeyCode::Backspace => app.console.backspace(),
                            KeyCode::Left => app.console.cursor_left(),
                            KeyCode::Right => app.console.cursor_right(),
                            KeyCode::PageUp => app.console.scroll_up(10),
                            KeyCode::PageDown => app.console.scroll_down(10),
                            KeyCode::Esc => app.console.toggle(),
                            KeyCode::Char(c) => app.console.insert_char(c),
                            _ => {}
                        }
                    } else {
                        // Normal mode
                        match key.code {
                            KeyCode::Char('q') => app.bus.publish(AppEvent::Quit),
                            KeyCode::Char('a') => app.trigger_audit(),
                            KeyCode::Char('d') => app.audit.dismiss(),
                            _ => {}
                        }
                    }
                }
                CEvent::Resize(cols, rows) => {
                    app.bus.publish(AppEvent::Resize { cols, rows });
                }
                _ => {}
            }
        }

        // ── Feed timer ──
        if last_feed.elapsed() >= FEED_INTERVAL {
            last_feed = Instant::now();
            let event = app.generator.generate(&mut app.rng);
            let severity = event.severity;
            app.stream.record(event);
            app.bus.publish(AppEvent::Feed { severity });
        }

        // ── Audit worker poll ──
        if app.audit.poll() {
            app.bus.publish(AppEvent::AuditFinished);
        }

        // ── Drain → react ──
        for ev in app.bus.drain() {
            match ev {
                AppEvent::Quit => return Ok(()),
                AppEvent::Feed { severity } => {
                    tracing::debug!(severity = severity.label(), "telemetry event captured");
                }
                AppEvent::AuditStarted => {
                    app.state.status_line = "AUDIT IN PROGRESS".to_string();
                }
                AppEvent::AuditFinished => {
                    app.state.status_line = "LIVE FEED".to_string();
                    tracing::info!("compliance audit completed");
                }
                AppEvent::Resize { cols, rows } => {
                    tracing::debug!(cols, rows, "terminal resized");
                }
            }
        }
    }
}
