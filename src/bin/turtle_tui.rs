//! Turtle Sketch - Terminal User Interface
//!
//! A TUI front-end for the animated turtle interpreter using ratatui.
//! App logic lives in `tortuga::tui::sketch_app`.

#![forbid(unsafe_code)]

#[cfg(feature = "tui")]
fn main() -> std::io::Result<()> {
    use tortuga::tui::TurtleApp;
    tui::run(TurtleApp::new())
}

#[cfg(not(feature = "tui"))]
fn main() {
    eprintln!("TUI feature not enabled. Run with --features tui");
    std::process::exit(1);
}

#[cfg(feature = "tui")]
mod tui {
    use crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{
        backend::CrosstermBackend,
        layout::{Constraint, Direction, Layout, Rect},
        style::{Color, Modifier, Style},
        text::{Line, Span},
        widgets::{
            canvas::{Canvas, Context, Line as CanvasLine},
            Block, Borders, Paragraph,
        },
        Frame, Terminal,
    };
    use std::io;
    use std::time::{Duration, Instant};

    use tortuga::render::RenderCommand;
    use tortuga::tui::TurtleApp;

    /// Segments used to approximate an ellipse outline.
    const ELLIPSE_SEGMENTS: usize = 24;

    /// Run the TUI application.
    pub fn run(mut app: TurtleApp) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(20);

        loop {
            let start = Instant::now();
            app.update();
            terminal.draw(|f| ui(f, &app))?;

            let timeout = tick_rate.saturating_sub(start.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code);
                    }
                }
            }

            if app.should_quit {
                break;
            }
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    fn ui(f: &mut Frame, app: &TurtleApp) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
                Constraint::Length(4),
            ])
            .split(f.area());

        render_title(f, chunks[0], app);
        render_sketch_canvas(f, chunks[1], app);
        render_input(f, chunks[2], app);
        render_inspector(f, chunks[3], app);
    }

    fn render_title(f: &mut Frame, area: Rect, app: &TurtleApp) {
        let title = Paragraph::new(vec![Line::from(vec![
            Span::styled(
                " TURTLE SKETCH ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(
                if app.paused { "[PAUSED]" } else { "[RUNNING]" },
                Style::default().fg(if app.paused {
                    Color::Yellow
                } else {
                    Color::Green
                }),
            ),
            Span::raw(" | "),
            Span::styled(
                format!(
                    "step {}/{}",
                    app.executed,
                    app.program().len()
                ),
                Style::default().fg(Color::White),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("{}: {:.0}{}", app.selected.label(), app.selected_value().0, app.selected_value().1),
                Style::default().fg(Color::Magenta),
            ),
        ])])
        .block(Block::default().borders(Borders::ALL).title(
            "Keys: F + - [ ] type  [Bksp] delete  [Tab]/[,]/[.] params  [Arrows] pan  [c] center  [r] redraw  [b] brackets  [Space] pause  [q] quit",
        ));
        f.render_widget(title, area);
    }

    fn render_sketch_canvas(f: &mut Frame, area: Rect, app: &TurtleApp) {
        let width = app.config.viewport.width;
        let height = app.config.viewport.height;

        let canvas = Canvas::default()
            .block(Block::default().borders(Borders::ALL).title("Sketch"))
            .background_color(to_tui_color(tortuga::render::Color::PAPER))
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for command in &app.frame {
                    paint_command(ctx, command, height);
                }
            });
        f.render_widget(canvas, area);
    }

    /// Paint one world-space render command onto the canvas.
    ///
    /// World coordinates have y pointing down; the canvas y axis points up,
    /// so y is flipped against the viewport height.
    fn paint_command(ctx: &mut Context<'_>, command: &RenderCommand, height: f64) {
        match command {
            RenderCommand::Line {
                x1,
                y1,
                x2,
                y2,
                color,
                ..
            } => {
                ctx.draw(&CanvasLine {
                    x1: *x1,
                    y1: height - y1,
                    x2: *x2,
                    y2: height - y2,
                    color: to_tui_color(*color),
                });
            }
            RenderCommand::Ellipse {
                cx,
                cy,
                rx,
                ry,
                rotation,
                color,
            } => {
                let (sin, cos) = rotation.sin_cos();
                let mut previous: Option<(f64, f64)> = None;
                for i in 0..=ELLIPSE_SEGMENTS {
                    let t = (i as f64 / ELLIPSE_SEGMENTS as f64) * std::f64::consts::TAU;
                    let (ex, ey) = (rx * t.cos(), ry * t.sin());
                    let point = (cx + ex * cos - ey * sin, cy + ex * sin + ey * cos);
                    if let Some(prev) = previous {
                        ctx.draw(&CanvasLine {
                            x1: prev.0,
                            y1: height - prev.1,
                            x2: point.0,
                            y2: height - point.1,
                            color: to_tui_color(*color),
                        });
                    }
                    previous = Some(point);
                }
            }
            RenderCommand::Text {
                x,
                y,
                text,
                bold,
                color,
                ..
            } => {
                let mut style = Style::default().fg(to_tui_color(*color));
                if *bold {
                    style = style.add_modifier(Modifier::BOLD);
                }
                ctx.print(*x, height - y, Line::styled(text.clone(), style));
            }
        }
    }

    fn render_input(f: &mut Frame, area: Rect, app: &TurtleApp) {
        // Highlight the character currently animating, like the canvas
        // overlay does.
        let mut spans = vec![Span::raw("Input string: ")];
        for (i, ch) in app.input.chars().enumerate() {
            let style = if i == app.executed {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            spans.push(Span::styled(ch.to_string(), style));
        }

        let mode = match app.alphabet {
            tortuga::program::Alphabet::Branching => "brackets on",
            tortuga::program::Alphabet::Linear => "brackets off",
        };
        spans.push(Span::raw(format!("   ({mode})")));

        let input = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).title("Program"));
        f.render_widget(input, area);
    }

    fn render_inspector(f: &mut Frame, area: Rect, app: &TurtleApp) {
        let line = if app.readouts.is_empty() {
            Line::from(Span::raw("no branches"))
        } else {
            let mut spans = Vec::new();
            for (i, readout) in app.readouts.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("  |  "));
                }
                spans.push(Span::styled(
                    readout.to_string(),
                    Style::default().fg(Color::Green),
                ));
            }
            Line::from(spans)
        };

        let inspector = Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL).title("Stack"));
        f.render_widget(inspector, area);
    }

    fn to_tui_color(color: tortuga::render::Color) -> Color {
        Color::Rgb(color.r, color.g, color.b)
    }
}
