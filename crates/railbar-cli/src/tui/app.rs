//! Application state and main loop
//!
//! Owns the text content, the track and the event host, and attaches the
//! scrollbar overlay once the first layout is measured.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
        EventStream,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, layout::Rect, widgets::Paragraph, Frame, Terminal};
use railbar_core::{attach, ContentSurface, Handle, ScrollbarConfig};

use crate::tui::components::{
    render_scrollbar, render_status_bar, ScrollbarColors, StatusPosition,
};
use crate::tui::state::{LayoutState, TerminalHost, TextContent, TrackArea};

/// Frame tick while a smooth scroll is running
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Poll interval when nothing is animating
const IDLE_INTERVAL: Duration = Duration::from_millis(100);

/// Scrollbar handle over the terminal surfaces
pub type ScrollbarHandle = Handle<TextContent, TrackArea, TerminalHost>;

pub struct App {
    pub title: String,
    pub config: ScrollbarConfig,
    pub content: Rc<RefCell<TextContent>>,
    pub track: Rc<RefCell<TrackArea>>,
    pub host: Rc<RefCell<TerminalHost>>,
    /// Attached on the first measured layout
    pub scrollbar: Option<ScrollbarHandle>,
    pub layout: LayoutState,
    /// Last pointer position in pixels, reported on focus loss
    pub last_pointer_y: f64,
    pub should_quit: bool,
    pub needs_redraw: bool,
}

impl App {
    pub fn new(title: String, text: String, config: ScrollbarConfig) -> Self {
        Self {
            title,
            config,
            content: Rc::new(RefCell::new(TextContent::new(text))),
            track: Rc::new(RefCell::new(TrackArea::default())),
            host: Rc::new(RefCell::new(TerminalHost::new())),
            scrollbar: None,
            layout: LayoutState::default(),
            last_pointer_y: 0.0,
            should_quit: false,
            needs_redraw: true,
        }
    }

    /// Recompute layout for the terminal area, re-measuring the track on change
    pub fn update_layout(&mut self, area: Rect) {
        let layout = LayoutState::compute(area);
        if layout == self.layout && self.scrollbar.is_some() {
            return;
        }
        self.layout = layout;
        self.needs_redraw = true;

        self.content
            .borrow_mut()
            .set_viewport(layout.content_area.width, layout.content_area.height);
        let track_changed = {
            let mut track = self.track.borrow_mut();
            let changed = track.rect != layout.track_area;
            track.rect = layout.track_area;
            changed
        };

        if !layout.is_measured() {
            return;
        }
        match &self.scrollbar {
            None => {
                self.scrollbar = Some(attach(
                    Rc::clone(&self.content),
                    Rc::clone(&self.track),
                    Rc::clone(&self.host),
                    self.config.clone(),
                ));
                tracing::info!(
                    width = area.width,
                    height = area.height,
                    listeners = self.host.borrow().listener_count(),
                    "Scrollbar overlay attached"
                );
            }
            Some(handle) if track_changed => {
                handle.remeasure_track();
            }
            Some(_) => {}
        }
    }

    /// Deliver queued content notifications to the host
    ///
    /// Runs after each handler returns so listeners never observe a surface
    /// that is still borrowed. Returns true if anything was delivered.
    pub fn flush_notifications(&mut self) -> bool {
        let (resized, scrolled) = {
            let mut content = self.content.borrow_mut();
            (content.take_resize_pending(), content.take_scroll_pending())
        };
        if resized {
            self.host.borrow_mut().dispatch_resize();
        }
        if scrolled {
            self.host.borrow_mut().dispatch_scroll();
        }
        if resized || scrolled {
            self.needs_redraw = true;
        }
        resized || scrolled
    }

    fn tick(&mut self, now: Instant) {
        if self.content.borrow_mut().tick(now) {
            self.needs_redraw = true;
        }
    }

    /// Run the application
    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        )?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal).await;

        if let Some(mut handle) = self.scrollbar.take() {
            handle.detach();
        }

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableFocusChange
        )?;
        terminal.show_cursor()?;
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        loop {
            let size = terminal.size()?;
            self.update_layout(Rect::new(0, 0, size.width, size.height));

            self.tick(Instant::now());
            self.flush_notifications();

            if self.needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                self.needs_redraw = false;
            }

            // 60fps only while animating
            let poll_timeout = if self.content.borrow().is_animating() {
                FRAME_INTERVAL
            } else {
                IDLE_INTERVAL
            };

            tokio::select! {
                biased;

                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(e)) => tracing::warn!("Terminal event error: {}", e),
                        None => self.should_quit = true,
                    }
                }
                _ = tokio::time::sleep(poll_timeout) => {}
            }

            // Scroll writes made by the handler are announced after it returns
            self.flush_notifications();

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key.code, key.modifiers),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::FocusLost => self.handle_focus_lost(),
            Event::Resize(width, height) => self.update_layout(Rect::new(0, 0, width, height)),
            _ => return,
        }
        self.needs_redraw = true;
    }

    fn ui(&self, f: &mut Frame) {
        let content = self.content.borrow();
        let lines = content.visible_lines().join("\n");
        f.render_widget(Paragraph::new(lines), self.layout.content_area);

        let thumb = self
            .scrollbar
            .as_ref()
            .filter(|handle| handle.needs_scrollbar() && self.layout.is_measured())
            .and_then(|handle| handle.thumb());
        let dragging = self
            .scrollbar
            .as_ref()
            .is_some_and(|handle| handle.is_dragging());
        render_scrollbar(
            f.buffer_mut(),
            self.layout.up_button,
            self.layout.track_area,
            self.layout.down_button,
            thumb,
            dragging,
            ScrollbarColors::default(),
        );

        let position = StatusPosition {
            first_line: content.first_visible_line(),
            line_count: content.line_count(),
            dragging,
        };
        render_status_bar(f, self.layout.status_area, &self.title, &position);
    }

    /// Content offset in pixels
    pub fn scroll_top(&self) -> f64 {
        self.content.borrow().scroll_top()
    }
}
