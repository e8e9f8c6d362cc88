use std::{collections::VecDeque, path::PathBuf, sync::Arc, thread::JoinHandle};

use derive_new::new;

use super::{screenshot::save_png, VilijApp};
use crate::app::resources::PropertyKey;
use app_core::event::{AppEvent, EventState};

// ---------------------------------------------------------------------------
//
//
// EventQueue
//
//
// ---------------------------------------------------------------------------

/// The EventQueue stores events that are processed each iteration
/// of the application GUI event loop, in the order they were queued.
pub struct EventQueue<VilijApp> {
    /// Stores events for later processing.
    queue: VecDeque<Box<dyn AppEvent<App = VilijApp>>>,
    /// Temporarily stores events that have not yet finished running.
    tmp_backlog: VecDeque<Box<dyn AppEvent<App = VilijApp>>>,
}

impl<VilijApp> EventQueue<VilijApp> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            tmp_backlog: VecDeque::new(),
        }
    }

    pub fn queue_event(&mut self, event: Box<dyn AppEvent<App = VilijApp>>) {
        self.queue.push_back(event);
    }

    /// Drops pending events that act on the workspace content, other events
    /// (e.g. a screenshot waiting for its path) keep running.
    pub fn discard_workspace_events(&mut self) {
        self.queue.retain(|event| !event.is_workspace_bound());
        self.tmp_backlog.retain(|event| !event.is_workspace_bound());
    }
}

impl VilijApp {
    pub fn run_events(&mut self) {
        // Fully drain all queued events.
        while let Some(mut event) = self.event_queue.queue.pop_front() {
            match event.apply(self) {
                Ok(EventState::Finished) => {
                    self.request_redraw();
                }
                Ok(EventState::Busy) => {
                    // Add busy event to the backlog.
                    self.event_queue.tmp_backlog.push_back(event);
                }
                Err(err) => {
                    log::error!("event failed: {:?}", err)
                }
            }
        }

        // Putting the backlog back in the queue by swapping the
        // collections.
        std::mem::swap(
            &mut self.event_queue.queue,
            &mut self.event_queue.tmp_backlog,
        );
    }
}

// ---------------------------------------------------------------------------
//
//
// Events
//
//
// ---------------------------------------------------------------------------

/// Saves the data text to the path picked in a file dialog. With
/// `clear_after`, the workspace is reset once the text was saved.
#[derive(new)]
pub struct SaveRequested {
    thread_handle: Option<JoinHandle<Option<PathBuf>>>,
    clear_after: bool,
}

/// Loads the data text from the path picked in a file dialog.
#[derive(new)]
pub struct LoadRequested {
    thread_handle: Option<JoinHandle<Option<PathBuf>>>,
}

/// Writes a captured screenshot to the path picked in a file dialog.
#[derive(new)]
pub struct ScreenshotSaveRequested {
    image: Arc<egui::ColorImage>,
    thread_handle: Option<JoinHandle<Option<PathBuf>>>,
}

// ---------------------------------------------------------------------------
//
//
// apply()
//
//
// ---------------------------------------------------------------------------

impl AppEvent for SaveRequested {
    type App = VilijApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        if let Some(handle) = self.thread_handle.take_if(|handle| handle.is_finished()) {
            match handle.join() {
                Ok(Some(path)) => {
                    if app.save_text(&path) && self.clear_after {
                        app.reset_workspace();
                    }
                }
                Ok(None) => log::debug!("save dialog cancelled"),
                Err(err) => {
                    return Err(format!("unable to save file: {:?}", err));
                }
            };
            Ok(EventState::Finished)
        } else {
            Ok(EventState::Busy)
        }
    }

    fn is_workspace_bound(&self) -> bool {
        true
    }
}

impl AppEvent for LoadRequested {
    type App = VilijApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        if let Some(handle) = self.thread_handle.take_if(|handle| handle.is_finished()) {
            match handle.join() {
                Ok(Some(path)) => app.load_text(&path),
                Ok(None) => log::debug!("load dialog cancelled"),
                Err(err) => {
                    return Err(format!("unable to load file: {:?}", err));
                }
            };
            Ok(EventState::Finished)
        } else {
            Ok(EventState::Busy)
        }
    }
}

impl AppEvent for ScreenshotSaveRequested {
    type App = VilijApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        if let Some(handle) = self.thread_handle.take_if(|handle| handle.is_finished()) {
            match handle.join() {
                Ok(Some(path)) => {
                    if let Err(err) = save_png(&self.image, &path) {
                        log::error!("unable to save screenshot to {:?}: {}", path, err);
                        app.show_error(
                            PropertyKey::ScreenshotErrorTitle,
                            PropertyKey::ScreenshotErrorMessage,
                            &err,
                        );
                    }
                }
                Ok(None) => log::debug!("screenshot dialog cancelled"),
                Err(err) => {
                    return Err(format!("unable to save screenshot: {:?}", err));
                }
            };
            Ok(EventState::Finished)
        } else {
            Ok(EventState::Busy)
        }
    }
}
