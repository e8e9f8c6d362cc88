mod components;
pub mod config;
mod events;
pub mod resources;
mod screenshot;
pub mod storage;

use std::{
    path::{Path, PathBuf},
    sync::mpsc::{channel, Receiver},
};

use algo_selector::{Catalog, SelectionChanged};
use app_core::{
    properties::{fill_template, Properties},
    storage::{FileStore, TextStore},
};
use tsd_parser::{DataSet, ParseError};

use self::components::{
    AlgorithmPanel, Chart, DataInput, Dialog, DialogAnswer, EditToggle, InputResponse,
    TextChanged,
};
use self::events::{EventQueue, LoadRequested, SaveRequested, ScreenshotSaveRequested};
use self::resources::{PropertyKey, PropertyText};
use self::storage::{load_json, save_json, SessionStorage};
use config::Config;

const LEFT_PANE_WIDTH: f32 = 320.0;

pub struct VilijApp {
    config: Config,
    properties: Properties,
    data_input: DataInput,
    chart: Chart,
    algorithms: AlgorithmPanel,
    selection_rx: Receiver<SelectionChanged>,
    event_queue: EventQueue<Self>,
    dialog: Option<Dialog>,
    /// File the text was last loaded from or saved to.
    current_file: Option<PathBuf>,
    request_redraw: Option<()>,
}

impl VilijApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: Config,
        properties: Properties,
        catalog: Catalog,
    ) -> Self {
        Self::with_resources(config, properties, catalog)
    }

    fn with_resources(config: Config, properties: Properties, catalog: Catalog) -> Self {
        let (selection_tx, selection_rx) = channel();
        Self {
            config,
            properties,
            data_input: DataInput::new(),
            chart: Chart::new(),
            algorithms: AlgorithmPanel::new(catalog, selection_tx),
            selection_rx,
            event_queue: EventQueue::<Self>::new(),
            dialog: None,
            current_file: None,
            request_redraw: None,
        }
    }

    pub fn request_redraw(&mut self) {
        self.request_redraw = Some(());
    }

    fn update_state(&mut self) {
        self.run_events();
        while let Ok(event) = self.selection_rx.try_recv() {
            log::debug!("selection changed: {:?}", event);
            self.chart.apply_selection(&event);
            self.request_redraw();
        }
    }

    pub(crate) fn show_error(
        &mut self,
        title: PropertyKey,
        message: PropertyKey,
        error: &dyn std::fmt::Display,
    ) {
        self.dialog = Some(Dialog::error(&self.properties, title, message, error));
    }

    fn show_parse_error(&mut self, err: &ParseError) {
        log::debug!("invalid data: {}", err);
        match err {
            ParseError::DuplicateName { .. } => self.show_error(
                PropertyKey::DuplicateErrorTitle,
                PropertyKey::DuplicateErrorMessage,
                err,
            ),
            ParseError::InvalidLine { .. } => self.show_error(
                PropertyKey::InvalidTextErrorTitle,
                PropertyKey::InvalidTextErrorMessage,
                err,
            ),
        }
    }

    // -----------------------------------------------------------------------
    // text and chart
    // -----------------------------------------------------------------------

    fn on_text_changed(&mut self, changed: TextChanged) {
        if changed.is_empty {
            self.chart.clear();
            self.algorithms.clear();
        } else if changed.has_new_line && self.data_input.is_editing() {
            // Preview complete lines while typing, errors are reported on Done.
            if let Ok(data) = self.data_input.parse() {
                self.chart.set_data(data);
            }
        }
    }

    /// Applies the content change first, so Done sees the final signals.
    fn handle_input(&mut self, response: InputResponse) {
        if let Some(changed) = response.changed {
            self.on_text_changed(changed);
        }
        match response.toggle {
            Some(EditToggle::Start) => self.data_input.start_editing(),
            Some(EditToggle::Finish) => self.finish_editing(),
            None => {}
        }
    }

    fn finish_editing(&mut self) {
        match self.data_input.finish_editing() {
            Ok(data) => self.chart.set_data(data),
            Err(err) => self.show_parse_error(&err),
        }
    }

    fn loaded_note(&self, data: &DataSet, path: &Path) -> String {
        fill_template(
            self.properties.text(PropertyKey::LoadedData),
            &[&data.len(), &data.labels().len(), &path.display()],
        )
    }

    /// Loads and parses a data file. Invalid files leave the workspace as is.
    pub(crate) fn load_text(&mut self, path: &Path) {
        let text = match FileStore::new(path).load() {
            Ok(text) => text,
            Err(err) => {
                log::error!("{}", err);
                self.show_error(
                    PropertyKey::LoadErrorTitle,
                    PropertyKey::LoadErrorMessage,
                    &err,
                );
                return;
            }
        };
        let data = match DataSet::parse(&text) {
            Ok(data) => data,
            Err(err) => {
                self.show_parse_error(&err);
                return;
            }
        };

        if let Some(changed) = self.data_input.replace_text(text) {
            self.on_text_changed(changed);
        }
        self.data_input.mark_saved();
        let note = self.loaded_note(&data, path);
        self.data_input.set_loaded_note(Some(note));
        self.chart.set_data(data);
        self.current_file = Some(path.to_path_buf());
    }

    /// Returns whether the text was written.
    pub(crate) fn save_text(&mut self, path: &Path) -> bool {
        match FileStore::new(path).save(self.data_input.text()) {
            Ok(()) => {
                self.data_input.mark_saved();
                self.current_file = Some(path.to_path_buf());
                true
            }
            Err(err) => {
                log::error!("{}", err);
                self.show_error(
                    PropertyKey::SaveErrorTitle,
                    PropertyKey::SaveErrorMessage,
                    &err,
                );
                false
            }
        }
    }

    pub(crate) fn reset_workspace(&mut self) {
        log::debug!("resetting workspace");
        if let Some(changed) = self.data_input.clear() {
            self.on_text_changed(changed);
        }
        self.chart.clear();
        self.algorithms.clear();
        self.current_file = None;
        self.event_queue.discard_workspace_events();
    }

    // -----------------------------------------------------------------------
    // toolbar actions
    // -----------------------------------------------------------------------

    fn request_new(&mut self) {
        if self.data_input.is_unsaved() {
            self.dialog = Some(Dialog::UnsavedWork);
        } else {
            self.reset_workspace();
        }
    }

    /// Saves to the current file, or asks for a path if there is none yet.
    fn request_save(&mut self, clear_after: bool) {
        if let Some(path) = self.current_file.clone() {
            if self.save_text(&path) && clear_after {
                self.reset_workspace();
            }
            return;
        }
        log::debug!("open dialog to select save path");
        let dialog = self.data_file_dialog();
        let handle = std::thread::spawn(move || dialog().save_file());
        let event = SaveRequested::new(Some(handle), clear_after);
        self.event_queue.queue_event(Box::new(event));
    }

    fn request_load(&mut self) {
        log::debug!("open dialog to select load path");
        let dialog = self.data_file_dialog();
        let handle = std::thread::spawn(move || dialog().pick_file());
        let event = LoadRequested::new(Some(handle));
        self.event_queue.queue_event(Box::new(event));
    }

    /// Builds the load/save dialog on the thread that shows it.
    fn data_file_dialog(&self) -> impl FnOnce() -> rfd::FileDialog + Send + 'static {
        let dir = self.config.data_dir.clone();
        let desc = self.properties.text(PropertyKey::DataFileExtDesc).to_owned();
        let ext = self.properties.text(PropertyKey::DataFileExt).to_owned();
        move || {
            rfd::FileDialog::new()
                .set_directory(dir)
                .add_filter(desc, &[ext])
        }
    }

    fn on_screenshot(&mut self, image: std::sync::Arc<egui::ColorImage>) {
        log::debug!("open dialog to select screenshot path");
        let dir = self.config.screenshot_dir.clone();
        let name = self.properties.text(PropertyKey::ScrnshtInitial).to_owned();
        let desc = self.properties.text(PropertyKey::ScrnshtFileDesc).to_owned();
        let ext = self.properties.text(PropertyKey::ScrnshtFileExt).to_owned();
        let handle = std::thread::spawn(move || {
            rfd::FileDialog::new()
                .set_directory(dir)
                .set_file_name(name)
                .add_filter(desc, &[ext])
                .save_file()
        });
        let event = ScreenshotSaveRequested::new(image, Some(handle));
        self.event_queue.queue_event(Box::new(event));
    }

    fn on_dialog_answer(&mut self, answer: DialogAnswer) {
        match answer {
            DialogAnswer::Save => self.request_save(true),
            DialogAnswer::Discard => self.reset_workspace(),
            DialogAnswer::Cancel | DialogAnswer::Dismissed => {}
        }
    }

    // -----------------------------------------------------------------------
    // session
    // -----------------------------------------------------------------------

    pub(crate) fn session(&self) -> SessionStorage {
        SessionStorage {
            text: self.data_input.text().to_owned(),
            selection: self.algorithms.selection(),
            current_file: self.current_file.clone(),
            plot_bounds: self
                .chart
                .data()
                .map(|_| self.chart.get_current_plot_bounds()),
        }
    }

    /// Replaces the workspace with a stored session. A selection that does
    /// not match the catalog rejects the whole session.
    pub(crate) fn restore_session(&mut self, session: SessionStorage) -> Result<(), String> {
        let SessionStorage {
            text,
            selection,
            current_file,
            plot_bounds,
        } = session;
        self.algorithms
            .validate(&selection)
            .map_err(|err| format!("could not restore selection: {err}"))?;

        self.reset_workspace();
        if let Some(changed) = self.data_input.replace_text(text) {
            self.on_text_changed(changed);
        }
        if let Ok(data) = self.data_input.parse() {
            self.chart.set_data(data);
            if let Some(bounds) = plot_bounds {
                self.chart.apply_bounds(bounds);
            }
        }
        self.current_file = current_file;
        self.algorithms
            .restore(&selection)
            .map_err(|err| format!("could not restore selection: {err}"))
    }

    fn quick_save(&mut self) {
        if let Err(error) = save_json(self, None) {
            log::error!("{}", error);
            self.show_error(
                PropertyKey::SessionErrorTitle,
                PropertyKey::SessionErrorMessage,
                &error,
            );
        }
    }

    fn quick_load(&mut self) {
        if let Err(error) = load_json(self, None) {
            log::error!("{}", error);
            self.show_error(
                PropertyKey::SessionErrorTitle,
                PropertyKey::SessionErrorMessage,
                &error,
            );
        }
    }
}

impl eframe::App for VilijApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.request_redraw.take().is_some() {
            ctx.request_repaint();
        }

        self.update_state();

        let has_text = !self.data_input.is_empty();

        // Handle keyboard input.
        ctx.input(|i| {
            if i.key_pressed(egui::Key::N) && i.modifiers.ctrl && has_text {
                self.request_new();
            }
            if i.key_pressed(egui::Key::S) && i.modifiers.ctrl && has_text {
                self.request_save(false);
            }
            if i.key_pressed(egui::Key::L) && i.modifiers.ctrl {
                self.request_load();
            }
            // Quick save app state.
            if i.key_pressed(egui::Key::F6) {
                self.quick_save();
            }
            // Quick load app state.
            if i.key_pressed(egui::Key::F5) {
                self.quick_load();
            }
        });

        let screenshot = ctx.input(|i| {
            i.raw.events.iter().find_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        if let Some(image) = screenshot {
            self.on_screenshot(image);
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.toolbar(ui, ctx, has_text);
        });

        egui::SidePanel::left("left_panel")
            .default_width(LEFT_PANE_WIDTH)
            .show(ctx, |ui| {
                self.left_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart.render(&self.properties, ui);
        });

        let answer = self
            .dialog
            .as_ref()
            .and_then(|dialog| dialog.render(&self.properties, ctx));
        if let Some(answer) = answer {
            self.dialog = None;
            self.on_dialog_answer(answer);
        }
    }
}

impl VilijApp {
    fn toolbar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, has_text: bool) {
        let properties = &self.properties;
        let mut clicked = None;
        egui::menu::bar(ui, |ui| {
            let buttons = [
                (PropertyKey::NewText, PropertyKey::NewTooltip, has_text),
                (PropertyKey::SaveText, PropertyKey::SaveTooltip, has_text),
                (PropertyKey::LoadText, PropertyKey::LoadTooltip, true),
                (
                    PropertyKey::ScreenshotText,
                    PropertyKey::ScreenshotTooltip,
                    true,
                ),
                (PropertyKey::ExitText, PropertyKey::ExitTooltip, true),
            ];
            for (text, tooltip, enabled) in buttons {
                if ui
                    .add_enabled(enabled, egui::Button::new(properties.text(text)))
                    .on_hover_text(properties.text(tooltip))
                    .clicked()
                {
                    clicked = Some(text);
                }
            }
        });

        match clicked {
            Some(PropertyKey::NewText) => self.request_new(),
            Some(PropertyKey::SaveText) => self.request_save(false),
            Some(PropertyKey::LoadText) => self.request_load(),
            Some(PropertyKey::ScreenshotText) => {
                ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()))
            }
            Some(PropertyKey::ExitText) => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
            _ => {}
        }
    }

    fn left_panel(&mut self, ui: &mut egui::Ui) {
        let response = self.data_input.render(&self.properties, ui);
        self.handle_input(response);

        ui.separator();

        let enabled = !self.data_input.is_empty();
        if let Err(err) = self.algorithms.render(enabled, &self.properties, ui) {
            log::error!("{}", err);
            self.show_error(
                PropertyKey::SelectionErrorTitle,
                PropertyKey::SelectionErrorMessage,
                &err,
            );
        }
    }
}
