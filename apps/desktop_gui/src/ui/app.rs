use client_core::{
    config::Settings,
    reduce,
    render::{
        render, RenderView, RowView, SEARCH_PLACEHOLDER, SHUFFLE_LABEL, SORT_BY_LABEL,
        TOGGLE_ORDER_LABEL,
    },
    ViewEvent, ViewState,
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::{
    domain::{SortField, SortSpec},
    error::LoadError,
};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{classify_load_failure, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;

const APP_TITLE: &str = "User Table";

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub source_url: String,
    pub request_timeout_secs: Option<u64>,
}

impl From<Settings> for StartupConfig {
    fn from(settings: Settings) -> Self {
        Self {
            source_url: settings.source_url,
            request_timeout_secs: settings.request_timeout_secs,
        }
    }
}

impl Default for StartupConfig {
    fn default() -> Self {
        Settings::default().into()
    }
}

pub struct UserTableApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    source_url: String,
    view: ViewState,
    search_input: String,
    status: String,
}

impl UserTableApp {
    /// Builds the app and queues the initial fetch.
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            source_url: startup.source_url,
            view: ViewState::Loading,
            search_input: String::new(),
            status: "Loading users".to_string(),
        };
        app.request_fetch();
        app
    }

    fn request_fetch(&mut self) {
        let queued = dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::FetchRecords {
                source_url: self.source_url.clone(),
            },
            &mut self.status,
        );
        if !queued {
            let reason = self.status.clone();
            self.apply(ViewEvent::LoadFinished(Err(LoadError::Network(reason))));
        }
    }

    fn apply(&mut self, event: ViewEvent) {
        let state = std::mem::take(&mut self.view);
        self.view = reduce(state, event, &mut rand::rng());
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    if !self.view.is_loading() {
                        self.status = message;
                    }
                }
                UiEvent::RecordsLoaded(outcome) => {
                    self.status = match &outcome {
                        Ok(records) => format!("Loaded {} users", records.len()),
                        Err(err) => {
                            tracing::warn!("fetch failed: {err}");
                            classify_load_failure(err)
                        }
                    };
                    self.apply(ViewEvent::LoadFinished(outcome));
                    if let Some(table) = self.view.table() {
                        self.search_input = table.query().to_string();
                    }
                }
            }
        }
    }

    fn retry(&mut self) {
        if !self.view.can_retry() {
            return;
        }
        self.apply(ViewEvent::Retry);
        self.status = "Retrying".to_string();
        self.request_fetch();
    }

    fn show_loading(ui: &mut egui::Ui, label: &str) {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.label(label);
        });
    }

    fn show_error(&mut self, ui: &mut egui::Ui, message: &str, retry_label: &str) {
        ui.label(
            egui::RichText::new(message)
                .color(ui.visuals().error_fg_color)
                .strong(),
        );
        ui.add_space(8.0);
        if ui
            .add_enabled(self.view.can_retry(), egui::Button::new(retry_label))
            .clicked()
        {
            self.retry();
        }
    }

    /// Draws controls and rows; returns the events triggered this frame.
    fn show_table(
        &mut self,
        ui: &mut egui::Ui,
        sort: SortSpec,
        sort_options: [SortField; 5],
        rows: &[RowView],
    ) -> Vec<ViewEvent> {
        let mut events = Vec::new();

        ui.horizontal(|ui| {
            let search = ui.add(
                egui::TextEdit::singleline(&mut self.search_input)
                    .id_salt("user_search")
                    .hint_text(SEARCH_PLACEHOLDER)
                    .desired_width(280.0),
            );
            if search.changed() {
                events.push(ViewEvent::SearchInput(self.search_input.clone()));
            }

            ui.add_space(12.0);
            ui.label(SORT_BY_LABEL);
            let mut selected = sort.field;
            egui::ComboBox::from_id_salt("sort_field")
                .selected_text(selected.label())
                .show_ui(ui, |ui| {
                    for field in sort_options {
                        ui.selectable_value(&mut selected, field, field.label());
                    }
                });
            if selected != sort.field {
                events.push(ViewEvent::SortFieldChanged(selected));
            }

            let toggle = format!("{TOGGLE_ORDER_LABEL} ({})", sort.direction.label());
            if ui.button(toggle).clicked() {
                events.push(ViewEvent::SortOrderToggled);
            }
            if ui.button(SHUFFLE_LABEL).clicked() {
                events.push(ViewEvent::Shuffle);
            }
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("users_table")
                    .striped(true)
                    .num_columns(SortField::ALL.len())
                    .spacing([18.0, 6.0])
                    .show(ui, |ui| {
                        for field in SortField::ALL {
                            ui.strong(field.label());
                        }
                        ui.end_row();

                        for row in rows {
                            for cell in &row.cells {
                                ui.label(cell.as_str());
                            }
                            ui.end_row();
                        }
                    });
            });

        events
    }

    fn show_main(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading(APP_TITLE);
            ui.label(
                egui::RichText::new(&self.source_url)
                    .small()
                    .color(ui.visuals().weak_text_color()),
            );
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(egui::RichText::new(&self.status).small());
        });

        egui::CentralPanel::default().show(ctx, |ui| match render(&self.view) {
            RenderView::Loading { label } => Self::show_loading(ui, label),
            RenderView::Error {
                message,
                retry_label,
            } => self.show_error(ui, &message, retry_label),
            RenderView::Table {
                sort,
                sort_options,
                rows,
                ..
            } => {
                let events = self.show_table(ui, sort, sort_options, &rows);
                for event in events {
                    self.apply(event);
                }
            }
        });
    }
}

impl eframe::App for UserTableApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_main(ctx);

        if self.view.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}
