//! Application Controller für zentrale Event-Verarbeitung.

use super::pointer::PointerTracker;
use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::core::{Line, LineUpdate};
use crate::shared::{EditorView, RenderScene, ViewUpdate};

/// Orchestriert View-Events und Use-Cases auf den AppState
/// und benachrichtigt alle registrierten Views.
#[derive(Default)]
pub struct AppController {
    views: Vec<Box<dyn EditorView>>,
    pointer: PointerTracker,
}

impl AppController {
    /// Erstellt einen neuen Controller ohne Views.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert eine View und bringt sie auf den aktuellen Stand.
    pub fn add_view(&mut self, state: &AppState, mut view: Box<dyn EditorView>) {
        for (label, value) in state.controls.values() {
            view.set_control_value(label, value);
        }
        view.set_control_enabled(super::ControlLabel::Undo, state.can_undo());
        view.set_control_enabled(super::ControlLabel::Redo, state.can_redo());
        for line in state.model.lines() {
            view.update_line(&LineUpdate::Changed(line.clone()));
        }
        for image in state.model.background_images() {
            view.update_background_image(image);
        }
        self.views.push(view);
    }

    /// Anzahl registrierter Views.
    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let intent = match intent {
            AppIntent::PointerSampled(sample) => {
                self.pointer.translate(sample, &mut state.sequences)
            }
            AppIntent::PointerDragged(drag) => {
                // Fremd vergebene Gesten-IDs dürfen nicht erneut erzeugt werden
                state.sequences.sync(&drag.sequence);
                AppIntent::PointerDragged(drag)
            }
            other => other,
        };

        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/` und reicht danach
    /// alle angefallenen Änderungen an die Views weiter.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        let result = match command {
            // === Editing ===
            AppCommand::ApplyEdit { events } => handlers::editing::apply_edit(state, events),
            AppCommand::BeginGesture { gesture } => {
                handlers::editing::begin_gesture(state, gesture);
                Ok(())
            }
            AppCommand::DragGesture { finish_point } => {
                handlers::editing::drag_gesture(state, finish_point)
            }
            AppCommand::FinishGesture => handlers::editing::finish_gesture(state),
            AppCommand::DeleteSelectedLines { widget_type } => {
                handlers::editing::delete_selected(state, widget_type)
            }
            AppCommand::MirrorSelectedLines { widget_type } => {
                handlers::editing::mirror_selected(state, widget_type)
            }

            // === Bedienelemente ===
            AppCommand::PressControl { label, value } => {
                handlers::controls::press_control(state, label, value);
                Ok(())
            }
            AppCommand::ReportWarning(warning) => {
                handlers::controls::report_warning(state, warning);
                Ok(())
            }

            // === History ===
            AppCommand::Undo => {
                handlers::history::undo(state);
                Ok(())
            }
            AppCommand::Redo => {
                handlers::history::redo(state);
                Ok(())
            }

            // === Buffer ===
            AppCommand::SaveBuffer { name } => handlers::file_ops::save(state, &name),
            AppCommand::LoadBuffer { name } => handlers::file_ops::load(state, &name),
            AppCommand::DeleteBuffer { name } => handlers::file_ops::delete(state, &name),
            AppCommand::NewBuffer => handlers::file_ops::new_buffer(state),
            AppCommand::RestoreStartupBuffer => {
                handlers::file_ops::restore_startup(state);
                Ok(())
            }

            // === Hintergrundbilder ===
            AppCommand::SetBackgroundVisible { surface, visible } => {
                handlers::background::set_visible(state, &surface, visible)
            }
            AppCommand::SetBackgroundImageRef { surface, image_ref } => {
                handlers::background::set_image_ref(state, &surface, image_ref)
            }
        };

        self.dispatch(state.take_notifications());
        result
    }

    fn dispatch(&mut self, updates: Vec<ViewUpdate>) {
        for update in &updates {
            for view in self.views.iter_mut() {
                update.dispatch(view.as_mut());
            }
        }
    }

    /// Baut die Render-Szene einer Zeichenfläche aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, widget_type: &str) -> RenderScene {
        render_scene::build(state, widget_type)
    }

    /// Linie nach Kennung.
    pub fn get_line<'a>(&self, state: &'a AppState, id: &str) -> Option<&'a Line> {
        state.model.get_line(id)
    }

    /// Alle selektierten Linien in Selektionsreihenfolge.
    pub fn selected_lines<'a>(&self, state: &'a AppState) -> Vec<&'a Line> {
        state.model.selected_lines()
    }

    /// Namen aller gespeicherten Buffer in Einfügereihenfolge.
    pub fn saved_buffer_names(&self, state: &AppState) -> Vec<String> {
        super::handlers::file_ops::list_names(state)
    }
}
