use eframe::egui;

use crate::{
    core::{
        api::FETCH_LIMIT,
        feedback::{
            ConsoleFeedback,
            FeedbackSink,
            SoundCue,
        },
        gesture::{
            DragState,
            SwipeDecision,
        },
        session::{
            SessionController,
            SessionPhase,
        },
        tasks::{
            TaskManager,
            TaskResult,
        },
    },
    gui::{
        card_view,
        empty_view,
        message_overlay::MessageOverlay,
        settings::{
            SettingsData,
            SettingsModal,
        },
        summary_view,
        theme::{
            set_theme,
            Theme,
        },
        top_bar::{
            TopBar,
            TopBarAction,
        },
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
};

pub struct PawdeckApp {
    // Session State
    pub session: SessionController,
    pub drag: DragState,

    // Configuration
    settings_data: SettingsData,

    // UI State
    pub theme: Theme,
    message_overlay: MessageOverlay,
    settings_modal: SettingsModal,

    // External Services
    feedback: Box<dyn FeedbackSink>,
    task_manager: TaskManager,
}

impl PawdeckApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let settings_data = load_json_or_default::<SettingsData>("settings.json");

        let task_manager = TaskManager::new();
        task_manager.fetch_pool(FETCH_LIMIT);

        let app = Self {
            session: SessionController::new(),
            drag: DragState::new(),
            settings_data,
            theme: Theme::catppuccin(),
            message_overlay: MessageOverlay::new(),
            settings_modal: SettingsModal::new(),
            feedback: Box::new(ConsoleFeedback),
            task_manager,
        };

        set_theme(&cc.egui_ctx, app.theme.clone());

        app
    }

    /// Single funnel for both swipe releases and the buttons.
    pub fn decide(&mut self, decision: SwipeDecision) {
        if self.session.phase() != SessionPhase::Active {
            return;
        }

        if !self.settings_data.muted {
            self.feedback.play(SoundCue::for_decision(decision));
        }

        self.session.record_decision(decision == SwipeDecision::Accept);
    }

    pub fn new_round(&mut self) {
        self.drag = DragState::new();
        let mut rng = rand::rng();
        self.session.reset(&mut rng);
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::PoolLoaded(Ok(pool)) => {
                self.message_overlay.clear_message();
                let mut rng = rand::rng();
                self.session.pool_loaded(
                    pool,
                    self.settings_data.clamped_round_size(),
                    &mut rng,
                );
            }
            TaskResult::PoolLoaded(Err(error_msg)) => {
                self.message_overlay.clear_message();
                eprintln!("Failed to fetch cats: {}", error_msg);
                self.session.pool_failed(error_msg);
            }
            TaskResult::LoadingMessage(message) => {
                self.message_overlay.set_message(message);
            }
        }
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, "settings.json") {
            eprintln!("Failed to save settings: {}", e);
        }
    }
}

impl eframe::App for PawdeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        if let Some(action) =
            TopBar::show(ctx, &self.theme, self.session.phase(), self.session.pool_len())
        {
            match action {
                TopBarAction::NewRound => self.new_round(),
                TopBarAction::OpenSettings => {
                    self.settings_modal.open_settings(self.settings_data.clone());
                }
            }
        }

        match self.session.phase() {
            SessionPhase::Loading => {
                // Overlay carries the spinner; keep a panel behind it so the
                // window never renders empty.
                egui::CentralPanel::default().show(ctx, |_ui| {});
            }
            SessionPhase::Active => card_view::show(ctx, self),
            SessionPhase::Summary => summary_view::show(ctx, self),
            SessionPhase::Empty => empty_view::show(ctx, self),
        }

        self.message_overlay.show(ctx, &self.theme);

        if let Some(settings) = self.settings_modal.show(ctx) {
            self.settings_data = settings;
            self.save_settings();
        }
    }
}
