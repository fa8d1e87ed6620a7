use ratatui::Frame;
use tracing::{error, info, warn};

use crate::{
    config::Config,
    routing::{Animation, GlobalEmitter, RouteHandler, SavedStack, Transition},
    ui::{
        catalog,
        components::slide::Slide,
        layout::AppLayout,
        now_playing::NowPlaying,
        routes::{Screen, home_router},
        tui::{TerminalEvent, Tui},
        util::handler::EventHandler,
    },
};

pub struct App {
    pub config: Config,
    pub router: RouteHandler<Screen>,
    pub emitter: GlobalEmitter,
    pub player: NowPlaying,
    pub screen: Option<Screen>,
    pub render_error: Option<String>,
    pub motion: Option<(Transition, Animation)>,
    pub slide: Slide,
    pub tab: usize,
    pub has_focus: bool,
    pub should_quit: bool,
    pub needs_render: bool,
}

impl App {
    pub fn new(config: Config) -> color_eyre::Result<Self> {
        let emitter = GlobalEmitter::new();
        let mut router = home_router(&config, &emitter)?;

        if config.restore_state {
            if let Some(path) = &config.state_file {
                match SavedStack::load(path) {
                    Ok(Some(saved)) => {
                        let dropped = router.restore(saved);
                        info!(
                            "Restored {} navigation entries ({} dropped)",
                            router.depth(),
                            dropped
                        );
                    }
                    Ok(None) => {}
                    Err(e) => warn!("Ignoring saved navigation state: {e}"),
                }
            }
        }

        let player = NowPlaying::new(&catalog::NOW_PLAYING, config.lyrics_offset_ms);

        Ok(Self {
            config,
            router,
            emitter,
            player,
            screen: None,
            render_error: None,
            motion: None,
            slide: Slide::default(),
            tab: 0,
            has_focus: true,
            should_quit: false,
            needs_render: true,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new(self.config.tick_rate())?;
        tui.enter()?;

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui).await?;
        while !self.should_quit {
            if self.needs_render {
                self.refresh();
            }
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        tui.exit()?;
        self.save_state();
        Ok(())
    }

    /// Re-renders the active route after navigation.
    pub fn refresh(&mut self) {
        self.needs_render = false;
        match self.router.render() {
            Ok(rendered) => {
                if !rendered.transition.is_still() {
                    self.slide.start(rendered.animation);
                }
                self.motion = Some((rendered.transition, rendered.animation));
                self.screen = Some(rendered.screen);
                self.render_error = None;
            }
            Err(e) => {
                error!("Failed to render route: {e}");
                self.screen = None;
                self.render_error = Some(e.to_string());
            }
        }
    }

    fn save_state(&self) {
        if !self.config.restore_state {
            return;
        }
        let Some(path) = &self.config.state_file else {
            return;
        };
        if let Err(e) = self.router.save().store(path) {
            warn!("Failed to save navigation state: {e}");
        }
    }

    fn ui(&mut self, frame: &mut Frame) {
        if self.has_focus {
            let area = frame.area();
            AppLayout::new(self).render(frame, area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::test_app;

    #[test]
    fn starts_at_home() {
        let mut app = test_app();
        app.refresh();
        assert_eq!(app.screen.as_ref().unwrap().title(), "Home");
        assert_eq!(app.motion, Some((Transition::Still, Animation::Still)));
    }

    #[test]
    fn parameter_change_reports_still() {
        let mut app = test_app();
        app.refresh();
        app.router
            .push(&crate::ui::routes::ALBUM_ROUTE, (Some("MPRE-tides".into()),))
            .unwrap();
        app.refresh();
        assert_eq!(app.motion, Some((Transition::Stacking, Animation::SlideFromRight)));

        app.router
            .replace(&crate::ui::routes::ALBUM_ROUTE, (Some("MPRE-signal".into()),))
            .unwrap();
        app.refresh();
        assert_eq!(app.motion, Some((Transition::Still, Animation::Still)));
        assert_eq!(app.screen.as_ref().unwrap().title(), "Signal Fires · Harbor Lights");
    }

    #[test]
    fn restores_saved_stack() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("navigation.json");

        let mut app = test_app();
        app.config.restore_state = true;
        app.config.state_file = Some(path.clone());
        app.router
            .push(&crate::ui::routes::SETTINGS_ROUTE, ())
            .unwrap();
        app.save_state();

        let restored = App::new(app.config.clone()).unwrap();
        assert_eq!(restored.router.depth(), 1);
    }
}
