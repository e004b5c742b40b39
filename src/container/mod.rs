//! Container-switching state machine
//!
//! A container owns a fixed, ordered set of panels and keeps exactly
//! one attached at rest. Selecting another panel attaches it, runs a
//! timed cross-fade with both panels in the hierarchy (incoming in
//! front), and detaches the outgoing panel only once the fade
//! completes. Title and menu state follow the incoming panel
//! immediately at the start of a switch.

mod menu;
mod observer;
mod registry;
mod transition;

pub use menu::{MenuModel, MenuOption};
pub use observer::{LifecycleEvent, LifecycleObserver, LifecyclePhase, NullObserver, TracingObserver};
pub use registry::{ContainerError, SelectionRegistry};
pub use transition::CrossFade;

use std::time::{Duration, Instant};

use crate::panel::Panel;

/// Which panels currently sit in the container's surface hierarchy.
#[derive(Clone, Copy)]
enum Attachment {
    /// Before the first presentation.
    Empty,
    /// At rest: the active panel only.
    Single(usize),
    /// Mid-switch: outgoing panel still attached behind the incoming
    /// one until the fade completes.
    Fading {
        from: usize,
        to: usize,
        fade: CrossFade,
    },
}

/// What the surface shows right now, for the renderer.
pub enum Surface<'a> {
    Settled(&'a dyn Panel),
    Fading {
        from: &'a dyn Panel,
        to: &'a dyn Panel,
        progress: f32,
    },
}

pub struct Container {
    registry: SelectionRegistry,
    attachment: Attachment,
    /// Selection that arrived while a fade was in flight; replayed when
    /// the fade completes. Single slot, latest wins.
    pending: Option<usize>,
    title: Option<String>,
    menu: MenuModel,
    menu_title: String,
    duration: Duration,
    observer: Box<dyn LifecycleObserver>,
}

impl Container {
    /// Creates a container over `panels` seeded at `initial_index`.
    /// Nothing is attached until [`present`](Self::present) runs; the
    /// menu is already built with the seed option checked.
    pub fn new(
        menu_title: impl Into<String>,
        panels: Vec<Box<dyn Panel>>,
        initial_index: usize,
        duration: Duration,
        observer: Box<dyn LifecycleObserver>,
    ) -> Result<Self, ContainerError> {
        let registry = SelectionRegistry::new(panels, initial_index)?;
        let menu_title = menu_title.into();
        let menu = MenuModel::rebuild(menu_title.clone(), &registry);
        Ok(Self {
            registry,
            attachment: Attachment::Empty,
            pending: None,
            title: None,
            menu,
            menu_title,
            duration,
            observer,
        })
    }

    /// Attaches the seed panel. Runs once; later calls are no-ops.
    pub fn present(&mut self) {
        if !matches!(self.attachment, Attachment::Empty) {
            return;
        }
        let index = self.registry.current_index();
        self.record(LifecyclePhase::Presented, index);
        self.record(LifecyclePhase::WillAttach, index);
        self.attachment = Attachment::Single(index);
        self.title = self.panel_title(index);
        self.record(LifecyclePhase::DidAttach, index);
    }

    /// Handles a menu selection.
    ///
    /// Re-selecting the active panel (or the destination of an
    /// in-flight fade) is a no-op. A selection arriving mid-fade is
    /// queued and starts once the fade completes. Out-of-range indices
    /// and selection before `present` are contract errors.
    pub fn select(&mut self, index: usize, now: Instant) -> Result<(), ContainerError> {
        if index >= self.registry.len() {
            return Err(ContainerError::IndexOutOfRange {
                index,
                len: self.registry.len(),
            });
        }
        self.record(LifecyclePhase::Selected, index);

        match self.attachment {
            Attachment::Empty => Err(ContainerError::NotPresented),
            Attachment::Single(active) => {
                if index != active {
                    self.begin_switch(active, index, now);
                }
                Ok(())
            }
            Attachment::Fading { to, .. } => {
                if index != to {
                    self.pending = Some(index);
                } else {
                    self.pending = None;
                }
                Ok(())
            }
        }
    }

    /// Advances the in-flight fade. Call once per event-loop turn; when
    /// the fade deadline passes this detaches the outgoing panel and
    /// replays any queued selection.
    pub fn tick(&mut self, now: Instant) {
        let Attachment::Fading { from, to, fade } = self.attachment else {
            return;
        };
        if !fade.is_complete(now) {
            return;
        }

        self.attachment = Attachment::Single(to);
        self.record(LifecyclePhase::DidAttach, to);
        self.record(LifecyclePhase::WillDetach, from);
        self.record(LifecyclePhase::DidDetach, from);
        self.record(LifecyclePhase::TransitionFinished, to);

        if let Some(next) = self.pending.take() {
            if next != to {
                self.begin_switch(to, next, now);
            }
        }
    }

    /// Starts the cross-fade `from` -> `to`. Bookkeeping (active index,
    /// title, menu) moves to `to` immediately; only the detach of
    /// `from` waits for the fade.
    fn begin_switch(&mut self, from: usize, to: usize, now: Instant) {
        self.registry.set_active(to);
        self.title = self.panel_title(to);
        self.menu = MenuModel::rebuild(self.menu_title.clone(), &self.registry);
        self.record(LifecyclePhase::WillAttach, to);
        self.attachment = Attachment::Fading {
            from,
            to,
            fade: CrossFade::new(now, self.duration),
        };
        self.record(LifecyclePhase::TransitionStarted, to);
    }

    fn panel_title(&self, index: usize) -> Option<String> {
        self.registry
            .panel_at(index)
            .ok()
            .map(|panel| panel.title().to_string())
    }

    fn record(&self, phase: LifecyclePhase, index: usize) {
        let panel = self
            .registry
            .panel_at(index)
            .map(|panel| panel.title())
            .unwrap_or("unknown");
        self.observer.record(LifecycleEvent {
            phase,
            index,
            panel,
        });
    }

    /// The surface content at `now`, or `None` before presentation.
    pub fn surface(&self, now: Instant) -> Option<Surface<'_>> {
        match &self.attachment {
            Attachment::Empty => None,
            Attachment::Single(index) => {
                self.registry.panel_at(*index).ok().map(Surface::Settled)
            }
            Attachment::Fading { from, to, fade } => {
                let from = self.registry.panel_at(*from).ok()?;
                let to = self.registry.panel_at(*to).ok()?;
                Some(Surface::Fading {
                    from,
                    to,
                    progress: fade.progress(now),
                })
            }
        }
    }

    /// Container title: the active panel's title once presented.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn menu(&self) -> &MenuModel {
        &self.menu
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.registry.current_index()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    #[allow(dead_code)]
    #[must_use]
    pub fn is_presented(&self) -> bool {
        !matches!(self.attachment, Attachment::Empty)
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        matches!(self.attachment, Attachment::Fading { .. })
    }

    /// How many panels sit in the surface hierarchy: 0 before
    /// presentation, 1 at rest, 2 mid-fade.
    #[allow(dead_code)]
    #[must_use]
    pub fn attached_count(&self) -> usize {
        match self.attachment {
            Attachment::Empty => 0,
            Attachment::Single(_) => 1,
            Attachment::Fading { .. } => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Frame, layout::Rect, style::Color};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct StubPanel {
        name: &'static str,
    }

    impl Panel for StubPanel {
        fn title(&self) -> &str {
            self.name
        }

        fn accent(&self) -> Color {
            Color::Reset
        }

        fn render(&self, _frame: &mut Frame, _area: Rect) {}
    }

    type EventLog = Rc<RefCell<Vec<(LifecyclePhase, String)>>>;

    struct RecordingObserver {
        log: EventLog,
    }

    impl LifecycleObserver for RecordingObserver {
        fn record(&self, event: LifecycleEvent<'_>) {
            self.log
                .borrow_mut()
                .push((event.phase, event.panel.to_string()));
        }
    }

    const FADE: Duration = Duration::from_millis(250);

    fn panels(names: &[&'static str]) -> Vec<Box<dyn Panel>> {
        names
            .iter()
            .map(|name| Box::new(StubPanel { name: *name }) as Box<dyn Panel>)
            .collect()
    }

    fn container(names: &[&'static str], initial: usize) -> Container {
        Container::new("Colors", panels(names), initial, FADE, Box::new(NullObserver)).unwrap()
    }

    fn recording_container(
        names: &[&'static str],
        initial: usize,
    ) -> (Container, EventLog) {
        let log: EventLog = Rc::new(RefCell::new(Vec::new()));
        let observer = RecordingObserver {
            log: Rc::clone(&log),
        };
        let container =
            Container::new("Colors", panels(names), initial, FADE, Box::new(observer)).unwrap();
        (container, log)
    }

    #[test]
    fn test_construction_rejects_empty_panels() {
        let result = Container::new("Colors", Vec::new(), 0, FADE, Box::new(NullObserver));
        assert_eq!(result.err(), Some(ContainerError::Empty));
    }

    #[test]
    fn test_construction_rejects_out_of_range_initial_index() {
        let result = Container::new(
            "Colors",
            panels(&["Red", "Orange", "Yellow"]),
            3,
            FADE,
            Box::new(NullObserver),
        );
        assert!(matches!(
            result.err(),
            Some(ContainerError::IndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_nothing_attached_before_present() {
        let container = container(&["Red", "Orange", "Yellow"], 0);
        assert_eq!(container.attached_count(), 0);
        assert!(!container.is_presented());
        assert_eq!(container.title(), None);
        // The menu is already seeded with the initial option checked.
        assert_eq!(container.menu().checked_index(), Some(0));
    }

    #[test]
    fn test_select_before_present_is_a_contract_error() {
        let mut container = container(&["Red", "Orange"], 0);
        let result = container.select(1, Instant::now());
        assert_eq!(result, Err(ContainerError::NotPresented));
    }

    #[test]
    fn test_present_attaches_exactly_the_initial_panel() {
        let mut container = container(&["Red", "Orange", "Yellow"], 0);
        container.present();
        assert_eq!(container.attached_count(), 1);
        assert_eq!(container.active_index(), 0);
        assert_eq!(container.title(), Some("Red"));
        assert_eq!(container.menu().checked_index(), Some(0));
    }

    #[test]
    fn test_present_is_idempotent() {
        let (mut container, log) = recording_container(&["Red", "Orange"], 0);
        container.present();
        let events_after_first = log.borrow().len();
        container.present();
        assert_eq!(log.borrow().len(), events_after_first);
        assert_eq!(container.attached_count(), 1);
    }

    #[test]
    fn test_select_out_of_range_is_recoverable() {
        let mut container = container(&["Red", "Orange"], 0);
        container.present();
        let result = container.select(2, Instant::now());
        assert_eq!(
            result,
            Err(ContainerError::IndexOutOfRange { index: 2, len: 2 })
        );
        // The failed request leaves the container untouched.
        assert_eq!(container.active_index(), 0);
        assert_eq!(container.attached_count(), 1);
    }

    #[test]
    fn test_select_updates_title_and_menu_immediately() {
        let mut container = container(&["Red", "Orange", "Yellow"], 0);
        container.present();
        let now = Instant::now();
        container.select(2, now).unwrap();

        // Title, active index, and menu follow the incoming panel at
        // the start of the fade; the outgoing panel is still attached.
        assert_eq!(container.title(), Some("Yellow"));
        assert_eq!(container.active_index(), 2);
        assert_eq!(container.menu().checked_index(), Some(2));
        assert_eq!(container.attached_count(), 2);
        assert!(container.is_transitioning());
    }

    #[test]
    fn test_fade_completion_detaches_outgoing_panel() {
        let mut container = container(&["Red", "Orange", "Yellow"], 0);
        container.present();
        let now = Instant::now();
        container.select(2, now).unwrap();

        container.tick(now + Duration::from_millis(100));
        assert_eq!(container.attached_count(), 2);

        container.tick(now + FADE);
        assert_eq!(container.attached_count(), 1);
        assert!(!container.is_transitioning());
        assert_eq!(container.active_index(), 2);
    }

    #[test]
    fn test_reselecting_active_panel_is_a_noop() {
        let (mut container, log) = recording_container(&["Red", "Orange", "Yellow"], 2);
        container.present();
        let events_before = log.borrow().len();

        container.select(2, Instant::now()).unwrap();
        assert!(!container.is_transitioning());
        assert_eq!(container.attached_count(), 1);
        assert_eq!(container.menu().checked_index(), Some(2));
        // Only the interaction event is recorded; no lifecycle churn.
        let recorded: Vec<LifecyclePhase> = log
            .borrow()
            .iter()
            .skip(events_before)
            .map(|(phase, _)| *phase)
            .collect();
        assert_eq!(recorded, vec![LifecyclePhase::Selected]);
    }

    #[test]
    fn test_every_index_is_reachable_from_every_start() {
        let names = ["Red", "Orange", "Yellow"];
        for start in 0..names.len() {
            for target in 0..names.len() {
                let mut container = container(&names, start);
                container.present();
                let now = Instant::now();
                container.select(target, now).unwrap();
                container.tick(now + FADE);
                assert_eq!(container.active_index(), target);
                assert_eq!(container.menu().checked_index(), Some(target));
                assert_eq!(container.attached_count(), 1);
            }
        }
    }

    #[test]
    fn test_attach_is_observed_before_detach() {
        let (mut container, log) = recording_container(&["Red", "Orange"], 0);
        container.present();
        let now = Instant::now();
        container.select(1, now).unwrap();
        container.tick(now + FADE);

        let phases: Vec<(LifecyclePhase, String)> = log.borrow().clone();
        let attach_position = phases
            .iter()
            .position(|(phase, panel)| *phase == LifecyclePhase::WillAttach && panel == "Orange");
        let detach_position = phases
            .iter()
            .position(|(phase, panel)| *phase == LifecyclePhase::WillDetach && panel == "Red");
        assert!(attach_position.is_some());
        assert!(detach_position.is_some());
        assert!(attach_position < detach_position);
    }

    #[test]
    fn test_transition_event_ordering() {
        let (mut container, log) = recording_container(&["Red", "Orange"], 0);
        container.present();
        log.borrow_mut().clear();

        let now = Instant::now();
        container.select(1, now).unwrap();
        container.tick(now + FADE);

        let phases: Vec<LifecyclePhase> =
            log.borrow().iter().map(|(phase, _)| *phase).collect();
        assert_eq!(
            phases,
            vec![
                LifecyclePhase::Selected,
                LifecyclePhase::WillAttach,
                LifecyclePhase::TransitionStarted,
                LifecyclePhase::DidAttach,
                LifecyclePhase::WillDetach,
                LifecyclePhase::DidDetach,
                LifecyclePhase::TransitionFinished,
            ]
        );
    }

    #[test]
    fn test_selection_during_fade_is_queued_not_overlapped() {
        let mut container = container(&["Red", "Orange", "Yellow"], 0);
        container.present();
        let now = Instant::now();
        container.select(1, now).unwrap();
        container.select(2, now + Duration::from_millis(50)).unwrap();

        // The in-flight fade keeps running; never more than two attached.
        assert_eq!(container.attached_count(), 2);
        assert_eq!(container.active_index(), 1);

        // First fade completes, queued selection starts immediately.
        container.tick(now + FADE);
        assert!(container.is_transitioning());
        assert_eq!(container.active_index(), 2);
        assert_eq!(container.attached_count(), 2);

        // Second fade completes.
        container.tick(now + FADE + FADE);
        assert_eq!(container.attached_count(), 1);
        assert_eq!(container.active_index(), 2);
        assert_eq!(container.menu().checked_index(), Some(2));
    }

    #[test]
    fn test_reselecting_fade_destination_clears_queue() {
        let mut container = container(&["Red", "Orange", "Yellow"], 0);
        container.present();
        let now = Instant::now();
        container.select(1, now).unwrap();
        container.select(2, now).unwrap();
        // Going back to the in-flight destination cancels the queued hop.
        container.select(1, now).unwrap();

        container.tick(now + FADE);
        assert!(!container.is_transitioning());
        assert_eq!(container.active_index(), 1);
    }

    #[test]
    fn test_latest_queued_selection_wins() {
        let mut container = container(&["Red", "Orange", "Yellow", "Green"], 0);
        container.present();
        let now = Instant::now();
        container.select(1, now).unwrap();
        container.select(2, now).unwrap();
        container.select(3, now).unwrap();

        container.tick(now + FADE);
        assert_eq!(container.active_index(), 3);
        container.tick(now + FADE + FADE);
        assert_eq!(container.active_index(), 3);
        assert_eq!(container.attached_count(), 1);
    }

    #[test]
    fn test_surface_reports_fade_progress() {
        let mut container = container(&["Red", "Orange"], 0);
        container.present();
        let now = Instant::now();
        container.select(1, now).unwrap();

        match container.surface(now + Duration::from_millis(125)) {
            Some(Surface::Fading { from, to, progress }) => {
                assert_eq!(from.title(), "Red");
                assert_eq!(to.title(), "Orange");
                assert!((progress - 0.5).abs() < 0.01);
            }
            _ => panic!("expected an in-flight fade"),
        }

        container.tick(now + FADE);
        match container.surface(now + FADE) {
            Some(Surface::Settled(panel)) => assert_eq!(panel.title(), "Orange"),
            _ => panic!("expected a settled surface"),
        }
    }
}
