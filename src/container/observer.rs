//! Lifecycle observability
//!
//! The container narrates attach/detach/transition activity through an
//! injected observer instead of logging directly, so tests can swap in
//! a recorder and the demos a tracing-backed sink.

/// The fixed set of lifecycle transitions a panel goes through inside
/// a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// The container attached its initial panel.
    Presented,
    /// A menu selection arrived (interaction, not lifecycle).
    Selected,
    WillAttach,
    DidAttach,
    WillDetach,
    DidDetach,
    TransitionStarted,
    TransitionFinished,
}

/// One recorded lifecycle event, tagged with the panel it concerns.
#[derive(Debug, Clone, Copy)]
pub struct LifecycleEvent<'a> {
    pub phase: LifecyclePhase,
    pub index: usize,
    pub panel: &'a str,
}

/// Sink for lifecycle events. Injected at container construction.
pub trait LifecycleObserver {
    fn record(&self, event: LifecycleEvent<'_>);
}

/// Routes lifecycle events to `tracing`: selections go to the
/// `interaction` target, everything else to `lifecycle`.
pub struct TracingObserver;

impl LifecycleObserver for TracingObserver {
    fn record(&self, event: LifecycleEvent<'_>) {
        match event.phase {
            LifecyclePhase::Selected => {
                tracing::info!(
                    target: "interaction",
                    index = event.index,
                    panel = event.panel,
                    "selected"
                );
            }
            LifecyclePhase::Presented
            | LifecyclePhase::WillAttach
            | LifecyclePhase::DidAttach
            | LifecyclePhase::WillDetach
            | LifecyclePhase::DidDetach
            | LifecyclePhase::TransitionStarted
            | LifecyclePhase::TransitionFinished => {
                tracing::info!(
                    target: "lifecycle",
                    phase = ?event.phase,
                    index = event.index,
                    panel = event.panel,
                    "lifecycle"
                );
            }
        }
    }
}

/// Discards every event. Default for tests.
pub struct NullObserver;

impl LifecycleObserver for NullObserver {
    fn record(&self, _event: LifecycleEvent<'_>) {}
}
