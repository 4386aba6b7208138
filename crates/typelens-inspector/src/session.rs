#![forbid(unsafe_code)]

//! The per-page inspector session.
//!
//! One [`InspectorSession`] exists per page, constructed on load and torn
//! down on unload. It owns all per-page state: the current snapshot and
//! view, the theme flag, the debounce deadline, and the closing-transition
//! guard.
//!
//! The session is host-driven and deterministic: the host pushes
//! [`InspectorEvent`]s as they happen and calls [`InspectorSession::on_frame`]
//! once per animation frame with the current monotonic time. Each call
//! returns the [`HostCommand`]s the host applies to the real DOM. Rapid
//! selection changes collapse to one settle pass (debounce); scroll and
//! resize collapse to at most one placement recompute per frame.
//!
//! # Panel lifecycle
//!
//! ```text
//! hidden -> appearing -> visible -> closing -> hidden
//! ```
//!
//! `appearing` spans mount-and-measure: the host inserts the panel
//! invisibly, measures it, and reports the size back via
//! [`InspectorSession::panel_measured`]; placement is computed and the
//! panel presented. `closing` drops visibility and interactivity at once
//! but defers removal by the fade duration; selection events arriving
//! while closing are ignored so a panel cannot reopen mid-transition.

use core::time::Duration;

use typelens_core::event::{KeyCode, KeyEvent, Modifiers};
use typelens_core::extract::{self, Selection};
use typelens_core::geometry::{RectF, SizeF, Viewport};
use typelens_core::placement;
use typelens_core::snapshot::FontSnapshot;
use typelens_platform::{Clipboard, StorageArea};
use typelens_store::HistoryLog;

use crate::config::SessionConfig;
use crate::panel::{PanelRegion, PanelView};

/// Panel lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    /// No panel in the page.
    Hidden,
    /// Mounted invisibly, waiting for the host's measurement.
    Appearing,
    /// Presented and interactive.
    Visible,
    /// Fading out; removal deferred, selection events ignored.
    Closing,
}

/// Input pushed into the session by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum InspectorEvent {
    /// The selection changed; `None` means it was cleared or collapsed.
    SelectionChanged(Option<Selection>),
    /// A pointer went down somewhere on the page.
    PointerDown {
        /// Whether the press landed inside the panel.
        inside_panel: bool,
        /// Whether a non-empty selection exists at press time.
        has_selection: bool,
    },
    /// A panel region was clicked.
    PanelClicked(PanelRegion),
    /// A page-level key event.
    Key(KeyEvent),
    /// The page scrolled; carries the refreshed viewport and the latest
    /// anchor rect (`None` when the selection collapsed).
    Scrolled {
        viewport: Viewport,
        anchor: Option<RectF>,
    },
    /// The viewport was resized; same payload as [`Self::Scrolled`].
    Resized {
        viewport: Viewport,
        anchor: Option<RectF>,
    },
    /// A dark-mode broadcast was received.
    DarkModeChanged(bool),
}

/// Effect the host applies to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    /// Insert (or replace) the panel, invisible, and measure it; report
    /// the size via [`InspectorSession::panel_measured`].
    MountPanel(PanelView),
    /// Make the measured panel visible at a document position.
    PresentPanel { x: f64, y: f64, flipped: bool },
    /// Move the visible panel without re-mounting.
    RepositionPanel { x: f64, y: f64, flipped: bool },
    /// Swap the panel's theme class in place, without repositioning.
    SetPanelTheme { dark: bool },
    /// Drop visibility and interactivity now; keep the element for the
    /// fade-out.
    BeginPanelFade,
    /// Remove the panel element from the page.
    RemovePanel,
    /// Show the "copied" feedback element.
    ShowCopyFeedback,
    /// Hide the "copied" feedback element.
    HideCopyFeedback,
    /// Highlight a clicked copy region.
    FlashRegion(PanelRegion),
    /// Remove the highlight from a region.
    UnflashRegion(PanelRegion),
    /// Open the known-font catalog link.
    OpenUrl(String),
}

/// The per-page inspector.
///
/// Generic over the page's local storage handle (history appends) and
/// clipboard handle. The display preference is read by the embedding at
/// construction and updated through [`InspectorEvent::DarkModeChanged`].
#[derive(Debug)]
pub struct InspectorSession<S, C> {
    config: SessionConfig,
    storage: S,
    clipboard: C,
    history: HistoryLog,

    phase: PanelPhase,
    dark_mode: bool,
    viewport: Viewport,
    anchor: RectF,
    panel_size: Option<SizeF>,
    snapshot: Option<FontSnapshot>,
    view: Option<PanelView>,

    latest_selection: Option<Selection>,
    settle_deadline: Option<Duration>,
    close_deadline: Option<Duration>,
    copy_feedback_deadline: Option<Duration>,
    region_flash: Option<(PanelRegion, Duration)>,
    reposition_pending: bool,

    /// Epoch milliseconds at monotonic zero; snapshots are stamped with
    /// `origin + now`.
    epoch_origin_ms: u64,
}

impl<S: StorageArea, C: Clipboard> InspectorSession<S, C> {
    /// Create a session for a freshly loaded page.
    pub fn new(
        config: SessionConfig,
        viewport: Viewport,
        dark_mode: bool,
        epoch_origin_ms: u64,
        storage: S,
        clipboard: C,
    ) -> Self {
        Self {
            config,
            storage,
            clipboard,
            history: HistoryLog::new(),
            phase: PanelPhase::Hidden,
            dark_mode,
            viewport,
            anchor: RectF::default(),
            panel_size: None,
            snapshot: None,
            view: None,
            latest_selection: None,
            settle_deadline: None,
            close_deadline: None,
            copy_feedback_deadline: None,
            region_flash: None,
            reposition_pending: false,
            epoch_origin_ms,
        }
    }

    /// Current panel phase.
    #[must_use]
    pub const fn phase(&self) -> PanelPhase {
        self.phase
    }

    /// Current theme flag.
    #[must_use]
    pub const fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Snapshot backing the current panel, if any.
    #[must_use]
    pub const fn snapshot(&self) -> Option<&FontSnapshot> {
        self.snapshot.as_ref()
    }

    /// The session's local storage handle (history namespace).
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Handle one host event at monotonic time `now`.
    pub fn handle_event(&mut self, event: InspectorEvent, now: Duration) -> Vec<HostCommand> {
        match event {
            InspectorEvent::SelectionChanged(selection) => {
                self.on_selection_changed(selection, now)
            }
            InspectorEvent::PointerDown {
                inside_panel,
                has_selection,
            } => self.on_pointer_down(inside_panel, has_selection, now),
            InspectorEvent::PanelClicked(region) => self.on_panel_clicked(region, now),
            InspectorEvent::Key(key) => self.on_key(key, now),
            InspectorEvent::Scrolled { viewport, anchor }
            | InspectorEvent::Resized { viewport, anchor } => {
                self.on_viewport_changed(viewport, anchor)
            }
            InspectorEvent::DarkModeChanged(dark) => self.on_dark_mode(dark),
        }
    }

    /// Run one animation frame at monotonic time `now`: fire elapsed
    /// deadlines and perform at most one coalesced placement recompute.
    pub fn on_frame(&mut self, now: Duration) -> Vec<HostCommand> {
        let mut commands = Vec::new();

        if deadline_elapsed(self.close_deadline, now) {
            self.close_deadline = None;
            self.phase = PanelPhase::Hidden;
            self.snapshot = None;
            self.view = None;
            self.panel_size = None;
            commands.push(HostCommand::RemovePanel);
        }

        if deadline_elapsed(self.settle_deadline, now) {
            self.settle_deadline = None;
            if self.phase != PanelPhase::Closing {
                commands.extend(self.settle_selection(now));
            }
        }

        if self.reposition_pending {
            self.reposition_pending = false;
            if self.phase == PanelPhase::Visible {
                commands.extend(self.reposition(now));
            }
        }

        if deadline_elapsed(self.copy_feedback_deadline, now) {
            self.copy_feedback_deadline = None;
            commands.push(HostCommand::HideCopyFeedback);
        }

        if let Some((region, deadline)) = self.region_flash
            && deadline <= now
        {
            self.region_flash = None;
            commands.push(HostCommand::UnflashRegion(region));
        }

        commands
    }

    /// Host callback after a [`HostCommand::MountPanel`]: the panel was
    /// inserted invisibly and measured.
    pub fn panel_measured(&mut self, size: SizeF, _now: Duration) -> Vec<HostCommand> {
        if self.phase != PanelPhase::Appearing {
            // Stale measurement from a panel that was closed meanwhile.
            return Vec::new();
        }
        self.panel_size = Some(size);
        match placement::place(self.anchor, size, self.viewport, self.config.padding) {
            Some(p) => {
                self.phase = PanelPhase::Visible;
                vec![HostCommand::PresentPanel {
                    x: p.x,
                    y: p.y,
                    flipped: p.flipped,
                }]
            }
            None => {
                // The anchor collapsed between mount and measure; the panel
                // was never visible, so it is removed without a fade.
                self.phase = PanelPhase::Hidden;
                self.snapshot = None;
                self.view = None;
                self.panel_size = None;
                vec![HostCommand::RemovePanel]
            }
        }
    }

    /// Tear the session down (page unload). Removes any mounted panel.
    pub fn teardown(&mut self) -> Vec<HostCommand> {
        self.settle_deadline = None;
        self.close_deadline = None;
        self.copy_feedback_deadline = None;
        self.region_flash = None;
        let mounted = self.phase != PanelPhase::Hidden;
        self.phase = PanelPhase::Hidden;
        self.snapshot = None;
        self.view = None;
        if mounted {
            vec![HostCommand::RemovePanel]
        } else {
            Vec::new()
        }
    }

    fn on_selection_changed(
        &mut self,
        selection: Option<Selection>,
        now: Duration,
    ) -> Vec<HostCommand> {
        if self.phase == PanelPhase::Closing {
            // Guard: no reopening mid-transition.
            return Vec::new();
        }
        if let Some(sel) = &selection {
            self.anchor = sel.anchor;
        }
        self.latest_selection = selection;
        self.settle_deadline = Some(now + self.config.selection_debounce);
        Vec::new()
    }

    fn on_pointer_down(
        &mut self,
        inside_panel: bool,
        has_selection: bool,
        now: Duration,
    ) -> Vec<HostCommand> {
        if inside_panel || has_selection {
            return Vec::new();
        }
        self.begin_close(now)
    }

    fn on_key(&mut self, key: KeyEvent, now: Duration) -> Vec<HostCommand> {
        match key.code {
            KeyCode::Escape => self.begin_close(now),
            _ if key.is_char('f')
                && key.modifiers == (Modifiers::CTRL | Modifiers::SHIFT) =>
            {
                // Refresh binding: re-run selection handling through the
                // usual debounce.
                if self.phase != PanelPhase::Closing {
                    self.settle_deadline = Some(now + self.config.selection_debounce);
                }
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn on_panel_clicked(&mut self, region: PanelRegion, now: Duration) -> Vec<HostCommand> {
        if self.phase != PanelPhase::Visible {
            return Vec::new();
        }
        match region {
            PanelRegion::Close => self.begin_close(now),
            PanelRegion::OpenCatalogAction => self
                .view
                .as_ref()
                .and_then(|view| view.catalog_url.clone())
                .map(|url| vec![HostCommand::OpenUrl(url)])
                .unwrap_or_default(),
            _ => self.copy_region(region, now),
        }
    }

    fn copy_region(&mut self, region: PanelRegion, now: Duration) -> Vec<HostCommand> {
        let Some(payload) = self
            .view
            .as_ref()
            .and_then(|view| view.copy_payload(region))
            .map(str::to_owned)
        else {
            return Vec::new();
        };

        if let Err(err) = self.clipboard.write_text(&payload) {
            tracing::debug!(%err, "clipboard write rejected");
            return Vec::new();
        }

        let mut commands = Vec::new();
        if let Some((old, _)) = self.region_flash.take()
            && old != region
        {
            commands.push(HostCommand::UnflashRegion(old));
        }
        self.region_flash = Some((region, now + self.config.region_flash));
        self.copy_feedback_deadline = Some(now + self.config.copy_feedback);
        commands.push(HostCommand::FlashRegion(region));
        commands.push(HostCommand::ShowCopyFeedback);
        commands
    }

    fn on_viewport_changed(
        &mut self,
        viewport: Viewport,
        anchor: Option<RectF>,
    ) -> Vec<HostCommand> {
        self.viewport = viewport;
        self.anchor = anchor.unwrap_or_default();
        if matches!(self.phase, PanelPhase::Visible | PanelPhase::Appearing) {
            // Coalesced: the recompute itself runs on the next frame with
            // whatever anchor is latest by then.
            self.reposition_pending = true;
        }
        Vec::new()
    }

    fn on_dark_mode(&mut self, dark: bool) -> Vec<HostCommand> {
        self.dark_mode = dark;
        if let Some(view) = &mut self.view {
            view.theme_dark = dark;
        }
        if matches!(self.phase, PanelPhase::Visible | PanelPhase::Appearing) {
            vec![HostCommand::SetPanelTheme { dark }]
        } else {
            Vec::new()
        }
    }

    fn settle_selection(&mut self, now: Duration) -> Vec<HostCommand> {
        let captured_at = self
            .epoch_origin_ms
            .saturating_add(now.as_millis() as u64);
        let snapshot = self
            .latest_selection
            .as_ref()
            .and_then(|sel| extract::snapshot(sel, captured_at));

        match snapshot {
            Some(snap) => {
                self.history.append(&mut self.storage, &snap);
                let view = PanelView::build(&snap, self.dark_mode);
                self.snapshot = Some(snap);
                self.view = Some(view.clone());
                self.panel_size = None;
                self.phase = PanelPhase::Appearing;
                vec![HostCommand::MountPanel(view)]
            }
            None => self.begin_close(now),
        }
    }

    fn reposition(&mut self, now: Duration) -> Vec<HostCommand> {
        let Some(size) = self.panel_size else {
            return Vec::new();
        };
        match placement::place(self.anchor, size, self.viewport, self.config.padding) {
            Some(p) => vec![HostCommand::RepositionPanel {
                x: p.x,
                y: p.y,
                flipped: p.flipped,
            }],
            None => self.begin_close(now),
        }
    }

    fn begin_close(&mut self, now: Duration) -> Vec<HostCommand> {
        if !matches!(self.phase, PanelPhase::Appearing | PanelPhase::Visible) {
            return Vec::new();
        }
        self.phase = PanelPhase::Closing;
        self.close_deadline = Some(now + self.config.close_fade);
        vec![HostCommand::BeginPanelFade]
    }
}

fn deadline_elapsed(deadline: Option<Duration>, now: Duration) -> bool {
    deadline.is_some_and(|d| d <= now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use typelens_core::extract::ComputedTextStyle;
    use typelens_platform::{CaptureClipboard, MemoryStorage};

    fn selection(text: &str) -> Selection {
        Selection {
            text: text.to_owned(),
            style: ComputedTextStyle {
                font_family: "Inter, sans-serif".to_owned(),
                font_size: "16px".to_owned(),
                font_weight: "400".to_owned(),
                font_style: "normal".to_owned(),
                line_height: "24px".to_owned(),
                letter_spacing: "normal".to_owned(),
                word_spacing: "0px".to_owned(),
                text_transform: "none".to_owned(),
                text_decoration: "none solid rgb(0, 0, 0)".to_owned(),
                color: "rgb(17, 24, 39)".to_owned(),
            },
            source_host: "example.com".to_owned(),
            anchor: RectF::new(400.0, 300.0, 120.0, 20.0),
        }
    }

    fn session() -> InspectorSession<MemoryStorage, CaptureClipboard> {
        InspectorSession::new(
            SessionConfig::default(),
            Viewport::new(1000.0, 800.0),
            false,
            1_700_000_000_000,
            MemoryStorage::new(),
            CaptureClipboard::new(),
        )
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    /// Drive a session from a fresh selection to a visible panel.
    fn show_panel(sess: &mut InspectorSession<MemoryStorage, CaptureClipboard>) {
        let cmds = sess.handle_event(
            InspectorEvent::SelectionChanged(Some(selection("hello"))),
            ms(0),
        );
        assert!(cmds.is_empty());
        let cmds = sess.on_frame(ms(100));
        assert!(matches!(cmds.as_slice(), [HostCommand::MountPanel(_)]));
        assert_eq!(sess.phase(), PanelPhase::Appearing);
        let cmds = sess.panel_measured(SizeF::new(300.0, 150.0), ms(101));
        assert!(matches!(cmds.as_slice(), [HostCommand::PresentPanel { .. }]));
        assert_eq!(sess.phase(), PanelPhase::Visible);
    }

    #[test]
    fn selection_settles_through_debounce_into_a_visible_panel() {
        let mut sess = session();
        show_panel(&mut sess);
        assert!(sess.snapshot().is_some());
    }

    #[test]
    fn rapid_selection_changes_collapse_to_one_settle() {
        let mut sess = session();
        sess.handle_event(InspectorEvent::SelectionChanged(Some(selection("a"))), ms(0));
        sess.handle_event(InspectorEvent::SelectionChanged(Some(selection("ab"))), ms(40));
        sess.handle_event(InspectorEvent::SelectionChanged(Some(selection("abc"))), ms(80));

        // First deadline (0 + 100) was superseded by the later events.
        assert!(sess.on_frame(ms(120)).is_empty());
        let cmds = sess.on_frame(ms(180));
        assert_eq!(cmds.len(), 1);
        assert!(matches!(&cmds[0], HostCommand::MountPanel(view) if !view.theme_dark));
    }

    #[test]
    fn empty_selection_after_settle_closes_the_panel() {
        let mut sess = session();
        show_panel(&mut sess);

        sess.handle_event(InspectorEvent::SelectionChanged(None), ms(200));
        let cmds = sess.on_frame(ms(300));
        assert_eq!(cmds, vec![HostCommand::BeginPanelFade]);
        assert_eq!(sess.phase(), PanelPhase::Closing);

        let cmds = sess.on_frame(ms(300) + SessionConfig::default().close_fade);
        assert_eq!(cmds, vec![HostCommand::RemovePanel]);
        assert_eq!(sess.phase(), PanelPhase::Hidden);
    }

    #[test]
    fn selection_during_closing_is_ignored() {
        let mut sess = session();
        show_panel(&mut sess);
        sess.handle_event(InspectorEvent::Key(KeyEvent::new(KeyCode::Escape)), ms(200));
        assert_eq!(sess.phase(), PanelPhase::Closing);

        sess.handle_event(
            InspectorEvent::SelectionChanged(Some(selection("again"))),
            ms(210),
        );
        // Only the deferred removal fires; no remount.
        let cmds = sess.on_frame(ms(200) + SessionConfig::default().close_fade);
        assert_eq!(cmds, vec![HostCommand::RemovePanel]);
        assert_eq!(sess.phase(), PanelPhase::Hidden);

        // After the guard clears, selections are honored again.
        sess.handle_event(
            InspectorEvent::SelectionChanged(Some(selection("again"))),
            ms(500),
        );
        let cmds = sess.on_frame(ms(600));
        assert!(matches!(cmds.as_slice(), [HostCommand::MountPanel(_)]));
    }

    #[test]
    fn escape_closes_and_outside_click_closes() {
        let mut sess = session();
        show_panel(&mut sess);
        let cmds = sess.handle_event(
            InspectorEvent::PointerDown {
                inside_panel: false,
                has_selection: false,
            },
            ms(200),
        );
        assert_eq!(cmds, vec![HostCommand::BeginPanelFade]);
    }

    #[test]
    fn clicks_inside_panel_or_on_selected_text_do_not_close() {
        let mut sess = session();
        show_panel(&mut sess);
        assert!(sess
            .handle_event(
                InspectorEvent::PointerDown {
                    inside_panel: true,
                    has_selection: false,
                },
                ms(200),
            )
            .is_empty());
        assert!(sess
            .handle_event(
                InspectorEvent::PointerDown {
                    inside_panel: false,
                    has_selection: true,
                },
                ms(201),
            )
            .is_empty());
        assert_eq!(sess.phase(), PanelPhase::Visible);
    }

    #[test]
    fn scroll_events_coalesce_to_one_reposition_per_frame() {
        let mut sess = session();
        show_panel(&mut sess);

        for i in 0..5u32 {
            let cmds = sess.handle_event(
                InspectorEvent::Scrolled {
                    viewport: Viewport::with_scroll(1000.0, 800.0, 0.0, f64::from(i) * 10.0),
                    anchor: Some(RectF::new(400.0, 300.0 - f64::from(i) * 10.0, 120.0, 20.0)),
                },
                ms(200 + u64::from(i)),
            );
            assert!(cmds.is_empty());
        }

        let cmds = sess.on_frame(ms(210));
        assert_eq!(cmds.len(), 1);
        match &cmds[0] {
            HostCommand::RepositionPanel { y, .. } => {
                // Latest anchor (top = 260) against scroll_y = 40.
                assert_eq!(*y, 40.0 + 260.0 - 150.0 - 12.0);
            }
            other => panic!("expected reposition, got {other:?}"),
        }
        // Nothing pending on the next frame.
        assert!(sess.on_frame(ms(220)).is_empty());
    }

    #[test]
    fn collapsed_anchor_during_reposition_hides_the_panel() {
        let mut sess = session();
        show_panel(&mut sess);
        sess.handle_event(
            InspectorEvent::Scrolled {
                viewport: Viewport::new(1000.0, 800.0),
                anchor: None,
            },
            ms(200),
        );
        let cmds = sess.on_frame(ms(210));
        assert_eq!(cmds, vec![HostCommand::BeginPanelFade]);
    }

    #[test]
    fn copy_click_writes_clipboard_and_schedules_feedback() {
        let mut sess = session();
        show_panel(&mut sess);

        let cmds = sess.handle_event(
            InspectorEvent::PanelClicked(PanelRegion::CopyColorAction),
            ms(200),
        );
        assert_eq!(
            cmds,
            vec![
                HostCommand::FlashRegion(PanelRegion::CopyColorAction),
                HostCommand::ShowCopyFeedback,
            ]
        );
        assert_eq!(sess.clipboard.writes, vec!["#111827"]);

        // Flash reverts first, feedback later.
        let cmds = sess.on_frame(ms(501));
        assert_eq!(
            cmds,
            vec![HostCommand::UnflashRegion(PanelRegion::CopyColorAction)]
        );
        let cmds = sess.on_frame(ms(1_701));
        assert_eq!(cmds, vec![HostCommand::HideCopyFeedback]);
    }

    #[test]
    fn denied_clipboard_is_silent() {
        let mut sess = session();
        show_panel(&mut sess);
        sess.clipboard.deny(true);
        let cmds = sess.handle_event(
            InspectorEvent::PanelClicked(PanelRegion::PrimaryFamily),
            ms(200),
        );
        assert!(cmds.is_empty());
        assert!(sess.clipboard.writes.is_empty());
    }

    #[test]
    fn catalog_action_opens_the_specimen_url() {
        let mut sess = session();
        show_panel(&mut sess);
        let cmds = sess.handle_event(
            InspectorEvent::PanelClicked(PanelRegion::OpenCatalogAction),
            ms(200),
        );
        assert_eq!(
            cmds,
            vec![HostCommand::OpenUrl(
                "https://fonts.google.com/?query=Inter".to_owned()
            )]
        );
    }

    #[test]
    fn dark_mode_broadcast_retints_without_repositioning() {
        let mut sess = session();
        show_panel(&mut sess);
        let cmds = sess.handle_event(InspectorEvent::DarkModeChanged(true), ms(200));
        assert_eq!(cmds, vec![HostCommand::SetPanelTheme { dark: true }]);
        assert!(sess.dark_mode());
        // No reposition was queued.
        assert!(sess.on_frame(ms(210)).is_empty());
    }

    #[test]
    fn dark_mode_with_no_panel_updates_state_only() {
        let mut sess = session();
        let cmds = sess.handle_event(InspectorEvent::DarkModeChanged(true), ms(0));
        assert!(cmds.is_empty());
        assert!(sess.dark_mode());
    }

    #[test]
    fn refresh_binding_reruns_selection_handling() {
        let mut sess = session();
        show_panel(&mut sess);

        let refresh = KeyEvent::new(KeyCode::Char('F'))
            .with_modifiers(Modifiers::CTRL | Modifiers::SHIFT);
        assert!(sess.handle_event(InspectorEvent::Key(refresh), ms(200)).is_empty());
        let cmds = sess.on_frame(ms(301));
        assert!(matches!(cmds.as_slice(), [HostCommand::MountPanel(_)]));
    }

    #[test]
    fn refresh_binding_requires_exactly_ctrl_shift() {
        let mut sess = session();
        show_panel(&mut sess);

        let with_alt = KeyEvent::new(KeyCode::Char('f'))
            .with_modifiers(Modifiers::CTRL | Modifiers::SHIFT | Modifiers::ALT);
        assert!(sess.handle_event(InspectorEvent::Key(with_alt), ms(200)).is_empty());
        let ctrl_only = KeyEvent::new(KeyCode::Char('f')).with_modifiers(Modifiers::CTRL);
        assert!(sess.handle_event(InspectorEvent::Key(ctrl_only), ms(201)).is_empty());

        // Neither chord scheduled a settle pass.
        assert!(sess.on_frame(ms(400)).is_empty());
        assert_eq!(sess.phase(), PanelPhase::Visible);
    }

    #[test]
    fn settle_appends_to_history() {
        let mut sess = session();
        show_panel(&mut sess);
        let log = HistoryLog::new();
        let entries = log.read_recent(&sess.storage, 10).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].primary_family, "Inter");
        assert_eq!(entries[0].captured_at_epoch_ms, 1_700_000_000_100);
    }

    #[test]
    fn anchor_collapsing_before_measurement_removes_without_fade() {
        let mut sess = session();
        sess.handle_event(
            InspectorEvent::SelectionChanged(Some(selection("hello"))),
            ms(0),
        );
        sess.on_frame(ms(100));
        assert_eq!(sess.phase(), PanelPhase::Appearing);
        sess.handle_event(
            InspectorEvent::Scrolled {
                viewport: Viewport::new(1000.0, 800.0),
                anchor: None,
            },
            ms(105),
        );
        let cmds = sess.panel_measured(SizeF::new(300.0, 150.0), ms(110));
        assert_eq!(cmds, vec![HostCommand::RemovePanel]);
        assert_eq!(sess.phase(), PanelPhase::Hidden);
    }

    #[test]
    fn teardown_removes_a_mounted_panel() {
        let mut sess = session();
        show_panel(&mut sess);
        assert_eq!(sess.teardown(), vec![HostCommand::RemovePanel]);
        assert!(sess.teardown().is_empty());
    }
}
