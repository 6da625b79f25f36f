use std::thread;

use tracing::{error, info, warn};

use super::types::{RestoreOptions, RestoreOutcome, RestoreReport, RestoreStatus, WindowSource};
use crate::launch::{AppLauncher, LaunchOutcome, LaunchPlan, launch_app};
use crate::layout::WindowRecord;
use crate::window::{WindowBackend, WindowError, WindowInfo};

/// Applies saved records to the live desktop, one window at a time.
///
/// For each record: find the window by exact title; if it is not open,
/// walk the record's launch plan and poll for the window (saved title,
/// then original title); then resize and move it. Every failure is
/// confined to its record.
pub struct RestoreSequencer<'a> {
    windows: &'a dyn WindowBackend,
    launcher: &'a dyn AppLauncher,
    options: RestoreOptions,
}

impl<'a> RestoreSequencer<'a> {
    pub fn new(
        windows: &'a dyn WindowBackend,
        launcher: &'a dyn AppLauncher,
        options: RestoreOptions,
    ) -> Self {
        Self {
            windows,
            launcher,
            options,
        }
    }

    pub fn restore_all<'r>(
        &self,
        records: impl IntoIterator<Item = &'r WindowRecord>,
    ) -> RestoreReport {
        info!(
            event = "core.restore.started",
            windows = self.windows.name(),
            launcher = self.launcher.name(),
            poll_attempts = self.options.poll_attempts,
            poll_interval_ms = self.options.poll_interval.as_millis() as u64
        );

        let outcomes: Vec<RestoreOutcome> =
            records.into_iter().map(|r| self.restore_one(r)).collect();
        let report = RestoreReport { outcomes };

        info!(
            event = "core.restore.completed",
            total = report.outcomes.len(),
            positioned = report.positioned_count(),
            failed = report.failed_count()
        );
        report
    }

    pub fn restore_one(&self, record: &WindowRecord) -> RestoreOutcome {
        info!(event = "core.restore.window_started", title = %record.title);

        let status = match self.find_window(&record.title) {
            Some(window) => self.position(record, &window, WindowSource::AlreadyOpen),
            None => self.launch_and_position(record),
        };

        RestoreOutcome {
            title: record.title.clone(),
            status,
        }
    }

    fn launch_and_position(&self, record: &WindowRecord) -> RestoreStatus {
        let plan = LaunchPlan::new(record.app_name.as_str(), record.open_method());
        if plan.is_empty() {
            warn!(
                event = "core.restore.launch_skipped",
                title = %record.title,
                open_method = %record.open_method
            );
            return RestoreStatus::LaunchSkipped;
        }

        info!(
            event = "core.restore.launch_started",
            title = %record.title,
            app = %record.app_name
        );

        let strategy = match launch_app(self.launcher, &plan) {
            LaunchOutcome::Launched { strategy, .. } => strategy,
            LaunchOutcome::Failed { attempts } => {
                error!(
                    event = "core.restore.launch_failed",
                    title = %record.title,
                    app = %record.app_name,
                    attempts = attempts
                );
                return RestoreStatus::LaunchFailed { attempts };
            }
        };

        match self.wait_for_window(record) {
            Some((window, waited_attempts)) => self.position(
                record,
                &window,
                WindowSource::Launched {
                    strategy,
                    waited_attempts,
                },
            ),
            None => {
                warn!(
                    event = "core.restore.window_not_found",
                    title = %record.title,
                    waited_attempts = self.options.poll_attempts
                );
                RestoreStatus::WindowNotFound {
                    waited_attempts: self.options.poll_attempts,
                }
            }
        }
    }

    /// Sleep-then-check loop over the saved title and the original title.
    fn wait_for_window(&self, record: &WindowRecord) -> Option<(WindowInfo, u32)> {
        for attempt in 1..=self.options.poll_attempts {
            thread::sleep(self.options.poll_interval);

            let found = self.find_window(&record.title).or_else(|| {
                record
                    .alternate_title()
                    .and_then(|title| self.find_window(title))
            });

            if let Some(window) = found {
                info!(
                    event = "core.restore.window_appeared",
                    title = %record.title,
                    matched_title = %window.title,
                    attempt = attempt
                );
                return Some((window, attempt));
            }

            info!(
                event = "core.restore.waiting",
                title = %record.title,
                attempt = attempt,
                max_attempts = self.options.poll_attempts
            );
        }
        None
    }

    fn position(
        &self,
        record: &WindowRecord,
        window: &WindowInfo,
        source: WindowSource,
    ) -> RestoreStatus {
        match self.apply_geometry(record, window) {
            Ok(()) => {
                info!(
                    event = "core.restore.window_positioned",
                    title = %record.title,
                    x = record.x,
                    y = record.y,
                    width = record.width,
                    height = record.height,
                    position_only = record.position_only
                );
                RestoreStatus::Positioned { source }
            }
            Err(e) => {
                error!(
                    event = "core.restore.position_failed",
                    title = %record.title,
                    error = %e
                );
                RestoreStatus::PositionFailed {
                    message: e.to_string(),
                }
            }
        }
    }

    /// Resize (unless `position_only`), then move.
    fn apply_geometry(&self, record: &WindowRecord, window: &WindowInfo) -> Result<(), WindowError> {
        if !record.position_only {
            self.windows.resize(window, record.width, record.height)?;
        }
        self.windows.move_to(window, record.x, record.y)
    }

    /// First window with exactly `title`; lookup errors count as not found.
    fn find_window(&self, title: &str) -> Option<WindowInfo> {
        match self.windows.find_windows_with_title(title) {
            Ok(windows) => windows.into_iter().next(),
            Err(e) => {
                warn!(
                    event = "core.restore.lookup_failed",
                    title = %title,
                    error = %e
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::time::Duration;

    use super::*;
    use crate::launch::{LaunchError, LaunchStrategy};

    /// In-memory desktop. A window listed with `visible_from = n` shows up
    /// from the n-th call to `list_windows` onward (1-based).
    struct FakeDesktop {
        windows: Vec<(usize, WindowInfo)>,
        list_calls: Cell<usize>,
        geometry: RefCell<Vec<String>>,
        fail_geometry_for: Option<String>,
        enumeration_broken: bool,
    }

    impl FakeDesktop {
        fn new() -> Self {
            Self {
                windows: Vec::new(),
                list_calls: Cell::new(0),
                geometry: RefCell::new(Vec::new()),
                fail_geometry_for: None,
                enumeration_broken: false,
            }
        }

        fn with_window(mut self, title: &str) -> Self {
            self.windows.push((1, window(title)));
            self
        }

        fn with_window_from_call(mut self, title: &str, visible_from: usize) -> Self {
            self.windows.push((visible_from, window(title)));
            self
        }

        fn geometry_calls(&self) -> Vec<String> {
            self.geometry.borrow().clone()
        }
    }

    impl WindowBackend for FakeDesktop {
        fn name(&self) -> &'static str {
            "fake"
        }

        fn list_windows(&self) -> Result<Vec<WindowInfo>, WindowError> {
            if self.enumeration_broken {
                return Err(WindowError::EnumerationFailed {
                    message: "no display".to_string(),
                });
            }
            let call = self.list_calls.get() + 1;
            self.list_calls.set(call);
            Ok(self
                .windows
                .iter()
                .filter(|(from, _)| call >= *from)
                .map(|(_, w)| w.clone())
                .collect())
        }

        fn resize(&self, window: &WindowInfo, width: u32, height: u32) -> Result<(), WindowError> {
            if self.fail_geometry_for.as_deref() == Some(window.title.as_str()) {
                return Err(WindowError::GeometryFailed {
                    title: window.title.clone(),
                    message: "window is not resizable".to_string(),
                });
            }
            self.geometry
                .borrow_mut()
                .push(format!("resize:{}:{}x{}", window.title, width, height));
            Ok(())
        }

        fn move_to(&self, window: &WindowInfo, x: i32, y: i32) -> Result<(), WindowError> {
            self.geometry
                .borrow_mut()
                .push(format!("move:{}:{},{}", window.title, x, y));
            Ok(())
        }
    }

    /// Records launch calls; succeeds for the listed call strings.
    struct FakeLauncher {
        accept: Vec<String>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeLauncher {
        fn accepting(accept: &[&str]) -> Self {
            Self {
                accept: accept.iter().map(|s| s.to_string()).collect(),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn respond(&self, call: String, app: &str) -> Result<(), LaunchError> {
            let ok = self.accept.contains(&call);
            self.calls.borrow_mut().push(call);
            if ok {
                Ok(())
            } else {
                Err(LaunchError::SpawnFailed {
                    app: app.to_string(),
                    message: "not installed".to_string(),
                })
            }
        }
    }

    impl AppLauncher for FakeLauncher {
        fn name(&self) -> &'static str {
            "fake"
        }

        fn open_app(&self, app: &str) -> Result<(), LaunchError> {
            self.respond(format!("open:{}", app), app)
        }

        fn start(&self, app: &str) -> Result<(), LaunchError> {
            self.respond(format!("start:{}", app), app)
        }
    }

    fn window(title: &str) -> WindowInfo {
        WindowInfo {
            id: 7,
            title: title.to_string(),
            app_name: String::new(),
            x: 0,
            y: 0,
            width: 300,
            height: 200,
            is_minimized: false,
        }
    }

    fn record(title: &str, app_name: &str) -> WindowRecord {
        WindowRecord {
            title: title.to_string(),
            x: 100,
            y: 50,
            width: 1280,
            height: 720,
            app_name: app_name.to_string(),
            original_title: title.to_string(),
            position_only: false,
            open_method: "auto".to_string(),
        }
    }

    fn fast_options() -> RestoreOptions {
        RestoreOptions::default()
            .with_poll_attempts(10)
            .with_poll_interval(Duration::ZERO)
    }

    #[test]
    fn test_open_window_is_positioned_without_launching() {
        let desktop = FakeDesktop::new().with_window("Notes");
        let launcher = FakeLauncher::accepting(&["open:notes"]);
        let sequencer = RestoreSequencer::new(&desktop, &launcher, fast_options());

        let outcome = sequencer.restore_one(&record("Notes", "notes"));

        assert_eq!(
            outcome.status,
            RestoreStatus::Positioned {
                source: WindowSource::AlreadyOpen
            }
        );
        assert!(launcher.calls().is_empty());
        assert_eq!(
            desktop.geometry_calls(),
            vec!["resize:Notes:1280x720", "move:Notes:100,50"]
        );
    }

    #[test]
    fn test_closed_window_exhausts_fallbacks_then_next_record_continues() {
        let desktop = FakeDesktop::new().with_window("Terminal");
        let launcher = FakeLauncher::accepting(&[]);
        let sequencer = RestoreSequencer::new(&desktop, &launcher, fast_options());

        let records = vec![
            record("SteelSeries GG", "steelseries gg"),
            record("Terminal", "terminal"),
        ];
        let report = sequencer.restore_all(&records);

        assert_eq!(
            launcher.calls(),
            vec![
                "open:steelseries gg",
                "open:steelseries-gg",
                "open:steelseriesgg",
                "start:steelseries gg",
            ]
        );
        assert_eq!(
            report.outcomes[0].status,
            RestoreStatus::LaunchFailed { attempts: 4 }
        );
        assert!(report.outcomes[1].is_positioned());
        assert_eq!(
            desktop.geometry_calls(),
            vec!["resize:Terminal:1280x720", "move:Terminal:100,50"]
        );
    }

    #[test]
    fn test_launched_window_is_polled_until_it_appears() {
        // call 1: initial lookup, calls 2..: poll attempts
        let desktop = FakeDesktop::new().with_window_from_call("Spotify", 4);
        let launcher = FakeLauncher::accepting(&["open:spotify"]);
        let sequencer = RestoreSequencer::new(&desktop, &launcher, fast_options());

        let outcome = sequencer.restore_one(&record("Spotify", "spotify"));

        assert_eq!(
            outcome.status,
            RestoreStatus::Positioned {
                source: WindowSource::Launched {
                    strategy: LaunchStrategy::Raw,
                    waited_attempts: 3
                }
            }
        );
        assert_eq!(launcher.calls(), vec!["open:spotify"]);
    }

    #[test]
    fn test_launched_window_can_match_by_original_title() {
        let desktop = FakeDesktop::new().with_window_from_call("Spotify Premium", 2);
        let launcher = FakeLauncher::accepting(&["open:spotify"]);
        let sequencer = RestoreSequencer::new(&desktop, &launcher, fast_options());

        let mut saved = record("Spotify - Song Title", "spotify");
        saved.original_title = "Spotify Premium".to_string();
        let outcome = sequencer.restore_one(&saved);

        assert!(outcome.is_positioned());
        assert_eq!(
            desktop.geometry_calls(),
            vec![
                "resize:Spotify Premium:1280x720",
                "move:Spotify Premium:100,50"
            ]
        );
    }

    #[test]
    fn test_window_that_never_appears_is_reported_after_poll_budget() {
        let desktop = FakeDesktop::new();
        let launcher = FakeLauncher::accepting(&["start:steam"]);
        let options = fast_options().with_poll_attempts(3);
        let sequencer = RestoreSequencer::new(&desktop, &launcher, options);

        let outcome = sequencer.restore_one(&record("Steam", "steam"));

        assert_eq!(
            outcome.status,
            RestoreStatus::WindowNotFound { waited_attempts: 3 }
        );
        // one initial lookup plus one per poll attempt
        assert_eq!(desktop.list_calls.get(), 4);
        assert!(desktop.geometry_calls().is_empty());
    }

    #[test]
    fn test_position_only_record_is_moved_not_resized() {
        let desktop = FakeDesktop::new().with_window("Calculator");
        let launcher = FakeLauncher::accepting(&[]);
        let sequencer = RestoreSequencer::new(&desktop, &launcher, fast_options());

        let mut saved = record("Calculator", "calculator");
        saved.position_only = true;
        sequencer.restore_one(&saved);

        assert_eq!(desktop.geometry_calls(), vec!["move:Calculator:100,50"]);
    }

    #[test]
    fn test_open_method_none_skips_launching() {
        let desktop = FakeDesktop::new();
        let launcher = FakeLauncher::accepting(&["open:code"]);
        let sequencer = RestoreSequencer::new(&desktop, &launcher, fast_options());

        let mut saved = record("main.rs - Visual Studio Code", "code");
        saved.open_method = "none".to_string();
        let outcome = sequencer.restore_one(&saved);

        assert_eq!(outcome.status, RestoreStatus::LaunchSkipped);
        assert!(launcher.calls().is_empty());
    }

    #[test]
    fn test_preferred_open_method_is_tried_first() {
        let desktop = FakeDesktop::new().with_window_from_call("Discord", 2);
        let launcher = FakeLauncher::accepting(&["start:discord"]);
        let sequencer = RestoreSequencer::new(&desktop, &launcher, fast_options());

        let mut saved = record("Discord", "discord");
        saved.open_method = "start".to_string();
        sequencer.restore_one(&saved);

        assert_eq!(launcher.calls(), vec!["start:discord"]);
    }

    #[test]
    fn test_geometry_failure_is_confined_to_its_record() {
        let mut desktop = FakeDesktop::new()
            .with_window("Locked Dialog")
            .with_window("Editor");
        desktop.fail_geometry_for = Some("Locked Dialog".to_string());
        let launcher = FakeLauncher::accepting(&[]);
        let sequencer = RestoreSequencer::new(&desktop, &launcher, fast_options());

        let records = vec![record("Locked Dialog", "dialog"), record("Editor", "editor")];
        let report = sequencer.restore_all(&records);

        assert!(matches!(
            report.outcomes[0].status,
            RestoreStatus::PositionFailed { .. }
        ));
        assert!(report.outcomes[1].is_positioned());
        assert_eq!(report.positioned_count(), 1);
    }

    #[test]
    fn test_enumeration_errors_count_as_not_found() {
        let mut desktop = FakeDesktop::new();
        desktop.enumeration_broken = true;
        let launcher = FakeLauncher::accepting(&["open:notes"]);
        let options = fast_options().with_poll_attempts(2);
        let sequencer = RestoreSequencer::new(&desktop, &launcher, options);

        let outcome = sequencer.restore_one(&record("Notes", "notes"));

        assert_eq!(
            outcome.status,
            RestoreStatus::WindowNotFound { waited_attempts: 2 }
        );
        assert_eq!(launcher.calls(), vec!["open:notes"]);
    }

    #[test]
    fn test_empty_layout_reports_nothing() {
        let desktop = FakeDesktop::new();
        let launcher = FakeLauncher::accepting(&[]);
        let sequencer = RestoreSequencer::new(&desktop, &launcher, fast_options());

        let report = sequencer.restore_all(Vec::<&WindowRecord>::new());

        assert!(report.outcomes.is_empty());
        assert_eq!(report.status_message(), "No saved layouts to apply.");
    }
}
