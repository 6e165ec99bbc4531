use storefront_core::DispatchEstimate;

use crate::utils::format::{format_countdown, format_nice, format_range, format_working_days};

/// Display strings for one tick, kept apart from the DOM so they can be
/// checked without a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchView {
    pub countdown: String,
    pub estimate_short: String,
    pub delivery_dates: String,
    pub estimate_accordion: String,
    pub dispatch_date: String,
    pub express_date: Option<String>,
    pub show_tracked_note: bool,
}

impl DispatchView {
    pub fn from_estimate(estimate: &DispatchEstimate) -> Self {
        let estimate_short = format_working_days(estimate.window.min(), estimate.window.max());
        let delivery_dates = format_range(estimate.delivery_start, estimate.delivery_end);
        Self {
            countdown: format_countdown(estimate.countdown),
            estimate_accordion: format!("{estimate_short} ({delivery_dates})"),
            estimate_short,
            delivery_dates,
            dispatch_date: format_nice(estimate.base_date),
            express_date: estimate.express_date.map(format_nice),
            show_tracked_note: estimate.show_tracked_note,
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use chrono::Utc;
    use chrono_tz::Tz;
    use storefront_core::DispatchEstimator;
    use wasm_bindgen::prelude::*;

    use super::DispatchView;
    use crate::config::{self, RenderTargets, FALLBACK_COUNTDOWN_ID, FALLBACK_ESTIMATE_ID};
    use crate::utils::dom;
    use crate::utils::readiness::{sleep_ms, CancelToken, Readiness, ReadinessPoll};
    use crate::utils::schedule::Ticker;

    const TICK_MS: u32 = 1_000;

    struct Renderer {
        estimator: DispatchEstimator,
        time_zone: Option<Tz>,
        targets: RenderTargets,
    }

    impl Renderer {
        fn targets_present(&self) -> bool {
            [
                self.targets.countdown_id.as_str(),
                FALLBACK_COUNTDOWN_ID,
                self.targets.estimate_id.as_str(),
                FALLBACK_ESTIMATE_ID,
            ]
            .iter()
            .any(|id| dom::element_by_id(id).is_some())
        }

        fn render(&self) {
            let estimate = self
                .estimator
                .estimate_instant(Utc::now(), self.time_zone.as_ref());
            let view = DispatchView::from_estimate(&estimate);
            let t = &self.targets;

            if !dom::set_text(&t.countdown_id, &view.countdown) {
                dom::set_text(FALLBACK_COUNTDOWN_ID, &view.countdown);
            }
            if !dom::set_text(&t.estimate_id, &view.estimate_short) {
                dom::set_text(FALLBACK_ESTIMATE_ID, &view.estimate_short);
            }
            dom::set_text(&t.timer_delivery_estimate_id, &view.delivery_dates);
            dom::set_text(&t.estimate_accordion_id, &view.estimate_accordion);
            dom::set_text(&t.dispatch_date_id, &view.dispatch_date);
            if let Some(express) = &view.express_date {
                dom::set_text(&t.express_date_id, express);
            }
            if let Some(note) = dom::element_by_id(&t.tracked_note_id) {
                dom::set_displayed(&note, view.show_tracked_note);
            }
        }
    }

    #[derive(Default)]
    struct Schedule {
        ticker: Ticker,
        waiting: Option<CancelToken>,
    }

    /// Countdown and delivery estimate widget.
    ///
    /// Built and started explicitly by the page bootstrap:
    /// `const timer = new DispatchTimer({ courierMin: 4 }); timer.start();`
    #[wasm_bindgen]
    pub struct DispatchTimer {
        renderer: Rc<Renderer>,
        poll: ReadinessPoll,
        schedule: Rc<RefCell<Schedule>>,
    }

    #[wasm_bindgen]
    impl DispatchTimer {
        #[wasm_bindgen(constructor)]
        pub fn new(options: JsValue) -> DispatchTimer {
            let options = config::load(&options);
            DispatchTimer {
                renderer: Rc::new(Renderer {
                    estimator: DispatchEstimator::from_config(&options.dispatch),
                    time_zone: options.dispatch.time_zone,
                    targets: options.targets,
                }),
                poll: options.poll,
                schedule: Rc::new(RefCell::new(Schedule::default())),
            }
        }

        /// Waits for the widget markup, renders once, then every second.
        /// Calling it again while waiting or running does nothing.
        pub fn start(&self) {
            let cancel = {
                let mut schedule = self.schedule.borrow_mut();
                if schedule.ticker.is_running() || schedule.waiting.is_some() {
                    return;
                }
                let cancel = CancelToken::new();
                schedule.waiting = Some(cancel.clone());
                cancel
            };

            let renderer = Rc::clone(&self.renderer);
            let schedule = Rc::clone(&self.schedule);
            let poll = self.poll;
            wasm_bindgen_futures::spawn_local(async move {
                let probe = || renderer.targets_present();
                let outcome = poll.wait_until(probe, sleep_ms, &cancel).await;
                match outcome {
                    Readiness::Cancelled => return,
                    Readiness::Ready { attempts } => {
                        log::debug!("DispatchTimer targets ready after {attempts} probe(s)");
                    }
                    Readiness::GaveUp { attempts } => {
                        log::info!("DispatchTimer gave up waiting after {attempts} probe(s)");
                    }
                }

                let mut schedule = schedule.borrow_mut();
                schedule.waiting = None;
                renderer.render();
                let tick = Rc::clone(&renderer);
                schedule.ticker.start(TICK_MS, move || tick.render());
            });
        }

        /// Idempotent; also abandons a pending readiness wait.
        pub fn stop(&self) {
            let mut schedule = self.schedule.borrow_mut();
            if let Some(cancel) = schedule.waiting.take() {
                cancel.cancel();
            }
            if schedule.ticker.stop() {
                log::debug!("DispatchTimer stopped");
            }
        }

        #[wasm_bindgen(js_name = isRunning)]
        pub fn is_running(&self) -> bool {
            self.schedule.borrow().ticker.is_running()
        }

        /// Renders once without touching the schedule.
        pub fn refresh(&self) {
            self.renderer.render();
        }
    }

    impl Drop for DispatchTimer {
        fn drop(&mut self) {
            self.stop();
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::DispatchTimer;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use storefront_core::{
        BusinessDayWalker, CutoffPolicy, DispatchConfig, DispatchEstimator, HolidayCalendar,
        LeadTimeWindow,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn view_renders_every_target() {
        let estimator = DispatchEstimator::new(
            BusinessDayWalker::new(HolidayCalendar::uk_default()),
            CutoffPolicy::default(),
            LeadTimeWindow::default(),
        );
        let now = date(2025, 6, 10).and_hms_opt(18, 30, 15).unwrap();
        let view = DispatchView::from_estimate(&estimator.estimate(now));

        assert_eq!(view.countdown, "2h 29m 45s");
        assert_eq!(view.estimate_short, "4–6 working days");
        assert_eq!(view.delivery_dates, "Mon 16 Jun - Wed 18 Jun");
        assert_eq!(
            view.estimate_accordion,
            "4–6 working days (Mon 16 Jun - Wed 18 Jun)"
        );
        assert_eq!(view.dispatch_date, "Tue 10 Jun");
        assert_eq!(view.express_date, None);
        assert!(view.show_tracked_note);
    }

    #[test]
    fn view_at_cutoff_shows_minimum_countdown() {
        let estimator = DispatchEstimator::default();
        let now = date(2025, 6, 10).and_hms_opt(21, 0, 0).unwrap();
        let estimate = estimator.estimate(now);
        assert_eq!(estimate.countdown, Duration::zero());
        assert_eq!(DispatchView::from_estimate(&estimate).countdown, "00s");
    }

    #[test]
    fn express_and_tracked_note_follow_config() {
        let config = DispatchConfig {
            express: true,
            lead_time: LeadTimeWindow::new(1, 2).unwrap(),
            tracked_threshold: 3,
            ..DispatchConfig::default()
        };
        let estimator = DispatchEstimator::from_config(&config);
        let now = date(2025, 6, 13).and_hms_opt(22, 0, 0).unwrap();
        let view = DispatchView::from_estimate(&estimator.estimate(now));

        assert_eq!(view.dispatch_date, "Mon 16 Jun");
        assert_eq!(view.express_date.as_deref(), Some("Tue 17 Jun"));
        assert_eq!(view.countdown, "23h 00m 00s");
        assert!(!view.show_tracked_note);
    }
}
