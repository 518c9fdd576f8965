use bon::Builder;
use chrono::Utc;
use serde_json::Value;
use tokio::time::sleep;

use crate::{
    practicum::{
        error::PracticumError,
        models::{self, Homework},
        status,
        Practicum,
    },
    prelude::*,
    telegram::notifier::Notifier,
};

/// Poll–detect–notify orchestrator.
#[derive(Builder)]
pub struct Bot {
    practicum: Practicum,
    notifier: Notifier,
    poll_interval: Duration,
}

/// Mutable per-process state of the poll loop. Never persisted.
struct LoopState {
    from_date: i64,
    last_sent: Option<String>,
}

impl Bot {
    /// Run the poll loop indefinitely.
    ///
    /// A failed cycle is reported to the same chat best-effort and the loop
    /// keeps going: only missing configuration, checked before this point,
    /// terminates the process. The sleep between cycles is unconditional.
    pub async fn run(self) {
        info!(?self.poll_interval, "🚀 Running the homework status bot…");
        let mut state = LoopState { from_date: Utc::now().timestamp(), last_sent: None };
        loop {
            if let Err(error) = self.poll(&mut state).await {
                error!("💥 Poll cycle failed: {error:#}");
                self.report_failure(&error).await;
            }
            sleep(self.poll_interval).await;
        }
    }

    /// One fetch–validate–render–notify cycle.
    async fn poll(&self, state: &mut LoopState) -> Result {
        let fetched = self.practicum.get_statuses(state.from_date).await;
        let (message, current_date) = prepare_cycle(state.last_sent.as_deref(), fetched)?;
        if let Some(message) = message {
            self.notifier.notify(&message).await?;
            state.last_sent = Some(message);
        } else {
            info!("No status changes");
        }
        if let Some(current_date) = current_date {
            state.from_date = current_date;
        }
        Ok(())
    }

    /// Best-effort failure report to the same chat. A delivery failure here
    /// is only logged, never escalated into another report.
    async fn report_failure(&self, error: &Error) {
        if let Err(error) = self.notifier.notify(&failure_report(error)).await {
            warn!("Failed to report the failure: {error:#}");
        }
    }
}

/// The pure part of one poll cycle: shape checking, rendering, and
/// de-duplication applied to the fetch outcome.
///
/// Returns the notification to send, if any, and the server timestamp to
/// advance the polling window to. A fetch error passes straight through:
/// recovery is the loop's business, not the cycle's.
fn prepare_cycle(
    last_sent: Option<&str>,
    fetched: Result<Value, PracticumError>,
) -> Result<(Option<String>, Option<i64>), PracticumError> {
    let raw = fetched?;
    let homeworks = models::validate(&raw)?;
    let message = next_notification(last_sent, &homeworks)?;
    Ok((message, models::current_date(&raw)))
}

/// The failure text delivered to the chat when a cycle fails.
fn failure_report(error: &Error) -> String {
    format!("Сбой в работе программы: {error:#}")
}

/// Pick the notification to send, if any.
///
/// The first entry is the one rendered: the API orders homeworks most recent
/// first. The rendered text is compared to the previously sent one, so an
/// unchanged status is never reported twice in a row.
fn next_notification(
    last_sent: Option<&str>,
    homeworks: &[Homework],
) -> Result<Option<String>, PracticumError> {
    let Some(homework) = homeworks.first() else {
        return Ok(None);
    };
    let message = status::render(homework)?;
    if last_sent == Some(message.as_str()) {
        Ok(None)
    } else {
        Ok(Some(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approved(name: &str) -> Homework {
        Homework {
            homework_name: Some(name.to_string()),
            status: Some("approved".to_string()),
        }
    }

    #[test]
    fn empty_list_produces_no_notification() -> Result {
        assert_eq!(next_notification(None, &[])?, None);
        Ok(())
    }

    #[test]
    fn changed_status_produces_notification() -> Result {
        let message = next_notification(None, &[approved("hw1")])?
            .context("expected a notification")?;
        assert_eq!(
            message,
            r#"Изменился статус проверки работы "hw1". Работа проверена: ревьюеру всё понравилось. Ура!"#,
        );
        Ok(())
    }

    #[test]
    fn repeated_status_is_deduplicated() -> Result {
        let first = next_notification(None, &[approved("hw1")])?
            .context("expected a notification")?;
        assert_eq!(next_notification(Some(&first), &[approved("hw1")])?, None);
        Ok(())
    }

    #[test]
    fn new_status_after_deduplication_is_notified() -> Result {
        let first = next_notification(None, &[approved("hw1")])?
            .context("expected a notification")?;
        assert!(next_notification(Some(&first), &[approved("hw2")])?.is_some());
        Ok(())
    }

    #[test]
    fn first_entry_wins_over_older_ones() -> Result {
        let message = next_notification(None, &[approved("newest"), approved("older")])?
            .context("expected a notification")?;
        assert!(message.contains("newest"));
        Ok(())
    }

    /// A transport-level failure. `reqwest::Error` has no public constructor,
    /// so one is obtained from a request builder without touching the network.
    fn connection_failure() -> PracticumError {
        let error = reqwest::Client::new().get("htp;//no-such-scheme").build().unwrap_err();
        PracticumError::Connection(error)
    }

    #[test]
    fn connection_failure_does_not_end_the_polling() -> Result {
        let failed = prepare_cycle(None, Err(connection_failure()));
        assert!(matches!(failed, Err(PracticumError::Connection(_))));

        // The loop reports the failure and carries on: the next cycle
        // proceeds from the untouched state as if nothing happened.
        // language=json
        let raw: Value = serde_json::from_str(
            r#"{"current_date": 100, "homeworks": [{"homework_name": "hw1", "status": "approved"}]}"#,
        )?;
        let (message, current_date) = prepare_cycle(None, Ok(raw))?;
        assert!(message.is_some());
        assert_eq!(current_date, Some(100));
        Ok(())
    }

    #[test]
    fn failed_cycle_is_reported_with_the_failure_text() {
        let report = failure_report(&Error::from(connection_failure()));
        assert!(report.starts_with("Сбой в работе программы: "));
    }

    #[test]
    fn unknown_status_fails_the_cycle() {
        let entry = Homework {
            homework_name: Some("hw2".to_string()),
            status: Some("bogus".to_string()),
        };
        assert!(matches!(
            next_notification(None, &[entry]),
            Err(PracticumError::UnknownStatus(_)),
        ));
    }
}
