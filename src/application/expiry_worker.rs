//! Background task that runs the expiry check once a day.

use std::sync::Arc;

use chrono::{DateTime, Duration, FixedOffset, NaiveTime, TimeZone, Utc};
use tracing::{debug, error, info};

use crate::application::services::ExpiryScheduler;

/// A fixed local time of day, e.g. 00:05 at UTC+3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySchedule {
    pub at: NaiveTime,
    pub offset: FixedOffset,
}

impl DailySchedule {
    pub fn new(at: NaiveTime, offset: FixedOffset) -> Self {
        Self { at, offset }
    }

    /// Next run strictly after `now`.
    pub fn next_run_after(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let local_now = now.with_timezone(&self.offset).naive_local();
        let today_run = local_now.date().and_time(self.at);

        let next_local = if today_run > local_now {
            today_run
        } else {
            today_run + Duration::days(1)
        };

        let next_utc = next_local - Duration::seconds(i64::from(self.offset.local_minus_utc()));
        Utc.from_utc_datetime(&next_utc)
    }
}

/// Sleeps until each scheduled time and runs one tick.
///
/// Errors are logged and the loop continues with the next day's run.
pub async fn run_expiry_worker(scheduler: Arc<ExpiryScheduler>, schedule: DailySchedule) {
    loop {
        let now = Utc::now();
        let next = schedule.next_run_after(now);
        let wait = (next - now).to_std().unwrap_or_default();
        debug!(next_run = %next, "Next expiry check scheduled");

        tokio::time::sleep(wait).await;

        match scheduler.tick().await {
            Ok(0) => debug!("Expiry check finished, nothing new"),
            Ok(count) => info!("Expiry check finished, {} newly expired policies", count),
            Err(e) => error!("Expiry check failed: {}", e),
        }
    }
}
